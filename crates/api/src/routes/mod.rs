pub mod categories;
pub mod reviews;
pub mod users;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};

use crate::error::INVALID_ENDPOINT_MESSAGE;
use crate::response::ErrorBody;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /categories                        GET   list
/// /reviews                           GET   list with comment counts
/// /reviews/{review_id}               GET   single review, PATCH votes
/// /reviews/{review_id}/comments      GET   list, POST create
/// /users                             GET   list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/reviews", reviews::router())
        .nest("/users", users::router())
}

/// Router fallback for any method/path combination with no handler.
pub async fn invalid_endpoint() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            message: INVALID_ENDPOINT_MESSAGE.to_string(),
        }),
    )
}
