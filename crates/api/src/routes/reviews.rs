use axum::routing::get;
use axum::Router;

use crate::handlers::{comments, reviews};
use crate::state::AppState;

/// Routes mounted at `/api/reviews`.
///
/// ```text
/// GET    /                         -> list_reviews
/// GET    /{review_id}              -> get_review
/// PATCH  /{review_id}              -> update_review_votes
/// GET    /{review_id}/comments     -> list_comments
/// POST   /{review_id}/comments     -> create_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reviews::list_reviews))
        .route(
            "/{review_id}",
            get(reviews::get_review).patch(reviews::update_review_votes),
        )
        .route(
            "/{review_id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
}
