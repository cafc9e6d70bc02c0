//! Handlers for reviews: listing, single lookup and vote increments.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tabletop_core::error::CoreError;
use tabletop_core::types::DbId;
use tabletop_db::models::review::UpdateReviewVotes;
use tabletop_db::repositories::ReviewRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::{ReviewsResponse, SingleReviewResponse, UpdatedReviewResponse};
use crate::state::AppState;

/// GET /api/reviews
///
/// All reviews with comment counts, oldest first.
pub async fn list_reviews(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let reviews = ReviewRepo::list_with_comment_counts(&state.pool).await?;

    Ok(Json(ReviewsResponse { reviews }))
}

/// GET /api/reviews/{review_id}
pub async fn get_review(
    State(state): State<AppState>,
    ApiPath(review_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let review = ReviewRepo::find_with_comment_count(&state.pool, review_id)
        .await?
        .ok_or_else(|| review_not_found(review_id))?;

    Ok(Json(SingleReviewResponse { reviews: review }))
}

/// PATCH /api/reviews/{review_id}
///
/// Adds `inc_votes` to the review's votes. An absent `inc_votes` is passed
/// through as NULL and rejected by the database as a missing field.
pub async fn update_review_votes(
    State(state): State<AppState>,
    ApiPath(review_id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateReviewVotes>,
) -> AppResult<impl IntoResponse> {
    let delta = input.inc_votes.map(|d| d.0);
    let review = ReviewRepo::increment_votes(&state.pool, review_id, delta)
        .await?
        .ok_or_else(|| review_not_found(review_id))?;

    tracing::info!(review_id, votes = review.votes, "Review votes updated");

    Ok((StatusCode::CREATED, Json(UpdatedReviewResponse { review })))
}

pub(crate) fn review_not_found(review_id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "review",
        id: review_id,
    })
}
