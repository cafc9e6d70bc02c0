//! Handlers for the comments nested under a review.
//!
//! Both endpoints check that the review exists first so that an unknown
//! review reports not-found rather than an empty list or a foreign key
//! violation.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tabletop_core::types::DbId;
use tabletop_db::models::comment::CreateComment;
use tabletop_db::repositories::{CommentRepo, ReviewRepo};

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::handlers::reviews::review_not_found;
use crate::response::{CommentResponse, CommentsResponse};
use crate::state::AppState;

/// GET /api/reviews/{review_id}/comments
///
/// Newest first.
pub async fn list_comments(
    State(state): State<AppState>,
    ApiPath(review_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_review_exists(&state, review_id).await?;

    let comments = CommentRepo::list_for_review(&state.pool, review_id).await?;

    Ok(Json(CommentsResponse { comments }))
}

/// POST /api/reviews/{review_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    ApiPath(review_id): ApiPath<DbId>,
    ApiJson(input): ApiJson<CreateComment>,
) -> AppResult<impl IntoResponse> {
    ensure_review_exists(&state, review_id).await?;

    let comment = CommentRepo::create(&state.pool, review_id, &input).await?;

    tracing::info!(
        review_id,
        comment_id = comment.comment_id,
        author = %comment.author,
        "Comment created",
    );

    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

async fn ensure_review_exists(state: &AppState, review_id: DbId) -> AppResult<()> {
    if !ReviewRepo::exists(&state.pool, review_id).await? {
        return Err(review_not_found(review_id));
    }
    Ok(())
}
