//! Repository for the `comments` table.

use sqlx::PgPool;
use tabletop_core::types::DbId;

use crate::error::DbResult;
use crate::models::comment::{Comment, CreateComment};

/// Column list for `comments` queries.
const COMMENT_COLUMNS: &str = "comment_id, body, votes, author, review_id, created_at";

pub struct CommentRepo;

impl CommentRepo {
    /// List the comments left on a review, newest first.
    pub async fn list_for_review(pool: &PgPool, review_id: DbId) -> DbResult<Vec<Comment>> {
        let query = format!(
            "SELECT {COMMENT_COLUMNS} FROM comments \
             WHERE review_id = $1 \
             ORDER BY created_at DESC, comment_id DESC"
        );
        let comments = sqlx::query_as::<_, Comment>(&query)
            .bind(review_id)
            .fetch_all(pool)
            .await?;
        Ok(comments)
    }

    /// Insert a comment on a review. `votes` and `created_at` take their
    /// column defaults.
    pub async fn create(
        pool: &PgPool,
        review_id: DbId,
        input: &CreateComment,
    ) -> DbResult<Comment> {
        let query = format!(
            "INSERT INTO comments (review_id, author, body) \
             VALUES ($1, $2, $3) \
             RETURNING {COMMENT_COLUMNS}"
        );
        let comment = sqlx::query_as::<_, Comment>(&query)
            .bind(review_id)
            .bind(input.author.as_deref())
            .bind(input.body.as_deref())
            .fetch_one(pool)
            .await?;
        Ok(comment)
    }
}
