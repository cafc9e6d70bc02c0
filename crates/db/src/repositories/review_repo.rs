//! Repository for the `reviews` table.
//!
//! `comment_count` is aggregated at read time with a LEFT JOIN so reviews
//! without comments report zero.

use sqlx::PgPool;
use tabletop_core::types::DbId;

use crate::error::DbResult;
use crate::models::review::{Review, ReviewWithCommentCount};

/// Column list for `reviews` queries.
const REVIEW_COLUMNS: &str = "\
    review_id, title, designer, owner, review_img_url, review_body, \
    category, votes, created_at";

/// Same columns qualified for the comment-count join.
const JOINED_REVIEW_COLUMNS: &str = "\
    r.review_id, r.title, r.designer, r.owner, r.review_img_url, r.review_body, \
    r.category, r.votes, r.created_at";

pub struct ReviewRepo;

impl ReviewRepo {
    /// List all reviews with their comment counts, oldest first.
    pub async fn list_with_comment_counts(pool: &PgPool) -> DbResult<Vec<ReviewWithCommentCount>> {
        let query = format!(
            "SELECT {JOINED_REVIEW_COLUMNS}, COUNT(c.comment_id) AS comment_count \
             FROM reviews r \
             LEFT JOIN comments c ON c.review_id = r.review_id \
             GROUP BY r.review_id \
             ORDER BY r.created_at ASC, r.review_id ASC"
        );
        let reviews = sqlx::query_as::<_, ReviewWithCommentCount>(&query)
            .fetch_all(pool)
            .await?;
        Ok(reviews)
    }

    /// Find a single review with its comment count.
    pub async fn find_with_comment_count(
        pool: &PgPool,
        review_id: DbId,
    ) -> DbResult<Option<ReviewWithCommentCount>> {
        let query = format!(
            "SELECT {JOINED_REVIEW_COLUMNS}, COUNT(c.comment_id) AS comment_count \
             FROM reviews r \
             LEFT JOIN comments c ON c.review_id = r.review_id \
             WHERE r.review_id = $1 \
             GROUP BY r.review_id"
        );
        let review = sqlx::query_as::<_, ReviewWithCommentCount>(&query)
            .bind(review_id)
            .fetch_optional(pool)
            .await?;
        Ok(review)
    }

    /// Whether a review with this id exists.
    pub async fn exists(pool: &PgPool, review_id: DbId) -> DbResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM reviews WHERE review_id = $1)")
                .bind(review_id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// Add `delta` to a review's votes in a single statement.
    ///
    /// A `None` delta is bound as NULL, which the NOT NULL constraint on
    /// `votes` rejects. Returns `None` if no review with the given id exists.
    pub async fn increment_votes(
        pool: &PgPool,
        review_id: DbId,
        delta: Option<i32>,
    ) -> DbResult<Option<Review>> {
        let query = format!(
            "UPDATE reviews SET votes = votes + $2 \
             WHERE review_id = $1 \
             RETURNING {REVIEW_COLUMNS}"
        );
        let review = sqlx::query_as::<_, Review>(&query)
            .bind(review_id)
            .bind(delta)
            .fetch_optional(pool)
            .await?;
        Ok(review)
    }
}
