//! Review models and DTOs.

use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;
use tabletop_core::types::{DbId, Timestamp};
use tabletop_core::votes::VoteDelta;

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub review_id: DbId,
    pub title: String,
    pub designer: String,
    pub owner: String,
    pub review_img_url: String,
    pub review_body: String,
    pub category: String,
    pub votes: i32,
    pub created_at: Timestamp,
}

/// A review annotated with the number of comments left on it.
///
/// `comment_count` is serialized as a string (`"3"`), which is what API
/// clients already consume.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReviewWithCommentCount {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub review: Review,
    #[serde(serialize_with = "count_as_string")]
    pub comment_count: i64,
}

fn count_as_string<S: Serializer>(count: &i64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(count)
}

/// DTO for `PATCH /api/reviews/{review_id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateReviewVotes {
    /// `None` when the key is absent or null.
    pub inc_votes: Option<VoteDelta>,
}
