//! Comment model and the create DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tabletop_core::types::{DbId, Timestamp};

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub comment_id: DbId,
    pub body: String,
    pub votes: i32,
    pub author: String,
    pub review_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for `POST /api/reviews/{review_id}/comments`.
///
/// Both fields are optional here so that an absent value reaches the
/// database as NULL and is reported as a not-null violation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateComment {
    #[serde(alias = "username")]
    pub author: Option<String>,
    pub body: Option<String>,
}
