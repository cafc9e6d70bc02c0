use serde::Serialize;
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub slug: String,
    pub description: String,
}
