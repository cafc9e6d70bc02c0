use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::category::Category;

pub struct CategoryRepo;

impl CategoryRepo {
    /// List every category, ordered by slug.
    pub async fn list_all(pool: &PgPool) -> DbResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT slug, description FROM categories ORDER BY slug",
        )
        .fetch_all(pool)
        .await?;
        Ok(categories)
    }
}
