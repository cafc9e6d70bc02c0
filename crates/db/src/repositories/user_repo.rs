use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::user::User;

pub struct UserRepo;

impl UserRepo {
    /// List every user, ordered by username.
    pub async fn list_all(pool: &PgPool) -> DbResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT username, name, avatar_url FROM users ORDER BY username",
        )
        .fetch_all(pool)
        .await?;
        Ok(users)
    }
}
