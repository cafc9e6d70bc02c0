//! PostgreSQL access for the reviews service: pool lifecycle, row models and
//! one repository per resource.

use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod models;
pub mod repositories;

pub use error::{DbError, DbResult};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    tracing::debug!(max_connections, "Opening database pool");
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
