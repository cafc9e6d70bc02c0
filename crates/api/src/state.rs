/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, opened at startup and closed after shutdown.
    pub pool: tabletop_db::DbPool,
}
