use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tabletop_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::response::CategoriesResponse;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list_all(&state.pool).await?;

    Ok(Json(CategoriesResponse { categories }))
}
