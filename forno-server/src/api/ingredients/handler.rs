//! Ingredient API Handlers

use axum::Json;

use shared::models::Ingredient;

use crate::db::seed;

/// GET /api/ingredients - 获取自选配料目录 (只读)
pub async fn list() -> Json<Vec<Ingredient>> {
    Json(seed::ingredient_catalog())
}
