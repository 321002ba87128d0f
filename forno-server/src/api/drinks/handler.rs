//! Drink API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::models::{Drink, DrinkCreate, DrinkUpdate};

use crate::core::ServerState;
use crate::db::repository::DrinkRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SIZE_LEN, validate_optional_price, validate_optional_text, validate_price,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Query params for listing drinks
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Filter by the available flag when present
    pub available: Option<bool>,
}

/// GET /api/drinks - 获取饮品列表 (可按 available 过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Drink>>> {
    let repo = DrinkRepository::new(state.db.clone());
    Ok(Json(repo.find_all(query.available).await))
}

/// GET /api/drinks/{id} - 获取单个饮品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Drink>> {
    let repo = DrinkRepository::new(state.db.clone());
    let drink = repo
        .find_by_id(id)
        .await
        .ok_or_else(|| AppError::not_found(format!("Drink {} not found", id)))?;
    Ok(Json(drink))
}

/// POST /api/drinks - 创建饮品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DrinkCreate>,
) -> AppResult<Json<Drink>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.size, "size", MAX_SIZE_LEN)?;
    validate_price(payload.price, "price")?;

    let repo = DrinkRepository::new(state.db.clone());
    let drink = repo.create(payload).await;

    tracing::info!(id = drink.id, name = %drink.name, "Drink created");
    Ok(Json(drink))
}

/// PUT /api/drinks/{id} - 更新饮品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<DrinkUpdate>,
) -> AppResult<Json<Drink>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.size, "size", MAX_SIZE_LEN)?;
    validate_optional_price(payload.price, "price")?;

    let repo = DrinkRepository::new(state.db.clone());
    let drink = repo.update(id, payload).await?;
    Ok(Json(drink))
}

/// DELETE /api/drinks/{id} - 删除饮品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let repo = DrinkRepository::new(state.db.clone());
    repo.delete(id).await?;

    tracing::info!(id = id, "Drink deleted");
    Ok(Json(true))
}
