//! Dessert API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::models::{Dessert, DessertCreate, DessertUpdate};

use crate::core::ServerState;
use crate::db::repository::DessertRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, validate_optional_price, validate_optional_text, validate_price,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Query params for listing desserts
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Filter by the available flag when present
    pub available: Option<bool>,
}

/// GET /api/desserts - 获取甜点列表 (可按 available 过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Dessert>>> {
    let repo = DessertRepository::new(state.db.clone());
    Ok(Json(repo.find_all(query.available).await))
}

/// GET /api/desserts/{id} - 获取单个甜点
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Dessert>> {
    let repo = DessertRepository::new(state.db.clone());
    let dessert = repo
        .find_by_id(id)
        .await
        .ok_or_else(|| AppError::not_found(format!("Dessert {} not found", id)))?;
    Ok(Json(dessert))
}

/// POST /api/desserts - 创建甜点
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DessertCreate>,
) -> AppResult<Json<Dessert>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_price(payload.price, "price")?;

    let repo = DessertRepository::new(state.db.clone());
    let dessert = repo.create(payload).await;

    tracing::info!(id = dessert.id, name = %dessert.name, "Dessert created");
    Ok(Json(dessert))
}

/// PUT /api/desserts/{id} - 更新甜点
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<DessertUpdate>,
) -> AppResult<Json<Dessert>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_price(payload.price, "price")?;

    let repo = DessertRepository::new(state.db.clone());
    let dessert = repo.update(id, payload).await?;
    Ok(Json(dessert))
}

/// DELETE /api/desserts/{id} - 删除甜点
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let repo = DessertRepository::new(state.db.clone());
    repo.delete(id).await?;

    tracing::info!(id = id, "Dessert deleted");
    Ok(Json(true))
}
