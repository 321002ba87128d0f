//! Order API Handlers
//!
//! Order creation and item edits run the validating calculator before
//! anything is persisted; a single bad reference aborts the request.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::models::{Order, OrderCreate, OrderUpdate};

use crate::core::ServerState;
use crate::db::repository::OrderRepository;
use crate::pricing::validate_and_price;
use crate::utils::validation::validate_price;
use crate::utils::{AppError, AppResult};

/// Query params for listing orders
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Filter by the processed flag when present
    pub processed: Option<bool>,
}

/// Payload for the explicit total override
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalPriceUpdate {
    pub total_price: f64,
}

/// GET /api/orders - 获取订单列表 (可按 processed 过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.db.clone());
    Ok(Json(repo.find_all(query.processed).await))
}

/// GET /api/orders/{id} - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .find_by_id(id)
        .await
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;
    Ok(Json(order))
}

/// POST /api/orders - 创建订单 (校验 + 权威定价)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<Order>> {
    let (pizzas, drinks, desserts) = state.db.catalog_snapshot().await;
    let total_price = validate_and_price(
        &pizzas,
        &drinks,
        &desserts,
        &payload.pizzas,
        &payload.drinks,
        &payload.desserts,
    )?;

    let repo = OrderRepository::new(state.db.clone());
    let order = repo.create(payload, total_price).await?;

    tracing::info!(
        order_id = order.id,
        total_price = order.total_price,
        "Order created"
    );
    Ok(Json(order))
}

/// PUT /api/orders/{id} - 编辑订单条目 (触发重新定价)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<OrderUpdate>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.db.clone());
    let current = repo
        .find_by_id(id)
        .await
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;

    // Nothing to edit: hand the order back unchanged
    if !payload.touches_items() {
        return Ok(Json(current));
    }

    let pizzas = payload.pizzas.unwrap_or(current.pizzas);
    let drinks = payload.drinks.unwrap_or(current.drinks);
    let desserts = payload.desserts.unwrap_or(current.desserts);

    let (pizza_catalog, drink_catalog, dessert_catalog) = state.db.catalog_snapshot().await;
    let total_price = validate_and_price(
        &pizza_catalog,
        &drink_catalog,
        &dessert_catalog,
        &pizzas,
        &drinks,
        &desserts,
    )?;

    let order = repo
        .replace_items(id, pizzas, drinks, desserts, total_price)
        .await?;

    tracing::info!(
        order_id = order.id,
        total_price = order.total_price,
        "Order items updated"
    );
    Ok(Json(order))
}

/// PATCH /api/orders/{id}/processed - 标记订单已处理
pub async fn mark_processed(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo.set_processed(id).await?;

    tracing::info!(order_id = order.id, "Order marked as processed");
    Ok(Json(order))
}

/// PATCH /api/orders/{id}/total-price - 管理员总价覆盖
pub async fn set_total_price(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<TotalPriceUpdate>,
) -> AppResult<Json<Order>> {
    validate_price(payload.total_price, "totalPrice")?;

    let repo = OrderRepository::new(state.db.clone());
    let order = repo.set_total_price(id, payload.total_price).await?;

    tracing::info!(
        order_id = order.id,
        total_price = order.total_price,
        "Order total overridden"
    );
    Ok(Json(order))
}

/// DELETE /api/orders/{id} - 删除订单
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let repo = OrderRepository::new(state.db.clone());
    repo.delete(id).await?;

    tracing::info!(order_id = id, "Order deleted");
    Ok(Json(true))
}
