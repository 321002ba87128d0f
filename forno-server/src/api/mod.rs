//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`pizzas`] - 披萨目录接口
//! - [`drinks`] - 饮品目录接口
//! - [`desserts`] - 甜点目录接口
//! - [`menu`] - 菜单聚合接口
//! - [`ingredients`] - 自选配料目录接口
//! - [`cart`] - 购物车报价接口
//! - [`orders`] - 订单管理接口

pub mod cart;
pub mod desserts;
pub mod drinks;
pub mod health;
pub mod ingredients;
pub mod menu;
pub mod orders;
pub mod pizzas;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::core::ServerState;

/// 构建应用路由: 所有资源路由 + 中间件
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(pizzas::router())
        .merge(drinks::router())
        .merge(desserts::router())
        .merge(menu::router())
        .merge(ingredients::router())
        .merge(cart::router())
        .merge(orders::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
