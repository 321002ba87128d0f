//! Menu API 模块
//!
//! 聚合目录接口: 前台菜单页一次取全, 或按分类取

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/menu", get(handler::full_menu))
        .route("/api/menu/{category}", get(handler::by_category))
}
