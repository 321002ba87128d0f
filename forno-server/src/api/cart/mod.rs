//! Cart API 模块
//!
//! 购物车报价: 前台在提交订单前展示的预览价格。按完整菜单逐个打折,
//! 与订单落库时的权威定价 (整单闸门折扣) 刻意不同。

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/cart/quote", post(handler::quote))
}
