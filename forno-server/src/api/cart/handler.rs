//! Cart API Handlers

use axum::Json;
use serde::{Deserialize, Serialize};

use shared::menu::{MenuBundle, detect_menus, quote_detection};
use shared::models::CartLine;

use crate::utils::AppResult;
use crate::utils::validation::validate_cart_line;

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub items: Vec<CartLine>,
}

/// Quote response: detected menus, grouped leftovers, and the totals
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub menus: Vec<MenuBundle>,
    pub remainder: Vec<CartLine>,
    pub subtotal: f64,
    pub menu_count: usize,
    pub menu_discount: f64,
    pub total: f64,
}

/// POST /api/cart/quote - 购物车报价 (菜单检测 + 预览价格)
pub async fn quote(Json(payload): Json<QuoteRequest>) -> AppResult<Json<QuoteResponse>> {
    for (index, line) in payload.items.iter().enumerate() {
        validate_cart_line(line, index)?;
    }

    let detection = detect_menus(&payload.items);
    let quote = quote_detection(&detection);

    Ok(Json(QuoteResponse {
        menus: detection.menus,
        remainder: detection.remainder,
        subtotal: quote.subtotal,
        menu_count: quote.menu_count,
        menu_discount: quote.menu_discount,
        total: quote.total,
    }))
}
