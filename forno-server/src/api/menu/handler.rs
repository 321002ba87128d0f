//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use shared::models::{Dessert, Drink, Pizza};

use crate::core::ServerState;
use crate::db::repository::{DessertRepository, DrinkRepository, PizzaRepository};
use crate::utils::{AppError, AppResult};

/// 全量菜单: 三个目录一次返回
#[derive(Debug, Serialize)]
pub struct FullMenu {
    pub pizzas: Vec<Pizza>,
    pub drinks: Vec<Drink>,
    pub desserts: Vec<Dessert>,
}

/// GET /api/menu - 获取全量菜单
pub async fn full_menu(State(state): State<ServerState>) -> AppResult<Json<FullMenu>> {
    let pizzas = PizzaRepository::new(state.db.clone()).find_all().await;
    let drinks = DrinkRepository::new(state.db.clone()).find_all(None).await;
    let desserts = DessertRepository::new(state.db.clone()).find_all(None).await;

    Ok(Json(FullMenu {
        pizzas,
        drinks,
        desserts,
    }))
}

/// GET /api/menu/{category} - 按分类获取菜单
pub async fn by_category(
    State(state): State<ServerState>,
    Path(category): Path<String>,
) -> AppResult<Response> {
    let response = match category.as_str() {
        "pizzas" => Json(PizzaRepository::new(state.db.clone()).find_all().await).into_response(),
        "drinks" => {
            Json(DrinkRepository::new(state.db.clone()).find_all(None).await).into_response()
        }
        "desserts" => {
            Json(DessertRepository::new(state.db.clone()).find_all(None).await).into_response()
        }
        _ => {
            return Err(AppError::not_found(format!(
                "Menu category {} not found",
                category
            )));
        }
    };
    Ok(response)
}
