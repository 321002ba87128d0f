//! Pizza API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::models::{Pizza, PizzaCreate, PizzaUpdate};

use crate::core::ServerState;
use crate::db::repository::PizzaRepository;
use crate::utils::validation::{
    MAX_INGREDIENT_LEN, MAX_NAME_LEN, validate_optional_price, validate_optional_text,
    validate_price, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Query params for pizza search
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub max_price: Option<f64>,
    pub ingredient: Option<String>,
}

fn validate_ingredients(ingredients: &[String]) -> Result<(), AppError> {
    for ingredient in ingredients {
        validate_required_text(ingredient, "ingredient", MAX_INGREDIENT_LEN)?;
    }
    Ok(())
}

/// GET /api/pizzas - 获取所有披萨
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Pizza>>> {
    let repo = PizzaRepository::new(state.db.clone());
    Ok(Json(repo.find_all().await))
}

/// GET /api/pizzas/search - 按最高价格/配料搜索披萨
pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Pizza>>> {
    if let Some(max_price) = query.max_price {
        validate_price(max_price, "maxPrice")?;
    }
    let repo = PizzaRepository::new(state.db.clone());
    let pizzas = repo
        .search(query.max_price, query.ingredient.as_deref())
        .await;
    Ok(Json(pizzas))
}

/// GET /api/pizzas/{id} - 获取单个披萨
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Pizza>> {
    let repo = PizzaRepository::new(state.db.clone());
    let pizza = repo
        .find_by_id(&id)
        .await
        .ok_or_else(|| AppError::not_found(format!("Pizza {} not found", id)))?;
    Ok(Json(pizza))
}

/// POST /api/pizzas - 创建披萨
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PizzaCreate>,
) -> AppResult<Json<Pizza>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_price(payload.price, "price")?;
    validate_ingredients(&payload.ingredients)?;

    let repo = PizzaRepository::new(state.db.clone());
    let pizza = repo.create(payload).await;

    tracing::info!(id = %pizza.id, name = %pizza.name, "Pizza created");
    Ok(Json(pizza))
}

/// PUT /api/pizzas/{id} - 更新披萨
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<PizzaUpdate>,
) -> AppResult<Json<Pizza>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_price(payload.price, "price")?;
    if let Some(ref ingredients) = payload.ingredients {
        validate_ingredients(ingredients)?;
    }

    let repo = PizzaRepository::new(state.db.clone());
    let pizza = repo.update(&id, payload).await?;
    Ok(Json(pizza))
}

/// DELETE /api/pizzas/{id} - 删除披萨
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = PizzaRepository::new(state.db.clone());
    repo.delete(&id).await?;

    tracing::info!(id = %id, "Pizza deleted");
    Ok(Json(true))
}
