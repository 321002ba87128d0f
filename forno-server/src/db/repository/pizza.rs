//! Pizza Repository

use shared::models::{Pizza, PizzaCreate, PizzaUpdate};

use super::{RepoError, RepoResult};
use crate::db::Database;

#[derive(Clone)]
pub struct PizzaRepository {
    db: Database,
}

impl PizzaRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Vec<Pizza> {
        self.db.pizzas().read().await.clone()
    }

    /// Filter by maximum price and/or a (case-insensitive) ingredient substring
    pub async fn search(&self, max_price: Option<f64>, ingredient: Option<&str>) -> Vec<Pizza> {
        let needle = ingredient.map(str::to_lowercase);
        self.db
            .pizzas()
            .read()
            .await
            .iter()
            .filter(|p| max_price.is_none_or(|max| p.price <= max))
            .filter(|p| {
                needle.as_ref().is_none_or(|n| {
                    p.ingredients
                        .iter()
                        .any(|ing| ing.to_lowercase().contains(n))
                })
            })
            .cloned()
            .collect()
    }

    pub async fn find_by_id(&self, id: &str) -> Option<Pizza> {
        self.db
            .pizzas()
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    /// Create a pizza; the id continues the numeric-string sequence
    pub async fn create(&self, data: PizzaCreate) -> Pizza {
        let mut pizzas = self.db.pizzas().write().await;
        let next_id = pizzas
            .iter()
            .filter_map(|p| p.id.parse::<i64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        let pizza = Pizza {
            id: next_id.to_string(),
            name: data.name,
            ingredients: data.ingredients,
            price: data.price,
        };
        pizzas.push(pizza.clone());
        pizza
    }

    pub async fn update(&self, id: &str, data: PizzaUpdate) -> RepoResult<Pizza> {
        let mut pizzas = self.db.pizzas().write().await;
        let pizza = pizzas
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Pizza {} not found", id)))?;

        if let Some(name) = data.name {
            pizza.name = name;
        }
        if let Some(ingredients) = data.ingredients {
            pizza.ingredients = ingredients;
        }
        if let Some(price) = data.price {
            pizza.price = price;
        }
        Ok(pizza.clone())
    }

    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let mut pizzas = self.db.pizzas().write().await;
        let before = pizzas.len();
        pizzas.retain(|p| p.id != id);
        if pizzas.len() == before {
            return Err(RepoError::NotFound(format!("Pizza {} not found", id)));
        }
        Ok(())
    }
}
