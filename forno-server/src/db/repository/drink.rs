//! Drink Repository

use shared::models::{Drink, DrinkCreate, DrinkUpdate};

use super::{RepoError, RepoResult};
use crate::db::Database;

#[derive(Clone)]
pub struct DrinkRepository {
    db: Database,
}

impl DrinkRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// List drinks, optionally filtered by the available flag
    pub async fn find_all(&self, available: Option<bool>) -> Vec<Drink> {
        let drinks = self.db.drinks().read().await;
        match available {
            Some(flag) => drinks
                .iter()
                .filter(|d| d.available == flag)
                .cloned()
                .collect(),
            None => drinks.clone(),
        }
    }

    pub async fn find_by_id(&self, id: i64) -> Option<Drink> {
        self.db
            .drinks()
            .read()
            .await
            .iter()
            .find(|d| d.id == id)
            .cloned()
    }

    pub async fn create(&self, data: DrinkCreate) -> Drink {
        let mut drinks = self.db.drinks().write().await;
        let next_id = drinks.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        let drink = Drink {
            id: next_id,
            name: data.name,
            price: data.price,
            size: data.size,
            with_alcohol: data.with_alcohol,
            available: data.available,
        };
        drinks.push(drink.clone());
        drink
    }

    pub async fn update(&self, id: i64, data: DrinkUpdate) -> RepoResult<Drink> {
        let mut drinks = self.db.drinks().write().await;
        let drink = drinks
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Drink {} not found", id)))?;

        if let Some(name) = data.name {
            drink.name = name;
        }
        if let Some(price) = data.price {
            drink.price = price;
        }
        if let Some(size) = data.size {
            drink.size = size;
        }
        if let Some(with_alcohol) = data.with_alcohol {
            drink.with_alcohol = with_alcohol;
        }
        if let Some(available) = data.available {
            drink.available = available;
        }
        Ok(drink.clone())
    }

    pub async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut drinks = self.db.drinks().write().await;
        let before = drinks.len();
        drinks.retain(|d| d.id != id);
        if drinks.len() == before {
            return Err(RepoError::NotFound(format!("Drink {} not found", id)));
        }
        Ok(())
    }
}
