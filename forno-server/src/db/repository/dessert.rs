//! Dessert Repository

use shared::models::{Dessert, DessertCreate, DessertUpdate};

use super::{RepoError, RepoResult};
use crate::db::Database;

#[derive(Clone)]
pub struct DessertRepository {
    db: Database,
}

impl DessertRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// List desserts, optionally filtered by the available flag
    pub async fn find_all(&self, available: Option<bool>) -> Vec<Dessert> {
        let desserts = self.db.desserts().read().await;
        match available {
            Some(flag) => desserts
                .iter()
                .filter(|d| d.available == flag)
                .cloned()
                .collect(),
            None => desserts.clone(),
        }
    }

    pub async fn find_by_id(&self, id: i64) -> Option<Dessert> {
        self.db
            .desserts()
            .read()
            .await
            .iter()
            .find(|d| d.id == id)
            .cloned()
    }

    pub async fn create(&self, data: DessertCreate) -> Dessert {
        let mut desserts = self.db.desserts().write().await;
        let next_id = desserts.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        let dessert = Dessert {
            id: next_id,
            name: data.name,
            price: data.price,
            available: data.available,
        };
        desserts.push(dessert.clone());
        dessert
    }

    pub async fn update(&self, id: i64, data: DessertUpdate) -> RepoResult<Dessert> {
        let mut desserts = self.db.desserts().write().await;
        let dessert = desserts
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Dessert {} not found", id)))?;

        if let Some(name) = data.name {
            dessert.name = name;
        }
        if let Some(price) = data.price {
            dessert.price = price;
        }
        if let Some(available) = data.available {
            dessert.available = available;
        }
        Ok(dessert.clone())
    }

    pub async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut desserts = self.db.desserts().write().await;
        let before = desserts.len();
        desserts.retain(|d| d.id != id);
        if desserts.len() == before {
            return Err(RepoError::NotFound(format!("Dessert {} not found", id)));
        }
        Ok(())
    }
}
