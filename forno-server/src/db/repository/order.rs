//! Order Repository
//!
//! The one persisted collection: every mutation rewrites the full JSON
//! snapshot while the write lock is held.

use chrono::Utc;

use shared::models::{Order, OrderCreate};

use super::{RepoError, RepoResult};
use crate::db::Database;

#[derive(Clone)]
pub struct OrderRepository {
    db: Database,
}

impl OrderRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// List orders, optionally filtered by the processed flag
    pub async fn find_all(&self, processed: Option<bool>) -> Vec<Order> {
        let orders = self.db.orders().read().await;
        match processed {
            Some(flag) => orders
                .iter()
                .filter(|o| o.processed == flag)
                .cloned()
                .collect(),
            None => orders.clone(),
        }
    }

    pub async fn find_by_id(&self, id: i64) -> Option<Order> {
        self.db
            .orders()
            .read()
            .await
            .iter()
            .find(|o| o.id == id)
            .cloned()
    }

    /// Append a new order priced by the validating calculator
    pub async fn create(&self, items: OrderCreate, total_price: f64) -> RepoResult<Order> {
        let order = Order {
            id: self.db.allocate_order_id(),
            pizzas: items.pizzas,
            drinks: items.drinks,
            desserts: items.desserts,
            total_price,
            processed: false,
            created_at: Utc::now(),
        };

        let mut orders = self.db.orders().write().await;
        orders.push(order.clone());
        self.db.snapshot_orders(&orders).await?;
        Ok(order)
    }

    /// Replace the item lists and the recomputed total.
    /// The processed flag is left untouched.
    pub async fn replace_items(
        &self,
        id: i64,
        pizzas: Vec<String>,
        drinks: Vec<i64>,
        desserts: Vec<i64>,
        total_price: f64,
    ) -> RepoResult<Order> {
        let mut orders = self.db.orders().write().await;
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))?;

        order.pizzas = pizzas;
        order.drinks = drinks;
        order.desserts = desserts;
        order.total_price = total_price;
        let updated = order.clone();

        self.db.snapshot_orders(&orders).await?;
        Ok(updated)
    }

    /// Mark an order processed (terminal state)
    pub async fn set_processed(&self, id: i64) -> RepoResult<Order> {
        let mut orders = self.db.orders().write().await;
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))?;

        order.processed = true;
        let updated = order.clone();

        self.db.snapshot_orders(&orders).await?;
        Ok(updated)
    }

    /// Explicit total override (admin correction)
    pub async fn set_total_price(&self, id: i64, total_price: f64) -> RepoResult<Order> {
        let mut orders = self.db.orders().write().await;
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))?;

        order.total_price = total_price;
        let updated = order.clone();

        self.db.snapshot_orders(&orders).await?;
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut orders = self.db.orders().write().await;
        let before = orders.len();
        orders.retain(|o| o.id != id);
        if orders.len() == before {
            return Err(RepoError::NotFound(format!("Order {} not found", id)));
        }
        self.db.snapshot_orders(&orders).await?;
        Ok(())
    }
}
