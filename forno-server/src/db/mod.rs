//! Storage Layer
//!
//! Catalogs (pizzas, drinks, desserts) are in-memory collections seeded
//! at startup; they are not persisted. Orders are held in memory too,
//! but the whole list is snapshotted to `orders.json` after every
//! mutation and reloaded on the next start.
//!
//! Each collection sits behind its own `tokio::sync::RwLock`; order
//! mutations write the snapshot while still holding the write lock, so
//! there is never more than one writer touching the list or its file.

pub mod repository;
pub mod seed;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use tokio::sync::RwLock;

use shared::models::{Dessert, Drink, Order, Pizza};

use repository::RepoResult;

const ORDERS_FILE: &str = "orders.json";

/// Storage handle - 持有所有集合的共享引用
///
/// 使用 Arc 实现浅拷贝，所有权成本极低。Repository 按需构造并持有
/// 一个 clone。
#[derive(Clone, Debug)]
pub struct Database {
    inner: Arc<DatabaseInner>,
}

#[derive(Debug)]
struct DatabaseInner {
    pizzas: RwLock<Vec<Pizza>>,
    drinks: RwLock<Vec<Drink>>,
    desserts: RwLock<Vec<Dessert>>,
    orders: RwLock<Vec<Order>>,
    /// Monotonic order id counter, seeded past the highest persisted id
    next_order_id: AtomicI64,
    orders_file: PathBuf,
}

impl Database {
    /// Open the store: seed the catalogs and load the order snapshot
    pub async fn open(data_dir: &Path) -> RepoResult<Self> {
        tokio::fs::create_dir_all(data_dir).await?;

        let orders_file = data_dir.join(ORDERS_FILE);
        let orders: Vec<Order> = match tokio::fs::read(&orders_file).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        let next_order_id = orders.iter().map(|o| o.id).max().unwrap_or(0) + 1;
        tracing::info!(
            orders = orders.len(),
            next_order_id,
            "Order snapshot loaded"
        );

        Ok(Self {
            inner: Arc::new(DatabaseInner {
                pizzas: RwLock::new(seed::default_pizzas()),
                drinks: RwLock::new(seed::default_drinks()),
                desserts: RwLock::new(seed::default_desserts()),
                orders: RwLock::new(orders),
                next_order_id: AtomicI64::new(next_order_id),
                orders_file,
            }),
        })
    }

    pub(crate) fn pizzas(&self) -> &RwLock<Vec<Pizza>> {
        &self.inner.pizzas
    }

    pub(crate) fn drinks(&self) -> &RwLock<Vec<Drink>> {
        &self.inner.drinks
    }

    pub(crate) fn desserts(&self) -> &RwLock<Vec<Dessert>> {
        &self.inner.desserts
    }

    pub(crate) fn orders(&self) -> &RwLock<Vec<Order>> {
        &self.inner.orders
    }

    pub(crate) fn allocate_order_id(&self) -> i64 {
        self.inner.next_order_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Clone all three catalogs for a pricing pass
    pub async fn catalog_snapshot(&self) -> (Vec<Pizza>, Vec<Drink>, Vec<Dessert>) {
        let pizzas = self.inner.pizzas.read().await.clone();
        let drinks = self.inner.drinks.read().await.clone();
        let desserts = self.inner.desserts.read().await.clone();
        (pizzas, drinks, desserts)
    }

    /// Write the full order list to disk
    ///
    /// Callers hold the order write lock across this call.
    pub(crate) async fn snapshot_orders(&self, orders: &[Order]) -> RepoResult<()> {
        let bytes = serde_json::to_vec_pretty(orders)?;
        tokio::fs::write(&self.inner.orders_file, bytes).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::repository::OrderRepository;
    use shared::models::OrderCreate;

    fn draft(pizzas: &[&str], drinks: &[i64], desserts: &[i64]) -> OrderCreate {
        OrderCreate {
            pizzas: pizzas.iter().map(|s| s.to_string()).collect(),
            drinks: drinks.to_vec(),
            desserts: desserts.to_vec(),
        }
    }

    #[tokio::test]
    async fn test_open_seeds_catalogs() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path()).await.unwrap();

        let (pizzas, drinks, desserts) = db.catalog_snapshot().await;
        assert!(!pizzas.is_empty());
        assert!(!drinks.is_empty());
        assert!(!desserts.is_empty());
        // Fresh store starts counting orders at 1
        assert_eq!(db.allocate_order_id(), 1);
    }

    #[tokio::test]
    async fn test_order_roundtrip_through_snapshot() {
        let dir = tempfile::tempdir().unwrap();

        let created = {
            let db = Database::open(dir.path()).await.unwrap();
            let repo = OrderRepository::new(db);
            repo.create(draft(&["1"], &[1], &[1]), 13.95).await.unwrap()
        };

        // Reopen from the same directory: same order comes back
        let db = Database::open(dir.path()).await.unwrap();
        let repo = OrderRepository::new(db.clone());
        let reloaded = repo.find_by_id(created.id).await.unwrap();

        assert_eq!(reloaded, created);
        assert_eq!(reloaded.total_price, 13.95);
        assert!(!reloaded.processed);
        // Id counter continues past the persisted maximum
        assert_eq!(db.allocate_order_id(), created.id + 1);
    }

    #[tokio::test]
    async fn test_snapshot_written_after_each_mutation() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path()).await.unwrap();
        let repo = OrderRepository::new(db);

        let order = repo.create(draft(&["1"], &[], &[]), 8.0).await.unwrap();
        repo.set_processed(order.id).await.unwrap();

        let bytes = std::fs::read(dir.path().join(ORDERS_FILE)).unwrap();
        let on_disk: Vec<Order> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(on_disk.len(), 1);
        assert!(on_disk[0].processed);
    }
}
