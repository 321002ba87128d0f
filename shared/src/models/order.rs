//! Order Model
//!
//! Persisted order entity. Item quantities are expressed by repeating
//! the catalog id in the corresponding list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted order
///
/// Lifecycle: created (priced, `processed = false`) → processed
/// (terminal) → deleted. Item-list edits re-enter pricing but never
/// reset the `processed` flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Monotonic id, seeded from the highest persisted id at load time
    pub id: i64,
    /// Pizza ids (string id space)
    #[serde(default)]
    pub pizzas: Vec<String>,
    /// Drink ids
    #[serde(default)]
    pub drinks: Vec<i64>,
    /// Dessert ids
    #[serde(default)]
    pub desserts: Vec<i64>,
    /// Authoritative total at creation/last recompute time
    pub total_price: f64,
    #[serde(default)]
    pub processed: bool,
    pub created_at: DateTime<Utc>,
}

/// Order creation payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    #[serde(default)]
    pub pizzas: Vec<String>,
    #[serde(default)]
    pub drinks: Vec<i64>,
    #[serde(default)]
    pub desserts: Vec<i64>,
}

/// Partial item-list edit; any list present triggers a price recompute
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub pizzas: Option<Vec<String>>,
    pub drinks: Option<Vec<i64>>,
    pub desserts: Option<Vec<i64>>,
}

impl OrderUpdate {
    /// True when at least one item list is being replaced
    pub fn touches_items(&self) -> bool {
        self.pizzas.is_some() || self.drinks.is_some() || self.desserts.is_some()
    }
}
