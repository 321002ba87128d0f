//! Dessert Model

use serde::{Deserialize, Serialize};

/// Dessert catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dessert {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default = "default_true")]
    pub available: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DessertCreate {
    pub name: String,
    pub price: f64,
    #[serde(default = "default_true")]
    pub available: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DessertUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub available: Option<bool>,
}
