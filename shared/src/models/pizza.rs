//! Pizza Model

use serde::{Deserialize, Serialize};

/// Pizza catalog entry
///
/// Pizza ids live in their own numeric-string id space ("1", "2", ...)
/// and are never compared against drink or dessert ids. Pizzas carry no
/// availability flag: a listed pizza is always orderable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pizza {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PizzaCreate {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    pub price: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PizzaUpdate {
    pub name: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub price: Option<f64>,
}
