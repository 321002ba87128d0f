//! Ingredient Model
//!
//! The pizza-customizer catalog. Read-only: served to the storefront so
//! customers can build their own pizza on top of a base recipe.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    Base,
    Cheese,
    Meat,
    Vegetable,
    Sauce,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    /// Surcharge when added to a pizza (0 for included bases)
    pub price: f64,
    pub category: IngredientCategory,
}
