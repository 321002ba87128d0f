//! Drink Model

use serde::{Deserialize, Serialize};

/// Drink catalog entry
///
/// `with_alcohol` drives the promotional-menu rule: only alcohol-free
/// drinks are eligible for bundling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Drink {
    pub id: i64,
    pub name: String,
    pub price: f64,
    /// Serving size label, e.g. "33cl"
    pub size: String,
    pub with_alcohol: bool,
    #[serde(default = "default_true")]
    pub available: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkCreate {
    pub name: String,
    pub price: f64,
    pub size: String,
    pub with_alcohol: bool,
    #[serde(default = "default_true")]
    pub available: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub size: Option<String>,
    pub with_alcohol: Option<bool>,
    pub available: Option<bool>,
}
