//! Cart Line Model
//!
//! A cart line is one storefront selection: a catalog reference resolved
//! to its priced entity, plus a quantity. Lines are category-tagged on
//! the wire (`{"category": "pizza", ...}`) and keep each category's own
//! id space: pizza ids are strings, drink and dessert ids are integers.

use serde::{Deserialize, Serialize};

use super::ingredient::Ingredient;

/// Per-unit ingredient changes on a pizza
///
/// A customized pizza is a distinct identity from its base pizza: it is
/// priced with `extra_price` on top of the base and is never eligible
/// for promotional-menu bundling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PizzaCustomization {
    #[serde(default)]
    pub added_ingredients: Vec<Ingredient>,
    /// Ids of base-recipe ingredients left out
    #[serde(default)]
    pub removed_ingredients: Vec<String>,
    /// Surcharge already folded into the line's unit price
    #[serde(default)]
    pub extra_price: f64,
}

/// One cart or order-draft entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum CartLine {
    #[serde(rename_all = "camelCase")]
    Pizza {
        id: String,
        name: String,
        /// Unit price, customization surcharge included
        price: f64,
        quantity: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        customization: Option<PizzaCustomization>,
    },
    #[serde(rename_all = "camelCase")]
    Drink {
        id: i64,
        name: String,
        price: f64,
        quantity: u32,
        with_alcohol: bool,
    },
    #[serde(rename_all = "camelCase")]
    Dessert {
        id: i64,
        name: String,
        price: f64,
        quantity: u32,
    },
}

/// Grouping key for re-compacting expanded units: category + item id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LineKey {
    Pizza(String),
    Drink(i64),
    Dessert(i64),
}

impl CartLine {
    pub fn quantity(&self) -> u32 {
        match self {
            Self::Pizza { quantity, .. }
            | Self::Drink { quantity, .. }
            | Self::Dessert { quantity, .. } => *quantity,
        }
    }

    /// Unit price of the line
    pub fn price(&self) -> f64 {
        match self {
            Self::Pizza { price, .. }
            | Self::Drink { price, .. }
            | Self::Dessert { price, .. } => *price,
        }
    }

    pub fn key(&self) -> LineKey {
        match self {
            Self::Pizza { id, .. } => LineKey::Pizza(id.clone()),
            Self::Drink { id, .. } => LineKey::Drink(*id),
            Self::Dessert { id, .. } => LineKey::Dessert(*id),
        }
    }

    pub fn is_customized_pizza(&self) -> bool {
        matches!(
            self,
            Self::Pizza {
                customization: Some(_),
                ..
            }
        )
    }

    pub fn is_alcoholic_drink(&self) -> bool {
        matches!(
            self,
            Self::Drink {
                with_alcohol: true,
                ..
            }
        )
    }

    /// Clone of this line with quantity 1
    pub fn unit(&self) -> Self {
        let mut unit = self.clone();
        unit.set_quantity(1);
        unit
    }

    pub fn set_quantity(&mut self, value: u32) {
        match self {
            Self::Pizza { quantity, .. }
            | Self::Drink { quantity, .. }
            | Self::Dessert { quantity, .. } => *quantity = value,
        }
    }

    pub fn add_quantity(&mut self, extra: u32) {
        let current = self.quantity();
        self.set_quantity(current + extra);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_tagged_wire_format() {
        let line = CartLine::Drink {
            id: 4,
            name: "Bière".to_string(),
            price: 4.0,
            quantity: 2,
            with_alcohol: true,
        };
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["category"], "drink");
        assert_eq!(json["withAlcohol"], true);

        let back: CartLine = serde_json::from_value(json).unwrap();
        assert_eq!(back, line);
    }

    #[test]
    fn test_customization_omitted_when_absent() {
        let line = CartLine::Pizza {
            id: "1".to_string(),
            name: "Margherita".to_string(),
            price: 8.0,
            quantity: 1,
            customization: None,
        };
        let json = serde_json::to_value(&line).unwrap();
        assert!(json.get("customization").is_none());
    }

    #[test]
    fn test_keys_are_category_scoped() {
        let drink = CartLine::Drink {
            id: 1,
            name: "Coca-Cola".to_string(),
            price: 2.5,
            quantity: 1,
            with_alcohol: false,
        };
        let dessert = CartLine::Dessert {
            id: 1,
            name: "Tiramisu".to_string(),
            price: 5.0,
            quantity: 1,
        };
        // Same numeric id, different id space
        assert_ne!(drink.key(), dessert.key());
    }
}
