//! Validating Order Calculator
//!
//! Resolves an order's item id lists against the catalogs and computes
//! the authoritative total. Any resolution failure aborts the whole
//! order; there is no partial pricing.
//!
//! Uses rust_decimal for the accumulation; the final total is rounded
//! once, to 2 decimal places.

use rust_decimal::prelude::*;

use shared::models::{Dessert, Drink, Pizza};
use shared::money::{to_decimal, to_f64};

/// Menu discount rate applied to the whole order when the gate is met
const MENU_DISCOUNT_PERCENT: i64 = 10;

/// Catalog category, for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Pizza,
    Drink,
    Dessert,
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Pizza => "Pizza",
            Self::Drink => "Drink",
            Self::Dessert => "Dessert",
        };
        write!(f, "{label}")
    }
}

/// Domain errors raised while validating an order's items
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    #[error("{kind} {id} not found")]
    NotFound { kind: CatalogKind, id: String },

    #[error("{kind} \"{name}\" is not available")]
    Unavailable { kind: CatalogKind, name: String },

    #[error("Order must contain at least one item")]
    EmptyOrder,
}

/// Validate item references and compute the order total
///
/// Walks the three id lists (quantities are expressed by repetition),
/// failing on the first unknown id or unavailable drink/dessert. The
/// 10% menu discount applies to the whole total once the order holds
/// ≥ 1 pizza, ≥ 1 alcohol-free drink and ≥ 1 dessert.
pub fn validate_and_price(
    pizza_catalog: &[Pizza],
    drink_catalog: &[Drink],
    dessert_catalog: &[Dessert],
    pizza_ids: &[String],
    drink_ids: &[i64],
    dessert_ids: &[i64],
) -> Result<f64, PricingError> {
    if pizza_ids.is_empty() && drink_ids.is_empty() && dessert_ids.is_empty() {
        return Err(PricingError::EmptyOrder);
    }

    let mut total = Decimal::ZERO;

    for pizza_id in pizza_ids {
        let pizza = pizza_catalog
            .iter()
            .find(|p| &p.id == pizza_id)
            .ok_or_else(|| PricingError::NotFound {
                kind: CatalogKind::Pizza,
                id: pizza_id.clone(),
            })?;
        // Pizzas carry no availability flag: listed means orderable
        total += to_decimal(pizza.price);
    }

    let mut has_soft_drink = false;
    for drink_id in drink_ids {
        let drink = drink_catalog
            .iter()
            .find(|d| d.id == *drink_id)
            .ok_or_else(|| PricingError::NotFound {
                kind: CatalogKind::Drink,
                id: drink_id.to_string(),
            })?;
        if !drink.available {
            return Err(PricingError::Unavailable {
                kind: CatalogKind::Drink,
                name: drink.name.clone(),
            });
        }
        total += to_decimal(drink.price);
        if !drink.with_alcohol {
            has_soft_drink = true;
        }
    }

    for dessert_id in dessert_ids {
        let dessert = dessert_catalog
            .iter()
            .find(|d| d.id == *dessert_id)
            .ok_or_else(|| PricingError::NotFound {
                kind: CatalogKind::Dessert,
                id: dessert_id.to_string(),
            })?;
        if !dessert.available {
            return Err(PricingError::Unavailable {
                kind: CatalogKind::Dessert,
                name: dessert.name.clone(),
            });
        }
        total += to_decimal(dessert.price);
    }

    // Menu gate: ≥ 1 pizza + ≥ 1 alcohol-free drink + ≥ 1 dessert
    // discounts the whole order once, regardless of how many complete
    // menus the items would form.
    let has_pizza = !pizza_ids.is_empty();
    let has_dessert = !dessert_ids.is_empty();
    if has_pizza && has_soft_drink && has_dessert {
        let rate = Decimal::ONE
            - Decimal::new(MENU_DISCOUNT_PERCENT, 0) / Decimal::ONE_HUNDRED;
        total *= rate;
    }

    // Single rounding of the final total
    Ok(to_f64(total))
}
