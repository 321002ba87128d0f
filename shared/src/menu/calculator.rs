//! Cart Quote Calculator
//!
//! Prices a bundling result for the checkout preview. Trusts the
//! catalog data already resolved onto the lines; availability checks
//! belong to the order-creation path, before items ever reach a cart.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::CartLine;
use crate::money::{to_decimal, to_f64};

use super::{MenuDetection, detect_menus};

/// Cart totals with menu discounts applied per detected bundle
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartQuote {
    /// Pre-discount total over every unit, bundled or not
    pub subtotal: f64,
    pub menu_count: usize,
    /// Sum of the per-bundle discounts
    pub menu_discount: f64,
    /// `subtotal - menu_discount`
    pub total: f64,
}

/// Quote a cart: detect menus, then derive the totals
pub fn quote_cart(items: &[CartLine]) -> CartQuote {
    quote_detection(&detect_menus(items))
}

/// Derive totals from an existing detection result
pub fn quote_detection(detection: &MenuDetection) -> CartQuote {
    let bundled: Decimal = detection
        .menus
        .iter()
        .map(|menu| to_decimal(menu.original_price))
        .sum();
    let remaining: Decimal = detection
        .remainder
        .iter()
        .map(|line| to_decimal(line.price()) * Decimal::from(line.quantity()))
        .sum();
    let discount: Decimal = detection
        .menus
        .iter()
        .map(|menu| to_decimal(menu.discount))
        .sum();

    let subtotal = bundled + remaining;
    CartQuote {
        subtotal: to_f64(subtotal),
        menu_count: detection.menus.len(),
        menu_discount: to_f64(discount),
        total: to_f64(subtotal - discount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pizza(id: &str, price: f64, quantity: u32) -> CartLine {
        CartLine::Pizza {
            id: id.to_string(),
            name: format!("Pizza {id}"),
            price,
            quantity,
            customization: None,
        }
    }

    fn drink(id: i64, price: f64, with_alcohol: bool, quantity: u32) -> CartLine {
        CartLine::Drink {
            id,
            name: format!("Drink {id}"),
            price,
            quantity,
            with_alcohol,
        }
    }

    fn dessert(id: i64, price: f64, quantity: u32) -> CartLine {
        CartLine::Dessert {
            id,
            name: format!("Dessert {id}"),
            price,
            quantity,
        }
    }

    #[test]
    fn test_quote_single_menu() {
        let items = vec![pizza("1", 8.0, 1), drink(1, 2.5, false, 1), dessert(1, 5.0, 1)];
        let quote = quote_cart(&items);

        assert_eq!(quote.subtotal, 15.5);
        assert_eq!(quote.menu_count, 1);
        assert_eq!(quote.menu_discount, 1.55);
        assert_eq!(quote.total, 13.95);
    }

    #[test]
    fn test_quote_no_menu() {
        let items = vec![pizza("1", 8.0, 2)];
        let quote = quote_cart(&items);

        assert_eq!(quote.subtotal, 16.0);
        assert_eq!(quote.menu_count, 0);
        assert_eq!(quote.menu_discount, 0.0);
        assert_eq!(quote.total, 16.0);
    }

    #[test]
    fn test_subtotal_ignores_discount() {
        // Subtotal is the pre-discount total; only `total` moves
        let items = vec![
            pizza("1", 8.0, 1),
            drink(1, 2.5, false, 1),
            drink(4, 4.0, true, 1),
            dessert(1, 5.0, 1),
        ];
        let quote = quote_cart(&items);

        assert_eq!(quote.subtotal, 19.5);
        assert_eq!(quote.menu_discount, 1.55);
        assert_eq!(quote.total, 17.95);
    }

    #[test]
    fn test_discount_scales_per_bundle() {
        // Two complete menus at different prices each take their own 10%
        let items = vec![
            pizza("1", 8.0, 1),
            pizza("2", 10.0, 1),
            drink(1, 2.5, false, 2),
            dessert(1, 5.0, 2),
        ];
        let quote = quote_cart(&items);

        assert_eq!(quote.menu_count, 2);
        // 15.5 * 0.1 + 17.5 * 0.1
        assert_eq!(quote.menu_discount, 3.3);
        assert_eq!(quote.subtotal, 33.0);
        assert_eq!(quote.total, 29.7);
    }

    #[test]
    fn test_leftover_pizza_not_discounted() {
        // 2 pizzas + 1 drink + 1 dessert: one menu's worth of discount
        let items = vec![
            pizza("1", 8.0, 1),
            pizza("2", 10.0, 1),
            drink(1, 2.5, false, 1),
            dessert(1, 5.0, 1),
        ];
        let quote = quote_cart(&items);

        assert_eq!(quote.subtotal, 25.5);
        assert_eq!(quote.menu_count, 1);
        assert_eq!(quote.menu_discount, 1.55);
        assert_eq!(quote.total, 23.95);
    }

    #[test]
    fn test_empty_cart() {
        let quote = quote_cart(&[]);
        assert_eq!(quote, CartQuote::default());
    }
}
