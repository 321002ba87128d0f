//! Menu Bundler
//!
//! Partitions a cart into the maximum number of valid promotional menus
//! plus a remainder, deterministically.
//!
//! A menu is exactly one pizza unit + one alcohol-free drink unit + one
//! dessert unit. Customized pizzas and alcoholic drinks are never
//! bundled. Units are paired in encounter order, not by price: the
//! pairing affects which units end up discounted but never how many
//! menus fit.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::CartLine;
use crate::money::{to_decimal, to_f64};

/// Menu discount rate: 10% of the bundle's combined price
const MENU_DISCOUNT_PERCENT: i64 = 10;

/// One detected promotional menu
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuBundle {
    /// The bundled pizza unit (quantity 1)
    pub pizza: CartLine,
    /// The bundled alcohol-free drink unit (quantity 1)
    pub drink: CartLine,
    /// The bundled dessert unit (quantity 1)
    pub dessert: CartLine,
    /// Sum of the three unit prices
    pub original_price: f64,
    /// 10% of the original price, rounded half-up
    pub discount: f64,
    pub discounted_price: f64,
}

/// Bundling result: detected menus plus the re-grouped leftovers
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MenuDetection {
    pub menus: Vec<MenuBundle>,
    pub remainder: Vec<CartLine>,
}

/// Detect promotional menus in a cart
///
/// Quantities are expanded to individual units internally; the
/// remainder is re-grouped by (category, item id) before being
/// returned, so callers only ever see compact lines. Customized pizza
/// lines pass through untouched: never expanded, never merged, never
/// bundled.
pub fn detect_menus(items: &[CartLine]) -> MenuDetection {
    let mut pizza_units = Vec::new();
    let mut customized_pizzas = Vec::new();
    let mut soft_drink_units = Vec::new();
    let mut alcoholic_drink_units = Vec::new();
    let mut dessert_units = Vec::new();

    for line in items {
        match line {
            CartLine::Pizza {
                customization: Some(_),
                ..
            } => customized_pizzas.push(line.clone()),
            CartLine::Pizza { .. } => expand_units(line, &mut pizza_units),
            CartLine::Drink {
                with_alcohol: true, ..
            } => expand_units(line, &mut alcoholic_drink_units),
            CartLine::Drink { .. } => expand_units(line, &mut soft_drink_units),
            CartLine::Dessert { .. } => expand_units(line, &mut dessert_units),
        }
    }

    let menu_count = pizza_units
        .len()
        .min(soft_drink_units.len())
        .min(dessert_units.len());

    let mut menus = Vec::with_capacity(menu_count);
    for i in 0..menu_count {
        menus.push(make_bundle(
            pizza_units[i].clone(),
            soft_drink_units[i].clone(),
            dessert_units[i].clone(),
        ));
    }

    let mut remainder = Vec::new();
    remainder.extend(group_units(&pizza_units[menu_count..]));
    remainder.extend(group_units(&soft_drink_units[menu_count..]));
    remainder.extend(group_units(&dessert_units[menu_count..]));
    remainder.extend(group_units(&alcoholic_drink_units));
    remainder.extend(customized_pizzas);

    MenuDetection { menus, remainder }
}

/// Expand a line into single-quantity unit instances
fn expand_units(line: &CartLine, pool: &mut Vec<CartLine>) {
    for _ in 0..line.quantity() {
        pool.push(line.unit());
    }
}

/// Re-group unit instances by (category, item id), summing quantities
fn group_units(units: &[CartLine]) -> Vec<CartLine> {
    let mut grouped: Vec<CartLine> = Vec::new();
    for unit in units {
        match grouped.iter_mut().find(|line| line.key() == unit.key()) {
            Some(line) => line.add_quantity(1),
            None => grouped.push(unit.clone()),
        }
    }
    grouped
}

fn make_bundle(pizza: CartLine, drink: CartLine, dessert: CartLine) -> MenuBundle {
    let original =
        to_decimal(pizza.price()) + to_decimal(drink.price()) + to_decimal(dessert.price());
    let discount = original * Decimal::new(MENU_DISCOUNT_PERCENT, 0) / Decimal::ONE_HUNDRED;
    // Round the discount at the point of computation; the discounted
    // price is derived from the rounded figure so both stay consistent.
    let discount = to_f64(discount);
    MenuBundle {
        pizza,
        drink,
        dessert,
        original_price: to_f64(original),
        discount,
        discounted_price: to_f64(original - to_decimal(discount)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ingredient, IngredientCategory, PizzaCustomization};

    fn pizza(id: &str, price: f64, quantity: u32) -> CartLine {
        CartLine::Pizza {
            id: id.to_string(),
            name: format!("Pizza {id}"),
            price,
            quantity,
            customization: None,
        }
    }

    fn customized_pizza(id: &str, price: f64, quantity: u32) -> CartLine {
        CartLine::Pizza {
            id: id.to_string(),
            name: format!("Pizza {id}"),
            price,
            quantity,
            customization: Some(PizzaCustomization {
                added_ingredients: vec![Ingredient {
                    id: "chorizo".to_string(),
                    name: "Chorizo".to_string(),
                    price: 2.5,
                    category: IngredientCategory::Meat,
                }],
                removed_ingredients: vec![],
                extra_price: 2.5,
            }),
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

    fn total_quantity(detection: &MenuDetection) -> u32 {
        let bundled: u32 = detection.menus.len() as u32 * 3;
        let rest: u32 = detection.remainder.iter().map(|l| l.quantity()).sum();
        bundled + rest
    }

    #[test]
    fn test_single_complete_menu() {
        // 1 pizza (8) + 1 soft drink (2.5) + 1 dessert (5)
        let items = vec![pizza("1", 8.0, 1), drink(1, 2.5, false, 1), dessert(1, 5.0, 1)];
        let detection = detect_menus(&items);

        assert_eq!(detection.menus.len(), 1);
        assert!(detection.remainder.is_empty());

        let menu = &detection.menus[0];
        assert_eq!(menu.original_price, 15.5);
        assert_eq!(menu.discount, 1.55);
        assert_eq!(menu.discounted_price, 13.95);
    }

    #[test]
    fn test_dessert_count_limits_menus() {
        // 2 pizzas (8, 10) + 1 soft drink + 1 beer + 1 dessert
        let items = vec![
            pizza("1", 8.0, 1),
            pizza("2", 10.0, 1),
            drink(1, 2.5, false, 1),
            drink(4, 4.0, true, 1),
            dessert(1, 5.0, 1),
        ];
        let detection = detect_menus(&items);

        assert_eq!(detection.menus.len(), 1);
        // First-encountered pizza goes into the menu
        assert_eq!(detection.menus[0].pizza.price(), 8.0);

        assert_eq!(
            detection.remainder,
            vec![pizza("2", 10.0, 1), drink(4, 4.0, true, 1)]
        );
    }

    #[test]
    fn test_quantity_expansion_builds_multiple_menus() {
        // 2x pizza + 2x drink + 2x dessert, all as single lines
        let items = vec![pizza("1", 8.0, 2), drink(1, 2.5, false, 2), dessert(1, 5.0, 2)];
        let detection = detect_menus(&items);

        assert_eq!(detection.menus.len(), 2);
        assert!(detection.remainder.is_empty());
        for menu in &detection.menus {
            assert_eq!(menu.original_price, 15.5);
        }
    }

    #[test]
    fn test_alcoholic_drinks_never_bundle() {
        let items = vec![pizza("1", 8.0, 1), drink(4, 4.0, true, 1), dessert(1, 5.0, 1)];
        let detection = detect_menus(&items);

        assert!(detection.menus.is_empty());
        assert_eq!(total_quantity(&detection), 3);
        assert!(detection.remainder.iter().any(|l| l.is_alcoholic_drink()));
    }

    #[test]
    fn test_customized_pizzas_never_bundle() {
        let items = vec![
            customized_pizza("1", 10.5, 1),
            drink(1, 2.5, false, 1),
            dessert(1, 5.0, 1),
        ];
        let detection = detect_menus(&items);

        assert!(detection.menus.is_empty());
        // The customized line passes through untouched, after the pools
        assert_eq!(detection.remainder.len(), 3);
        assert!(detection.remainder[2].is_customized_pizza());
    }

    #[test]
    fn test_customized_and_plain_pizza_stay_distinct() {
        // Same base id: the plain unit bundles, the customized one never
        // merges into it
        let items = vec![
            pizza("1", 8.0, 1),
            customized_pizza("1", 10.5, 1),
            drink(1, 2.5, false, 1),
            dessert(1, 5.0, 1),
        ];
        let detection = detect_menus(&items);

        assert_eq!(detection.menus.len(), 1);
        assert_eq!(detection.menus[0].pizza.price(), 8.0);
        assert_eq!(detection.remainder.len(), 1);
        assert!(detection.remainder[0].is_customized_pizza());
        assert_eq!(detection.remainder[0].quantity(), 1);
    }

    #[test]
    fn test_empty_pool_passes_everything_through() {
        // No dessert: no menu, input re-grouped unchanged
        let items = vec![pizza("1", 8.0, 2), drink(1, 2.5, false, 1)];
        let detection = detect_menus(&items);

        assert!(detection.menus.is_empty());
        assert_eq!(
            detection.remainder,
            vec![pizza("1", 8.0, 2), drink(1, 2.5, false, 1)]
        );
    }

    #[test]
    fn test_empty_input() {
        let detection = detect_menus(&[]);
        assert!(detection.menus.is_empty());
        assert!(detection.remainder.is_empty());
    }

    #[test]
    fn test_remainder_regroups_split_lines() {
        // Two separate lines of the same drink: the leftover units are
        // compacted back into a single line
        let items = vec![
            drink(1, 2.5, false, 2),
            drink(1, 2.5, false, 1),
            pizza("1", 8.0, 1),
            dessert(1, 5.0, 1),
        ];
        let detection = detect_menus(&items);

        assert_eq!(detection.menus.len(), 1);
        assert_eq!(detection.remainder, vec![drink(1, 2.5, false, 2)]);
    }

    #[test]
    fn test_conservation_per_category() {
        let items = vec![
            pizza("1", 8.0, 3),
            pizza("2", 10.0, 1),
            customized_pizza("2", 12.0, 2),
            drink(1, 2.5, false, 2),
            drink(4, 4.0, true, 1),
            dessert(1, 5.0, 1),
            dessert(2, 4.5, 2),
        ];
        let input_total: u32 = items.iter().map(|l| l.quantity()).sum();
        let detection = detect_menus(&items);
        assert_eq!(total_quantity(&detection), input_total);
    }

    #[test]
    fn test_idempotent() {
        let items = vec![
            pizza("1", 8.0, 2),
            drink(1, 2.5, false, 1),
            drink(4, 4.0, true, 1),
            dessert(1, 5.0, 3),
        ];
        let first = detect_menus(&items);
        let second = detect_menus(&items);
        assert_eq!(first, second);
    }

    #[test]
    fn test_bundle_count_is_min_of_pools() {
        let items = vec![
            pizza("1", 8.0, 5),
            drink(1, 2.5, false, 3),
            drink(4, 4.0, true, 4),
            dessert(1, 5.0, 7),
        ];
        let detection = detect_menus(&items);
        assert_eq!(detection.menus.len(), 3);
    }

    #[test]
    fn test_discount_rounding_half_up() {
        // 8.25 + 2.5 + 4.5 = 15.25; 10% = 1.525 → 1.53
        let items = vec![pizza("1", 8.25, 1), drink(1, 2.5, false, 1), dessert(1, 4.5, 1)];
        let detection = detect_menus(&items);

        let menu = &detection.menus[0];
        assert_eq!(menu.discount, 1.53);
        assert_eq!(menu.discounted_price, 13.72);
    }
}
