//! Seed Catalogs
//!
//! The storefront boots with the house menu; admins edit it through the
//! catalog API afterwards. Catalog edits live for the process lifetime
//! only; orders are the one persisted collection.

use shared::models::{Dessert, Drink, Ingredient, IngredientCategory, Pizza};

pub fn default_pizzas() -> Vec<Pizza> {
    let recipes: [(&str, &str, &[&str], f64); 5] = [
        ("1", "Margherita", &["tomate", "mozzarella", "basilic"], 8.0),
        ("2", "Pepperoni", &["tomate", "mozzarella", "pepperoni"], 10.0),
        (
            "3",
            "4 Fromages",
            &["mozzarella", "gorgonzola", "parmesan", "chèvre"],
            12.0,
        ),
        (
            "4",
            "Savoyarde",
            &["reblochon", "lardons", "échalotes", "chèvre"],
            14.0,
        ),
        (
            "5",
            "Végétarienne",
            &["tomate", "mozzarella", "poivrons", "oignons", "champignons"],
            9.0,
        ),
    ];

    recipes
        .into_iter()
        .map(|(id, name, ingredients, price)| Pizza {
            id: id.to_string(),
            name: name.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            price,
        })
        .collect()
}

pub fn default_drinks() -> Vec<Drink> {
    let rows: [(i64, &str, f64, &str, bool, bool); 7] = [
        (1, "Coca-Cola", 2.5, "33cl", false, true),
        (2, "Orangina", 2.5, "33cl", false, true),
        (3, "Eau minérale", 2.0, "50cl", false, true),
        (4, "Bière", 4.0, "25cl", true, true),
        (5, "Vin rouge", 5.0, "15cl", true, true),
        (6, "Café", 2.0, "tasse", false, true),
        (7, "Thé", 2.0, "tasse", false, true),
    ];

    rows.into_iter()
        .map(|(id, name, price, size, with_alcohol, available)| Drink {
            id,
            name: name.to_string(),
            price,
            size: size.to_string(),
            with_alcohol,
            available,
        })
        .collect()
}

pub fn default_desserts() -> Vec<Dessert> {
    let rows: [(i64, &str, f64, bool); 5] = [
        (1, "Tiramisu", 5.0, true),
        (2, "Panna Cotta", 4.5, true),
        (3, "Mousse au chocolat", 4.0, true),
        (4, "Tarte aux pommes", 4.5, true),
        (5, "Crème brûlée", 5.0, false),
    ];

    rows.into_iter()
        .map(|(id, name, price, available)| Dessert {
            id,
            name: name.to_string(),
            price,
            available,
        })
        .collect()
}

/// The pizza-customizer ingredient catalog (read-only)
pub fn ingredient_catalog() -> Vec<Ingredient> {
    use IngredientCategory::*;

    let rows: [(&str, &str, f64, IngredientCategory); 28] = [
        // Fromages
        ("mozzarella", "Mozzarella", 1.5, Cheese),
        ("parmesan", "Parmesan", 1.5, Cheese),
        ("gorgonzola", "Gorgonzola", 2.0, Cheese),
        ("chevre", "Chèvre", 2.0, Cheese),
        ("ricotta", "Ricotta", 1.5, Cheese),
        // Viandes
        ("pepperoni", "Pepperoni", 2.5, Meat),
        ("jambon", "Jambon", 2.0, Meat),
        ("chorizo", "Chorizo", 2.5, Meat),
        ("poulet", "Poulet", 2.5, Meat),
        ("bacon", "Bacon", 2.0, Meat),
        ("merguez", "Merguez", 2.5, Meat),
        ("boeuf", "Boeuf haché", 2.5, Meat),
        // Légumes
        ("tomate", "Tomates fraîches", 1.0, Vegetable),
        ("champignon", "Champignons", 1.5, Vegetable),
        ("poivron", "Poivrons", 1.5, Vegetable),
        ("oignon", "Oignons", 1.0, Vegetable),
        ("olive", "Olives", 1.5, Vegetable),
        ("roquette", "Roquette", 1.5, Vegetable),
        ("artichaut", "Artichauts", 2.0, Vegetable),
        ("aubergine", "Aubergines", 1.5, Vegetable),
        ("courgette", "Courgettes", 1.5, Vegetable),
        ("mais", "Maïs", 1.0, Vegetable),
        ("piment", "Piments", 1.0, Vegetable),
        // Sauces et bases
        ("sauce-tomate", "Sauce tomate", 0.0, Sauce),
        ("creme", "Crème fraîche", 1.0, Sauce),
        ("pesto", "Pesto", 1.5, Sauce),
        ("basilic", "Basilic frais", 1.0, Base),
        ("origan", "Origan", 0.5, Base),
    ];

    rows.into_iter()
        .map(|(id, name, price, category)| Ingredient {
            id: id.to_string(),
            name: name.to_string(),
            price,
            category,
        })
        .collect()
}
