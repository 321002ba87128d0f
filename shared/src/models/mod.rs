//! Domain Models

// Catalog
pub mod dessert;
pub mod drink;
pub mod ingredient;
pub mod pizza;

// Orders and cart
pub mod cart;
pub mod order;

// Re-exports
pub use cart::{CartLine, LineKey, PizzaCustomization};
pub use dessert::{Dessert, DessertCreate, DessertUpdate};
pub use drink::{Drink, DrinkCreate, DrinkUpdate};
pub use ingredient::{Ingredient, IngredientCategory};
pub use order::{Order, OrderCreate, OrderUpdate};
pub use pizza::{Pizza, PizzaCreate, PizzaUpdate};
