//! Shared types for the Forno storefront
//!
//! Common types used across the server and tooling: catalog entities,
//! order and cart structures, money rounding helpers, and the pure
//! promotional-menu detection core.

pub mod menu;
pub mod models;
pub mod money;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Menu core re-exports (for convenient access)
pub use menu::{CartQuote, MenuBundle, MenuDetection, detect_menus, quote_cart};
