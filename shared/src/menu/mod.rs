//! Promotional Menu Module
//!
//! This module holds the storefront's one genuinely interesting piece of
//! business logic: detecting promotional menus (1 pizza + 1 alcohol-free
//! drink + 1 dessert at 10% off) in a cart, and pricing the result for
//! the checkout preview.
//!
//! Everything here is pure: no I/O, no hidden state, identical output
//! for identical input.

mod bundler;
mod calculator;

pub use bundler::*;
pub use calculator::*;
