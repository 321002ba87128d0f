//! Order Pricing Module
//!
//! The authoritative pricing path for persisted orders: resolves every
//! referenced catalog id, enforces availability, then applies the
//! promotional-menu rule as a flat 10% on the whole order.
//!
//! Note that this is deliberately coarser than the per-bundle quote the
//! storefront cart shows (`shared::menu`): once the order holds at
//! least one pizza, one alcohol-free drink and one dessert, the whole
//! total is discounted, however many complete menus would actually
//! fit. The two rules are kept distinct on purpose; orders are priced
//! here, carts are quoted there.

mod order_calculator;

pub use order_calculator::*;
