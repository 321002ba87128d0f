//! Input validation helpers
//!
//! Centralized limits and validation functions for CRUD and cart
//! payloads. Request-shape problems surface as `AppError::Validation`
//! before any store or pricing code runs.

use shared::models::CartLine;

use crate::utils::AppError;

// ── Limits ──────────────────────────────────────────────────────────

/// Entity names: pizza, drink, dessert
pub const MAX_NAME_LEN: usize = 200;

/// Ingredient labels on a pizza recipe
pub const MAX_INGREDIENT_LEN: usize = 100;

/// Serving size labels ("33cl", "tasse", ...)
pub const MAX_SIZE_LEN: usize = 32;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is non-empty and within the limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        validate_required_text(v, field, max_len)?;
    }
    Ok(())
}

/// Validate a money amount: finite and non-negative.
pub fn validate_price(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::validation(format!(
            "{field} must be a non-negative amount"
        )));
    }
    Ok(())
}

/// Validate an optional money amount.
pub fn validate_optional_price(value: Option<f64>, field: &str) -> Result<(), AppError> {
    if let Some(v) = value {
        validate_price(v, field)?;
    }
    Ok(())
}

// ── Validation helpers (cart payloads) ──────────────────────────────

/// Validate a cart line: quantity ≥ 1, sane money values.
pub fn validate_cart_line(line: &CartLine, index: usize) -> Result<(), AppError> {
    if line.quantity() < 1 {
        return Err(AppError::validation(format!(
            "items[{index}]: quantity must be at least 1"
        )));
    }
    validate_price(line.price(), &format!("items[{index}].price"))?;
    if let CartLine::Pizza {
        customization: Some(c),
        ..
    } = line
    {
        validate_price(c.extra_price, &format!("items[{index}].extraPrice"))?;
    }
    Ok(())
}
