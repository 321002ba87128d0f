//! Repository Module
//!
//! Provides CRUD operations over the in-memory collections, one
//! repository per resource. Order mutations also write the JSON
//! snapshot.

// Catalog
pub mod dessert;
pub mod drink;
pub mod pizza;

// Orders
pub mod order;

// Re-exports
pub use dessert::DessertRepository;
pub use drink::DrinkRepository;
pub use order::OrderRepository;
pub use pizza::PizzaRepository;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for RepoError {
    fn from(err: std::io::Error) -> Self {
        RepoError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(err: serde_json::Error) -> Self {
        RepoError::Storage(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
