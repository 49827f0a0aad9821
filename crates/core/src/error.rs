//! Fridge error model.

use thiserror::Error;

/// Result type used across the fridge crates.
pub type FridgeResult<T> = Result<T, FridgeError>;

/// Precondition failures raised by fridge operations.
///
/// Every variant is raised synchronously by the call that violated the
/// precondition, before any state was touched. None of them are transient.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FridgeError {
    /// A value failed validation (e.g. a negative daily spoil rate).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Stocking in would exceed the free capacity.
    #[error("fridge free capacity is less than {requested} (available: {available})")]
    CapacityExceeded { requested: usize, available: usize },

    /// The item name is not tracked by the fridge.
    #[error("item not found in fridge: {0}")]
    NotFound(String),

    /// Stocking out more units than are tracked for the name.
    #[error("item insufficient to exit: {name} (requested: {requested}, available: {available})")]
    InsufficientStock {
        name: String,
        requested: usize,
        available: usize,
    },
}

impl FridgeError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn capacity_exceeded(requested: usize, available: usize) -> Self {
        Self::CapacityExceeded {
            requested,
            available,
        }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn insufficient_stock(name: impl Into<String>, requested: usize, available: usize) -> Self {
        Self::InsufficientStock {
            name: name.into(),
            requested,
            available,
        }
    }
}
