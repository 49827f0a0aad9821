//! `fridge-core` — shared foundation for the fridge crates.
//!
//! This crate only carries the error model; it has no IO and no state.

pub mod error;

pub use error::{FridgeError, FridgeResult};
