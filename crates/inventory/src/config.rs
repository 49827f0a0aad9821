//! Fridge configuration.

use fridge_core::{FridgeError, FridgeResult};

/// Environment variable overriding [`FridgeConfig::capacity`].
pub const CAPACITY_ENV: &str = "FRIDGE_CAPACITY";
/// Environment variable overriding [`FridgeConfig::freshness_threshold`].
pub const FRESHNESS_THRESHOLD_ENV: &str = "FRIDGE_FRESHNESS_THRESHOLD";

/// Fridge configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FridgeConfig {
    /// Maximum number of individual units (not distinct names).
    pub capacity: usize,
    /// Perishable units at or below this freshness are reported spoiled.
    pub freshness_threshold: i64,
}

impl Default for FridgeConfig {
    fn default() -> Self {
        Self {
            capacity: 20,
            freshness_threshold: 2,
        }
    }
}

impl FridgeConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_freshness_threshold(mut self, threshold: i64) -> Self {
        self.freshness_threshold = threshold;
        self
    }

    /// Defaults overridden by `FRIDGE_CAPACITY` / `FRIDGE_FRESHNESS_THRESHOLD`.
    pub fn from_env() -> FridgeResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> FridgeResult<Self> {
        let mut config = Self::default();
        if let Some(raw) = lookup(CAPACITY_ENV) {
            config.capacity = parse_var(CAPACITY_ENV, &raw)?;
        }
        if let Some(raw) = lookup(FRESHNESS_THRESHOLD_ENV) {
            config.freshness_threshold = parse_var(FRESHNESS_THRESHOLD_ENV, &raw)?;
        }
        Ok(config)
    }
}

fn parse_var<T>(key: &str, raw: &str) -> FridgeResult<T>
where
    T: core::str::FromStr,
    T::Err: core::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| FridgeError::invalid_argument(format!("{key}={raw:?}: {e}")))
}
