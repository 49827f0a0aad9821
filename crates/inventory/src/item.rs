use fridge_core::{FridgeError, FridgeResult};

use crate::catalog::FreshnessProfile;
use crate::record::{ItemRecord, ItemState};

/// Reported freshness of a non-perishable item.
pub const NOT_APPLICABLE: i64 = -1;

/// A single stocked unit with a linear decay model.
///
/// Many units may share a name; each unit decays independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    freshness: i64,
    daily_spoil_rate: i64,
}

impl Item {
    /// Create a unit. A `daily_spoil_rate` of `0` makes it non-perishable.
    ///
    /// Negative `freshness` is clamped to `0`.
    pub fn new(name: impl Into<String>, freshness: i64, daily_spoil_rate: i64) -> FridgeResult<Self> {
        if daily_spoil_rate < 0 {
            return Err(FridgeError::invalid_argument(
                "daily spoil rate must not be negative",
            ));
        }
        Ok(Self {
            name: name.into(),
            freshness: freshness.max(0),
            daily_spoil_rate,
        })
    }

    pub(crate) fn from_profile(name: impl Into<String>, profile: FreshnessProfile) -> Self {
        Self {
            name: name.into(),
            freshness: profile.freshness(),
            daily_spoil_rate: profile.daily_spoil_rate(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn daily_spoil_rate(&self) -> i64 {
        self.daily_spoil_rate
    }

    pub fn is_non_perishable(&self) -> bool {
        self.daily_spoil_rate == 0
    }

    /// Stored freshness, or [`NOT_APPLICABLE`] for non-perishable units.
    pub fn reported_freshness(&self) -> i64 {
        if self.is_non_perishable() {
            NOT_APPLICABLE
        } else {
            self.freshness
        }
    }

    /// Apply one day of spoilage and return the new freshness.
    ///
    /// Freshness never drops below `0`. Non-perishable units are left alone
    /// and report [`NOT_APPLICABLE`].
    pub fn decay(&mut self) -> i64 {
        if self.is_non_perishable() {
            return NOT_APPLICABLE;
        }
        self.freshness = self.freshness.saturating_sub(self.daily_spoil_rate).max(0);
        self.freshness
    }

    pub fn to_record(&self) -> ItemRecord {
        let state = if self.is_non_perishable() {
            ItemState::NonPerishable {
                non_perishable: true,
            }
        } else {
            ItemState::Perishable {
                freshness: self.freshness,
                daily_spoil: self.daily_spoil_rate,
            }
        };
        ItemRecord {
            name: self.name.clone(),
            state,
        }
    }
}
