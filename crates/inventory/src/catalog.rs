//! Name-keyed default freshness lookup.

use std::collections::HashMap;

use fridge_core::{FridgeError, FridgeResult};

use crate::item::Item;

/// Initial freshness and daily spoil rate for units of one name.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FreshnessProfile {
    freshness: i64,
    daily_spoil_rate: i64,
}

impl FreshnessProfile {
    /// Profile used for names the catalog does not know: non-perishable.
    pub const UNKNOWN: Self = Self {
        freshness: 1,
        daily_spoil_rate: 0,
    };

    /// Negative `freshness` is clamped to `0`.
    pub fn new(freshness: i64, daily_spoil_rate: i64) -> FridgeResult<Self> {
        if daily_spoil_rate < 0 {
            return Err(FridgeError::invalid_argument(
                "daily spoil rate must not be negative",
            ));
        }
        Ok(Self {
            freshness: freshness.max(0),
            daily_spoil_rate,
        })
    }

    pub fn freshness(&self) -> i64 {
        self.freshness
    }

    pub fn daily_spoil_rate(&self) -> i64 {
        self.daily_spoil_rate
    }
}

/// Immutable mapping from item name to [`FreshnessProfile`].
///
/// `Catalog::default()` knows chicken (9, 3), apple (14, 2) and
/// waterbottle (non-perishable). Every other name resolves to
/// [`FreshnessProfile::UNKNOWN`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    profiles: HashMap<String, FreshnessProfile>,
}

impl Catalog {
    /// A catalog with no known names.
    pub fn empty() -> Self {
        Self {
            profiles: HashMap::new(),
        }
    }

    pub fn with_profile(mut self, name: impl Into<String>, profile: FreshnessProfile) -> Self {
        self.profiles.insert(name.into(), profile);
        self
    }

    pub fn profile(&self, name: &str) -> FreshnessProfile {
        self.profiles
            .get(name)
            .copied()
            .unwrap_or(FreshnessProfile::UNKNOWN)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    /// Build a fresh unit for `name`.
    pub fn resolve(&self, name: &str) -> Item {
        let profile = self.profile(name);
        Item::from_profile(name, profile)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
            .with_profile(
                "chicken",
                FreshnessProfile {
                    freshness: 9,
                    daily_spoil_rate: 3,
                },
            )
            .with_profile(
                "apple",
                FreshnessProfile {
                    freshness: 14,
                    daily_spoil_rate: 2,
                },
            )
            .with_profile("waterbottle", FreshnessProfile::UNKNOWN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::NOT_APPLICABLE;

    #[test]
    fn known_names_use_their_profile() {
        let catalog = Catalog::default();

        let chicken = catalog.resolve("chicken");
        assert_eq!(chicken.reported_freshness(), 9);
        assert_eq!(chicken.daily_spoil_rate(), 3);

        let apple = catalog.resolve("apple");
        assert_eq!(apple.reported_freshness(), 14);
        assert_eq!(apple.daily_spoil_rate(), 2);

        assert!(catalog.resolve("waterbottle").is_non_perishable());
    }

    #[test]
    fn unknown_names_are_non_perishable() {
        let catalog = Catalog::default();
        assert!(!catalog.contains("cheese"));

        let cheese = catalog.resolve("cheese");
        assert_eq!(cheese.name(), "cheese");
        assert!(cheese.is_non_perishable());
        assert_eq!(cheese.reported_freshness(), NOT_APPLICABLE);
        assert_eq!(catalog.profile("cheese"), FreshnessProfile::UNKNOWN);
    }

    #[test]
    fn profiles_reject_negative_spoil_rate() {
        let err = FreshnessProfile::new(5, -2).unwrap_err();
        assert!(matches!(err, FridgeError::InvalidArgument(_)));
    }

    #[test]
    fn extreme_profiles_resolve_to_safe_units() {
        let profile = FreshnessProfile::new(-2, i64::MAX).unwrap();
        assert_eq!(profile.freshness(), 0);

        let catalog = Catalog::empty().with_profile("x", profile);
        let mut unit = catalog.resolve("x");
        assert_eq!(unit.reported_freshness(), 0);
        assert_eq!(unit.decay(), 0);
    }

    #[test]
    fn catalog_is_reachable_from_the_fridge() {
        use std::sync::Arc;

        use fridge_events::InMemoryNotifier;

        use crate::config::FridgeConfig;
        use crate::fridge::Fridge;

        let milk = FreshnessProfile::new(7, 1).unwrap();
        let catalog = Catalog::default().with_profile("milk", milk);
        let mut fridge = Fridge::with_catalog(
            FridgeConfig::default(),
            catalog,
            Arc::new(InMemoryNotifier::new()),
        );

        assert!(fridge.catalog().contains("milk"));
        fridge.stock_in("milk", 1).unwrap();
        assert_eq!(fridge.units().next().map(|u| u.reported_freshness()), Some(7));
    }

    #[test]
    fn extra_profiles_extend_the_defaults() {
        let milk = FreshnessProfile::new(7, 1).unwrap();
        let catalog = Catalog::default().with_profile("milk", milk);

        assert_eq!(catalog.resolve("milk").reported_freshness(), 7);
        assert_eq!(catalog.resolve("chicken").reported_freshness(), 9);
    }
}
