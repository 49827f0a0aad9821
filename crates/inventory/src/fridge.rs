use std::collections::BTreeMap;

use tracing::{debug, info};

use fridge_core::{FridgeError, FridgeResult};
use fridge_events::{Notification, Notifier};

use crate::catalog::Catalog;
use crate::config::FridgeConfig;
use crate::item::Item;
use crate::record::FridgeRecord;
use crate::summary;

/// What a single [`Fridge::daily_sweep`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Names whose zero-count entry was pruned (ascending).
    pub pruned: Vec<String>,
    /// Per name, units at or below the freshness threshold after decay.
    pub spoiled: BTreeMap<String, usize>,
    /// Number of perishable units that were decayed.
    pub decayed: usize,
}

impl SweepReport {
    pub fn spoiled_units(&self) -> usize {
        self.spoiled.values().sum()
    }
}

/// Capacity-bounded inventory of perishable and non-perishable units.
///
/// - `units` keeps storage order; removal never reorders survivors.
/// - `counts` holds, for every name stocked since the last prune, the number
///   of units carrying that name. A name that dropped to zero keeps its entry
///   until the next [`daily_sweep`](Fridge::daily_sweep).
/// - Every operation checks its preconditions before mutating, so a failed
///   call leaves the fridge untouched.
#[derive(Debug)]
pub struct Fridge<N: Notifier> {
    config: FridgeConfig,
    catalog: Catalog,
    units: Vec<Item>,
    counts: BTreeMap<String, usize>,
    notifier: N,
}

impl<N: Notifier> Fridge<N> {
    /// Empty fridge resolving units through [`Catalog::default`].
    pub fn new(config: FridgeConfig, notifier: N) -> Self {
        Self::with_catalog(config, Catalog::default(), notifier)
    }

    pub fn with_catalog(config: FridgeConfig, catalog: Catalog, notifier: N) -> Self {
        Self {
            config,
            catalog,
            units: Vec::with_capacity(config.capacity),
            counts: BTreeMap::new(),
            notifier,
        }
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn free_capacity(&self) -> usize {
        self.config.capacity.saturating_sub(self.units.len())
    }

    pub fn freshness_threshold(&self) -> i64 {
        self.config.freshness_threshold
    }

    /// Number of stocked units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Tracked count for `name`; `Some(0)` for a depleted, not yet pruned name.
    pub fn count(&self, name: &str) -> Option<usize> {
        self.counts.get(name).copied()
    }

    /// Units in storage order.
    pub fn units(&self) -> impl Iterator<Item = &Item> {
        self.units.iter()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Stock `quantity` fresh units of `name`.
    pub fn stock_in(&mut self, name: &str, quantity: usize) -> FridgeResult<()> {
        let available = self.free_capacity();
        if quantity > available {
            return Err(FridgeError::capacity_exceeded(quantity, available));
        }

        let catalog = &self.catalog;
        self.units.extend((0..quantity).map(|_| catalog.resolve(name)));
        *self.counts.entry(name.to_string()).or_insert(0) += quantity;

        debug!(item = name, quantity, total = self.units.len(), "stocked in");
        Ok(())
    }

    /// Remove the first `quantity` units of `name` in storage order.
    ///
    /// Emits a zero-stock notification when the count reaches exactly zero.
    pub fn stock_out(&mut self, name: &str, quantity: usize) -> FridgeResult<()> {
        let available = self
            .counts
            .get(name)
            .copied()
            .ok_or_else(|| FridgeError::not_found(name))?;
        if quantity > available {
            return Err(FridgeError::insufficient_stock(name, quantity, available));
        }

        // Linear scan keeps survivors in order; fine for fridge-sized storage.
        let mut to_remove = quantity;
        self.units.retain(|item| {
            if to_remove > 0 && item.name() == name {
                to_remove -= 1;
                false
            } else {
                true
            }
        });

        let remaining = available - quantity;
        self.counts.insert(name.to_string(), remaining);
        debug!(item = name, quantity, remaining, total = self.units.len(), "stocked out");

        if remaining == 0 {
            self.notifier.notify(&Notification::zero_stock(name));
        }
        Ok(())
    }

    /// Daily maintenance: prune depleted names, decay perishables, report spoilage.
    ///
    /// A name that hit zero during `stock_out` is notified once more here when
    /// its entry is pruned. Spoiled units stay in storage.
    pub fn daily_sweep(&mut self) -> SweepReport {
        let mut report = SweepReport::default();

        let depleted: Vec<String> = self
            .counts
            .iter()
            .filter(|(_, count)| **count == 0)
            .map(|(name, _)| name.clone())
            .collect();
        for name in depleted {
            self.notifier.notify(&Notification::zero_stock(name.as_str()));
            self.counts.remove(&name);
            report.pruned.push(name);
        }

        let threshold = self.config.freshness_threshold;
        for item in self.units.iter_mut().filter(|item| !item.is_non_perishable()) {
            let freshness = item.decay();
            report.decayed += 1;
            if freshness <= threshold {
                *report.spoiled.entry(item.name().to_string()).or_insert(0) += 1;
            }
        }

        for (name, count) in &report.spoiled {
            self.notifier
                .notify(&Notification::spoiled(name.as_str(), *count));
        }

        info!(
            pruned = report.pruned.len(),
            decayed = report.decayed,
            spoiled = report.spoiled_units(),
            "daily sweep complete"
        );
        report
    }

    /// Human-readable listing; see [`summary`](crate::summary) for the layout.
    pub fn summary(&self, show_freshness: bool) -> String {
        summary::render(&self.units, &self.counts, show_freshness)
    }

    /// Structured export: every tracked name → its unit records in storage order.
    ///
    /// Depleted names that have not been pruned map to an empty list.
    pub fn to_record(&self) -> FridgeRecord {
        let mut record: FridgeRecord = self
            .counts
            .keys()
            .map(|name| (name.clone(), Vec::new()))
            .collect();
        for item in &self.units {
            if let Some(list) = record.get_mut(item.name()) {
                list.push(item.to_record());
            }
        }
        record
    }
}
