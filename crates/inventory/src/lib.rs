//! Perishables-aware inventory ("fridge").
//!
//! This crate contains the inventory rules implemented as deterministic,
//! synchronous logic: no IO, no timers, no printing. Notifications leave
//! through an injected [`fridge_events::Notifier`].

pub mod catalog;
pub mod config;
pub mod fridge;
pub mod item;
pub mod record;
pub mod schedule;
pub mod summary;

pub use catalog::{Catalog, FreshnessProfile};
pub use config::FridgeConfig;
pub use fridge::{Fridge, SweepReport};
pub use item::{Item, NOT_APPLICABLE};
pub use record::{FridgeRecord, ItemRecord, ItemState};
pub use schedule::{DailyRunnable, DailyScheduler, LocalDailyScheduler};
