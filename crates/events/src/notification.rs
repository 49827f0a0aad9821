use serde::{Deserialize, Serialize};

/// A message emitted by the fridge for an external notifier.
///
/// Notifications are facts about stock levels; they never carry state the
/// receiver could use to mutate the fridge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    /// A tracked name's count reached zero.
    ZeroStock { name: String },
    /// `count` units of `name` decayed to or below the freshness threshold.
    Spoiled { name: String, count: usize },
}

impl Notification {
    pub fn zero_stock(name: impl Into<String>) -> Self {
        Self::ZeroStock { name: name.into() }
    }

    pub fn spoiled(name: impl Into<String>, count: usize) -> Self {
        Self::Spoiled {
            name: name.into(),
            count,
        }
    }

    /// Stable notification type identifier (e.g. "fridge.stock.depleted").
    pub fn kind(&self) -> &'static str {
        match self {
            Notification::ZeroStock { .. } => "fridge.stock.depleted",
            Notification::Spoiled { .. } => "fridge.item.spoiled",
        }
    }

    /// Item name the notification is about.
    pub fn name(&self) -> &str {
        match self {
            Notification::ZeroStock { name } => name,
            Notification::Spoiled { name, .. } => name,
        }
    }
}

impl core::fmt::Display for Notification {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Notification::ZeroStock { name } => write!(f, "Item stock runs out: {name}"),
            Notification::Spoiled { name, count } => {
                write!(f, "Item spoiled and count: {count} {name}")
            }
        }
    }
}
