//! Structured export shapes.
//!
//! These are plain data for an external formatter; the fridge never
//! serializes them itself.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Structured export of a whole fridge: name → that name's units in storage order.
pub type FridgeRecord = BTreeMap<String, Vec<ItemRecord>>;

/// Structured representation of one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    #[serde(flatten)]
    pub state: ItemState,
}

/// Decay state of a unit, flattened into its [`ItemRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemState {
    NonPerishable { non_perishable: bool },
    Perishable { freshness: i64, daily_spoil: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn perishable_record_carries_decay_fields() {
        let record = ItemRecord {
            name: "apple".to_string(),
            state: ItemState::Perishable {
                freshness: 12,
                daily_spoil: 2,
            },
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "name": "apple", "freshness": 12, "daily_spoil": 2 })
        );
    }

    #[test]
    fn non_perishable_record_only_flags_itself() {
        let record = ItemRecord {
            name: "waterbottle".to_string(),
            state: ItemState::NonPerishable {
                non_perishable: true,
            },
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "name": "waterbottle", "non_perishable": true })
        );
    }
}
