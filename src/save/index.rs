//! Collection indexes
//!
//! Persistent records of which items have been collected and which enemies
//! have been met, keyed by name.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::store::{load_json, store_json, KeyValueStore};
use crate::items::Inventory;

/// Store key for the item index
pub const ITEM_INDEX_KEY: &str = "dungeonGame_itemIndex";

/// Store key for the enemy index
pub const ENEMY_INDEX_KEY: &str = "dungeonGame_enemyIndex";

/// Current time in Unix milliseconds
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub name: String,
    /// First collection time, Unix milliseconds
    pub collected_at: u64,
    pub times_collected: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemyRecord {
    pub name: String,
    /// First encounter time, Unix milliseconds
    pub encountered_at: u64,
    pub times_encountered: u32,
    #[serde(default)]
    pub times_defeated: u32,
}

/// Collected items by name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemIndex {
    pub records: BTreeMap<String, ItemRecord>,
}

impl ItemIndex {
    pub fn load(store: &impl KeyValueStore) -> Self {
        load_json(store, ITEM_INDEX_KEY)
    }

    fn save(&self, store: &mut impl KeyValueStore) {
        if let Err(e) = store_json(store, ITEM_INDEX_KEY, self) {
            log::warn!("Failed to save item index: {}", e);
        }
    }

    pub fn register(&mut self, name: &str, now: u64) {
        self.records
            .entry(name.to_string())
            .and_modify(|r| r.times_collected += 1)
            .or_insert_with(|| ItemRecord {
                name: name.to_string(),
                collected_at: now,
                times_collected: 1,
            });
    }

    pub fn get(&self, name: &str) -> Option<&ItemRecord> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }
}

/// Encountered enemies by name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnemyIndex {
    pub records: BTreeMap<String, EnemyRecord>,
}

impl EnemyIndex {
    pub fn load(store: &impl KeyValueStore) -> Self {
        load_json(store, ENEMY_INDEX_KEY)
    }

    fn save(&self, store: &mut impl KeyValueStore) {
        if let Err(e) = store_json(store, ENEMY_INDEX_KEY, self) {
            log::warn!("Failed to save enemy index: {}", e);
        }
    }

    pub fn register_encounter(&mut self, name: &str, now: u64) {
        self.records
            .entry(name.to_string())
            .and_modify(|r| r.times_encountered += 1)
            .or_insert_with(|| EnemyRecord {
                name: name.to_string(),
                encountered_at: now,
                times_encountered: 1,
                times_defeated: 0,
            });
    }

    /// Count a defeat. An enemy never seen before is registered as
    /// encountered first.
    pub fn register_defeat(&mut self, name: &str, now: u64) {
        if !self.contains(name) {
            self.register_encounter(name, now);
        }
        if let Some(record) = self.records.get_mut(name) {
            record.times_defeated += 1;
        }
    }

    pub fn get(&self, name: &str) -> Option<&EnemyRecord> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }
}

pub fn register_item_collected(store: &mut impl KeyValueStore, name: &str, now: u64) {
    let mut index = ItemIndex::load(store);
    index.register(name, now);
    index.save(store);
}

pub fn is_item_collected(store: &impl KeyValueStore, name: &str) -> bool {
    ItemIndex::load(store).contains(name)
}

/// Register every owned item, for saves that predate the index
pub fn register_existing_items(store: &mut impl KeyValueStore, inventory: &Inventory, now: u64) {
    let mut index = ItemIndex::load(store);
    for item in inventory.iter() {
        index.register(item.name(), now);
    }
    index.save(store);
}

pub fn register_enemy_encountered(store: &mut impl KeyValueStore, name: &str, now: u64) {
    let mut index = EnemyIndex::load(store);
    index.register_encounter(name, now);
    index.save(store);
}

pub fn register_enemy_defeated(store: &mut impl KeyValueStore, name: &str, now: u64) {
    let mut index = EnemyIndex::load(store);
    index.register_defeat(name, now);
    index.save(store);
}

pub fn is_enemy_encountered(store: &impl KeyValueStore, name: &str) -> bool {
    EnemyIndex::load(store).contains(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::store::MemoryStore;

    #[test]
    fn test_item_collection_counts() {
        let mut store = MemoryStore::new();
        assert!(!is_item_collected(&store, "Iron Helm"));
        register_item_collected(&mut store, "Iron Helm", 100);
        register_item_collected(&mut store, "Iron Helm", 200);

        let index = ItemIndex::load(&store);
        let record = index.get("Iron Helm").unwrap();
        assert_eq!(record.times_collected, 2);
        assert_eq!(record.collected_at, 100);
        assert!(is_item_collected(&store, "Iron Helm"));
    }

    #[test]
    fn test_defeat_registers_encounter() {
        let mut store = MemoryStore::new();
        register_enemy_defeated(&mut store, "skull", 5);
        let record = EnemyIndex::load(&store).get("skull").cloned().unwrap();
        assert_eq!(record.times_encountered, 1);
        assert_eq!(record.times_defeated, 1);

        register_enemy_encountered(&mut store, "skull", 9);
        register_enemy_defeated(&mut store, "skull", 9);
        let record = EnemyIndex::load(&store).get("skull").cloned().unwrap();
        assert_eq!(record.times_encountered, 2);
        assert_eq!(record.times_defeated, 2);
        assert_eq!(record.encountered_at, 5);
    }

    #[test]
    fn test_malformed_index_is_empty() {
        let mut store = MemoryStore::new();
        store.set(ENEMY_INDEX_KEY, "oops".to_string()).unwrap();
        assert!(!is_enemy_encountered(&store, "slime"));
        register_enemy_encountered(&mut store, "slime", 1);
        assert!(is_enemy_encountered(&store, "slime"));
    }

    #[test]
    fn test_wire_format() {
        let mut index = ItemIndex::default();
        index.register("Rusty Sword", 7);
        let json = serde_json::to_value(&index).unwrap();
        assert_eq!(json["Rusty Sword"]["timesCollected"], 1);
        assert_eq!(json["Rusty Sword"]["collectedAt"], 7);

        // records written before defeats were tracked
        let legacy = r#"{"slime":{"name":"slime","encounteredAt":3,"timesEncountered":4}}"#;
        let enemies: EnemyIndex = serde_json::from_str(legacy).unwrap();
        assert_eq!(enemies.get("slime").unwrap().times_defeated, 0);
    }
}
