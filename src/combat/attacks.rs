//! Attack pool
//!
//! Attack records granted by equipped items, split into an equipped loadout
//! and an available reserve.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::data::{AttackDefinition, StatusEffect};
use crate::items::SourceUid;

/// Unique attack record ID
pub type AttackId = u64;

/// One usable attack, tied to the item instance that granted it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackRecord {
    pub id: AttackId,
    pub source_uid: SourceUid,
    /// Attack name from the catalog
    pub name: String,
    /// Name of the granting item
    pub item_name: String,
    pub str_multiplier: f64,
    pub magic_multiplier: f64,
    #[serde(default)]
    pub skill_multiplier: f64,
    #[serde(default)]
    pub status: StatusEffect,
}

impl AttackRecord {
    pub fn new(id: AttackId, source_uid: SourceUid, item_name: &str, def: &AttackDefinition) -> Self {
        Self {
            id,
            source_uid,
            name: def.name.clone(),
            item_name: item_name.to_string(),
            str_multiplier: def.str_multiplier,
            magic_multiplier: def.magic_multiplier,
            skill_multiplier: def.skill_multiplier,
            status: def.status,
        }
    }
}

/// Why an attack toggle was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleRejection {
    UnknownAttack,
    AlreadyInState,
    LoadoutFull,
}

/// A member's attack records. Membership in the loadout is tracked by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttackPool {
    records: Vec<AttackRecord>,
    equipped: BTreeSet<AttackId>,
}

impl AttackPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to the available reserve
    pub fn add(&mut self, record: AttackRecord) {
        self.records.push(record);
    }

    pub fn get(&self, id: AttackId) -> Option<&AttackRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn is_equipped(&self, id: AttackId) -> bool {
        self.equipped.contains(&id)
    }

    /// Move a record into the loadout, up to `cap` equipped records
    pub fn equip(&mut self, id: AttackId, cap: usize) -> Result<(), ToggleRejection> {
        if self.get(id).is_none() {
            return Err(ToggleRejection::UnknownAttack);
        }
        if self.equipped.contains(&id) {
            return Err(ToggleRejection::AlreadyInState);
        }
        if self.equipped.len() >= cap {
            return Err(ToggleRejection::LoadoutFull);
        }
        self.equipped.insert(id);
        Ok(())
    }

    /// Move a record back to the available reserve
    pub fn unequip(&mut self, id: AttackId) -> Result<(), ToggleRejection> {
        if self.get(id).is_none() {
            return Err(ToggleRejection::UnknownAttack);
        }
        if self.equipped.remove(&id) {
            Ok(())
        } else {
            Err(ToggleRejection::AlreadyInState)
        }
    }

    /// Delete every record granted by `source_uid`, from both partitions
    pub fn remove_by_source_uid(&mut self, source_uid: SourceUid) -> usize {
        let before = self.records.len();
        let equipped = &mut self.equipped;
        self.records.retain(|r| {
            let keep = r.source_uid != source_uid;
            if !keep {
                equipped.remove(&r.id);
            }
            keep
        });
        before - self.records.len()
    }

    pub fn equipped(&self) -> Vec<&AttackRecord> {
        self.records.iter().filter(|r| self.equipped.contains(&r.id)).collect()
    }

    pub fn available(&self) -> Vec<&AttackRecord> {
        self.records.iter().filter(|r| !self.equipped.contains(&r.id)).collect()
    }

    pub fn records(&self) -> &[AttackRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn max_id(&self) -> Option<AttackId> {
        self.records.iter().map(|r| r.id).max()
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.equipped.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::attacks::default_attack_catalog;

    fn record(id: AttackId, source_uid: SourceUid) -> AttackRecord {
        let catalog = default_attack_catalog();
        AttackRecord::new(id, source_uid, "Spiked Shield", catalog.find("Charge").unwrap())
    }

    #[test]
    fn test_new_records_are_available() {
        let mut pool = AttackPool::new();
        pool.add(record(1, 10));
        assert_eq!(pool.available().len(), 1);
        assert!(pool.equipped().is_empty());
        assert_eq!(pool.get(1).unwrap().str_multiplier, 1.4);
    }

    #[test]
    fn test_toggle_does_not_duplicate() {
        let mut pool = AttackPool::new();
        pool.add(record(1, 10));
        assert_eq!(pool.equip(1, 5), Ok(()));
        assert_eq!(pool.equip(1, 5), Err(ToggleRejection::AlreadyInState));
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.equipped().len(), 1);
        assert!(pool.available().is_empty());
        assert_eq!(pool.unequip(1), Ok(()));
        assert_eq!(pool.unequip(1), Err(ToggleRejection::AlreadyInState));
        assert_eq!(pool.available().len(), 1);
    }

    #[test]
    fn test_cap() {
        let mut pool = AttackPool::new();
        for id in 1..=6 {
            pool.add(record(id, id));
        }
        for id in 1..=5 {
            assert!(pool.equip(id, 5).is_ok());
        }
        assert_eq!(pool.equip(6, 5), Err(ToggleRejection::LoadoutFull));
        assert!(!pool.is_equipped(6));
    }

    #[test]
    fn test_unknown_id() {
        let mut pool = AttackPool::new();
        assert_eq!(pool.equip(42, 5), Err(ToggleRejection::UnknownAttack));
        assert_eq!(pool.unequip(42), Err(ToggleRejection::UnknownAttack));
    }

    #[test]
    fn test_remove_by_source_clears_both_partitions() {
        let mut pool = AttackPool::new();
        pool.add(record(1, 10));
        pool.add(record(2, 10));
        pool.add(record(3, 11));
        pool.equip(1, 5).unwrap();
        assert_eq!(pool.remove_by_source_uid(10), 2);
        assert!(pool.equipped().is_empty());
        assert_eq!(pool.available().len(), 1);
        assert!(!pool.is_equipped(1));
    }
}
