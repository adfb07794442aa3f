//! Game state
//!
//! The owned aggregate of inventory, party and id counters, and the
//! equipment transitions that keep slots, stats and attack pools consistent.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::{AttackId, AttackRecord, ToggleRejection};
use crate::config::MAX_EQUIPPED_ATTACKS;
use crate::data::{AttackDefinition, Catalog, Enchantment};
use crate::entities::{Party, PartyKey, PartyMember};
use crate::items::{
    generate_random_item, EquipSlot, Inventory, ItemDefinition, ItemId, ItemLookup, Rarity,
    SourceUid, TieredLookup,
};
use crate::progression::compute_member_stats;

/// An attack granted by an item currently sitting in a slot
#[derive(Debug, Clone, PartialEq)]
pub struct EquippedItemAttack {
    pub slot: EquipSlot,
    pub item_name: String,
    pub attack: AttackDefinition,
}

fn default_attack_cap() -> usize {
    MAX_EQUIPPED_ATTACKS
}

/// Inventory, party and counters for one save
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    inventory: Inventory,
    party: Party,
    #[serde(default)]
    next_attack_id: AttackId,
    #[serde(default)]
    next_source_uid: SourceUid,
    /// Unapplied enchantments and how many of each are held
    #[serde(default)]
    enchantments: BTreeMap<Enchantment, u32>,
    #[serde(skip, default = "default_attack_cap")]
    max_equipped_attacks: usize,
}

impl GameState {
    pub fn new() -> Self {
        let mut state = Self {
            inventory: Inventory::new(),
            party: Party::new(),
            next_attack_id: 1,
            next_source_uid: 1,
            enchantments: BTreeMap::new(),
            max_equipped_attacks: MAX_EQUIPPED_ATTACKS,
        };
        state.recompute_stats();
        state
    }

    /// Override the equipped attack limit
    pub fn with_attack_cap(mut self, cap: usize) -> Self {
        self.max_equipped_attacks = cap;
        self
    }

    pub fn set_attack_cap(&mut self, cap: usize) {
        self.max_equipped_attacks = cap;
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn party(&self) -> &Party {
        &self.party
    }

    pub fn member(&self, key: PartyKey) -> &PartyMember {
        self.party.get(key)
    }

    pub fn next_attack_id(&self) -> AttackId {
        self.next_attack_id
    }

    /// Add a copy of a catalog item to the inventory
    pub fn add_item(&mut self, item: ItemDefinition, level: u32) -> ItemId {
        self.inventory.add(item, level)
    }

    /// Roll a random item for `level` into the inventory
    pub fn generate_item(
        &mut self,
        catalog: &Catalog,
        level: u32,
        forced: Option<Rarity>,
        rng: &mut impl Rng,
    ) -> Option<ItemId> {
        generate_random_item(&catalog.items, &mut self.inventory, level, forced, rng)
    }

    /// Put an owned item in its slot.
    ///
    /// Overwrites whatever the slot held. The displaced item's attack records
    /// stay in the pool. If the item grants a known attack, one new record is
    /// added to the member's available attacks. A copy already sitting in
    /// another member's slot is refused.
    pub fn equip_item(&mut self, catalog: &Catalog, key: PartyKey, item_id: ItemId) -> bool {
        let Some(item) = self.inventory.get(item_id) else {
            log::debug!("Equip ignored: item {} not in inventory", item_id);
            return false;
        };
        let Some(slot) = EquipSlot::for_item_slot(item.item.slot) else {
            log::debug!("Equip ignored: {} has no equipment slot", item.name());
            return false;
        };
        if let Some(holder) = item.equipped_by.filter(|holder| *holder != key) {
            log::debug!("Equip ignored: {} already equipped by {:?}", item.name(), holder);
            return false;
        }
        let name = item.name().to_string();
        let granted = item.item.granted_attack().map(str::to_string);

        if let Some(displaced) = self.party.get_mut(key).equipment_mut().set(slot, name.clone()) {
            self.release_occupant(key, slot, &displaced);
        }
        if let Some(item) = self.inventory.get_mut(item_id) {
            item.equipped_by = Some(key);
        }
        self.recompute_member(key);

        if let Some(attack_name) = granted {
            let source_uid = self.ensure_source_uid(item_id);
            match catalog.attack(&attack_name) {
                Some(def) => {
                    let id = self.next_attack_id;
                    self.next_attack_id += 1;
                    let record = AttackRecord::new(id, source_uid, &name, def);
                    self.party.get_mut(key).attacks_mut().add(record);
                }
                None => log::debug!("{} grants unknown attack {}", name, attack_name),
            }
        }
        true
    }

    /// Take an item out of its slot, dropping the attacks it granted.
    ///
    /// Only succeeds for the copy that occupies the member's slot. Another
    /// copy of the same name leaves the slot and the pool alone.
    pub fn unequip_item(&mut self, key: PartyKey, item_id: ItemId) -> bool {
        let Some(item) = self.inventory.get(item_id) else {
            return false;
        };
        let Some(slot) = EquipSlot::for_item_slot(item.item.slot) else {
            return false;
        };
        let source_uid = item.source_uid;
        let member = self.party.get_mut(key);
        if item.equipped_by != Some(key) || !member.equipment().holds(slot, item.name()) {
            log::debug!("Unequip ignored: item {} does not occupy {}", item_id, slot.name());
            return false;
        }

        member.equipment_mut().clear(slot);
        if let Some(uid) = source_uid {
            member.attacks_mut().remove_by_source_uid(uid);
        }
        if let Some(item) = self.inventory.get_mut(item_id) {
            item.equipped_by = None;
        }
        self.recompute_member(key);
        true
    }

    /// Move an attack into the member's loadout
    pub fn equip_attack(&mut self, key: PartyKey, attack_id: AttackId) -> bool {
        let cap = self.max_equipped_attacks;
        match self.party.get_mut(key).attacks_mut().equip(attack_id, cap) {
            Ok(()) => true,
            Err(ToggleRejection::LoadoutFull) => {
                log::warn!("Cannot equip attack {}: {} attacks already equipped", attack_id, cap);
                false
            }
            Err(reason) => {
                log::debug!("Equip attack {} ignored: {:?}", attack_id, reason);
                false
            }
        }
    }

    /// Move an attack back to the available reserve
    pub fn unequip_attack(&mut self, key: PartyKey, attack_id: AttackId) -> bool {
        match self.party.get_mut(key).attacks_mut().unequip(attack_id) {
            Ok(()) => true,
            Err(reason) => {
                log::debug!("Unequip attack {} ignored: {:?}", attack_id, reason);
                false
            }
        }
    }

    pub fn enchantment_count(&self, enchantment: Enchantment) -> u32 {
        self.enchantments.get(&enchantment).copied().unwrap_or(0)
    }

    /// Held enchantments with a non-zero count
    pub fn enchantments(&self) -> impl Iterator<Item = (Enchantment, u32)> + '_ {
        self.enchantments
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(e, count)| (*e, *count))
    }

    pub fn add_enchantment(&mut self, enchantment: Enchantment, count: u32) {
        *self.enchantments.entry(enchantment).or_insert(0) += count;
        log::info!("Gained {} x{}", enchantment.name(), count);
    }

    /// Take up to `count` from the stock. False when none is held.
    pub fn remove_enchantment(&mut self, enchantment: Enchantment, count: u32) -> bool {
        match self.enchantments.get_mut(&enchantment) {
            Some(held) if *held > 0 => {
                *held = held.saturating_sub(count);
                true
            }
            _ => false,
        }
    }

    /// Consume one held enchantment onto an owned item.
    ///
    /// An existing enchantment is replaced and its bonuses taken back out of
    /// the item's stats. Stats are recomputed afterwards.
    pub fn apply_enchantment(&mut self, item_id: ItemId, enchantment: Enchantment) -> bool {
        if self.enchantment_count(enchantment) == 0 {
            log::debug!("Enchant ignored: no {} held", enchantment.name());
            return false;
        }
        let Some(item) = self.inventory.get_mut(item_id) else {
            log::debug!("Enchant ignored: item {} not in inventory", item_id);
            return false;
        };
        match item.enchant(enchantment) {
            Some(old) => log::info!(
                "{} on {} replaced by {}",
                old.name(),
                item.name(),
                enchantment.name()
            ),
            None => log::info!("Enchanted {} with {}", item.name(), enchantment.name()),
        }
        self.remove_enchantment(enchantment, 1);
        self.recompute_stats();
        true
    }

    /// Change a member's level (`None` dismisses them) and recompute
    pub fn set_level(&mut self, key: PartyKey, level: Option<u32>) {
        self.party.get_mut(key).set_level(level);
        self.recompute_member(key);
    }

    pub fn rename(&mut self, key: PartyKey, name: impl Into<String>) {
        self.party.get_mut(key).set_name(name);
    }

    /// Recompute one member's stats from scratch
    pub fn recompute_member(&mut self, key: PartyKey) {
        let stats = compute_member_stats(self.party.get(key), &self.inventory);
        self.party.get_mut(key).apply_stats(stats);
    }

    /// Recompute every member's stats from scratch
    pub fn recompute_stats(&mut self) {
        for key in PartyKey::all() {
            self.recompute_member(key);
        }
    }

    /// Attacks of the items currently in a member's slots.
    ///
    /// Names resolve against owned items first, then the catalog.
    pub fn equipped_item_attacks(&self, catalog: &Catalog, key: PartyKey) -> Vec<EquippedItemAttack> {
        let lookup = TieredLookup::new(&self.inventory, &catalog.items);
        self.party
            .get(key)
            .equipment()
            .iter_equipped()
            .filter_map(|(slot, name)| {
                let attack_name = lookup.lookup(name)?.granted_attack()?;
                let attack = catalog
                    .attack(attack_name)
                    .cloned()
                    .unwrap_or_else(AttackDefinition::none);
                Some(EquippedItemAttack {
                    slot,
                    item_name: name.to_string(),
                    attack,
                })
            })
            .collect()
    }

    /// Clear inventory, slots and attacks
    pub fn reset(&mut self) {
        self.inventory.clear();
        for member in self.party.iter_mut() {
            member.reset();
        }
        self.next_attack_id = 1;
        self.next_source_uid = 1;
        self.recompute_stats();
        log::info!("Inventory and party equipment reset");
    }

    /// Push id counters past every id already in use
    pub(crate) fn repair_counters(&mut self) {
        self.inventory.repair_counter();

        let max_attack = self
            .party
            .iter()
            .filter_map(|(_, m)| m.attacks().max_id())
            .max()
            .unwrap_or(0);
        self.next_attack_id = self.next_attack_id.max(max_attack + 1);

        let max_uid = self.inventory.max_source_uid().unwrap_or(0);
        self.next_source_uid = self.next_source_uid.max(max_uid + 1);
    }

    /// Bring occupant marks in line with the slots.
    ///
    /// Marks pointing at a slot that no longer holds the name are dropped.
    /// A slot with no marked copy claims the first free copy of its name.
    pub(crate) fn repair_occupants(&mut self) {
        let party = &self.party;
        for item in self.inventory.iter_mut() {
            let Some(holder) = item.equipped_by else {
                continue;
            };
            let held = EquipSlot::for_item_slot(item.item.slot)
                .is_some_and(|slot| party.get(holder).equipment().holds(slot, item.name()));
            if !held {
                item.equipped_by = None;
            }
        }

        for (key, member) in self.party.iter() {
            for (slot, name) in member.equipment().iter_equipped() {
                if self
                    .inventory
                    .iter()
                    .any(|i| i.equipped_by == Some(key) && i.fits(slot, name))
                {
                    continue;
                }
                if let Some(item) = self
                    .inventory
                    .iter_mut()
                    .find(|i| i.equipped_by.is_none() && i.fits(slot, name))
                {
                    item.equipped_by = Some(key);
                }
            }
        }
    }

    /// Unmark the copy that sat in `slot` before it was overwritten
    fn release_occupant(&mut self, key: PartyKey, slot: EquipSlot, name: &str) {
        let occupant = self
            .inventory
            .iter_mut()
            .find(|i| i.equipped_by == Some(key) && i.fits(slot, name));
        if let Some(item) = occupant {
            item.equipped_by = None;
        }
    }

    fn ensure_source_uid(&mut self, item_id: ItemId) -> SourceUid {
        let next = self.next_source_uid;
        match self.inventory.get_mut(item_id) {
            Some(item) => match item.source_uid {
                Some(uid) => uid,
                None => {
                    item.source_uid = Some(next);
                    self.next_source_uid += 1;
                    next
                }
            },
            None => next,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(items: &[&str]) -> (Catalog, GameState, Vec<ItemId>) {
        let catalog = Catalog::default();
        let mut state = GameState::new();
        let ids = items
            .iter()
            .map(|name| state.add_item(catalog.item(name).unwrap().clone(), 1))
            .collect();
        (catalog, state, ids)
    }

    #[test]
    fn test_equip_sets_slot_and_stats() {
        let (catalog, mut state, ids) = setup(&["Iron Helmet"]);
        assert!(state.equip_item(&catalog, PartyKey::One, ids[0]));
        let member = state.member(PartyKey::One);
        assert_eq!(member.equipment().get(EquipSlot::Helmet), Some("Iron Helmet"));
        assert_eq!(member.stats().unwrap().defense, 5.0);
        assert_eq!(member.stats().unwrap().max_health, 6.0);
        assert!(member.attacks().is_empty());
    }

    #[test]
    fn test_equip_missing_item_is_noop() {
        let (catalog, mut state, _) = setup(&[]);
        let before = state.clone();
        assert!(!state.equip_item(&catalog, PartyKey::One, 99));
        assert_eq!(state, before);
    }

    #[test]
    fn test_unrecognized_slot_is_noop() {
        let (catalog, mut state, _) = setup(&[]);
        let mut ring = catalog.item("Stick").unwrap().clone();
        ring.name = "Ring".to_string();
        ring.slot = crate::items::ItemSlot::Unrecognized;
        let id = state.add_item(ring, 1);
        let before = state.clone();
        assert!(!state.equip_item(&catalog, PartyKey::One, id));
        assert_eq!(state, before);
    }

    #[test]
    fn test_equip_then_unequip_restores_stats() {
        let (catalog, mut state, ids) = setup(&["Spiked Shield"]);
        let before = *state.member(PartyKey::Two).stats().unwrap();
        assert!(state.equip_item(&catalog, PartyKey::Two, ids[0]));
        assert_ne!(*state.member(PartyKey::Two).stats().unwrap(), before);
        assert!(state.unequip_item(PartyKey::Two, ids[0]));
        assert_eq!(*state.member(PartyKey::Two).stats().unwrap(), before);
    }

    #[test]
    fn test_attack_lifecycle() {
        let (catalog, mut state, ids) = setup(&["Spiked Shield"]);
        assert!(state.equip_item(&catalog, PartyKey::One, ids[0]));

        let pool = state.member(PartyKey::One).attacks();
        assert_eq!(pool.available().len(), 1);
        assert!(pool.equipped().is_empty());
        let record = pool.available()[0].clone();
        assert_eq!(record.name, "Charge");
        assert_eq!(record.item_name, "Spiked Shield");

        assert!(state.equip_attack(PartyKey::One, record.id));
        assert!(!state.equip_attack(PartyKey::One, record.id));
        let pool = state.member(PartyKey::One).attacks();
        assert_eq!(pool.equipped().len(), 1);
        assert!(pool.available().is_empty());
        assert_eq!(pool.len(), 1);

        assert!(state.unequip_item(PartyKey::One, ids[0]));
        let pool = state.member(PartyKey::One).attacks();
        assert!(pool.is_empty());
        assert!(pool.equipped().is_empty());
    }

    #[test]
    fn test_unequip_requires_matching_slot() {
        let (catalog, mut state, ids) = setup(&["Stick", "Wooden Sword"]);
        assert!(state.equip_item(&catalog, PartyKey::One, ids[0]));
        assert!(!state.unequip_item(PartyKey::One, ids[1]));
        assert!(!state.unequip_item(PartyKey::Two, ids[0]));
        assert_eq!(
            state.member(PartyKey::One).equipment().get(EquipSlot::MainHand),
            Some("Stick")
        );
    }

    #[test]
    fn test_unequip_duplicate_copy_is_rejected() {
        let (catalog, mut state, ids) = setup(&["Spiked Shield", "Spiked Shield"]);
        assert!(state.equip_item(&catalog, PartyKey::One, ids[0]));
        let charge = state.member(PartyKey::One).attacks().records()[0].id;
        assert!(state.equip_attack(PartyKey::One, charge));
        let stats = *state.member(PartyKey::One).stats().unwrap();

        assert!(!state.unequip_item(PartyKey::One, ids[1]));
        let member = state.member(PartyKey::One);
        assert_eq!(member.equipment().get(EquipSlot::MainHand), Some("Spiked Shield"));
        assert!(member.attacks().is_equipped(charge));
        assert_eq!(*member.stats().unwrap(), stats);

        assert!(state.unequip_item(PartyKey::One, ids[0]));
        assert!(state.member(PartyKey::One).attacks().is_empty());
        assert!(!state.inventory().get(ids[0]).unwrap().is_equipped());
    }

    #[test]
    fn test_equipped_copy_stays_with_its_member() {
        let (catalog, mut state, ids) = setup(&["Iron Helmet"]);
        assert!(state.equip_item(&catalog, PartyKey::One, ids[0]));
        assert!(!state.equip_item(&catalog, PartyKey::Two, ids[0]));
        assert_eq!(state.member(PartyKey::Two).equipment().get(EquipSlot::Helmet), None);

        // the holder may put it on again
        assert!(state.equip_item(&catalog, PartyKey::One, ids[0]));
        assert_eq!(state.inventory().get(ids[0]).unwrap().equipped_by, Some(PartyKey::One));
    }

    #[test]
    fn test_overwrite_keeps_displaced_attack() {
        let (catalog, mut state, ids) = setup(&["Stick", "Wooden Sword"]);
        assert!(state.equip_item(&catalog, PartyKey::One, ids[0]));
        assert!(state.equip_item(&catalog, PartyKey::One, ids[1]));

        let member = state.member(PartyKey::One);
        assert_eq!(member.equipment().get(EquipSlot::MainHand), Some("Wooden Sword"));
        let names: Vec<&str> = member.attacks().records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["slap", "stap"]);
        assert!(!state.inventory().get(ids[0]).unwrap().is_equipped());
        assert_eq!(state.inventory().get(ids[1]).unwrap().equipped_by, Some(PartyKey::One));
    }

    #[test]
    fn test_repair_occupants() {
        let (catalog, mut state, ids) = setup(&["Stick", "Stick", "Iron Helmet"]);
        state.equip_item(&catalog, PartyKey::One, ids[1]);
        state.equip_item(&catalog, PartyKey::One, ids[2]);
        for id in &ids {
            state.inventory.get_mut(*id).unwrap().equipped_by = None;
        }
        // stale mark on a slot that shows something else
        state.party.get_mut(PartyKey::Two).equipment_mut().set(EquipSlot::Helmet, "Forest Crown");
        state.inventory.get_mut(ids[0]).unwrap().equipped_by = Some(PartyKey::Two);

        state.repair_occupants();
        let holders: Vec<_> = ids
            .iter()
            .map(|id| state.inventory().get(*id).unwrap().equipped_by)
            .collect();
        // the first free copy of a name takes the slot
        assert_eq!(holders, vec![Some(PartyKey::One), None, Some(PartyKey::One)]);
    }

    #[test]
    fn test_apply_enchantment() {
        let (catalog, mut state, ids) = setup(&["Spiked Shield"]);
        state.equip_item(&catalog, PartyKey::One, ids[0]);
        assert_eq!(state.member(PartyKey::One).stats().unwrap().strength, 8.0);

        assert!(!state.apply_enchantment(ids[0], Enchantment::Sharpness));
        assert_eq!(state.inventory().get(ids[0]).unwrap().enchantment, None);

        state.add_enchantment(Enchantment::Sharpness, 2);
        assert!(state.apply_enchantment(ids[0], Enchantment::Sharpness));
        assert_eq!(state.enchantment_count(Enchantment::Sharpness), 1);
        assert_eq!(state.inventory().get(ids[0]).unwrap().stats().strength, 12.0);
        assert_eq!(state.member(PartyKey::One).stats().unwrap().strength, 13.0);

        assert!(!state.apply_enchantment(99, Enchantment::Sharpness));
        assert_eq!(state.enchantment_count(Enchantment::Sharpness), 1);
    }

    #[test]
    fn test_enchantment_replacement() {
        let (catalog, mut state, ids) = setup(&["Spiked Shield"]);
        state.equip_item(&catalog, PartyKey::One, ids[0]);
        state.add_enchantment(Enchantment::Berserker, 1);
        state.add_enchantment(Enchantment::Warding, 1);

        assert!(state.apply_enchantment(ids[0], Enchantment::Berserker));
        let stats = *state.member(PartyKey::One).stats().unwrap();
        assert_eq!((stats.strength, stats.defense), (18.0, 12.0));

        assert!(state.apply_enchantment(ids[0], Enchantment::Warding));
        let item = state.inventory().get(ids[0]).unwrap();
        assert_eq!(item.enchantment, Some(Enchantment::Warding));
        assert_eq!(item.stats().strength, 7.0);
        assert_eq!(item.stats().defense, 25.0);
        let stats = *state.member(PartyKey::One).stats().unwrap();
        assert_eq!((stats.strength, stats.defense), (8.0, 25.0));
        assert_eq!(state.enchantments().count(), 0);
    }

    #[test]
    fn test_remove_enchantment() {
        let (_, mut state, _) = setup(&[]);
        assert!(!state.remove_enchantment(Enchantment::Frost, 1));
        state.add_enchantment(Enchantment::Frost, 2);
        assert!(state.remove_enchantment(Enchantment::Frost, 5));
        assert_eq!(state.enchantment_count(Enchantment::Frost), 0);
        assert!(!state.remove_enchantment(Enchantment::Frost, 1));
    }

    #[test]
    fn test_source_uid_is_stable_across_equips() {
        let (catalog, mut state, ids) = setup(&["Grimore"]);
        state.equip_item(&catalog, PartyKey::One, ids[0]);
        let uid = state.inventory().get(ids[0]).unwrap().source_uid;
        state.unequip_item(PartyKey::One, ids[0]);
        state.equip_item(&catalog, PartyKey::Three, ids[0]);
        assert_eq!(state.inventory().get(ids[0]).unwrap().source_uid, uid);
        let record = &state.member(PartyKey::Three).attacks().records()[0];
        assert_eq!(Some(record.source_uid), uid);
    }

    #[test]
    fn test_attack_cap() {
        let (catalog, state, _) = setup(&[]);
        let mut state = state.with_attack_cap(2);
        let sticks: Vec<ItemId> = (0..3)
            .map(|_| state.add_item(catalog.item("Stick").unwrap().clone(), 1))
            .collect();
        for id in &sticks {
            state.equip_item(&catalog, PartyKey::One, *id);
        }
        let ids: Vec<AttackId> = state
            .member(PartyKey::One)
            .attacks()
            .records()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids.len(), 3);
        assert!(state.equip_attack(PartyKey::One, ids[0]));
        assert!(state.equip_attack(PartyKey::One, ids[1]));
        assert!(!state.equip_attack(PartyKey::One, ids[2]));
    }

    #[test]
    fn test_level_change_recomputes() {
        let (catalog, mut state, ids) = setup(&["Iron Boots"]);
        state.equip_item(&catalog, PartyKey::One, ids[0]);
        state.set_level(PartyKey::One, Some(4));
        let stats = state.member(PartyKey::One).stats().unwrap();
        assert_eq!(stats.strength, 8.0);
        assert_eq!(stats.speed, 7.0);
        // health was filled at level 1 and is not touched again
        assert_eq!(state.member(PartyKey::One).health(), Some(3.0));

        state.set_level(PartyKey::One, None);
        assert!(state.member(PartyKey::One).stats().is_none());
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let (catalog, mut state, ids) = setup(&["Forest Crown"]);
        state.equip_item(&catalog, PartyKey::One, ids[0]);
        let first = state.clone();
        state.recompute_stats();
        state.recompute_stats();
        assert_eq!(state, first);
    }

    #[test]
    fn test_equipped_item_attacks() {
        let (catalog, mut state, ids) = setup(&["Spiked Shield", "Iron Helmet"]);
        state.equip_item(&catalog, PartyKey::One, ids[0]);
        state.equip_item(&catalog, PartyKey::One, ids[1]);
        let attacks = state.equipped_item_attacks(&catalog, PartyKey::One);
        assert_eq!(attacks.len(), 1);
        assert_eq!(attacks[0].item_name, "Spiked Shield");
        assert_eq!(attacks[0].attack.name, "Charge");
    }

    #[test]
    fn test_reset() {
        let (catalog, mut state, ids) = setup(&["Spiked Shield"]);
        state.equip_item(&catalog, PartyKey::One, ids[0]);
        state.reset();
        assert!(state.inventory().is_empty());
        assert!(state.member(PartyKey::One).attacks().is_empty());
        assert_eq!(state.member(PartyKey::One).equipment().iter_equipped().count(), 0);
        assert_eq!(state.next_attack_id(), 1);
    }
}
