//! Equipment system
//!
//! Six named slots per party member, each holding an inventory item name.

use serde::{Deserialize, Serialize};

use super::item::ItemSlot;

/// Party member equipment slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    Helmet,
    Chest,
    Legs,
    Boots,
    MainHand,
    OffHand,
}

impl EquipSlot {
    /// Map an item's data slot onto an equipment slot
    pub fn for_item_slot(slot: ItemSlot) -> Option<Self> {
        match slot {
            ItemSlot::Helmet => Some(EquipSlot::Helmet),
            ItemSlot::Chest => Some(EquipSlot::Chest),
            ItemSlot::Leg => Some(EquipSlot::Legs),
            ItemSlot::Boot => Some(EquipSlot::Boots),
            ItemSlot::Weapon => Some(EquipSlot::MainHand),
            ItemSlot::Offhand => Some(EquipSlot::OffHand),
            ItemSlot::Unrecognized => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EquipSlot::Helmet => "Helmet",
            EquipSlot::Chest => "Chest",
            EquipSlot::Legs => "Legs",
            EquipSlot::Boots => "Boots",
            EquipSlot::MainHand => "Main Hand",
            EquipSlot::OffHand => "Off Hand",
        }
    }

    /// Get all slots in display order
    pub fn all() -> &'static [EquipSlot] {
        &[
            EquipSlot::Helmet,
            EquipSlot::Chest,
            EquipSlot::Legs,
            EquipSlot::Boots,
            EquipSlot::MainHand,
            EquipSlot::OffHand,
        ]
    }
}

/// Item names held in each slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub helmet: Option<String>,
    pub chest: Option<String>,
    pub legs: Option<String>,
    pub boots: Option<String>,
    pub main_hand: Option<String>,
    pub off_hand: Option<String>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<String> {
        match slot {
            EquipSlot::Helmet => &mut self.helmet,
            EquipSlot::Chest => &mut self.chest,
            EquipSlot::Legs => &mut self.legs,
            EquipSlot::Boots => &mut self.boots,
            EquipSlot::MainHand => &mut self.main_hand,
            EquipSlot::OffHand => &mut self.off_hand,
        }
    }

    /// Get the item name in a slot
    pub fn get(&self, slot: EquipSlot) -> Option<&str> {
        match slot {
            EquipSlot::Helmet => self.helmet.as_deref(),
            EquipSlot::Chest => self.chest.as_deref(),
            EquipSlot::Legs => self.legs.as_deref(),
            EquipSlot::Boots => self.boots.as_deref(),
            EquipSlot::MainHand => self.main_hand.as_deref(),
            EquipSlot::OffHand => self.off_hand.as_deref(),
        }
    }

    /// Put an item name in a slot, returning the previous occupant
    pub fn set(&mut self, slot: EquipSlot, name: impl Into<String>) -> Option<String> {
        self.slot_mut(slot).replace(name.into())
    }

    /// Empty a slot
    pub fn clear(&mut self, slot: EquipSlot) -> Option<String> {
        self.slot_mut(slot).take()
    }

    /// Whether `slot` holds exactly `name`
    pub fn holds(&self, slot: EquipSlot, name: &str) -> bool {
        self.get(slot) == Some(name)
    }

    /// Occupied slots with their item names
    pub fn iter_equipped(&self) -> impl Iterator<Item = (EquipSlot, &str)> + '_ {
        EquipSlot::all()
            .iter()
            .filter_map(move |&slot| self.get(slot).map(|name| (slot, name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_mapping() {
        assert_eq!(EquipSlot::for_item_slot(ItemSlot::Leg), Some(EquipSlot::Legs));
        assert_eq!(EquipSlot::for_item_slot(ItemSlot::Boot), Some(EquipSlot::Boots));
        assert_eq!(EquipSlot::for_item_slot(ItemSlot::Weapon), Some(EquipSlot::MainHand));
        assert_eq!(EquipSlot::for_item_slot(ItemSlot::Offhand), Some(EquipSlot::OffHand));
        assert_eq!(EquipSlot::for_item_slot(ItemSlot::Unrecognized), None);
    }

    #[test]
    fn test_set_replaces_and_clear_empties() {
        let mut eq = Equipment::new();
        assert_eq!(eq.set(EquipSlot::MainHand, "Stick"), None);
        assert_eq!(eq.set(EquipSlot::MainHand, "Wooden Sword"), Some("Stick".to_string()));
        assert!(eq.holds(EquipSlot::MainHand, "Wooden Sword"));
        assert_eq!(eq.clear(EquipSlot::MainHand), Some("Wooden Sword".to_string()));
        assert_eq!(eq.get(EquipSlot::MainHand), None);
    }

    #[test]
    fn test_iter_equipped() {
        let mut eq = Equipment::new();
        eq.set(EquipSlot::Boots, "Iron Boots");
        eq.set(EquipSlot::Helmet, "Iron Helmet");
        let equipped: Vec<_> = eq.iter_equipped().collect();
        assert_eq!(
            equipped,
            vec![(EquipSlot::Helmet, "Iron Helmet"), (EquipSlot::Boots, "Iron Boots")]
        );
    }
}
