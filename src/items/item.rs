//! Item definitions
//!
//! Catalog item types, rarities, equip slots and owned inventory items.

use serde::{Deserialize, Serialize};

use crate::data::{AbilityEffect, Enchantment};
use super::equipment::EquipSlot;
use crate::entities::PartyKey;

/// Unique item ID within an inventory
pub type ItemId = u64;

/// Identifier linking attack records to the item instance that granted them
pub type SourceUid = u64;

/// Sentinel used in item data for "grants no attack"
pub const NO_ATTACK: &str = "none";

/// Item rarity tiers, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Base,
    Starter,
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    #[serde(alias = "Mythic")]
    Mythical,
    Artifact,
    Divine,
}

impl Rarity {
    /// Get rarity name
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Base => "Base",
            Rarity::Starter => "Starter",
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythical => "Mythical",
            Rarity::Artifact => "Artifact",
            Rarity::Divine => "Divine",
        }
    }

    /// Get display color RGB
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Rarity::Base => (150, 150, 150),
            Rarity::Starter => (180, 180, 160),
            Rarity::Common => (200, 200, 200),
            Rarity::Uncommon => (100, 255, 100),
            Rarity::Rare => (100, 150, 255),
            Rarity::Epic => (200, 100, 255),
            Rarity::Legendary => (255, 180, 50),
            Rarity::Mythical => (255, 80, 80),
            Rarity::Artifact => (255, 215, 0),
            Rarity::Divine => (100, 255, 255),
        }
    }

    /// Parse a rarity name, accepting "mythic" for Mythical
    pub fn from_name(name: &str) -> Option<Self> {
        let rarity = match name.to_ascii_lowercase().as_str() {
            "base" => Rarity::Base,
            "starter" => Rarity::Starter,
            "common" => Rarity::Common,
            "uncommon" => Rarity::Uncommon,
            "rare" => Rarity::Rare,
            "epic" => Rarity::Epic,
            "legendary" => Rarity::Legendary,
            "mythic" | "mythical" => Rarity::Mythical,
            "artifact" => Rarity::Artifact,
            "divine" => Rarity::Divine,
            _ => return None,
        };
        Some(rarity)
    }

    /// All rarities, lowest first
    pub fn all() -> &'static [Rarity] {
        &[
            Rarity::Base,
            Rarity::Starter,
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legendary,
            Rarity::Mythical,
            Rarity::Artifact,
            Rarity::Divine,
        ]
    }
}

/// Equip slot as written in item data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemSlot {
    Helmet,
    Chest,
    #[serde(alias = "Legs")]
    Leg,
    #[serde(alias = "Boots")]
    Boot,
    Weapon,
    Offhand,
    /// Anything the equipment model has no slot for
    #[serde(other)]
    Unrecognized,
}

impl ItemSlot {
    pub fn name(&self) -> &'static str {
        match self {
            ItemSlot::Helmet => "Helmet",
            ItemSlot::Chest => "Chest",
            ItemSlot::Leg => "Leg",
            ItemSlot::Boot => "Boot",
            ItemSlot::Weapon => "Weapon",
            ItemSlot::Offhand => "Offhand",
            ItemSlot::Unrecognized => "Unrecognized",
        }
    }
}

/// Flat stat block carried by an item
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemStats {
    pub strength: f64,
    pub magic: f64,
    pub speed: f64,
    pub defense: f64,
    pub health: f64,
    pub mana: f64,
    pub skill: f64,
}

impl ItemStats {
    /// Shorthand in the order item tables list them
    pub fn new(strength: f64, speed: f64, magic: f64, defense: f64, health: f64) -> Self {
        Self {
            strength,
            magic,
            speed,
            defense,
            health,
            ..Default::default()
        }
    }

    /// Apply `f` to the five combat stats, leaving mana and skill untouched
    pub fn map_combat(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            strength: f(self.strength),
            magic: f(self.magic),
            speed: f(self.speed),
            defense: f(self.defense),
            health: f(self.health),
            mana: self.mana,
            skill: self.skill,
        }
    }

    /// Add `bonus` field by field
    pub fn add_bonus(&mut self, bonus: &ItemStats) {
        self.strength += bonus.strength;
        self.magic += bonus.magic;
        self.speed += bonus.speed;
        self.defense += bonus.defense;
        self.health += bonus.health;
        self.mana += bonus.mana;
        self.skill += bonus.skill;
    }

    pub fn remove_bonus(&mut self, bonus: &ItemStats) {
        self.add_bonus(&bonus.map_combat(|v| -v));
    }
}

/// Immutable catalog entry for an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub name: String,
    pub slot: ItemSlot,
    pub rarity: Rarity,
    #[serde(default)]
    pub stats: ItemStats,
    /// Ability id, see `AbilityEffect`
    #[serde(default)]
    pub ability: Option<u32>,
    /// Attack name, `"none"` meaning no attack
    #[serde(default)]
    pub attack: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl ItemDefinition {
    /// The attack this item grants, ignoring the "none" sentinel
    pub fn granted_attack(&self) -> Option<&str> {
        self.attack
            .as_deref()
            .filter(|a| !a.is_empty() && !a.eq_ignore_ascii_case(NO_ATTACK))
    }

    pub fn ability_effect(&self) -> AbilityEffect {
        AbilityEffect::from_option(self.ability)
    }
}

/// An owned copy of a catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub level: u32,
    /// Assigned the first time the item is equipped with an attack
    #[serde(default)]
    pub source_uid: Option<SourceUid>,
    /// The member whose slot this copy occupies
    #[serde(default)]
    pub equipped_by: Option<PartyKey>,
    /// Applied enchantment; its bonuses are already folded into the stats
    #[serde(default)]
    pub enchantment: Option<Enchantment>,
    /// Definition with this copy's (possibly level-scaled) stats
    pub item: ItemDefinition,
}

impl InventoryItem {
    pub fn name(&self) -> &str {
        &self.item.name
    }

    pub fn stats(&self) -> &ItemStats {
        &self.item.stats
    }

    pub fn is_equipped(&self) -> bool {
        self.equipped_by.is_some()
    }

    /// Whether this copy is what `slot` holds when it shows `name`
    pub fn fits(&self, slot: EquipSlot, name: &str) -> bool {
        self.name() == name && EquipSlot::for_item_slot(self.item.slot) == Some(slot)
    }

    /// Swap in a new enchantment, returning the one it replaced
    pub fn enchant(&mut self, enchantment: Enchantment) -> Option<Enchantment> {
        let previous = self.enchantment.replace(enchantment);
        if let Some(old) = previous {
            self.item.stats.remove_bonus(&old.bonuses());
        }
        self.item.stats.add_bonus(&enchantment.bonuses());
        previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Base < Rarity::Common);
        assert!(Rarity::Legendary < Rarity::Mythical);
        assert!(Rarity::Artifact < Rarity::Divine);
    }

    #[test]
    fn test_mythic_alias() {
        assert_eq!(Rarity::from_name("mythic"), Some(Rarity::Mythical));
        let parsed: Rarity = serde_json::from_str("\"Mythic\"").unwrap();
        assert_eq!(parsed, Rarity::Mythical);
    }

    #[test]
    fn test_slot_aliases() {
        let legs: ItemSlot = serde_json::from_str("\"Legs\"").unwrap();
        let boots: ItemSlot = serde_json::from_str("\"Boots\"").unwrap();
        let ring: ItemSlot = serde_json::from_str("\"Ring\"").unwrap();
        assert_eq!(legs, ItemSlot::Leg);
        assert_eq!(boots, ItemSlot::Boot);
        assert_eq!(ring, ItemSlot::Unrecognized);
    }

    #[test]
    fn test_none_attack_sentinel() {
        let mut def = ItemDefinition {
            name: "Shell".to_string(),
            slot: ItemSlot::Offhand,
            rarity: Rarity::Uncommon,
            stats: ItemStats::new(2.5, 0.0, 0.0, 15.0, 5.0),
            ability: None,
            attack: Some("none".to_string()),
            role: None,
            image: None,
        };
        assert_eq!(def.granted_attack(), None);
        def.attack = Some("Charge".to_string());
        assert_eq!(def.granted_attack(), Some("Charge"));
        assert_eq!(def.ability_effect(), AbilityEffect::NoEffect);
        def.ability = Some(21);
        assert_eq!(def.ability_effect(), AbilityEffect::SeaShield);
    }

    #[test]
    fn test_enchant_replaces_bonuses() {
        let mut owned = InventoryItem {
            id: 1,
            level: 1,
            source_uid: None,
            equipped_by: None,
            enchantment: None,
            item: ItemDefinition {
                name: "Shell".to_string(),
                slot: ItemSlot::Offhand,
                rarity: Rarity::Uncommon,
                stats: ItemStats::new(2.5, 0.0, 0.0, 15.0, 5.0),
                ability: None,
                attack: None,
                role: None,
                image: None,
            },
        };
        assert_eq!(owned.enchant(Enchantment::Berserker), None);
        assert_eq!(owned.stats().strength, 12.5);
        assert_eq!(owned.stats().defense, 12.0);

        assert_eq!(owned.enchant(Enchantment::Warding), Some(Enchantment::Berserker));
        assert_eq!(*owned.stats(), ItemStats::new(2.5, 0.0, 0.0, 25.0, 5.0));
        assert_eq!(owned.enchantment, Some(Enchantment::Warding));
    }
}
