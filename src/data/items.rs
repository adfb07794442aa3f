//! Item catalog data
//!
//! The built-in item table, used when no items.ron is present.

use serde::{Deserialize, Serialize};

use crate::items::{ItemDefinition, ItemSlot, ItemStats, Rarity};

/// Collection of item definitions, keyed by name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

impl ItemCatalog {
    /// Find an item by exact name
    pub fn find(&self, name: &str) -> Option<&ItemDefinition> {
        self.items.iter().find(|i| i.name == name)
    }

    /// All items of a rarity, in catalog order
    pub fn by_rarity(&self, rarity: Rarity) -> Vec<&ItemDefinition> {
        self.items.iter().filter(|i| i.rarity == rarity).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

fn item(
    name: &str,
    slot: ItemSlot,
    rarity: Rarity,
    stats: [f64; 5],
    attack: &str,
    ability: u32,
) -> ItemDefinition {
    let [strength, speed, magic, defense, health] = stats;
    ItemDefinition {
        name: name.to_string(),
        slot,
        rarity,
        stats: ItemStats::new(strength, speed, magic, defense, health),
        ability: (ability != 0).then_some(ability),
        attack: Some(attack.to_string()),
        role: None,
        image: None,
    }
}

/// Create the default item catalog (hardcoded fallback)
///
/// Stats are listed as `[strength, speed, magic, defense, health]`.
pub fn default_item_catalog() -> ItemCatalog {
    use ItemSlot::*;
    use Rarity::*;

    ItemCatalog {
        items: vec![
            // Starting gear
            item("Wooden Sword", Weapon, Common, [3.0, 0.5, 0.0, 2.0, 0.0], "stap", 1),
            item("Stick", Weapon, Base, [1.0, 1.0, 1.0, 0.0, 0.0], "slap", 0),
            item("Grass Staff", Weapon, Common, [0.0, 0.5, 3.0, 2.0, 0.0], "leaf impale", 1),

            // Coast
            item("Coral Dagger", Weapon, Uncommon, [4.0, 2.0, 1.5, 0.0, 0.0], "coral leech", 2),
            item("Spell Shield", Offhand, Uncommon, [0.0, 0.0, 1.5, 10.0, 5.0], "reflection", 3),
            item("Sea Crystal", Offhand, Uncommon, [0.0, 0.5, 4.0, 0.0, 5.0], "sea shield", 2),
            item("Shell", Offhand, Uncommon, [2.5, 0.0, 0.0, 15.0, 5.0], "none", 0),

            // Iron set
            item("Iron Helmet", Helmet, Uncommon, [0.0, 0.0, 0.0, 5.0, 3.0], "none", 0),
            item("Iron Chestplate", Chest, Uncommon, [0.5, 0.0, 0.0, 10.0, 6.0], "none", 0),
            item("Iron Legging", Leg, Uncommon, [0.0, 0.5, 0.0, 7.0, 2.0], "none", 0),
            item("Iron Boots", Boot, Uncommon, [0.0, 1.0, 0.0, 3.0, 1.0], "none", 0),

            // Rare
            item("Spiked Shield", Weapon, Rare, [7.0, 0.0, 0.0, 15.0, 10.0], "Charge", 4),
            item("Grimore", Weapon, Rare, [0.0, 1.5, 12.0, 0.0, 0.0], "Plasma Blast", 5),
            item("Forest Crown", Helmet, Rare, [0.0, 3.0, 5.0, 5.0, 15.0], "Tree People", 6),
            item("Frosted Helmet", Helmet, Rare, [0.0, 0.0, 2.0, 5.0, 8.0], "none", 0),
            item("Frosted Chest", Chest, Rare, [0.0, 0.0, 2.0, 20.0, 14.0], "none", 0),
            item("Frosted Leg", Leg, Rare, [0.0, 0.0, 1.0, 10.0, 6.0], "none", 0),
            item("Frosted Boots", Boot, Rare, [0.0, 3.0, 1.0, 3.0, 3.0], "none", 0),
            item("Ice Spear", Weapon, Rare, [10.0, 1.5, 1.0, 0.0, 0.0], "plunge", 1),

            // Epic
            item("Shadow Staff", Weapon, Epic, [2.0, 1.0, 22.0, 0.0, 0.0], "shadow vortex", 7),
            item("Blaze Blade", Weapon, Epic, [16.0, 5.0, 7.0, 3.0, 0.0], "Incenerate", 8),
            item("Gem Helmet", Helmet, Epic, [3.0, 0.0, 4.0, 12.0, 13.0], "none", 3),
            item("Gem Chest", Chest, Epic, [4.0, 0.0, 5.0, 26.0, 17.0], "none", 0),
            item("Gem Legs", Leg, Epic, [3.0, 2.0, 4.0, 15.0, 12.0], "none", 0),
            item("Gem Boots", Boot, Epic, [2.0, 3.0, 3.0, 25.0, 10.0], "none", 3),
            item("Water Skaters", Boot, Epic, [0.0, 0.0, 1.0, 11.0, 15.0], "skater slice", 9),

            // Legendary
            item("Energy Saber", Weapon, Legendary, [30.0, 1.0, 4.0, 20.0, 0.0], "force strike", 10),
            item("Demon Sythe", Weapon, Legendary, [50.0, 1.0, 4.0, 0.0, 0.0], "Grim slice", 11),
            item("Lightning Spear", Offhand, Legendary, [30.0, 8.0, 3.0, 5.0, 0.0], "Thunder", 12),
            item("Pixel Sword", Weapon, Legendary, [40.0, 1.0, 2.0, 15.0, 10.0], "Combo", 13),
            item("Ice Cream Gun", Weapon, Legendary, [0.0, 0.0, 5.0, 1.0, 0.0], "Chilled Cream", 14),

            // Mythical
            item("Running Spikes", Boot, Mythical, [5.0, 8.0, 2.0, 0.0, 0.0], "none", 15),
            item("Rulers Hand", Weapon, Mythical, [65.0, 1.0, 0.0, 65.0, 25.0], "Arise", 16),
            item("Muramasa", Weapon, Mythical, [110.0, 2.0, 0.0, 0.0, 10.0], "Pure skill", 17),
            item("Spell Blade", Weapon, Mythical, [500.0, 1.0, 5.0, 900.0, 0.0], "spell infused", 18),
            item("Enhanced Stick", Weapon, Mythical, [20.0, 2.0, 2.0, 6.0, 0.0], "enhance", 19),

            // Artifact
            item("Divine Crown", Helmet, Artifact, [0.0, 0.0, 0.0, 100.0, 40.0], "Rulers Authority", 20),
        ],
    }
}
