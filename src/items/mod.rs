//! Item system

pub mod item;
pub mod inventory;
pub mod equipment;
pub mod loot;

pub use item::{InventoryItem, ItemDefinition, ItemId, ItemSlot, ItemStats, Rarity, SourceUid, NO_ATTACK};
pub use inventory::{Inventory, ItemLookup, TieredLookup};
pub use equipment::{EquipSlot, Equipment};
pub use loot::{generate_random_item, rarity_weights, roll_rarity, scale_drop_stats};
