//! Inventory system
//!
//! Ordered collection of owned items, plus the name-based lookups the stat
//! engine and attack listings resolve equipment through.

use serde::{Deserialize, Serialize};

use super::item::{InventoryItem, ItemDefinition, ItemId};
use crate::data::ItemCatalog;

/// Resolves an equipped item name to its definition
pub trait ItemLookup {
    fn lookup(&self, name: &str) -> Option<&ItemDefinition>;
}

/// Owned items in acquisition order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<InventoryItem>,
    /// Next id to hand out
    #[serde(default)]
    next_id: ItemId,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a copy of `item` at `level`, returning its new id
    pub fn add(&mut self, item: ItemDefinition, level: u32) -> ItemId {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        self.items.push(InventoryItem {
            id,
            level,
            source_uid: None,
            equipped_by: None,
            enchantment: None,
            item,
        });
        id
    }

    /// Get item by ID
    pub fn get(&self, id: ItemId) -> Option<&InventoryItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut InventoryItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    /// First owned item with this exact name
    pub fn find_by_name(&self, name: &str) -> Option<&InventoryItem> {
        self.items.iter().find(|i| i.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut InventoryItem> {
        self.items.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.next_id = 1;
    }

    /// Highest source uid handed to any owned item
    pub fn max_source_uid(&self) -> Option<u64> {
        self.items.iter().filter_map(|i| i.source_uid).max()
    }

    /// Make sure the id counter is past every stored id
    pub fn repair_counter(&mut self) {
        let floor = self.items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        if self.next_id < floor {
            self.next_id = floor;
        }
    }
}

impl ItemLookup for Inventory {
    fn lookup(&self, name: &str) -> Option<&ItemDefinition> {
        self.find_by_name(name).map(|i| &i.item)
    }
}

/// Owned items first, catalog entries as fallback
pub struct TieredLookup<'a> {
    pub owned: &'a Inventory,
    pub catalog: &'a ItemCatalog,
}

impl<'a> TieredLookup<'a> {
    pub fn new(owned: &'a Inventory, catalog: &'a ItemCatalog) -> Self {
        Self { owned, catalog }
    }
}

impl ItemLookup for TieredLookup<'_> {
    fn lookup(&self, name: &str) -> Option<&ItemDefinition> {
        self.owned.lookup(name).or_else(|| self.catalog.find(name))
    }
}
