//! Dungeon map
//!
//! The generated path, stored as a `"row,col"` keyed mapping of tiles.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::tile::{tile_key, DungeonTile};

/// Store key for the persisted tile mapping
pub const DUNGEON_TILES_KEY: &str = "dungeonTileData";

/// A generated dungeon
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dungeon {
    tiles: BTreeMap<String, DungeonTile>,
}

impl Dungeon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tile: DungeonTile) {
        self.tiles.insert(tile.key(), tile);
    }

    /// Get the tile at a grid position, if it is on the path
    pub fn get(&self, row: usize, col: usize) -> Option<&DungeonTile> {
        self.tiles.get(&tile_key(row, col))
    }

    pub fn get_by_key(&self, key: &str) -> Option<&DungeonTile> {
        self.tiles.get(key)
    }

    /// Tile at a 1-based path position
    pub fn tile_at_level(&self, level: usize) -> Option<&DungeonTile> {
        self.tiles.values().find(|t| t.level == level)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> impl Iterator<Item = &DungeonTile> {
        self.tiles.values()
    }

    pub fn tiles_mut(&mut self) -> impl Iterator<Item = &mut DungeonTile> {
        self.tiles.values_mut()
    }

    /// Tiles in path order
    pub fn path(&self) -> Vec<&DungeonTile> {
        let mut path: Vec<&DungeonTile> = self.tiles.values().collect();
        path.sort_by_key(|t| t.level);
        path
    }

    /// Text rendering of the grid, one glyph per cell, `#` off the path
    pub fn render_ascii(&self, rows: usize, cols: usize) -> String {
        let mut out = String::with_capacity(rows * (cols + 1));
        for row in 0..rows {
            for col in 0..cols {
                let glyph = match self.get(row, col) {
                    Some(tile) if tile.cleared => '+',
                    Some(tile) => tile.kind.glyph(),
                    None => '#',
                };
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }
}
