//! Dungeon progression
//!
//! Which levels have been cleared and how far along the path the party may go.

use serde::{Deserialize, Serialize};

use super::map::{Dungeon, DUNGEON_TILES_KEY};
use crate::save::store::{load_json, store_json, KeyValueStore, StoreError};

/// Store key for the persisted progression
pub const PROGRESSION_KEY: &str = "dungeonProgressionData";

/// Cleared levels and the unlock frontier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DungeonProgression {
    pub cleared_levels: Vec<usize>,
    pub unlocked_up_to_level: usize,
}

impl Default for DungeonProgression {
    fn default() -> Self {
        Self {
            cleared_levels: Vec::new(),
            unlocked_up_to_level: 1,
        }
    }
}

impl DungeonProgression {
    /// Load from the store; missing or malformed data is a fresh progression
    pub fn load(store: &impl KeyValueStore) -> Self {
        load_json(store, PROGRESSION_KEY)
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StoreError> {
        store_json(store, PROGRESSION_KEY, self)
    }

    pub fn is_cleared(&self, level: usize) -> bool {
        self.cleared_levels.contains(&level)
    }

    /// Record a cleared level and push the frontier past it
    pub fn clear_level(&mut self, level: usize) {
        if !self.is_cleared(level) {
            self.cleared_levels.push(level);
        }
        if level >= self.unlocked_up_to_level {
            self.unlocked_up_to_level = level + 1;
        }
    }

    /// Mark cleared tiles and open every tile up to the frontier.
    /// Never closes a tile that is already open.
    pub fn apply_to(&self, dungeon: &mut Dungeon) {
        for tile in dungeon.tiles_mut() {
            if self.is_cleared(tile.level) {
                tile.cleared = true;
            }
            if tile.level <= self.unlocked_up_to_level {
                tile.status = true;
            }
        }
    }

    pub fn highest_unlocked_level(&self) -> usize {
        self.unlocked_up_to_level
    }
}

/// Highest level whose tile is cleared, 0 when none is
pub fn highest_cleared_level(dungeon: &Dungeon) -> usize {
    dungeon
        .tiles()
        .filter(|t| t.cleared)
        .map(|t| t.level)
        .max()
        .unwrap_or(0)
}

/// Clear a level, persist the progression and update the stored tiles
pub fn clear_level_and_unlock(
    store: &mut impl KeyValueStore,
    dungeon: &mut Dungeon,
    level: usize,
) -> DungeonProgression {
    let mut progression = DungeonProgression::load(store);
    progression.clear_level(level);
    if let Err(e) = progression.save(store) {
        log::warn!("Failed to save dungeon progression: {}", e);
    }

    if !dungeon.is_empty() {
        progression.apply_to(dungeon);
        if let Err(e) = store_json(store, DUNGEON_TILES_KEY, dungeon) {
            log::warn!("Failed to store dungeon tiles: {}", e);
        }
    }

    log::info!(
        "Level {} cleared, unlocked up to level {}",
        level,
        progression.unlocked_up_to_level
    );
    progression
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::store::MemoryStore;
    use crate::world::tile::{DungeonTile, TileKind};

    fn line(length: usize) -> Dungeon {
        let mut dungeon = Dungeon::new();
        for level in 1..=length {
            let kind = TileKind::classify(level, length);
            dungeon.insert(DungeonTile::new(0, level - 1, level, kind, vec![]));
        }
        dungeon
    }

    #[test]
    fn test_clear_level() {
        let mut progression = DungeonProgression::default();
        progression.clear_level(2);
        progression.clear_level(2);
        assert_eq!(progression.cleared_levels, vec![2]);
        assert_eq!(progression.highest_unlocked_level(), 3);

        // clearing an earlier level leaves the frontier alone
        progression.clear_level(1);
        assert_eq!(progression.highest_unlocked_level(), 3);
    }

    #[test]
    fn test_apply_to() {
        let mut dungeon = line(6);
        let progression = DungeonProgression {
            cleared_levels: vec![2, 3],
            unlocked_up_to_level: 4,
        };
        progression.apply_to(&mut dungeon);
        assert!(dungeon.tile_at_level(3).unwrap().cleared);
        assert!(dungeon.tile_at_level(4).unwrap().status);
        assert!(!dungeon.tile_at_level(5).unwrap().status);
        assert_eq!(highest_cleared_level(&dungeon), 3);
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_string(&DungeonProgression::default()).unwrap();
        assert_eq!(json, r#"{"clearedLevels":[],"unlockedUpToLevel":1}"#);
    }

    #[test]
    fn test_clear_level_and_unlock_persists() {
        let mut store = MemoryStore::new();
        let mut dungeon = line(10);
        clear_level_and_unlock(&mut store, &mut dungeon, 2);

        let stored = DungeonProgression::load(&store);
        assert_eq!(stored.unlocked_up_to_level, 3);
        let tiles: Dungeon = load_json(&store, DUNGEON_TILES_KEY);
        assert!(tiles.tile_at_level(2).unwrap().cleared);
        assert!(tiles.tile_at_level(3).unwrap().status);
    }
}
