//! World module
//!
//! The dungeon map, its tiles, generation and progression.

pub mod generation;
pub mod map;
pub mod progression;
pub mod tile;

pub use generation::{generate_and_save, generate_dungeon, load_or_generate, GenerationError};
pub use map::{Dungeon, DUNGEON_TILES_KEY};
pub use progression::{clear_level_and_unlock, highest_cleared_level, DungeonProgression, PROGRESSION_KEY};
pub use tile::{DungeonTile, TileKind};
