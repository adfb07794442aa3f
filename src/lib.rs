//! Cryptwalk - dungeon crawler simulation core
//!
//! Generates a path-shaped dungeon from a fixed catalog and keeps a party's
//! equipment, derived stats and attack loadouts consistent.

pub mod combat;
pub mod config;
pub mod data;
pub mod entities;
pub mod game;
pub mod items;
pub mod progression;
pub mod save;
pub mod world;

// Re-export commonly used types
pub use config::{DungeonConfig, GameConfig};
pub use data::Catalog;
pub use entities::PartyKey;
pub use game::GameState;
pub use save::{FileStore, KeyValueStore, MemoryStore};
pub use world::{Dungeon, DungeonTile, TileKind};
