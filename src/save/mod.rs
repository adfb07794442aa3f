//! Save/load system
//!
//! Key-value persistence, the game save and the collection indexes.

pub mod index;
pub mod save_game;
pub mod store;

pub use index::{
    is_enemy_encountered, is_item_collected, now_millis, register_enemy_defeated,
    register_enemy_encountered, register_existing_items, register_item_collected, EnemyIndex,
    EnemyRecord, ItemIndex, ItemRecord, ENEMY_INDEX_KEY, ITEM_INDEX_KEY,
};
pub use save_game::{
    delete_save, load_game, load_save_summary, save_exists, save_game, try_load_game, SaveData,
    SaveError, SaveSummary, SAVE_KEY, SAVE_VERSION,
};
pub use store::{load_json, store_directory, store_json, FileStore, KeyValueStore, MemoryStore, StoreError};
