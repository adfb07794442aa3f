//! Game save/load system
//!
//! Persists the party, inventory and id counters under a single store key.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::store::{KeyValueStore, StoreError};
use crate::game::GameState;

/// Store key for the game save
pub const SAVE_KEY: &str = "game_save_v1";

/// Save format version for compatibility checking
pub const SAVE_VERSION: u32 = 1;

/// Complete save data structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveData {
    pub version: u32,
    #[serde(flatten)]
    pub state: GameState,
}

/// Brief summary of a save for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveSummary {
    pub items: usize,
    pub recruited: usize,
    pub highest_level: u32,
}

impl SaveSummary {
    pub fn of(state: &GameState) -> Self {
        let levels = state.party().iter().filter_map(|(_, m)| m.level());
        Self {
            items: state.inventory().len(),
            recruited: state.party().iter().filter(|(_, m)| m.level().is_some()).count(),
            highest_level: levels.max().unwrap_or(0),
        }
    }
}

/// Save error types
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("no save found")]
    Missing,

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("malformed save: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("save version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

/// Write the game state, replacing any prior save
pub fn save_game(store: &mut impl KeyValueStore, state: &GameState) -> Result<(), SaveError> {
    let data = SaveData {
        version: SAVE_VERSION,
        state: state.clone(),
    };
    let json = serde_json::to_string(&data)?;
    store.set(SAVE_KEY, json)?;
    log::info!("Game saved ({} items)", state.inventory().len());
    Ok(())
}

/// Read the saved game state, with stale counters repaired and stats
/// recomputed
pub fn try_load_game(store: &impl KeyValueStore) -> Result<GameState, SaveError> {
    let raw = store.get(SAVE_KEY).ok_or(SaveError::Missing)?;
    let save: SaveData = serde_json::from_str(&raw)?;

    if save.version != SAVE_VERSION {
        return Err(SaveError::VersionMismatch {
            expected: SAVE_VERSION,
            found: save.version,
        });
    }

    let mut state = save.state;
    state.repair_counters();
    state.repair_occupants();
    state.recompute_stats();
    Ok(state)
}

/// Load the saved game, or a fresh one when nothing usable is stored
pub fn load_game(store: &impl KeyValueStore) -> GameState {
    match try_load_game(store) {
        Ok(state) => {
            log::info!("Game loaded ({} items)", state.inventory().len());
            state
        }
        Err(SaveError::Missing) => {
            log::info!("No save found, starting fresh");
            GameState::new()
        }
        Err(e) => {
            log::warn!("Discarding save: {}", e);
            GameState::new()
        }
    }
}

pub fn save_exists(store: &impl KeyValueStore) -> bool {
    store.contains(SAVE_KEY)
}

pub fn delete_save(store: &mut impl KeyValueStore) -> Result<(), SaveError> {
    store.remove(SAVE_KEY)?;
    log::info!("Deleted save");
    Ok(())
}

/// Load just the summary of the stored save
pub fn load_save_summary(store: &impl KeyValueStore) -> Result<SaveSummary, SaveError> {
    try_load_game(store).map(|state| SaveSummary::of(&state))
}
