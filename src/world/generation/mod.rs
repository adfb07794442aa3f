//! Procedural dungeon generation
//!
//! Lays a fixed-length path across the grid, classifies each tile by its
//! position and fills it with enemies.

pub mod encounters;
pub mod path;

pub use encounters::{enemy_pool, pick_enemies, tier_for_level};
pub use path::{is_simple_path, search_path, serpentine_path, Cell};

use rand::Rng;
use thiserror::Error;

use super::map::{Dungeon, DUNGEON_TILES_KEY};
use super::progression::{DungeonProgression, PROGRESSION_KEY};
use super::tile::{DungeonTile, TileKind};
use crate::config::DungeonConfig;
use crate::data::Catalog;
use crate::save::store::{store_json, try_load_json, KeyValueStore};

/// Grid configurations no path can satisfy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("grid has no cells ({rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("path length must be at least 1")]
    EmptyPath,

    #[error("path of {path_length} tiles does not fit in {cells} cells")]
    PathTooLong { path_length: usize, cells: usize },
}

fn validate(config: &DungeonConfig) -> Result<(), GenerationError> {
    if config.rows == 0 || config.cols == 0 {
        return Err(GenerationError::EmptyGrid {
            rows: config.rows,
            cols: config.cols,
        });
    }
    if config.path_length == 0 {
        return Err(GenerationError::EmptyPath);
    }
    let cells = config.rows * config.cols;
    if config.path_length > cells {
        return Err(GenerationError::PathTooLong {
            path_length: config.path_length,
            cells,
        });
    }
    Ok(())
}

/// Find a path, retrying from fresh starts and falling back to a serpentine
/// walk once the attempts run out
fn find_path(config: &DungeonConfig, rng: &mut impl Rng) -> Vec<Cell> {
    for attempt in 1..=config.max_attempts {
        match search_path(
            config.rows,
            config.cols,
            config.path_length,
            config.max_steps_per_attempt,
            rng,
        ) {
            Some(path) => {
                log::debug!("Path found on attempt {}", attempt);
                return path;
            }
            None => log::debug!("Path attempt {} failed, restarting", attempt),
        }
    }

    log::warn!(
        "No path after {} attempts, using serpentine layout",
        config.max_attempts
    );
    serpentine_path(config.cols, config.path_length)
}

/// Generate a new dungeon
pub fn generate_dungeon(
    config: &DungeonConfig,
    catalog: &Catalog,
    rng: &mut impl Rng,
) -> Result<Dungeon, GenerationError> {
    validate(config)?;

    let path = find_path(config, rng);
    let mut dungeon = Dungeon::new();
    for (i, &(row, col)) in path.iter().enumerate() {
        let level = i + 1;
        let kind = TileKind::classify(level, config.path_length);
        let enemies = pick_enemies(&catalog.enemies, kind, level, config.path_length, rng);
        dungeon.insert(DungeonTile::new(row, col, level, kind, enemies));
    }

    log::info!(
        "Generated dungeon: {} tiles on a {}x{} grid",
        dungeon.len(),
        config.rows,
        config.cols
    );
    Ok(dungeon)
}

/// Generate a dungeon, persist it and reset progression
pub fn generate_and_save(
    store: &mut impl KeyValueStore,
    config: &DungeonConfig,
    catalog: &Catalog,
    rng: &mut impl Rng,
) -> Result<Dungeon, GenerationError> {
    let dungeon = generate_dungeon(config, catalog, rng)?;
    if let Err(e) = store_json(store, DUNGEON_TILES_KEY, &dungeon) {
        log::warn!("Failed to store dungeon tiles: {}", e);
    }
    if let Err(e) = store.remove(PROGRESSION_KEY) {
        log::warn!("Failed to clear dungeon progression: {}", e);
    }
    Ok(dungeon)
}

/// Load the persisted dungeon with its progression applied, generating a new
/// one when nothing usable is stored
pub fn load_or_generate(
    store: &mut impl KeyValueStore,
    config: &DungeonConfig,
    catalog: &Catalog,
    rng: &mut impl Rng,
) -> Result<Dungeon, GenerationError> {
    let Some(mut dungeon) = try_load_json::<Dungeon>(store, DUNGEON_TILES_KEY) else {
        return generate_and_save(store, config, catalog, rng);
    };
    if dungeon.is_empty() {
        return generate_and_save(store, config, catalog, rng);
    }

    DungeonProgression::load(store).apply_to(&mut dungeon);
    if let Err(e) = store_json(store, DUNGEON_TILES_KEY, &dungeon) {
        log::warn!("Failed to store dungeon tiles: {}", e);
    }
    log::info!("Loaded dungeon with {} tiles", dungeon.len());
    Ok(dungeon)
}
