//! Tile encounters
//!
//! Picks the enemies placed on each tile, by tile kind and progress along
//! the path.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::{EnemyCatalog, EnemyDefinition};
use crate::world::tile::TileKind;

/// Tier mini-boss tiles draw from
pub const MINIBOSS_TIER: u8 = 5;

/// Highest tier ordinary tiles reach
pub const MAX_REGULAR_TIER: u8 = 4;

/// Regular tier for a position: five equal bands along the path, the last
/// band staying at tier 4
pub fn tier_for_level(level: usize, path_length: usize) -> u8 {
    let path_length = path_length.max(1);
    let band = (level * 5).div_ceil(path_length);
    band.clamp(1, MAX_REGULAR_TIER as usize) as u8
}

/// Enemies a tile may draw from. Falls back to every tiered enemy, then to
/// the whole catalog.
pub fn enemy_pool(catalog: &EnemyCatalog, kind: TileKind, level: usize, path_length: usize) -> Vec<&EnemyDefinition> {
    let pool = match kind {
        TileKind::Start => catalog.in_tier(1),
        TileKind::Boss => match catalog.highest_tier() {
            Some(tier) => catalog.in_tier(tier),
            None => Vec::new(),
        },
        TileKind::MiniBoss => catalog.in_tier(MINIBOSS_TIER),
        TileKind::Forest => catalog.in_tier(tier_for_level(level, path_length)),
        TileKind::Basic => {
            let base = tier_for_level(level, path_length);
            // past the first tenth, neighbouring tiers mix in
            if level * 10 > path_length {
                catalog.in_tier_range(base.saturating_sub(1).max(1), (base + 1).min(MINIBOSS_TIER))
            } else {
                catalog.in_tier(base)
            }
        }
    };
    if !pool.is_empty() {
        return pool;
    }

    let tiered = catalog.in_tier_range(1, u8::MAX);
    if !tiered.is_empty() {
        return tiered;
    }
    catalog.enemies.iter().collect()
}

/// Draw `kind.enemy_count()` enemy names, with replacement
pub fn pick_enemies(
    catalog: &EnemyCatalog,
    kind: TileKind,
    level: usize,
    path_length: usize,
    rng: &mut impl Rng,
) -> Vec<String> {
    let pool = enemy_pool(catalog, kind, level, path_length);
    (0..kind.enemy_count())
        .filter_map(|_| pool.choose(rng).map(|e| e.name.clone()))
        .collect()
}
