//! Level scaling previews
//!
//! Power-curve scaling used by the item and enemy index screens to show what
//! an entry looks like at a given level.

use serde::{Deserialize, Serialize};

use crate::data::EnemyDefinition;
use crate::items::ItemStats;

/// Levels shown in preview tables
pub const PREVIEW_LEVELS: [u32; 5] = [1, 10, 25, 50, 100];

/// Item stat exponent
pub const ITEM_SCALE_EXPONENT: f64 = 0.8;

/// Enemy stat exponent
pub const ENEMY_SCALE_EXPONENT: f64 = 0.9;

/// Mana shown for enemies that do not define any
pub const DEFAULT_ENEMY_MANA: f64 = 100.0;

/// `round(base * level^exponent)`
pub fn scale_stat(base: f64, level: u32, exponent: f64) -> f64 {
    (base * f64::from(level).powf(exponent)).round()
}

/// Item stats at `level`. Skill and mana do not scale.
pub fn scale_item_stats(stats: &ItemStats, level: u32) -> ItemStats {
    stats.map_combat(|v| scale_stat(v, level, ITEM_SCALE_EXPONENT))
}

/// Enemy stats at a given level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub health: f64,
    pub strength: f64,
    pub magic: f64,
    pub speed: f64,
    pub defense: f64,
    pub mana: f64,
}

/// Enemy stats at `level`. Mana does not scale.
pub fn scale_enemy_stats(enemy: &EnemyDefinition, level: u32) -> EnemyStats {
    let scale = |v: f64| scale_stat(v, level, ENEMY_SCALE_EXPONENT);
    EnemyStats {
        health: scale(enemy.health),
        strength: scale(enemy.strength),
        magic: scale(enemy.magic),
        speed: scale(enemy.speed),
        defense: scale(enemy.defense),
        mana: enemy.mana.unwrap_or(DEFAULT_ENEMY_MANA),
    }
}

pub fn item_preview_table(stats: &ItemStats) -> Vec<(u32, ItemStats)> {
    PREVIEW_LEVELS
        .iter()
        .map(|&level| (level, scale_item_stats(stats, level)))
        .collect()
}

pub fn enemy_preview_table(enemy: &EnemyDefinition) -> Vec<(u32, EnemyStats)> {
    PREVIEW_LEVELS
        .iter()
        .map(|&level| (level, scale_enemy_stats(enemy, level)))
        .collect()
}
