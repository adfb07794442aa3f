//! Progression systems
//!
//! Level-derived party stats and level scaling for catalog previews.

pub mod stats;
pub mod scaling;

pub use stats::{base_stats, compute_member_stats, DerivedStats};
pub use scaling::{
    enemy_preview_table, item_preview_table, scale_enemy_stats, scale_item_stats, EnemyStats,
    PREVIEW_LEVELS,
};
