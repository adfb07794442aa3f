//! Data loading and external game content
//!
//! This module handles the immutable catalog of items, enemies and attacks,
//! loaded from external RON files so content can be edited without rebuilding.

pub mod abilities;
pub mod attacks;
pub mod enchantments;
pub mod enemies;
pub mod items;
pub mod loader;

pub use abilities::AbilityEffect;
pub use attacks::{AttackCatalog, AttackDefinition, StatusEffect};
pub use enchantments::Enchantment;
pub use enemies::{EnemyCatalog, EnemyDefinition, EnemyTier};
pub use items::ItemCatalog;
pub use loader::{export_default_data, Catalog};
