//! Derived stats
//!
//! Level-based base stats plus raw equipment bonuses.

use serde::{Deserialize, Serialize};

use crate::entities::PartyMember;
use crate::items::ItemLookup;

/// Stats derived from level and equipment
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedStats {
    pub max_health: f64,
    pub strength: f64,
    pub magic: f64,
    pub speed: f64,
    pub defense: f64,
}

/// Base stats for a level, before equipment
pub fn base_stats(level: u32) -> DerivedStats {
    let l = f64::from(level);
    let s = l.sqrt();
    DerivedStats {
        max_health: (l * s * 3.0).round(),
        strength: (l * s).round(),
        magic: (l * s).round(),
        speed: (s + l).round(),
        defense: 0.0,
    }
}

/// Compute a member's stats. Members without a level are skipped.
///
/// Each occupied slot resolves through `lookup` by exact name; names that do
/// not resolve contribute nothing.
pub fn compute_member_stats(member: &PartyMember, lookup: &impl ItemLookup) -> Option<DerivedStats> {
    let level = member.level()?;
    let mut stats = base_stats(level);

    for (_, name) in member.equipment().iter_equipped() {
        if let Some(item) = lookup.lookup(name) {
            stats.strength += item.stats.strength;
            stats.speed += item.stats.speed;
            stats.magic += item.stats.magic;
            stats.defense += item.stats.defense;
            stats.max_health += item.stats.health;
        }
    }
    Some(stats)
}
