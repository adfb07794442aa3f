//! Item ability table
//!
//! Maps the integer ability id carried by item data to a tagged effect.

use serde::{Deserialize, Serialize};

/// Passive effect granted by an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityEffect {
    Bleed,
    Coral,
    MagiReflect,
    Spikes,
    Plasma,
    Carried,
    Overuse,
    Burn,
    MultiStrike,
    AfterShock,
    PixelCombo,
    PerfectlyTimed,
    Enhance,
    SpellShield,
    SeaShield,
    /// Unknown or unset ids
    NoEffect,
}

impl AbilityEffect {
    /// Resolve an ability id. Unknown ids resolve to `NoEffect`.
    pub fn from_id(id: u32) -> Self {
        match id {
            1 => AbilityEffect::Bleed,
            2 => AbilityEffect::Coral,
            3 => AbilityEffect::MagiReflect,
            4 => AbilityEffect::Spikes,
            5 => AbilityEffect::Plasma,
            6 => AbilityEffect::Carried,
            7 => AbilityEffect::Overuse,
            8 => AbilityEffect::Burn,
            10 => AbilityEffect::MultiStrike,
            12 => AbilityEffect::AfterShock,
            13 => AbilityEffect::PixelCombo,
            17 => AbilityEffect::PerfectlyTimed,
            19 => AbilityEffect::Enhance,
            20 => AbilityEffect::SpellShield,
            21 => AbilityEffect::SeaShield,
            _ => AbilityEffect::NoEffect,
        }
    }

    /// Resolve an optional ability id
    pub fn from_option(id: Option<u32>) -> Self {
        id.map(Self::from_id).unwrap_or(AbilityEffect::NoEffect)
    }

    pub fn description(&self) -> &'static str {
        match self {
            AbilityEffect::Bleed => "Bleed - Each attack applies bleed status (stacks with attack bleed)",
            AbilityEffect::Coral => "Coral - Consecutive attacks deal +20% bonus damage per turn (max 80%)",
            AbilityEffect::MagiReflect => "Magi Reflect - Reflect 10% of magic damage if you survive magic attacks",
            AbilityEffect::Spikes => "Spikes - Counter attacks with 20% STR damage + apply bleed",
            AbilityEffect::Plasma => "Plasma - Every attack grants random status effect",
            AbilityEffect::Carried => "Carried - Stats buffed 20% per ally over 3, -40% per ally under 3",
            AbilityEffect::Overuse => "Overuse - Consecutive attacks deal 200% bonus damage but 20% recoil",
            AbilityEffect::Burn => "Burn - Set ground aflame for 35% magic damage/turn (3 turns)",
            AbilityEffect::MultiStrike => "MultiStrike - Attack twice when using this item's attack",
            AbilityEffect::AfterShock => "After Shock - Next enemy attack ignored after hitting (2 turn cooldown)",
            AbilityEffect::PixelCombo => "Pixel Combo - 50% damage initially, mini-game to chain attacks (100% after 8 combos)",
            AbilityEffect::PerfectlyTimed => "Perfectly Timed - 50% chance to critically strike for 150% damage",
            AbilityEffect::Enhance => "Enhance - Each attack boosts stats by item's stats with decay (100%, 90%, 81%, ...)",
            AbilityEffect::SpellShield => "Spell Shield - Add 25% of magic stat as bonus defense",
            AbilityEffect::SeaShield => "Sea Shield - Immune to leech, burn, and chill status effects",
            AbilityEffect::NoEffect => "No special ability",
        }
    }
}
