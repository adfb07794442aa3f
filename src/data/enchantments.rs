//! Enchantment table
//!
//! Permanent stat bonuses applied to a single owned item. Enchantments are
//! held as a counted stock and consumed when applied.

use serde::{Deserialize, Serialize};

use crate::items::ItemStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Enchantment {
    Sharpness,
    Lifesteal,
    Burning,
    Fortification,
    Swiftness,
    Vitality,
    Hemorrhage,
    Precision,
    #[serde(rename = "Arcane Power")]
    ArcanePower,
    Berserker,
    Resilience,
    Haste,
    Frost,
    Vengeance,
    Warding,
    Multistrike,
    Soulrend,
    #[serde(rename = "Phoenix Rebirth")]
    PhoenixRebirth,
    #[serde(rename = "Temporal Flux")]
    TemporalFlux,
    #[serde(rename = "Chaos Storm")]
    ChaosStorm,
}

impl Enchantment {
    /// Every enchantment, basic ones first
    pub fn all() -> &'static [Enchantment] {
        use Enchantment::*;
        &[
            Sharpness,
            Lifesteal,
            Burning,
            Fortification,
            Swiftness,
            Vitality,
            Hemorrhage,
            Precision,
            ArcanePower,
            Berserker,
            Resilience,
            Haste,
            Frost,
            Vengeance,
            Warding,
            Multistrike,
            Soulrend,
            PhoenixRebirth,
            TemporalFlux,
            ChaosStorm,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Enchantment::Sharpness => "Sharpness",
            Enchantment::Lifesteal => "Lifesteal",
            Enchantment::Burning => "Burning",
            Enchantment::Fortification => "Fortification",
            Enchantment::Swiftness => "Swiftness",
            Enchantment::Vitality => "Vitality",
            Enchantment::Hemorrhage => "Hemorrhage",
            Enchantment::Precision => "Precision",
            Enchantment::ArcanePower => "Arcane Power",
            Enchantment::Berserker => "Berserker",
            Enchantment::Resilience => "Resilience",
            Enchantment::Haste => "Haste",
            Enchantment::Frost => "Frost",
            Enchantment::Vengeance => "Vengeance",
            Enchantment::Warding => "Warding",
            Enchantment::Multistrike => "Multistrike",
            Enchantment::Soulrend => "Soulrend",
            Enchantment::PhoenixRebirth => "Phoenix Rebirth",
            Enchantment::TemporalFlux => "Temporal Flux",
            Enchantment::ChaosStorm => "Chaos Storm",
        }
    }

    /// Parse a display name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|e| e.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn is_legendary(&self) -> bool {
        matches!(
            self,
            Enchantment::Multistrike
                | Enchantment::Soulrend
                | Enchantment::PhoenixRebirth
                | Enchantment::TemporalFlux
                | Enchantment::ChaosStorm
        )
    }

    /// Flat bonus added to the enchanted item's stats. Some are negative.
    pub fn bonuses(&self) -> ItemStats {
        // (strength, speed, magic, defense, health)
        let (st, spd, mag, def, hp) = match self {
            Enchantment::Sharpness => (5.0, 0.0, 0.0, 0.0, 0.0),
            Enchantment::Lifesteal => (0.0, 0.0, 0.0, 0.0, 10.0),
            Enchantment::Burning => (0.0, 0.0, 5.0, 0.0, 0.0),
            Enchantment::Fortification => (0.0, 0.0, 0.0, 5.0, 0.0),
            Enchantment::Swiftness => (0.0, 3.0, 0.0, 0.0, 0.0),
            Enchantment::Vitality => (0.0, 0.0, 0.0, 0.0, 15.0),
            Enchantment::Hemorrhage => (3.0, 2.0, 0.0, 0.0, 0.0),
            Enchantment::Precision => (0.0, 5.0, 0.0, 0.0, 0.0),
            Enchantment::ArcanePower => (0.0, 0.0, 8.0, 0.0, 0.0),
            Enchantment::Berserker => (10.0, 0.0, 0.0, -3.0, 0.0),
            Enchantment::Resilience => (0.0, 0.0, 0.0, 8.0, 5.0),
            Enchantment::Haste => (0.0, 6.0, 0.0, 0.0, 0.0),
            Enchantment::Frost => (0.0, 2.0, 4.0, 0.0, 0.0),
            Enchantment::Vengeance => (6.0, 0.0, 0.0, 0.0, 8.0),
            Enchantment::Warding => (0.0, 0.0, 0.0, 10.0, 0.0),
            Enchantment::Multistrike => (15.0, 10.0, 0.0, 0.0, 0.0),
            Enchantment::Soulrend => (0.0, 0.0, 20.0, 0.0, -10.0),
            Enchantment::PhoenixRebirth => (0.0, 0.0, 0.0, 5.0, 25.0),
            Enchantment::TemporalFlux => (0.0, 15.0, 10.0, 0.0, 0.0),
            Enchantment::ChaosStorm => (12.0, 8.0, 12.0, 0.0, 0.0),
        };
        ItemStats::new(st, spd, mag, def, hp)
    }

    /// Bonus list for display, e.g. "strength: +10, defense: -3"
    pub fn describe_bonuses(&self) -> String {
        let b = self.bonuses();
        [
            ("strength", b.strength),
            ("speed", b.speed),
            ("magic", b.magic),
            ("defense", b.defense),
            ("health", b.health),
        ]
        .iter()
        .filter(|(_, v)| *v != 0.0)
        .map(|(stat, v)| format!("{}: {:+}", stat, v))
        .collect::<Vec<_>>()
        .join(", ")
    }
}
