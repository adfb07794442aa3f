//! Enemy catalog data
//!
//! Enemy definitions grouped by tier, with the built-in bestiary as fallback.

use serde::{Deserialize, Serialize};

/// Enemy power tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyTier {
    /// Numbered tier, 1 (weakest) to 7
    Tier(u8),
    Unknown,
}

impl EnemyTier {
    /// Display name used by the bestiary
    pub fn name(&self) -> &'static str {
        match self {
            EnemyTier::Tier(1) => "Tier 1 - Common",
            EnemyTier::Tier(2) => "Tier 2 - Uncommon",
            EnemyTier::Tier(3) => "Tier 3 - Rare",
            EnemyTier::Tier(4) => "Tier 4 - Elite",
            EnemyTier::Tier(5) => "Tier 5 - Mini-Boss",
            EnemyTier::Tier(6) => "Tier 6 - Legendary",
            EnemyTier::Tier(7) => "Tier 7 - Ancient",
            EnemyTier::Tier(_) | EnemyTier::Unknown => "Unknown - Mysterious Entities",
        }
    }

    /// Position in bestiary listings: tiers 1-6, then unknown, then 7
    pub fn display_order(&self) -> u8 {
        match self {
            EnemyTier::Tier(n @ 1..=6) => *n - 1,
            EnemyTier::Tier(7) => 7,
            EnemyTier::Tier(_) | EnemyTier::Unknown => 6,
        }
    }

    /// Numeric tier, if known
    pub fn number(&self) -> Option<u8> {
        match self {
            EnemyTier::Tier(n) => Some(*n),
            EnemyTier::Unknown => None,
        }
    }
}

/// Immutable catalog entry for an enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyDefinition {
    pub name: String,
    pub health: f64,
    pub strength: f64,
    pub magic: f64,
    pub speed: f64,
    pub defense: f64,
    /// Number of health bars to deplete
    #[serde(default = "default_health_bars")]
    pub health_bars: u32,
    #[serde(default)]
    pub special_effect: Option<String>,
    pub tier: EnemyTier,
    #[serde(default)]
    pub mana: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
}

fn default_health_bars() -> u32 {
    1
}

/// Collection of enemy definitions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyCatalog {
    pub enemies: Vec<EnemyDefinition>,
}

impl EnemyCatalog {
    /// Find an enemy by exact name
    pub fn find(&self, name: &str) -> Option<&EnemyDefinition> {
        self.enemies.iter().find(|e| e.name == name)
    }

    /// Enemies of one numbered tier, in catalog order
    pub fn in_tier(&self, tier: u8) -> Vec<&EnemyDefinition> {
        self.enemies
            .iter()
            .filter(|e| e.tier == EnemyTier::Tier(tier))
            .collect()
    }

    /// Enemies whose numbered tier falls in `min..=max`
    pub fn in_tier_range(&self, min: u8, max: u8) -> Vec<&EnemyDefinition> {
        self.enemies
            .iter()
            .filter(|e| e.tier.number().is_some_and(|t| (min..=max).contains(&t)))
            .collect()
    }

    /// Highest numbered tier present
    pub fn highest_tier(&self) -> Option<u8> {
        self.enemies.iter().filter_map(|e| e.tier.number()).max()
    }

    /// Enemies grouped by tier in bestiary display order
    pub fn grouped_by_tier(&self) -> Vec<(EnemyTier, Vec<&EnemyDefinition>)> {
        let mut groups: Vec<(EnemyTier, Vec<&EnemyDefinition>)> = Vec::new();
        for enemy in &self.enemies {
            match groups.iter_mut().find(|(tier, _)| *tier == enemy.tier) {
                Some((_, list)) => list.push(enemy),
                None => groups.push((enemy.tier, vec![enemy])),
            }
        }
        groups.sort_by_key(|(tier, _)| tier.display_order());
        groups
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }
}

fn enemy(
    name: &str,
    tier: u8,
    stats: [f64; 5],
    image: &str,
    special_effect: Option<&str>,
) -> EnemyDefinition {
    let [health, strength, magic, speed, defense] = stats;
    EnemyDefinition {
        name: name.to_string(),
        health,
        strength,
        magic,
        speed,
        defense,
        health_bars: 1,
        special_effect: special_effect.map(str::to_string),
        tier: EnemyTier::Tier(tier),
        mana: None,
        image: Some(format!("Enemies/{}.png", image)),
    }
}

/// Create the default enemy catalog (hardcoded fallback)
///
/// Stats are listed as `[health, strength, magic, speed, defense]`.
pub fn default_enemy_catalog() -> EnemyCatalog {
    EnemyCatalog {
        enemies: vec![
            // === UNDEAD ===
            enemy("skull", 1, [15.0, 3.5, 0.0, 3.5, 0.0], "skull", None),
            enemy("slime", 2, [45.0, 4.0, 0.0, 2.0, 0.15], "slime", None),
            enemy("alien", 3, [20.0, 0.0, 8.5, 4.0, 0.0], "alien", None),
            enemy("Cursed_Knight", 4, [65.0, 12.0, 0.0, 6.5, 30.0], "cursedKnight", None),
            enemy("Shadow", 5, [110.0, 7.0, 5.0, 20.0, 0.0], "shadow", None),

            // === FOREST ===
            enemy("Sapling", 1, [20.0, 0.0, 4.0, 1.0, 0.0], "sapling", None),
            enemy("Vine_Lasher", 2, [30.0, 5.5, 0.0, 3.0, 0.0], "vineLasher", None),
            enemy(
                "Treant", 3, [50.0, 9.0, 0.0, 2.0, 15.0], "treant",
                Some("Rooted Defender: High defense, slow but steady"),
            ),
            enemy(
                "Elder_Ent", 4, [30.0, 0.0, 14.0, 4.0, 30.0], "elderEnt",
                Some("Ancient Magic: Extremely high defense and magic damage"),
            ),
            enemy(
                "Worldroot", 5, [150.0, 3.0, 15.0, 6.0, 5.0], "worldroot",
                Some("BOSS: Nature's Wrath - massive HP pool"),
            ),

            // === ARMY ===
            enemy("Knight", 1, [35.0, 8.0, 0.0, 2.0, 2.0], "knight", None),
            enemy("Archer", 2, [20.0, 6.0, 0.0, 4.0, 1.0], "archer", None),
            enemy("Mage", 3, [20.0, 0.0, 8.0, 5.0, 0.0], "mage", None),
            enemy(
                "Kings-Guard", 4, [50.0, 12.0, 0.0, 4.0, 15.0], "kingsGuard",
                Some("Royal Protector: Balanced high-tier warrior"),
            ),
            enemy(
                "King", 5, [200.0, 10.0, 10.0, 2.0, 20.0], "king",
                Some("BOSS: Royal Authority - hybrid offense with heavy defense"),
            ),

            // === FINAL BOSSES ===
            enemy(
                "divineKing", 6, [300.0, 15.0, 15.0, 3.0, 20.0], "divineKing",
                Some("FINAL BOSS Phase 1: Divine power incarnate"),
            ),
            enemy(
                "demonKing", 6, [500.0, 20.0, 20.0, 4.0, 25.0], "demonKing",
                Some("FINAL BOSS Phase 2: Demonic transformation - ultimate power"),
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_names() {
        assert_eq!(EnemyTier::Tier(5).name(), "Tier 5 - Mini-Boss");
        assert_eq!(EnemyTier::Unknown.name(), "Unknown - Mysterious Entities");
        assert_eq!(EnemyTier::Tier(7).name(), "Tier 7 - Ancient");
    }

    #[test]
    fn test_unknown_sorts_before_tier_seven() {
        assert!(EnemyTier::Tier(6).display_order() < EnemyTier::Unknown.display_order());
        assert!(EnemyTier::Unknown.display_order() < EnemyTier::Tier(7).display_order());
    }

    #[test]
    fn test_default_tiers() {
        let catalog = default_enemy_catalog();
        assert_eq!(catalog.in_tier(1).len(), 3);
        assert_eq!(catalog.in_tier(6).len(), 2);
        assert_eq!(catalog.highest_tier(), Some(6));
        assert_eq!(catalog.in_tier_range(1, 2).len(), 6);
    }

    #[test]
    fn test_grouped_by_tier_order() {
        let mut catalog = default_enemy_catalog();
        catalog.enemies.push(EnemyDefinition {
            name: "Wisp".to_string(),
            health: 1.0,
            strength: 0.0,
            magic: 0.0,
            speed: 0.0,
            defense: 0.0,
            health_bars: 1,
            special_effect: None,
            tier: EnemyTier::Unknown,
            mana: None,
            image: None,
        });
        let groups = catalog.grouped_by_tier();
        let order: Vec<EnemyTier> = groups.iter().map(|(t, _)| *t).collect();
        assert_eq!(order.first(), Some(&EnemyTier::Tier(1)));
        assert_eq!(order.last(), Some(&EnemyTier::Unknown));
    }
}
