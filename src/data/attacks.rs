//! Attack definitions
//!
//! Stat multipliers and status effects for item-granted attacks.

use serde::{Deserialize, Serialize};

/// Status effect applied by an attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StatusEffect {
    #[default]
    None,
    Leech,
    Bleed,
    Burn,
    Grim,
    Chill,
    Random,
    PlayerBuff,
}

impl StatusEffect {
    pub fn name(&self) -> &'static str {
        match self {
            StatusEffect::None => "none",
            StatusEffect::Leech => "leech",
            StatusEffect::Bleed => "bleed",
            StatusEffect::Burn => "burn",
            StatusEffect::Grim => "grim",
            StatusEffect::Chill => "chill",
            StatusEffect::Random => "random",
            StatusEffect::PlayerBuff => "player buff",
        }
    }
}

/// Immutable catalog entry for an attack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackDefinition {
    pub name: String,
    #[serde(default)]
    pub str_multiplier: f64,
    #[serde(default)]
    pub magic_multiplier: f64,
    #[serde(default)]
    pub skill_multiplier: f64,
    #[serde(default)]
    pub status: StatusEffect,
    #[serde(default)]
    pub mana_cost: Option<u32>,
    #[serde(default)]
    pub cooldown: Option<u32>,
    #[serde(default)]
    pub group: Option<String>,
}

impl AttackDefinition {
    /// Zero-multiplier stand-in for attacks missing from the catalog
    pub fn none() -> Self {
        Self {
            name: "none".to_string(),
            str_multiplier: 0.0,
            magic_multiplier: 0.0,
            skill_multiplier: 0.0,
            status: StatusEffect::None,
            mana_cost: None,
            cooldown: None,
            group: None,
        }
    }

    /// One-line summary, e.g. `Charge: 1.4x STR 0x MAG + none status`
    pub fn describe(&self) -> String {
        format!(
            "{}: {}x STR {}x MAG + {} status",
            self.name,
            self.str_multiplier,
            self.magic_multiplier,
            self.status.name()
        )
    }
}

/// Collection of attack definitions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttackCatalog {
    pub attacks: Vec<AttackDefinition>,
}

impl AttackCatalog {
    /// Find an attack by exact name
    pub fn find(&self, name: &str) -> Option<&AttackDefinition> {
        self.attacks.iter().find(|a| a.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }
}

fn attack(name: &str, str_multiplier: f64, magic_multiplier: f64, status: StatusEffect) -> AttackDefinition {
    AttackDefinition {
        name: name.to_string(),
        str_multiplier,
        magic_multiplier,
        status,
        ..AttackDefinition::none()
    }
}

/// Create the default attack catalog (hardcoded fallback)
pub fn default_attack_catalog() -> AttackCatalog {
    use StatusEffect::{Bleed, Burn, Chill, Grim, Leech, PlayerBuff, Random};
    const NONE: StatusEffect = StatusEffect::None;

    AttackCatalog {
        attacks: vec![
            attack("stap", 1.0, 0.0, NONE),
            attack("slap", 0.45, 0.45, NONE),
            attack("leaf impale", 0.0, 1.0, NONE),
            attack("coral leech", 1.1, 0.0, Leech),
            attack("reflection", 0.0, 1.2, NONE),
            attack("sea shield", 0.0, 1.0, NONE),
            attack("Charge", 1.4, 0.0, NONE),
            attack("Plasma Blast", 0.0, 1.4, NONE),
            attack("Tree People", 0.4, 0.9, Leech),
            attack("plunge", 1.5, 0.0, Bleed),
            attack("shadow vortex", 0.0, 1.7, NONE),
            attack("Incenerate", 1.4, 1.0, Burn),
            attack("skater slice", 1.6, 0.4, Bleed),
            attack("force strike", 2.2, 1.3, NONE),
            attack("Grim slice", 3.0, 0.0, Grim),
            attack("Thunder", 1.8, 1.8, Burn),
            attack("Combo", 2.3, 0.0, NONE),
            attack("Chilled Cream", 0.0, 0.0, Chill),
            attack("Arise", 0.0, 2.0, NONE),
            attack("Pure skill", 3.4, 0.0, Bleed),
            attack("spell infused", 2.0, 2.5, Random),
            attack("enhance", 0.0, 0.0, PlayerBuff),
            attack("Rulers Authority", 0.0, 4.0, PlayerBuff),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let catalog = default_attack_catalog();
        let charge = catalog.find("Charge").unwrap();
        assert_eq!(charge.describe(), "Charge: 1.4x STR 0x MAG + none status");
        let thunder = catalog.find("Thunder").unwrap();
        assert_eq!(thunder.describe(), "Thunder: 1.8x STR 1.8x MAG + burn status");
    }

    #[test]
    fn test_every_item_attack_is_defined() {
        let attacks = default_attack_catalog();
        let items = crate::data::items::default_item_catalog();
        for item in &items.items {
            if let Some(name) = item.granted_attack() {
                assert!(attacks.contains(name), "missing attack {}", name);
            }
        }
    }

    #[test]
    fn test_status_names() {
        assert_eq!(StatusEffect::PlayerBuff.name(), "player buff");
        assert_eq!(StatusEffect::default(), StatusEffect::None);
    }
}
