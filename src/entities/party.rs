//! Party members
//!
//! The five fixed party slots, each with a level, equipment, health and an
//! attack pool. Cached stats are only written through recomputation.

use serde::{Deserialize, Serialize};

use crate::combat::AttackPool;
use crate::items::Equipment;
use crate::progression::DerivedStats;

/// Fixed party slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartyKey {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl PartyKey {
    pub fn all() -> [PartyKey; 5] {
        [PartyKey::One, PartyKey::Two, PartyKey::Three, PartyKey::Four, PartyKey::Five]
    }

    pub fn index(&self) -> usize {
        match self {
            PartyKey::One => 0,
            PartyKey::Two => 1,
            PartyKey::Three => 2,
            PartyKey::Four => 3,
            PartyKey::Five => 4,
        }
    }

    /// Name a fresh member starts with
    pub fn default_name(&self) -> &'static str {
        match self {
            PartyKey::One => "Kaden",
            PartyKey::Two => "Member 2",
            PartyKey::Three => "Member 3",
            PartyKey::Four => "Member 4",
            PartyKey::Five => "Member 5",
        }
    }
}

/// A single party member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyMember {
    name: String,
    /// `None` means not recruited
    level: Option<u32>,
    equipment: Equipment,
    /// Current health, unset until stats are first computed
    health: Option<f64>,
    #[serde(default)]
    stats: Option<DerivedStats>,
    #[serde(default)]
    attacks: AttackPool,
}

impl PartyMember {
    pub fn new(name: impl Into<String>, level: Option<u32>) -> Self {
        Self {
            name: name.into(),
            level,
            equipment: Equipment::new(),
            health: None,
            stats: None,
            attacks: AttackPool::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Option<u32> {
        self.level
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    pub fn health(&self) -> Option<f64> {
        self.health
    }

    /// Stats from the last recomputation
    pub fn stats(&self) -> Option<&DerivedStats> {
        self.stats.as_ref()
    }

    pub fn attacks(&self) -> &AttackPool {
        &self.attacks
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub(crate) fn set_level(&mut self, level: Option<u32>) {
        self.level = level;
    }

    pub(crate) fn equipment_mut(&mut self) -> &mut Equipment {
        &mut self.equipment
    }

    pub(crate) fn attacks_mut(&mut self) -> &mut AttackPool {
        &mut self.attacks
    }

    /// Store recomputed stats. Health is filled to max only the first time.
    pub(crate) fn apply_stats(&mut self, stats: Option<DerivedStats>) {
        if let Some(stats) = &stats {
            if self.health.is_none() {
                self.health = Some(stats.max_health);
            }
        }
        self.stats = stats;
    }

    /// Back to a fresh recruit: empty slots, no attacks, unset health
    pub(crate) fn reset(&mut self) {
        self.equipment = Equipment::new();
        self.attacks.clear();
        self.health = None;
        self.stats = None;
    }
}

/// The five party slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    members: [PartyMember; 5],
}

impl Party {
    pub fn new() -> Self {
        Self {
            members: PartyKey::all().map(|key| PartyMember::new(key.default_name(), Some(1))),
        }
    }

    pub fn get(&self, key: PartyKey) -> &PartyMember {
        &self.members[key.index()]
    }

    pub(crate) fn get_mut(&mut self, key: PartyKey) -> &mut PartyMember {
        &mut self.members[key.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (PartyKey, &PartyMember)> {
        PartyKey::all().into_iter().zip(self.members.iter())
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut PartyMember> {
        self.members.iter_mut()
    }
}

impl Default for Party {
    fn default() -> Self {
        Self::new()
    }
}
