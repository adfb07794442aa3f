//! Loot generation system
//!
//! Rolls a rarity from level-banded weights, picks a catalog item of that
//! rarity and adds a level-scaled copy to the inventory.

use rand::seq::SliceRandom;
use rand::Rng;

use super::inventory::Inventory;
use super::item::{ItemDefinition, ItemId, ItemStats, Rarity};
use crate::data::ItemCatalog;

/// Rarities tried, best first, when the rolled rarity has no items
const FALLBACK_LADDER: [Rarity; 6] = [
    Rarity::Legendary,
    Rarity::Epic,
    Rarity::Rare,
    Rarity::Uncommon,
    Rarity::Common,
    Rarity::Base,
];

/// Drop weights for a level. Mythical and above never drop at random.
pub fn rarity_weights(level: u32) -> &'static [(Rarity, u32)] {
    match level {
        0..=10 => &[(Rarity::Base, 50), (Rarity::Common, 40), (Rarity::Uncommon, 10)],
        11..=20 => &[
            (Rarity::Base, 30),
            (Rarity::Common, 40),
            (Rarity::Uncommon, 20),
            (Rarity::Rare, 10),
        ],
        21..=30 => &[
            (Rarity::Base, 20),
            (Rarity::Common, 35),
            (Rarity::Uncommon, 25),
            (Rarity::Rare, 15),
            (Rarity::Epic, 5),
        ],
        31..=40 => &[
            (Rarity::Base, 5),
            (Rarity::Common, 20),
            (Rarity::Uncommon, 25),
            (Rarity::Rare, 25),
            (Rarity::Epic, 15),
            (Rarity::Legendary, 10),
        ],
        _ => &[
            (Rarity::Common, 10),
            (Rarity::Uncommon, 20),
            (Rarity::Rare, 25),
            (Rarity::Epic, 25),
            (Rarity::Legendary, 20),
        ],
    }
}

/// Roll a rarity for `level`, skipping rarities the catalog has no items for
pub fn roll_rarity(catalog: &ItemCatalog, level: u32, rng: &mut impl Rng) -> Option<Rarity> {
    let weights: Vec<(Rarity, u32)> = rarity_weights(level)
        .iter()
        .copied()
        .filter(|(rarity, _)| !catalog.by_rarity(*rarity).is_empty())
        .collect();
    let total: u32 = weights.iter().map(|(_, w)| w).sum();
    if total == 0 {
        return None;
    }

    let mut roll = rng.gen_range(0..total);
    for (rarity, weight) in weights {
        if roll < weight {
            return Some(rarity);
        }
        roll -= weight;
    }
    None
}

/// Scale drop stats by `sqrt(level)`. Negative stats are rounded but not scaled.
pub fn scale_drop_stats(stats: &ItemStats, level: u32) -> ItemStats {
    let factor = f64::from(level.max(1)).sqrt();
    stats.map_combat(|v| if v > 0.0 { (v * factor).round() } else { v.round() })
}

fn pick_candidates<'a>(catalog: &'a ItemCatalog, rarity: Option<Rarity>) -> Vec<&'a ItemDefinition> {
    if let Some(rarity) = rarity {
        let pool = catalog.by_rarity(rarity);
        if !pool.is_empty() {
            return pool;
        }
    }
    for rarity in FALLBACK_LADDER {
        let pool = catalog.by_rarity(rarity);
        if !pool.is_empty() {
            return pool;
        }
    }
    catalog.items.iter().collect()
}

/// Generate a random item for `level` and add it to the inventory.
///
/// `forced` skips the rarity roll. Returns `None` only for an empty catalog.
pub fn generate_random_item(
    catalog: &ItemCatalog,
    inventory: &mut Inventory,
    level: u32,
    forced: Option<Rarity>,
    rng: &mut impl Rng,
) -> Option<ItemId> {
    let level = level.max(1);
    let rarity = forced.or_else(|| roll_rarity(catalog, level, rng));
    let candidates = pick_candidates(catalog, rarity);
    let template = candidates.choose(rng)?;

    let mut item = (*template).clone();
    item.stats = scale_drop_stats(&template.stats, level);
    log::debug!("Generated {} ({}) at level {}", item.name, item.rarity.name(), level);
    Some(inventory.add(item, level))
}
