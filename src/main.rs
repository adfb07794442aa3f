//! Cryptwalk - Entry Point
//!
//! Loads the configuration and catalog, brings up the persisted dungeon and
//! party, and prints where things stand.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use cryptwalk::config::{GameConfig, CONFIG_FILE};
use cryptwalk::data::{export_default_data, Catalog};
use cryptwalk::entities::PartyKey;
use cryptwalk::game::GameState;
use cryptwalk::progression::{enemy_preview_table, item_preview_table};
use cryptwalk::save::{self, FileStore};
use cryptwalk::world::{self, Dungeon};

/// Dungeon crawler simulation driver
#[derive(Parser)]
#[command(name = "cryptwalk")]
#[command(about = "Generate and inspect a Cryptwalk dungeon and party", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed for the random source
    #[arg(long)]
    seed: Option<u64>,

    /// Throw away the stored dungeon and generate a new one
    #[arg(long)]
    regenerate: bool,

    /// Config file
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Write the built-in catalog to the data directory and exit
    #[arg(long)]
    export_data: bool,

    /// Mark a level cleared and unlock the next one
    #[arg(long, value_name = "LEVEL")]
    clear_level: Option<usize>,

    /// Roll a random item of this level and equip it on the first member
    #[arg(long, value_name = "LEVEL")]
    loot: Option<u32>,

    /// Show an item or enemy from the catalog with its level previews
    #[arg(long, value_name = "NAME")]
    inspect: Option<String>,

    /// List enemies by tier, marking the ones already met
    #[arg(long)]
    bestiary: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("Starting Cryptwalk v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config = GameConfig::load(&cli.config);

    if cli.export_data {
        export_default_data(&config.data_dir)?;
        log::info!("Exported catalog to {}", config.data_dir.display());
        return Ok(());
    }

    let catalog = Catalog::load(&config.data_dir);
    if let Some(name) = &cli.inspect {
        inspect(&catalog, name);
        return Ok(());
    }

    let mut store = match &config.save_dir {
        Some(dir) => FileStore::new(dir)?,
        None => FileStore::open_default()?,
    };
    log::info!("Using store at {}", store.base_dir().display());

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut dungeon = if cli.regenerate {
        world::generate_and_save(&mut store, &config.dungeon, &catalog, &mut rng)?
    } else {
        world::load_or_generate(&mut store, &config.dungeon, &catalog, &mut rng)?
    };

    if let Some(level) = cli.clear_level {
        clear_level(&mut store, &mut dungeon, level);
    }

    let mut state = save::load_game(&store);
    state.set_attack_cap(config.max_equipped_attacks);
    if let Some(level) = cli.loot {
        loot(&mut store, &mut state, &catalog, level, &mut rng);
    }

    print!("{}", dungeon.render_ascii(config.dungeon.rows, config.dungeon.cols));
    print_dungeon_summary(&dungeon);
    print_party(&state, &catalog);
    if cli.bestiary {
        print_bestiary(&store, &catalog);
    }

    if let Err(e) = save::save_game(&mut store, &state) {
        log::warn!("Failed to save game: {}", e);
    }
    Ok(())
}

fn clear_level(store: &mut FileStore, dungeon: &mut Dungeon, level: usize) {
    let Some(tile) = dungeon.tile_at_level(level) else {
        log::warn!("No tile at level {}", level);
        return;
    };
    let now = save::now_millis();
    for enemy in tile.enemies.clone() {
        save::register_enemy_defeated(store, &enemy, now);
    }
    world::clear_level_and_unlock(store, dungeon, level);
}

fn loot(store: &mut FileStore, state: &mut GameState, catalog: &Catalog, level: u32, rng: &mut StdRng) {
    let Some(id) = state.generate_item(catalog, level, None, rng) else {
        log::warn!("Catalog has no items to roll");
        return;
    };
    if let Some(item) = state.inventory().get(id) {
        println!("Looted {} ({}, level {})", item.name(), item.item.rarity.name(), item.level);
        save::register_item_collected(store, item.name(), save::now_millis());
    }
    state.equip_item(catalog, PartyKey::One, id);
}

fn print_dungeon_summary(dungeon: &Dungeon) {
    let unlocked = dungeon.tiles().filter(|t| t.status).count();
    println!(
        "{} tiles, {} open, highest cleared level {}",
        dungeon.len(),
        unlocked,
        world::highest_cleared_level(dungeon)
    );
}

fn print_party(state: &GameState, catalog: &Catalog) {
    for (key, member) in state.party().iter() {
        let Some(level) = member.level() else {
            continue;
        };
        match member.stats() {
            Some(stats) => println!(
                "{} (lv {}): HP {:.0}/{:.0} STR {:.1} MAG {:.1} SPD {:.1} DEF {:.1}",
                member.name(),
                level,
                member.health().unwrap_or(stats.max_health),
                stats.max_health,
                stats.strength,
                stats.magic,
                stats.speed,
                stats.defense
            ),
            None => println!("{} (lv {})", member.name(), level),
        }
        for granted in state.equipped_item_attacks(catalog, key) {
            println!("  {}: {}", granted.slot.name(), granted.attack.describe());
        }
        for record in member.attacks().equipped() {
            println!("  * {} ({})", record.name, record.item_name);
        }
    }
}

fn inspect(catalog: &Catalog, name: &str) {
    if let Some(item) = catalog.item(name) {
        println!("{} [{} {}]", item.name, item.rarity.name(), item.slot.name());
        println!("  Ability: {}", item.ability_effect().description());
        if let Some(attack) = item.granted_attack() {
            match catalog.attack(attack) {
                Some(def) => println!("  Attack: {}", def.describe()),
                None => println!("  Attack: {}", attack),
            }
        }
        for (level, stats) in item_preview_table(&item.stats) {
            println!(
                "  lv {:>3}: STR {:.0} SPD {:.0} MAG {:.0} DEF {:.0} HP {:.0}",
                level, stats.strength, stats.speed, stats.magic, stats.defense, stats.health
            );
        }
    } else if let Some(enemy) = catalog.enemy(name) {
        println!("{} [{}]", enemy.name, enemy.tier.name());
        if let Some(effect) = &enemy.special_effect {
            println!("  {}", effect);
        }
        for (level, stats) in enemy_preview_table(enemy) {
            println!(
                "  lv {:>3}: HP {:.0} STR {:.0} MAG {:.0} SPD {:.0} DEF {:.0} MP {:.0}",
                level, stats.health, stats.strength, stats.magic, stats.speed, stats.defense, stats.mana
            );
        }
    } else {
        println!("Nothing named {} in the catalog", name);
    }
}

fn print_bestiary(store: &FileStore, catalog: &Catalog) {
    let index = save::EnemyIndex::load(store);
    for (tier, enemies) in catalog.enemies.grouped_by_tier() {
        println!("{}", tier.name());
        for enemy in enemies {
            match index.get(&enemy.name) {
                Some(record) => println!(
                    "  {} (met {}, defeated {})",
                    enemy.name, record.times_encountered, record.times_defeated
                ),
                None => println!("  ???"),
            }
        }
    }
}
