//! RON data loader
//!
//! Loads the catalog from external RON files, with fallback to hardcoded defaults.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::attacks::{default_attack_catalog, AttackCatalog, AttackDefinition};
use super::enemies::{default_enemy_catalog, EnemyCatalog, EnemyDefinition};
use super::items::{default_item_catalog, ItemCatalog};
use crate::items::ItemDefinition;

/// Immutable game catalog: items, enemies and attacks
#[derive(Debug, Clone)]
pub struct Catalog {
    pub items: ItemCatalog,
    pub enemies: EnemyCatalog,
    pub attacks: AttackCatalog,
}

impl Catalog {
    /// Load the catalog from a data directory, falling back per file
    pub fn load(base_path: &Path) -> Self {
        Self {
            items: load_or_default(base_path, "items.ron", default_item_catalog),
            enemies: load_or_default(base_path, "enemies.ron", default_enemy_catalog),
            attacks: load_or_default(base_path, "attacks.ron", default_attack_catalog),
        }
    }

    pub fn item(&self, name: &str) -> Option<&ItemDefinition> {
        self.items.find(name)
    }

    pub fn enemy(&self, name: &str) -> Option<&EnemyDefinition> {
        self.enemies.find(name)
    }

    pub fn attack(&self, name: &str) -> Option<&AttackDefinition> {
        self.attacks.find(name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            items: default_item_catalog(),
            enemies: default_enemy_catalog(),
            attacks: default_attack_catalog(),
        }
    }
}

fn load_or_default<T: DeserializeOwned>(base_path: &Path, file: &str, default: fn() -> T) -> T {
    let path = base_path.join(file);
    if path.exists() {
        match fs::read_to_string(&path) {
            Ok(content) => match ron::from_str(&content) {
                Ok(data) => {
                    log::info!("Loaded {}", path.display());
                    return data;
                }
                Err(e) => log::warn!("Failed to parse {}: {}", file, e),
            },
            Err(e) => log::warn!("Failed to read {}: {}", file, e),
        }
    }
    default()
}

fn write_ron<T: Serialize>(base_path: &Path, file: &str, data: &T) -> anyhow::Result<()> {
    let ron = ron::ser::to_string_pretty(data, ron::ser::PrettyConfig::default())?;
    fs::write(base_path.join(file), ron)?;
    Ok(())
}

/// Export all default data to RON files for easy editing
pub fn export_default_data(base_path: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(base_path)?;
    write_ron(base_path, "items.ron", &default_item_catalog())?;
    write_ron(base_path, "enemies.ron", &default_enemy_catalog())?;
    write_ron(base_path, "attacks.ron", &default_attack_catalog())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("cryptwalk-data-{}-{}", tag, std::process::id()))
    }

    #[test]
    fn test_export_then_load() {
        let dir = scratch_dir("export");
        export_default_data(&dir).unwrap();
        assert!(dir.join("items.ron").exists());
        assert!(dir.join("enemies.ron").exists());
        assert!(dir.join("attacks.ron").exists());

        let catalog = Catalog::load(&dir);
        let defaults = Catalog::default();
        assert_eq!(catalog.items.items, defaults.items.items);
        assert_eq!(catalog.enemies.enemies, defaults.enemies.enemies);
        assert_eq!(catalog.attacks.attacks, defaults.attacks.attacks);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_dir_uses_defaults() {
        let catalog = Catalog::load(Path::new("no/such/data/dir"));
        assert!(catalog.item("Wooden Sword").is_some());
        assert!(catalog.enemy("King").is_some());
        assert!(catalog.attack("stap").is_some());
    }

    #[test]
    fn test_bad_file_falls_back_per_file() {
        let dir = scratch_dir("bad");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("items.ron"), "(items: [ broken").unwrap();
        fs::write(
            dir.join("attacks.ron"),
            "(attacks: [(name: \"poke\", str_multiplier: 0.5)])",
        )
        .unwrap();

        let catalog = Catalog::load(&dir);
        assert!(catalog.item("Wooden Sword").is_some());
        assert_eq!(catalog.attacks.attacks.len(), 1);
        assert_eq!(catalog.attack("poke").unwrap().str_multiplier, 0.5);
        let _ = fs::remove_dir_all(&dir);
    }
}
