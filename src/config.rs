//! Game configuration
//!
//! Tunables loaded from a RON file, with every field falling back to the
//! built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "config.ron";

/// Maximum attacks a party member can have equipped at once
pub const MAX_EQUIPPED_ATTACKS: usize = 5;

/// Errors raised while reading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Dungeon layout parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    /// Grid height
    pub rows: usize,
    /// Grid width
    pub cols: usize,
    /// Number of tiles on the path
    pub path_length: usize,
    /// Search restarts before falling back to a serpentine path
    pub max_attempts: u32,
    /// Cells a single search attempt may expand
    pub max_steps_per_attempt: u64,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            path_length: 100,
            max_attempts: 50,
            max_steps_per_attempt: 200_000,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub dungeon: DungeonConfig,
    pub max_equipped_attacks: usize,
    /// Directory holding items.ron, enemies.ron and attacks.ron
    pub data_dir: PathBuf,
    /// Where the file store keeps its values. `None` uses the platform data dir.
    pub save_dir: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dungeon: DungeonConfig::default(),
            max_equipped_attacks: MAX_EQUIPPED_ATTACKS,
            data_dir: PathBuf::from("assets/data"),
            save_dir: None,
        }
    }
}

impl GameConfig {
    /// Load config from a RON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::try_load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Failed to load {}: {}. Using defaults.", path.display(), e);
                Self::default()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(ron::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = GameConfig::default();
        assert_eq!(config.dungeon.rows, 20);
        assert_eq!(config.dungeon.cols, 20);
        assert_eq!(config.dungeon.path_length, 100);
        assert_eq!(config.dungeon.max_attempts, 50);
        assert_eq!(config.max_equipped_attacks, 5);
    }

    #[test]
    fn test_partial_ron_keeps_defaults() {
        let config: GameConfig = ron::from_str("(dungeon: (path_length: 12))").unwrap();
        assert_eq!(config.dungeon.path_length, 12);
        assert_eq!(config.dungeon.rows, 20);
        assert_eq!(config.data_dir, PathBuf::from("assets/data"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = GameConfig::load(Path::new("definitely/not/here/config.ron"));
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let dir = std::env::temp_dir().join(format!("cryptwalk-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.ron");
        fs::write(&path, "(dungeon: oops").unwrap();
        assert_eq!(GameConfig::load(&path), GameConfig::default());
        let _ = fs::remove_dir_all(&dir);
    }
}
