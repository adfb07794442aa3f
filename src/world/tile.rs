//! Tile definitions
//!
//! Dungeon tile kinds and the positional rules that assign them.

use serde::{Deserialize, Serialize};

/// What a tile on the path is, decided by its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Start,
    /// The second tile, a forest clearing open from the start
    Forest,
    Basic,
    MiniBoss,
    Boss,
}

impl TileKind {
    /// Classify the tile at 1-based `level` on a path of `path_length` tiles.
    /// Earlier rules win. The midpoint is `path_length / 2` rounded down, so
    /// odd paths still get a mid-path miniboss.
    pub fn classify(level: usize, path_length: usize) -> Self {
        if level == 1 {
            TileKind::Start
        } else if level == path_length {
            TileKind::Boss
        } else if level == path_length / 2 || level + 1 == path_length {
            TileKind::MiniBoss
        } else if level == 2 {
            TileKind::Forest
        } else {
            TileKind::Basic
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TileKind::Start => "Start Tile",
            TileKind::Forest | TileKind::Basic => "Basic",
            TileKind::MiniBoss => "MiniBoss",
            TileKind::Boss => "Boss",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TileKind::Start => "This is the beginning of the map.",
            TileKind::Forest => "Sunlight breaks through the trees at the edge of the forest.",
            TileKind::Basic => "A path leads you deeper into the dungeon.",
            TileKind::MiniBoss => "A powerful foe blocks your path.",
            TileKind::Boss => "The ultimate challenge awaits.",
        }
    }

    /// Number of enemies placed on the tile
    pub fn enemy_count(&self) -> usize {
        match self {
            TileKind::Start | TileKind::Boss => 1,
            TileKind::Forest => 2,
            TileKind::Basic | TileKind::MiniBoss => 3,
        }
    }

    pub fn starts_cleared(&self) -> bool {
        matches!(self, TileKind::Start)
    }

    /// Whether the tile is open to play right after generation
    pub fn starts_active(&self) -> bool {
        matches!(self, TileKind::Start | TileKind::Forest)
    }

    /// Map glyph for text output
    pub fn glyph(&self) -> char {
        match self {
            TileKind::Start => 'S',
            TileKind::Forest => 'f',
            TileKind::Basic => '.',
            TileKind::MiniBoss => 'm',
            TileKind::Boss => 'B',
        }
    }
}

/// A tile on the dungeon path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DungeonTile {
    pub row: usize,
    pub col: usize,
    /// 1-based position along the path
    pub level: usize,
    pub kind: TileKind,
    pub title: String,
    pub description: String,
    pub cleared: bool,
    /// Visible and playable
    pub status: bool,
    /// Enemy names from the catalog
    pub enemies: Vec<String>,
}

impl DungeonTile {
    pub fn new(row: usize, col: usize, level: usize, kind: TileKind, enemies: Vec<String>) -> Self {
        Self {
            row,
            col,
            level,
            kind,
            title: kind.title().to_string(),
            description: kind.description().to_string(),
            cleared: kind.starts_cleared(),
            status: kind.starts_active(),
            enemies,
        }
    }

    /// Store key, `"row,col"`
    pub fn key(&self) -> String {
        tile_key(self.row, self.col)
    }
}

/// Store key for a grid position
pub fn tile_key(row: usize, col: usize) -> String {
    format!("{},{}", row, col)
}
