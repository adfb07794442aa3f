//! Game module - owned game state and its transitions

mod state;

pub use state::{EquippedItemAttack, GameState};
