//! Party and member management

pub mod party;

pub use party::{Party, PartyKey, PartyMember};
