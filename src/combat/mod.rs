//! Combat system
//!
//! Attack records granted by equipment. Turn-by-turn battle resolution lives
//! outside this crate.

pub mod attacks;

pub use attacks::{AttackId, AttackPool, AttackRecord, ToggleRejection};
