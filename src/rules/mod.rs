//! Movement rules.
//!
//! `RulesEngine` is the seam the turn controller calls through:
//! - Which pieces may spend a roll
//! - How a move changes the state
//! - Whether a color has won
//!
//! `MovementEngine` is the race game's implementation.

pub mod engine;
pub mod movement;

pub use engine::{MovablePieces, RulesEngine};
pub use movement::{Landing, MovementEngine};
