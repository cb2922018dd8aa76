//! Core game types: identifiers, colors, pieces, state, outcomes, dice, configuration.
//!
//! This module holds the data model. Board topology lives in `board`,
//! and the rules that change the state live in `rules` and `turn`.

pub mod entity;
pub mod player;
pub mod piece;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;
pub mod state;

pub use entity::{PieceId, SquareId};
pub use player::{Color, ColorMap, Player};
pub use piece::{Piece, PieceLocation};
pub use rng::{Dice, GameRng, ScriptedDice, DICE_COUNT, MAX_ROLL};
pub use config::{GameConfig, STARTING_PIECES};
pub use action::{MoveOutcome, MoveRecord};
pub use error::{ConfigError, InvalidSelection, LoadError, RuleViolation, SessionError, SetupError};
pub use state::GameState;
