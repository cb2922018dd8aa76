//! # royal-ur
//!
//! Rule engine for the Royal Game of Ur, a two-player race game played on a
//! branching, partially shared track.
//!
//! ## Design Principles
//!
//! 1. **Indices, not references**: squares live in an arena addressed by
//!    `SquareId` and pieces in one addressed by `PieceId`. A square's occupant
//!    and a piece's position are ids kept in step by `GameState`.
//!
//! 2. **One path walker**: both colors move with the same algorithm,
//!    parameterized by `Color`. The board layout decides where paths diverge
//!    and where they share squares.
//!
//! 3. **Deterministic games**: dice come from a seeded ChaCha RNG, so a seed
//!    and the same decisions replay the same game.
//!
//! ## Modules
//!
//! - `core`: ids, colors, pieces, players, state, outcomes, dice, configuration
//! - `board`: layout loading and the validated square graph
//! - `rules`: `RulesEngine` trait and the movement rules
//! - `turn`: the per-turn state machine and the decision seam
//! - `session`: a whole game until someone wins
//! - `render`: ASCII board drawing

pub mod core;
pub mod board;
pub mod rules;
pub mod turn;
pub mod session;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    PieceId, SquareId,
    Color, ColorMap, Player,
    Piece, PieceLocation,
    Dice, GameRng, ScriptedDice, DICE_COUNT, MAX_ROLL,
    GameConfig, STARTING_PIECES,
    MoveOutcome, MoveRecord,
    ConfigError, InvalidSelection, LoadError, RuleViolation, SessionError, SetupError,
    GameState,
};

pub use crate::board::{BoardGraph, BoardLayout, BoardSquare, CellSpec, Coord, CLASSIC_BOARD};

pub use crate::rules::{Landing, MovablePieces, MovementEngine, RulesEngine};

pub use crate::turn::{
    resolve_selection, DecisionContext, FirstEligible, PlayerDecision,
    TurnController, TurnEvent, TurnPhase, TurnReport,
};

pub use crate::session::GameSession;

pub use crate::render::{render_board, render_pieces};
