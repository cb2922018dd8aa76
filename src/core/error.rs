//! Error types.
//!
//! - `LoadError`: the board layout could not be read or is malformed. Fatal.
//! - `ConfigError`: the game configuration is out of range. Fatal.
//! - `InvalidSelection`: a player named a piece that cannot move. Recoverable.
//! - `RuleViolation`: a caller asked the engine for an illegal state change.
//! - `SessionError`: a session-level call failed.
//! - `SetupError`: a session could not be created. Fatal.

use std::path::PathBuf;

use thiserror::Error;

use super::entity::{PieceId, SquareId};
use super::player::Color;

/// Which per-color marker a layout check refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Entrance,
    Exit,
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Marker::Entrance => write!(f, "entrance"),
            Marker::Exit => write!(f, "exit"),
        }
    }
}

/// Board layout could not be turned into a playable graph.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read board file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse board layout: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("board layout has no squares")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("{rows}x{cols} board has more squares than can be addressed")]
    TooLarge { rows: usize, cols: usize },

    #[error("square ({row}, {col}) links {color} to ({target_row}, {target_col}), outside the {rows}x{cols} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        color: Color,
        target_row: usize,
        target_col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("forbidden square ({row}, {col}) takes part in the {color} path")]
    ForbiddenOnPath { row: usize, col: usize, color: Color },

    #[error("expected exactly one {color} {marker} square, found {count}")]
    MarkerCount {
        color: Color,
        marker: Marker,
        count: usize,
    },

    #[error("{color} exit square ({row}, {col}) links onward")]
    ExitLinksOnward { row: usize, col: usize, color: Color },

    #[error("{color} path from the entrance never reaches the exit")]
    BrokenPath { color: Color },
}

/// Invalid game configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("pieces per player must be between 1 and {max}, got {got}")]
    PieceCount { got: usize, max: usize },
}

/// A requested piece cannot be moved. The caller should ask again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidSelection {
    #[error("no piece named {0:?} belongs to the current player")]
    UnknownPiece(String),

    #[error("{0} has already completed the race")]
    AlreadyComplete(String),

    #[error("{symbol} cannot move {roll}")]
    NotMovable { symbol: String, roll: u8 },
}

/// The engine refused a state change that would break the rules.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("{0} does not exist")]
    UnknownPiece(PieceId),

    #[error("{0} does not exist")]
    UnknownSquare(SquareId),

    #[error("{symbol} has already completed the race")]
    PieceComplete { symbol: String },

    #[error("{square} is forbidden")]
    ForbiddenSquare { square: SquareId },

    #[error("{square} is already occupied by {occupant}")]
    SquareOccupied { square: SquareId, occupant: String },
}

/// A session-level call failed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("the game is over: {winner} has won")]
    GameOver { winner: Color },

    #[error(transparent)]
    Rule(#[from] RuleViolation),
}

/// A game session could not be created.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
