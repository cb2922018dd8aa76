//! Game configuration.
//!
//! A `GameConfig` says which board to load, how many pieces each side
//! races, and which seed drives the dice. The defaults reproduce the
//! classic game: the bundled board, seven pieces each, a random seed.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, LoadError};
use crate::board::{BoardGraph, BoardLayout};

/// Pieces per color in the classic game.
pub const STARTING_PIECES: usize = 7;

/// Settings for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Pieces each color must bring home to win (1..=7).
    pub pieces_per_player: usize,

    /// Board layout file. `None` uses the bundled classic board.
    pub board_path: Option<PathBuf>,

    /// Dice seed. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pieces_per_player: STARTING_PIECES,
            board_path: None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the classic configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of pieces per color.
    #[must_use]
    pub fn with_pieces(mut self, count: usize) -> Self {
        self.pieces_per_player = count;
        self
    }

    /// Load the board from a file instead of the bundled layout.
    #[must_use]
    pub fn with_board_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.board_path = Some(path.into());
        self
    }

    /// Fix the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=STARTING_PIECES).contains(&self.pieces_per_player) {
            return Err(ConfigError::PieceCount {
                got: self.pieces_per_player,
                max: STARTING_PIECES,
            });
        }
        Ok(())
    }

    /// Load and validate the configured board.
    pub fn load_board(&self) -> Result<BoardGraph, LoadError> {
        let layout = match &self.board_path {
            Some(path) => BoardLayout::from_path(path)?,
            None => BoardLayout::classic()?,
        };
        BoardGraph::from_layout(&layout)
    }
}
