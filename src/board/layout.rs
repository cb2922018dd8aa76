//! Board layout documents.
//!
//! A layout is a JSON array of rows, each row an array of cells:
//!
//! ```json
//! [
//!   [
//!     {"entrance": "White", "exit": null, "rosette": false, "forbidden": false,
//!      "next_white": [0, 2], "next_black": null},
//!     ...
//!   ],
//!   ...
//! ]
//! ```
//!
//! Missing fields default to absent/false. The layout is only parsed here;
//! `BoardGraph::from_layout` checks that it describes a playable board.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Color, LoadError};

/// The classic 3x8 board shipped with the crate.
pub const CLASSIC_BOARD: &str = include_str!("../../boards/original_board.json");

/// One cell of a layout document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSpec {
    #[serde(default)]
    pub entrance: Option<Color>,
    #[serde(default)]
    pub exit: Option<Color>,
    #[serde(default)]
    pub rosette: bool,
    #[serde(default)]
    pub forbidden: bool,
    #[serde(default)]
    pub next_white: Option<[usize; 2]>,
    #[serde(default)]
    pub next_black: Option<[usize; 2]>,
}

impl CellSpec {
    /// The `next` link for a color as `[row, col]`.
    #[must_use]
    pub fn next_for(&self, color: Color) -> Option<[usize; 2]> {
        match color {
            Color::White => self.next_white,
            Color::Black => self.next_black,
        }
    }
}

/// A parsed, not yet validated, board layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardLayout {
    pub rows: Vec<Vec<CellSpec>>,
}

impl BoardLayout {
    /// Parse a layout from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let layout: Self = serde_json::from_str(json)?;
        Ok(layout)
    }

    /// Read and parse a layout file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading board layout");
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// The bundled classic board.
    pub fn classic() -> Result<Self, LoadError> {
        Self::from_json_str(CLASSIC_BOARD)
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells in the first row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }
}
