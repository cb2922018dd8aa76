//! The board as a graph of squares.
//!
//! Squares live in a flat arena in row-major order and are addressed by
//! `SquareId`. Each color's path is a chain of `next` links from that
//! color's entrance to its exit. The two chains share the middle row.
//!
//! ## Usage
//!
//! ```
//! use royal_ur::board::{BoardGraph, BoardLayout};
//! use royal_ur::core::Color;
//!
//! let board = BoardGraph::from_layout(&BoardLayout::classic().unwrap()).unwrap();
//!
//! let entrance = board.entrance(Color::White);
//! let second = board.next(entrance, Color::White).unwrap();
//! assert_eq!(board.square(second).coord().col, 2);
//!
//! // The exit is the end of the chain
//! assert_eq!(board.next(board.exit(Color::White), Color::White), None);
//! ```

use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::debug;

use super::layout::BoardLayout;
use super::square::{BoardSquare, Coord};
use crate::core::error::Marker;
use crate::core::{Color, ColorMap, LoadError, SquareId};

/// A validated board.
///
/// Construction guarantees:
/// - every link points inside the grid and never touches a forbidden square
/// - each color has exactly one entrance and one exit
/// - following a color's links from its entrance reaches its exit without loops
#[derive(Clone, Debug, Serialize)]
pub struct BoardGraph {
    rows: usize,
    cols: usize,
    squares: Vec<BoardSquare>,
    entrances: ColorMap<SquareId>,
    exits: ColorMap<SquareId>,
    #[serde(skip)]
    paths: ColorMap<Vec<SquareId>>,
}

impl BoardGraph {
    /// Build and validate a board from a layout.
    pub fn from_layout(layout: &BoardLayout) -> Result<Self, LoadError> {
        let rows = layout.height();
        let cols = layout.width();
        if rows == 0 || cols == 0 {
            return Err(LoadError::Empty);
        }
        for (row, cells) in layout.rows.iter().enumerate() {
            if cells.len() != cols {
                return Err(LoadError::RaggedRow {
                    row,
                    found: cells.len(),
                    expected: cols,
                });
            }
        }
        if rows * cols > usize::from(u16::MAX) + 1 {
            return Err(LoadError::TooLarge { rows, cols });
        }

        let id_of = |coord: Coord| {
            SquareId::from_index(coord.row * cols + coord.col)
                .ok_or(LoadError::TooLarge { rows, cols })
        };

        let mut squares = Vec::with_capacity(rows * cols);
        for (row, cells) in layout.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let mut links = ColorMap::with_value(None);
                for color in Color::ALL {
                    let Some([target_row, target_col]) = cell.next_for(color) else {
                        continue;
                    };
                    if target_row >= rows || target_col >= cols {
                        return Err(LoadError::OutOfRange {
                            row,
                            col,
                            color,
                            target_row,
                            target_col,
                            rows,
                            cols,
                        });
                    }
                    if cell.forbidden {
                        return Err(LoadError::ForbiddenOnPath { row, col, color });
                    }
                    if layout.rows[target_row][target_col].forbidden {
                        return Err(LoadError::ForbiddenOnPath {
                            row: target_row,
                            col: target_col,
                            color,
                        });
                    }
                    links[color] = Some(id_of(Coord::new(target_row, target_col))?);
                }
                squares.push(BoardSquare::new(
                    Coord::new(row, col),
                    cell.entrance,
                    cell.exit,
                    cell.rosette,
                    cell.forbidden,
                    links,
                ));
            }
        }

        let entrances = find_markers(&squares, Marker::Entrance, id_of)?;
        let exits = find_markers(&squares, Marker::Exit, id_of)?;

        let mut board = Self {
            rows,
            cols,
            squares,
            entrances,
            exits,
            paths: ColorMap::default(),
        };
        for color in Color::ALL {
            board.paths[color] = board.trace_path(color)?;
        }

        debug!(rows, cols, "board loaded");
        Ok(board)
    }

    /// Walk a color's chain from its entrance and make sure it ends at that
    /// color's exit.
    fn trace_path(&self, color: Color) -> Result<Vec<SquareId>, LoadError> {
        let exit = self.exits[color];
        let exit_square = self.square(exit);
        if exit_square.next_for(color).is_some() {
            let Coord { row, col } = exit_square.coord();
            return Err(LoadError::ExitLinksOnward { row, col, color });
        }

        let mut visited = FxHashSet::default();
        let mut path = Vec::new();
        let mut current = self.entrances[color];
        while current != exit {
            if !visited.insert(current) {
                return Err(LoadError::BrokenPath { color });
            }
            path.push(current);
            current = self
                .next(current, color)
                .ok_or(LoadError::BrokenPath { color })?;
        }
        path.push(exit);
        Ok(path)
    }

    /// Number of grid rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// All squares in row-major order, forbidden ones included.
    #[must_use]
    pub fn squares(&self) -> &[BoardSquare] {
        &self.squares
    }

    /// Get a square.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this board.
    #[must_use]
    pub fn square(&self, id: SquareId) -> &BoardSquare {
        &self.squares[id.index()]
    }

    /// Get a square if `id` is in range.
    #[must_use]
    pub fn get(&self, id: SquareId) -> Option<&BoardSquare> {
        self.squares.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: SquareId) -> Option<&mut BoardSquare> {
        self.squares.get_mut(id.index())
    }

    /// Square at grid coordinates.
    #[must_use]
    pub fn id_at(&self, row: usize, col: usize) -> Option<SquareId> {
        if row < self.rows && col < self.cols {
            SquareId::from_index(row * self.cols + col)
        } else {
            None
        }
    }

    /// Next square along `color`'s path, or `None` at that color's exit.
    #[must_use]
    pub fn next(&self, square: SquareId, color: Color) -> Option<SquareId> {
        self.get(square).and_then(|s| s.next_for(color))
    }

    /// Where `color`'s pieces enter.
    #[must_use]
    pub fn entrance(&self, color: Color) -> SquareId {
        self.entrances[color]
    }

    /// Last square of `color`'s path.
    #[must_use]
    pub fn exit(&self, color: Color) -> SquareId {
        self.exits[color]
    }

    /// `color`'s full path, entrance to exit inclusive.
    #[must_use]
    pub fn path(&self, color: Color) -> &[SquareId] {
        &self.paths[color]
    }

    /// Pips a piece of `color` standing on `square` needs to leave the board:
    /// the distance to the exit plus the step off it.
    ///
    /// Returns `None` if `square` is not on `color`'s path.
    ///
    /// ```
    /// use royal_ur::board::{BoardGraph, BoardLayout};
    /// use royal_ur::core::Color;
    ///
    /// let board = BoardGraph::from_layout(&BoardLayout::classic().unwrap()).unwrap();
    /// let exit = board.exit(Color::Black);
    /// assert_eq!(board.steps_to_complete(exit, Color::Black), Some(1));
    /// assert_eq!(board.steps_to_complete(board.entrance(Color::Black), Color::Black), Some(14));
    /// ```
    #[must_use]
    pub fn steps_to_complete(&self, square: SquareId, color: Color) -> Option<usize> {
        self.path(color)
            .iter()
            .position(|&s| s == square)
            .map(|index| self.path_len(color) - index)
    }

    /// Number of squares on `color`'s path.
    #[must_use]
    pub fn path_len(&self, color: Color) -> usize {
        self.paths[color].len()
    }
}

fn find_markers(
    squares: &[BoardSquare],
    marker: Marker,
    id_of: impl Fn(Coord) -> Result<SquareId, LoadError>,
) -> Result<ColorMap<SquareId>, LoadError> {
    let mut found: ColorMap<Vec<SquareId>> = ColorMap::default();
    for square in squares {
        let color = match marker {
            Marker::Entrance => square.entrance(),
            Marker::Exit => square.exit(),
        };
        if let Some(color) = color {
            found[color].push(id_of(square.coord())?);
        }
    }

    let mut ids = ColorMap::with_value(SquareId(0));
    for color in Color::ALL {
        match found[color].as_slice() {
            [id] => {
                let square = &squares[id.index()];
                if square.is_forbidden() {
                    let Coord { row, col } = square.coord();
                    return Err(LoadError::ForbiddenOnPath { row, col, color });
                }
                ids[color] = *id;
            }
            other => {
                return Err(LoadError::MarkerCount {
                    color,
                    marker,
                    count: other.len(),
                })
            }
        }
    }
    Ok(ids)
}
