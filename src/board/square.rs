//! A single cell of the track.

use serde::{Deserialize, Serialize};

use crate::core::{Color, ColorMap, PieceId, SquareId};

/// Grid coordinates of a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One square of the board graph.
///
/// Flags and `next` links are fixed when the board is loaded. Only the
/// occupant changes during play, and only through `GameState`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardSquare {
    coord: Coord,
    entrance: Option<Color>,
    exit: Option<Color>,
    rosette: bool,
    forbidden: bool,
    next: ColorMap<Option<SquareId>>,
    pub(crate) occupant: Option<PieceId>,
}

impl BoardSquare {
    pub(crate) fn new(
        coord: Coord,
        entrance: Option<Color>,
        exit: Option<Color>,
        rosette: bool,
        forbidden: bool,
        next: ColorMap<Option<SquareId>>,
    ) -> Self {
        Self {
            coord,
            entrance,
            exit,
            rosette,
            forbidden,
            next,
            occupant: None,
        }
    }

    #[must_use]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Color whose pieces enter the track here, if any.
    #[must_use]
    pub fn entrance(&self) -> Option<Color> {
        self.entrance
    }

    /// Color whose pieces leave the track from here, if any.
    #[must_use]
    pub fn exit(&self) -> Option<Color> {
        self.exit
    }

    /// Safe square that grants a bonus roll.
    #[must_use]
    pub fn is_rosette(&self) -> bool {
        self.rosette
    }

    /// Layout padding; never part of a path.
    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        self.forbidden
    }

    /// Next square along `color`'s path.
    #[must_use]
    pub fn next_for(&self, color: Color) -> Option<SquareId> {
        self.next[color]
    }

    #[must_use]
    pub fn occupant(&self) -> Option<PieceId> {
        self.occupant
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_display() {
        assert_eq!(Coord::new(1, 7).to_string(), "(1, 7)");
    }

    #[test]
    fn test_square_flags_and_links() {
        let square = BoardSquare::new(
            Coord::new(0, 3),
            Some(Color::White),
            None,
            false,
            false,
            ColorMap::from_pair(Some(SquareId(2)), None),
        );

        assert_eq!(square.entrance(), Some(Color::White));
        assert_eq!(square.exit(), None);
        assert_eq!(square.next_for(Color::White), Some(SquareId(2)));
        assert_eq!(square.next_for(Color::Black), None);
        assert!(square.is_empty());
    }
}
