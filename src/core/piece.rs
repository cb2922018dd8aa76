//! Race tokens.

use serde::{Deserialize, Serialize};

use super::entity::{PieceId, SquareId};
use super::player::Color;

/// Where a piece is. Exactly one of these holds at any time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceLocation {
    /// Waiting to enter the track.
    #[default]
    OffBoard,
    /// Standing on a square.
    OnSquare(SquareId),
    /// Has left the track through its exit. Terminal.
    Complete,
}

/// A single race token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    id: PieceId,
    color: Color,
    ordinal: u8,
    pub(crate) location: PieceLocation,
}

impl Piece {
    /// Create an off-board piece. `ordinal` is 1-based.
    #[must_use]
    pub fn new(id: PieceId, color: Color, ordinal: u8) -> Self {
        Self {
            id,
            color,
            ordinal,
            location: PieceLocation::OffBoard,
        }
    }

    /// Arena ID.
    #[must_use]
    pub fn id(&self) -> PieceId {
        self.id
    }

    /// Owning color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// 1-based number within its color.
    #[must_use]
    pub fn ordinal(&self) -> u8 {
        self.ordinal
    }

    /// Player-facing name: color prefix plus ordinal, e.g. `W3`.
    ///
    /// ```
    /// use royal_ur::core::{Color, Piece, PieceId};
    ///
    /// let piece = Piece::new(PieceId::new(9), Color::Black, 3);
    /// assert_eq!(piece.symbol(), "B3");
    /// ```
    #[must_use]
    pub fn symbol(&self) -> String {
        format!("{}{}", self.color.symbol_prefix(), self.ordinal)
    }

    /// Current location.
    #[must_use]
    pub fn location(&self) -> PieceLocation {
        self.location
    }

    /// Square the piece stands on, if any.
    #[must_use]
    pub fn position(&self) -> Option<SquareId> {
        match self.location {
            PieceLocation::OnSquare(square) => Some(square),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_off_board(&self) -> bool {
        self.location == PieceLocation::OffBoard
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.location == PieceLocation::Complete
    }
}
