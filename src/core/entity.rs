//! Arena identifiers for squares and pieces.
//!
//! The board and the piece set are both stored as flat arenas. Every
//! cross-reference between them (a square's occupant, a piece's position,
//! a square's "next" link) is one of these index types rather than a
//! reference, so the graph has no ownership cycles.
//!
//! ## Usage
//!
//! ```
//! use royal_ur::core::{PieceId, SquareId};
//!
//! let square = SquareId::new(10);
//! assert_eq!(square.index(), 10);
//!
//! let piece = PieceId::new(3);
//! assert_eq!(piece.index(), 3);
//! ```

use serde::{Deserialize, Serialize};

/// Index of a square in the board arena (row-major order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SquareId(pub u16);

impl SquareId {
    /// Create a square ID from a raw arena index.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Square ID for an arena index, or `None` past `u16::MAX`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u16::try_from(index).ok().map(Self)
    }

    /// Position of the square in the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SquareId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Square({})", self.0)
    }
}

/// Index of a piece in the piece arena.
///
/// White pieces come first, then black pieces. Use the piece's symbol
/// (`W1`, `B4`, ...) when talking to players; the ID is internal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u8);

impl PieceId {
    /// Create a piece ID from a raw arena index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Position of the piece in the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_id_index() {
        assert_eq!(SquareId::new(0).index(), 0);
        assert_eq!(SquareId::new(23).index(), 23);
    }

    #[test]
    fn test_square_id_from_index() {
        assert_eq!(SquareId::from_index(23), Some(SquareId(23)));
        assert_eq!(SquareId::from_index(65_535), Some(SquareId(u16::MAX)));
        assert_eq!(SquareId::from_index(65_536), None);
    }

    #[test]
    fn test_ordering_follows_index() {
        assert!(PieceId::new(1) < PieceId::new(2));
        assert!(SquareId::new(7) > SquareId::new(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", SquareId(5)), "Square(5)");
        assert_eq!(format!("{}", PieceId(9)), "Piece(9)");
    }

    #[test]
    fn test_serialization() {
        let id = SquareId(17);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: SquareId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
