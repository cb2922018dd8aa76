//! Move outcomes and move history.
//!
//! Every applied move produces a `MoveOutcome`. The outcome is what the
//! turn loop looks at to decide whether the player rolls again:
//! - `Rosette` grants a bonus roll
//! - everything else ends the turn
//!
//! Applied moves are appended to the game history as `MoveRecord`s.

use serde::{Deserialize, Serialize};

use super::entity::PieceId;
use super::player::Color;

/// Result of applying a roll to a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Nothing moved: a roll of zero, or an illegal landing square.
    Blocked,
    /// The piece moved to an empty, ordinary square.
    Advanced,
    /// The piece landed on an opponent, who went back off the board.
    Captured(PieceId),
    /// The piece landed on an empty rosette; the mover rolls again.
    Rosette,
    /// The piece left the track through its exit.
    Completed,
}

impl MoveOutcome {
    /// Does this outcome give the mover another roll?
    #[must_use]
    pub fn grants_bonus(self) -> bool {
        matches!(self, MoveOutcome::Rosette)
    }

    /// Did any piece change location?
    #[must_use]
    pub fn moved(self) -> bool {
        !matches!(self, MoveOutcome::Blocked)
    }
}

/// An applied move, kept in the game history.
///
/// Used for:
/// - Replay and determinism checks
/// - Turn reports shown to players
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number the move was made on.
    pub turn: u32,

    /// Color that moved.
    pub color: Color,

    /// Piece that moved.
    pub piece: PieceId,

    /// Roll that was spent.
    pub roll: u8,

    /// What happened.
    pub outcome: MoveOutcome,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(turn: u32, color: Color, piece: PieceId, roll: u8, outcome: MoveOutcome) -> Self {
        Self {
            turn,
            color,
            piece,
            roll,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_rosette_grants_bonus() {
        assert!(MoveOutcome::Rosette.grants_bonus());
        assert!(!MoveOutcome::Advanced.grants_bonus());
        assert!(!MoveOutcome::Captured(PieceId(8)).grants_bonus());
        assert!(!MoveOutcome::Completed.grants_bonus());
        assert!(!MoveOutcome::Blocked.grants_bonus());
    }

    #[test]
    fn test_moved() {
        assert!(!MoveOutcome::Blocked.moved());
        assert!(MoveOutcome::Advanced.moved());
        assert!(MoveOutcome::Completed.moved());
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord::new(3, Color::Black, PieceId(9), 2, MoveOutcome::Captured(PieceId(1)));

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
