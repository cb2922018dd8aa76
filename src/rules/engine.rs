//! Rules engine trait.
//!
//! The turn loop only talks to the rules through this trait:
//! - Which pieces may move with a roll
//! - How a move changes the state
//! - Whether a color has won

use smallvec::SmallVec;

use crate::core::{Color, GameState, MoveOutcome, PieceId, RuleViolation};

/// Eligible pieces for a roll. One color never has more than seven.
pub type MovablePieces = SmallVec<[PieceId; 7]>;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `can_move`: Must be side-effect free
/// - `apply_move`: Must leave the state untouched when it returns `Blocked`
///   or an error
/// - `winner`: Checked after every turn, including skipped ones
pub trait RulesEngine {
    /// Can `piece` legally spend `roll`?
    fn can_move(&self, state: &GameState, piece: PieceId, roll: u8) -> bool;

    /// Apply `roll` to `piece`.
    fn apply_move(
        &self,
        state: &mut GameState,
        piece: PieceId,
        roll: u8,
    ) -> Result<MoveOutcome, RuleViolation>;

    // === Convenience Methods ===

    /// Pieces of `color` that may move with `roll`, in ordinal order.
    fn movable_pieces(&self, state: &GameState, color: Color, roll: u8) -> MovablePieces {
        state
            .pieces_of(color)
            .filter(|piece| self.can_move(state, piece.id(), roll))
            .map(|piece| piece.id())
            .collect()
    }

    /// Has `color` brought every piece home?
    fn has_won(&self, state: &GameState, color: Color) -> bool {
        state.incomplete_count(color) == 0
    }

    /// The winner, if either color has finished.
    fn winner(&self, state: &GameState) -> Option<Color> {
        Color::ALL.into_iter().find(|&color| self.has_won(state, color))
    }
}
