//! Piece movement: walking a color's path and resolving the landing square.
//!
//! A roll is spent one pip at a time along `BoardGraph::next(square, color)`:
//! - An off-board piece spends its first pip stepping onto its entrance
//! - Squares passed over are ignored; nothing is captured or blocks the way
//! - Leaving the exit square takes the piece off the track, and any
//!   remaining pips are forfeited
//! - Only the final square is checked for captures, rosettes, and blockers
//!
//! A piece may not land on a square held by its own color, nor on a rosette
//! held by the opponent. Such moves are not eligible and apply as `Blocked`.

use tracing::{debug, info};

use super::engine::RulesEngine;
use crate::core::{
    GameState, MoveOutcome, Piece, PieceId, PieceLocation, RuleViolation, SquareId,
};

/// Where a roll would take a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Landing {
    /// The roll cannot be spent: a zero roll or a complete piece.
    Nowhere,
    /// The piece walks off the end of its path.
    OffTrack,
    /// The piece stops on this square.
    Square(SquareId),
}

/// The rules of movement for the race game.
#[derive(Clone, Copy, Debug, Default)]
pub struct MovementEngine;

impl MovementEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Walk `roll` pips from the piece's current location without touching the state.
    #[must_use]
    pub fn landing(&self, state: &GameState, piece: &Piece, roll: u8) -> Landing {
        if roll == 0 {
            return Landing::Nowhere;
        }

        let board = state.board();
        let color = piece.color();
        let (mut square, pips) = match piece.location() {
            PieceLocation::Complete => return Landing::Nowhere,
            PieceLocation::OffBoard => (board.entrance(color), roll - 1),
            PieceLocation::OnSquare(square) => (square, roll),
        };

        let exit = board.exit(color);
        for pip in 0..pips {
            if square == exit {
                debug!(piece = %piece.symbol(), pip, "walks off the exit");
                return Landing::OffTrack;
            }
            match board.next(square, color) {
                Some(next) => {
                    debug!(piece = %piece.symbol(), pip, from = %square, to = %next, "step");
                    square = next;
                }
                // Validated boards always link every non-exit path square.
                None => return Landing::Nowhere,
            }
        }
        Landing::Square(square)
    }

    /// Pips the piece needs to leave the board; an off-board piece needs one
    /// more to enter first. `None` for a complete piece.
    #[must_use]
    pub fn steps_to_complete(&self, state: &GameState, piece: &Piece) -> Option<usize> {
        let board = state.board();
        let color = piece.color();
        match piece.location() {
            PieceLocation::Complete => None,
            PieceLocation::OffBoard => board
                .steps_to_complete(board.entrance(color), color)
                .map(|steps| steps + 1),
            PieceLocation::OnSquare(square) => board.steps_to_complete(square, color),
        }
    }

    /// Can `piece` finish its move on `dest`?
    fn may_land(&self, state: &GameState, piece: &Piece, dest: SquareId) -> bool {
        match state.occupant(dest) {
            None => true,
            Some(other) if other.color() == piece.color() => false,
            Some(_) => !state.board().square(dest).is_rosette(),
        }
    }
}

impl RulesEngine for MovementEngine {
    fn can_move(&self, state: &GameState, piece: PieceId, roll: u8) -> bool {
        let Some(piece) = state.piece(piece) else {
            return false;
        };
        match self.landing(state, piece, roll) {
            Landing::Nowhere => false,
            Landing::OffTrack => true,
            Landing::Square(dest) => self.may_land(state, piece, dest),
        }
    }

    fn apply_move(
        &self,
        state: &mut GameState,
        piece: PieceId,
        roll: u8,
    ) -> Result<MoveOutcome, RuleViolation> {
        let mover = state
            .piece(piece)
            .cloned()
            .ok_or(RuleViolation::UnknownPiece(piece))?;
        if mover.is_complete() {
            return Err(RuleViolation::PieceComplete {
                symbol: mover.symbol(),
            });
        }

        let outcome = match self.landing(state, &mover, roll) {
            Landing::Nowhere => {
                debug!(piece = %mover.symbol(), roll, "no move");
                MoveOutcome::Blocked
            }
            Landing::OffTrack => {
                state.set_piece_location(piece, PieceLocation::Complete)?;
                info!(piece = %mover.symbol(), "completed the race");
                MoveOutcome::Completed
            }
            Landing::Square(dest) if !self.may_land(state, &mover, dest) => {
                debug!(piece = %mover.symbol(), roll, square = %dest, "landing square is blocked");
                MoveOutcome::Blocked
            }
            Landing::Square(dest) => {
                let victim = state.occupant(dest).map(|p| (p.id(), p.symbol()));
                if let Some((victim, symbol)) = &victim {
                    state.set_piece_location(*victim, PieceLocation::OffBoard)?;
                    info!(piece = %mover.symbol(), victim = %symbol, "has been knocked off");
                }
                state.set_piece_location(piece, PieceLocation::OnSquare(dest))?;

                match victim {
                    Some((victim, _)) => MoveOutcome::Captured(victim),
                    None if state.board().square(dest).is_rosette() => {
                        info!(piece = %mover.symbol(), "landed on a rosette");
                        MoveOutcome::Rosette
                    }
                    None => MoveOutcome::Advanced,
                }
            }
        };

        debug_assert!(state.is_consistent());
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardGraph, BoardLayout};
    use crate::core::{Color, ColorMap, GameConfig};

    fn setup() -> (MovementEngine, GameState) {
        let board = BoardGraph::from_layout(&BoardLayout::classic().unwrap()).unwrap();
        let names = ColorMap::from_pair("White".to_string(), "Black".to_string());
        let state = GameState::new(board, names, &GameConfig::default()).unwrap();
        (MovementEngine::new(), state)
    }

    fn id(state: &GameState, symbol: &str) -> PieceId {
        state.find_piece(symbol).unwrap()
    }

    fn square(state: &GameState, row: usize, col: usize) -> SquareId {
        state.board().id_at(row, col).unwrap()
    }

    fn place(state: &mut GameState, symbol: &str, row: usize, col: usize) {
        let piece = id(state, symbol);
        let square = square(state, row, col);
        state
            .set_piece_location(piece, PieceLocation::OnSquare(square))
            .unwrap();
    }

    fn location(state: &GameState, symbol: &str) -> PieceLocation {
        state.piece(id(state, symbol)).unwrap().location()
    }

    fn snapshot(state: &GameState) -> serde_json::Value {
        serde_json::to_value(state).unwrap()
    }

    #[test]
    fn test_roll_zero_is_blocked_and_changes_nothing() {
        let (rules, mut state) = setup();
        place(&mut state, "W1", 1, 2);
        let before = snapshot(&state);

        for symbol in ["W1", "W2"] {
            let piece = id(&state, symbol);
            assert!(!rules.can_move(&state, piece, 0));
            assert_eq!(rules.apply_move(&mut state, piece, 0), Ok(MoveOutcome::Blocked));
        }
        assert_eq!(snapshot(&state), before);
    }

    #[test]
    fn test_entering_with_one_lands_on_entrance() {
        let (rules, mut state) = setup();
        let w1 = id(&state, "W1");

        let outcome = rules.apply_move(&mut state, w1, 1).unwrap();

        assert_eq!(outcome, MoveOutcome::Advanced);
        let entrance = state.board().entrance(Color::White);
        assert_eq!(location(&state, "W1"), PieceLocation::OnSquare(entrance));
        assert!(!state.piece(w1).unwrap().is_complete());
    }

    #[test]
    fn test_entering_with_four_reaches_first_rosette() {
        let (rules, mut state) = setup();
        let b1 = id(&state, "B1");

        assert_eq!(rules.apply_move(&mut state, b1, 4), Ok(MoveOutcome::Rosette));
        assert_eq!(location(&state, "B1"), PieceLocation::OnSquare(square(&state, 2, 0)));
    }

    #[test]
    fn test_capture_at_exact_distance() {
        let (rules, mut state) = setup();
        place(&mut state, "W1", 1, 2);
        place(&mut state, "B1", 1, 4);
        let b1 = id(&state, "B1");

        let w1 = id(&state, "W1");
        let outcome = rules.apply_move(&mut state, w1, 2).unwrap();

        assert_eq!(outcome, MoveOutcome::Captured(b1));
        assert_eq!(location(&state, "W1"), PieceLocation::OnSquare(square(&state, 1, 4)));
        assert_eq!(location(&state, "B1"), PieceLocation::OffBoard);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_pass_through_ignores_occupants() {
        let (rules, mut state) = setup();
        place(&mut state, "W1", 1, 0);
        place(&mut state, "B1", 1, 1);
        place(&mut state, "W2", 1, 2);

        let w1 = id(&state, "W1");
        let outcome = rules.apply_move(&mut state, w1, 3).unwrap();

        assert_eq!(outcome, MoveOutcome::Rosette);
        assert_eq!(location(&state, "W1"), PieceLocation::OnSquare(square(&state, 1, 3)));
        assert_eq!(location(&state, "B1"), PieceLocation::OnSquare(square(&state, 1, 1)));
        assert_eq!(location(&state, "W2"), PieceLocation::OnSquare(square(&state, 1, 2)));
    }

    #[test]
    fn test_completion_at_exact_steps() {
        let (rules, mut state) = setup();
        place(&mut state, "W1", 0, 7);
        let w1 = id(&state, "W1");
        let before = square(&state, 0, 7);
        assert_eq!(rules.steps_to_complete(&state, state.piece(w1).unwrap()), Some(2));

        assert_eq!(rules.apply_move(&mut state, w1, 2), Ok(MoveOutcome::Completed));
        assert!(state.piece(w1).unwrap().is_complete());
        assert!(state.board().square(before).is_empty());
    }

    #[test]
    fn test_overshoot_completes() {
        let (rules, mut state) = setup();
        place(&mut state, "B3", 2, 6);
        let b3 = id(&state, "B3");

        assert!(rules.can_move(&state, b3, 4));
        assert_eq!(rules.apply_move(&mut state, b3, 4), Ok(MoveOutcome::Completed));
        assert_eq!(state.completed_count(Color::Black), 1);
    }

    #[test]
    fn test_landing_on_exit_does_not_complete() {
        let (rules, mut state) = setup();
        place(&mut state, "W1", 1, 7);
        let w1 = id(&state, "W1");

        // The exit is a rosette on the classic board
        assert_eq!(rules.apply_move(&mut state, w1, 2), Ok(MoveOutcome::Rosette));
        assert_eq!(location(&state, "W1"), PieceLocation::OnSquare(state.board().exit(Color::White)));
    }

    #[test]
    fn test_same_color_landing_is_ineligible() {
        let (rules, mut state) = setup();
        place(&mut state, "W1", 1, 1);
        place(&mut state, "W2", 1, 2);
        let w1 = id(&state, "W1");
        let before = snapshot(&state);

        assert!(!rules.can_move(&state, w1, 1));
        assert_eq!(rules.apply_move(&mut state, w1, 1), Ok(MoveOutcome::Blocked));
        assert_eq!(snapshot(&state), before);

        // Jumping over the friendly piece is fine
        assert!(rules.can_move(&state, w1, 3));
    }

    #[test]
    fn test_entering_onto_own_piece_is_ineligible() {
        let (rules, mut state) = setup();
        place(&mut state, "W1", 0, 3);

        assert!(!rules.can_move(&state, id(&state, "W2"), 1));
        assert!(rules.can_move(&state, id(&state, "W2"), 2));
    }

    #[test]
    fn test_opponent_on_rosette_is_protected() {
        let (rules, mut state) = setup();
        place(&mut state, "B1", 1, 3);
        place(&mut state, "W1", 1, 1);
        let w1 = id(&state, "W1");
        let before = snapshot(&state);

        assert!(!rules.can_move(&state, w1, 2));
        assert_eq!(rules.apply_move(&mut state, w1, 2), Ok(MoveOutcome::Blocked));
        assert_eq!(snapshot(&state), before);
    }

    #[test]
    fn test_complete_piece_is_rule_violation() {
        let (rules, mut state) = setup();
        let w5 = id(&state, "W5");
        state.set_piece_location(w5, PieceLocation::Complete).unwrap();

        assert!(!rules.can_move(&state, w5, 3));
        assert_eq!(
            rules.apply_move(&mut state, w5, 3),
            Err(RuleViolation::PieceComplete {
                symbol: "W5".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_piece_is_rule_violation() {
        let (rules, mut state) = setup();
        assert!(!rules.can_move(&state, PieceId(99), 2));
        assert_eq!(
            rules.apply_move(&mut state, PieceId(99), 2),
            Err(RuleViolation::UnknownPiece(PieceId(99)))
        );
    }

    #[test]
    fn test_completion_threshold_along_path() {
        let (rules, mut state) = setup();
        let w1 = id(&state, "W1");
        let path = state.board().path(Color::White).to_vec();

        for (index, &square) in path.iter().enumerate() {
            state.set_piece_location(w1, PieceLocation::OnSquare(square)).unwrap();
            let steps = rules.steps_to_complete(&state, state.piece(w1).unwrap()).unwrap();
            assert_eq!(steps, 14 - index);

            for roll in 1..=4u8 {
                let landing = rules.landing(&state, state.piece(w1).unwrap(), roll);
                assert_eq!(landing == Landing::OffTrack, steps <= roll as usize);
            }
        }
    }

    #[test]
    fn test_movable_pieces_fresh_game() {
        let (rules, state) = setup();

        assert!(rules.movable_pieces(&state, Color::White, 0).is_empty());
        let movable = rules.movable_pieces(&state, Color::White, 2);
        assert_eq!(movable.len(), 7);
        assert_eq!(movable[0], id(&state, "W1"));
    }

    #[test]
    fn test_winner_requires_every_piece() {
        let (rules, mut state) = setup();
        let white: Vec<_> = state.player(Color::White).pieces().to_vec();

        for (n, &piece) in white.iter().enumerate() {
            assert_eq!(rules.winner(&state), None);
            assert!(!rules.has_won(&state, Color::White), "won after {n} pieces");
            state.set_piece_location(piece, PieceLocation::Complete).unwrap();
        }

        assert!(rules.has_won(&state, Color::White));
        assert_eq!(rules.winner(&state), Some(Color::White));
    }
}
