//! Game state: the board, the pieces, the players, and the turn counter.
//!
//! ## Ownership
//!
//! `GameState` exclusively owns the board and the piece arena. A square's
//! occupant and a piece's position refer to each other by index, and every
//! change to either goes through `set_piece_location`, which updates both
//! sides together. The borrow checker makes `&mut GameState` the single
//! writer.
//!
//! ## Turn counter
//!
//! Turns are 1-indexed. The active color is derived from the counter's
//! parity, so alternation cannot drift; bonus rolls happen inside a turn and
//! do not advance the counter.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::Serialize;

use super::action::MoveRecord;
use super::config::GameConfig;
use super::entity::{PieceId, SquareId};
use super::error::{ConfigError, RuleViolation};
use super::piece::{Piece, PieceLocation};
use super::player::{Color, ColorMap, Player};
use crate::board::{BoardGraph, Coord};

/// Complete state of one game.
#[derive(Clone, Debug, Serialize)]
pub struct GameState {
    board: BoardGraph,
    pieces: Vec<Piece>,
    players: ColorMap<Player>,

    /// Turn number (starts at 1).
    turn_number: u32,

    /// Applied moves in order.
    history: Vector<MoveRecord>,

    #[serde(skip)]
    symbols: FxHashMap<String, PieceId>,
}

impl GameState {
    /// Set up a fresh game: every piece off the board, White to move.
    ///
    /// Each player's entrance and exit are taken from the board.
    pub fn new(
        board: BoardGraph,
        names: ColorMap<String>,
        config: &GameConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let count = config.pieces_per_player;

        let mut pieces = Vec::with_capacity(count * 2);
        let mut symbols = FxHashMap::default();
        let players = names.map(|color, name| {
            let ids = (1..=count)
                .map(|ordinal| {
                    let id = PieceId(pieces.len() as u8);
                    let piece = Piece::new(id, color, ordinal as u8);
                    symbols.insert(piece.symbol(), id);
                    pieces.push(piece);
                    id
                })
                .collect();
            Player::new(color, name, ids, board.entrance(color), board.exit(color))
        });

        Ok(Self {
            board,
            pieces,
            players,
            turn_number: 1,
            history: Vector::new(),
            symbols,
        })
    }

    // === Board ===

    /// The board graph, for rendering and rule checks.
    #[must_use]
    pub fn board(&self) -> &BoardGraph {
        &self.board
    }

    /// Piece standing on a square, if any.
    #[must_use]
    pub fn occupant(&self, square: SquareId) -> Option<&Piece> {
        self.board
            .get(square)
            .and_then(|s| s.occupant())
            .and_then(|id| self.piece(id))
    }

    // === Pieces ===

    /// All pieces, white first.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Get a piece.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    /// A color's pieces in ordinal order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.players[color]
            .pieces()
            .iter()
            .filter_map(move |&id| self.piece(id))
    }

    /// Look up a piece by symbol (`W3`, `b1`, ...). Case-insensitive.
    #[must_use]
    pub fn find_piece(&self, symbol: &str) -> Option<PieceId> {
        self.symbols.get(&symbol.trim().to_ascii_uppercase()).copied()
    }

    /// Pieces of `color` that have not finished.
    #[must_use]
    pub fn incomplete_count(&self, color: Color) -> usize {
        self.pieces_of(color).filter(|p| !p.is_complete()).count()
    }

    /// Pieces of `color` that have finished.
    #[must_use]
    pub fn completed_count(&self, color: Color) -> usize {
        self.pieces_of(color).filter(|p| p.is_complete()).count()
    }

    /// Move a piece to a new location, keeping the board's occupants in step.
    ///
    /// Refuses to put a piece on a forbidden or occupied square, and refuses
    /// to bring a complete piece back.
    pub fn set_piece_location(
        &mut self,
        id: PieceId,
        location: PieceLocation,
    ) -> Result<(), RuleViolation> {
        let piece = self.piece(id).ok_or(RuleViolation::UnknownPiece(id))?;
        let current = piece.location;
        if current == PieceLocation::Complete && location != PieceLocation::Complete {
            return Err(RuleViolation::PieceComplete {
                symbol: piece.symbol(),
            });
        }

        if let PieceLocation::OnSquare(target) = location {
            let square = self
                .board
                .get(target)
                .ok_or(RuleViolation::UnknownSquare(target))?;
            if square.is_forbidden() {
                return Err(RuleViolation::ForbiddenSquare { square: target });
            }
            if let Some(other) = square.occupant().filter(|&other| other != id) {
                let occupant = self.piece(other).map(Piece::symbol).unwrap_or_default();
                return Err(RuleViolation::SquareOccupied {
                    square: target,
                    occupant,
                });
            }
        }

        if let PieceLocation::OnSquare(old) = current {
            if let Some(square) = self.board.get_mut(old) {
                square.occupant = None;
            }
        }
        if let PieceLocation::OnSquare(new) = location {
            if let Some(square) = self.board.get_mut(new) {
                square.occupant = Some(id);
            }
        }
        self.pieces[id.index()].location = location;
        Ok(())
    }

    /// Check that piece positions and square occupants agree both ways.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let pieces_agree = self.pieces.iter().all(|piece| match piece.position() {
            Some(square) => self
                .board
                .get(square)
                .is_some_and(|s| !s.is_forbidden() && s.occupant() == Some(piece.id())),
            None => true,
        });
        let squares_agree = self.board.squares().iter().all(|square| {
            square.occupant().map_or(true, |id| {
                let Coord { row, col } = square.coord();
                self.piece(id)
                    .is_some_and(|p| p.position() == self.board.id_at(row, col))
            })
        });
        pieces_agree && squares_agree
    }

    // === Players ===

    /// Get a player.
    #[must_use]
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color]
    }

    /// Both players.
    #[must_use]
    pub fn players(&self) -> &ColorMap<Player> {
        &self.players
    }

    // === Turns ===

    /// Current 1-indexed turn number.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Color to move: White on odd turns, Black on even turns.
    #[must_use]
    pub fn active_color(&self) -> Color {
        Color::for_turn(self.turn_number)
    }

    /// Hand the turn to the other color.
    pub(crate) fn advance_turn(&mut self) {
        self.turn_number += 1;
    }

    // === History ===

    /// Applied moves in order.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    pub(crate) fn record_move(&mut self, record: MoveRecord) {
        self.history.push_back(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardLayout;

    fn new_state(pieces: usize) -> GameState {
        let board = BoardGraph::from_layout(&BoardLayout::classic().unwrap()).unwrap();
        let names = ColorMap::from_pair("Ann".to_string(), "Bob".to_string());
        GameState::new(board, names, &GameConfig::new().with_pieces(pieces)).unwrap()
    }

    #[test]
    fn test_new_state() {
        let state = new_state(7);

        assert_eq!(state.pieces().len(), 14);
        assert_eq!(state.turn_number(), 1);
        assert_eq!(state.active_color(), Color::White);
        assert!(state.pieces().iter().all(Piece::is_off_board));
        assert_eq!(state.player(Color::White).name(), "Ann");
        assert_eq!(state.player(Color::Black).pieces().len(), 7);
        assert_eq!(state.player(Color::Black).entrance(), state.board().entrance(Color::Black));
        assert_eq!(state.player(Color::White).exit(), state.board().exit(Color::White));
        assert!(state.history().is_empty());
        assert!(state.is_consistent());
    }

    #[test]
    fn test_piece_symbols() {
        let state = new_state(7);

        let symbols: Vec<_> = state.pieces_of(Color::Black).map(Piece::symbol).collect();
        assert_eq!(symbols, vec!["B1", "B2", "B3", "B4", "B5", "B6", "B7"]);

        let w3 = state.find_piece("W3").unwrap();
        assert_eq!(state.piece(w3).unwrap().ordinal(), 3);
        assert_eq!(state.find_piece(" b7 "), state.find_piece("B7"));
        assert_eq!(state.find_piece("W8"), None);
    }

    #[test]
    fn test_invalid_piece_count() {
        let board = BoardGraph::from_layout(&BoardLayout::classic().unwrap()).unwrap();
        let names = ColorMap::with_value(String::new());
        let err = GameState::new(board, names, &GameConfig::new().with_pieces(9)).unwrap_err();
        assert_eq!(err, ConfigError::PieceCount { got: 9, max: 7 });
    }

    #[test]
    fn test_set_piece_location_updates_both_sides() {
        let mut state = new_state(7);
        let w1 = state.find_piece("W1").unwrap();
        let a = state.board().id_at(1, 0).unwrap();
        let b = state.board().id_at(1, 1).unwrap();

        state.set_piece_location(w1, PieceLocation::OnSquare(a)).unwrap();
        assert_eq!(state.occupant(a).map(Piece::id), Some(w1));

        state.set_piece_location(w1, PieceLocation::OnSquare(b)).unwrap();
        assert!(state.board().square(a).is_empty());
        assert_eq!(state.occupant(b).map(Piece::id), Some(w1));

        state.set_piece_location(w1, PieceLocation::OffBoard).unwrap();
        assert!(state.board().square(b).is_empty());
        assert!(state.is_consistent());
    }

    #[test]
    fn test_consistency_catches_stale_occupant() {
        let mut state = new_state(7);
        let w1 = state.find_piece("W1").unwrap();
        let a = state.board().id_at(1, 0).unwrap();
        let b = state.board().id_at(1, 1).unwrap();
        state.set_piece_location(w1, PieceLocation::OnSquare(a)).unwrap();

        // Square b claims W1 while W1 still sits on a
        state.board.get_mut(b).unwrap().occupant = Some(w1);
        assert!(!state.is_consistent());

        state.board.get_mut(a).unwrap().occupant = None;
        assert!(!state.is_consistent());
    }

    #[test]
    fn test_set_piece_location_rejects_occupied_square() {
        let mut state = new_state(7);
        let w1 = state.find_piece("W1").unwrap();
        let b1 = state.find_piece("B1").unwrap();
        let square = state.board().id_at(1, 4).unwrap();

        state.set_piece_location(w1, PieceLocation::OnSquare(square)).unwrap();
        let err = state
            .set_piece_location(b1, PieceLocation::OnSquare(square))
            .unwrap_err();

        assert_eq!(
            err,
            RuleViolation::SquareOccupied {
                square,
                occupant: "W1".to_string()
            }
        );
        assert!(state.piece(b1).unwrap().is_off_board());
        assert!(state.is_consistent());
    }

    #[test]
    fn test_set_piece_location_rejects_forbidden_square() {
        let mut state = new_state(7);
        let w1 = state.find_piece("W1").unwrap();
        let forbidden = state.board().id_at(0, 4).unwrap();

        let err = state
            .set_piece_location(w1, PieceLocation::OnSquare(forbidden))
            .unwrap_err();
        assert_eq!(err, RuleViolation::ForbiddenSquare { square: forbidden });
    }

    #[test]
    fn test_complete_piece_never_returns() {
        let mut state = new_state(7);
        let w2 = state.find_piece("W2").unwrap();
        let square = state.board().entrance(Color::White);

        state.set_piece_location(w2, PieceLocation::Complete).unwrap();
        assert_eq!(state.completed_count(Color::White), 1);
        assert_eq!(state.incomplete_count(Color::White), 6);

        let err = state
            .set_piece_location(w2, PieceLocation::OnSquare(square))
            .unwrap_err();
        assert_eq!(err, RuleViolation::PieceComplete { symbol: "W2".to_string() });
        assert!(state.piece(w2).unwrap().is_complete());
    }

    #[test]
    fn test_turn_alternation() {
        let mut state = new_state(7);
        for turn in 1..=6u32 {
            assert_eq!(state.turn_number(), turn);
            let expected = if turn % 2 == 1 { Color::White } else { Color::Black };
            assert_eq!(state.active_color(), expected);
            state.advance_turn();
        }
    }

    #[test]
    fn test_state_serializes() {
        let state = new_state(2);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["turn_number"], 1);
        assert_eq!(json["pieces"].as_array().unwrap().len(), 4);
    }
}
