//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use royal_ur::{BoardGraph, BoardLayout, ColorMap, GameConfig, GameState, PieceLocation};

/// A 3x2 board. The colors enter on their own rows, share the middle row,
/// and leave on their own rows again. The second shared square is a rosette.
///
/// ```text
/// W-entrance  W-exit
/// shared      shared (rosette)
/// B-entrance  B-exit
/// ```
pub const MINI_BOARD: &str = r#"[
  [
    {"entrance": "White", "next_white": [1, 0]},
    {"exit": "White"}
  ],
  [
    {"next_white": [1, 1], "next_black": [1, 1]},
    {"rosette": true, "next_white": [0, 1], "next_black": [2, 1]}
  ],
  [
    {"entrance": "Black", "next_black": [1, 0]},
    {"exit": "Black"}
  ]
]"#;

pub fn names() -> ColorMap<String> {
    ColorMap::from_pair("Ann".to_string(), "Bob".to_string())
}

pub fn classic_state() -> GameState {
    let board = BoardGraph::from_layout(&BoardLayout::classic().unwrap()).unwrap();
    GameState::new(board, names(), &GameConfig::default()).unwrap()
}

pub fn mini_state(pieces: usize) -> GameState {
    let layout = BoardLayout::from_json_str(MINI_BOARD).unwrap();
    let board = BoardGraph::from_layout(&layout).unwrap();
    GameState::new(board, names(), &GameConfig::new().with_pieces(pieces)).unwrap()
}

/// Put a piece by symbol on a grid square.
pub fn place(state: &mut GameState, symbol: &str, row: usize, col: usize) {
    let piece = state.find_piece(symbol).unwrap();
    let square = state.board().id_at(row, col).unwrap();
    state
        .set_piece_location(piece, PieceLocation::OnSquare(square))
        .unwrap();
}

pub fn location(state: &GameState, symbol: &str) -> PieceLocation {
    let piece = state.find_piece(symbol).unwrap();
    state.piece(piece).unwrap().location()
}

pub fn at(state: &GameState, row: usize, col: usize) -> PieceLocation {
    PieceLocation::OnSquare(state.board().id_at(row, col).unwrap())
}
