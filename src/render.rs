//! ASCII drawing of the board and of a player's pieces.
//!
//! Every square is an 8x5 block with a `+` border. Rosettes get a `*` in each
//! inner corner and an occupant's symbol sits in the middle row. Forbidden
//! squares stay blank.

use std::fmt::Write;

use crate::core::{Color, GameState, PieceId, PieceLocation};

const BLOCK_WIDTH: usize = 8;
const BLOCK_HEIGHT: usize = 5;

/// Draw the whole board.
#[must_use]
pub fn render_board(state: &GameState) -> String {
    let board = state.board();
    let mut canvas =
        vec![vec![' '; board.cols() * BLOCK_WIDTH]; board.rows() * BLOCK_HEIGHT];

    for square in board.squares() {
        if square.is_forbidden() {
            continue;
        }
        let coord = square.coord();
        let top = coord.row * BLOCK_HEIGHT;
        let left = coord.col * BLOCK_WIDTH;

        for y in 0..BLOCK_HEIGHT {
            for x in 0..BLOCK_WIDTH {
                let border = x == 0 || y == 0 || x == BLOCK_WIDTH - 1 || y == BLOCK_HEIGHT - 1;
                let corner = (y == 1 || y == BLOCK_HEIGHT - 2) && (x == 1 || x == BLOCK_WIDTH - 2);
                if border {
                    canvas[top + y][left + x] = '+';
                } else if corner && square.is_rosette() {
                    canvas[top + y][left + x] = '*';
                }
            }
        }

        if let Some(piece) = square.occupant().and_then(|id| state.piece(id)) {
            for (offset, ch) in piece.symbol().chars().take(BLOCK_WIDTH - 4).enumerate() {
                canvas[top + 2][left + 3 + offset] = ch;
            }
        }
    }

    canvas
        .into_iter()
        .map(|line| line.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// List the pieces that can spend the roll, then the ones already home.
///
/// ```text
/// 1 W1 currently off the board
/// 2 W2 (1, 4)
/// W3 has completed the race.
/// ```
#[must_use]
pub fn render_pieces(state: &GameState, color: Color, movable: &[PieceId]) -> String {
    let mut out = String::new();

    for piece in state.pieces_of(color).filter(|p| movable.contains(&p.id())) {
        let status = match piece.location() {
            PieceLocation::OffBoard => "currently off the board".to_string(),
            PieceLocation::OnSquare(square) => state.board().square(square).coord().to_string(),
            PieceLocation::Complete => continue,
        };
        let _ = writeln!(out, "{} {} {}", piece.ordinal(), piece.symbol(), status);
    }

    for piece in state.pieces_of(color).filter(|p| p.is_complete()) {
        let _ = writeln!(out, "{} has completed the race.", piece.symbol());
    }

    out
}
