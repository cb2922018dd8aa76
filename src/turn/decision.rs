//! Choosing which piece to move.
//!
//! The turn controller asks a `PlayerDecision` for a piece name whenever a
//! roll can be spent. Names are resolved against the active color's pieces;
//! a bad name is reported back through `rejected` and the controller asks
//! again.

use crate::core::{Color, GameState, InvalidSelection, PieceId};

use super::event::TurnEvent;

/// What a decision-maker gets to look at.
#[derive(Clone, Copy, Debug)]
pub struct DecisionContext<'a> {
    pub state: &'a GameState,
    pub color: Color,
    pub roll: u8,
    /// Eligible pieces in ordinal order. Never empty.
    pub movable: &'a [PieceId],
}

impl<'a> DecisionContext<'a> {
    /// Symbols of the eligible pieces.
    pub fn movable_symbols(&self) -> impl Iterator<Item = String> + 'a {
        let state = self.state;
        self.movable
            .iter()
            .filter_map(move |&id| state.piece(id))
            .map(|piece| piece.symbol())
    }
}

/// Picks a piece for the active player.
pub trait PlayerDecision {
    /// Name a piece (`"W3"`, `"w3"` or just `"3"`), or `None` to pass.
    fn choose(&mut self, ctx: &DecisionContext<'_>) -> Option<String>;

    /// The last answer from `choose` could not be used.
    fn rejected(&mut self, _error: &InvalidSelection) {}

    /// Something happened during the turn.
    fn notify(&mut self, _event: &TurnEvent) {}
}

impl<P: PlayerDecision + ?Sized> PlayerDecision for &mut P {
    fn choose(&mut self, ctx: &DecisionContext<'_>) -> Option<String> {
        (**self).choose(ctx)
    }

    fn rejected(&mut self, error: &InvalidSelection) {
        (**self).rejected(error);
    }

    fn notify(&mut self, event: &TurnEvent) {
        (**self).notify(event);
    }
}

/// Always moves the lowest-numbered eligible piece.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstEligible;

impl PlayerDecision for FirstEligible {
    fn choose(&mut self, ctx: &DecisionContext<'_>) -> Option<String> {
        ctx.movable_symbols().next()
    }
}

/// Turn a typed piece name into one of the active color's eligible pieces.
///
/// Accepts a full symbol in either case or a bare ordinal.
pub fn resolve_selection(
    ctx: &DecisionContext<'_>,
    input: &str,
) -> Result<PieceId, InvalidSelection> {
    let input = input.trim();
    let unknown = || InvalidSelection::UnknownPiece(input.to_string());

    let id = match input.parse::<u8>() {
        Ok(ordinal) => ctx
            .state
            .pieces_of(ctx.color)
            .find(|piece| piece.ordinal() == ordinal)
            .map(|piece| piece.id()),
        Err(_) => ctx.state.find_piece(input),
    }
    .ok_or_else(unknown)?;

    let piece = ctx.state.piece(id).ok_or_else(unknown)?;
    if piece.color() != ctx.color {
        return Err(unknown());
    }
    if piece.is_complete() {
        return Err(InvalidSelection::AlreadyComplete(piece.symbol()));
    }
    if !ctx.movable.contains(&id) {
        return Err(InvalidSelection::NotMovable {
            symbol: piece.symbol(),
            roll: ctx.roll,
        });
    }
    Ok(id)
}
