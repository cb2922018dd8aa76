//! One turn as a small state machine.
//!
//! ```text
//! AwaitRoll -> SelectPiece -> ApplyMove -> EndTurn
//!                  ^              |
//!                  |              v
//!                  +--------- BonusRoll   (after landing on a rosette)
//! ```
//!
//! `SelectPiece` goes straight to `EndTurn` when nothing can move. `EndTurn`
//! runs the win check and, if the game goes on, hands the turn over.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{
    Color, Dice, GameState, MoveOutcome, MoveRecord, PieceId, RuleViolation,
};
use crate::rules::{MovablePieces, MovementEngine, RulesEngine};

use super::decision::{resolve_selection, DecisionContext, PlayerDecision};
use super::event::TurnEvent;

/// Where the turn is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitRoll,
    SelectPiece { roll: u8 },
    ApplyMove { roll: u8, movable: MovablePieces },
    BonusRoll,
    EndTurn,
}

/// Everything that happened in one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub color: Color,
    pub turn: u32,
    /// Every roll, the bonus rolls included.
    pub rolls: Vec<u8>,
    pub moves: Vec<MoveRecord>,
    /// Set when this turn finished the game.
    pub winner: Option<Color>,
}

impl TurnReport {
    fn new(color: Color, turn: u32) -> Self {
        Self {
            color,
            turn,
            rolls: Vec::new(),
            moves: Vec::new(),
            winner: None,
        }
    }

    /// Bonus rolls earned this turn.
    #[must_use]
    pub fn bonus_rolls(&self) -> usize {
        self.rolls.len().saturating_sub(1)
    }
}

/// Runs turns against a rules engine.
#[derive(Clone, Debug, Default)]
pub struct TurnController<R = MovementEngine> {
    rules: R,
}

impl<R: RulesEngine> TurnController<R> {
    pub fn new(rules: R) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Play the active color's turn to the end, bonus rolls included.
    pub fn run_turn<D, P>(
        &self,
        state: &mut GameState,
        dice: &mut D,
        decision: &mut P,
    ) -> Result<TurnReport, RuleViolation>
    where
        D: Dice + ?Sized,
        P: PlayerDecision + ?Sized,
    {
        let color = state.active_color();
        let turn = state.turn_number();
        let mut report = TurnReport::new(color, turn);
        let mut phase = TurnPhase::AwaitRoll;
        debug!(turn, %color, "turn start");

        loop {
            phase = match phase {
                TurnPhase::AwaitRoll | TurnPhase::BonusRoll => {
                    let roll = dice.roll();
                    report.rolls.push(roll);
                    debug!(turn, %color, roll, "rolled");
                    decision.notify(&TurnEvent::Rolled { color, roll });
                    TurnPhase::SelectPiece { roll }
                }

                TurnPhase::SelectPiece { roll } => {
                    let movable = self.rules.movable_pieces(state, color, roll);
                    if movable.is_empty() {
                        debug!(turn, %color, roll, "no moves");
                        decision.notify(&TurnEvent::NoMoves { color, roll });
                        TurnPhase::EndTurn
                    } else {
                        TurnPhase::ApplyMove { roll, movable }
                    }
                }

                TurnPhase::ApplyMove { roll, movable } => {
                    match self.select(state, color, roll, &movable, decision) {
                        Some(piece) => {
                            let outcome = self.rules.apply_move(state, piece, roll)?;
                            let record = MoveRecord::new(turn, color, piece, roll, outcome);
                            state.record_move(record.clone());
                            report.moves.push(record);
                            self.announce(state, piece, roll, outcome, decision);

                            if outcome.grants_bonus() {
                                info!(turn, %color, "bonus roll");
                                TurnPhase::BonusRoll
                            } else {
                                TurnPhase::EndTurn
                            }
                        }
                        None => {
                            debug!(turn, %color, "player passed");
                            TurnPhase::EndTurn
                        }
                    }
                }

                TurnPhase::EndTurn => {
                    if self.rules.has_won(state, color) {
                        info!(turn, %color, "game won");
                        decision.notify(&TurnEvent::Won { color });
                        report.winner = Some(color);
                    } else {
                        state.advance_turn();
                    }
                    return Ok(report);
                }
            };
        }
    }

    /// Ask until the decision-maker names an eligible piece or passes.
    fn select<P: PlayerDecision + ?Sized>(
        &self,
        state: &GameState,
        color: Color,
        roll: u8,
        movable: &[PieceId],
        decision: &mut P,
    ) -> Option<PieceId> {
        let ctx = DecisionContext {
            state,
            color,
            roll,
            movable,
        };
        loop {
            let input = decision.choose(&ctx)?;
            match resolve_selection(&ctx, &input) {
                Ok(piece) => return Some(piece),
                Err(err) => {
                    warn!(%err, "selection rejected");
                    decision.rejected(&err);
                }
            }
        }
    }

    fn announce<P: PlayerDecision + ?Sized>(
        &self,
        state: &GameState,
        piece: PieceId,
        roll: u8,
        outcome: MoveOutcome,
        decision: &mut P,
    ) {
        let symbol_of = |id: PieceId| state.piece(id).map(|p| p.symbol()).unwrap_or_default();
        let color = state.active_color();

        decision.notify(&TurnEvent::Moved {
            symbol: symbol_of(piece),
            roll,
            outcome,
        });
        match outcome {
            MoveOutcome::Captured(victim) => decision.notify(&TurnEvent::KnockedOff {
                symbol: symbol_of(victim),
            }),
            MoveOutcome::Rosette => decision.notify(&TurnEvent::BonusRoll { color }),
            MoveOutcome::Completed => decision.notify(&TurnEvent::Completed {
                symbol: symbol_of(piece),
            }),
            MoveOutcome::Advanced | MoveOutcome::Blocked => {}
        }
    }
}
