//! Turn flow: rolling, choosing a piece, bonus rolls, and handing over.

pub mod controller;
pub mod decision;
pub mod event;

pub use controller::{TurnController, TurnPhase, TurnReport};
pub use decision::{resolve_selection, DecisionContext, FirstEligible, PlayerDecision};
pub use event::TurnEvent;
