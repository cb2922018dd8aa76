//! Notifications emitted while a turn is played.

use serde::{Deserialize, Serialize};

use crate::core::{Color, MoveOutcome};

/// Something a player should be told about during a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// Dice were thrown for `color`.
    Rolled { color: Color, roll: u8 },

    /// No piece can spend the roll; the turn ends.
    NoMoves { color: Color, roll: u8 },

    /// A piece moved.
    Moved {
        symbol: String,
        roll: u8,
        outcome: MoveOutcome,
    },

    /// An opponent piece was sent back off the board.
    KnockedOff { symbol: String },

    /// The mover landed on a rosette and rolls again.
    BonusRoll { color: Color },

    /// The piece left the board for good.
    Completed { symbol: String },

    /// Every piece of `color` has completed the race.
    Won { color: Color },
}

impl std::fmt::Display for TurnEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnEvent::Rolled { roll, .. } => write!(f, "You rolled {roll}"),
            TurnEvent::NoMoves { .. } => {
                write!(f, "No moves are possible with the current dice roll.")
            }
            TurnEvent::Moved { symbol, roll, .. } => write!(f, "{symbol} moves {roll}"),
            TurnEvent::KnockedOff { symbol } => write!(f, "{symbol} has been knocked off"),
            TurnEvent::BonusRoll { .. } => {
                write!(f, "You have landed on a rosette. You get an extra roll.")
            }
            TurnEvent::Completed { symbol } => write!(f, "{symbol} has completed the race."),
            TurnEvent::Won { color } => write!(f, "{color} has won"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let event = TurnEvent::NoMoves {
            color: Color::Black,
            roll: 3,
        };
        assert_eq!(event.to_string(), "No moves are possible with the current dice roll.");

        let event = TurnEvent::KnockedOff {
            symbol: "B2".to_string(),
        };
        assert_eq!(event.to_string(), "B2 has been knocked off");

        let event = TurnEvent::Rolled {
            color: Color::White,
            roll: 2,
        };
        assert_eq!(event.to_string(), "You rolled 2");
    }
}
