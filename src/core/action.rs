//! Action representation and history records.
//!
//! Actions are the commands a presentation layer can issue against a game:
//! - "Play card i" from the player's hand
//! - "Draw" from the market
//! - "Request shape" after a wildcard
//! - "Computer turn", resolving the opponent's move
//!
//! The engine records each accepted action so a finished game can be
//! replayed or inspected.

use serde::{Deserialize, Serialize};

use super::player::Seat;
use crate::cards::Shape;

/// A command issued against a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play the card at this index of the player's hand.
    Play(usize),
    /// Take the front card of the draw pile.
    Draw,
    /// Name the shape that must follow a wildcard.
    RequestShape(Shape),
    /// Let the computer take its turn.
    ComputerTurn,
}

impl Action {
    /// The seat that issues this action.
    #[must_use]
    pub const fn seat(self) -> Seat {
        match self {
            Action::ComputerTurn => Seat::Computer,
            _ => Seat::Player,
        }
    }
}

/// An accepted action with its position in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that took this action.
    pub seat: Seat,

    /// The action taken.
    pub action: Action,

    /// Sequence number within the game (starts at 0).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, sequence: u32) -> Self {
        Self {
            seat: action.seat(),
            action,
            sequence,
        }
    }
}
