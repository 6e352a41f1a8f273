//! Structured results of engine operations.
//!
//! Each successful operation returns an [`Outcome`]: the ordered events it
//! produced and who acts next. Presentation layers can format their own text
//! from it instead of relying on the state's message string.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Shape};
use crate::core::Seat;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    /// The seat that emptied its hand.
    pub winner: Seat,
}

impl GameResult {
    #[must_use]
    pub const fn won_by(winner: Seat) -> Self {
        Self { winner }
    }
}

/// Special-card effect applied after a play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Plain card.
    None,
    /// A 2: the other seat drew `drawn` cards (fewer than asked if the market ran short).
    PickTwo { drawn: usize },
    /// A 14: the other seat drew `drawn` cards.
    GeneralMarket { drawn: usize },
    /// A wildcard; a shape request follows.
    Whot,
}

/// Something that happened during an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Played { seat: Seat, card: Card, effect: Effect },
    Drew { seat: Seat, count: usize },
    ShapeRequested { seat: Seat, shape: Shape },
    Won { seat: Seat },
}

/// What the caller should do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NextTurn {
    /// The player moves.
    Player,
    /// Call the computer's turn (typically after a pacing delay).
    Computer,
    /// The player must name a shape.
    ShapeRequest,
    /// The game is over.
    GameOver(GameResult),
}

/// Events from one operation plus the next step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub events: SmallVec<[Event; 4]>,
    pub next: NextTurn,
}

impl Outcome {
    pub(crate) fn new(events: SmallVec<[Event; 4]>, next: NextTurn) -> Self {
        Self { events, next }
    }

    /// Cards played by `seat` in this outcome, in order.
    pub fn plays_by(&self, seat: Seat) -> impl Iterator<Item = Card> + '_ {
        self.events.iter().filter_map(move |event| match event {
            Event::Played { seat: s, card, .. } if *s == seat => Some(*card),
            _ => None,
        })
    }

    /// The winner, if this outcome ended the game.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        match self.next {
            NextTurn::GameOver(result) => Some(result.winner),
            _ => None,
        }
    }
}
