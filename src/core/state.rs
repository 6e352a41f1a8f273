//! Game state.
//!
//! ## GameState
//!
//! The single mutable aggregate of a game:
//! - Both hands (display order only)
//! - The draw pile, consumed from the front
//! - The discard pile, whose last card is the top card
//! - Status, pending shape request, whose turn it is, and a status message
//!
//! Uses `im` persistent vectors so snapshots are O(1) to clone. Only the
//! rules engine mutates a state; everything public here is read-only or a
//! constructor.
//!
//! ## Status
//!
//! ```text
//! Playing ──wildcard──▶ AwaitingShapeRequest ──request_shape──▶ Playing
//! Playing ──hand empty──▶ Ended(result)      (absorbing)
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::{Seat, SeatMap};
use crate::cards::{Card, Shape};
use crate::rules::GameResult;

/// Where the game is in its state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Normal play.
    Playing,
    /// The player played a wildcard and must name a shape.
    AwaitingShapeRequest,
    /// A hand was emptied. Absorbing.
    Ended(GameResult),
}

impl Status {
    /// Short name, used in error reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Status::Playing => "playing",
            Status::AwaitingShapeRequest => "awaiting shape request",
            Status::Ended(_) => "ended",
        }
    }
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    hands: SeatMap<Vector<Card>>,

    /// Front of the vector is the next card drawn.
    draw_pile: Vector<Card>,

    /// Back of the vector is the top card.
    discard_pile: Vector<Card>,

    status: Status,

    /// Shape named with the last wildcard. Cleared by every play.
    pending_shape: Option<Shape>,

    /// Seat expected to act next.
    turn: Seat,

    message: String,
}

impl GameState {
    /// Build a state from explicit collections.
    ///
    /// The state starts in [`Status::Playing`] with the player to move and no
    /// pending shape. Card counts are not checked against the deck size, so
    /// tests can stage small positions.
    pub fn from_parts(
        player_hand: impl IntoIterator<Item = Card>,
        computer_hand: impl IntoIterator<Item = Card>,
        draw_pile: impl IntoIterator<Item = Card>,
        discard_pile: impl IntoIterator<Item = Card>,
    ) -> Self {
        let mut hands: SeatMap<Vector<Card>> = SeatMap::default();
        hands[Seat::Player] = player_hand.into_iter().collect();
        hands[Seat::Computer] = computer_hand.into_iter().collect();

        Self {
            hands,
            draw_pile: draw_pile.into_iter().collect(),
            discard_pile: discard_pile.into_iter().collect(),
            status: Status::Playing,
            pending_shape: None,
            turn: Seat::Player,
            message: "Your turn! Play a card or pick from market.".to_string(),
        }
    }

    /// Set the seat to move. For staging positions.
    #[must_use]
    pub fn with_turn(mut self, seat: Seat) -> Self {
        self.turn = seat;
        self
    }

    /// Set the pending shape request. For staging positions.
    #[must_use]
    pub fn with_pending_shape(mut self, shape: Option<Shape>) -> Self {
        self.pending_shape = shape;
        self
    }

    // === Queries ===

    #[must_use]
    pub fn hand(&self, seat: Seat) -> &Vector<Card> {
        &self.hands[seat]
    }

    #[must_use]
    pub fn draw_pile(&self) -> &Vector<Card> {
        &self.draw_pile
    }

    #[must_use]
    pub fn discard_pile(&self) -> &Vector<Card> {
        &self.discard_pile
    }

    /// The card legality is checked against.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.discard_pile.back().copied()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn pending_shape(&self) -> Option<Shape> {
        self.pending_shape
    }

    #[must_use]
    pub fn turn(&self) -> Seat {
        self.turn
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.status {
            Status::Ended(result) => Some(result),
            _ => None,
        }
    }

    /// Cards across both hands and both piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.hands[Seat::Player].len()
            + self.hands[Seat::Computer].len()
            + self.draw_pile.len()
            + self.discard_pile.len()
    }

    // === Mutation (rules engine only) ===

    /// Remove the card at `index` from a hand.
    pub(crate) fn take_from_hand(&mut self, seat: Seat, index: usize) -> Option<Card> {
        if index < self.hands[seat].len() {
            Some(self.hands[seat].remove(index))
        } else {
            None
        }
    }

    /// Put a card on top of the discard pile and drop any pending request.
    pub(crate) fn discard(&mut self, card: Card) {
        self.discard_pile.push_back(card);
        self.pending_shape = None;
    }

    /// Move up to `count` cards from the front of the draw pile to a hand.
    ///
    /// Returns how many cards actually moved; a short pile is not an error.
    pub(crate) fn draw_into(&mut self, seat: Seat, count: usize) -> usize {
        let mut drawn = 0;
        while drawn < count {
            match self.draw_pile.pop_front() {
                Some(card) => {
                    self.hands[seat].push_back(card);
                    drawn += 1;
                }
                None => break,
            }
        }
        drawn
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub(crate) fn set_pending_shape(&mut self, shape: Shape) {
        self.pending_shape = Some(shape);
    }

    pub(crate) fn set_turn(&mut self, seat: Seat) {
        self.turn = seat;
    }

    pub(crate) fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }
}
