//! Move legality.
//!
//! One predicate serves both seats; the computer's options are computed with
//! exactly the same check the player's plays are validated against.

use smallvec::SmallVec;
use tracing::trace;

use crate::cards::{Card, Shape};
use crate::core::{GameState, Seat};

/// Hand indices of playable cards. Hands rarely exceed eight cards.
pub type LegalPlays = SmallVec<[usize; 8]>;

/// Can `card` be played on `top` given the pending shape request?
///
/// - A wildcard is always playable.
/// - On a wildcard with a named shape, only that shape is playable.
/// - Otherwise shape or number must match.
///
/// ```
/// use whot_engine::cards::{Card, Shape};
/// use whot_engine::rules::is_legal;
///
/// let top = Card::new(Shape::Circle, 5);
/// assert!(is_legal(Card::new(Shape::Circle, 8), top, None));
/// assert!(is_legal(Card::new(Shape::Star, 5), top, None));
/// assert!(!is_legal(Card::new(Shape::Star, 8), top, None));
/// assert!(is_legal(Card::whot(), top, None));
/// ```
#[must_use]
pub fn is_legal(card: Card, top: Card, pending: Option<Shape>) -> bool {
    if card.is_whot() {
        return true;
    }
    if top.is_whot() {
        if let Some(requested) = pending {
            return card.shape == requested;
        }
    }
    card.shape == top.shape || card.number == top.number
}

/// Check `card` against the state's top card and pending request.
///
/// With no top card (only possible in staged positions) anything goes.
#[must_use]
pub fn is_legal_in(state: &GameState, card: Card) -> bool {
    match state.top_card() {
        Some(top) => is_legal(card, top, state.pending_shape()),
        None => true,
    }
}

/// Indices of every card in `seat`'s hand that may be played now.
#[must_use]
pub fn legal_plays(state: &GameState, seat: Seat) -> LegalPlays {
    let plays: LegalPlays = state
        .hand(seat)
        .iter()
        .enumerate()
        .filter(|(_, card)| is_legal_in(state, **card))
        .map(|(i, _)| i)
        .collect();

    trace!(%seat, legal = plays.len(), top = ?state.top_card(), "computed legal plays");
    plays
}
