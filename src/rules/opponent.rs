//! Computer move selection.
//!
//! The computer plays one fixed heuristic: a uniformly random legal card,
//! and after a wildcard the shape it holds most of. The `OpponentPolicy`
//! trait is the seam the engine calls through, so the simulation can drive
//! the human seat with the same heuristic.

use im::Vector;

use crate::cards::{Card, Shape};
use crate::core::RandomSource;

/// Decides a seat's card and shape choices.
pub trait OpponentPolicy {
    /// Pick one of `legal` (indices into `hand`). `legal` is never empty.
    ///
    /// Must return an element of `legal`.
    fn choose_play<R: RandomSource>(
        &self,
        hand: &Vector<Card>,
        legal: &[usize],
        rng: &mut R,
    ) -> usize;

    /// Name the shape to request after playing a wildcard.
    ///
    /// `hand` is what remains after the wildcard left it. Must not return
    /// [`Shape::Whot`].
    fn choose_shape<R: RandomSource>(&self, hand: &Vector<Card>, rng: &mut R) -> Shape;
}

/// The computer's heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicOpponent;

impl OpponentPolicy for HeuristicOpponent {
    fn choose_play<R: RandomSource>(
        &self,
        _hand: &Vector<Card>,
        legal: &[usize],
        rng: &mut R,
    ) -> usize {
        legal[rng.gen_index(legal.len())]
    }

    fn choose_shape<R: RandomSource>(&self, hand: &Vector<Card>, rng: &mut R) -> Shape {
        most_held_shape(hand)
            .unwrap_or_else(|| Shape::REQUESTABLE[rng.gen_index(Shape::REQUESTABLE.len())])
    }
}

/// The non-wildcard shape held most often, ties going to the earliest shape
/// in [`Shape::REQUESTABLE`]. `None` if the hand holds no such card.
#[must_use]
pub fn most_held_shape(hand: &Vector<Card>) -> Option<Shape> {
    let mut counts = [0usize; 5];
    for card in hand {
        if let Some(i) = card.shape.requestable_index() {
            counts[i] += 1;
        }
    }

    let mut best: Option<(Shape, usize)> = None;
    for (shape, count) in Shape::REQUESTABLE.into_iter().zip(counts) {
        if count > best.map_or(0, |(_, c)| c) {
            best = Some((shape, count));
        }
    }
    best.map(|(shape, _)| shape)
}
