//! Deck construction and the deal.

use im::Vector;
use tracing::debug;

use super::card::{Card, Shape};
use crate::core::{GameState, RandomSource, WhotConfig};
use crate::rules::{Result, WhotError};

/// Total cards in a Whot deck.
pub const DECK_SIZE: usize = 65;

/// Number of wildcards in a deck.
pub const WHOT_COUNT: usize = 5;

/// Face values present for every non-wildcard shape.
///
/// Runs 1 to 14 with 6 and 9 left out.
pub const NUMBERS: [u8; 12] = [1, 2, 3, 4, 5, 7, 8, 10, 11, 12, 13, 14];

/// The full card population of one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the standard 65-card deck.
    ///
    /// Deterministic: shapes in [`Shape::REQUESTABLE`] order, numbers
    /// ascending, then the five wildcards.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for shape in Shape::REQUESTABLE {
            for number in NUMBERS {
                cards.push(Card::new(shape, number));
            }
        }
        cards.extend(std::iter::repeat(Card::whot()).take(WHOT_COUNT));
        Self { cards }
    }

    /// Build a deck from an explicit card list.
    ///
    /// No composition checks are made; used to stage scenarios.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn shuffle(&mut self, rng: &mut impl RandomSource) {
        rng.shuffle(&mut self.cards);
    }
}

/// Build the standard deck. Shorthand for [`Deck::standard`].
#[must_use]
pub fn build_deck() -> Deck {
    Deck::standard()
}

/// Shuffle `deck` and deal a fresh game.
///
/// The first `hand_size` cards go to the player, the next `hand_size` to the
/// computer, the last card starts the discard pile and everything in between
/// becomes the draw pile in shuffled order. The player moves first.
pub fn deal(mut deck: Deck, config: &WhotConfig, rng: &mut impl RandomSource) -> Result<GameState> {
    config.validate()?;
    if deck.len() <= config.hand_size * 2 {
        return Err(WhotError::InvalidConfig(format!(
            "deck of {} cards is too small to deal {} per hand",
            deck.len(),
            config.hand_size
        )));
    }

    deck.shuffle(rng);

    let mut cards: Vector<Card> = deck.cards.into_iter().collect();
    let mut rest = cards.split_off(config.hand_size);
    let player_hand = cards;
    let mut draw_pile = rest.split_off(config.hand_size);
    let computer_hand = rest;

    let mut discard_pile = Vector::new();
    if let Some(starter) = draw_pile.pop_back() {
        discard_pile.push_back(starter);
    }

    debug!(
        draw_pile = draw_pile.len(),
        top = ?discard_pile.back(),
        "dealt new game"
    );

    Ok(GameState::from_parts(
        player_hand,
        computer_hand,
        draw_pile,
        discard_pile,
    ))
}
