//! Cards and the deck.
//!
//! - `card`: the `Shape` and `Card` value types
//! - `deck`: the 65-card population and the deal

pub mod card;
pub mod deck;

pub use card::{Card, Shape};
pub use deck::{build_deck, deal, Deck, DECK_SIZE, NUMBERS, WHOT_COUNT};
