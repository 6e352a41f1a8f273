//! Card values.
//!
//! A Whot card is a plain `(shape, number)` pair. Cards carry no identity:
//! the deck holds several equal wildcards and equality is by value.

use serde::{Deserialize, Serialize};

/// Card shape. [`Shape::Whot`] is the wildcard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Triangle,
    Cross,
    Square,
    Star,
    Whot,
}

impl Shape {
    /// The five shapes a player can request, in their fixed order.
    ///
    /// Tie-breaks that depend on shape order use this ordering.
    pub const REQUESTABLE: [Shape; 5] = [
        Shape::Circle,
        Shape::Triangle,
        Shape::Cross,
        Shape::Square,
        Shape::Star,
    ];

    /// Is this the wildcard shape?
    #[must_use]
    pub const fn is_whot(self) -> bool {
        matches!(self, Shape::Whot)
    }

    /// Position in [`Shape::REQUESTABLE`], `None` for the wildcard.
    #[must_use]
    pub const fn requestable_index(self) -> Option<usize> {
        match self {
            Shape::Circle => Some(0),
            Shape::Triangle => Some(1),
            Shape::Cross => Some(2),
            Shape::Square => Some(3),
            Shape::Star => Some(4),
            Shape::Whot => None,
        }
    }

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Triangle => "triangle",
            Shape::Cross => "cross",
            Shape::Square => "square",
            Shape::Star => "star",
            Shape::Whot => "whot",
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub shape: Shape,
    pub number: u8,
}

impl Card {
    /// Face value carried by every wildcard.
    pub const WHOT_NUMBER: u8 = 20;

    /// Number whose play makes the opponent pick two.
    pub const PICK_TWO: u8 = 2;

    /// Number whose play sends the opponent to the general market.
    pub const GENERAL_MARKET: u8 = 14;

    /// Create a card.
    #[must_use]
    pub const fn new(shape: Shape, number: u8) -> Self {
        Self { shape, number }
    }

    /// Create a wildcard.
    #[must_use]
    pub const fn whot() -> Self {
        Self::new(Shape::Whot, Self::WHOT_NUMBER)
    }

    #[must_use]
    pub const fn is_whot(&self) -> bool {
        self.shape.is_whot()
    }

    #[must_use]
    pub const fn is_pick_two(&self) -> bool {
        !self.is_whot() && self.number == Self::PICK_TWO
    }

    #[must_use]
    pub const fn is_general_market(&self) -> bool {
        !self.is_whot() && self.number == Self::GENERAL_MARKET
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_whot() {
            write!(f, "whot")
        } else {
            write!(f, "{} {}", self.shape, self.number)
        }
    }
}
