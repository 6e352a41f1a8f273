//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! Whot is played heads-up: the human at [`Seat::Player`] and the engine's
//! own opponent at [`Seat::Computer`].
//!
//! ## SeatMap
//!
//! Fixed two-slot storage indexed by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two participants in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The human, driven by the presentation layer.
    Player,
    /// The engine-controlled opponent.
    Computer,
}

impl Seat {
    /// Both seats, player first.
    pub const ALL: [Seat; 2] = [Seat::Player, Seat::Computer];

    /// Get the raw seat index (0 for the player, 1 for the computer).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::Player => 0,
            Seat::Computer => 1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Player => write!(f, "Player"),
            Seat::Computer => write!(f, "Computer"),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// ```
/// use whot_engine::core::{Seat, SeatMap};
///
/// let mut drawn: SeatMap<u32> = SeatMap::with_value(0);
/// drawn[Seat::Computer] += 2;
/// assert_eq!(drawn[Seat::Player], 0);
/// assert_eq!(drawn[Seat::Computer], 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        &self.data[seat.index()]
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        &mut self.data[seat.index()]
    }
}
