//! Game configuration.
//!
//! `WhotConfig` holds the few knobs of a table: how many cards each seat is
//! dealt, how many cards the special numbers force the other seat to draw,
//! and an optional seed. Configs are plain serde data, so an embedding
//! application can load one from JSON.

use serde::{Deserialize, Serialize};

use crate::cards::DECK_SIZE;
use crate::rules::{Result, WhotError};

/// Table configuration for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhotConfig {
    /// Cards dealt to each seat (default: 7).
    pub hand_size: usize,

    /// Cards the other seat draws when a 2 is played (default: 2).
    pub pick_two_count: usize,

    /// Cards the other seat draws when a 14 is played (default: 1).
    pub general_market_count: usize,

    /// Seed for the game RNG.
    /// `None` seeds from entropy once, when the table is created. Later
    /// `new_game` deals continue the same generator.
    pub seed: Option<u64>,
}

impl Default for WhotConfig {
    fn default() -> Self {
        Self {
            hand_size: 7,
            pick_two_count: 2,
            general_market_count: 1,
            seed: None,
        }
    }
}

impl WhotConfig {
    /// Create the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of cards dealt to each seat.
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the pick-two draw count.
    pub fn with_pick_two_count(mut self, count: usize) -> Self {
        self.pick_two_count = count;
        self
    }

    /// Set the general-market draw count.
    pub fn with_general_market_count(mut self, count: usize) -> Self {
        self.general_market_count = count;
        self
    }

    /// Set a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that a deal with this config is possible.
    ///
    /// Both hands must be non-empty and the deal must leave at least one
    /// card for the starting discard.
    pub fn validate(&self) -> Result<()> {
        if self.hand_size == 0 {
            return Err(WhotError::InvalidConfig(
                "hand_size must be at least 1".to_string(),
            ));
        }
        if self.hand_size * 2 >= DECK_SIZE {
            return Err(WhotError::InvalidConfig(format!(
                "hand_size {} leaves no starting card in a {DECK_SIZE}-card deck",
                self.hand_size
            )));
        }
        Ok(())
    }
}
