//! Core types: seats, state, actions, RNG, configuration.
//!
//! This module holds the game's data model. The rules that move a game from
//! one state to the next live in `rules`.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Seat, SeatMap};
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use config::WhotConfig;
pub use action::{Action, ActionRecord};
pub use state::{GameState, Status};
