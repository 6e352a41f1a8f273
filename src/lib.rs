//! # whot-engine
//!
//! Rules engine and computer opponent for Whot, a shedding card game played
//! between one human and the computer.
//!
//! ## Design Principles
//!
//! 1. **No presentation**: the engine never draws, reads input or sleeps.
//!    A UI calls the commands and redraws from the queries; pacing before
//!    the computer moves is the caller's business.
//!
//! 2. **Injected randomness**: the shuffle and every computer choice go
//!    through `RandomSource`, so a seed (or a script) reproduces a game.
//!
//! 3. **Explicit state machine**: `Status` is `Playing`,
//!    `AwaitingShapeRequest` or `Ended`; operations invoked out of turn or
//!    out of status fail with `WhotError::InvalidState` and change nothing.
//!
//! ## Modules
//!
//! - `core`: seats, game state, actions, RNG, configuration
//! - `cards`: card values, the 65-card deck and the deal
//! - `rules`: legality, turn resolution, the computer's heuristic
//! - `game`: `WhotGame`, the facade a presentation layer drives
//! - `sim`: whole-game simulation with a stand-in for the human seat

pub mod core;
pub mod cards;
pub mod rules;
pub mod game;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord,
    GameRng, RandomSource, ScriptedRng,
    GameState, Seat, SeatMap, Status, WhotConfig,
};

pub use crate::cards::{build_deck, deal, Card, Deck, Shape, DECK_SIZE};

pub use crate::rules::{
    is_legal, legal_plays,
    Effect, Event, GameResult, NextTurn, Outcome,
    HeuristicOpponent, OpponentPolicy,
    Result, WhotError, WhotRules,
};

pub use crate::game::WhotGame;

pub use crate::sim::{simulate, simulate_many, SimConfig, SimReport, SimSummary};
