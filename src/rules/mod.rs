//! Rules engine.
//!
//! - `legality`: the one predicate both seats are checked against
//! - `engine`: `WhotRules`, applying plays, draws and shape requests
//! - `opponent`: the computer's move-selection heuristic
//! - `outcome`: structured results returned by every operation
//! - `error`: `WhotError`, the recoverable failures

pub mod engine;
pub mod error;
pub mod legality;
pub mod opponent;
pub mod outcome;

pub use engine::WhotRules;
pub use error::{Result, WhotError};
pub use legality::{is_legal, is_legal_in, legal_plays, LegalPlays};
pub use opponent::{most_held_shape, HeuristicOpponent, OpponentPolicy};
pub use outcome::{Effect, Event, GameResult, NextTurn, Outcome};
