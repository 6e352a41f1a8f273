//! Engine errors.
//!
//! Every error is recoverable: the operation that returned it left the game
//! state untouched, and the same seat may try something else.

use thiserror::Error;

use crate::cards::Card;
use crate::core::{Seat, Status};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WhotError {
    #[error("no card at index {index}, hand holds {len}")]
    InvalidIndex { index: usize, len: usize },

    #[error("invalid move! {card} does not match {top}")]
    IllegalMove { card: Card, top: Card },

    #[error("{operation} is not allowed while {} with {turn} to move", .status.name())]
    InvalidState {
        operation: &'static str,
        status: Status,
        turn: Seat,
    },

    #[error("market is empty")]
    MarketEmpty,

    #[error("whot is not a shape that can be requested")]
    InvalidShape,

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, WhotError>;
