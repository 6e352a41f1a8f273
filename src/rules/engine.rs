//! Turn resolution.
//!
//! `WhotRules` applies the four moves of the game to a [`GameState`]:
//! - `player_play`: play a card from the player's hand
//! - `player_draw`: take a card from the market instead
//! - `request_shape`: name a shape after a wildcard
//! - `opponent_turn`: let the computer move, including extra moves it earns
//!   with its own 2s and 14s
//!
//! Every operation checks status and turn first and leaves the state
//! untouched when it returns an error.

use smallvec::{smallvec, SmallVec};
use tracing::debug;

use super::error::{Result, WhotError};
use super::legality::{is_legal, legal_plays};
use super::opponent::{HeuristicOpponent, OpponentPolicy};
use super::outcome::{Effect, Event, GameResult, NextTurn, Outcome};
use crate::cards::{Card, Shape};
use crate::core::{GameState, RandomSource, Seat, Status, WhotConfig};

/// The rules of a table: its config plus the computer's policy.
#[derive(Clone, Debug, Default)]
pub struct WhotRules<P = HeuristicOpponent> {
    config: WhotConfig,
    policy: P,
}

impl WhotRules<HeuristicOpponent> {
    /// Rules with the standard computer heuristic.
    pub fn new(config: WhotConfig) -> Self {
        Self::with_policy(config, HeuristicOpponent)
    }
}

impl<P: OpponentPolicy> WhotRules<P> {
    pub fn with_policy(config: WhotConfig, policy: P) -> Self {
        Self { config, policy }
    }

    #[must_use]
    pub fn config(&self) -> &WhotConfig {
        &self.config
    }

    /// Play the card at `index` of the player's hand.
    pub fn player_play(&self, state: &mut GameState, index: usize) -> Result<Outcome> {
        require(state, "play", Status::Playing, Seat::Player)?;

        let hand = state.hand(Seat::Player);
        let card = *hand.get(index).ok_or(WhotError::InvalidIndex {
            index,
            len: hand.len(),
        })?;
        if let Some(top) = state.top_card() {
            if !is_legal(card, top, state.pending_shape()) {
                return Err(WhotError::IllegalMove { card, top });
            }
        }

        state.take_from_hand(Seat::Player, index);
        state.discard(card);
        debug!(%card, "player played");

        if state.hand(Seat::Player).is_empty() {
            return Ok(finish(state, Seat::Player, card));
        }

        if card.is_whot() {
            state.set_status(Status::AwaitingShapeRequest);
            state.set_message("You played a Whot card! Select a shape to request:");
            return Ok(Outcome::new(
                smallvec![played(Seat::Player, card, Effect::Whot)],
                NextTurn::ShapeRequest,
            ));
        }

        let (effect, next) = if card.is_pick_two() {
            let drawn = state.draw_into(Seat::Computer, self.config.pick_two_count);
            state.set_message(format!("Computer picks {drawn}! Your turn again."));
            (Effect::PickTwo { drawn }, NextTurn::Player)
        } else if card.is_general_market() {
            let drawn = state.draw_into(Seat::Computer, self.config.general_market_count);
            state.set_message(format!("General Market! Computer picks {drawn}. Your turn again."));
            (Effect::GeneralMarket { drawn }, NextTurn::Player)
        } else {
            state.set_turn(Seat::Computer);
            state.set_message("Computer's turn...");
            (Effect::None, NextTurn::Computer)
        };

        Ok(Outcome::new(smallvec![played(Seat::Player, card, effect)], next))
    }

    /// Draw one card from the market into the player's hand.
    ///
    /// Allowed even when the player holds a playable card. An empty market is
    /// reported as [`WhotError::MarketEmpty`] and the turn does not pass.
    pub fn player_draw(&self, state: &mut GameState) -> Result<Outcome> {
        require(state, "draw", Status::Playing, Seat::Player)?;

        if state.draw_pile().is_empty() {
            return Err(WhotError::MarketEmpty);
        }

        let count = state.draw_into(Seat::Player, 1);
        state.set_turn(Seat::Computer);
        state.set_message("You picked from market. Computer's turn.");
        debug!(market = state.draw_pile().len(), "player drew");

        Ok(Outcome::new(
            smallvec![Event::Drew {
                seat: Seat::Player,
                count
            }],
            NextTurn::Computer,
        ))
    }

    /// Name the shape that must follow the player's wildcard.
    pub fn request_shape(&self, state: &mut GameState, shape: Shape) -> Result<Outcome> {
        require(
            state,
            "request shape",
            Status::AwaitingShapeRequest,
            Seat::Player,
        )?;
        if shape.is_whot() {
            return Err(WhotError::InvalidShape);
        }

        state.set_pending_shape(shape);
        state.set_status(Status::Playing);
        state.set_turn(Seat::Computer);
        state.set_message(format!("You requested {shape}. Computer's turn..."));
        debug!(%shape, "player requested shape");

        Ok(Outcome::new(
            smallvec![Event::ShapeRequested {
                seat: Seat::Player,
                shape
            }],
            NextTurn::Computer,
        ))
    }

    /// Resolve the computer's turn.
    ///
    /// With no playable card the computer draws one (nothing, if the market is
    /// empty) and the player moves next. Otherwise it plays; a 2 or 14 makes
    /// the player draw and gives the computer another move. Each extra move
    /// costs the computer a card, so the chain ends within one hand's length.
    ///
    /// A policy choice outside the legal plays is an error, and the state is
    /// rolled back to how it was before the turn began.
    pub fn opponent_turn(
        &self,
        state: &mut GameState,
        rng: &mut impl RandomSource,
    ) -> Result<Outcome> {
        require(state, "computer turn", Status::Playing, Seat::Computer)?;

        let snapshot = state.clone();
        let result = self.resolve_opponent(state, rng);
        if result.is_err() {
            *state = snapshot;
        }
        result
    }

    fn resolve_opponent(
        &self,
        state: &mut GameState,
        rng: &mut impl RandomSource,
    ) -> Result<Outcome> {
        let mut events: SmallVec<[Event; 4]> = SmallVec::new();
        loop {
            let legal = legal_plays(state, Seat::Computer);
            if legal.is_empty() {
                let count = state.draw_into(Seat::Computer, 1);
                state.set_message(if count > 0 {
                    "Computer picked from market. Your turn!"
                } else {
                    "Market is empty! Your turn!"
                });
                debug!(count, "computer had no play");
                events.push(Event::Drew {
                    seat: Seat::Computer,
                    count,
                });
                return Ok(pass_to_player(state, events));
            }

            let index = self.policy.choose_play(state.hand(Seat::Computer), &legal, rng);
            if !legal.contains(&index) {
                let hand = state.hand(Seat::Computer);
                return Err(match (hand.get(index), state.top_card()) {
                    (Some(&card), Some(top)) => WhotError::IllegalMove { card, top },
                    _ => WhotError::InvalidIndex {
                        index,
                        len: hand.len(),
                    },
                });
            }
            let len = state.hand(Seat::Computer).len();
            let card = state
                .take_from_hand(Seat::Computer, index)
                .ok_or(WhotError::InvalidIndex { index, len })?;
            state.discard(card);
            debug!(%card, "computer played");

            if state.hand(Seat::Computer).is_empty() {
                let mut outcome = finish(state, Seat::Computer, card);
                events.append(&mut outcome.events);
                outcome.events = events;
                return Ok(outcome);
            }

            if card.is_whot() {
                let shape = self.policy.choose_shape(state.hand(Seat::Computer), rng);
                if shape.is_whot() {
                    return Err(WhotError::InvalidShape);
                }
                state.set_pending_shape(shape);
                state.set_message(format!(
                    "Computer played a Whot and requests {shape}. Your turn!"
                ));
                debug!(%shape, "computer requested shape");
                events.push(played(Seat::Computer, card, Effect::Whot));
                events.push(Event::ShapeRequested {
                    seat: Seat::Computer,
                    shape,
                });
                return Ok(pass_to_player(state, events));
            }

            if card.is_pick_two() {
                let drawn = state.draw_into(Seat::Player, self.config.pick_two_count);
                state.set_message(format!("You pick {drawn}! Computer's turn again."));
                events.push(played(Seat::Computer, card, Effect::PickTwo { drawn }));
                continue;
            }

            if card.is_general_market() {
                let drawn = state.draw_into(Seat::Player, self.config.general_market_count);
                state.set_message(format!(
                    "General Market! You pick {drawn}. Computer's turn again."
                ));
                events.push(played(Seat::Computer, card, Effect::GeneralMarket { drawn }));
                continue;
            }

            state.set_message(format!("Computer played {card}. Your turn!"));
            events.push(played(Seat::Computer, card, Effect::None));
            return Ok(pass_to_player(state, events));
        }
    }
}

/// Fail with `InvalidState` unless the game is in `status` with `seat` to move.
fn require(state: &GameState, operation: &'static str, status: Status, seat: Seat) -> Result<()> {
    if state.status() == status && state.turn() == seat {
        Ok(())
    } else {
        Err(WhotError::InvalidState {
            operation,
            status: state.status(),
            turn: state.turn(),
        })
    }
}

fn played(seat: Seat, card: Card, effect: Effect) -> Event {
    Event::Played { seat, card, effect }
}

fn pass_to_player(state: &mut GameState, events: SmallVec<[Event; 4]>) -> Outcome {
    state.set_turn(Seat::Player);
    Outcome::new(events, NextTurn::Player)
}

/// End the game after `seat` played its last card. No effect is applied.
fn finish(state: &mut GameState, seat: Seat, card: Card) -> Outcome {
    let result = GameResult::won_by(seat);
    state.set_status(Status::Ended(result));
    state.set_message(match seat {
        Seat::Player => "You win!",
        Seat::Computer => "Computer wins!",
    });
    debug!(winner = %seat, "game over");

    Outcome::new(
        smallvec![played(seat, card, Effect::None), Event::Won { seat }],
        NextTurn::GameOver(result),
    )
}
