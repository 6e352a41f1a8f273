//! Game facade for presentation layers.
//!
//! `WhotGame` owns everything one table needs: the rules, the current state,
//! the random source and the history of accepted actions. A UI holds one,
//! forwards clicks as commands and redraws from the queries.
//!
//! ```
//! use whot_engine::{NextTurn, WhotConfig, WhotGame};
//!
//! let mut game = WhotGame::new(WhotConfig::new().with_seed(7)).unwrap();
//! assert_eq!(game.player_hand().len(), 7);
//!
//! // Drawing always works on a fresh deal and hands the turn over.
//! let outcome = game.draw().unwrap();
//! assert_eq!(outcome.next, NextTurn::Computer);
//! game.opponent_turn().unwrap();
//! ```

use im::Vector;

use crate::cards::{build_deck, deal, Card, Shape};
use crate::core::{Action, ActionRecord, GameRng, GameState, RandomSource, Seat, Status, WhotConfig};
use crate::rules::{Outcome, Result, WhotRules};

/// One table: rules, state, randomness and history.
#[derive(Clone, Debug)]
pub struct WhotGame<R = GameRng> {
    rules: WhotRules,
    state: GameState,
    rng: R,
    history: Vector<ActionRecord>,
}

impl WhotGame<GameRng> {
    /// Deal a game, seeding from `config.seed` or from entropy.
    pub fn new(config: WhotConfig) -> Result<Self> {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_rng(config, rng)
    }

    /// Seed of the game's RNG, for replaying a session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl<R: RandomSource> WhotGame<R> {
    /// Deal a game using the given random source.
    pub fn with_rng(config: WhotConfig, mut rng: R) -> Result<Self> {
        let state = deal(build_deck(), &config, &mut rng)?;
        Ok(Self {
            rules: WhotRules::new(config),
            state,
            rng,
            history: Vector::new(),
        })
    }

    /// Resume from an existing state.
    pub fn from_state(config: WhotConfig, state: GameState, rng: R) -> Self {
        Self {
            rules: WhotRules::new(config),
            state,
            rng,
            history: Vector::new(),
        }
    }

    /// Throw the current game away and deal a new one.
    ///
    /// The random source carries on, so a seeded table plays a different
    /// (but reproducible) game each time.
    pub fn new_game(&mut self) -> Result<()> {
        self.state = deal(build_deck(), self.rules.config(), &mut self.rng)?;
        self.history = Vector::new();
        Ok(())
    }

    // === Commands ===

    pub fn play(&mut self, index: usize) -> Result<Outcome> {
        let outcome = self.rules.player_play(&mut self.state, index)?;
        self.record(Action::Play(index));
        Ok(outcome)
    }

    pub fn draw(&mut self) -> Result<Outcome> {
        let outcome = self.rules.player_draw(&mut self.state)?;
        self.record(Action::Draw);
        Ok(outcome)
    }

    pub fn request_shape(&mut self, shape: Shape) -> Result<Outcome> {
        let outcome = self.rules.request_shape(&mut self.state, shape)?;
        self.record(Action::RequestShape(shape));
        Ok(outcome)
    }

    pub fn opponent_turn(&mut self) -> Result<Outcome> {
        let outcome = self.rules.opponent_turn(&mut self.state, &mut self.rng)?;
        self.record(Action::ComputerTurn);
        Ok(outcome)
    }

    /// Apply any action. Used to replay a recorded history.
    pub fn apply(&mut self, action: Action) -> Result<Outcome> {
        match action {
            Action::Play(index) => self.play(index),
            Action::Draw => self.draw(),
            Action::RequestShape(shape) => self.request_shape(shape),
            Action::ComputerTurn => self.opponent_turn(),
        }
    }

    fn record(&mut self, action: Action) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord::new(action, sequence));
    }

    // === Queries ===

    #[must_use]
    pub fn player_hand(&self) -> &Vector<Card> {
        self.state.hand(Seat::Player)
    }

    #[must_use]
    pub fn computer_hand(&self) -> &Vector<Card> {
        self.state.hand(Seat::Computer)
    }

    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.state.top_card()
    }

    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.state.draw_pile().len()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.state.status()
    }

    #[must_use]
    pub fn pending_shape(&self) -> Option<Shape> {
        self.state.pending_shape()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        self.state.message()
    }

    #[must_use]
    pub fn turn(&self) -> Seat {
        self.state.turn()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &WhotConfig {
        self.rules.config()
    }

    /// Accepted actions since the last deal, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }
}
