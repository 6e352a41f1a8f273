//! Whole-game simulation.
//!
//! Plays complete games with the human seat driven by the same heuristic the
//! computer uses: play a random legal card, otherwise draw. Useful for
//! exercising long runs of reachable states and for measuring how often each
//! seat wins.
//!
//! A game can stall: the player may hold nothing playable while the market
//! is empty, and no rule lets the player pass. Such games are reported as
//! stalled rather than looped forever.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{GameRng, Seat, SeatMap, WhotConfig};
use crate::game::WhotGame;
use crate::rules::{
    legal_plays, GameResult, HeuristicOpponent, NextTurn, OpponentPolicy, Outcome, Result,
    WhotError,
};

/// Golden-ratio increment separating the stand-in's stream from the table's.
const STAND_IN_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Configuration for simulated games.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    /// Table rules.
    pub table: WhotConfig,

    /// Maximum turns per game before it is abandoned.
    pub max_turns: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            table: WhotConfig::default(),
            max_turns: 1_000,
        }
    }
}

impl SimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, table: WhotConfig) -> Self {
        self.table = table;
        self
    }

    pub fn with_max_turns(mut self, max: usize) -> Self {
        self.max_turns = max;
        self
    }
}

/// How a single simulated game went.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimReport {
    pub seed: u64,

    /// `None` if the game stalled or hit the turn limit.
    pub result: Option<GameResult>,

    /// Turns taken, counting each seat's move separately.
    pub turns: usize,

    /// The player was stuck with no play and an empty market.
    pub stalled: bool,

    /// Cards played by each seat.
    pub cards_played: SeatMap<usize>,
}

/// Totals over a batch of simulated games.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimSummary {
    pub games: usize,
    pub wins: SeatMap<usize>,
    pub stalled: usize,
    pub unfinished: usize,
}

/// Simulate one game from `seed`.
pub fn simulate(config: &SimConfig, seed: u64) -> Result<SimReport> {
    let mut game = WhotGame::with_rng(config.table.clone(), GameRng::new(seed))?;
    let mut stand_in_rng = GameRng::new(seed.wrapping_add(STAND_IN_STREAM));
    let stand_in = HeuristicOpponent;

    let mut report = SimReport {
        seed,
        result: None,
        turns: 0,
        stalled: false,
        cards_played: SeatMap::with_value(0),
    };

    while report.turns < config.max_turns {
        if let Some(result) = game.state().result() {
            report.result = Some(result);
            break;
        }

        let outcome = match game.turn() {
            Seat::Player => {
                let legal = legal_plays(game.state(), Seat::Player);
                if legal.is_empty() {
                    match game.draw() {
                        Ok(outcome) => outcome,
                        Err(WhotError::MarketEmpty) => {
                            report.stalled = true;
                            break;
                        }
                        Err(err) => return Err(err),
                    }
                } else {
                    let index = stand_in.choose_play(game.player_hand(), &legal, &mut stand_in_rng);
                    let outcome = game.play(index)?;
                    if outcome.next == NextTurn::ShapeRequest {
                        tally(&mut report, &outcome);
                        let shape = stand_in.choose_shape(game.player_hand(), &mut stand_in_rng);
                        game.request_shape(shape)?
                    } else {
                        outcome
                    }
                }
            }
            Seat::Computer => game.opponent_turn()?,
        };

        tally(&mut report, &outcome);
        report.turns += 1;
    }

    if report.result.is_none() {
        report.result = game.state().result();
    }

    debug!(
        seed,
        turns = report.turns,
        stalled = report.stalled,
        winner = ?report.result.map(|r| r.winner),
        "simulated game"
    );
    Ok(report)
}

/// Simulate one game per seed in `seeds`.
pub fn simulate_many(config: &SimConfig, seeds: Range<u64>) -> Result<SimSummary> {
    let mut summary = SimSummary::default();

    for seed in seeds {
        let report = simulate(config, seed)?;
        summary.games += 1;
        match report.result {
            Some(result) => summary.wins[result.winner] += 1,
            None if report.stalled => summary.stalled += 1,
            None => summary.unfinished += 1,
        }
    }

    info!(
        games = summary.games,
        player_wins = summary.wins[Seat::Player],
        computer_wins = summary.wins[Seat::Computer],
        stalled = summary.stalled,
        unfinished = summary.unfinished,
        "simulation batch finished"
    );
    Ok(summary)
}

fn tally(report: &mut SimReport, outcome: &Outcome) {
    for seat in Seat::ALL {
        report.cards_played[seat] += outcome.plays_by(seat).count();
    }
}
