//! Turn resolution tests.
//!
//! These tests stage positions with `GameState::from_parts` and check the
//! rules engine against them:
//! - Special cards (pick two, general market, whot)
//! - Winning with the last card
//! - Market exhaustion
//! - The computer's extra moves and shape requests
//! - Status and turn guards

use std::cell::Cell;

use im::Vector;

use whot_engine::cards::{Card, Shape};
use whot_engine::core::{GameState, RandomSource, ScriptedRng, Seat, Status};
use whot_engine::rules::{
    Effect, Event, GameResult, NextTurn, OpponentPolicy, WhotError, WhotRules,
};
use whot_engine::WhotConfig;

fn c(shape: Shape, number: u8) -> Card {
    Card::new(shape, number)
}

fn rules() -> WhotRules {
    WhotRules::new(WhotConfig::default())
}

fn market(n: usize) -> Vec<Card> {
    (0..n).map(|i| c(Shape::Triangle, (i % 5 + 1) as u8)).collect()
}

// =============================================================================
// Player moves
// =============================================================================

/// Pick two: the computer draws two and the player keeps the turn.
#[test]
fn test_pick_two() {
    let mut state = GameState::from_parts(
        [c(Shape::Circle, 2), c(Shape::Star, 8)],
        [c(Shape::Cross, 3)],
        market(5),
        [c(Shape::Circle, 5)],
    );

    let outcome = rules().player_play(&mut state, 0).unwrap();

    assert_eq!(state.top_card(), Some(c(Shape::Circle, 2)));
    assert_eq!(state.hand(Seat::Player).len(), 1);
    assert_eq!(state.hand(Seat::Computer).len(), 3);
    assert_eq!(state.draw_pile().len(), 3);
    assert_eq!(state.status(), Status::Playing);
    assert_eq!(state.turn(), Seat::Player);
    assert_eq!(outcome.next, NextTurn::Player);
    assert_eq!(
        outcome.events.as_slice(),
        &[Event::Played {
            seat: Seat::Player,
            card: c(Shape::Circle, 2),
            effect: Effect::PickTwo { drawn: 2 },
        }]
    );
}

/// Pick two with a single card left in the market draws just that card.
#[test]
fn test_pick_two_short_market() {
    let mut state = GameState::from_parts(
        [c(Shape::Circle, 2), c(Shape::Star, 8)],
        [c(Shape::Cross, 3)],
        market(1),
        [c(Shape::Circle, 5)],
    );

    let outcome = rules().player_play(&mut state, 0).unwrap();

    assert_eq!(state.hand(Seat::Computer).len(), 2);
    assert!(state.draw_pile().is_empty());
    assert!(matches!(
        outcome.events[0],
        Event::Played {
            effect: Effect::PickTwo { drawn: 1 },
            ..
        }
    ));
}

/// General market on an empty market is a silent no-op draw.
#[test]
fn test_general_market_empty_market() {
    let mut state = GameState::from_parts(
        [c(Shape::Star, 14), c(Shape::Star, 8)],
        [c(Shape::Cross, 3)],
        [],
        [c(Shape::Star, 5)],
    );

    let outcome = rules().player_play(&mut state, 0).unwrap();

    assert_eq!(state.hand(Seat::Computer).len(), 1);
    assert_eq!(outcome.next, NextTurn::Player);
    assert_eq!(state.turn(), Seat::Player);
}

/// General market: the computer draws one and the player keeps the turn.
#[test]
fn test_general_market() {
    let mut state = GameState::from_parts(
        [c(Shape::Square, 14), c(Shape::Star, 8)],
        [c(Shape::Cross, 3)],
        market(4),
        [c(Shape::Square, 1)],
    );

    let outcome = rules().player_play(&mut state, 0).unwrap();

    assert_eq!(state.hand(Seat::Computer).len(), 2);
    assert_eq!(state.draw_pile().len(), 3);
    assert_eq!(outcome.next, NextTurn::Player);
    assert_eq!(state.message(), "General Market! Computer picks 1. Your turn again.");
}

/// Playing the last card wins, whatever the card is.
#[test]
fn test_last_card_wins_without_effects() {
    for last in [c(Shape::Circle, 2), c(Shape::Circle, 14), Card::whot(), c(Shape::Circle, 8)] {
        let mut state = GameState::from_parts(
            [last],
            [c(Shape::Cross, 3)],
            market(5),
            [c(Shape::Circle, 5)],
        );

        let outcome = rules().player_play(&mut state, 0).unwrap();

        assert_eq!(state.status(), Status::Ended(GameResult::won_by(Seat::Player)));
        assert_eq!(outcome.winner(), Some(Seat::Player));
        assert_eq!(state.hand(Seat::Computer).len(), 1, "no forced draw for {last}");
        assert_eq!(state.draw_pile().len(), 5);
        assert_eq!(state.pending_shape(), None);
        assert_eq!(state.message(), "You win!");
    }
}

/// Drawing from an empty market fails and keeps the turn.
#[test]
fn test_empty_market_draw() {
    let mut state = GameState::from_parts(
        [c(Shape::Star, 8)],
        [c(Shape::Cross, 3)],
        [],
        [c(Shape::Circle, 5)],
    );
    let before = state.clone();

    let err = rules().player_draw(&mut state).unwrap_err();

    assert_eq!(err, WhotError::MarketEmpty);
    assert_eq!(state, before);
    assert_eq!(state.turn(), Seat::Player);
}

/// Drawing is allowed even when a playable card is held.
#[test]
fn test_draw_with_playable_card() {
    let mut state = GameState::from_parts(
        [c(Shape::Circle, 8)],
        [c(Shape::Cross, 3)],
        market(2),
        [c(Shape::Circle, 5)],
    );

    let outcome = rules().player_draw(&mut state).unwrap();

    assert_eq!(outcome.next, NextTurn::Computer);
    assert_eq!(state.hand(Seat::Player).len(), 2);
    assert_eq!(state.hand(Seat::Player)[1], c(Shape::Triangle, 1));
    assert_eq!(state.turn(), Seat::Computer);
}

/// Whot round trip: play, request, and the computer must follow the request.
#[test]
fn test_whot_round_trip() {
    let mut state = GameState::from_parts(
        [Card::whot(), c(Shape::Circle, 8)],
        [c(Shape::Circle, 3), c(Shape::Star, 10)],
        market(3),
        [c(Shape::Circle, 5)],
    );
    let engine = rules();

    let outcome = engine.player_play(&mut state, 0).unwrap();
    assert_eq!(outcome.next, NextTurn::ShapeRequest);
    assert_eq!(state.status(), Status::AwaitingShapeRequest);

    let outcome = engine.request_shape(&mut state, Shape::Star).unwrap();
    assert_eq!(outcome.next, NextTurn::Computer);
    assert_eq!(state.status(), Status::Playing);
    assert_eq!(state.pending_shape(), Some(Shape::Star));
    assert_eq!(state.message(), "You requested star. Computer's turn...");

    // Circle 3 matches nothing on a star request; only star 10 is legal.
    engine
        .opponent_turn(&mut state, &mut ScriptedRng::default())
        .unwrap();
    assert_eq!(state.top_card(), Some(c(Shape::Star, 10)));
    assert_eq!(state.pending_shape(), None);
}

/// A second request is refused once play has resumed.
#[test]
fn test_request_shape_only_once() {
    let mut state = GameState::from_parts(
        [Card::whot(), c(Shape::Circle, 8)],
        [c(Shape::Circle, 3)],
        [],
        [c(Shape::Circle, 5)],
    );
    let engine = rules();
    engine.player_play(&mut state, 0).unwrap();
    engine.request_shape(&mut state, Shape::Cross).unwrap();

    let err = engine.request_shape(&mut state, Shape::Star).unwrap_err();

    assert!(matches!(err, WhotError::InvalidState { .. }));
    assert_eq!(state.pending_shape(), Some(Shape::Cross));
}

// =============================================================================
// Computer moves
// =============================================================================

/// With nothing playable the computer draws once and the discard pile is untouched.
#[test]
fn test_opponent_no_move_draws() {
    let mut state = GameState::from_parts(
        [c(Shape::Star, 8)],
        [c(Shape::Cross, 3), c(Shape::Square, 4)],
        market(3),
        [c(Shape::Circle, 5)],
    )
    .with_turn(Seat::Computer);
    let discard_before = state.discard_pile().clone();

    let outcome = rules()
        .opponent_turn(&mut state, &mut ScriptedRng::default())
        .unwrap();

    assert_eq!(state.discard_pile(), &discard_before);
    assert_eq!(state.hand(Seat::Computer).len(), 3);
    assert_eq!(state.draw_pile().len(), 2);
    assert_eq!(outcome.next, NextTurn::Player);
    assert_eq!(
        outcome.events.as_slice(),
        &[Event::Drew {
            seat: Seat::Computer,
            count: 1
        }]
    );
}

/// With nothing playable and an empty market the computer just passes.
#[test]
fn test_opponent_no_move_empty_market() {
    let mut state = GameState::from_parts(
        [c(Shape::Star, 8)],
        [c(Shape::Cross, 3)],
        [],
        [c(Shape::Circle, 5)],
    )
    .with_turn(Seat::Computer);

    let outcome = rules()
        .opponent_turn(&mut state, &mut ScriptedRng::default())
        .unwrap();

    assert_eq!(state.hand(Seat::Computer).len(), 1);
    assert_eq!(state.discard_pile().len(), 1);
    assert_eq!(state.turn(), Seat::Player);
    assert_eq!(state.message(), "Market is empty! Your turn!");
    assert_eq!(outcome.next, NextTurn::Player);
}

/// A computer 2 or 14 makes the player draw and earns the computer another move.
#[test]
fn test_opponent_chains_special_cards() {
    let mut state = GameState::from_parts(
        [c(Shape::Star, 8)],
        [
            c(Shape::Circle, 2),
            c(Shape::Circle, 14),
            c(Shape::Circle, 8),
            c(Shape::Star, 1),
        ],
        market(10),
        [c(Shape::Circle, 5)],
    )
    .with_turn(Seat::Computer);

    // The scripted source always picks the first legal card.
    let outcome = rules()
        .opponent_turn(&mut state, &mut ScriptedRng::default())
        .unwrap();

    let plays: Vec<Card> = outcome.plays_by(Seat::Computer).collect();
    assert_eq!(
        plays,
        vec![c(Shape::Circle, 2), c(Shape::Circle, 14), c(Shape::Circle, 8)]
    );
    assert_eq!(state.hand(Seat::Player).len(), 4);
    assert_eq!(state.hand(Seat::Computer).len(), 1);
    assert_eq!(state.top_card(), Some(c(Shape::Circle, 8)));
    assert_eq!(state.turn(), Seat::Player);
    assert_eq!(outcome.next, NextTurn::Player);
}

/// The chained extra move still draws when nothing is playable.
#[test]
fn test_opponent_chain_ends_in_draw() {
    let mut state = GameState::from_parts(
        [c(Shape::Star, 8)],
        [c(Shape::Circle, 2), c(Shape::Square, 7)],
        market(3),
        [c(Shape::Circle, 5)],
    )
    .with_turn(Seat::Computer);

    let outcome = rules()
        .opponent_turn(&mut state, &mut ScriptedRng::default())
        .unwrap();

    assert_eq!(state.top_card(), Some(c(Shape::Circle, 2)));
    assert_eq!(state.hand(Seat::Player).len(), 3);
    assert_eq!(state.hand(Seat::Computer).len(), 2);
    assert!(state.draw_pile().is_empty());
    assert_eq!(
        outcome.events.last(),
        Some(&Event::Drew {
            seat: Seat::Computer,
            count: 1
        })
    );
}

/// The computer can win in the middle of a chain.
#[test]
fn test_opponent_wins_after_chain() {
    let mut state = GameState::from_parts(
        [c(Shape::Star, 8)],
        [c(Shape::Circle, 2), c(Shape::Circle, 8)],
        market(5),
        [c(Shape::Circle, 5)],
    )
    .with_turn(Seat::Computer);

    let outcome = rules()
        .opponent_turn(&mut state, &mut ScriptedRng::default())
        .unwrap();

    assert_eq!(outcome.winner(), Some(Seat::Computer));
    assert_eq!(outcome.events.last(), Some(&Event::Won { seat: Seat::Computer }));
    assert_eq!(outcome.plays_by(Seat::Computer).count(), 2);
    assert_eq!(state.hand(Seat::Player).len(), 3);
    assert_eq!(state.message(), "Computer wins!");
}

/// After its wildcard the computer requests the shape it holds most of.
#[test]
fn test_opponent_whot_requests_most_held_shape() {
    let mut state = GameState::from_parts(
        [c(Shape::Circle, 8)],
        [
            Card::whot(),
            c(Shape::Star, 1),
            c(Shape::Star, 4),
            c(Shape::Cross, 3),
        ],
        market(3),
        [c(Shape::Square, 7)],
    )
    .with_turn(Seat::Computer);

    let outcome = rules()
        .opponent_turn(&mut state, &mut ScriptedRng::default())
        .unwrap();

    assert_eq!(state.top_card(), Some(Card::whot()));
    assert_eq!(state.pending_shape(), Some(Shape::Star));
    assert_eq!(state.status(), Status::Playing);
    assert_eq!(state.turn(), Seat::Player);
    assert_eq!(
        outcome.events.last(),
        Some(&Event::ShapeRequested {
            seat: Seat::Computer,
            shape: Shape::Star
        })
    );

    // The player must now follow with a star; circle 8 is refused.
    let err = rules().player_play(&mut state, 0).unwrap_err();
    assert!(matches!(err, WhotError::IllegalMove { .. }));
}

/// Holding only wildcards, the computer requests a random shape.
#[test]
fn test_opponent_whot_random_shape_fallback() {
    let mut state = GameState::from_parts(
        [c(Shape::Circle, 8)],
        [Card::whot(), Card::whot()],
        [],
        [c(Shape::Square, 7)],
    )
    .with_turn(Seat::Computer);

    // First choice picks the card, second picks REQUESTABLE[2].
    let mut rng = ScriptedRng::new([0, 2]);
    rules().opponent_turn(&mut state, &mut rng).unwrap();

    assert_eq!(state.pending_shape(), Some(Shape::Cross));
    assert_eq!(state.hand(Seat::Computer).len(), 1);
}

/// The configured draw counts are used for both seats.
#[test]
fn test_configured_draw_counts() {
    let engine = WhotRules::new(
        WhotConfig::new()
            .with_pick_two_count(3)
            .with_general_market_count(2),
    );
    let mut state = GameState::from_parts(
        [c(Shape::Star, 8)],
        [c(Shape::Circle, 14), c(Shape::Square, 7)],
        market(10),
        [c(Shape::Circle, 5)],
    )
    .with_turn(Seat::Computer);

    engine
        .opponent_turn(&mut state, &mut ScriptedRng::default())
        .unwrap();

    assert_eq!(state.hand(Seat::Player).len(), 3);
}

// =============================================================================
// Policy choices
// =============================================================================

/// Policy that ignores the legal plays and replays fixed hand indices.
struct FixedChoices {
    choices: Vec<usize>,
    next: Cell<usize>,
    shape: Shape,
}

impl FixedChoices {
    fn new(choices: Vec<usize>, shape: Shape) -> Self {
        Self {
            choices,
            next: Cell::new(0),
            shape,
        }
    }
}

impl OpponentPolicy for FixedChoices {
    fn choose_play<R: RandomSource>(
        &self,
        _hand: &Vector<Card>,
        _legal: &[usize],
        _rng: &mut R,
    ) -> usize {
        let i = self.next.get();
        self.next.set(i + 1);
        self.choices.get(i).copied().unwrap_or(0)
    }

    fn choose_shape<R: RandomSource>(&self, _hand: &Vector<Card>, _rng: &mut R) -> Shape {
        self.shape
    }
}

fn rules_with(policy: FixedChoices) -> WhotRules<FixedChoices> {
    WhotRules::with_policy(WhotConfig::default(), policy)
}

/// A policy choice that is in the hand but not playable is refused.
#[test]
fn test_policy_illegal_choice_refused() {
    let mut state = GameState::from_parts(
        [c(Shape::Star, 8)],
        [c(Shape::Square, 7), c(Shape::Circle, 8)],
        market(3),
        [c(Shape::Circle, 5)],
    )
    .with_turn(Seat::Computer);
    let before = state.clone();

    let err = rules_with(FixedChoices::new(vec![0], Shape::Star))
        .opponent_turn(&mut state, &mut ScriptedRng::default())
        .unwrap_err();

    assert_eq!(
        err,
        WhotError::IllegalMove {
            card: c(Shape::Square, 7),
            top: c(Shape::Circle, 5)
        }
    );
    assert_eq!(state, before);
}

/// A bad choice late in a chain rolls back the moves made before it.
#[test]
fn test_policy_failure_mid_chain_rolls_back() {
    let mut state = GameState::from_parts(
        [c(Shape::Star, 8)],
        [c(Shape::Circle, 2), c(Shape::Circle, 8)],
        market(5),
        [c(Shape::Circle, 5)],
    )
    .with_turn(Seat::Computer);
    let before = state.clone();

    let err = rules_with(FixedChoices::new(vec![0, 99], Shape::Star))
        .opponent_turn(&mut state, &mut ScriptedRng::default())
        .unwrap_err();

    assert_eq!(err, WhotError::InvalidIndex { index: 99, len: 1 });
    assert_eq!(state, before);
    assert_eq!(state.hand(Seat::Player).len(), 1);
    assert_eq!(state.turn(), Seat::Computer);
}

/// A policy naming the wildcard as its request is refused.
#[test]
fn test_policy_whot_request_refused() {
    let mut state = GameState::from_parts(
        [c(Shape::Star, 8)],
        [Card::whot(), c(Shape::Star, 1)],
        market(3),
        [c(Shape::Circle, 5)],
    )
    .with_turn(Seat::Computer);
    let before = state.clone();

    let err = rules_with(FixedChoices::new(vec![0], Shape::Whot))
        .opponent_turn(&mut state, &mut ScriptedRng::default())
        .unwrap_err();

    assert_eq!(err, WhotError::InvalidShape);
    assert_eq!(state, before);
}

// =============================================================================
// Terminal state
// =============================================================================

/// Once ended, every operation fails and nothing moves.
#[test]
fn test_terminal_absorption() {
    let mut state = GameState::from_parts(
        [c(Shape::Circle, 8)],
        [c(Shape::Circle, 3), c(Shape::Circle, 4)],
        market(5),
        [c(Shape::Circle, 5)],
    );
    let engine = rules();
    engine.player_play(&mut state, 0).unwrap();
    let ended = state.clone();

    assert!(engine.player_play(&mut state, 0).is_err());
    assert!(engine.player_draw(&mut state).is_err());
    assert!(engine.request_shape(&mut state, Shape::Star).is_err());
    assert!(engine
        .opponent_turn(&mut state, &mut ScriptedRng::default())
        .is_err());

    // Even with the computer nominally to move.
    let mut forced = state.clone().with_turn(Seat::Computer);
    assert!(engine
        .opponent_turn(&mut forced, &mut ScriptedRng::default())
        .is_err());

    assert_eq!(state, ended);
}
