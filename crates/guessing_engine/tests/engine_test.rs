//! Tests for guess evaluation, range narrowing, and restarts.

use std::collections::HashSet;

use guessing_engine::{
    GameEnd, GameMode, GameRules, GameState, GameStatus, GuessError, GuessOutcome,
    GuessingEngine, RulesError, parse_guess,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn game_with_target(mode: GameMode, target: i64) -> GameState {
    GameState::with_target(GameRules::default(), mode, target).expect("Target in range")
}

fn seeded_engine(mode: GameMode, seed: u64) -> GuessingEngine<StdRng> {
    GuessingEngine::new(GameRules::default(), mode, StdRng::seed_from_u64(seed))
        .expect("Default rules are valid")
}

#[test]
fn test_worked_example_narrows_then_wins() {
    let mut game = game_with_target(GameMode::Practice, 42);

    let outcome = game.evaluate_guess(500).expect("In range");
    assert_eq!(
        outcome,
        GuessOutcome::TooHigh {
            guess: 500,
            low: 1,
            high: 499
        }
    );

    let outcome = game.evaluate_guess(10).expect("In range");
    assert_eq!(
        outcome,
        GuessOutcome::TooLow {
            guess: 10,
            low: 11,
            high: 499
        }
    );

    let outcome = game.evaluate_guess(42).expect("In range");
    assert_eq!(outcome, GuessOutcome::Correct { guess: 42, guesses: 3 });
    assert_eq!(game.end(), Some(GameEnd::Won));
    assert_eq!(*game.guess_count(), 3);
}

#[test]
fn test_feedback_text_matches_outcome() {
    let mut game = game_with_target(GameMode::Practice, 42);
    let outcome = game.evaluate_guess(500).expect("In range");
    assert_eq!(
        outcome.to_string(),
        "500 is too high. The number is between 1 and 499. Try again!"
    );
    let outcome = game.evaluate_guess(42).expect("In range");
    assert_eq!(outcome.to_string(), "Congratulations! 42 is correct.");
}

#[test]
fn test_out_of_range_leaves_state_untouched() {
    let mut game = game_with_target(GameMode::Game, 42);
    game.evaluate_guess(100).expect("In range");
    let before = game.clone();

    for value in [0, 100, 101, 1001, -5] {
        let result = game.evaluate_guess(value);
        assert_eq!(
            result,
            Err(GuessError::OutOfRange {
                value,
                low: 1,
                high: 99
            })
        );
    }

    assert_eq!(game, before, "Out-of-range guesses must not change state");
    assert_eq!(*game.guess_count(), 1);
    assert_eq!(*game.remaining_attempts(), 9);
}

#[test]
fn test_correct_guess_wins_on_last_attempt() {
    let rules = GameRules::default().with_max_attempts(3);
    let mut game = GameState::with_target(rules, GameMode::Game, 42).expect("In range");
    game.evaluate_guess(1).expect("In range");
    game.evaluate_guess(1000).expect("In range");

    let outcome = game.evaluate_guess(42).expect("In range");
    assert!(matches!(outcome, GuessOutcome::Correct { .. }));
    assert_eq!(*game.remaining_attempts(), 0);
    assert_eq!(*game.status(), GameStatus::Finished(GameEnd::Won));
}

#[test]
fn test_game_mode_exhausts_after_budget() {
    let mut game = game_with_target(GameMode::Game, 42);

    for value in 1..=9 {
        let outcome = game.evaluate_guess(value).expect("In range");
        assert!(matches!(outcome, GuessOutcome::TooLow { .. }));
        assert_eq!(*game.remaining_attempts(), 10 - value as u32);
    }

    let outcome = game.evaluate_guess(10).expect("In range");
    assert_eq!(outcome, GuessOutcome::Exhausted { guess: 10, target: 42 });
    assert_eq!(
        outcome.to_string(),
        "Sorry, you've run out of attempts. The number was 42."
    );
    assert_eq!(game.end(), Some(GameEnd::Exhausted));
    assert_eq!(game.remaining_label().as_deref(), Some("Remaining attempts: 0"));
}

#[test]
fn test_practice_mode_never_exhausts() {
    let mut game = game_with_target(GameMode::Practice, 1000);
    for value in 1..=50 {
        let outcome = game.evaluate_guess(value).expect("In range");
        assert!(matches!(outcome, GuessOutcome::TooLow { .. }));
    }
    assert!(!game.is_finished());
    assert_eq!(*game.remaining_attempts(), 10);
    assert_eq!(game.remaining_label(), None);
}

#[test]
fn test_guess_after_end_is_rejected() {
    let mut game = game_with_target(GameMode::Practice, 7);
    game.evaluate_guess(7).expect("In range");
    let before = game.clone();
    assert_eq!(game.evaluate_guess(7), Err(GuessError::GameOver));
    assert_eq!(game, before);
}

#[test]
fn test_bounds_contain_target_and_shrink_monotonically() {
    for seed in 0..200u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mode = if seed % 2 == 0 {
            GameMode::Practice
        } else {
            GameMode::Game
        };
        let target = rng.gen_range(1..=1000);
        let mut game = game_with_target(mode, target);

        while !game.is_finished() {
            let (low, high) = (game.bounds().low(), game.bounds().high());
            // Occasionally aim outside the interval to exercise rejection.
            let value = if rng.gen_bool(0.1) {
                high + 1
            } else {
                rng.gen_range(low..=high)
            };
            let _ = game.evaluate_guess(value);

            assert!(game.bounds().low() >= low, "low decreased (seed {seed})");
            assert!(game.bounds().high() <= high, "high increased (seed {seed})");
            assert!(
                game.bounds().contains(*game.target()),
                "bounds lost target (seed {seed})"
            );
        }
    }
}

#[test]
fn test_target_always_correct_regardless_of_progress() {
    for mode in [GameMode::Practice, GameMode::Game] {
        for misses in 0..10 {
            let mut game = game_with_target(mode, 500);
            for value in (1..=misses).rev().map(|m| 500 + m) {
                game.evaluate_guess(value).expect("In range");
            }
            let outcome = game.evaluate_guess(500).expect("In range");
            assert!(
                matches!(outcome, GuessOutcome::Correct { .. }),
                "mode {mode} after {misses} misses"
            );
        }
    }
}

#[test]
fn test_restart_resets_state_and_keeps_mode() {
    let mut engine = seeded_engine(GameMode::Game, 7);
    while !engine.state().is_finished() {
        let target = *engine.state().target();
        let bounds = *engine.state().bounds();
        let miss = if bounds.low() != target {
            bounds.low()
        } else {
            bounds.high()
        };
        engine.evaluate_guess(miss).expect("In range");
    }
    assert_eq!(engine.state().end(), Some(GameEnd::Exhausted));

    engine.restart();
    let state = engine.state();
    assert_eq!(state.bounds().low(), 1);
    assert_eq!(state.bounds().high(), 1000);
    assert_eq!(*state.guess_count(), 0);
    assert_eq!(*state.remaining_attempts(), 10);
    assert_eq!(*state.status(), GameStatus::InProgress);
    assert_eq!(engine.mode(), GameMode::Game);
}

#[test]
fn test_restart_draws_new_targets() {
    let mut engine = seeded_engine(GameMode::Practice, 99);
    let mut targets = HashSet::new();
    for _ in 0..50 {
        let target = *engine.state().target();
        assert!((1..=1000).contains(&target));
        targets.insert(target);
        engine.restart();
    }
    assert!(targets.len() > 1, "Targets should vary across restarts");
}

#[test]
fn test_submit_guess_validates_text_first() {
    let mut engine = seeded_engine(GameMode::Game, 3);
    let result = engine.submit_guess("forty-two");
    assert_eq!(
        result,
        Err(GuessError::NotANumber {
            input: "forty-two".to_string()
        })
    );
    assert_eq!(*engine.state().guess_count(), 0);
    assert_eq!(*engine.state().remaining_attempts(), 10);
}

#[test]
fn test_parse_guess_trims_whitespace() {
    assert_eq!(parse_guess(" 42\n"), Ok(42));
    assert_eq!(parse_guess("-3"), Ok(-3));
    assert!(parse_guess("").is_err());
    assert!(parse_guess("4.2").is_err());
    assert_eq!(
        parse_guess("abc").map_err(|e| e.to_string()),
        Err("Please enter a valid number.".to_string())
    );
}

#[test]
fn test_invalid_rules_rejected() {
    let rules = GameRules::default().with_low(10).with_high(5);
    let result = GuessingEngine::new(rules, GameMode::Practice, StdRng::seed_from_u64(0));
    assert!(result.is_err());

    let rules = GameRules::default().with_max_attempts(0);
    assert!(rules.validate().is_err());
}

#[test]
fn test_known_target_requires_valid_rules() {
    let no_attempts = GameRules::default().with_max_attempts(0);
    assert_eq!(
        GameState::with_target(no_attempts, GameMode::Game, 42),
        Err(GuessError::InvalidRules(RulesError::NoAttempts))
    );

    let empty = GameRules::default().with_low(10).with_high(5);
    assert_eq!(
        GameState::with_target(empty, GameMode::Practice, 7),
        Err(GuessError::InvalidRules(RulesError::EmptyRange { low: 10, high: 5 }))
    );

    let single = GameRules::default().with_low(5).with_high(5).with_max_attempts(1);
    let mut game = GameState::with_target(single, GameMode::Game, 5).expect("Valid rules");
    assert!(matches!(game.evaluate_guess(5), Ok(GuessOutcome::Correct { guesses: 1, .. })));
}

#[test]
fn test_engine_keeps_its_rules() {
    let rules = GameRules::default().with_high(50).with_max_attempts(4);
    let mut engine = GuessingEngine::new(rules, GameMode::Game, StdRng::seed_from_u64(11))
        .expect("Valid rules");
    engine.restart();
    assert_eq!(*engine.rules(), rules);
    assert_eq!(*engine.state().rules(), rules);
    assert!(*engine.state().target() <= 50);
}

#[test]
fn test_state_serializes_to_json() {
    let mut game = game_with_target(GameMode::Game, 42);
    game.evaluate_guess(500).expect("In range");
    let json = serde_json::to_string(&game).expect("Serialize failed");
    let restored: GameState = serde_json::from_str(&json).expect("Deserialize failed");
    assert_eq!(restored, game);
}

#[test]
fn test_instructions_reflect_mode() {
    assert_eq!(
        game_with_target(GameMode::Practice, 1).instructions(),
        "Guess a number between 1 and 1000. Unlimited attempts!"
    );
    assert_eq!(
        game_with_target(GameMode::Game, 1).instructions(),
        "Guess a number between 1 and 1000. You have 10 attempts."
    );
}
