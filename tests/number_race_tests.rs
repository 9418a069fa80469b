//! Number race rule tests.

use proptest::prelude::*;

use rust_race::games::{NumberRace, NumberRaceState};
use rust_race::rules::Game;
use rust_race::{Move, PlayerId, TurnState};

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_exact_hit_ends_game() {
    let game = NumberRace::default();
    let mut state = NumberRaceState::at(37).with_current_player(PlayerId::TWO);

    game.play(&mut state, Move(3));

    assert_eq!(state.counter, 40);
    assert!(game.is_terminal(&state));
    assert_eq!(game.winner(&state), Some(PlayerId::TWO));
    // Player 1 is on move at the end, so the seat-absolute score is +100.
    assert_eq!(game.score(&state), 100);
}

#[test]
fn test_one_short_is_not_terminal() {
    let game = NumberRace::default();
    let state = NumberRaceState::at(39);

    assert!(!game.is_terminal(&state));
    assert_eq!(game.score(&state), 0);
    assert_eq!(game.winner(&state), None);
    assert_eq!(game.legal_moves(&state).len(), 5);
}

#[test]
fn test_is_legal() {
    let game = NumberRace::default();
    let state = game.initial_state();

    assert!(game.is_legal(&state, Move(1)));
    assert!(game.is_legal(&state, Move(5)));
    assert!(!game.is_legal(&state, Move(0)));
    assert!(!game.is_legal(&state, Move(6)));
    assert!(!game.is_legal(&NumberRaceState::at(40), Move(1)));
}

#[test]
fn test_render_line() {
    let game = NumberRace::new(10).unwrap();
    let mut state = game.initial_state();

    game.play(&mut state, Move(4));
    game.play(&mut state, Move(2));

    assert_eq!(game.render(&state), "******     6 / 10");
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_counter_is_sum_of_moves(steps in prop::collection::vec(1u32..=5, 0..40)) {
        let game = NumberRace::new(1000).unwrap();
        let mut state = game.initial_state();
        let mut previous = 0;

        for &s in &steps {
            game.play(&mut state, Move(s));
            prop_assert!(state.counter > previous);
            previous = state.counter;
        }

        prop_assert_eq!(state.counter, steps.iter().sum::<u32>());
    }

    #[test]
    fn prop_terminal_iff_target_reached(
        counter in 0u32..60,
        second_to_move in any::<bool>(),
    ) {
        let game = NumberRace::default();
        let mover = if second_to_move { PlayerId::TWO } else { PlayerId::ONE };
        let state = NumberRaceState::at(counter).with_current_player(mover);

        prop_assert_eq!(game.is_terminal(&state), counter >= 40);
        prop_assert_eq!(game.legal_moves(&state).is_empty(), counter >= 40);
        if counter >= 40 {
            prop_assert_eq!(game.winner(&state), Some(mover.other()));
            let expected = if mover == PlayerId::ONE { 100 } else { -100 };
            prop_assert_eq!(game.score(&state), expected);
        } else {
            prop_assert_eq!(game.score(&state), 0);
        }
    }

    #[test]
    fn prop_play_passes_turn(counter in 0u32..39, step in 1u32..=5) {
        let game = NumberRace::default();
        let mut state = NumberRaceState::at(counter);

        game.play(&mut state, Move(step));

        prop_assert_eq!(state.current_player(), PlayerId::TWO);
    }
}
