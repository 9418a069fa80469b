//! Field race implementation.

use serde::{Deserialize, Serialize};

use crate::core::{moves, Move, MoveList, PlayerId, PlayerMap, TurnState};
use crate::error::{Error, Result};
use crate::rules::Game;

/// Default finish field.
pub const DEFAULT_TARGET: u32 = 20;

/// Steps a player may take each turn.
const STEPS: std::ops::RangeInclusive<u32> = 1..=3;

/// Field race state: one position per player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldRaceState {
    /// Player to move.
    pub current_player: PlayerId,

    /// Field each player stands on (0 = start).
    pub positions: PlayerMap<u32>,
}

impl FieldRaceState {
    /// Both players on the start field, player 1 to move.
    #[must_use]
    pub fn new() -> Self {
        Self::at(0, 0)
    }

    /// Players on the given fields, player 1 to move.
    #[must_use]
    pub fn at(first: u32, second: u32) -> Self {
        Self {
            current_player: PlayerId::ONE,
            positions: PlayerMap::from_pair(first, second),
        }
    }

    /// Set the player to move.
    #[must_use]
    pub fn with_current_player(mut self, player: PlayerId) -> Self {
        self.current_player = player;
        self
    }

    /// Position of a player.
    #[must_use]
    pub fn position(&self, player: PlayerId) -> u32 {
        self.positions[player]
    }
}

impl Default for FieldRaceState {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnState for FieldRaceState {
    fn current_player(&self) -> PlayerId {
        self.current_player
    }

    fn set_current_player(&mut self, player: PlayerId) {
        self.current_player = player;
    }
}

/// Field race rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRace {
    target: u32,
}

impl FieldRace {
    /// Create a race to the given finish field.
    pub fn new(target: u32) -> Result<Self> {
        if target == 0 {
            return Err(Error::Configuration(
                "field race target must be positive".into(),
            ));
        }
        Ok(Self { target })
    }

    /// The finish field.
    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Whether `player` stands on or past the finish field.
    #[must_use]
    pub fn has_won(&self, state: &FieldRaceState, player: PlayerId) -> bool {
        state.positions[player] >= self.target
    }

    fn render_line(&self, state: &FieldRaceState, player: PlayerId) -> String {
        let position = state.positions[player];
        format!(
            "p{} position: {}> {}/{}",
            player.number(),
            "#".repeat(position as usize),
            position,
            self.target
        )
    }
}

impl Default for FieldRace {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
        }
    }
}

impl Game for FieldRace {
    type State = FieldRaceState;

    fn name(&self) -> &str {
        "field race"
    }

    fn initial_state(&self) -> FieldRaceState {
        FieldRaceState::new()
    }

    fn legal_moves(&self, state: &FieldRaceState) -> MoveList {
        if self.is_terminal(state) {
            return MoveList::new();
        }
        moves(STEPS)
    }

    fn apply_move(&self, state: &mut FieldRaceState, mv: Move) {
        let mover = state.current_player;
        state.positions[mover] += mv.step();

        // Landing on the opponent's field sends them back to the start.
        if state.positions[PlayerId::ONE] == state.positions[PlayerId::TWO] {
            state.positions[mover.other()] = 0;
        }
    }

    fn is_terminal(&self, state: &FieldRaceState) -> bool {
        PlayerId::both().any(|p| self.has_won(state, p))
    }

    /// `+1` if the player to move has reached the finish, `-1` otherwise.
    ///
    /// Non-terminal positions score `-1` too, so a depth cutoff looks like a
    /// loss for whoever is on move there.
    fn score(&self, state: &FieldRaceState) -> i64 {
        if self.has_won(state, state.current_player) {
            1
        } else {
            -1
        }
    }

    fn winner(&self, state: &FieldRaceState) -> Option<PlayerId> {
        PlayerId::both().find(|&p| self.has_won(state, p))
    }

    fn render(&self, state: &FieldRaceState) -> String {
        format!(
            "{}\n{}",
            self.render_line(state, PlayerId::ONE),
            self.render_line(state, PlayerId::TWO)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_creation() {
        let game = FieldRace::default();
        let state = game.initial_state();

        assert_eq!(game.target(), 20);
        assert_eq!(state.current_player(), PlayerId::ONE);
        assert_eq!(state.positions, PlayerMap::from_pair(0, 0));
        assert!(!game.is_terminal(&state));
    }

    #[test]
    fn test_zero_target_rejected() {
        assert!(matches!(FieldRace::new(0), Err(Error::Configuration(_))));
        assert_eq!(FieldRace::new(5).unwrap().target(), 5);
    }

    #[test]
    fn test_legal_moves() {
        let game = FieldRace::default();
        let state = FieldRaceState::at(12, 4);

        assert_eq!(game.legal_moves(&state).as_slice(), &[Move(1), Move(2), Move(3)]);
    }

    #[test]
    fn test_legal_moves_empty_when_over() {
        let game = FieldRace::default();
        let state = FieldRaceState::at(20, 4);

        assert!(game.legal_moves(&state).is_empty());
    }

    #[test]
    fn test_apply_move_advances_mover_only() {
        let game = FieldRace::default();
        let mut state = FieldRaceState::at(3, 8).with_current_player(PlayerId::TWO);

        game.apply_move(&mut state, Move(2));

        assert_eq!(state.positions, PlayerMap::from_pair(3, 10));
        assert_eq!(state.current_player(), PlayerId::TWO);
    }

    #[test]
    fn test_collision_resets_other_player() {
        let game = FieldRace::default();
        let mut state = FieldRaceState::at(5, 7);

        game.apply_move(&mut state, Move(2));

        assert_eq!(state.position(PlayerId::ONE), 7);
        assert_eq!(state.position(PlayerId::TWO), 0);
    }

    #[test]
    fn test_no_reset_when_fields_differ() {
        let game = FieldRace::default();
        let mut state = FieldRaceState::at(5, 5);

        game.apply_move(&mut state, Move(2));

        assert_eq!(state.positions, PlayerMap::from_pair(7, 5));
    }

    #[test]
    fn test_overshoot_wins() {
        let game = FieldRace::default();
        let mut state = FieldRaceState::at(19, 0);

        game.apply_move(&mut state, Move(3));

        assert_eq!(state.position(PlayerId::ONE), 22);
        assert!(game.is_terminal(&state));
        assert!(game.has_won(&state, PlayerId::ONE));
        assert!(!game.has_won(&state, PlayerId::TWO));
        assert_eq!(game.winner(&state), Some(PlayerId::ONE));
    }

    #[test]
    fn test_score_from_player_to_move() {
        let game = FieldRace::default();

        // Player 1 finished and the turn has passed: player 2 is evaluated.
        let state = FieldRaceState::at(21, 3).with_current_player(PlayerId::TWO);
        assert_eq!(game.score(&state), -1);

        let state = FieldRaceState::at(21, 3);
        assert_eq!(game.score(&state), 1);
    }

    #[test]
    fn test_non_terminal_scores_minus_one() {
        let game = FieldRace::default();
        let state = FieldRaceState::at(10, 2);

        assert!(!game.is_terminal(&state));
        assert_eq!(game.score(&state), -1);
        assert_eq!(game.winner(&state), None);
    }

    #[test]
    fn test_render() {
        let game = FieldRace::default();
        let state = FieldRaceState::at(3, 0);

        assert_eq!(
            game.render(&state),
            "p1 position: ###> 3/20\np2 position: > 0/20"
        );
    }

    #[test]
    fn test_deterministic_replay() {
        let game = FieldRace::default();
        let script = [3, 1, 2, 2, 3, 3, 1, 2];

        let mut state1 = game.initial_state();
        let mut state2 = game.initial_state();
        for step in script {
            game.play(&mut state1, Move(step));
        }
        for step in script {
            game.play(&mut state2, Move(step));
        }

        assert_eq!(state1, state2);
    }
}
