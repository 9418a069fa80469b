//! Number race implementation.

use serde::{Deserialize, Serialize};

use crate::core::{moves, Move, MoveList, PlayerId, TurnState};
use crate::error::{Error, Result};
use crate::rules::Game;

/// Default target number.
pub const DEFAULT_TARGET: u32 = 40;

/// Score of a finished game while player 1 is on move.
pub const WIN_SCORE: i64 = 100;

const STEPS: std::ops::RangeInclusive<u32> = 1..=5;

/// Number race state: a single counter shared by both players.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumberRaceState {
    /// Player to move.
    pub current_player: PlayerId,

    /// Sum of all moves played so far.
    pub counter: u32,
}

impl NumberRaceState {
    /// Counter at `counter`, player 1 to move.
    #[must_use]
    pub fn at(counter: u32) -> Self {
        Self {
            current_player: PlayerId::ONE,
            counter,
        }
    }

    /// Set the player to move.
    #[must_use]
    pub fn with_current_player(mut self, player: PlayerId) -> Self {
        self.current_player = player;
        self
    }
}

impl Default for NumberRaceState {
    fn default() -> Self {
        Self::at(0)
    }
}

impl TurnState for NumberRaceState {
    fn current_player(&self) -> PlayerId {
        self.current_player
    }

    fn set_current_player(&mut self, player: PlayerId) {
        self.current_player = player;
    }
}

/// Number race rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRace {
    target: u32,
}

impl NumberRace {
    /// Create a race to the given number.
    pub fn new(target: u32) -> Result<Self> {
        if target == 0 {
            return Err(Error::Configuration(
                "number race target must be positive".into(),
            ));
        }
        Ok(Self { target })
    }

    /// The number to reach.
    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }
}

impl Default for NumberRace {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
        }
    }
}

impl Game for NumberRace {
    type State = NumberRaceState;

    fn name(&self) -> &str {
        "number race"
    }

    fn initial_state(&self) -> NumberRaceState {
        NumberRaceState::default()
    }

    fn legal_moves(&self, state: &NumberRaceState) -> MoveList {
        if self.is_terminal(state) {
            return MoveList::new();
        }
        moves(STEPS)
    }

    fn apply_move(&self, state: &mut NumberRaceState, mv: Move) {
        state.counter += mv.step();
    }

    fn is_terminal(&self, state: &NumberRaceState) -> bool {
        state.counter >= self.target
    }

    /// Finished games score from player 1's seat: `+100` when player 1 is the
    /// one on move, `-100` when player 2 is. Unfinished games score 0.
    fn score(&self, state: &NumberRaceState) -> i64 {
        if !self.is_terminal(state) {
            return 0;
        }
        if state.current_player == PlayerId::ONE {
            WIN_SCORE
        } else {
            -WIN_SCORE
        }
    }

    /// Whoever made the last move, i.e. the player no longer on move.
    fn winner(&self, state: &NumberRaceState) -> Option<PlayerId> {
        self.is_terminal(state)
            .then(|| state.current_player.other())
    }

    fn render(&self, state: &NumberRaceState) -> String {
        let filled = state.counter as usize;
        let remaining = self.target.saturating_sub(state.counter) as usize;
        format!(
            "{}{} {} / {}",
            "*".repeat(filled),
            " ".repeat(remaining),
            state.counter,
            self.target
        )
    }
}
