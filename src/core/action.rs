//! Moves and turn records.
//!
//! A move is a small positive step drawn from a game-defined menu. Menus are
//! short (3-5 entries) so they live in a `SmallVec` without heap allocation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;

/// A single move: how far the mover advances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move(pub u32);

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(step: u32) -> Self {
        Self(step)
    }

    /// Get the step size.
    #[must_use]
    pub const fn step(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Move {
    fn from(step: u32) -> Self {
        Self(step)
    }
}

/// Legal moves in enumeration order.
pub type MoveList = SmallVec<[Move; 8]>;

/// Build a move list from a range of step sizes.
///
/// ```
/// use rust_race::core::{moves, Move};
///
/// let menu = moves(1..=3);
/// assert_eq!(menu.as_slice(), &[Move(1), Move(2), Move(3)]);
/// ```
pub fn moves(steps: impl IntoIterator<Item = u32>) -> MoveList {
    steps.into_iter().map(Move).collect()
}

/// One played turn, kept in the match history.
///
/// `state` is the snapshot taken after the move was applied and the turn
/// passed to the opponent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord<S> {
    /// Turn number, starting at 1.
    pub turn: u32,

    /// The player who moved.
    pub player: PlayerId,

    /// The move played.
    pub mv: Move,

    /// State after the move.
    pub state: S,
}

impl<S> TurnRecord<S> {
    /// Create a new turn record.
    #[must_use]
    pub fn new(turn: u32, player: PlayerId, mv: Move, state: S) -> Self {
        Self {
            turn,
            player,
            mv,
            state,
        }
    }
}
