//! Append-only record of a played match.
//!
//! Uses an `im` persistent vector so handing out copies for inspection
//! is O(1). Saved matches are bincode bytes.

use im::Vector;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::{Move, PlayerId, TurnRecord};
use crate::error::{Error, Result};
use crate::rules::Game;

/// Everything that happened in one match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchHistory<S: Clone> {
    initial: S,
    turns: Vector<TurnRecord<S>>,
    winner: Option<PlayerId>,
}

impl<S: Clone> MatchHistory<S> {
    /// Start a history from the initial state.
    #[must_use]
    pub fn new(initial: S) -> Self {
        Self {
            initial,
            turns: Vector::new(),
            winner: None,
        }
    }

    /// Append a played turn.
    pub fn push(&mut self, record: TurnRecord<S>) {
        self.turns.push_back(record);
    }

    /// Record the winner once the game is over.
    pub fn finish(&mut self, winner: Option<PlayerId>) {
        self.winner = winner;
    }

    /// State before the first move.
    #[must_use]
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// State after the last recorded move.
    #[must_use]
    pub fn final_state(&self) -> &S {
        self.turns
            .last()
            .map_or(&self.initial, |record| &record.state)
    }

    /// Winner, if the match reached a terminal state.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Number of turns played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Check if no turn was played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Get a turn by 0-based index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TurnRecord<S>> {
        self.turns.get(index)
    }

    /// Iterate over turns in play order.
    pub fn iter(&self) -> impl Iterator<Item = &TurnRecord<S>> {
        self.turns.iter()
    }

    /// The (player, move) sequence of the match.
    pub fn moves(&self) -> Vec<(PlayerId, Move)> {
        self.turns.iter().map(|r| (r.player, r.mv)).collect()
    }

    /// Replay the moves from the initial state and check every snapshot.
    ///
    /// Returns the replayed final state, or `Error::InvalidState` naming the
    /// first turn whose recorded state does not match.
    pub fn replay<G>(&self, game: &G) -> Result<S>
    where
        G: Game<State = S>,
        S: PartialEq,
    {
        let mut state = self.initial.clone();
        for record in &self.turns {
            if !game.is_legal(&state, record.mv) {
                return Err(Error::IllegalMove {
                    mv: record.mv,
                    player: record.player,
                });
            }
            game.play(&mut state, record.mv);
            if state != record.state {
                return Err(Error::InvalidState(format!(
                    "turn {} does not replay to its recorded state",
                    record.turn
                )));
            }
        }
        Ok(state)
    }

    /// Encode the history with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>>
    where
        S: Serialize,
    {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a history saved with `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self>
    where
        S: DeserializeOwned,
    {
        Ok(bincode::deserialize(bytes)?)
    }
}
