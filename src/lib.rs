//! # rust-race
//!
//! Two-player race games and the negamax search that plays them.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic Search**: The search and the match driver only see the
//!    `Game` trait. Games never know who is searching them.
//!
//! 2. **Negamax Convention**: Every score is seen from the player to move and
//!    negated one ply up.
//!
//! 3. **Deterministic**: Same state and depth give the same move. Ties go to
//!    the first legal move.
//!
//! ## Modules
//!
//! - `core`: Players, moves, turn state, RNG
//! - `rules`: `Game` trait for game implementations
//! - `games`: Field race and number race
//! - `search`: Negamax with alpha-beta pruning
//! - `play`: Move sources, match driver, match history

pub mod core;
pub mod error;
pub mod rules;
pub mod games;
pub mod search;
pub mod play;

// Re-export commonly used types
pub use crate::core::{
    GameRng, Move, MoveList, PlayerId, PlayerMap, TurnRecord, TurnState,
};

pub use crate::error::{Error, Result};

pub use crate::rules::Game;

pub use crate::games::{FieldRace, FieldRaceState, NumberRace, NumberRaceState};

pub use crate::search::{Negamax, SearchConfig, SearchResult, SearchStats};

pub use crate::play::{
    run_match, AiPlayer, HumanPlayer, MatchDriver, MatchHistory, MoveSource, RandomPlayer,
    ScriptedPlayer,
};
