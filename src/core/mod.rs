//! Core engine types: players, moves, turn state, RNG.
//!
//! These building blocks are game-agnostic. Concrete games live in
//! `crate::games` and build their state types on top of `TurnState`.

pub mod player;
pub mod action;
pub mod state;
pub mod rng;

pub use player::{PlayerId, PlayerMap};
pub use action::{moves, Move, MoveList, TurnRecord};
pub use state::TurnState;
pub use rng::GameRng;
