//! Game trait for rule implementations.
//!
//! Games implement `Game` to define:
//! - Legal moves for each state
//! - How moves modify state
//! - Terminal test, scoring and winner
//!
//! The search and the match driver call into `Game` but never interpret
//! game-specific progress directly.

pub mod game;

pub use game::Game;
