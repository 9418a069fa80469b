//! Adversarial search for rust-race.
//!
//! ## Overview
//!
//! A fixed-depth negamax search with alpha-beta pruning:
//!
//! - **Negamax**: one formula for both sides, scores negated per ply
//! - **Alpha-beta**: siblings are skipped once they cannot change the result
//! - **Deterministic**: first-enumerated move wins ties, no hidden randomness
//! - **Stateless**: no cache survives between searches
//!
//! ## Usage
//!
//! ```rust
//! use rust_race::games::NumberRace;
//! use rust_race::rules::Game;
//! use rust_race::search::{Negamax, SearchConfig};
//!
//! let game = NumberRace::new(6).unwrap();
//! let mut search = Negamax::new(SearchConfig::default().with_depth(5)).unwrap();
//!
//! let mv = search.choose_move(&game, &game.initial_state()).unwrap();
//! assert_eq!(mv.step(), 1);
//! ```

pub mod config;
pub mod negamax;
pub mod stats;

pub use config::SearchConfig;
pub use negamax::{Negamax, SearchResult, INF};
pub use stats::SearchStats;
