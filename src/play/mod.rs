//! Playing matches.
//!
//! - `MoveSource`: who picks moves for a seat (AI, human, random, script)
//! - `MatchDriver` / `run_match`: the turn loop
//! - `MatchHistory`: what was played, for replay and inspection
//!
//! ## Usage
//!
//! ```rust
//! use rust_race::games::FieldRace;
//! use rust_race::play::{AiPlayer, MatchDriver, RandomPlayer};
//!
//! let game = FieldRace::default();
//! let mut ai = AiPlayer::with_depth(4).unwrap();
//! let mut opponent = RandomPlayer::new(7);
//!
//! let history = MatchDriver::new(&game)
//!     .with_output(std::io::sink())
//!     .with_max_turns(200)
//!     .run(&mut ai, &mut opponent)
//!     .unwrap();
//! assert!(!history.is_empty());
//! ```

pub mod driver;
pub mod history;
pub mod source;

pub use driver::{run_match, MatchDriver, DEFAULT_MAX_TURNS};
pub use history::MatchHistory;
pub use source::{AiPlayer, HumanPlayer, MoveSource, RandomPlayer, ScriptedPlayer};
