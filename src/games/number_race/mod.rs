//! Number race: both players add to one shared counter.
//!
//! - Each turn the player to move adds 1-5 to the counter
//! - The game stops once the counter reaches the target (default 40)

mod game;

pub use game::{NumberRace, NumberRaceState, DEFAULT_TARGET, WIN_SCORE};
