//! Field race: two runners on a track of numbered fields.
//!
//! - Both players start on field 0 and move 1-3 fields per turn
//! - Landing on the opponent's field sends the opponent back to 0
//! - First player on or past the finish field (default 20) wins

mod game;

pub use game::{FieldRace, FieldRaceState, DEFAULT_TARGET};
