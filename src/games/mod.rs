//! Concrete games built on the `Game` trait.

pub mod field_race;
pub mod number_race;

pub use field_race::{FieldRace, FieldRaceState};
pub use number_race::{NumberRace, NumberRaceState};
