//! Turn bookkeeping shared by every game state.
//!
//! Each game owns its own state type (positions, counters, ...). What the
//! search and the match driver need from any of them is who is on move and
//! how to hand the turn over; `TurnState` captures exactly that.

use std::fmt::Debug;

use super::player::PlayerId;

/// Common view over a game state.
///
/// States are small value types: the search clones one per explored child.
pub trait TurnState: Clone + Debug {
    /// The player to move.
    fn current_player(&self) -> PlayerId;

    /// Set the player to move.
    fn set_current_player(&mut self, player: PlayerId);

    /// Hand the turn to the opponent.
    ///
    /// Turn order alternates strictly 1, 2, 1, 2, ...
    fn pass_turn(&mut self) {
        let next = self.current_player().other();
        self.set_current_player(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Seat(PlayerId);

    impl TurnState for Seat {
        fn current_player(&self) -> PlayerId {
            self.0
        }

        fn set_current_player(&mut self, player: PlayerId) {
            self.0 = player;
        }
    }

    #[test]
    fn test_pass_turn_alternates() {
        let mut seat = Seat(PlayerId::ONE);
        let mut order = Vec::new();
        for _ in 0..4 {
            order.push(seat.current_player());
            seat.pass_turn();
        }
        assert_eq!(
            order,
            vec![PlayerId::ONE, PlayerId::TWO, PlayerId::ONE, PlayerId::TWO]
        );
    }
}
