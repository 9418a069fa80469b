//! Game trait for two-player race implementations.
//!
//! Games implement `Game` to define their rules:
//! - What moves are legal
//! - How moves modify state
//! - When the game ends and how positions score

use crate::core::{Move, MoveList, PlayerId, TurnState};

/// Two-player, perfect-information, zero-sum game.
///
/// The search engine and the match driver only talk to games through this
/// trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Enumeration order is the search's tie-break order.
///   Return an empty list once the state is terminal.
/// - `apply_move`: Must be deterministic. Does not pass the turn.
/// - `score`: Seen from the player to move (negamax convention).
pub trait Game {
    /// Game-specific progress data.
    type State: TurnState;

    /// Short display name.
    fn name(&self) -> &str;

    /// Fresh state at match start, player 1 on move.
    fn initial_state(&self) -> Self::State;

    /// Legal moves for the player to move, in enumeration order.
    fn legal_moves(&self, state: &Self::State) -> MoveList;

    /// Advance the player to move by `mv`.
    fn apply_move(&self, state: &mut Self::State, mv: Move);

    /// Check if the game is over.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Evaluate the state for the player to move.
    fn score(&self, state: &Self::State) -> i64;

    /// The winner, once the state is terminal.
    fn winner(&self, state: &Self::State) -> Option<PlayerId>;

    /// Human-readable progress display.
    fn render(&self, state: &Self::State) -> String;

    // === Convenience Methods ===

    /// Check a move against the legal menu.
    fn is_legal(&self, state: &Self::State, mv: Move) -> bool {
        self.legal_moves(state).contains(&mv)
    }

    /// Play one full ply: apply the move, then hand the turn over.
    fn play(&self, state: &mut Self::State, mv: Move) {
        self.apply_move(state, mv);
        state.pass_turn();
    }
}
