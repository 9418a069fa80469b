//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! Each node is a game state plus the remaining depth; nothing outlives the
//! recursive call that explored it. Scores are always seen from the player
//! to move and negated on the way back up.

use std::time::Instant;

use log::debug;

use crate::core::{Move, TurnState};
use crate::error::{Error, Result};
use crate::rules::Game;

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Score representing an unreachable bound. Safe to negate.
pub const INF: i64 = i64::MAX;

/// Outcome of a root search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Move chosen for the player to move.
    pub best_move: Move,

    /// Negamax value of the root for that player.
    pub value: i64,
}

/// Negamax search context.
///
/// Holds only configuration and the statistics of the last search, so the
/// same state and depth always yield the same move.
#[derive(Clone, Debug)]
pub struct Negamax {
    config: SearchConfig,
    stats: SearchStats,
}

impl Negamax {
    /// Create a new search context.
    ///
    /// Fails with `Error::Configuration` for a depth below 1.
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            stats: SearchStats::default(),
        })
    }

    /// Create a search context with default settings and the given depth.
    pub fn with_depth(depth: u32) -> Result<Self> {
        Self::new(SearchConfig::default().with_depth(depth))
    }

    /// Pick a move for the player to move.
    pub fn choose_move<G: Game>(&mut self, game: &G, state: &G::State) -> Result<Move> {
        self.search(game, state).map(|result| result.best_move)
    }

    /// Search `state` to the configured depth.
    ///
    /// Ties go to the move enumerated first: the best move only changes on a
    /// strict improvement of alpha. Fails with `Error::InvalidState` when the
    /// game is already over.
    pub fn search<G: Game>(&mut self, game: &G, state: &G::State) -> Result<SearchResult> {
        let start = Instant::now();
        self.stats.reset();

        if game.is_terminal(state) {
            return Err(Error::InvalidState(format!(
                "cannot search a finished {}",
                game.name()
            )));
        }

        let moves = game.legal_moves(state);
        let Some(&first) = moves.first() else {
            return Err(Error::InvalidState(format!(
                "{} has no legal moves for {}",
                game.name(),
                state.current_player()
            )));
        };

        let bound = self.config.win_score.unwrap_or(INF);
        let mut alpha = -bound;
        let beta = bound;
        let mut best_move = first;
        let mut best_value = -INF;
        let child_depth = self.config.depth - 1;
        self.stats.nodes += 1;

        for &mv in &moves {
            let mut child = state.clone();
            game.play(&mut child, mv);
            let value = -self.negamax(game, &child, child_depth, -beta, -alpha);

            if value > best_value {
                best_value = value;
            }
            if value > alpha {
                alpha = value;
                best_move = mv;
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            "{}: {} plays {} (value {}, {} nodes, {} cutoffs, {}us)",
            game.name(),
            state.current_player(),
            best_move,
            best_value,
            self.stats.nodes,
            self.stats.cutoffs,
            self.stats.time_us
        );

        Ok(SearchResult {
            best_move,
            value: best_value,
        })
    }

    /// Negamax value of `state` for the player to move, `depth` plies deep.
    ///
    /// Depth 0 returns the (possibly scaled) static score.
    pub fn evaluate<G: Game>(&mut self, game: &G, state: &G::State, depth: u32) -> i64 {
        self.stats.reset();
        self.negamax(game, state, depth, -INF, INF)
    }

    fn negamax<G: Game>(
        &mut self,
        game: &G,
        state: &G::State,
        depth: u32,
        mut alpha: i64,
        beta: i64,
    ) -> i64 {
        self.stats.nodes += 1;

        if depth == 0 || game.is_terminal(state) {
            self.stats.leaves += 1;
            return self.leaf_value(game.score(state), depth);
        }

        let mut best = -INF;
        for mv in game.legal_moves(state) {
            let mut child = state.clone();
            game.play(&mut child, mv);
            let value = -self.negamax(game, &child, depth - 1, -beta, -alpha);

            best = best.max(value);
            if value > alpha {
                alpha = value;
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
        }

        best
    }

    fn leaf_value(&self, score: i64, depth: u32) -> i64 {
        if self.config.prefer_short_wins {
            score * (1000 + i64::from(depth))
        } else {
            score
        }
    }

    /// Statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
