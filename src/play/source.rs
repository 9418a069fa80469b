//! Move sources: who decides the next move for a seat.
//!
//! - `AiPlayer`: negamax search
//! - `HumanPlayer`: reads moves from a line-based input
//! - `RandomPlayer`: uniform choice from the legal menu, seeded
//! - `ScriptedPlayer`: replays a fixed list of moves

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use log::warn;

use crate::core::{GameRng, Move, TurnState};
use crate::error::{Error, Result};
use crate::rules::Game;
use crate::search::{Negamax, SearchConfig};

/// Anything that can pick a move for the player on move.
pub trait MoveSource<G: Game> {
    /// Pick a move for `state.current_player()`.
    fn choose_move(&mut self, game: &G, state: &G::State) -> Result<Move>;

    /// Automated sources never get a second chance after an illegal move.
    fn is_automated(&self) -> bool {
        true
    }

    /// Display name for logs.
    fn name(&self) -> String;
}

// =============================================================================
// AI
// =============================================================================

/// Seat played by the negamax search.
#[derive(Clone, Debug)]
pub struct AiPlayer {
    search: Negamax,
}

impl AiPlayer {
    /// Create an AI player from a search configuration.
    pub fn new(config: SearchConfig) -> Result<Self> {
        Ok(Self {
            search: Negamax::new(config)?,
        })
    }

    /// Create an AI player that looks `depth` plies ahead.
    pub fn with_depth(depth: u32) -> Result<Self> {
        Self::new(SearchConfig::default().with_depth(depth))
    }

    /// The underlying search (for stats after a move).
    #[must_use]
    pub fn search(&self) -> &Negamax {
        &self.search
    }
}

impl<G: Game> MoveSource<G> for AiPlayer {
    fn choose_move(&mut self, game: &G, state: &G::State) -> Result<Move> {
        self.search.choose_move(game, state)
    }

    fn name(&self) -> String {
        format!("AI (depth {})", self.search.config().depth)
    }
}

// =============================================================================
// Human
// =============================================================================

/// Seat played from a text console.
///
/// Besides a number, accepts `show moves` (print the menu) and `quit`.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
}

impl HumanPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Human player on the process console.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Human player on arbitrary streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the player and return the prompt output.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<G: Game, R: BufRead, W: Write> MoveSource<G> for HumanPlayer<R, W> {
    fn choose_move(&mut self, game: &G, state: &G::State) -> Result<Move> {
        let legal = game.legal_moves(state);

        loop {
            write!(
                self.output,
                "\n{} what do you play ? ",
                state.current_player()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InputClosed);
            }

            match line.trim() {
                "show moves" => {
                    let menu: Vec<String> = legal.iter().map(ToString::to_string).collect();
                    writeln!(self.output, "Possible moves: {}", menu.join(", "))?;
                }
                "quit" => return Err(Error::Aborted),
                text => match text.parse::<u32>() {
                    Ok(step) if legal.contains(&Move(step)) => return Ok(Move(step)),
                    Ok(step) => {
                        warn!("{} entered illegal move {}", state.current_player(), step);
                        writeln!(self.output, "{step} is not a legal move")?;
                    }
                    Err(_) => {
                        writeln!(self.output, "Please enter a number")?;
                    }
                },
            }
        }
    }

    fn is_automated(&self) -> bool {
        false
    }

    fn name(&self) -> String {
        "human".to_string()
    }
}

// =============================================================================
// Fixed policies
// =============================================================================

/// Picks uniformly among legal moves.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    /// Create a random player with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl<G: Game> MoveSource<G> for RandomPlayer {
    fn choose_move(&mut self, game: &G, state: &G::State) -> Result<Move> {
        let legal = game.legal_moves(state);
        self.rng.choose(&legal).copied().ok_or_else(|| {
            Error::InvalidState(format!("{} has no legal moves", game.name()))
        })
    }

    fn name(&self) -> String {
        format!("random (seed {})", self.rng.seed())
    }
}

/// Replays a fixed list of moves in order.
///
/// Automated by default; `interactive()` makes the driver re-ask after an
/// illegal move, the way it treats a human.
#[derive(Clone, Debug)]
pub struct ScriptedPlayer {
    moves: VecDeque<Move>,
    automated: bool,
}

impl ScriptedPlayer {
    /// Create a player from step sizes.
    pub fn new(steps: impl IntoIterator<Item = u32>) -> Self {
        Self {
            moves: steps.into_iter().map(Move).collect(),
            automated: true,
        }
    }

    /// Treat this script like a human at the console.
    #[must_use]
    pub fn interactive(mut self) -> Self {
        self.automated = false;
        self
    }

    /// Moves not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl<G: Game> MoveSource<G> for ScriptedPlayer {
    fn choose_move(&mut self, game: &G, state: &G::State) -> Result<Move> {
        self.moves.pop_front().ok_or_else(|| {
            Error::InvalidState(format!(
                "script for {} ran out of moves in {}",
                state.current_player(),
                game.name()
            ))
        })
    }

    fn is_automated(&self) -> bool {
        self.automated
    }

    fn name(&self) -> String {
        "script".to_string()
    }
}
