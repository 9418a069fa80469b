//! Match driver: alternates two move sources until the game ends.

use std::io::{self, Write};

use log::{info, warn};

use crate::core::{Move, PlayerId, TurnRecord, TurnState};
use crate::error::{Error, Result};
use crate::rules::Game;

use super::history::MatchHistory;
use super::source::MoveSource;

/// Default cap on turns per match.
pub const DEFAULT_MAX_TURNS: u32 = 1000;

/// Runs one match of a game between two move sources.
///
/// Renders the state before the first move and after every move to the
/// output sink (stdout unless `with_output` is used).
pub struct MatchDriver<'g, G: Game, W: Write> {
    game: &'g G,
    output: W,
    max_turns: u32,
}

impl<'g, G: Game> MatchDriver<'g, G, io::Stdout> {
    /// Driver rendering to stdout.
    pub fn new(game: &'g G) -> Self {
        Self {
            game,
            output: io::stdout(),
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

impl<'g, G: Game, W: Write> MatchDriver<'g, G, W> {
    /// Render to a different sink.
    pub fn with_output<O: Write>(self, output: O) -> MatchDriver<'g, G, O> {
        MatchDriver {
            game: self.game,
            output,
            max_turns: self.max_turns,
        }
    }

    /// Stop after `max_turns` turns even if nobody has won.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Consume the driver and return the render sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Play a match from the game's initial state.
    pub fn run<A, B>(&mut self, first: &mut A, second: &mut B) -> Result<MatchHistory<G::State>>
    where
        A: MoveSource<G> + ?Sized,
        B: MoveSource<G> + ?Sized,
    {
        let state = self.game.initial_state();
        self.run_from(state, first, second)
    }

    /// Play a match from an arbitrary starting state.
    ///
    /// `first` plays player 1, `second` plays player 2. The loop stops after
    /// the move that ends the game, or once the turn cap is reached.
    pub fn run_from<A, B>(
        &mut self,
        mut state: G::State,
        first: &mut A,
        second: &mut B,
    ) -> Result<MatchHistory<G::State>>
    where
        A: MoveSource<G> + ?Sized,
        B: MoveSource<G> + ?Sized,
    {
        if self.max_turns == 0 {
            return Err(Error::Configuration("max turns must be positive".into()));
        }

        let game = self.game;
        let mut history = MatchHistory::new(state.clone());
        writeln!(self.output, "{}", game.render(&state))?;
        info!(
            "{}: {} vs {}",
            game.name(),
            first.name(),
            second.name()
        );

        let mut turn = 0;
        while !game.is_terminal(&state) && turn < self.max_turns {
            let player = state.current_player();
            let mv = if player == PlayerId::ONE {
                self.request_move(first, &state)?
            } else {
                self.request_move(second, &state)?
            };

            game.play(&mut state, mv);
            turn += 1;

            writeln!(
                self.output,
                "\nMove #{}: player {} plays {} :",
                turn,
                player.number(),
                mv
            )?;
            writeln!(self.output, "{}", game.render(&state))?;
            info!("turn {}: {} plays {}", turn, player, mv);

            history.push(TurnRecord::new(turn, player, mv, state.clone()));
        }

        let winner = game.winner(&state);
        history.finish(winner);
        match winner {
            Some(player) => info!("{} won {} after {} turns", player, game.name(), turn),
            None => warn!("{} stopped after {} turns without a winner", game.name(), turn),
        }

        Ok(history)
    }

    /// Ask a source for a move until it offers a legal one.
    ///
    /// Automated sources fail on the first illegal move.
    fn request_move<S>(&mut self, source: &mut S, state: &G::State) -> Result<Move>
    where
        S: MoveSource<G> + ?Sized,
    {
        loop {
            let mv = source.choose_move(self.game, state)?;
            if self.game.is_legal(state, mv) {
                return Ok(mv);
            }

            let err = Error::IllegalMove {
                mv,
                player: state.current_player(),
            };
            if source.is_automated() {
                return Err(err);
            }
            warn!("{}, asking {} again", err, source.name());
            writeln!(self.output, "{mv} is not a legal move")?;
        }
    }
}

/// Play a match between two sources, rendering to stdout.
pub fn run_match<G, A, B>(
    game: &G,
    first: &mut A,
    second: &mut B,
) -> Result<MatchHistory<G::State>>
where
    G: Game,
    A: MoveSource<G> + ?Sized,
    B: MoveSource<G> + ?Sized,
{
    MatchDriver::new(game).run(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{FieldRace, FieldRaceState, NumberRace};
    use crate::play::{AiPlayer, ScriptedPlayer};

    fn quiet<G: Game>(game: &G) -> MatchDriver<'_, G, Vec<u8>> {
        MatchDriver::new(game).with_output(Vec::new())
    }

    #[test]
    fn test_scripted_match_to_completion() {
        let game = NumberRace::new(10).unwrap();
        let mut p1 = ScriptedPlayer::new([5, 5]);
        let mut p2 = ScriptedPlayer::new([1]);

        let history = quiet(&game).run(&mut p1, &mut p2).unwrap();

        // 5, 1, 5 -> 11 after player 1's second move.
        assert_eq!(history.len(), 3);
        assert_eq!(history.final_state().counter, 11);
        assert_eq!(history.winner(), Some(PlayerId::ONE));
        assert_eq!(p1.remaining(), 0);
    }

    #[test]
    fn test_stops_right_after_terminal_move() {
        let game = NumberRace::new(3).unwrap();
        let mut p1 = ScriptedPlayer::new([3, 1, 1]);
        let mut p2 = ScriptedPlayer::new([1, 1]);

        let history = quiet(&game).run(&mut p1, &mut p2).unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(p1.remaining(), 2);
        assert_eq!(p2.remaining(), 2);
    }

    #[test]
    fn test_automated_illegal_move_is_fatal() {
        let game = FieldRace::default();
        let mut p1 = ScriptedPlayer::new([4]);
        let mut p2 = ScriptedPlayer::new([1]);

        let err = quiet(&game).run(&mut p1, &mut p2).unwrap_err();

        assert!(matches!(
            err,
            Error::IllegalMove { mv: Move(4), player: PlayerId::ONE }
        ));
    }

    #[test]
    fn test_interactive_illegal_move_is_requested_again() {
        let game = NumberRace::new(4).unwrap();
        let mut p1 = ScriptedPlayer::new([9, 0, 4]).interactive();
        let mut p2 = ScriptedPlayer::new([]);

        let mut driver = quiet(&game);
        let history = driver.run(&mut p1, &mut p2).unwrap();

        assert_eq!(history.moves(), vec![(PlayerId::ONE, Move(4))]);
        let out = String::from_utf8(driver.into_output()).unwrap();
        assert!(out.contains("9 is not a legal move"));
        assert!(out.contains("0 is not a legal move"));
    }

    #[test]
    fn test_render_after_every_move() {
        let game = NumberRace::new(4).unwrap();
        let mut p1 = ScriptedPlayer::new([2, 1]);
        let mut p2 = ScriptedPlayer::new([1]);

        let mut driver = quiet(&game);
        driver.run(&mut p1, &mut p2).unwrap();
        let out = String::from_utf8(driver.into_output()).unwrap();

        assert!(out.starts_with("     0 / 4\n"));
        assert!(out.contains("Move #1: player 1 plays 2 :\n**   2 / 4"));
        assert!(out.contains("Move #2: player 2 plays 1 :\n***  3 / 4"));
        assert!(out.contains("Move #3: player 1 plays 1 :\n**** 4 / 4"));
    }

    #[test]
    fn test_turn_cap() {
        let game = NumberRace::new(100).unwrap();
        let mut p1 = ScriptedPlayer::new([1; 10]);
        let mut p2 = ScriptedPlayer::new([1; 10]);

        let history = quiet(&game).with_max_turns(5).run(&mut p1, &mut p2).unwrap();

        assert_eq!(history.len(), 5);
        assert_eq!(history.winner(), None);
    }

    #[test]
    fn test_zero_turn_cap_rejected() {
        let game = NumberRace::default();
        let mut p1 = ScriptedPlayer::new([1]);
        let mut p2 = ScriptedPlayer::new([1]);

        let err = quiet(&game).with_max_turns(0).run(&mut p1, &mut p2).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_ai_finishes_from_field_seventeen() {
        let game = FieldRace::default();
        let mut ai = AiPlayer::with_depth(2).unwrap();
        let mut p2 = ScriptedPlayer::new([1, 1, 1]);

        let history = quiet(&game)
            .run_from(FieldRaceState::at(17, 0), &mut ai, &mut p2)
            .unwrap();

        assert_eq!(history.moves(), vec![(PlayerId::ONE, Move(3))]);
        assert_eq!(history.winner(), Some(PlayerId::ONE));
    }
}
