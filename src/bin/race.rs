//! race - play field race or number race against the negamax AI
//!
//! ```text
//! race field --depth 12
//! race number --target 40 --opponent random --save match.bin
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use rust_race::play::DEFAULT_MAX_TURNS;
use rust_race::{
    AiPlayer, FieldRace, Game, HumanPlayer, MatchDriver, MoveSource, NumberRace, PlayerId,
    RandomPlayer, SearchConfig,
};

#[derive(Parser)]
#[command(name = "race")]
#[command(version, about = "Two-player race games against a negamax AI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Race to the finish field; landing on your opponent sends them home
    Field(MatchArgs),

    /// Add 1-5 to a shared counter until it reaches the target
    Number(MatchArgs),
}

#[derive(Args, Debug)]
struct MatchArgs {
    /// Look-ahead in plies (default: 12 for field, 10 for number)
    #[arg(long, short = 'd')]
    depth: Option<u32>,

    /// Finish field or target number (default: 20 for field, 40 for number)
    #[arg(long, short = 't')]
    target: Option<u32>,

    /// Seat played by the AI
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
    ai_seat: u8,

    /// Who plays the other seat
    #[arg(long, short = 'o', value_enum, default_value_t = Opponent::Human)]
    opponent: Opponent,

    /// Seed for the random opponent
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop the match after this many turns
    #[arg(long, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: u32,

    /// Rank quicker wins above slower ones
    #[arg(long)]
    short_wins: bool,

    /// Save the match history (bincode) to this file
    #[arg(long)]
    save: Option<PathBuf>,

    /// Do not print the board after each move
    #[arg(long, short = 'q')]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Opponent {
    Human,
    Ai,
    Random,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Field(args) => {
            let game = match args.target {
                Some(target) => FieldRace::new(target)?,
                None => FieldRace::default(),
            };
            play(&game, &args, 12)
        }
        Commands::Number(args) => {
            let game = match args.target {
                Some(target) => NumberRace::new(target)?,
                None => NumberRace::default(),
            };
            play(&game, &args, 10)
        }
    }
}

fn play<G>(game: &G, args: &MatchArgs, default_depth: u32) -> Result<()>
where
    G: Game,
    G::State: Serialize,
{
    let config = SearchConfig::default()
        .with_depth(args.depth.unwrap_or(default_depth))
        .with_short_wins(args.short_wins);

    let mut opponent: Box<dyn MoveSource<G>> = match args.opponent {
        Opponent::Human => Box::new(HumanPlayer::stdio()),
        Opponent::Ai => Box::new(AiPlayer::new(config.clone())?),
        Opponent::Random => Box::new(RandomPlayer::new(args.seed)),
    };
    let mut ai = AiPlayer::new(config).context("invalid search settings")?;
    let ai_seat = PlayerId::from_number(args.ai_seat).context("seat must be 1 or 2")?;

    let board: Box<dyn Write> = if args.quiet {
        Box::new(io::sink())
    } else {
        Box::new(io::stdout())
    };
    let mut driver = MatchDriver::new(game)
        .with_output(board)
        .with_max_turns(args.max_turns);
    let history = if ai_seat == PlayerId::ONE {
        driver.run(&mut ai, opponent.as_mut())?
    } else {
        driver.run(opponent.as_mut(), &mut ai)?
    };

    match history.winner() {
        Some(player) => println!("\n{} wins after {} turns", player, history.len()),
        None => println!("\nNo winner after {} turns", history.len()),
    }

    if let Some(path) = &args.save {
        let bytes = history.to_bytes()?;
        std::fs::write(path, bytes)
            .with_context(|| format!("failed to write match history to {}", path.display()))?;
        println!("Saved match history to {}", path.display());
    }

    Ok(())
}
