//! Perfect Tic-Tac-Toe - Unified CLI
//!
//! Interactive play, position analysis and self-play.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use perfect_tictactoe::{
    Config, EnginePlayer, HumanPlayer, Orchestrator, Player, analyze_position, parse_moves,
    result_message, write_report,
};
use std::io::{self, Write};
use tictactoe_core::{Algorithm, GameState, Mark};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter().as_str())),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play {
            mark,
            algorithm,
            no_hints,
        } => run_play(config.with_overrides(mark, algorithm, no_hints)),
        Command::Analyze { moves, json } => run_analyze(&moves, json),
        Command::Selfplay { algorithm } => {
            run_selfplay(algorithm.unwrap_or(*config.algorithm()), *config.hints())
        }
    }
}

/// Human against the computer on stdin/stdout.
#[instrument(skip(config), fields(mark = %config.mark(), algorithm = %config.algorithm()))]
fn run_play(config: Config) -> Result<()> {
    let human_mark = *config.mark();
    info!("Starting interactive match");

    let human: Box<dyn Player> = Box::new(HumanPlayer::new("You", io::stdin().lock(), io::stdout()));
    let engine: Box<dyn Player> = Box::new(EnginePlayer::new(
        format!("Computer ({})", config.algorithm()),
        *config.algorithm(),
    ));
    let (player_x, player_o) = match human_mark {
        Mark::X => (human, engine),
        Mark::O => (engine, human),
    };

    let mut stdout = io::stdout();
    writeln!(stdout, "You play {}. X moves first.", human_mark)?;
    let outcome = Orchestrator::new(player_x, player_o, *config.hints()).run(&mut stdout)?;
    writeln!(stdout, "{}", result_message(outcome, human_mark))?;
    Ok(())
}

/// Replays `moves` and prints both algorithms' decisions.
#[instrument]
fn run_analyze(moves: &str, json: bool) -> Result<()> {
    let moves = parse_moves(moves)?;
    let state = GameState::from_moves(&moves)?;
    let report = analyze_position(moves, state)?;

    let mut stdout = io::stdout();
    if json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        write_report(&mut stdout, &report)?;
    }
    Ok(())
}

/// Computer against itself.
#[instrument]
fn run_selfplay(algorithm: Algorithm, hints: bool) -> Result<()> {
    let mut orchestrator = Orchestrator::new(
        Box::new(EnginePlayer::new(format!("X ({})", algorithm), algorithm)),
        Box::new(EnginePlayer::new(format!("O ({})", algorithm), algorithm)),
        hints,
    );
    let mut stdout = io::stdout();
    let outcome = orchestrator.run(&mut stdout)?;
    writeln!(stdout, "Result: {}", outcome)?;
    Ok(())
}
