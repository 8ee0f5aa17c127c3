//! Scripted matches between a human and the engine.

use perfect_tictactoe::{EnginePlayer, HumanPlayer, Orchestrator, Player};
use std::io::Cursor;
use tictactoe_core::{Algorithm, Mark, Outcome};

/// Every cell in row-major order. A human reading this plays the first
/// empty cell each turn, skipping occupied ones.
const NAIVE_SCRIPT: &str = "0,0\n0,1\n0,2\n1,0\n1,1\n1,2\n2,0\n2,1\n2,2\n";

fn naive_human() -> Box<dyn Player> {
    Box::new(HumanPlayer::new("You", Cursor::new(NAIVE_SCRIPT), Vec::new()))
}

#[test]
fn test_engine_never_loses_as_o() {
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let engine = Box::new(EnginePlayer::new("Computer", algorithm));
        let mut orchestrator = Orchestrator::new(naive_human(), engine, true);
        let outcome = orchestrator.run(&mut Vec::new()).unwrap();
        assert_ne!(outcome, Outcome::Won(Mark::X), "{} lost", algorithm);
        assert!(outcome.is_terminal());
    }
}

#[test]
fn test_engine_beats_naive_play_as_x() {
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let engine = Box::new(EnginePlayer::new("Computer", algorithm));
        let mut orchestrator = Orchestrator::new(engine, naive_human(), false);
        let outcome = orchestrator.run(&mut Vec::new()).unwrap();
        assert_eq!(outcome, Outcome::Won(Mark::X), "{}", algorithm);
    }
}

#[test]
fn test_transcript_shows_board_and_moves() {
    let engine = Box::new(EnginePlayer::new("Computer", Algorithm::AlphaBeta));
    let mut orchestrator = Orchestrator::new(naive_human(), engine, true);
    let mut out = Vec::new();
    orchestrator.run(&mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("* | * | *"));
    assert!(text.contains("You (X) plays 0,0"));
    assert!(text.contains("Computer (O) plays 1,1"));
    assert!(text.contains("---+---+---"));
}

#[test]
fn test_human_running_out_of_input_aborts() {
    let human = Box::new(HumanPlayer::new("You", Cursor::new("0,0\n"), Vec::new()));
    let engine = Box::new(EnginePlayer::new("Computer", Algorithm::AlphaBeta));
    let mut orchestrator = Orchestrator::new(human, engine, true);
    assert!(orchestrator.run(&mut Vec::new()).is_err());
}
