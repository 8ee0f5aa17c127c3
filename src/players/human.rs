//! Human player reading `row,col` lines.

use super::Player;
use crate::input::parse_move;
use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use tictactoe_core::{GameState, Move, apply};
use tracing::{debug, instrument};

/// Human player typing moves on a line-oriented reader.
///
/// Malformed or illegal input is reported on `output` and the prompt
/// repeats. End of input is an error.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Consumes the player, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip(self, state), fields(player = %self.name))]
    fn choose_move(&mut self, state: &GameState) -> Result<Move> {
        loop {
            write!(self.output, "Your move (row,col with rows and columns 0-2): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Input closed before {} moved", self.name);
            }

            let mv = match parse_move(&line) {
                Ok(mv) => mv,
                Err(e) => {
                    debug!(error = %e, "Unparseable input");
                    writeln!(self.output, "Invalid input: {}", e)?;
                    continue;
                }
            };

            match apply(state, mv) {
                Ok(_) => return Ok(mv),
                Err(e) => {
                    debug!(error = %e, "Illegal move");
                    writeln!(self.output, "{}, try again.", e)?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
