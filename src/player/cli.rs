#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use anyhow::bail;
use rand::rngs::SmallRng;

use crate::engine::{Board, MoveResult, Side};

use super::Player;

/// Where a human player's answers come from.
enum Input {
    /// The process-wide stdin buffer, shared by every terminal player.
    Stdin,
    Reader(Box<dyn BufRead + Send>),
}

impl Input {
    fn read_line(&mut self, line: &mut String) -> io::Result<usize> {
        match self {
            Input::Stdin => io::stdin().read_line(line),
            Input::Reader(reader) => reader.read_line(line),
        }
    }
}

/// Human player reading pit choices from a line-based input.
pub struct CliPlayer {
    input: Input,
    output: Box<dyn Write + Send>,
}

impl CliPlayer {
    /// Player attached to the terminal.
    pub fn new() -> Self {
        Self {
            input: Input::Stdin,
            output: Box::new(io::stdout()),
        }
    }

    /// Player reading from `input` and prompting on `output`.
    pub fn with_io<R, W>(input: R, output: W) -> Self
    where
        R: BufRead + Send + 'static,
        W: Write + Send + 'static,
    {
        Self {
            input: Input::Reader(Box::new(input)),
            output: Box::new(output),
        }
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a 1-based pit choice in `1..=pits_per_player`.
pub fn parse_choice(input: &str, pits_per_player: usize) -> Result<usize, String> {
    match input.trim().parse::<usize>() {
        Ok(choice) if (1..=pits_per_player).contains(&choice) => Ok(choice),
        _ => Err(format!(
            "Choose a value in [1-{}]. Please try again.",
            pits_per_player
        )),
    }
}

impl Player for CliPlayer {
    fn select_pit(&mut self, _rng: &mut SmallRng, board: &Board, side: Side) -> anyhow::Result<usize> {
        loop {
            write!(self.output, "[{}] - Choose which bucket to move:\n\n> ", side.label())?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input closed while waiting for {}", side.label());
            }
            match parse_choice(&line, board.pits_per_player()) {
                Ok(choice) => return Ok(board.pit_for_choice(side, choice)?),
                Err(msg) => writeln!(self.output, "{}", msg)?,
            }
        }
    }

    fn handle_move_result(&mut self, side: Side, _pit: usize, result: MoveResult) {
        let written = match result {
            MoveResult::ExtraTurn => {
                writeln!(self.output, "Last bead in the store: {} goes again.", side)
            }
            MoveResult::Captured { beads, .. } => {
                writeln!(self.output, "{} captures {} beads!", side, beads)
            }
            MoveResult::TurnEnds => Ok(()),
        };
        if let Err(e) = written {
            log::warn!("could not report move result to {}: {}", side, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice_bounds() {
        assert_eq!(parse_choice("1", 6), Ok(1));
        assert_eq!(parse_choice(" 6\n", 6), Ok(6));
        assert!(parse_choice("0", 6).is_err());
        assert!(parse_choice("7", 6).is_err());
        assert!(parse_choice("-1", 6).is_err());
        assert!(parse_choice("two", 6).is_err());
        assert!(parse_choice("", 6).is_err());
    }

    #[test]
    fn test_parse_choice_message_names_range() {
        assert_eq!(
            parse_choice("9", 4).unwrap_err(),
            "Choose a value in [1-4]. Please try again."
        );
    }
}
