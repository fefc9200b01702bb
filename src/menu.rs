#![cfg(feature = "std")]

//! Start-up menu asking for the number of players and the difficulty.

use std::io::{BufRead, Write};

use anyhow::bail;

use crate::engine::Difficulty;

/// Game mode picked at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    TwoPlayer,
    Single(Difficulty),
}

fn prompt<R, W>(input: &mut R, output: &mut W, question: &str) -> anyhow::Result<String>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(output, "{}\n\n> ", question)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed");
    }
    Ok(line.trim().to_string())
}

/// Ask for the number of players and, for one player, the difficulty.
/// Anything unexpected prints `Bad input.` and starts over.
pub fn choose_mode<R, W>(input: &mut R, output: &mut W) -> anyhow::Result<Mode>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    loop {
        let players = prompt(input, output, "Choose number of players: [1 or 2]")?;
        match players.parse::<u8>() {
            Ok(2) => return Ok(Mode::TwoPlayer),
            Ok(1) => {
                let answer = prompt(input, output, "\nChoose difficulty: [easy, medium, or hard]")?;
                match answer.parse::<Difficulty>() {
                    Ok(difficulty) => {
                        writeln!(output, "\n")?;
                        return Ok(Mode::Single(difficulty));
                    }
                    Err(_) => writeln!(output, "Bad input.")?,
                }
            }
            _ => writeln!(output, "Bad input.")?,
        }
    }
}
