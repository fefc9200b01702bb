#![cfg(feature = "std")]

//! Terminal rendering of the board.
//!
//! ```text
//! ------- [4] [4] [4] [4] [4] [4] -------
//! [[ 0 ]] ----------------------- [[ 0 ]]
//! ------- [4] [4] [4] [4] [4] [4] -------
//! ```
//!
//! The top row is player one's pits in storage order, the bottom row player
//! two's pits reversed so each player reads their own row left to right.
//! Player one's store sits on the left, player two's on the right.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::string::String;

use crate::engine::{Board, Side};

const EDGE: &str = "-------";

fn push_row(out: &mut String, beads: impl Iterator<Item = u32>) {
    out.push_str(EDGE);
    out.push(' ');
    for b in beads {
        let _ = write!(out, "[{}] ", b);
    }
    out.push_str(EDGE);
    out.push('\n');
}

/// Render `board` in the three-line reference format.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    push_row(&mut out, board.pits(Side::One).into_iter());
    let rule = "-".repeat(4 * board.pits_per_player() - 1);
    let _ = writeln!(
        out,
        "[[ {} ]] {} [[ {} ]]",
        board.store(Side::One),
        rule,
        board.store(Side::Two)
    );
    push_row(&mut out, board.pits(Side::Two).into_iter().rev());
    out
}

/// Write the rendered board to `out`.
pub fn write_board<W: Write + ?Sized>(out: &mut W, board: &Board) -> io::Result<()> {
    out.write_all(render_board(board).as_bytes())
}
