//! Commonly used types and utilities for ease of import.

pub use crate::{AiPlayer, Board, BoardError, Difficulty, GameEngine, GameStatus, Outcome, Player, Side};

#[cfg(feature = "std")]
pub use crate::{choose_mode, render_board, CliPlayer, Mode, Session};
