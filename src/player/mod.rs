//! Player trait and implementations
//!
//! A player is a move source: given the board and its side, it supplies the
//! pit to sow from.
//! - AiPlayer: computer player driven by a `Difficulty`
//! - CliPlayer: interactive command-line player

use rand::rngs::SmallRng;

use crate::engine::{Board, MoveResult, Side};

/// Interface implemented by different player types.
pub trait Player: Send {
    /// Choose a pit index for `side`. Human players validate that the pit
    /// lies in their own range; the board only checks that it holds beads.
    fn select_pit(&mut self, rng: &mut SmallRng, board: &Board, side: Side) -> anyhow::Result<usize>;

    /// Computer players get the thinking pause before they move.
    fn is_computer(&self) -> bool {
        false
    }

    /// Inform the player how its last move resolved.
    fn handle_move_result(&mut self, _side: Side, _pit: usize, _result: MoveResult) {}
}

pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPlayer;
