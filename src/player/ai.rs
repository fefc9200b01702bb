use rand::rngs::SmallRng;

use crate::engine::{Board, Difficulty, Side};

use super::Player;

/// Computer player choosing pits according to its difficulty.
pub struct AiPlayer {
    difficulty: Difficulty,
}

impl AiPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new(Difficulty::Easy)
    }
}

impl Player for AiPlayer {
    fn select_pit(&mut self, rng: &mut SmallRng, board: &Board, side: Side) -> anyhow::Result<usize> {
        self.difficulty
            .choose_pit(board, side, rng)
            .ok_or_else(|| anyhow::anyhow!("{} has no beads to move", side))
    }

    fn is_computer(&self) -> bool {
        true
    }
}
