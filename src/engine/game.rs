use crate::engine::board::Board;
use crate::engine::common::{BoardError, MoveResult, Outcome, Side};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Finished(Outcome),
}

/// Per-game state: the board, whose turn it is and how many moves were made.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    turn: Side,
    turn_count: u32,
}

impl GameEngine {
    /// Start a game on `board` with player one to move.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            turn: Side::One,
            turn_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Number of moves applied so far, extra turns included.
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn status(&self) -> GameStatus {
        if self.board.check_victory() {
            GameStatus::Finished(self.board.player_ahead())
        } else {
            GameStatus::InProgress
        }
    }

    /// Play `pit` for the side to move. The turn passes to the other side
    /// unless the move earned an extra turn.
    pub fn play(&mut self, pit: usize) -> Result<MoveResult, BoardError> {
        if let GameStatus::Finished(_) = self.status() {
            return Err(BoardError::GameOver);
        }
        if !self.board.pit_range(self.turn).contains(&pit) {
            return Err(BoardError::NotOwnPit);
        }
        let result = self.board.sow(pit, self.turn)?;
        self.turn_count += 1;
        if !result.extra_turn() {
            self.turn = self.turn.other();
        }
        Ok(result)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(Board::default())
    }
}
