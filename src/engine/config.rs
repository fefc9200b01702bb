use crate::engine::board::Board;
use crate::engine::common::BoardError;

pub const DEFAULT_PITS_PER_PLAYER: usize = 6;
pub const DEFAULT_STARTING_BEADS: u32 = 4;
/// Largest board side accepted by `Board::new`.
pub const MAX_PITS_PER_PLAYER: usize = 64;

/// Number of dots printed while the computer "thinks".
pub const THINKING_STEPS: u32 = 6;
/// Delay between thinking dots, in milliseconds.
pub const THINKING_STEP_MS: u64 = 500;

/// Board dimensions chosen for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub starting_beads: u32,
    pub pits_per_player: usize,
}

impl GameConfig {
    pub const fn new(starting_beads: u32, pits_per_player: usize) -> Self {
        Self {
            starting_beads,
            pits_per_player,
        }
    }

    /// Total beads in play for this configuration.
    pub fn total_beads(&self) -> Result<u32, BoardError> {
        checked_total_beads(self.starting_beads, self.pits_per_player)
    }

    pub fn validate(&self) -> Result<(), BoardError> {
        self.total_beads().map(|_| ())
    }

    /// Build a fresh board for this configuration.
    pub fn build(&self) -> Result<Board, BoardError> {
        Board::new(self.starting_beads, self.pits_per_player)
    }
}

/// Beads on a board of `pits_per_player` pits a side, each holding
/// `starting_beads`. The side must be `1..=MAX_PITS_PER_PLAYER` and the total
/// must fit a bucket counter.
pub fn checked_total_beads(starting_beads: u32, pits_per_player: usize) -> Result<u32, BoardError> {
    if pits_per_player == 0 || pits_per_player > MAX_PITS_PER_PLAYER {
        return Err(BoardError::InvalidPitCount);
    }
    (pits_per_player as u64)
        .checked_mul(2)
        .and_then(|pits| pits.checked_mul(u64::from(starting_beads)))
        .and_then(|total| u32::try_from(total).ok())
        .ok_or(BoardError::InvalidCount)
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STARTING_BEADS, DEFAULT_PITS_PER_PLAYER)
    }
}
