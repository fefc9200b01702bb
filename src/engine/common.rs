//! Common types for Mancala: sides, outcomes, move results and board errors.

use core::fmt;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    One,
    Two,
}

impl Side {
    /// The opposing side.
    pub fn other(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// Zero-based index, handy for per-side arrays.
    pub fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }

    /// Player number as shown to the user (1 or 2).
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Label used in turn prompts.
    pub fn label(self) -> &'static str {
        match self {
            Side::One => "Player One",
            Side::Two => "Player Two",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Result of comparing the two stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Winner(Side),
    Tie,
}

impl Outcome {
    /// 1 or 2 for a winner, 0 for a tie.
    pub fn code(self) -> u8 {
        match self {
            Outcome::Winner(side) => side.number(),
            Outcome::Tie => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(side) => write!(f, "{} wins!", side),
            Outcome::Tie => write!(f, "Tie game!"),
        }
    }
}

/// How a single move resolved once the last bead was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Last bead landed in the mover's own store.
    ExtraTurn,
    /// Last bead landed in the mover's empty pit and took the opposite pit.
    /// `beads` is the total moved into the store, capturing bead included.
    Captured {
        pit: usize,
        opposite: usize,
        beads: u32,
    },
    /// Nothing special happened.
    TurnEnds,
}

impl MoveResult {
    /// Whether the mover plays again.
    pub fn extra_turn(self) -> bool {
        matches!(self, MoveResult::ExtraTurn)
    }
}

/// Errors returned by Bucket, Board and GameEngine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// The selected pit is empty.
    NoBeadsToMove,
    /// Beads cannot be withdrawn from a store.
    InvalidOperation,
    /// Bead additions must be non-negative and fit the counter.
    InvalidCount,
    /// Pit index, player choice or snapshot shape is out of range.
    InvalidIndex,
    /// A board needs at least one pit per player.
    InvalidPitCount,
    /// The pit belongs to the other player.
    NotOwnPit,
    /// The game has already finished.
    GameOver,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::NoBeadsToMove => write!(f, "Please move a bucket with beads in it"),
            BoardError::InvalidOperation => write!(f, "Can't remove beads from a scoring bucket"),
            BoardError::InvalidCount => {
                write!(f, "The number of beads must be a positive integer or zero")
            }
            BoardError::InvalidIndex => write!(f, "Index is out of range"),
            BoardError::InvalidPitCount => write!(f, "A board needs at least one pit per player"),
            BoardError::NotOwnPit => write!(f, "That pit belongs to the other player"),
            BoardError::GameOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
