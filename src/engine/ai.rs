//! Computer move selection.

use core::fmt;
use core::str::FromStr;

use rand::Rng;

use crate::engine::{board::Board, common::Side};

/// Computer strength selected at the start of a single-player game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Pick a pit for `side`, or `None` if every pit of `side` is empty.
    pub fn choose_pit<R: Rng + ?Sized>(self, board: &Board, side: Side, rng: &mut R) -> Option<usize> {
        match self {
            Difficulty::Easy => random_pit(board, side, rng),
            Difficulty::Medium | Difficulty::Hard => {
                // TODO: medium and hard have no heuristic of their own yet
                log::debug!("{} difficulty falls back to random play", self.name());
                random_pit(board, side, rng)
            }
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownDifficulty;

impl fmt::Display for UnknownDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("difficulty must be one of easy, medium or hard")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownDifficulty {}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("easy") {
            Ok(Difficulty::Easy)
        } else if s.eq_ignore_ascii_case("medium") {
            Ok(Difficulty::Medium)
        } else if s.eq_ignore_ascii_case("hard") {
            Ok(Difficulty::Hard)
        } else {
            Err(UnknownDifficulty)
        }
    }
}

/// Uniform choice among the non-empty pits of `side`.
pub fn random_pit<R: Rng + ?Sized>(board: &Board, side: Side, rng: &mut R) -> Option<usize> {
    let legal = board.legal_pits(side);
    if legal.is_empty() {
        return None;
    }
    Some(legal[rng.random_range(0..legal.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::board::BoardState;
    use alloc::vec;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn test_random_pit_only_picks_non_empty_own_pits() {
        let board = Board::try_from(BoardState {
            pits_per_player: 6,
            pits: vec![4, 4, 4, 4, 4, 4, 0, 3, 0, 0, 2, 0],
            stores: [0, 0],
        })
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let pit = random_pit(&board, Side::Two, &mut rng).unwrap();
            assert!(pit == 7 || pit == 10, "picked empty or foreign pit {}", pit);
        }
    }

    #[test]
    fn test_random_pit_none_when_side_is_empty() {
        let board = Board::try_from(BoardState {
            pits_per_player: 2,
            pits: vec![0, 0, 1, 1],
            stores: [6, 0],
        })
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(random_pit(&board, Side::One, &mut rng), None);
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!("EASY".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(" medium ".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("expert".parse::<Difficulty>().unwrap_err(), UnknownDifficulty);
    }
}
