//! Core Mancala engine (no_std compatible)
//!
//! Board topology, sowing, captures and victory detection, plus the explicit
//! per-game state used by the drivers. Needs only `alloc`, `rand` and `log`.

pub mod ai;
pub mod board;
pub mod bucket;
pub mod common;
pub mod config;
pub mod game;

pub use ai::{random_pit, Difficulty, UnknownDifficulty};
pub use board::{Board, BoardState};
pub use bucket::{Bucket, BucketId};
pub use common::{BoardError, MoveResult, Outcome, Side};
pub use config::*;
pub use game::{GameEngine, GameStatus};
