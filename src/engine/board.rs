//! Game board: buckets in sowing order, the opposite-pit table and move resolution.
//!
//! Buckets are stored in a fixed array in sowing order:
//!
//! ```text
//! slot:   0 .. N-1      N         N+1 .. 2N      2N+1
//!         P1 pits       P2 store  P2 pits        P1 store
//! pit:    0 .. N-1                N .. 2N-1
//! ```
//!
//! The successor of slot `s` is `(s + 1) % (2N + 2)`.

use alloc::{vec, vec::Vec};
use core::ops::Range;

use crate::engine::bucket::{Bucket, BucketId};
use crate::engine::common::{BoardError, MoveResult, Outcome, Side};
use crate::engine::config::{
    checked_total_beads, DEFAULT_PITS_PER_PLAYER, DEFAULT_STARTING_BEADS, MAX_PITS_PER_PLAYER,
};

/// Plain snapshot of bead counts, used for rendering, reports and building
/// specific positions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub pits_per_player: usize,
    /// Bead counts in pit index order (`0..2N`).
    pub pits: Vec<u32>,
    /// Store counts indexed by `Side::index()`.
    pub stores: [u32; 2],
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pits_per_player: usize,
    buckets: Vec<Bucket>,
    opposite: Vec<usize>,
}

impl Board {
    /// Build a board with `pits_per_player` pits a side, each holding
    /// `starting_beads`.
    pub fn new(starting_beads: u32, pits_per_player: usize) -> Result<Self, BoardError> {
        checked_total_beads(starting_beads, pits_per_player)?;
        let pit_count = pits_per_player
            .checked_mul(2)
            .ok_or(BoardError::InvalidPitCount)?;

        log::trace!(
            "building board: {} pits a side, {} beads each",
            pits_per_player,
            starting_beads
        );
        let pits = vec![starting_beads; pit_count];
        Ok(Board::from_counts(pits_per_player, &pits, [0, 0]))
    }

    /// Standard six-pit board with `starting_beads` in each pit.
    pub fn with_beads(starting_beads: u32) -> Result<Self, BoardError> {
        Self::new(starting_beads, DEFAULT_PITS_PER_PLAYER)
    }

    pub fn pits_per_player(&self) -> usize {
        self.pits_per_player
    }

    /// Number of non-scoring pits on the whole board.
    pub fn pit_count(&self) -> usize {
        2 * self.pits_per_player
    }

    /// Pit indices owned by `side`.
    pub fn pit_range(&self, side: Side) -> Range<usize> {
        let n = self.pits_per_player;
        match side {
            Side::One => 0..n,
            Side::Two => n..2 * n,
        }
    }

    fn slot_of(&self, pit: usize) -> Result<usize, BoardError> {
        let n = self.pits_per_player;
        if pit < n {
            Ok(pit)
        } else if pit < 2 * n {
            Ok(pit + 1)
        } else {
            Err(BoardError::InvalidIndex)
        }
    }

    fn store_slot(&self, side: Side) -> usize {
        match side {
            Side::One => 2 * self.pits_per_player + 1,
            Side::Two => self.pits_per_player,
        }
    }

    fn next_slot(&self, slot: usize) -> usize {
        (slot + 1) % self.buckets.len()
    }

    /// The pit bucket at `pit`.
    pub fn bucket(&self, pit: usize) -> Result<&Bucket, BoardError> {
        let slot = self.slot_of(pit)?;
        Ok(&self.buckets[slot])
    }

    /// Bead count of one pit.
    pub fn beads(&self, pit: usize) -> Result<u32, BoardError> {
        self.bucket(pit).map(Bucket::beads)
    }

    /// Bead counts of `side`'s pits in storage order.
    pub fn pits(&self, side: Side) -> Vec<u32> {
        self.pit_range(side)
            .map(|pit| self.buckets[pit + usize::from(side == Side::Two)].beads())
            .collect()
    }

    /// Bead count of `side`'s store.
    pub fn store(&self, side: Side) -> u32 {
        self.buckets[self.store_slot(side)].beads()
    }

    /// All buckets in sowing order, starting from pit 0.
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Sum of every bucket on the board.
    pub fn total_beads(&self) -> u64 {
        self.buckets.iter().map(|b| u64::from(b.beads())).sum()
    }

    /// Beads left in `side`'s pits.
    pub fn pit_total(&self, side: Side) -> u64 {
        self.pits(side).iter().map(|&b| u64::from(b)).sum()
    }

    /// Pits of `side` that can be moved.
    pub fn legal_pits(&self, side: Side) -> Vec<usize> {
        self.pit_range(side)
            .filter(|&pit| self.beads(pit).map_or(false, |b| b > 0))
            .collect()
    }

    /// The pit directly across from `pit`.
    pub fn get_opposite(&self, pit: usize) -> Result<&Bucket, BoardError> {
        let opposite = *self.opposite.get(pit).ok_or(BoardError::InvalidIndex)?;
        self.bucket(opposite)
    }

    /// Convert a 1-based choice, counted left to right along `side`'s own row,
    /// into a pit index. Player two reads their row reversed.
    pub fn pit_for_choice(&self, side: Side, choice: usize) -> Result<usize, BoardError> {
        let n = self.pits_per_player;
        if choice == 0 || choice > n {
            return Err(BoardError::InvalidIndex);
        }
        Ok(match side {
            Side::One => choice - 1,
            Side::Two => 2 * n - choice,
        })
    }

    /// Inverse of [`Board::pit_for_choice`].
    pub fn choice_for_pit(&self, side: Side, pit: usize) -> Result<usize, BoardError> {
        if !self.pit_range(side).contains(&pit) {
            return Err(BoardError::InvalidIndex);
        }
        Ok(match side {
            Side::One => pit + 1,
            Side::Two => 2 * self.pits_per_player - pit,
        })
    }

    /// Move the beads in `pit` for `side`. Returns `true` when `side` earns
    /// another turn.
    pub fn make_move(&mut self, pit: usize, side: Side) -> Result<bool, BoardError> {
        self.sow(pit, side).map(MoveResult::extra_turn)
    }

    /// Move the beads in `pit` for `side` and report how the move resolved.
    ///
    /// Ownership of `pit` is not checked here. The board is left untouched
    /// when an error is returned.
    pub fn sow(&mut self, pit: usize, side: Side) -> Result<MoveResult, BoardError> {
        let source = self.slot_of(pit)?;
        if self.buckets[source].beads() == 0 {
            return Err(BoardError::NoBeadsToMove);
        }

        let mut buckets = self.buckets.clone();
        let mut beads = buckets[source].take_all()?;
        let skipped = self.store_slot(side.other());
        let own_store = self.store_slot(side);
        log::debug!("{} sows {} beads from pit {}", side, beads, pit);

        let mut slot = source;
        while beads > 0 {
            slot = self.next_slot(slot);
            if slot == skipped {
                continue;
            }
            buckets[slot].add_bead()?;
            beads -= 1;
        }

        let landed = buckets[slot];
        let result = match landed.id() {
            BucketId::Store(_) => MoveResult::ExtraTurn,
            BucketId::Pit(last) if landed.owner() == side && landed.beads() == 1 => {
                let opposite = self.opposite[last];
                let opposite_slot = self.slot_of(opposite)?;
                if buckets[opposite_slot].beads() > 0 {
                    let taken = buckets[opposite_slot].take_all()?;
                    let captured = taken
                        .checked_add(buckets[slot].take_all()?)
                        .ok_or(BoardError::InvalidCount)?;
                    buckets[own_store].add_beads(captured)?;
                    log::debug!("{} captures {} beads via pit {}", side, captured, last);
                    MoveResult::Captured {
                        pit: last,
                        opposite,
                        beads: captured,
                    }
                } else {
                    MoveResult::TurnEnds
                }
            }
            BucketId::Pit(_) => MoveResult::TurnEnds,
        };

        self.buckets = buckets;
        Ok(result)
    }

    /// True once either side has no beads left in its pits.
    pub fn check_victory(&self) -> bool {
        self.pit_total(Side::One) == 0 || self.pit_total(Side::Two) == 0
    }

    /// Which side has more beads in its store.
    pub fn player_ahead(&self) -> Outcome {
        let one = self.store(Side::One);
        let two = self.store(Side::Two);
        if one > two {
            Outcome::Winner(Side::One)
        } else if two > one {
            Outcome::Winner(Side::Two)
        } else {
            Outcome::Tie
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        let pits = vec![DEFAULT_STARTING_BEADS; 2 * DEFAULT_PITS_PER_PLAYER];
        Board::from_counts(DEFAULT_PITS_PER_PLAYER, &pits, [0, 0])
    }
}

impl Board {
    /// Assemble buckets in sowing order. Callers check that the counts fit.
    fn from_counts(n: usize, pits: &[u32], stores: [u32; 2]) -> Self {
        let mut buckets = Vec::with_capacity(2 * n + 2);
        for (i, &beads) in pits.iter().enumerate() {
            let owner = if i < n { Side::One } else { Side::Two };
            buckets.push(Bucket::pit(i, owner).filled(beads));
            if i + 1 == n {
                buckets.push(Bucket::store(Side::Two).filled(stores[Side::Two.index()]));
            }
        }
        buckets.push(Bucket::store(Side::One).filled(stores[Side::One.index()]));
        Board {
            pits_per_player: n,
            buckets,
            opposite: (0..2 * n).map(|i| 2 * n - 1 - i).collect(),
        }
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        let mut pits = b.pits(Side::One);
        pits.extend(b.pits(Side::Two));
        BoardState {
            pits_per_player: b.pits_per_player,
            pits,
            stores: [b.store(Side::One), b.store(Side::Two)],
        }
    }
}

impl TryFrom<BoardState> for Board {
    type Error = BoardError;

    fn try_from(state: BoardState) -> Result<Self, Self::Error> {
        if state.pits_per_player == 0 || state.pits_per_player > MAX_PITS_PER_PLAYER {
            return Err(BoardError::InvalidPitCount);
        }
        if state.pits.len() != 2 * state.pits_per_player {
            return Err(BoardError::InvalidIndex);
        }
        let total = state
            .pits
            .iter()
            .chain(state.stores.iter())
            .map(|&b| u64::from(b))
            .sum::<u64>();
        if total > u64::from(u32::MAX) {
            return Err(BoardError::InvalidCount);
        }
        Ok(Board::from_counts(
            state.pits_per_player,
            &state.pits,
            state.stores,
        ))
    }
}
