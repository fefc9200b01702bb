//! A single pit or store on the board.

use crate::engine::common::{BoardError, Side};

/// Identity of a bucket: a numbered pit or one side's store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BucketId {
    Pit(usize),
    Store(Side),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    id: BucketId,
    owner: Side,
    beads: u32,
}

impl Bucket {
    /// An empty non-scoring pit.
    pub fn pit(index: usize, owner: Side) -> Self {
        Self {
            id: BucketId::Pit(index),
            owner,
            beads: 0,
        }
    }

    /// An empty store for `owner`.
    pub fn store(owner: Side) -> Self {
        Self {
            id: BucketId::Store(owner),
            owner,
            beads: 0,
        }
    }

    /// Set the starting count while the board is being assembled.
    pub(crate) fn filled(mut self, beads: u32) -> Self {
        self.beads = beads;
        self
    }

    pub fn id(&self) -> BucketId {
        self.id
    }

    pub fn owner(&self) -> Side {
        self.owner
    }

    pub fn beads(&self) -> u32 {
        self.beads
    }

    pub fn is_scoring(&self) -> bool {
        matches!(self.id, BucketId::Store(_))
    }

    /// Pit index, or `None` for a store.
    pub fn pit_index(&self) -> Option<usize> {
        match self.id {
            BucketId::Pit(i) => Some(i),
            BucketId::Store(_) => None,
        }
    }

    /// Empty the bucket and return how many beads it held.
    pub fn take_all(&mut self) -> Result<u32, BoardError> {
        if self.is_scoring() {
            return Err(BoardError::InvalidOperation);
        }
        let beads = self.beads;
        self.beads = 0;
        Ok(beads)
    }

    /// Add `count` beads. Negative or overflowing counts are rejected.
    pub fn add_beads<N: TryInto<u32>>(&mut self, count: N) -> Result<(), BoardError> {
        let count: u32 = count.try_into().map_err(|_| BoardError::InvalidCount)?;
        self.beads = self
            .beads
            .checked_add(count)
            .ok_or(BoardError::InvalidCount)?;
        Ok(())
    }

    pub fn add_bead(&mut self) -> Result<(), BoardError> {
        self.add_beads(1u32)
    }
}
