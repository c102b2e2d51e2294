use crate::error::{Error, Result};
use crate::state::Position;

use arrayvec::ArrayVec;

/// Append-only log of plotted cells with a compile-time capacity.
pub struct PositionRecord<const CAP: usize> {
    entries: ArrayVec<Position, CAP>,
}

impl<const CAP: usize> PositionRecord<CAP> {
    pub fn new() -> Self {
        PositionRecord {
            entries: ArrayVec::new(),
        }
    }

    pub fn push(&mut self, at: Position) -> Result<()> {
        self.entries
            .try_push(at)
            .map_err(|_| Error::CapacityExceeded { capacity: CAP })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.entries.remaining_capacity()
    }

    pub fn as_slice(&self) -> &[Position] {
        self.entries.as_slice()
    }
}

impl<const CAP: usize> Default for PositionRecord<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

/// Exact linear scan for `at` in `record`.
pub fn position_exists(at: Position, record: &[Position]) -> bool {
    record.iter().any(|p| *p == at)
}
