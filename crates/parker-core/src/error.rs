//! Error taxonomy for the allocation engine.

use crate::model::SlotId;

/// Contract violations raised by [`SlotIdPool`](crate::pool::SlotIdPool).
///
/// The registry never triggers these under correct use; seeing one means an
/// internal invariant is broken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// `extract_min` on a pool with no free ids.
    #[error("slot pool is empty")]
    Empty,

    /// `insert` on a pool that already holds every id.
    #[error("slot pool is at its full capacity of {capacity}")]
    Full { capacity: usize },

    /// `insert` of an id outside `[1, capacity]`.
    #[error("slot id {id} is outside the accepted range [1, {capacity}]")]
    OutOfRange { id: SlotId, capacity: usize },

    /// `insert` of an id that is already free.
    #[error("slot id {0} is already present in the pool")]
    DuplicateId(SlotId),
}

/// Coarse classification of [`LotError`], for callers that only need to
/// decide how to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input reaching the core boundary.
    Validation,
    /// No active session for the given registration number.
    NotFound,
    /// The registration number already holds a slot.
    Conflict,
    /// An internal pool or registry invariant was violated.
    Invariant,
}

/// Errors surfaced by the parking lot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LotError {
    /// A lot needs between 1 and [`MAX_CAPACITY`](crate::constants::MAX_CAPACITY) slots.
    #[error("invalid capacity {0}: a parking lot needs between 1 and {max} slots", max = crate::constants::MAX_CAPACITY)]
    InvalidCapacity(usize),

    /// Hours parked cannot be negative.
    #[error("invalid duration: hours parked cannot be negative (got {0})")]
    InvalidDuration(i64),

    /// Registration numbers must be non-empty.
    #[error("registration number cannot be empty")]
    EmptyRegistration,

    /// No vehicle with this registration number is parked.
    #[error("no vehicle with registration number {0} is parked right now")]
    NotFound(String),

    /// The registration number is already parked.
    #[error("vehicle {registration} is already parked at slot {slot}")]
    AlreadyParked { registration: String, slot: SlotId },

    /// Slot pool contract violation.
    #[error("slot pool invariant violated: {0}")]
    Pool(#[from] PoolError),

    /// Registry bookkeeping disagrees with the pool.
    #[error("occupancy invariant violated: {0}")]
    Corrupted(String),
}

impl LotError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCapacity(_) | Self::InvalidDuration(_) | Self::EmptyRegistration => {
                ErrorKind::Validation
            }
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::AlreadyParked { .. } => ErrorKind::Conflict,
            Self::Pool(_) | Self::Corrupted(_) => ErrorKind::Invariant,
        }
    }
}
