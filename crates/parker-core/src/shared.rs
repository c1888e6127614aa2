//! A parking lot shareable across threads.
//!
//! Each operation takes the lock once, so the pool extraction, slot update
//! and vehicle binding of a `park` (and the mirror sequence of a `leave`)
//! are never interleaved with another caller.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::LotError;
use crate::lot::{ParkOutcome, ParkingLot};
use crate::model::{FeeRecord, StatusEntry};
use crate::stats::LotStats;

/// Cloneable handle to a lot guarded by a single mutex.
#[derive(Clone)]
pub struct SharedLot {
    inner: Arc<Mutex<ParkingLot>>,
}

impl SharedLot {
    #[must_use]
    pub fn new(lot: ParkingLot) -> Self {
        Self {
            inner: Arc::new(Mutex::new(lot)),
        }
    }

    pub fn park(&self, registration: &str) -> Result<ParkOutcome, LotError> {
        self.inner.lock().park(registration)
    }

    pub fn leave(&self, registration: &str, hours: i64) -> Result<FeeRecord, LotError> {
        self.inner.lock().leave(registration, hours)
    }

    #[must_use]
    pub fn status(&self) -> Vec<StatusEntry> {
        self.inner.lock().status()
    }

    #[must_use]
    pub fn stats(&self) -> LotStats {
        self.inner.lock().stats()
    }

    /// Run `f` with exclusive access to the lot.
    pub fn with_lot<R>(&self, f: impl FnOnce(&mut ParkingLot) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl From<ParkingLot> for SharedLot {
    fn from(lot: ParkingLot) -> Self {
        Self::new(lot)
    }
}
