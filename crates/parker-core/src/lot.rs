//! The parking lot handle: create, park, leave, status.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::constants::MAX_CAPACITY;
use crate::error::LotError;
use crate::fee::{FeeCalculator, PerHourFeeCalculator};
use crate::manager::AllocationManager;
use crate::model::{FeeRecord, RegistrationNumber, SlotId, StatusEntry};
use crate::options::LotOptions;
use crate::registry::OccupancyRegistry;
use crate::stats::LotStats;

/// Outcome of a `park` request. A full lot is an expected result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", content = "slot", rename_all = "snake_case")]
pub enum ParkOutcome {
    /// The vehicle was parked in this slot.
    Allocated(SlotId),
    /// Every slot is occupied.
    Full,
}

impl ParkOutcome {
    /// The allocated slot, if any.
    #[must_use]
    pub fn slot(self) -> Option<SlotId> {
        match self {
            Self::Allocated(id) => Some(id),
            Self::Full => None,
        }
    }
}

/// A fixed-capacity parking lot.
pub struct ParkingLot {
    manager: AllocationManager,
    fee: Arc<dyn FeeCalculator>,
    options: LotOptions,
    stats: LotStats,
}

impl ParkingLot {
    /// Create a lot with `capacity` slots priced by `options.fee_schedule`.
    pub fn create(capacity: usize, options: LotOptions) -> Result<Self, LotError> {
        let fee = Arc::new(PerHourFeeCalculator::new(options.fee_schedule));
        Self::with_calculator(capacity, options, fee)
    }

    /// Create a lot with a custom fee calculator.
    pub fn with_calculator(
        capacity: usize,
        options: LotOptions,
        fee: Arc<dyn FeeCalculator>,
    ) -> Result<Self, LotError> {
        if capacity == 0 || capacity > MAX_CAPACITY {
            return Err(LotError::InvalidCapacity(capacity));
        }
        info!(
            capacity,
            pricing = fee.name(),
            unique = options.enforce_unique_registration,
            "parking lot created"
        );
        Ok(Self {
            manager: AllocationManager::new(
                OccupancyRegistry::new(capacity),
                options.enforce_unique_registration,
            ),
            fee,
            options,
            stats: LotStats::default(),
        })
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.manager.registry().capacity()
    }

    #[must_use]
    pub fn options(&self) -> &LotOptions {
        &self.options
    }

    #[must_use]
    pub fn registry(&self) -> &OccupancyRegistry {
        self.manager.registry()
    }

    /// Park a vehicle in the lowest free slot.
    pub fn park(&mut self, registration: &str) -> Result<ParkOutcome, LotError> {
        let registration = RegistrationNumber::new(registration)?;
        match self.manager.park(registration)? {
            Some(id) => {
                self.stats.record_parked();
                Ok(ParkOutcome::Allocated(id))
            }
            None => {
                self.stats.record_full();
                Ok(ParkOutcome::Full)
            }
        }
    }

    /// Release the vehicle's slot and charge it for `hours`.
    ///
    /// The slot is looked up first, then the fee is computed, and only then
    /// is the slot released; any failure leaves the lot unchanged.
    pub fn leave(&mut self, registration: &str, hours: i64) -> Result<FeeRecord, LotError> {
        let registration = RegistrationNumber::new(registration)?;
        if self.manager.locate(&registration).is_none() {
            self.stats.record_not_found();
            return Err(LotError::NotFound(registration.to_string()));
        }

        let fee = self.fee.compute_fee(hours)?;
        let billed = u64::try_from(hours).map_err(|_| LotError::InvalidDuration(hours))?;
        let slot = self.manager.vacate(&registration)?;
        self.stats.record_departure(fee);
        debug!(slot, fee, hours = billed, "vehicle left");

        Ok(FeeRecord {
            registration: registration.to_string(),
            slot,
            hours: billed,
            fee,
        })
    }

    /// Occupied slots, ascending by id.
    #[must_use]
    pub fn status(&self) -> Vec<StatusEntry> {
        self.manager.status()
    }

    #[must_use]
    pub fn stats(&self) -> LotStats {
        self.stats.clone()
    }
}
