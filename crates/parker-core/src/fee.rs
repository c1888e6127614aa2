//! Parking fee calculation.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FLAT_CHARGE, DEFAULT_FLAT_HOURS, DEFAULT_HOURLY_RATE};
use crate::error::LotError;

/// Maps hours parked to a charge. Implementations must be pure.
pub trait FeeCalculator: Send + Sync {
    /// Compute the charge for `hours` parked.
    fn compute_fee(&self, hours: i64) -> Result<u64, LotError>;

    /// Name of this pricing model.
    fn name(&self) -> &str;
}

/// Flat charge for an initial window, then a fixed rate per extra hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Charge covering the first `flat_hours` hours.
    pub flat_charge: u64,
    /// Hours included in the flat charge.
    pub flat_hours: u64,
    /// Charge per hour beyond `flat_hours`.
    pub hourly_rate: u64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            flat_charge: DEFAULT_FLAT_CHARGE,
            flat_hours: DEFAULT_FLAT_HOURS,
            hourly_rate: DEFAULT_HOURLY_RATE,
        }
    }
}

/// Per-hour pricing over a [`FeeSchedule`].
#[derive(Debug, Clone, Default)]
pub struct PerHourFeeCalculator {
    schedule: FeeSchedule,
}

impl PerHourFeeCalculator {
    #[must_use]
    pub fn new(schedule: FeeSchedule) -> Self {
        Self { schedule }
    }

    #[must_use]
    pub fn schedule(&self) -> FeeSchedule {
        self.schedule
    }
}

impl FeeCalculator for PerHourFeeCalculator {
    fn compute_fee(&self, hours: i64) -> Result<u64, LotError> {
        let hours = u64::try_from(hours).map_err(|_| LotError::InvalidDuration(hours))?;
        let overtime = hours.saturating_sub(self.schedule.flat_hours);
        Ok(self
            .schedule
            .flat_charge
            .saturating_add(overtime.saturating_mul(self.schedule.hourly_rate)))
    }

    fn name(&self) -> &str {
        "per-hour"
    }
}

/// Compute a fee with the default schedule.
///
/// # Example
/// ```
/// assert_eq!(parker_core::compute_fee(4).unwrap(), 30);
/// assert!(parker_core::compute_fee(-1).is_err());
/// ```
pub fn compute_fee(hours: i64) -> Result<u64, LotError> {
    PerHourFeeCalculator::default().compute_fee(hours)
}
