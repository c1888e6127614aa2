//! Lot configuration.

use crate::fee::FeeSchedule;

/// Options applied when a lot is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LotOptions {
    /// Reject `park` for a registration number that already holds a slot.
    pub enforce_unique_registration: bool,
    /// Pricing used by `leave`.
    pub fee_schedule: FeeSchedule,
}

impl Default for LotOptions {
    fn default() -> Self {
        Self {
            enforce_unique_registration: true,
            fee_schedule: FeeSchedule::default(),
        }
    }
}

impl LotOptions {
    /// Allow the same registration number to hold several slots.
    #[must_use]
    pub fn permissive(mut self) -> Self {
        self.enforce_unique_registration = false;
        self
    }

    #[must_use]
    pub fn with_fee_schedule(mut self, schedule: FeeSchedule) -> Self {
        self.fee_schedule = schedule;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = LotOptions::default();
        assert!(opts.enforce_unique_registration);
        assert_eq!(opts.fee_schedule, FeeSchedule::default());
    }

    #[test]
    fn builders() {
        let schedule = FeeSchedule {
            flat_charge: 1,
            flat_hours: 0,
            hourly_rate: 1,
        };
        let opts = LotOptions::default().permissive().with_fee_schedule(schedule);
        assert!(!opts.enforce_unique_registration);
        assert_eq!(opts.fee_schedule, schedule);
    }
}
