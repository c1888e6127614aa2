//! Lot activity counters.

use serde::Serialize;

/// Running totals of lot activity. Updated under the lot's `&mut` borrow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LotStats {
    /// Successful allocations.
    pub parked: u64,
    /// `park` calls turned away because the lot was full.
    pub rejected_full: u64,
    /// Successful departures.
    pub departed: u64,
    /// `leave` calls for registrations that were not parked.
    pub not_found: u64,
    /// Sum of all fees charged.
    pub revenue: u64,
}

impl LotStats {
    pub(crate) fn record_parked(&mut self) {
        self.parked += 1;
    }

    pub(crate) fn record_full(&mut self) {
        self.rejected_full += 1;
    }

    pub(crate) fn record_departure(&mut self, fee: u64) {
        self.departed += 1;
        self.revenue = self.revenue.saturating_add(fee);
    }

    pub(crate) fn record_not_found(&mut self) {
        self.not_found += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let mut stats = LotStats::default();
        stats.record_parked();
        stats.record_parked();
        stats.record_full();
        stats.record_departure(30);
        stats.record_departure(10);
        stats.record_not_found();

        assert_eq!(
            stats,
            LotStats {
                parked: 2,
                rejected_full: 1,
                departed: 2,
                not_found: 1,
                revenue: 40,
            }
        );
    }

    #[test]
    fn revenue_saturates() {
        let mut stats = LotStats::default();
        stats.record_departure(u64::MAX);
        stats.record_departure(1);
        assert_eq!(stats.revenue, u64::MAX);
        assert_eq!(stats.departed, 2);
    }
}
