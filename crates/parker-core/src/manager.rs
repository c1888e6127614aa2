//! Vehicle-facing allocation API over the occupancy registry.

use tracing::{debug, warn};

use crate::error::LotError;
use crate::model::{RegistrationNumber, SlotId, StatusEntry, Vehicle};
use crate::registry::OccupancyRegistry;

/// Parks and releases vehicles.
#[derive(Debug, Clone)]
pub struct AllocationManager {
    registry: OccupancyRegistry,
    enforce_unique_registration: bool,
}

impl AllocationManager {
    #[must_use]
    pub fn new(registry: OccupancyRegistry, enforce_unique_registration: bool) -> Self {
        Self {
            registry,
            enforce_unique_registration,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &OccupancyRegistry {
        &self.registry
    }

    /// Park `registration` in the lowest free slot.
    ///
    /// Returns `Ok(None)` when the lot is full, without side effects.
    pub fn park(&mut self, registration: RegistrationNumber) -> Result<Option<SlotId>, LotError> {
        if self.enforce_unique_registration {
            if let Some(slot) = self.registry.find_by_registration(&registration) {
                warn!(%registration, slot, "registration already parked");
                return Err(LotError::AlreadyParked {
                    registration: registration.to_string(),
                    slot,
                });
            }
        }

        let vehicle = Vehicle::new(registration);
        let booked = self.registry.book_slot(vehicle)?;
        match booked {
            Some(id) => debug!(id, "slot allocated"),
            None => debug!("lot is full"),
        }
        self.debug_check();
        Ok(booked)
    }

    /// Slot currently held by `registration`.
    #[must_use]
    pub fn locate(&self, registration: &RegistrationNumber) -> Option<SlotId> {
        self.registry.find_by_registration(registration)
    }

    /// Free the slot held by `registration` and return its id.
    pub fn vacate(&mut self, registration: &RegistrationNumber) -> Result<SlotId, LotError> {
        let id = self
            .registry
            .find_by_registration(registration)
            .ok_or_else(|| LotError::NotFound(registration.to_string()))?;
        self.registry.release(id)?;
        debug!(id, %registration, "slot released");
        self.debug_check();
        Ok(id)
    }

    /// Occupied slots, ascending by id.
    #[must_use]
    pub fn status(&self) -> Vec<StatusEntry> {
        self.registry.occupied_snapshot()
    }

    fn debug_check(&self) {
        if cfg!(debug_assertions) {
            if let Err(err) = self.registry.check_invariants() {
                panic!("occupancy invariant broken: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reg(value: &str) -> RegistrationNumber {
        RegistrationNumber::new(value).unwrap()
    }

    fn manager(capacity: usize, unique: bool) -> AllocationManager {
        AllocationManager::new(OccupancyRegistry::new(capacity), unique)
    }

    #[test]
    fn park_until_full() {
        let mut m = manager(2, true);
        assert_eq!(m.park(reg("A")), Ok(Some(1)));
        assert_eq!(m.park(reg("B")), Ok(Some(2)));
        assert_eq!(m.park(reg("C")), Ok(None));
        assert_eq!(
            m.status(),
            vec![StatusEntry::new(1, "A"), StatusEntry::new(2, "B")]
        );
    }

    #[test]
    fn vacate_returns_freed_slot() {
        let mut m = manager(3, true);
        m.park(reg("A")).unwrap();
        m.park(reg("B")).unwrap();
        assert_eq!(m.vacate(&reg("B")), Ok(2));
        assert_eq!(m.locate(&reg("B")), None);
        assert_eq!(m.park(reg("C")), Ok(Some(2)));
    }

    #[test]
    fn vacate_unknown_is_not_found() {
        let mut m = manager(2, true);
        m.park(reg("A")).unwrap();
        assert_eq!(
            m.vacate(&reg("Z")),
            Err(LotError::NotFound("Z".into()))
        );
        assert_eq!(m.status(), vec![StatusEntry::new(1, "A")]);
    }

    #[test]
    fn duplicate_registration_rejected_when_unique() {
        let mut m = manager(3, true);
        m.park(reg("A")).unwrap();
        assert_eq!(
            m.park(reg("A")),
            Err(LotError::AlreadyParked {
                registration: "A".into(),
                slot: 1
            })
        );
        assert_eq!(m.registry().occupied_count(), 1);
    }

    #[test]
    fn duplicate_registration_allowed_when_permissive() {
        let mut m = manager(3, false);
        assert_eq!(m.park(reg("A")), Ok(Some(1)));
        assert_eq!(m.park(reg("A")), Ok(Some(2)));
        assert_eq!(m.vacate(&reg("A")), Ok(1));
        assert_eq!(m.vacate(&reg("A")), Ok(2));
        assert!(m.vacate(&reg("A")).is_err());
    }

    #[test]
    fn full_lot_still_reports_duplicate_first() {
        let mut m = manager(1, true);
        m.park(reg("A")).unwrap();
        assert!(matches!(
            m.park(reg("A")),
            Err(LotError::AlreadyParked { .. })
        ));
        assert_eq!(m.park(reg("B")), Ok(None));
    }
}
