//! Occupancy registry: the fixed slot array plus the free-id pool.

use tracing::error;

use crate::error::{LotError, PoolError};
use crate::model::{RegistrationNumber, Slot, SlotId, StatusEntry, Vehicle};
use crate::pool::SlotIdPool;

/// Owns every slot of a lot and the pool of free slot ids.
///
/// A slot id is free exactly when it is in the pool and its slot has no
/// occupant.
#[derive(Debug, Clone)]
pub struct OccupancyRegistry {
    slots: Vec<Slot>,
    pool: SlotIdPool,
}

impl OccupancyRegistry {
    /// Create a registry with slots `1..=capacity`, all free.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (1..=capacity).map(Slot::new).collect(),
            pool: SlotIdPool::new(capacity),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn free_count(&self) -> usize {
        self.pool.len()
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.capacity() - self.free_count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.pool.is_empty()
    }

    /// Look up a slot by id.
    #[must_use]
    pub fn slot(&self, id: SlotId) -> Option<&Slot> {
        id.checked_sub(1).and_then(|offset| self.slots.get(offset))
    }

    /// Free slot ids in unspecified order.
    pub fn free_ids(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.pool.iter()
    }

    /// Reserve the lowest free slot and bind `vehicle` to it.
    ///
    /// Returns `Ok(None)` when the lot is full; that is an expected outcome
    /// and nothing is changed.
    pub fn book_slot(&mut self, vehicle: Vehicle) -> Result<Option<SlotId>, LotError> {
        if self.pool.is_empty() {
            return Ok(None);
        }

        let id = self.pool.extract_min().map_err(|err| {
            error!(%err, "extract_min failed on a non-empty pool");
            LotError::Pool(err)
        })?;

        let slot = &mut self.slots[id - 1];
        if slot.is_occupied() {
            // Put the id back so the pool keeps matching the slot table.
            let mut message = format!("slot {id} was free in the pool but already occupied");
            if let Err(err) = self.pool.insert(id) {
                message.push_str(&format!("; returning it to the pool also failed: {err}"));
            }
            error!(id, %message, "pool handed out an occupied slot");
            return Err(LotError::Corrupted(message));
        }
        slot.assign(vehicle);
        Ok(Some(id))
    }

    /// Clear slot `id` and return its id to the pool.
    ///
    /// Releasing a slot that is already free fails with
    /// [`PoolError::DuplicateId`] and leaves everything unchanged.
    pub fn release(&mut self, id: SlotId) -> Result<Vehicle, LotError> {
        let capacity = self.capacity();
        let Some(slot) = id.checked_sub(1).and_then(|offset| self.slots.get_mut(offset)) else {
            return Err(PoolError::OutOfRange { id, capacity }.into());
        };
        if !slot.is_occupied() {
            error!(id, "release of a slot that is not occupied");
            return Err(PoolError::DuplicateId(id).into());
        }

        self.pool.insert(id).map_err(|err| {
            error!(%err, id, "pool rejected a released slot id");
            LotError::Pool(err)
        })?;

        slot.clear()
            .ok_or_else(|| LotError::Corrupted(format!("slot {id} lost its occupant")))
    }

    /// Slot holding `registration`, if it is parked.
    ///
    /// Scans slots in ascending id order, so with duplicate registrations
    /// allowed the lowest slot wins.
    #[must_use]
    pub fn find_by_registration(&self, registration: &RegistrationNumber) -> Option<SlotId> {
        self.slots
            .iter()
            .find(|slot| {
                slot.occupant()
                    .is_some_and(|vehicle| vehicle.registration() == registration)
            })
            .map(Slot::id)
    }

    /// All occupied slots, ascending by id.
    #[must_use]
    pub fn occupied_snapshot(&self) -> Vec<StatusEntry> {
        self.slots
            .iter()
            .filter_map(|slot| {
                slot.occupant()
                    .map(|vehicle| StatusEntry::new(slot.id(), vehicle.registration().as_str()))
            })
            .collect()
    }

    /// Verify that free and occupied ids partition `1..=capacity` and that
    /// every occupant points back at its own slot.
    pub fn check_invariants(&self) -> Result<(), LotError> {
        let capacity = self.capacity();
        if self.pool.capacity() != capacity {
            return Err(LotError::Corrupted(format!(
                "pool capacity {} differs from slot count {capacity}",
                self.pool.capacity()
            )));
        }

        let mut seen_free = vec![false; capacity];
        for id in self.pool.iter() {
            if !(1..=capacity).contains(&id) {
                return Err(LotError::Corrupted(format!("free id {id} out of range")));
            }
            if std::mem::replace(&mut seen_free[id - 1], true) {
                return Err(LotError::Corrupted(format!("free id {id} listed twice")));
            }
        }

        let mut occupied = 0;
        for (offset, slot) in self.slots.iter().enumerate() {
            let id = offset + 1;
            if slot.id() != id {
                return Err(LotError::Corrupted(format!(
                    "slot at offset {offset} has id {}",
                    slot.id()
                )));
            }
            match slot.occupant() {
                Some(vehicle) => {
                    occupied += 1;
                    if seen_free[offset] {
                        return Err(LotError::Corrupted(format!(
                            "slot {id} is both free and occupied"
                        )));
                    }
                    if vehicle.parked_at() != Some(id) {
                        return Err(LotError::Corrupted(format!(
                            "occupant of slot {id} points at {:?}",
                            vehicle.parked_at()
                        )));
                    }
                }
                None if !seen_free[offset] => {
                    return Err(LotError::Corrupted(format!(
                        "slot {id} is neither free nor occupied"
                    )));
                }
                None => {}
            }
        }

        if occupied + self.pool.len() != capacity {
            return Err(LotError::Corrupted(format!(
                "{occupied} occupied + {} free != capacity {capacity}",
                self.pool.len()
            )));
        }
        Ok(())
    }
}
