//! Data model: slots, vehicles, and departure records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LotError;

/// 1-based slot identifier. Id `k` is stored at offset `k - 1` of the slot array.
pub type SlotId = usize;

/// Opaque, non-empty vehicle registration number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationNumber(String);

impl RegistrationNumber {
    /// Create a registration number, trimming surrounding whitespace.
    pub fn new(value: impl AsRef<str>) -> Result<Self, LotError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(LotError::EmptyRegistration);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The registration number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegistrationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RegistrationNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A parked vehicle. `parked_at` is the id of the slot holding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    registration: RegistrationNumber,
    parked_at: Option<SlotId>,
}

impl Vehicle {
    /// Create a vehicle that is not yet parked.
    #[must_use]
    pub fn new(registration: RegistrationNumber) -> Self {
        Self {
            registration,
            parked_at: None,
        }
    }

    #[must_use]
    pub fn registration(&self) -> &RegistrationNumber {
        &self.registration
    }

    #[must_use]
    pub fn parked_at(&self) -> Option<SlotId> {
        self.parked_at
    }

    pub(crate) fn set_parked_at(&mut self, slot: Option<SlotId>) {
        self.parked_at = slot;
    }
}

/// One unit of parking capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    id: SlotId,
    occupant: Option<Vehicle>,
}

impl Slot {
    pub(crate) fn new(id: SlotId) -> Self {
        Self { id, occupant: None }
    }

    #[must_use]
    pub fn id(&self) -> SlotId {
        self.id
    }

    #[must_use]
    pub fn occupant(&self) -> Option<&Vehicle> {
        self.occupant.as_ref()
    }

    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Bind a vehicle to this slot, setting its back-reference.
    pub(crate) fn assign(&mut self, mut vehicle: Vehicle) {
        vehicle.set_parked_at(Some(self.id));
        self.occupant = Some(vehicle);
    }

    /// Unbind the current occupant, clearing its back-reference.
    pub(crate) fn clear(&mut self) -> Option<Vehicle> {
        self.occupant.take().map(|mut vehicle| {
            vehicle.set_parked_at(None);
            vehicle
        })
    }
}

/// Result of a successful departure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRecord {
    /// Registration number of the departing vehicle.
    pub registration: String,
    /// Slot the vehicle occupied.
    pub slot: SlotId,
    /// Hours billed.
    pub hours: u64,
    /// Computed charge.
    pub fee: u64,
}

/// One occupied slot in a status listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub slot: SlotId,
    pub registration: String,
}

impl StatusEntry {
    #[must_use]
    pub fn new(slot: SlotId, registration: impl Into<String>) -> Self {
        Self {
            slot,
            registration: registration.into(),
        }
    }
}
