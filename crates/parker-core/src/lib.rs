//! # parker-core
//!
//! Slot allocation engine for a fixed-capacity parking lot. Vehicles get the
//! lowest-numbered free slot, release it on departure, and are charged from
//! the hours they stayed.

pub mod constants;
pub mod error;
pub mod fee;
pub mod lot;
pub mod manager;
pub mod model;
pub mod options;
pub mod pool;
pub mod registry;
pub mod shared;
pub mod stats;

// Re-exports
pub use constants::exit_codes;
pub use error::{ErrorKind, LotError, PoolError};
pub use fee::{compute_fee, FeeCalculator, FeeSchedule, PerHourFeeCalculator};
pub use lot::{ParkOutcome, ParkingLot};
pub use model::{FeeRecord, RegistrationNumber, SlotId, StatusEntry};
pub use options::LotOptions;
pub use shared::SharedLot;
pub use stats::LotStats;
