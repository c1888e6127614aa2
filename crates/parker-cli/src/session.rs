//! Command execution against an explicitly owned lot.
//!
//! The session is the only holder of the current [`ParkingLot`]; it is
//! created once by the caller and passed wherever commands are executed.

use serde::Serialize;
use tracing::{debug, warn};

use parker_core::{
    ErrorKind, FeeRecord, LotError, LotOptions, ParkOutcome, ParkingLot, SlotId, StatusEntry,
};

use crate::command::{parse_line, Command, CommandError, PlateCheck};

/// Settings shared by every lot the session creates.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Options for each `create_parking_lot`.
    pub lot: LotOptions,
    /// Registration number format checking.
    pub plates: PlateCheck,
}

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// A lot with `capacity` slots now exists.
    Created { capacity: usize },
    /// The vehicle was parked.
    Allocated { registration: String, slot: SlotId },
    /// No free slot for the vehicle.
    Full { registration: String },
    /// The vehicle left and was charged.
    Left(FeeRecord),
    /// `leave` for a registration that is not parked.
    NotFound { registration: String },
    /// Occupied slots, ascending by id.
    Status { slots: Vec<StatusEntry> },
}

/// Errors that stop a command from running.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The line could not be parsed.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// A lot command ran before `create_parking_lot`.
    #[error("no parking lot exists yet; run `create_parking_lot <capacity>` first")]
    NoLot,

    /// The lot rejected the command.
    #[error(transparent)]
    Lot(#[from] LotError),
}

impl SessionError {
    /// True if this error signals a broken internal invariant.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::Lot(err) if err.kind() == ErrorKind::Invariant)
    }
}

/// Holds the current lot and executes commands against it.
#[derive(Default)]
pub struct Session {
    options: SessionOptions,
    lot: Option<ParkingLot>,
}

impl Session {
    #[must_use]
    pub fn new(options: SessionOptions) -> Self {
        Self { options, lot: None }
    }

    #[must_use]
    pub fn lot(&self) -> Option<&ParkingLot> {
        self.lot.as_ref()
    }

    /// Parse and execute one input line. Blank and comment lines yield `None`.
    pub fn execute_line(&mut self, line: &str) -> Result<Option<Outcome>, SessionError> {
        match parse_line(line, self.options.plates)? {
            Some(command) => self.execute(command).map(Some),
            None => Ok(None),
        }
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, SessionError> {
        debug!(%command, "executing");
        match command {
            Command::CreateParkingLot { capacity } => {
                let lot = ParkingLot::create(capacity, self.options.lot.clone())?;
                if let Some(previous) = self.lot.replace(lot) {
                    warn!(
                        previous_capacity = previous.capacity(),
                        capacity, "replacing existing parking lot"
                    );
                }
                Ok(Outcome::Created { capacity })
            }
            Command::Park { registration } => match self.lot_mut()?.park(&registration)? {
                ParkOutcome::Allocated(slot) => Ok(Outcome::Allocated { registration, slot }),
                ParkOutcome::Full => Ok(Outcome::Full { registration }),
            },
            Command::Leave {
                registration,
                hours,
            } => match self.lot_mut()?.leave(&registration, hours) {
                Ok(record) => Ok(Outcome::Left(record)),
                Err(LotError::NotFound(_)) => Ok(Outcome::NotFound { registration }),
                Err(err) => Err(err.into()),
            },
            Command::Status => {
                let lot = self.lot.as_ref().ok_or(SessionError::NoLot)?;
                Ok(Outcome::Status {
                    slots: lot.status(),
                })
            }
        }
    }

    fn lot_mut(&mut self) -> Result<&mut ParkingLot, SessionError> {
        self.lot.as_mut().ok_or(SessionError::NoLot)
    }
}
