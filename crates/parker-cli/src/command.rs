//! Line-oriented command parsing.

use std::fmt;

use crate::validator::{is_digits, is_registration_number};

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `create_parking_lot <capacity>`
    CreateParkingLot { capacity: usize },
    /// `park <registration>`
    Park { registration: String },
    /// `leave <registration> <hours>`
    Leave { registration: String, hours: i64 },
    /// `status`
    Status,
}

impl Command {
    /// Keyword that introduces this command.
    #[must_use]
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::CreateParkingLot { .. } => "create_parking_lot",
            Self::Park { .. } => "park",
            Self::Leave { .. } => "leave",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateParkingLot { capacity } => write!(f, "create_parking_lot {capacity}"),
            Self::Park { registration } => write!(f, "park {registration}"),
            Self::Leave {
                registration,
                hours,
            } => write!(f, "leave {registration} {hours}"),
            Self::Status => f.write_str("status"),
        }
    }
}

/// How strictly registration numbers are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlateCheck {
    /// Require the `KA-01-HH-1234` shape.
    #[default]
    Strict,
    /// Accept any non-empty token.
    Lenient,
}

/// Errors produced while parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("invalid command `{0}`")]
    UnknownCommand(String),

    #[error("`{command}` expects {expected} argument(s), got {got}")]
    InsufficientArgs {
        command: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("invalid capacity `{0}`, expecting a positive whole number")]
    InvalidCapacity(String),

    #[error("invalid hours `{0}`, expecting a non-negative whole number")]
    InvalidHours(String),

    #[error("bad registration number `{0}`")]
    BadRegistration(String),
}

/// Parse one input line.
///
/// Returns `Ok(None)` for blank lines and `#` comments. Arguments beyond
/// those a command needs are ignored.
pub fn parse_line(line: &str, plates: PlateCheck) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = line.split_whitespace();
    let keyword = tokens.next().unwrap_or_default();
    let args: Vec<&str> = tokens.collect();

    let command = match keyword {
        "create_parking_lot" => {
            expect_args("create_parking_lot", &args, 1)?;
            let capacity = args[0];
            Command::CreateParkingLot {
                capacity: parse_number(capacity)
                    .ok_or_else(|| CommandError::InvalidCapacity(capacity.to_string()))?,
            }
        }
        "park" => {
            expect_args("park", &args, 1)?;
            Command::Park {
                registration: check_registration(args[0], plates)?,
            }
        }
        "leave" => {
            expect_args("leave", &args, 2)?;
            let registration = check_registration(args[0], plates)?;
            let hours = parse_number(args[1])
                .ok_or_else(|| CommandError::InvalidHours(args[1].to_string()))?;
            Command::Leave {
                registration,
                hours,
            }
        }
        "status" => Command::Status,
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

fn expect_args(command: &'static str, args: &[&str], expected: usize) -> Result<(), CommandError> {
    if args.len() < expected {
        return Err(CommandError::InsufficientArgs {
            command,
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

fn parse_number<T: std::str::FromStr>(token: &str) -> Option<T> {
    if is_digits(token) {
        token.parse().ok()
    } else {
        None
    }
}

fn check_registration(token: &str, plates: PlateCheck) -> Result<String, CommandError> {
    let ok = match plates {
        PlateCheck::Strict => is_registration_number(token),
        PlateCheck::Lenient => !token.is_empty(),
    };
    if ok {
        Ok(token.to_string())
    } else {
        Err(CommandError::BadRegistration(token.to_string()))
    }
}
