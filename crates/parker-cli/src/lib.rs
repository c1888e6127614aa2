//! # parker-cli
//!
//! Command layer for the parking lot: line parsing, the session that owns
//! the current lot, and outcome rendering.

pub mod command;
pub mod presenter;
pub mod session;
pub mod ui;
pub mod validator;

pub use command::{parse_line, Command, CommandError, PlateCheck};
pub use presenter::{OutcomePresenter, OutputFormat, WriterPresenter};
pub use session::{Outcome, Session, SessionError, SessionOptions};
