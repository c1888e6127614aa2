//! Error handling and exit codes.

use std::path::PathBuf;

use parker_cli::SessionError;
use parker_core::constants::exit_codes;

/// Problems with the command input itself.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input file {0} does not exist")]
    Missing(PathBuf),

    #[error("input path {0} is not a regular file")]
    NotAFile(PathBuf),

    #[error("input file {0} is empty")]
    Empty(PathBuf),

    #[error("cannot read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Exit code for a rejected command line.
pub fn handle_error(err: &SessionError) -> i32 {
    if err.is_invariant_violation() {
        exit_codes::ERROR_INVARIANT
    } else {
        exit_codes::ERROR_COMMAND
    }
}

/// Exit code for an error that aborted the whole run.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<InputError>().is_some() {
        exit_codes::ERROR_INPUT
    } else if let Some(session) = err.downcast_ref::<SessionError>() {
        handle_error(session)
    } else {
        exit_codes::ERROR_COMMAND
    }
}
