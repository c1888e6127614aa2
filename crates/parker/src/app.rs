//! Application entry point and run loop.

use std::fs;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;
use tracing::{debug, error, info};

use parker_cli::ui::{print_fatal, print_rejection};
use parker_cli::{OutcomePresenter, Session, WriterPresenter};
use parker_core::constants::exit_codes;

use crate::config::AppConfig;
use crate::errors::{handle_error, InputError};

/// Totals for one run over an input script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines that produced an outcome.
    pub executed: usize,
    /// Lines rejected by the parser, session, or lot.
    pub rejected: usize,
    /// Set when a pool/registry invariant violation stopped the run.
    pub fatal: bool,
}

impl RunSummary {
    /// Process exit code for this run.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.fatal {
            exit_codes::ERROR_INVARIANT
        } else if self.rejected > 0 {
            exit_codes::ERROR_COMMAND
        } else {
            exit_codes::SUCCESS
        }
    }
}

/// Run the application and return the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    if let Some(shell) = config.completion {
        write_completion(shell, &mut io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    let mut session = Session::new(config.session_options());
    let stdout = io::stdout();
    let mut presenter = WriterPresenter::new(config.format, stdout.lock());

    let summary = match &config.input {
        Some(path) => {
            let script = read_input_file(path)?;
            info!(path = %path.display(), "running command file");
            run_script(&mut session, script.as_bytes(), &mut presenter, config.fail_fast)?
        }
        None => {
            info!("reading commands from stdin");
            let stdin = io::stdin();
            run_script(&mut session, stdin.lock(), &mut presenter, config.fail_fast)?
        }
    };

    presenter
        .into_inner()
        .flush()
        .context("failed to flush output")?;
    if let Some(lot) = session.lot() {
        debug!(stats = ?lot.stats(), "final lot statistics");
    }
    Ok(summary.exit_code())
}

/// Print a completion script for the binary's own flags.
pub fn write_completion(shell: Shell, out: &mut dyn Write) {
    let mut cmd = AppConfig::command();
    let bin_name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, bin_name, out);
}

/// Execute every line of `reader`, presenting outcomes as they happen.
///
/// Rejected lines are reported on stderr. Processing continues past them
/// unless `fail_fast` is set; an invariant violation always stops the run.
pub fn run_script<R: Read, P: OutcomePresenter>(
    session: &mut Session,
    reader: R,
    presenter: &mut P,
    fail_fast: bool,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(InputError::from)?;

        match session.execute_line(&line) {
            Ok(Some(outcome)) => {
                summary.executed += 1;
                presenter
                    .present(&outcome)
                    .context("failed to write output")?;
            }
            Ok(None) => {}
            Err(err) if err.is_invariant_violation() => {
                error!(line_no, %err, "invariant violation");
                print_fatal(&format!("line {line_no}: {err}"));
                summary.fatal = true;
                break;
            }
            Err(err) => {
                debug!(line_no, code = handle_error(&err), %err, "line rejected");
                print_rejection(line_no, &line, &err.to_string());
                summary.rejected += 1;
                if fail_fast {
                    break;
                }
            }
        }
    }

    Ok(summary)
}

/// Read a command file, rejecting missing, non-regular, and empty files.
pub fn read_input_file(path: &Path) -> Result<String, InputError> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(InputError::Missing(path.to_path_buf()))
        }
        Err(err) => return Err(err.into()),
    };
    if !metadata.is_file() {
        return Err(InputError::NotAFile(path.to_path_buf()));
    }
    if metadata.len() == 0 {
        return Err(InputError::Empty(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}
