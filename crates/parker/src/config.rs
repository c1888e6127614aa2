//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use parker_cli::{OutputFormat, PlateCheck, SessionOptions};
use parker_core::constants::{DEFAULT_FLAT_CHARGE, DEFAULT_FLAT_HOURS, DEFAULT_HOURLY_RATE};
use parker_core::{FeeSchedule, LotOptions};

/// Parker — parking lot simulator driven by a command file.
#[derive(Parser, Debug)]
#[command(name = "parker", version, about)]
pub struct AppConfig {
    /// Command file to execute. Reads stdin when omitted.
    #[arg(env = "PARKER_INPUT")]
    pub input: Option<PathBuf>,

    /// Output format: text or json.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Accept any non-empty registration number.
    #[arg(long)]
    pub lenient_plates: bool,

    /// Allow one registration number to hold several slots.
    #[arg(long)]
    pub allow_duplicates: bool,

    /// Charge covering the flat-rate window.
    #[arg(long, default_value_t = DEFAULT_FLAT_CHARGE)]
    pub flat_charge: u64,

    /// Hours covered by the flat charge.
    #[arg(long, default_value_t = DEFAULT_FLAT_HOURS)]
    pub flat_hours: u64,

    /// Charge per hour beyond the flat-rate window.
    #[arg(long, default_value_t = DEFAULT_HOURLY_RATE)]
    pub hourly_rate: u64,

    /// Stop at the first rejected line.
    #[arg(long)]
    pub fail_fast: bool,

    /// Verbose (debug-level) logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Fee schedule assembled from the pricing flags.
    #[must_use]
    pub fn fee_schedule(&self) -> FeeSchedule {
        FeeSchedule {
            flat_charge: self.flat_charge,
            flat_hours: self.flat_hours,
            hourly_rate: self.hourly_rate,
        }
    }

    /// Session options built once and handed to the session.
    #[must_use]
    pub fn session_options(&self) -> SessionOptions {
        let mut lot = LotOptions::default().with_fee_schedule(self.fee_schedule());
        if self.allow_duplicates {
            lot = lot.permissive();
        }
        SessionOptions {
            lot,
            plates: if self.lenient_plates {
                PlateCheck::Lenient
            } else {
                PlateCheck::Strict
            },
        }
    }

    /// Default log directive when `RUST_LOG` is unset.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        <AppConfig as Parser>::try_parse_from(std::iter::once("parker").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&["input.txt"]);
        assert_eq!(config.input, Some(PathBuf::from("input.txt")));
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.fee_schedule(), FeeSchedule::default());

        let opts = config.session_options();
        assert!(opts.lot.enforce_unique_registration);
        assert_eq!(opts.plates, PlateCheck::Strict);
        assert_eq!(config.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn flags_flow_into_session_options() {
        let config = parse(&[
            "--format",
            "json",
            "--lenient-plates",
            "--allow-duplicates",
            "--flat-charge",
            "15",
            "--hourly-rate",
            "5",
            "-v",
        ]);
        assert_eq!(config.format, OutputFormat::Json);
        let opts = config.session_options();
        assert!(!opts.lot.enforce_unique_registration);
        assert_eq!(opts.plates, PlateCheck::Lenient);
        assert_eq!(opts.lot.fee_schedule.flat_charge, 15);
        assert_eq!(opts.lot.fee_schedule.flat_hours, 2);
        assert_eq!(opts.lot.fee_schedule.hourly_rate, 5);
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn rejects_negative_rates() {
        let result = <AppConfig as Parser>::try_parse_from(["parker", "--hourly-rate", "-1"]);
        assert!(result.is_err());
    }
}
