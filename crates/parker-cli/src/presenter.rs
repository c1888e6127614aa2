//! Rendering of command outcomes.

use std::io::{self, Write};

use clap::ValueEnum;

use crate::session::Outcome;

/// Header line printed before a non-empty status listing.
pub const STATUS_HEADER: &str = "Slot No. Registration No.";

/// Output format for command outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per outcome.
    Json,
}

/// Trait for presenting command outcomes to the user.
pub trait OutcomePresenter {
    /// Present one outcome.
    fn present(&mut self, outcome: &Outcome) -> io::Result<()>;
}

/// Render an outcome as text lines. An empty status renders nothing.
#[must_use]
pub fn render_text(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::Created { capacity } => vec![format!("Created parking lot with {capacity} slots")],
        Outcome::Allocated { slot, .. } => vec![format!("Allocated slot number: {slot}")],
        Outcome::Full { .. } => vec!["Sorry, parking lot is full".to_string()],
        Outcome::Left(record) => vec![format!(
            "Registration number {} with Slot Number {} is free with Charge {}",
            record.registration, record.slot, record.fee
        )],
        Outcome::NotFound { registration } => {
            vec![format!("Registration number {registration} not found")]
        }
        Outcome::Status { slots } if slots.is_empty() => Vec::new(),
        Outcome::Status { slots } => std::iter::once(STATUS_HEADER.to_string())
            .chain(
                slots
                    .iter()
                    .map(|entry| format!("{} {}", entry.slot, entry.registration)),
            )
            .collect(),
    }
}

/// Writes outcomes to any `Write` sink in the chosen format.
pub struct WriterPresenter<W: Write> {
    format: OutputFormat,
    out: W,
}

impl<W: Write> WriterPresenter<W> {
    #[must_use]
    pub fn new(format: OutputFormat, out: W) -> Self {
        Self { format, out }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutcomePresenter for WriterPresenter<W> {
    fn present(&mut self, outcome: &Outcome) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                for line in render_text(outcome) {
                    writeln!(self.out, "{line}")?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, outcome)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parker_core::{FeeRecord, StatusEntry};

    fn text(outcome: &Outcome) -> String {
        let mut presenter = WriterPresenter::new(OutputFormat::Text, Vec::new());
        presenter.present(outcome).unwrap();
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn text_messages() {
        assert_eq!(
            text(&Outcome::Created { capacity: 6 }),
            "Created parking lot with 6 slots\n"
        );
        assert_eq!(
            text(&Outcome::Allocated {
                registration: "KA-01-HH-1234".into(),
                slot: 1
            }),
            "Allocated slot number: 1\n"
        );
        assert_eq!(
            text(&Outcome::Full {
                registration: "X".into()
            }),
            "Sorry, parking lot is full\n"
        );
        assert_eq!(
            text(&Outcome::Left(FeeRecord {
                registration: "KA-01-HH-3141".into(),
                slot: 6,
                hours: 4,
                fee: 30
            })),
            "Registration number KA-01-HH-3141 with Slot Number 6 is free with Charge 30\n"
        );
        assert_eq!(
            text(&Outcome::NotFound {
                registration: "DL-12-AA-9999".into()
            }),
            "Registration number DL-12-AA-9999 not found\n"
        );
    }

    #[test]
    fn status_listing() {
        let outcome = Outcome::Status {
            slots: vec![
                StatusEntry::new(1, "KA-01-HH-1234"),
                StatusEntry::new(3, "KA-01-BB-0001"),
            ],
        };
        assert_eq!(
            text(&outcome),
            "Slot No. Registration No.\n1 KA-01-HH-1234\n3 KA-01-BB-0001\n"
        );
        assert_eq!(text(&Outcome::Status { slots: vec![] }), "");
    }

    #[test]
    fn json_lines() {
        let mut presenter = WriterPresenter::new(OutputFormat::Json, Vec::new());
        presenter.present(&Outcome::Created { capacity: 2 }).unwrap();
        presenter
            .present(&Outcome::Status {
                slots: vec![StatusEntry::new(2, "A")],
            })
            .unwrap();
        let out = String::from_utf8(presenter.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["outcome"], "created");
        assert_eq!(lines[0]["capacity"], 2);
        assert_eq!(lines[1]["slots"][0]["registration"], "A");
    }
}
