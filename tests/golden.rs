//! Golden file integration tests.
//!
//! Reads tests/testdata/parking_golden.json and replays each scenario
//! through a fresh session, comparing the rendered text line by line.

use serde::Deserialize;

use parker_cli::{OutcomePresenter, OutputFormat, Session, SessionOptions, WriterPresenter};
use parker_core::ParkingLot;

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    scenarios: Vec<Scenario>,
}

#[derive(Deserialize)]
struct Scenario {
    name: String,
    commands: Vec<String>,
    output: Vec<String>,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/parking_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn replay(scenario: &Scenario, format: OutputFormat) -> (Session, String) {
    let mut session = Session::new(SessionOptions::default());
    let mut presenter = WriterPresenter::new(format, Vec::new());
    for command in &scenario.commands {
        let outcome = session
            .execute_line(command)
            .unwrap_or_else(|e| panic!("{}: `{command}` failed: {e}", scenario.name));
        if let Some(outcome) = outcome {
            presenter.present(&outcome).unwrap();
        }
    }
    let out = String::from_utf8(presenter.into_inner()).unwrap();
    (session, out)
}

#[test]
fn golden_text_output() {
    let data = load_golden_data();
    assert!(!data.scenarios.is_empty());
    for scenario in &data.scenarios {
        let (_, out) = replay(scenario, OutputFormat::Text);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, scenario.output, "scenario {}", scenario.name);
    }
}

#[test]
fn golden_json_has_one_object_per_command() {
    let data = load_golden_data();
    for scenario in &data.scenarios {
        let (_, out) = replay(scenario, OutputFormat::Json);
        let objects: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(
            objects.len(),
            scenario.commands.len(),
            "scenario {}",
            scenario.name
        );
        assert_eq!(objects[0]["outcome"], "created");
    }
}

#[test]
fn golden_final_state_is_consistent() {
    let data = load_golden_data();
    for scenario in &data.scenarios {
        let (session, _) = replay(scenario, OutputFormat::Text);
        let lot: &ParkingLot = session.lot().expect("scenario creates a lot");
        lot.registry()
            .check_invariants()
            .unwrap_or_else(|e| panic!("scenario {}: {e}", scenario.name));
        assert_eq!(
            lot.registry().free_count() + lot.status().len(),
            lot.capacity(),
            "scenario {}",
            scenario.name
        );
    }
}
