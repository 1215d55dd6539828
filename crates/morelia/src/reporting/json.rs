//! JSON rendering of collected scenario runs.
//!
//! The document holds a `summary` with one counter per status and a
//! `scenarios` array in execution order. Outline permutations appear once
//! per run with the row indices they used.

use std::io::Write;

use serde::Serialize;

use super::{ScenarioRecord, ScenarioStatus};

#[derive(Serialize)]
struct Document<'a> {
    summary: Summary,
    scenarios: Vec<Run<'a>>,
}

#[derive(Default, Serialize)]
struct Summary {
    passed: usize,
    failed: usize,
    errored: usize,
}

#[derive(Serialize)]
struct Run<'a> {
    feature_path: &'a str,
    scenario_name: &'a str,
    line: usize,
    status: &'static str,
    labels: &'a [String],
    row_indices: &'a [usize],
    seconds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    step: Option<&'a str>,
}

fn document(records: &[ScenarioRecord]) -> Document<'_> {
    let mut summary = Summary::default();
    let scenarios = records
        .iter()
        .map(|record| {
            match record.status() {
                ScenarioStatus::Passed => summary.passed += 1,
                ScenarioStatus::Failed => summary.failed += 1,
                ScenarioStatus::Errored => summary.errored += 1,
            }
            Run {
                feature_path: record.feature_path(),
                scenario_name: record.scenario_name(),
                line: record.line(),
                status: record.status().label(),
                labels: record.labels(),
                row_indices: record.row_indices(),
                seconds: record.duration().as_secs_f64(),
                step: record.step(),
            }
        })
        .collect();
    Document { summary, scenarios }
}

/// Serialize `records` into `writer`.
///
/// # Examples
/// ```rust
/// use morelia::reporting::{json, ScenarioRecord};
///
/// let records = vec![ScenarioRecord::new("calculator.feature", "Add two numbers", 6)];
/// let mut buffer = Vec::new();
/// json::write(&mut buffer, &records).unwrap();
/// let output = String::from_utf8(buffer).unwrap();
/// assert!(output.starts_with(r#"{"summary":{"passed":1,"failed":0,"errored":0}"#));
/// ```
///
/// # Errors
/// Returns an error when writing to `writer` fails.
pub fn write<W: Write>(writer: &mut W, records: &[ScenarioRecord]) -> serde_json::Result<()> {
    serde_json::to_writer(writer, &document(records))
}

/// Render `records` as a JSON string.
///
/// # Examples
/// ```rust
/// use morelia::reporting::{json, ScenarioRecord, ScenarioStatus};
///
/// let records = vec![
///     ScenarioRecord::new("calculator.feature", "Add two numbers", 6)
///         .with_failure(ScenarioStatus::Failed, "Then it breaks"),
/// ];
/// let json = json::to_string(&records).unwrap();
/// assert!(json.contains(r#""step":"Then it breaks""#));
/// assert!(json.contains(r#""failed":1"#));
/// ```
///
/// # Errors
/// Returns an error when serialization fails.
pub fn to_string(records: &[ScenarioRecord]) -> serde_json::Result<String> {
    serde_json::to_string(&document(records))
}
