//! Unit tests for the reporting module.

use super::*;
use crate::execution::execute_script;
use crate::fixture::{Fixture, MethodCatalog, StepArgs, StepError, StepResult};
use crate::matchers::MatcherChain;
use crate::parser::parse;
use crate::step;

struct Checker;

impl Checker {
    fn step_value_is(&mut self, args: &StepArgs) -> StepResult {
        match args.get("value") {
            Some("bad") => Err(StepError::failed("bad value")),
            Some("broken") => Err(StepError::errored("broken value")),
            _ => Ok(()),
        }
    }
}

impl Fixture for Checker {
    fn catalog() -> MethodCatalog<Self> {
        MethodCatalog::new(vec![step!(Self::step_value_is, "value is (.+)", ["value"])])
    }
}

const FEATURE: &str = "\
@nightly
Feature: Values
Scenario: every value
  Given value is <value>
    | value |
    | good  |
    | bad   |
Scenario: broken value
  Given value is broken
";

fn collect(text: &str) -> Collector {
    let mut tree = parse(text).unwrap_or_else(|error| panic!("document should parse: {error}"));
    let mut collector = Collector::default();
    {
        let mut observers: [&mut dyn VisitorObserver; 1] = [&mut collector];
        let _ = execute_script(
            &mut tree,
            &mut Checker,
            &MatcherChain::default(),
            &mut observers,
            true,
        );
    }
    collector
}

#[test]
fn collector_records_each_run_until_the_failure() {
    let collector = collect(FEATURE);
    let records = collector.records();
    assert_eq!(records.len(), 2);
    let statuses: Vec<_> = records.iter().map(ScenarioRecord::status).collect();
    assert_eq!(statuses, [ScenarioStatus::Passed, ScenarioStatus::Failed]);
    let rows: Vec<_> = records.iter().map(ScenarioRecord::row_indices).collect();
    assert_eq!(rows, [[0], [1]]);
    let Some(failed) = records.get(1) else {
        panic!("failed run should be recorded");
    };
    assert_eq!(failed.step(), Some("Given value is bad"));
    assert_eq!(failed.labels(), ["nightly"]);
    assert_eq!(collector.count(ScenarioStatus::Passed), 1);
}

#[test]
fn errored_steps_mark_the_run_as_errored() {
    let mut collector =
        collect("Feature: Values\nScenario: broken value\n  Given value is broken\n");
    assert_eq!(collector.count(ScenarioStatus::Errored), 1);
    let drained = collector.drain();
    assert_eq!(drained.len(), 1);
    assert!(collector.records().is_empty());
}

#[cfg(feature = "diagnostics")]
#[test]
fn json_lists_every_record() {
    let collector = collect(FEATURE);
    let json = json::to_string(collector.records())
        .unwrap_or_else(|error| panic!("records should serialize: {error}"));
    assert!(json.starts_with("{\"summary\":{\"passed\":1,\"failed\":1,\"errored\":0}"));
    assert!(json.contains("\"status\":\"failed\""));
    assert!(json.contains("\"row_indices\":[1]"));
}
