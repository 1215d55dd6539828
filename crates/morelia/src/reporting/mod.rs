//! Observers that report on execution.
//!
//! [`TextFormat`] renders the feature as it runs. [`Collector`] keeps one
//! [`ScenarioRecord`] per scenario run so summaries can be rendered after
//! the fact, for instance as JSON with the `diagnostics` feature.

use std::time::Instant;

use crate::execution::{StepReport, StepStatus, VisitorObserver};
use crate::grammar::NodeRef;

/// JSON report writer for scenario outcomes.
#[cfg(feature = "diagnostics")]
pub mod json;
mod record;
mod text;

pub use record::{ScenarioRecord, ScenarioStatus};
pub use text::TextFormat;

/// Observer recording the outcome of every scenario run.
///
/// # Examples
/// ```
/// use morelia::reporting::Collector;
///
/// let collector = Collector::default();
/// assert!(collector.records().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct Collector {
    records: Vec<ScenarioRecord>,
    current: Option<(ScenarioRecord, Instant)>,
}

impl Collector {
    /// Records of finished scenario runs, in execution order.
    #[must_use]
    pub fn records(&self) -> &[ScenarioRecord] {
        &self.records
    }

    /// Take the records, leaving the collector empty.
    pub fn drain(&mut self) -> Vec<ScenarioRecord> {
        std::mem::take(&mut self.records)
    }

    /// Number of runs with the given status.
    #[must_use]
    pub fn count(&self, status: ScenarioStatus) -> usize {
        self.records
            .iter()
            .filter(|record| record.status() == status)
            .count()
    }
}

impl VisitorObserver for Collector {
    fn scenario_started(&mut self, node: NodeRef<'_>) {
        let record = ScenarioRecord::new(node.filename(), node.predicate(), node.line())
            .with_labels(node.labels())
            .with_row_indices(node.row_indices());
        self.current = Some((record, Instant::now()));
    }

    fn step_finished(&mut self, node: NodeRef<'_>, report: &StepReport) {
        if report.status == StepStatus::Passed {
            return;
        }
        if let Some((record, started)) = self.current.take() {
            let step = node.interpolated_source().trim().to_owned();
            let record = record.with_failure(report.status.into(), step);
            self.current = Some((record, started));
        }
    }

    fn scenario_finished(&mut self, _node: NodeRef<'_>) {
        if let Some((record, started)) = self.current.take() {
            self.records.push(record.with_duration(started.elapsed()));
        }
    }
}

#[cfg(test)]
mod tests;
