//! Data structures representing scenario results captured by the collector.

use std::time::Duration;

use crate::execution::StepStatus;

/// Outcome of one scenario run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScenarioStatus {
    /// Every step passed.
    Passed,
    /// A step was missing or failed an expectation.
    Failed,
    /// A step raised an error or requested an exit.
    Errored,
}

impl ScenarioStatus {
    /// Lowercase label used by reporters.
    ///
    /// # Examples
    /// ```
    /// use morelia::reporting::ScenarioStatus;
    ///
    /// assert_eq!(ScenarioStatus::Failed.label(), "failed");
    /// ```
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Errored => "errored",
        }
    }
}

impl From<StepStatus> for ScenarioStatus {
    fn from(status: StepStatus) -> Self {
        match status {
            StepStatus::Passed => Self::Passed,
            StepStatus::Failed => Self::Failed,
            StepStatus::Errored => Self::Errored,
        }
    }
}

/// Outcome recorded for a single scenario run.
///
/// Outline scenarios produce one record per permutation, each with the row
/// indices it ran with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScenarioRecord {
    feature_path: String,
    scenario_name: String,
    line: usize,
    labels: Vec<String>,
    row_indices: Vec<usize>,
    status: ScenarioStatus,
    step: Option<String>,
    duration: Duration,
}

impl ScenarioRecord {
    /// Construct a record for a scenario that started running.
    ///
    /// The status starts as [`ScenarioStatus::Passed`].
    ///
    /// # Examples
    /// ```
    /// use morelia::reporting::{ScenarioRecord, ScenarioStatus};
    ///
    /// let record = ScenarioRecord::new("calculator.feature", "Add two numbers", 4);
    /// assert_eq!(record.scenario_name(), "Add two numbers");
    /// assert_eq!(record.status(), ScenarioStatus::Passed);
    /// ```
    #[must_use]
    pub fn new(
        feature_path: impl Into<String>,
        scenario_name: impl Into<String>,
        line: usize,
    ) -> Self {
        Self {
            feature_path: feature_path.into(),
            scenario_name: scenario_name.into(),
            line,
            labels: Vec::new(),
            row_indices: Vec::new(),
            status: ScenarioStatus::Passed,
            step: None,
            duration: Duration::ZERO,
        }
    }

    /// Attach the scenario's labels.
    #[must_use]
    pub fn with_labels(mut self, labels: impl Into<Vec<String>>) -> Self {
        self.labels = labels.into();
        self
    }

    /// Attach the outline row indices of this run.
    #[must_use]
    pub fn with_row_indices(mut self, row_indices: impl Into<Vec<usize>>) -> Self {
        self.row_indices = row_indices.into();
        self
    }

    /// Mark the run as stopped by `step`.
    #[must_use]
    pub fn with_failure(mut self, status: ScenarioStatus, step: impl Into<String>) -> Self {
        self.status = status;
        self.step = Some(step.into());
        self
    }

    /// Record how long the run took.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Name of the feature source.
    #[must_use]
    pub fn feature_path(&self) -> &str {
        &self.feature_path
    }

    /// Scenario predicate.
    #[must_use]
    pub fn scenario_name(&self) -> &str {
        &self.scenario_name
    }

    /// Line of the `Scenario:` keyword.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Labels of the scenario and the feature.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Row indices of the permutation.
    #[must_use]
    pub fn row_indices(&self) -> &[usize] {
        &self.row_indices
    }

    /// Outcome of the run.
    #[must_use]
    pub fn status(&self) -> ScenarioStatus {
        self.status
    }

    /// Source of the step that stopped the run.
    #[must_use]
    pub fn step(&self) -> Option<&str> {
        self.step.as_deref()
    }

    /// Wall-clock duration of the run.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}
