//! Execution events and the observers receiving them.

use std::fmt;
use std::time::Duration;

use crate::grammar::NodeRef;

use super::ExecutionError;

/// Final state of one step execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepStatus {
    /// The step method returned successfully.
    Passed,
    /// The step was missing or its expectation did not hold.
    Failed,
    /// The step raised any other error or asked to exit.
    Errored,
}

impl StepStatus {
    /// Lowercase label of the status.
    ///
    /// # Examples
    /// ```
    /// use morelia::execution::StepStatus;
    ///
    /// assert_eq!(StepStatus::Errored.as_str(), "error");
    /// ```
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "pass",
            Self::Failed => "fail",
            Self::Errored => "error",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What [`VisitorObserver::step_finished`] learns about a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// Outcome of the step.
    pub status: StepStatus,
    /// Wall-clock time from start notification to teardown.
    pub duration: Duration,
}

/// Receives traversal events.
///
/// Feature, scenario and step start/finish events forward to
/// [`node_started`](Self::node_started) and
/// [`node_finished`](Self::node_finished) unless overridden. Backgrounds,
/// rows, examples and comments only produce the generic node events.
/// Scenario events repeat once per outline permutation.
pub trait VisitorObserver {
    /// The feature is about to run its children.
    fn feature_started(&mut self, node: NodeRef<'_>) {
        self.node_started(node);
    }

    /// The feature finished, successfully or not.
    fn feature_finished(&mut self, node: NodeRef<'_>) {
        self.node_finished(node);
    }

    /// A scenario run begins.
    fn scenario_started(&mut self, node: NodeRef<'_>) {
        self.node_started(node);
    }

    /// A scenario run ended, successfully or not.
    fn scenario_finished(&mut self, node: NodeRef<'_>) {
        self.node_finished(node);
    }

    /// A step is about to be resolved and run.
    fn step_started(&mut self, node: NodeRef<'_>) {
        self.node_started(node);
    }

    /// The step was missing or failed an expectation.
    fn step_failed(&mut self, _node: NodeRef<'_>, _error: &ExecutionError) {}

    /// The step raised an error or requested an exit.
    fn step_errored(&mut self, _node: NodeRef<'_>, _error: &ExecutionError) {}

    /// The step finished, after its teardown hook.
    fn step_finished(&mut self, node: NodeRef<'_>, _report: &StepReport) {
        self.node_finished(node);
    }

    /// Generic start event.
    fn node_started(&mut self, _node: NodeRef<'_>) {}

    /// Generic finish event.
    fn node_finished(&mut self, _node: NodeRef<'_>) {}
}

/// Remembers where in the feature the traversal currently is.
///
/// A new feature clears the scenario and a new scenario clears the step.
/// The rendered trail is appended to failures so they show the Gherkin
/// lines that led to them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breadcrumbs {
    feature: Option<String>,
    scenario: Option<String>,
    step: Option<String>,
}

impl Breadcrumbs {
    /// Source of the current feature.
    #[must_use]
    pub fn feature(&self) -> Option<&str> {
        self.feature.as_deref()
    }

    /// Source of the current scenario.
    #[must_use]
    pub fn scenario(&self) -> Option<&str> {
        self.scenario.as_deref()
    }

    /// Source of the current step, placeholders resolved.
    #[must_use]
    pub fn step(&self) -> Option<&str> {
        self.step.as_deref()
    }
}

impl VisitorObserver for Breadcrumbs {
    fn feature_started(&mut self, node: NodeRef<'_>) {
        self.feature = Some(node.interpolated_source());
        self.scenario = None;
        self.step = None;
    }

    fn scenario_started(&mut self, node: NodeRef<'_>) {
        self.scenario = Some(node.interpolated_source());
        self.step = None;
    }

    fn step_started(&mut self, node: NodeRef<'_>) {
        self.step = Some(node.interpolated_source());
    }
}

impl fmt::Display for Breadcrumbs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n{}{}{}",
            self.feature.as_deref().unwrap_or_default(),
            self.scenario.as_deref().unwrap_or_default(),
            self.step.as_deref().unwrap_or_default()
        )
    }
}
