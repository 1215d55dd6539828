//! Running a parsed feature against a fixture.
//!
//! [`execute_script`] walks the tree depth-first. Each scenario runs once per
//! outline permutation; each step is resolved through a [`MatcherChain`] and
//! its method invoked with the captured arguments. Fixture hooks bracket the
//! feature, every scenario run and every step, and teardown hooks run even
//! when a step or another hook fails; a panicking hook surfaces as
//! [`ExecutionError::HookFailed`]. Observers hear about every node along the
//! way.
//!
//! The first failing step aborts the traversal. Its error comes back as a
//! [`ScenarioFailure`] carrying the Gherkin lines active at that point.

mod error;
mod observer;
mod panic;
mod visitor;

use crate::fixture::{Fixture, MethodCatalog};
use crate::grammar::{FeatureTree, NodeId, NodeKind};
use crate::matchers::{Candidate, MatcherChain, Suggestion, candidates};

pub use error::{ExecutionError, MissingStep, ScenarioFailure};
pub use observer::{Breadcrumbs, StepReport, StepStatus, VisitorObserver};
pub use panic::{panic_message, trim_backtrace};
pub(crate) use panic::invoke_hook;

use visitor::Executor;

/// Collect a suggestion for every step no method matches.
///
/// Background steps are checked as written. Scenario steps are checked with
/// placeholders resolved against the first row of every example table.
/// Suggestions sharing the same code are reported once, in step order.
#[must_use]
pub fn missing_steps<F>(
    tree: &mut FeatureTree,
    catalog: &MethodCatalog<F>,
    chain: &MatcherChain,
) -> Vec<Suggestion> {
    let candidates = candidates(catalog);
    let sections: Vec<(NodeId, NodeKind)> = tree
        .feature()
        .map(|feature| {
            feature
                .children()
                .map(|child| (child.id(), child.kind()))
                .collect()
        })
        .unwrap_or_default();

    let mut suggestions = Vec::new();
    for (section, kind) in sections {
        match kind {
            NodeKind::Background => {
                collect_missing(tree, section, &candidates, chain, &mut suggestions);
            }
            NodeKind::Scenario => {
                let saved = tree
                    .node(section)
                    .map(|scenario| scenario.row_indices().to_vec())
                    .unwrap_or_default();
                if let Some(first) = tree.schedule(section).first().cloned() {
                    tree.set_row_indices(section, first);
                }
                collect_missing(tree, section, &candidates, chain, &mut suggestions);
                tree.set_row_indices(section, saved);
            }
            _ => {}
        }
    }
    suggestions
}

fn collect_missing(
    tree: &FeatureTree,
    parent: NodeId,
    candidates: &[Candidate<'_>],
    chain: &MatcherChain,
    suggestions: &mut Vec<Suggestion>,
) {
    let Some(parent) = tree.node(parent) else {
        return;
    };
    for step in parent.children().filter(|child| child.kind().is_step()) {
        let predicate = step.predicate();
        if chain
            .find_in(candidates, predicate, &step.augmented_predicate())
            .is_some()
        {
            continue;
        }
        let suggestion = chain.suggest(predicate);
        if !suggestions.iter().any(|known| known.code == suggestion.code) {
            suggestions.push(suggestion);
        }
    }
}

/// Execute every scenario of `tree` against `fixture`.
///
/// With `show_all_missing`, every step is resolved up front and the run
/// fails with [`ExecutionError::UnmatchedSteps`] before any hook is called
/// if some are missing.
///
/// # Errors
///
/// Returns the first failure, wrapped with the feature, scenario and step
/// source active when it happened.
pub fn execute_script<F: Fixture>(
    tree: &mut FeatureTree,
    fixture: &mut F,
    chain: &MatcherChain,
    observers: &mut [&mut dyn VisitorObserver],
    show_all_missing: bool,
) -> Result<(), ScenarioFailure> {
    if show_all_missing {
        let suggestions = missing_steps(tree, &F::catalog(), chain);
        if !suggestions.is_empty() {
            log::debug!("{} step methods are missing", suggestions.len());
            return Err(ExecutionError::UnmatchedSteps { suggestions }.into());
        }
    }
    let Some(feature) = tree.feature().map(|feature| feature.id()) else {
        return Ok(());
    };
    let mut executor = Executor::new(tree, fixture, chain, observers);
    NodeKind::Feature
        .accept(feature, &mut executor)
        .map_err(|error| ScenarioFailure::new(error, Some(executor.breadcrumbs().to_string())))
}
