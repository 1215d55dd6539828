//! Tree traversal that runs step methods against a fixture.

use std::time::Instant;

use crate::fixture::{Fixture, LABELS_PARAM, MethodCatalog, StepArgs, StepError, TEXT_PARAM};
use crate::grammar::{FeatureTree, NodeId, NodeRef, Visitor};
use crate::localization;
use crate::matchers::{Candidate, MatcherChain, candidates};

use super::panic::{invoke_hook, invoke_step_handler};
use super::{Breadcrumbs, ExecutionError, MissingStep, StepReport, StepStatus, VisitorObserver};

/// Walks one feature, calling fixture hooks, step methods and observers.
pub(crate) struct Executor<'a, 'o, F: Fixture> {
    tree: &'a mut FeatureTree,
    fixture: &'a mut F,
    catalog: MethodCatalog<F>,
    candidates: Vec<Candidate<'static>>,
    chain: &'a MatcherChain,
    observers: &'a mut [&'o mut dyn VisitorObserver],
    breadcrumbs: Breadcrumbs,
}

impl<'a, 'o, F: Fixture> Executor<'a, 'o, F> {
    pub(crate) fn new(
        tree: &'a mut FeatureTree,
        fixture: &'a mut F,
        chain: &'a MatcherChain,
        observers: &'a mut [&'o mut dyn VisitorObserver],
    ) -> Self {
        let catalog = F::catalog();
        let candidates = candidates(&catalog);
        Self {
            tree,
            fixture,
            catalog,
            candidates,
            chain,
            observers,
            breadcrumbs: Breadcrumbs::default(),
        }
    }

    pub(crate) fn breadcrumbs(&self) -> &Breadcrumbs {
        &self.breadcrumbs
    }

    /// Deliver one event to the breadcrumbs, then to every observer.
    fn notify(&mut self, id: NodeId, event: impl Fn(&mut dyn VisitorObserver, NodeRef<'_>)) {
        let Some(node) = self.tree.node(id) else {
            return;
        };
        event(&mut self.breadcrumbs, node);
        for observer in self.observers.iter_mut() {
            event(&mut **observer, node);
        }
    }

    fn hook(&mut self, name: &'static str, hook: fn(&mut F)) -> Result<(), ExecutionError> {
        invoke_hook(name, hook, self.fixture)
    }

    fn visit_children(&mut self, id: NodeId) -> Result<(), ExecutionError> {
        let children: Vec<(NodeId, _)> = self
            .tree
            .node(id)
            .map(|node| node.children().map(|child| (child.id(), child.kind())).collect())
            .unwrap_or_default();
        for (child, kind) in children {
            kind.accept(child, self)?;
        }
        Ok(())
    }

    fn visit_generic(&mut self, id: NodeId) -> Result<(), ExecutionError> {
        self.notify(id, |observer, node| observer.node_started(node));
        let outcome = self.visit_children(id);
        self.notify(id, |observer, node| observer.node_finished(node));
        outcome
    }

    fn execute_step(&mut self, id: NodeId) -> Result<(), ExecutionError> {
        let Some(node) = self.tree.node(id) else {
            return Ok(());
        };
        let predicate = node.predicate().to_owned();
        let augmented = node.augmented_predicate().into_owned();
        let step = format!("{} {augmented}", node.keyword());

        let found = self
            .chain
            .find_in(&self.candidates, &predicate, &augmented)
            .and_then(|found| self.catalog.get(found.index).map(|method| (*method, found)));
        let Some((method, found)) = found else {
            let suggestion = self.chain.suggest(&predicate);
            log::debug!("no step method matches {predicate:?}");
            return Err(ExecutionError::MissingStep(
                MissingStep {
                    predicate,
                    suggestion,
                }
                .into(),
            ));
        };
        log::debug!("{step:?} runs {}", method.name());

        let mut args = StepArgs::new(found.args, found.kwargs, method.params());
        if method.declares(LABELS_PARAM) {
            args = args.with_labels(node.labels());
        }
        if method.declares(TEXT_PARAM) {
            args = args.with_text(node.payload().to_owned());
        }

        match invoke_step_handler(method.handler(), self.fixture, &args) {
            Ok(Ok(())) => Ok(()),
            Ok(Err(StepError::Failed(message))) => Err(ExecutionError::StepFailed {
                step,
                message,
                backtrace: None,
            }),
            Ok(Err(StepError::Errored(error))) => Err(ExecutionError::StepErrored {
                step,
                error: error.into(),
            }),
            Ok(Err(StepError::Exit(code))) => Err(ExecutionError::Exit { step, code }),
            Err(panic) => Err(ExecutionError::StepFailed {
                step,
                message: panic.message,
                backtrace: panic.backtrace,
            }),
        }
    }
}

impl<F: Fixture> Visitor for Executor<'_, '_, F> {
    type Error = ExecutionError;

    fn visit_feature(&mut self, id: NodeId) -> Result<(), ExecutionError> {
        let set_up = self.hook("set_up_feature", F::set_up_feature);
        self.notify(id, |observer, node| observer.feature_started(node));
        let outcome = set_up.and_then(|()| self.visit_children(id));
        let tear_down = self.hook("tear_down_feature", F::tear_down_feature);
        self.notify(id, |observer, node| observer.feature_finished(node));
        outcome.and(tear_down)
    }

    fn visit_background(&mut self, id: NodeId) -> Result<(), ExecutionError> {
        self.notify(id, |observer, node| observer.node_started(node));
        self.notify(id, |observer, node| observer.node_finished(node));
        Ok(())
    }

    fn visit_scenario(&mut self, id: NodeId) -> Result<(), ExecutionError> {
        self.tree.prepend_background(id);
        let Some(scenario) = self.tree.node(id) else {
            return Ok(());
        };
        if scenario.children().next().is_none() {
            let message = localization::message("syntax-scenario-without-steps");
            return Err(self.tree.syntax_error(id, message).into());
        }
        let saved = scenario.row_indices().to_vec();

        let mut outcome = Ok(());
        for indices in self.tree.schedule(id) {
            self.tree.set_row_indices(id, indices);
            let set_up = self.hook("set_up_scenario", F::set_up_scenario);
            self.notify(id, |observer, node| observer.scenario_started(node));
            outcome = set_up.and_then(|()| self.visit_children(id));
            let tear_down = self.hook("tear_down_scenario", F::tear_down_scenario);
            self.notify(id, |observer, node| observer.scenario_finished(node));
            outcome = outcome.and(tear_down);
            if outcome.is_err() {
                break;
            }
        }
        self.tree.set_row_indices(id, saved);
        outcome
    }

    fn visit_step(&mut self, id: NodeId) -> Result<(), ExecutionError> {
        self.notify(id, |observer, node| observer.step_started(node));
        let started = Instant::now();
        let outcome = self
            .hook("set_up_step", F::set_up_step)
            .and_then(|()| self.execute_step(id))
            .and_then(|()| self.visit_children(id));
        let tear_down = self.hook("tear_down_step", F::tear_down_step);
        let outcome = outcome.and(tear_down);
        let status = match &outcome {
            Ok(()) => StepStatus::Passed,
            Err(error) if error.is_failure() => {
                self.notify(id, |observer, node| observer.step_failed(node, error));
                StepStatus::Failed
            }
            Err(error) => {
                self.notify(id, |observer, node| observer.step_errored(node, error));
                StepStatus::Errored
            }
        };

        let report = StepReport {
            status,
            duration: started.elapsed(),
        };
        self.notify(id, |observer, node| observer.step_finished(node, &report));
        outcome
    }

    fn visit_row(&mut self, id: NodeId) -> Result<(), ExecutionError> {
        self.visit_generic(id)
    }

    fn visit_examples(&mut self, id: NodeId) -> Result<(), ExecutionError> {
        self.visit_generic(id)
    }

    fn visit_comment(&mut self, id: NodeId) -> Result<(), ExecutionError> {
        self.visit_generic(id)
    }
}
