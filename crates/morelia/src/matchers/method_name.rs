//! Naming-convention matching.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use super::{Candidate, StepMatch, StepMatcher, Suggestion};

static NON_WORD_CHAR: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[^\w]").ok());

/// Matches the raw step text against method names.
///
/// Every non-word character of the step may appear in the name as an
/// underscore or be left out, so `I press add` matches `step_i_press_add`.
/// Comparison ignores case. No arguments are captured.
#[derive(Debug, Default)]
pub struct MethodNameMatcher;

impl MethodNameMatcher {
    fn name_pattern(predicate: &str) -> Option<Regex> {
        let clean = NON_WORD_CHAR.as_ref()?.replace_all(predicate, "_?");
        RegexBuilder::new(&format!("^(?:step_|given_|when_|then_){clean}$"))
            .case_insensitive(true)
            .build()
            .inspect_err(|error| log::debug!("cannot match {predicate:?} by name: {error}"))
            .ok()
    }
}

impl StepMatcher for MethodNameMatcher {
    fn find_match(
        &self,
        candidates: &[Candidate<'_>],
        predicate: &str,
        _augmented: &str,
    ) -> Option<StepMatch> {
        let pattern = Self::name_pattern(predicate)?;
        candidates
            .iter()
            .find(|candidate| pattern.is_match(candidate.name))
            .map(|candidate| StepMatch::bare(candidate.index))
    }

    fn suggest(&self, predicate: &str) -> Suggestion {
        Suggestion::for_method_name(predicate)
    }
}
