//! Format-string patterns.

use std::cell::RefCell;

use hashbrown::HashMap;
use morelia_patterns::{compile_regex_from_pattern, extract_captures};
use regex::Regex;

use super::{Candidate, StepMatch, StepMatcher, Suggestion};

/// Matches the placeholder-resolved step text against method patterns read
/// as format strings (`{name}`, `{}` and typed `{name:d}` placeholders).
///
/// Matching ignores case. When several methods match, the one capturing the
/// most values wins; ties go to the method declared first.
#[derive(Debug, Default)]
pub struct FormatMatcher {
    compiled: RefCell<HashMap<String, Option<Regex>>>,
}

impl FormatMatcher {
    fn compile(&self, pattern: &str) -> Option<Regex> {
        self.compiled
            .borrow_mut()
            .entry(pattern.to_owned())
            .or_insert_with(|| {
                compile_regex_from_pattern(pattern)
                    .inspect_err(|error| log::debug!("skipping format pattern {pattern:?}: {error}"))
                    .ok()
            })
            .clone()
    }

    fn try_candidate(&self, candidate: &Candidate<'_>, augmented: &str) -> Option<StepMatch> {
        let regex = self.compile(candidate.pattern?)?;
        let captures = extract_captures(&regex, augmented)?;
        let mut found = StepMatch::bare(candidate.index);
        for capture in captures {
            match capture.name {
                Some(name) => {
                    found.kwargs.insert(name, capture.value);
                }
                None => found.args.push(capture.value),
            }
        }
        Some(found)
    }
}

impl StepMatcher for FormatMatcher {
    fn find_match(
        &self,
        candidates: &[Candidate<'_>],
        _predicate: &str,
        augmented: &str,
    ) -> Option<StepMatch> {
        let mut best: Option<StepMatch> = None;
        for found in candidates
            .iter()
            .filter_map(|candidate| self.try_candidate(candidate, augmented))
        {
            if best.as_ref().is_none_or(|current| found.arity() > current.arity()) {
                best = Some(found);
            }
        }
        best
    }

    fn suggest(&self, predicate: &str) -> Suggestion {
        Suggestion::for_format(predicate)
    }
}
