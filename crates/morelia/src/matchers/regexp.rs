//! Regular-expression patterns.

use std::cell::RefCell;

use hashbrown::HashMap;
use morelia_patterns::extract_captures;
use regex::Regex;

use super::{Candidate, StepMatch, StepMatcher};

/// Matches the placeholder-resolved step text against method patterns read
/// as regular expressions anchored at both ends.
///
/// The first method in declaration order wins. When the pattern has named
/// groups only those are passed, as named arguments; otherwise every group
/// is passed positionally.
///
/// # Examples
/// ```
/// use morelia::matchers::{Candidate, RegexMatcher, StepMatcher};
///
/// let candidates = [Candidate {
///     index: 0,
///     name: "step_enter",
///     pattern: Some(r#"I enter "(\d+)""#),
/// }];
/// let found = RegexMatcher::default()
///     .find_match(&candidates, r#"I enter "50""#, r#"I enter "50""#)
///     .expect("pattern matches");
/// assert_eq!(found.args, vec!["50".to_owned()]);
/// ```
#[derive(Debug, Default)]
pub struct RegexMatcher {
    compiled: RefCell<HashMap<String, Option<Regex>>>,
}

impl RegexMatcher {
    fn compile(&self, pattern: &str) -> Option<Regex> {
        let mut compiled = self.compiled.borrow_mut();
        compiled
            .entry(pattern.to_owned())
            .or_insert_with(|| {
                Regex::new(&format!("^(?:{pattern})$"))
                    .inspect_err(|error| log::debug!("skipping step pattern {pattern:?}: {error}"))
                    .ok()
            })
            .clone()
    }
}

impl StepMatcher for RegexMatcher {
    fn find_match(
        &self,
        candidates: &[Candidate<'_>],
        _predicate: &str,
        augmented: &str,
    ) -> Option<StepMatch> {
        candidates.iter().find_map(|candidate| {
            let regex = self.compile(candidate.pattern?)?;
            let captures = extract_captures(&regex, augmented)?;
            let mut found = StepMatch::bare(candidate.index);
            if captures.iter().any(|capture| capture.name.is_some()) {
                found.kwargs = captures
                    .into_iter()
                    .filter_map(|capture| capture.name.map(|name| (name, capture.value)))
                    .collect();
            } else {
                found.args = captures.into_iter().map(|capture| capture.value).collect();
            }
            Some(found)
        })
    }
}
