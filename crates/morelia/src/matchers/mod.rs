//! Step matching.
//!
//! A [`MatcherChain`] resolves the text of a step to one of the methods of a
//! [`MethodCatalog`]. Each link implements [`StepMatcher`]; the chain asks
//! every link in order and stops at the first hit. When nothing matches, the
//! first link proposes a method stub through [`StepMatcher::suggest`].
//!
//! Three strategies are provided:
//!
//! - [`RegexMatcher`] treats the method pattern as a regular expression
//!   anchored at both ends. Named groups become named arguments, otherwise
//!   groups are passed positionally. The first method that matches wins.
//! - [`FormatMatcher`] treats the pattern as a format string such as
//!   `the result is "{number}"`. The method capturing the most arguments
//!   wins.
//! - [`MethodNameMatcher`] compares the method name itself with the step
//!   text, treating every non-word character as an optional underscore.

mod format;
mod method_name;
mod regexp;
mod suggest;

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use hashbrown::HashMap;
use regex::Regex;

use crate::fixture::MethodCatalog;
use crate::localization;

pub use format::FormatMatcher;
pub use method_name::MethodNameMatcher;
pub use regexp::RegexMatcher;
pub use suggest::{Suggestion, slugify};

static STEP_PREFIX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?:step_|given_|when_|then_)").ok());

/// A catalog entry eligible for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Position of the method in its catalog.
    pub index: usize,
    /// Method name.
    pub name: &'a str,
    /// Pattern attached to the method, if any.
    pub pattern: Option<&'a str>,
}

/// Catalog entries whose names carry a step prefix, in declaration order.
#[must_use]
pub fn candidates<F>(catalog: &MethodCatalog<F>) -> Vec<Candidate<'static>> {
    catalog
        .iter()
        .enumerate()
        .filter(|(_, method)| {
            STEP_PREFIX
                .as_ref()
                .is_some_and(|prefix| prefix.is_match(method.name()))
        })
        .map(|(index, method)| Candidate {
            index,
            name: method.name(),
            pattern: method.pattern(),
        })
        .collect()
}

/// A resolved step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepMatch {
    /// Catalog index of the matched method.
    pub index: usize,
    /// Positional captures.
    pub args: Vec<String>,
    /// Named captures.
    pub kwargs: HashMap<String, String>,
}

impl StepMatch {
    /// A match without captured arguments.
    #[must_use]
    pub fn bare(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    /// Number of captured values.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.args.len() + self.kwargs.len()
    }
}

/// One strategy of the matcher chain.
pub trait StepMatcher {
    /// Find a method for `predicate`.
    ///
    /// `augmented` is the predicate with outline placeholders resolved.
    /// Returns `None` when no candidate matches.
    fn find_match(
        &self,
        candidates: &[Candidate<'_>],
        predicate: &str,
        augmented: &str,
    ) -> Option<StepMatch>;

    /// Propose a method implementing `predicate`.
    fn suggest(&self, predicate: &str) -> Suggestion {
        Suggestion::for_regex(predicate)
    }
}

/// Name of a matching strategy, as used in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatcherKind {
    /// [`RegexMatcher`].
    Regex,
    /// [`FormatMatcher`].
    Parse,
    /// [`MethodNameMatcher`].
    Method,
}

impl MatcherKind {
    /// Default chain order.
    pub const DEFAULT_ORDER: [Self; 3] = [Self::Regex, Self::Parse, Self::Method];

    /// Configuration name of the strategy.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regex => "regex",
            Self::Parse => "parse",
            Self::Method => "method",
        }
    }

    fn build(self) -> Box<dyn StepMatcher> {
        match self {
            Self::Regex => Box::new(RegexMatcher::default()),
            Self::Parse => Box::new(FormatMatcher::default()),
            Self::Method => Box::new(MethodNameMatcher::default()),
        }
    }
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a matcher name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMatcher(pub String);

impl fmt::Display for UnknownMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = localization::message_with_args("config-unknown-matcher", |args| {
            args.set("name", self.0.clone());
        });
        f.write_str(&message)
    }
}

impl std::error::Error for UnknownMatcher {}

impl FromStr for MatcherKind {
    type Err = UnknownMatcher;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "regex" => Ok(Self::Regex),
            "parse" => Ok(Self::Parse),
            "method" => Ok(Self::Method),
            other => Err(UnknownMatcher(other.to_owned())),
        }
    }
}

/// Ordered chain of matching strategies.
pub struct MatcherChain {
    kinds: Vec<MatcherKind>,
    links: Vec<Box<dyn StepMatcher>>,
}

impl MatcherChain {
    /// Build a chain trying `kinds` in order.
    #[must_use]
    pub fn new(kinds: &[MatcherKind]) -> Self {
        Self {
            kinds: kinds.to_vec(),
            links: kinds.iter().map(|kind| kind.build()).collect(),
        }
    }

    /// Strategies of the chain, in order.
    #[must_use]
    pub fn kinds(&self) -> &[MatcherKind] {
        &self.kinds
    }

    /// Resolve a step against `catalog`.
    #[must_use]
    pub fn find<F>(
        &self,
        catalog: &MethodCatalog<F>,
        predicate: &str,
        augmented: &str,
    ) -> Option<StepMatch> {
        let candidates = candidates(catalog);
        self.find_in(&candidates, predicate, augmented)
    }

    /// Resolve a step against pre-filtered candidates.
    #[must_use]
    pub fn find_in(
        &self,
        candidates: &[Candidate<'_>],
        predicate: &str,
        augmented: &str,
    ) -> Option<StepMatch> {
        self.links
            .iter()
            .find_map(|link| link.find_match(candidates, predicate, augmented))
    }

    /// Stub proposal from the first strategy of the chain.
    #[must_use]
    pub fn suggest(&self, predicate: &str) -> Suggestion {
        self.links.first().map_or_else(
            || Suggestion::for_regex(predicate),
            |link| link.suggest(predicate),
        )
    }
}

impl Default for MatcherChain {
    fn default() -> Self {
        Self::new(&MatcherKind::DEFAULT_ORDER)
    }
}

impl fmt::Debug for MatcherChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MatcherChain").field(&self.kinds).finish()
    }
}
