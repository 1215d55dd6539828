//! Node kinds, their parent rules and their line recognizers.

use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use hashbrown::HashMap;
use regex::Regex;

use crate::keywords::{self, Translation};

type RecognizerCache = HashMap<(NodeKind, String), Arc<Regex>>;

static RECOGNIZERS: LazyLock<RwLock<RecognizerCache>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// The closed set of grammar elements a feature file is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Root of every tree.
    Feature,
    /// Steps prepended to each scenario of the feature.
    Background,
    /// A scenario or scenario outline.
    Scenario,
    /// `Given` step.
    Given,
    /// `When` step.
    When,
    /// `Then` step.
    Then,
    /// `And` step.
    And,
    /// `But` step, a variant of `And`.
    But,
    /// One line of a pipe-delimited table.
    Row,
    /// A `#` comment.
    Comment,
    /// Example table block of a scenario outline.
    Examples,
    /// Generic `Step` keyword.
    Step,
}

/// Which nodes a kind may attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParentRule {
    /// The kind never has a parent.
    Root,
    /// Any node is an acceptable parent.
    Any,
    /// Only the listed kinds are acceptable parents.
    OneOf(&'static [NodeKind]),
}

const STEP_KINDS: &[NodeKind] = &[
    NodeKind::Given,
    NodeKind::When,
    NodeKind::Then,
    NodeKind::And,
    NodeKind::But,
    NodeKind::Step,
];

const TABLE_OWNERS: &[NodeKind] = &[
    NodeKind::Given,
    NodeKind::When,
    NodeKind::Then,
    NodeKind::And,
    NodeKind::But,
    NodeKind::Step,
    NodeKind::Examples,
];

/// A line accepted by a node recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recognized<'a> {
    /// Keyword text as written in the line.
    pub keyword: &'a str,
    /// Byte offset in the line where the predicate starts.
    pub predicate_start: usize,
}

impl NodeKind {
    /// Recognition order; the generic `Step` comes last as a catch-all.
    pub const PRIORITY: [Self; 12] = [
        Self::Feature,
        Self::Background,
        Self::Scenario,
        Self::Given,
        Self::When,
        Self::Then,
        Self::And,
        Self::But,
        Self::Row,
        Self::Comment,
        Self::Examples,
        Self::Step,
    ];

    /// Whether nodes of this kind are executed as steps.
    #[must_use]
    pub fn is_step(self) -> bool {
        STEP_KINDS.contains(&self)
    }

    /// English name of the kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Feature => "Feature",
            Self::Background => "Background",
            Self::Scenario => "Scenario",
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
            Self::But => "But",
            Self::Row => "Row",
            Self::Comment => "Comment",
            Self::Examples => "Examples",
            Self::Step => "Step",
        }
    }

    pub(crate) fn parent_rule(self) -> ParentRule {
        match self {
            Self::Feature => ParentRule::Root,
            Self::Comment => ParentRule::Any,
            Self::Background | Self::Scenario => ParentRule::OneOf(&[Self::Feature]),
            Self::Examples => ParentRule::OneOf(&[Self::Scenario]),
            Self::Row => ParentRule::OneOf(TABLE_OWNERS),
            Self::Given | Self::When | Self::Then | Self::And | Self::But | Self::Step => {
                ParentRule::OneOf(&[Self::Scenario, Self::Background])
            }
        }
    }

    /// Whether a node of this kind may be attached below `parent`.
    #[must_use]
    pub fn accepts_parent(self, parent: Self) -> bool {
        match self.parent_rule() {
            ParentRule::Root => false,
            ParentRule::Any => true,
            ParentRule::OneOf(kinds) => kinds.contains(&parent),
        }
    }

    fn keyword_alternatives(self, translation: &Translation) -> &'static str {
        match self {
            Self::Feature => translation.feature,
            Self::Background => translation.background,
            Self::Scenario => translation.scenario,
            Self::Examples => translation.examples,
            Self::Given => translation.given,
            Self::When => translation.when,
            Self::Then => translation.then,
            Self::And => translation.and,
            Self::But => translation.but,
            Self::Row => r"\|",
            Self::Comment => "#",
            Self::Step => "Step",
        }
    }

    fn recognizer_source(self, translation: &Translation) -> String {
        let keyword = self.keyword_alternatives(translation);
        match self {
            Self::Row => format!(r"^\s*(?P<keyword>{keyword})\s*(?P<predicate>.*)$"),
            Self::Comment => format!(r"^\s*(?P<keyword>{keyword})(?P<predicate>.*)$"),
            _ => format!(r"^\s*(?P<keyword>{keyword}):?(?:\s+(?P<predicate>.*))?$"),
        }
    }

    /// The compiled recognizer of this kind for `language`.
    ///
    /// Recognizers are compiled once per `(kind, language)` pair and shared
    /// for the rest of the process. Returns `None` for unknown languages.
    #[must_use]
    pub fn recognizer(self, language: &str) -> Option<Arc<Regex>> {
        let key = (self, language.to_owned());
        if let Some(found) = RECOGNIZERS
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Some(Arc::clone(found));
        }
        let translation = keywords::translation(language)?;
        let regex = match Regex::new(&self.recognizer_source(translation)) {
            Ok(regex) => Arc::new(regex),
            Err(error) => {
                log::debug!("keyword table for {language} yields no {self:?} recognizer: {error}");
                return None;
            }
        };
        let mut cache = RECOGNIZERS.write().unwrap_or_else(PoisonError::into_inner);
        Some(Arc::clone(cache.entry(key).or_insert(regex)))
    }

    /// Test whether `line` opens a node of this kind in `language`.
    ///
    /// # Examples
    /// ```
    /// use morelia::grammar::NodeKind;
    ///
    /// let hit = NodeKind::Given.recognize("  Given a calculator", "en");
    /// assert_eq!(hit.map(|r| r.keyword), Some("Given"));
    /// assert!(NodeKind::When.recognize("Given a calculator", "en").is_none());
    /// ```
    #[must_use]
    pub fn recognize<'a>(self, line: &'a str, language: &str) -> Option<Recognized<'a>> {
        let regex = self.recognizer(language)?;
        let captures = regex.captures(line)?;
        let keyword = captures.name("keyword")?;
        let predicate_start = captures
            .name("predicate")
            .map_or(line.len(), |found| found.start());
        Some(Recognized {
            keyword: keyword.as_str(),
            predicate_start,
        })
    }

    /// Double-dispatch entry point: call the visitor method named for this kind.
    ///
    /// # Errors
    ///
    /// Propagates whatever the visitor method returns.
    pub fn accept<V: super::Visitor + ?Sized>(
        self,
        id: super::NodeId,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        match self {
            Self::Feature => visitor.visit_feature(id),
            Self::Background => visitor.visit_background(id),
            Self::Scenario => visitor.visit_scenario(id),
            Self::Given | Self::When | Self::Then | Self::And | Self::But | Self::Step => {
                visitor.visit_step(id)
            }
            Self::Row => visitor.visit_row(id),
            Self::Examples => visitor.visit_examples(id),
            Self::Comment => visitor.visit_comment(id),
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::{NodeKind, ParentRule};
    use rstest::rstest;

    #[rstest]
    #[case(NodeKind::Feature, "Feature: Addition", Some("Addition"))]
    #[case(NodeKind::Feature, "Ability: count", Some("count"))]
    #[case(NodeKind::Scenario, "Scenario Outline: add", Some("add"))]
    #[case(NodeKind::Scenario, "  Scenario: add", Some("add"))]
    #[case(NodeKind::Given, "Given I have a calculator", Some("I have a calculator"))]
    #[case(NodeKind::Row, "  | a | b |", Some("a | b |"))]
    #[case(NodeKind::Comment, "# note", Some(" note"))]
    #[case(NodeKind::Step, "Step: anything", Some("anything"))]
    #[case(NodeKind::Examples, "Scenarios: more", Some("more"))]
    #[case(NodeKind::Scenario, "Scenarios: more", None)]
    #[case(NodeKind::Given, "Givenness", None)]
    fn recognizes_english_lines(
        #[case] kind: NodeKind,
        #[case] line: &str,
        #[case] predicate: Option<&str>,
    ) {
        let found = kind
            .recognize(line, "en")
            .map(|hit| line.get(hit.predicate_start..).unwrap_or_default());
        assert_eq!(found, predicate);
    }

    #[test]
    fn keyword_without_predicate_yields_empty_predicate() {
        let line = "Background:";
        let hit = NodeKind::Background
            .recognize(line, "en")
            .unwrap_or_else(|| panic!("background line should be recognized"));
        assert_eq!(hit.keyword, "Background");
        assert_eq!(hit.predicate_start, line.len());
    }

    #[test]
    fn recognizers_follow_the_language() {
        assert!(NodeKind::Given.recognize("Zakładając, że mam", "pl").is_some());
        assert!(NodeKind::Given.recognize("Given I have", "pl").is_none());
        assert!(NodeKind::Given.recognize("Given I have", "zz").is_none());
    }

    #[test]
    fn recognizers_are_cached() {
        let first = NodeKind::Then.recognizer("fr");
        let second = NodeKind::Then.recognizer("fr");
        match (first, second) {
            (Some(a), Some(b)) => assert!(std::sync::Arc::ptr_eq(&a, &b)),
            _ => panic!("French recognizers should compile"),
        }
    }

    #[rstest]
    #[case(NodeKind::Scenario, NodeKind::Feature, true)]
    #[case(NodeKind::Scenario, NodeKind::Background, false)]
    #[case(NodeKind::But, NodeKind::Background, true)]
    #[case(NodeKind::Row, NodeKind::Examples, true)]
    #[case(NodeKind::Row, NodeKind::Scenario, false)]
    #[case(NodeKind::Comment, NodeKind::Row, true)]
    #[case(NodeKind::Feature, NodeKind::Feature, false)]
    fn parent_rules(#[case] child: NodeKind, #[case] parent: NodeKind, #[case] allowed: bool) {
        assert_eq!(child.accepts_parent(parent), allowed);
    }

    #[test]
    fn only_feature_is_a_root() {
        let roots: Vec<_> = NodeKind::PRIORITY
            .into_iter()
            .filter(|kind| kind.parent_rule() == ParentRule::Root)
            .collect();
        assert_eq!(roots, vec![NodeKind::Feature]);
    }
}
