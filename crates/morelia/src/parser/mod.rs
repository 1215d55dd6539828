//! Feature document parser.
//!
//! Lines are classified in a fixed order: language directive, label line,
//! docstring block, node keyword, and finally continuation of the previous
//! node. Node keywords are recognized through [`NodeKind::recognize`] with the
//! keyword table of the active language.

mod directives;
mod docstring;
mod error;
mod lines;

use std::sync::LazyLock;

use regex::Regex;

use crate::grammar::{FeatureTree, Node, NodeId, NodeKind, SyntaxError};
use crate::keywords::{self, DEFAULT_LANGUAGE};
use crate::localization;
use crate::tags::Tags;

pub use error::ParseError;

use directives::LabelBuffer;
use lines::LineSource;

static CONTINUATION: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\\\s*$").ok());

/// Display name used for documents that did not come from a file.
pub const STDIN_NAME: &str = "<stdin>";

/// Parser configuration.
///
/// # Examples
/// ```
/// use morelia::parser::Parser;
///
/// let tree = Parser::new()
///     .parse("Feature: F\nScenario: S\nGiven a", "inline.feature")
///     .expect("valid document");
/// let feature = tree.feature().expect("root");
/// assert_eq!(feature.predicate(), "F");
/// assert_eq!(feature.children().count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    language: String,
    scenario: Option<String>,
    tags: Tags,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Parser for English documents without a scenario filter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_owned(),
            scenario: None,
            tags: Tags::default(),
        }
    }

    /// Language used until a `# language:` directive says otherwise.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Keep only scenarios whose predicate matches `pattern` at its start.
    #[must_use]
    pub fn with_scenario_filter(mut self, pattern: impl Into<String>) -> Self {
        self.scenario = Some(pattern.into());
        self
    }

    /// Drop scenarios whose labels, inherited ones included, `tags` skips.
    ///
    /// Unlike the scenario filter, a feature left with no scenario this way
    /// is not an error.
    #[must_use]
    pub fn with_tags(mut self, tags: Tags) -> Self {
        self.tags = tags;
        self
    }

    /// Parse `text`, reporting errors against `filename`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Syntax`] when the document breaks a grammar rule
    /// and [`ParseError::InvalidScenarioPattern`] when the scenario filter does
    /// not compile.
    pub fn parse(&self, text: &str, filename: &str) -> Result<FeatureTree, ParseError> {
        let filter = self
            .scenario
            .as_deref()
            .map(|pattern| {
                Regex::new(&format!("^(?:{pattern})")).map_err(|source| {
                    ParseError::InvalidScenarioPattern {
                        pattern: pattern.to_owned(),
                        source,
                    }
                })
            })
            .transpose()?;

        let mut state = ParseState {
            lines: LineSource::new(text),
            tree: FeatureTree::new(filename),
            language: self.language.clone(),
            labels: LabelBuffer::default(),
        };
        while let Some(line) = state.lines.next() {
            state.parse_line(line)?;
        }
        state.finish(filter.as_ref(), &self.tags)
    }
}

/// Parse an English document with no filter.
///
/// # Errors
///
/// See [`Parser::parse`].
pub fn parse(text: &str) -> Result<FeatureTree, ParseError> {
    Parser::new().parse(text, STDIN_NAME)
}

struct ParseState<'a> {
    lines: LineSource<'a>,
    tree: FeatureTree,
    language: String,
    labels: LabelBuffer,
}

impl<'a> ParseState<'a> {
    fn parse_line(&mut self, line: &'a str) -> Result<(), SyntaxError> {
        if let Some(code) = directives::language(line) {
            if keywords::translation(code).is_none() {
                let message = localization::message_with_args("syntax-unknown-language", |args| {
                    args.set("language", code.to_owned());
                });
                return Err(self.line_error(line, message));
            }
            log::trace!("switching keywords to {code}");
            code.clone_into(&mut self.language);
            return Ok(());
        }

        if self.labels.parse(line) {
            return Ok(());
        }

        if docstring::is_delimiter(line) {
            let Some(payload) = docstring::collect(line, &mut self.lines) else {
                let message = localization::message("syntax-unterminated-docstring");
                return Err(self.line_error(line, message));
            };
            let Some(previous) = self.tree.last_id() else {
                let message = localization::message("syntax-orphan-docstring");
                return Err(self.line_error(line, message));
            };
            self.tree.set_payload(previous, payload);
            return Ok(());
        }

        if self.parse_node(line)?.is_some() {
            return Ok(());
        }

        let Some(previous) = self.tree.last_id() else {
            let message = missing_feature_message(&self.language);
            return Err(self.line_error(line, message));
        };
        self.tree.append_line(previous, line)
    }

    fn parse_node(&mut self, line: &'a str) -> Result<Option<NodeId>, SyntaxError> {
        let line_number = self.lines.line_number();
        let first = line.trim_end();
        for kind in NodeKind::PRIORITY {
            let Some(hit) = kind.recognize(first, &self.language) else {
                continue;
            };
            if self.tree.feature().is_none()
                && !matches!(kind, NodeKind::Feature | NodeKind::Comment)
            {
                let message = missing_feature_message(&self.language);
                return Err(SyntaxError::new(
                    self.tree.filename(),
                    line_number,
                    first.trim(),
                    message,
                ));
            }
            let source = self.fold(first);
            log::trace!("line {line_number} opens a {kind} node");
            let node = Node::new(
                kind,
                hit.keyword,
                source,
                hit.predicate_start,
                line_number,
                &self.language,
                self.labels.take(),
            );
            return self.tree.attach(node).map(Some);
        }
        Ok(None)
    }

    /// Join lines ending with a backslash to the lines that follow them.
    fn fold(&mut self, first: &str) -> String {
        let mut source = first.to_owned();
        let Some(marker) = CONTINUATION.as_ref() else {
            return source;
        };
        let mut current = first;
        while marker.is_match(current) {
            let Some(next) = self.lines.next() else {
                break;
            };
            source.push('\n');
            source.push_str(next);
            current = next;
        }
        source
    }

    fn line_error(&self, line: &str, message: String) -> SyntaxError {
        SyntaxError::new(
            self.tree.filename(),
            self.lines.line_number(),
            line.trim(),
            message,
        )
    }

    fn finish(mut self, filter: Option<&Regex>, tags: &Tags) -> Result<FeatureTree, ParseError> {
        let Some(feature) = self.tree.feature().map(|feature| feature.id()) else {
            let message = missing_feature_message(&self.language);
            let line = self
                .tree
                .nodes()
                .next()
                .map_or_else(|| self.lines.line_number(), |node| node.line());
            return Err(SyntaxError::new(self.tree.filename(), line, "", message).into());
        };

        let kept: Vec<NodeId> = self
            .tree
            .feature()
            .into_iter()
            .flat_map(|feature| feature.children())
            .filter(|child| match child.kind() {
                NodeKind::Background => true,
                NodeKind::Scenario => {
                    filter.is_none_or(|pattern| pattern.is_match(child.predicate()))
                }
                _ => false,
            })
            .map(|child| child.id())
            .collect();
        let has_scenario = kept.iter().any(|id| {
            self.tree
                .node(*id)
                .is_some_and(|node| node.kind() == NodeKind::Scenario)
        });
        if !has_scenario {
            let message = localization::message("syntax-feature-without-scenario");
            return Err(self.tree.syntax_error(feature, message).into());
        }

        let selected: Vec<NodeId> = kept
            .into_iter()
            .filter(|id| {
                self.tree.node(*id).is_some_and(|node| {
                    node.kind() != NodeKind::Scenario || !tags.should_skip(&node.labels())
                })
            })
            .collect();
        if !tags.is_empty() {
            log::debug!("tags {tags:?} keep {} top-level nodes", selected.len());
        }
        self.tree.set_children(feature, selected);
        Ok(self.tree)
    }
}

fn missing_feature_message(language: &str) -> String {
    let separator = format!(" {} ", localization::message("syntax-keyword-separator"));
    let keywords = keywords::translation(language)
        .map_or("Feature", |translation| translation.feature)
        .replace('|', &separator);
    localization::message_with_args("syntax-missing-feature", |args| {
        args.set("keywords", keywords);
    })
}

#[cfg(test)]
mod tests;
