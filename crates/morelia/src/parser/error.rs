//! Errors returned by [`Parser::parse`](super::Parser::parse).

use std::fmt;

use crate::grammar::SyntaxError;
use crate::localization;

/// Parsing a feature document failed.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum ParseError {
    /// The document breaks a grammar rule.
    Syntax(SyntaxError),
    /// The scenario filter is not a valid regular expression.
    InvalidScenarioPattern {
        /// The filter as supplied.
        pattern: String,
        /// Why it failed to compile.
        source: regex::Error,
    },
}

impl ParseError {
    /// Returns `true` for grammar violations.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }

    /// Returns `true` for an uncompilable scenario filter.
    #[must_use]
    pub fn is_invalid_scenario_pattern(&self) -> bool {
        matches!(self, Self::InvalidScenarioPattern { .. })
    }

    /// The underlying syntax error, if any.
    #[must_use]
    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            Self::Syntax(error) => Some(error),
            Self::InvalidScenarioPattern { .. } => None,
        }
    }
}

impl From<SyntaxError> for ParseError {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(error) => fmt::Display::fmt(error, f),
            Self::InvalidScenarioPattern { pattern, source } => {
                let text = localization::message_with_args("parse-invalid-scenario-pattern", |args| {
                    args.set("pattern", pattern.clone());
                    args.set("error", source.to_string());
                });
                f.write_str(&text)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(error) => Some(error),
            Self::InvalidScenarioPattern { source, .. } => Some(source),
        }
    }
}
