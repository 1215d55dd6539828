//! Structural errors raised while building or validating a tree.

use std::fmt;

use crate::localization;

/// A feature file broke a grammar rule.
///
/// Carries the file name, the 1-based line number of the offending node and a
/// reconstruction of the node and its parent with tab indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    file: String,
    line: usize,
    snippet: String,
    message: String,
}

impl SyntaxError {
    /// Build an error from its parts.
    #[must_use]
    pub fn new(
        file: impl Into<String>,
        line: usize,
        snippet: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            snippet: snippet.into(),
            message: message.into(),
        }
    }

    /// Name of the source the node came from.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Line number of the offending node.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Reconstructed source of the offending node and its parent.
    #[must_use]
    pub fn snippet(&self) -> &str {
        &self.snippet
    }

    /// The diagnostic without location information.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = localization::message_with_args("syntax-error", |args| {
            args.set("message", self.message.clone());
            args.set("file", self.file.clone());
            args.set("line", self.line.to_string());
        });
        f.write_str(&header)?;
        let snippet = self.snippet.trim();
        if !snippet.is_empty() {
            write!(f, "\n\t{snippet}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxError {}
