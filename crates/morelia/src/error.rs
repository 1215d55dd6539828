//! Crate-level error type returned by the entry points.

use thiserror::Error;

use crate::config::ConfigError;
use crate::execution::{ExecutionError, ScenarioFailure};
use crate::parser::ParseError;
use crate::source::SourceError;

/// Why [`verify`](crate::verify) or [`run`](crate::run) failed.
///
/// Every variant forwards its message, so `{:#}` on an execution failure
/// still shows the step backtrace.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The feature text could not be loaded.
    #[error(transparent)]
    Source(#[from] SourceError),
    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The feature text is not a valid document.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A scenario failed while running.
    #[error(transparent)]
    Execution(#[from] ScenarioFailure),
}

impl Error {
    /// Returns `true` when a scenario ran and failed.
    #[must_use]
    pub fn is_execution(&self) -> bool {
        matches!(self, Self::Execution(_))
    }

    /// Returns `true` for parse failures.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// The execution error behind a scenario failure.
    #[must_use]
    pub fn execution_error(&self) -> Option<&ExecutionError> {
        match self {
            Self::Execution(failure) => Some(failure.error()),
            _ => None,
        }
    }
}
