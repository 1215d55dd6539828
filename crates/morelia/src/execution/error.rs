//! Error types for step execution failures.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use i18n_embed::fluent::FluentLanguageLoader;

use crate::grammar::SyntaxError;
use crate::localization;
use crate::matchers::Suggestion;

/// Why a feature stopped executing.
///
/// Missing steps and failed expectations count as failures; everything a
/// step raises otherwise, including exit requests, counts as an error, and
/// so does a panicking fixture hook.
///
/// # Examples
///
/// ```
/// use morelia::execution::ExecutionError;
///
/// let error = ExecutionError::Exit { step: "When I quit".into(), code: 2 };
/// assert!(error.is_exit());
/// assert!(!error.is_failure());
/// ```
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum ExecutionError {
    /// The tree broke a rule only checked during traversal.
    Syntax(SyntaxError),
    /// The pre-scan found steps without a matching method.
    UnmatchedSteps {
        /// One suggestion per distinct missing method, in step order.
        suggestions: Vec<Suggestion>,
    },
    /// No method matches the step.
    ///
    /// Boxed in `Arc` to keep `Result<_, ExecutionError>` small.
    MissingStep(Arc<MissingStep>),
    /// The step method reported a failed expectation or panicked.
    StepFailed {
        /// Keyword and resolved text of the step.
        step: String,
        /// Failure message.
        message: String,
        /// Trimmed backtrace of a panicking step.
        backtrace: Option<String>,
    },
    /// The step method returned any other error.
    StepErrored {
        /// Keyword and resolved text of the step.
        step: String,
        /// The error returned by the method.
        error: Arc<dyn StdError + Send + Sync>,
    },
    /// The step method asked the process to exit.
    Exit {
        /// Keyword and resolved text of the step.
        step: String,
        /// Requested exit status.
        code: i32,
    },
    /// A fixture hook panicked. The paired teardown hooks still ran.
    HookFailed {
        /// Name of the hook, for example `set_up_scenario`.
        hook: &'static str,
        /// Panic message.
        message: String,
        /// Trimmed backtrace of the panic.
        backtrace: Option<String>,
    },
}

/// Details of a step without matching method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingStep {
    /// Step text as written.
    pub predicate: String,
    /// Stub the first matcher of the chain would recognize.
    pub suggestion: Suggestion,
}

impl ExecutionError {
    /// Returns `true` for missing steps and failed expectations.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::MissingStep(_) | Self::StepFailed { .. })
    }

    /// Returns `true` for a missing step found during traversal.
    #[must_use]
    pub fn is_missing_step(&self) -> bool {
        matches!(self, Self::MissingStep(_))
    }

    /// Returns `true` for the pre-scan diagnostic.
    #[must_use]
    pub fn is_unmatched_steps(&self) -> bool {
        matches!(self, Self::UnmatchedSteps { .. })
    }

    /// Returns `true` for an exit request.
    #[must_use]
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit { .. })
    }

    /// Returns `true` when a fixture hook panicked.
    #[must_use]
    pub fn is_hook_failure(&self) -> bool {
        matches!(self, Self::HookFailed { .. })
    }

    /// Suggestions carried by missing-step diagnostics.
    #[must_use]
    pub fn suggestions(&self) -> Vec<&Suggestion> {
        match self {
            Self::UnmatchedSteps { suggestions } => suggestions.iter().collect(),
            Self::MissingStep(missing) => vec![&missing.suggestion],
            _ => Vec::new(),
        }
    }

    /// Backtrace captured from a panicking step or hook.
    #[must_use]
    pub fn backtrace(&self) -> Option<&str> {
        match self {
            Self::StepFailed { backtrace, .. } | Self::HookFailed { backtrace, .. } => {
                backtrace.as_deref()
            }
            _ => None,
        }
    }

    /// Render the error message using the provided Fluent loader.
    #[must_use]
    pub fn format_with_loader(&self, loader: &FluentLanguageLoader) -> String {
        match self {
            Self::Syntax(error) => error.to_string(),
            Self::UnmatchedSteps { suggestions } => {
                let header = loader.get("execution-error-unmatched-steps");
                let codes: String = suggestions.iter().map(|s| s.code.as_str()).collect();
                format!("{header}\n\n{codes}")
            }
            Self::MissingStep(missing) => {
                let header = localization::message_with_loader(
                    loader,
                    "execution-error-missing-step",
                    |args| args.set("predicate", missing.predicate.clone()),
                );
                format!("{header}\n\n{}", missing.suggestion.code)
            }
            Self::StepFailed { step, message, .. } => localization::message_with_loader(
                loader,
                "execution-error-step-failed",
                |args| {
                    args.set("step", step.clone());
                    args.set("message", message.clone());
                },
            ),
            Self::StepErrored { step, error } => localization::message_with_loader(
                loader,
                "execution-error-step-errored",
                |args| {
                    args.set("step", step.clone());
                    args.set("error", error.to_string());
                },
            ),
            Self::Exit { step, code } => localization::message_with_loader(
                loader,
                "execution-error-step-exit",
                |args| {
                    args.set("step", step.clone());
                    args.set("code", code.to_string());
                },
            ),
            Self::HookFailed { hook, message, .. } => localization::message_with_loader(
                loader,
                "execution-error-hook-failed",
                |args| {
                    args.set("hook", *hook);
                    args.set("message", message.clone());
                },
            ),
        }
    }
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = localization::with_loader(|loader| self.format_with_loader(loader));
        f.write_str(&message)
    }
}

impl StdError for ExecutionError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Syntax(error) => Some(error),
            Self::StepErrored { error, .. } => Some(error.as_ref()),
            _ => None,
        }
    }
}

impl From<SyntaxError> for ExecutionError {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

/// An [`ExecutionError`] together with the Gherkin lines that led to it.
///
/// `{}` renders the error followed by the feature, scenario and step
/// source active when it happened. `{:#}` also appends the step backtrace
/// when one was captured.
#[derive(Debug, Clone)]
pub struct ScenarioFailure {
    error: ExecutionError,
    breadcrumbs: Option<String>,
}

impl ScenarioFailure {
    /// Wrap `error` with the rendered breadcrumbs, if any.
    #[must_use]
    pub fn new(error: ExecutionError, breadcrumbs: Option<String>) -> Self {
        Self { error, breadcrumbs }
    }

    /// The underlying error.
    #[must_use]
    pub fn error(&self) -> &ExecutionError {
        &self.error
    }

    /// Feature, scenario and step source active at the failure.
    #[must_use]
    pub fn breadcrumbs(&self) -> Option<&str> {
        self.breadcrumbs.as_deref()
    }

    /// Unwrap the underlying error.
    #[must_use]
    pub fn into_error(self) -> ExecutionError {
        self.error
    }
}

impl fmt::Display for ScenarioFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        if let Some(breadcrumbs) = &self.breadcrumbs {
            f.write_str(breadcrumbs)?;
        }
        match self.error.backtrace() {
            Some(trace) if f.alternate() => {
                let header = localization::message("execution-error-backtrace");
                write!(f, "\n{header}\n{trace}")
            }
            _ => Ok(()),
        }
    }
}

impl StdError for ScenarioFailure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.error)
    }
}

impl From<ExecutionError> for ScenarioFailure {
    fn from(error: ExecutionError) -> Self {
        Self::new(error, None)
    }
}
