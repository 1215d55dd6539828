//! The contract between feature files and the code that implements their steps.
//!
//! A fixture lists its step methods in a [`MethodCatalog`]. Each
//! [`StepMethod`] carries the method name, an optional pattern (regular
//! expression or format string) and the names of the parameters it expects.
//! Matchers only consider names starting with `step_`, `given_`, `when_` or
//! `then_`.
//!
//! ```
//! use morelia::{Fixture, MethodCatalog, StepArgs, StepResult, step};
//!
//! #[derive(Default)]
//! struct Calculator {
//!     stack: Vec<i64>,
//! }
//!
//! impl Calculator {
//!     fn step_enter(&mut self, args: &StepArgs) -> StepResult {
//!         self.stack.push(args.parse("number")?);
//!         Ok(())
//!     }
//! }
//!
//! impl Fixture for Calculator {
//!     fn catalog() -> MethodCatalog<Self> {
//!         MethodCatalog::new(vec![step!(
//!             Self::step_enter,
//!             r#"I enter "(\d+)" into the calculator"#,
//!             ["number"]
//!         )])
//!     }
//! }
//!
//! let catalog = Calculator::catalog();
//! assert_eq!(catalog.iter().next().map(|m| m.name()), Some("step_enter"));
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::str::FromStr;

use hashbrown::HashMap;

use crate::localization;

/// Parameter name that receives the step's labels.
pub const LABELS_PARAM: &str = "_labels";
/// Parameter name that receives the step's docstring.
pub const TEXT_PARAM: &str = "_text";

/// Outcome of a step method.
pub type StepResult = Result<(), StepError>;

/// Signature every step method is called through.
pub type StepFn<F> = fn(&mut F, &StepArgs) -> StepResult;

/// Failure reported by a step method.
#[derive(Debug)]
#[non_exhaustive]
pub enum StepError {
    /// An expectation did not hold. Reported as a step failure.
    Failed(String),
    /// Something else went wrong. Reported as a step error.
    Errored(Box<dyn StdError + Send + Sync>),
    /// The step asked the process to exit with a status code. Reported as a
    /// step error.
    Exit(i32),
}

impl StepError {
    /// A failed expectation.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    /// Wrap any error as a step error.
    #[must_use]
    pub fn errored(error: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::Errored(error.into())
    }

    /// Request a process exit.
    #[must_use]
    pub fn exit(code: i32) -> Self {
        Self::Exit(code)
    }

    /// Returns `true` for assertion-style failures.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Failed(message) => localization::message_with_args("step-error-failed", |args| {
                args.set("message", message.clone());
            }),
            Self::Errored(error) => return fmt::Display::fmt(error, f),
            Self::Exit(code) => localization::message_with_args("step-error-exit", |args| {
                args.set("code", code.to_string());
            }),
        };
        f.write_str(&text)
    }
}

impl StdError for StepError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Errored(error) => Some(error.as_ref()),
            Self::Failed(_) | Self::Exit(_) => None,
        }
    }
}

/// Arguments a matched step method is called with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepArgs {
    positional: Vec<String>,
    named: HashMap<String, String>,
    params: &'static [&'static str],
    labels: Option<Vec<String>>,
    text: Option<String>,
}

impl StepArgs {
    /// Arguments captured for a method declaring `params`.
    #[must_use]
    pub fn new(
        positional: Vec<String>,
        named: HashMap<String, String>,
        params: &'static [&'static str],
    ) -> Self {
        Self {
            positional,
            named,
            params,
            labels: None,
            text: None,
        }
    }

    #[must_use]
    pub(crate) fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
        self
    }

    #[must_use]
    pub(crate) fn with_text(mut self, text: String) -> Self {
        self.text = Some(text);
        self
    }

    /// Positional captures in order.
    #[must_use]
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Named captures.
    #[must_use]
    pub fn named(&self) -> &HashMap<String, String> {
        &self.named
    }

    /// Positional capture by index.
    #[must_use]
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    /// Capture bound to `name`.
    ///
    /// Named captures win; otherwise positional captures are bound to the
    /// declared parameter names in order, skipping `_labels` and `_text`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        if let Some(value) = self.named.get(name) {
            return Some(value);
        }
        let index = self
            .params
            .iter()
            .filter(|param| !is_injected(param))
            .position(|param| *param == name)?;
        self.arg(index)
    }

    /// Convert the capture bound to `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::Errored`] when the capture is missing or does not
    /// parse as `T`.
    pub fn parse<T>(&self, name: &str) -> Result<T, StepError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let raw = self.get(name).ok_or_else(|| {
            StepError::errored(localization::message_with_args(
                "step-error-missing-argument",
                |args| args.set("name", name.to_owned()),
            ))
        })?;
        raw.trim().parse().map_err(|error: T::Err| {
            StepError::errored(localization::message_with_args(
                "step-error-invalid-argument",
                |args| {
                    args.set("name", name.to_owned());
                    args.set("value", raw.to_owned());
                    args.set("reason", error.to_string());
                },
            ))
        })
    }

    /// Labels of the step and its ancestors, when the method declares
    /// `_labels`.
    #[must_use]
    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    /// Docstring attached to the step, when the method declares `_text`.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

fn is_injected(param: &str) -> bool {
    param == LABELS_PARAM || param == TEXT_PARAM
}

/// One step method of a fixture.
pub struct StepMethod<F> {
    name: &'static str,
    pattern: Option<&'static str>,
    params: &'static [&'static str],
    run: StepFn<F>,
}

impl<F> StepMethod<F> {
    /// Describe a step method.
    ///
    /// `name` may be a path such as `Self::step_add`; only its last segment
    /// is kept.
    #[must_use]
    pub fn new(
        name: &'static str,
        pattern: Option<&'static str>,
        params: &'static [&'static str],
        run: StepFn<F>,
    ) -> Self {
        let name = name.rsplit(':').next().unwrap_or(name).trim();
        Self {
            name,
            pattern,
            params,
            run,
        }
    }

    /// Method name used by the naming-convention matcher.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Regular expression or format pattern matched against step text.
    #[must_use]
    pub fn pattern(&self) -> Option<&'static str> {
        self.pattern
    }

    /// Declared parameter names, in order.
    #[must_use]
    pub fn params(&self) -> &'static [&'static str] {
        self.params
    }

    /// Whether the method declares `param`.
    #[must_use]
    pub fn declares(&self, param: &str) -> bool {
        self.params.contains(&param)
    }

    pub(crate) fn handler(&self) -> StepFn<F> {
        self.run
    }
}

impl<F> Clone for StepMethod<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for StepMethod<F> {}

impl<F> fmt::Debug for StepMethod<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepMethod")
            .field("name", &self.name)
            .field("pattern", &self.pattern)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// The step methods a fixture exposes, in declaration order.
///
/// Declaration order decides which method wins when several regex patterns
/// match the same step.
pub struct MethodCatalog<F> {
    methods: Vec<StepMethod<F>>,
}

impl<F> Clone for MethodCatalog<F> {
    fn clone(&self) -> Self {
        Self {
            methods: self.methods.clone(),
        }
    }
}

impl<F> fmt::Debug for MethodCatalog<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.methods).finish()
    }
}

impl<F> MethodCatalog<F> {
    /// Catalog of `methods`.
    #[must_use]
    pub fn new(methods: Vec<StepMethod<F>>) -> Self {
        Self { methods }
    }

    /// Method at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&StepMethod<F>> {
        self.methods.get(index)
    }

    /// Iterate over the methods in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, StepMethod<F>> {
        self.methods.iter()
    }

    /// Number of methods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Whether the catalog lists no method.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl<F> FromIterator<StepMethod<F>> for MethodCatalog<F> {
    fn from_iter<I: IntoIterator<Item = StepMethod<F>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, F> IntoIterator for &'a MethodCatalog<F> {
    type Item = &'a StepMethod<F>;
    type IntoIter = std::slice::Iter<'a, StepMethod<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A type whose methods implement the steps of feature files.
///
/// Every hook defaults to a no-op.
pub trait Fixture: Sized {
    /// The step methods of this fixture.
    fn catalog() -> MethodCatalog<Self>;

    /// Called once before [`run`](crate::run) executes a feature.
    fn set_up(&mut self) {}
    /// Called once after [`run`](crate::run) executed a feature.
    fn tear_down(&mut self) {}
    /// Called before the feature's scenarios run.
    fn set_up_feature(&mut self) {}
    /// Called after the feature's scenarios ran, even on failure.
    fn tear_down_feature(&mut self) {}
    /// Called before each scenario run, once per outline permutation.
    fn set_up_scenario(&mut self) {}
    /// Called after each scenario run, even on failure.
    fn tear_down_scenario(&mut self) {}
    /// Called before each step.
    fn set_up_step(&mut self) {}
    /// Called after each step, even on failure.
    fn tear_down_step(&mut self) {}
}

/// Build a [`StepMethod`] from a method path.
///
/// The method name is the last path segment. An optional pattern and a list
/// of parameter names may follow.
///
/// ```
/// use morelia::{StepArgs, StepMethod, StepResult, step};
///
/// struct World;
///
/// impl World {
///     fn step_I_press_add(&mut self, _args: &StepArgs) -> StepResult {
///         Ok(())
///     }
///     fn then_result(&mut self, _args: &StepArgs) -> StepResult {
///         Ok(())
///     }
/// }
///
/// let by_name: StepMethod<World> = step!(World::step_I_press_add);
/// assert_eq!(by_name.name(), "step_I_press_add");
/// assert!(by_name.pattern().is_none());
///
/// let by_pattern: StepMethod<World> = step!(World::then_result, "the result is {value}", ["value"]);
/// assert_eq!(by_pattern.params(), ["value"]);
/// ```
#[macro_export]
macro_rules! step {
    ($method:path) => {
        $crate::StepMethod::new(stringify!($method), None, &[], $method)
    };
    ($method:path, $pattern:expr) => {
        $crate::StepMethod::new(stringify!($method), Some($pattern), &[], $method)
    };
    ($method:path, $pattern:expr, [$($param:expr),* $(,)?]) => {
        $crate::StepMethod::new(stringify!($method), Some($pattern), &[$($param),*], $method)
    };
}

#[cfg(test)]
mod tests {
    use super::{StepArgs, StepError, StepMethod, StepResult};
    use hashbrown::HashMap;
    use rstest::rstest;

    struct Dummy;

    fn noop(_: &mut Dummy, _: &StepArgs) -> StepResult {
        Ok(())
    }

    #[rstest]
    #[case("Self::step_add", "step_add")]
    #[case("Self :: step_add", "step_add")]
    #[case("crate::world::World::when_go", "when_go")]
    #[case("step_plain", "step_plain")]
    fn method_names_drop_the_path(#[case] path: &'static str, #[case] expected: &str) {
        let method = StepMethod::<Dummy>::new(path, None, &[], noop);
        assert_eq!(method.name(), expected);
    }

    #[test]
    fn positional_captures_bind_to_declared_names() {
        let args = StepArgs::new(
            vec!["girls".into(), "the".into()],
            HashMap::new(),
            &["_labels", "who", "whose"],
        );
        assert_eq!(args.get("who"), Some("girls"));
        assert_eq!(args.get("whose"), Some("the"));
        assert_eq!(args.get("_labels"), None);
        assert_eq!(args.arg(1), Some("the"));
    }

    #[test]
    fn named_captures_take_precedence() {
        let mut named = HashMap::new();
        named.insert("number".to_owned(), "42".to_owned());
        let args = StepArgs::new(vec!["7".into()], named, &["number"]);
        assert_eq!(args.parse::<u32>("number").ok(), Some(42));
    }

    #[test]
    fn parse_reports_missing_and_invalid_values() {
        let args = StepArgs::new(vec!["abc".into()], HashMap::new(), &["n"]);
        let invalid = args.parse::<i32>("n").err().map(|e| e.to_string());
        assert!(invalid.is_some_and(|msg| msg.contains("cannot convert step argument \"n\"")));
        let missing = args.parse::<i32>("m").err().map(|e| e.to_string());
        assert_eq!(missing.as_deref(), Some("missing step argument \"m\""));
    }

    #[test]
    fn only_failed_counts_as_failure() {
        assert!(StepError::failed("nope").is_failure());
        assert!(!StepError::exit(3).is_failure());
        assert!(!StepError::errored("io").is_failure());
        assert_eq!(StepError::failed("nope").to_string(), "nope");
        assert_eq!(
            StepError::exit(3).to_string(),
            "exit requested with status 3"
        );
    }
}
