//! Plain-text scenarios executed against Rust fixtures.
//!
//! A feature document written in a Gherkin dialect is parsed into a
//! [`grammar::FeatureTree`]. Each step is then matched against the step
//! methods a [`Fixture`] lists in its [`MethodCatalog`], by regular
//! expression, by format pattern, or by method name, and the matching method
//! runs with the captured arguments. Scenario outlines run once per
//! combination of example rows.
//!
//! ```
//! use morelia::{Fixture, MethodCatalog, StepArgs, StepError, StepResult, step, verify};
//!
//! #[derive(Default)]
//! struct Calculator {
//!     stack: Vec<i64>,
//!     result: i64,
//! }
//!
//! impl Calculator {
//!     fn step_enter(&mut self, args: &StepArgs) -> StepResult {
//!         self.stack.push(args.parse("number")?);
//!         Ok(())
//!     }
//!
//!     fn step_i_press_add(&mut self, _args: &StepArgs) -> StepResult {
//!         self.result = self.stack.drain(..).sum();
//!         Ok(())
//!     }
//!
//!     fn step_result(&mut self, args: &StepArgs) -> StepResult {
//!         let expected: i64 = args.parse("number")?;
//!         if expected == self.result {
//!             Ok(())
//!         } else {
//!             Err(StepError::failed(format!("{expected} != {}", self.result)))
//!         }
//!     }
//! }
//!
//! impl Fixture for Calculator {
//!     fn catalog() -> MethodCatalog<Self> {
//!         MethodCatalog::new(vec![
//!             step!(Self::step_enter, r#"I enter "(\d+)" into the calculator"#, ["number"]),
//!             step!(Self::step_i_press_add),
//!             step!(Self::step_result, r#"the result should be "(\d+)" on the screen"#, ["number"]),
//!         ])
//!     }
//! }
//!
//! let feature = r#"
//! Feature: Addition
//! Scenario: Add two numbers
//!   Given I enter "50" into the calculator
//!   And I enter "70" into the calculator
//!   When I press add
//!   Then the result should be "120" on the screen
//! "#;
//! verify(feature, &mut Calculator::default())?;
//! # Ok::<(), morelia::Error>(())
//! ```

pub mod config;
mod error;
pub mod execution;
mod fixture;
pub mod grammar;
pub mod keywords;
pub mod localization;
pub mod matchers;
pub mod parser;
pub mod reporting;
mod source;
mod tags;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use execution::{ExecutionError, ScenarioFailure, VisitorObserver, execute_script};
pub use fixture::{
    Fixture, LABELS_PARAM, MethodCatalog, StepArgs, StepError, StepFn, StepMethod, StepResult,
    TEXT_PARAM,
};
pub use i18n_embed::fluent::FluentLanguageLoader;
pub use localization::{
    LocalizationError, Localizations, ScopedLocalization, current_languages,
    install_localization_loader, select_localizations, strip_directional_isolates,
};
pub use source::{Source, SourceError};
pub use tags::Tags;

use std::fmt;

use parser::Parser;

/// Settings for [`verify_with`] and [`run`].
///
/// ```
/// use morelia::{Config, Options};
/// use morelia::reporting::Collector;
///
/// let mut collector = Collector::default();
/// let options = Options::default()
///     .with_scenario("Add")
///     .with_config(Config::default().with_wip(true))
///     .with_observer(&mut collector);
/// assert_eq!(options.scenario(), Some("Add"));
/// ```
#[derive(Default)]
pub struct Options<'o> {
    scenario: Option<String>,
    language: Option<String>,
    config: Config,
    observers: Vec<&'o mut dyn VisitorObserver>,
}

impl<'o> Options<'o> {
    /// Defaults with the configuration loaded from `section` of the usual
    /// configuration file and environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configuration file is unreadable.
    pub fn load(section: &str) -> Result<Self, ConfigError> {
        Ok(Self::default().with_config(Config::load(None, section)?))
    }

    /// Only run scenarios whose name matches the regular expression
    /// `pattern` from its start.
    #[must_use]
    pub fn with_scenario(mut self, pattern: impl Into<String>) -> Self {
        self.scenario = Some(pattern.into());
        self
    }

    /// Language assumed until a `# language:` directive.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Notify `observer` of execution events.
    #[must_use]
    pub fn with_observer(mut self, observer: &'o mut dyn VisitorObserver) -> Self {
        self.observers.push(observer);
        self
    }

    /// The scenario filter, if any.
    #[must_use]
    pub fn scenario(&self) -> Option<&str> {
        self.scenario.as_deref()
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl fmt::Debug for Options<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("scenario", &self.scenario)
            .field("language", &self.language)
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Parse `source` and execute it against `fixture`.
///
/// Strings containing a newline are feature text; a single line ending in
/// `.feature` is a file path. The configuration is read from the `default`
/// section of the usual configuration file and environment.
///
/// # Errors
///
/// See [`verify_with`].
pub fn verify<F: Fixture>(source: impl Into<Source>, fixture: &mut F) -> Result<(), Error> {
    let options = Options::load(config::DEFAULT_SECTION)?;
    verify_with(source, fixture, options)
}

/// Parse `source` and execute it against `fixture` with explicit options.
///
/// # Errors
///
/// Returns [`Error::Source`] when the text cannot be loaded,
/// [`Error::Parse`] when it is not a valid document and
/// [`Error::Execution`] when a scenario fails.
pub fn verify_with<F: Fixture>(
    source: impl Into<Source>,
    fixture: &mut F,
    options: Options<'_>,
) -> Result<(), Error> {
    let source = source.into();
    let text = source.load()?;
    let Options {
        scenario,
        language,
        config,
        mut observers,
    } = options;

    let mut parser = Parser::new();
    if let Some(language) = language {
        parser = parser.with_language(language);
    }
    if let Some(scenario) = scenario {
        parser = parser.with_scenario_filter(scenario);
    }
    parser = parser.with_tags(config.tags().clone());
    let mut tree = parser.parse(&text, source.name())?;
    log::debug!(
        "running {} with matchers {:?}",
        source.name(),
        config.matchers()
    );
    execute_script(
        &mut tree,
        fixture,
        &config.chain(),
        observers.as_mut_slice(),
        config.pre_scan(),
    )?;
    Ok(())
}

/// [`verify_with`] bracketed by the fixture's
/// [`set_up`](Fixture::set_up) and [`tear_down`](Fixture::tear_down) hooks.
///
/// `tear_down` runs even when `set_up` panics or verification fails.
///
/// # Errors
///
/// See [`verify_with`]. A panic in either hook is reported as
/// [`ExecutionError::HookFailed`].
pub fn run<F: Fixture>(
    source: impl Into<Source>,
    fixture: &mut F,
    options: Options<'_>,
) -> Result<(), Error> {
    let outcome = execution::invoke_hook("set_up", F::set_up, fixture)
        .map_err(|error| Error::Execution(error.into()))
        .and_then(|()| verify_with(source, fixture, options));
    let tear_down = execution::invoke_hook("tear_down", F::tear_down, fixture);
    outcome.and(tear_down.map_err(|error| Error::Execution(error.into())))
}
