//! Runtime configuration.
//!
//! Settings come from a TOML file holding `[tool.morelia.<section>]` tables,
//! then from `MORELIA_*` environment variables. The file is the first one
//! found among an explicit path, the file named by `MORELIA_CONFIG`, and
//! `pyproject.toml` or `morelia.toml` in the working directory. Without a
//! file the defaults apply.
//!
//! ```toml
//! [tool.morelia.default]
//! wip = false
//! matchers = ["regex", "parse", "method"]
//! tags = "-slow"
//!
//! [tool.morelia.strict]
//! show_all_missing = true
//! matchers = ["regex"]
//! ```

use std::collections::BTreeMap;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use thiserror::Error;

use crate::matchers::{MatcherChain, MatcherKind, UnknownMatcher};
use crate::source::read_utf8;
use crate::tags::Tags;

/// Variable naming the configuration file.
pub const CONFIG_ENV: &str = "MORELIA_CONFIG";
/// Variable overriding `wip`.
pub const WIP_ENV: &str = "MORELIA_WIP";
/// Variable overriding `show_all_missing`.
pub const SHOW_ALL_MISSING_ENV: &str = "MORELIA_SHOW_ALL_MISSING";
/// Variable overriding `matchers` with a comma-separated list.
pub const MATCHERS_ENV: &str = "MORELIA_MATCHERS";
/// Variable overriding `tags` with a tag expression.
pub const TAGS_ENV: &str = "MORELIA_TAGS";
/// Section read when none is named.
pub const DEFAULT_SECTION: &str = "default";

const WORKING_DIR_FILES: &[&str] = &["pyproject.toml", "morelia.toml"];

/// Configuration could not be loaded.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("cannot read configuration file {path}: {source}")]
    Read {
        /// File that was read.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The file is not valid TOML or has unexpected value types.
    #[error("invalid configuration file {path}: {source}")]
    Parse {
        /// File that was parsed.
        path: Utf8PathBuf,
        /// Parser diagnostic.
        #[source]
        source: toml::de::Error,
    },
    /// The `matchers` list names an unknown matcher.
    #[error(transparent)]
    UnknownMatcher(#[from] UnknownMatcher),
}

#[derive(Debug, Default, Deserialize)]
struct Document {
    #[serde(default)]
    tool: Tool,
}

#[derive(Debug, Default, Deserialize)]
struct Tool {
    #[serde(default)]
    morelia: BTreeMap<String, Section>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Section {
    wip: Option<bool>,
    show_all_missing: Option<bool>,
    matchers: Option<Vec<String>>,
    tags: Option<String>,
}

/// How features are executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    matchers: Vec<MatcherKind>,
    show_all_missing: bool,
    wip: bool,
    tags: Tags,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            matchers: MatcherKind::DEFAULT_ORDER.to_vec(),
            show_all_missing: true,
            wip: false,
            tags: Tags::default(),
        }
    }
}

impl Config {
    /// Load `section` from the first configuration file found, then apply
    /// environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file found cannot be read or parsed,
    /// or lists an unknown matcher.
    pub fn load(explicit: Option<&Utf8Path>, section: &str) -> Result<Self, ConfigError> {
        Self::load_with(explicit, section, |name| std::env::var(name).ok())
    }

    /// [`load`](Self::load) with environment lookups answered by `env`.
    ///
    /// # Errors
    ///
    /// As for [`load`](Self::load).
    pub fn load_with(
        explicit: Option<&Utf8Path>,
        section: &str,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let config = locate(explicit, &env).map_or_else(
            || Ok(Self::default()),
            |path| Self::from_file(&path, section),
        )?;
        Ok(config.with_env(env))
    }

    /// Read `section` from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed, or
    /// lists an unknown matcher.
    pub fn from_file(path: &Utf8Path, section: &str) -> Result<Self, ConfigError> {
        let text = read_utf8(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        log::debug!("reading [tool.morelia.{section}] from {path}");
        Self::from_toml(&text, section).map_err(|error| match error {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_owned(),
                source,
            },
            other => other,
        })
    }

    /// Read `section` from TOML text.
    ///
    /// A missing section yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for invalid TOML and
    /// [`ConfigError::UnknownMatcher`] for an unknown matcher name.
    ///
    /// # Examples
    /// ```
    /// use morelia::Config;
    ///
    /// let config = Config::from_toml("[tool.morelia.default]\nwip = true\n", "default")?;
    /// assert!(config.wip());
    /// # Ok::<(), morelia::ConfigError>(())
    /// ```
    pub fn from_toml(text: &str, section: &str) -> Result<Self, ConfigError> {
        let mut document: Document = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: Utf8PathBuf::new(),
            source,
        })?;
        let settings = document.tool.morelia.remove(section).unwrap_or_default();
        let mut config = Self::default();
        if let Some(wip) = settings.wip {
            config.wip = wip;
        }
        if let Some(show_all_missing) = settings.show_all_missing {
            config.show_all_missing = show_all_missing;
        }
        if let Some(names) = settings.matchers {
            config.matchers = names
                .iter()
                .map(|name| name.parse::<MatcherKind>())
                .collect::<Result<_, _>>()?;
        }
        if let Some(expression) = settings.tags {
            config.tags = Tags::parse(&expression);
        }
        Ok(config)
    }

    /// Apply `MORELIA_WIP`, `MORELIA_SHOW_ALL_MISSING`, `MORELIA_MATCHERS`
    /// and `MORELIA_TAGS` as answered by `env`.
    ///
    /// Values that cannot be understood are logged and ignored.
    #[must_use]
    pub fn with_env(mut self, env: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(wip) = env_bool(&env, WIP_ENV) {
            self.wip = wip;
        }
        if let Some(show_all_missing) = env_bool(&env, SHOW_ALL_MISSING_ENV) {
            self.show_all_missing = show_all_missing;
        }
        if let Some(raw) = env(MATCHERS_ENV) {
            match parse_matcher_list(&raw) {
                Ok(matchers) => self.matchers = matchers,
                Err(error) => log::warn!("ignoring {MATCHERS_ENV}={raw:?}: {error}"),
            }
        }
        if let Some(expression) = env(TAGS_ENV) {
            self.tags = Tags::parse(&expression);
        }
        self
    }

    /// Use `matchers`, in order.
    #[must_use]
    pub fn with_matchers(mut self, matchers: impl Into<Vec<MatcherKind>>) -> Self {
        self.matchers = matchers.into();
        self
    }

    /// Toggle work-in-progress mode.
    #[must_use]
    pub fn with_wip(mut self, wip: bool) -> Self {
        self.wip = wip;
        self
    }

    /// Toggle the up-front report of every missing step.
    #[must_use]
    pub fn with_show_all_missing(mut self, show_all_missing: bool) -> Self {
        self.show_all_missing = show_all_missing;
        self
    }

    /// Select scenarios by label.
    #[must_use]
    pub fn with_tags(mut self, tags: Tags) -> Self {
        self.tags = tags;
        self
    }

    /// Matchers in the order they are consulted.
    #[must_use]
    pub fn matchers(&self) -> &[MatcherKind] {
        &self.matchers
    }

    /// Whether missing steps are all reported before execution starts.
    #[must_use]
    pub fn show_all_missing(&self) -> bool {
        self.show_all_missing
    }

    /// Whether work-in-progress mode is on.
    ///
    /// In this mode missing steps surface one at a time while the feature
    /// runs instead of all at once up front.
    #[must_use]
    pub fn wip(&self) -> bool {
        self.wip
    }

    /// Tag expression scenarios must satisfy to run.
    #[must_use]
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// Whether steps are resolved before execution starts.
    #[must_use]
    pub fn pre_scan(&self) -> bool {
        self.show_all_missing && !self.wip
    }

    /// Matcher chain in the configured order.
    #[must_use]
    pub fn chain(&self) -> MatcherChain {
        MatcherChain::new(&self.matchers)
    }
}

fn locate(
    explicit: Option<&Utf8Path>,
    env: &impl Fn(&str) -> Option<String>,
) -> Option<Utf8PathBuf> {
    let from_env = env(CONFIG_ENV).map(Utf8PathBuf::from);
    explicit
        .map(Utf8Path::to_path_buf)
        .into_iter()
        .chain(from_env)
        .chain(WORKING_DIR_FILES.iter().map(|name| Utf8PathBuf::from(*name)))
        .find(|path| path.is_file())
}

fn parse_matcher_list(raw: &str) -> Result<Vec<MatcherKind>, UnknownMatcher> {
    raw.split(',')
        .filter(|name| !name.trim().is_empty())
        .map(str::parse)
        .collect()
}

fn env_bool(env: &impl Fn(&str) -> Option<String>, name: &str) -> Option<bool> {
    let raw = env(name)?;
    let parsed = parse_env_bool(&raw);
    if parsed.is_none() {
        log::warn!("ignoring {name}={raw:?}: expected a boolean");
    }
    parsed
}

fn parse_env_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
