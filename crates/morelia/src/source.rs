//! Where feature text comes from.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use thiserror::Error;

use crate::parser::STDIN_NAME;

/// Feature text, inline or in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Inline text reported under `name` in diagnostics.
    Text {
        /// The feature text.
        text: String,
        /// Name used in syntax errors.
        name: String,
    },
    /// A file read as UTF-8 when loaded.
    File(Utf8PathBuf),
}

/// A source could not be loaded.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    /// The file could not be opened or read.
    #[error("cannot read feature file {path}: {source}")]
    Read {
        /// Path that was requested.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

impl Source {
    /// Inline text named `<stdin>`.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            name: STDIN_NAME.to_owned(),
        }
    }

    /// A file path.
    #[must_use]
    pub fn file(path: impl Into<Utf8PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Name used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } => name,
            Self::File(path) => path.as_str(),
        }
    }

    /// Read the feature text.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Read`] when a file cannot be read.
    pub fn load(&self) -> Result<String, SourceError> {
        match self {
            Self::Text { text, .. } => Ok(text.clone()),
            Self::File(path) => read_utf8(path).map_err(|source| SourceError::Read {
                path: path.clone(),
                source,
            }),
        }
    }
}

/// Guess the kind of a bare string.
///
/// Text containing a newline is inline; a single line ending in `.feature`
/// names a file; anything else is inline.
///
/// # Examples
/// ```
/// use morelia::Source;
///
/// assert!(matches!(Source::from("calculator.feature"), Source::File(_)));
/// assert!(matches!(Source::from("Feature: F\nScenario: S"), Source::Text { .. }));
/// ```
impl From<&str> for Source {
    fn from(value: &str) -> Self {
        if !value.contains('\n') && value.trim_end().ends_with(".feature") {
            Self::file(value.trim_end())
        } else {
            Self::text(value)
        }
    }
}

impl From<String> for Source {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Utf8PathBuf> for Source {
    fn from(value: Utf8PathBuf) -> Self {
        Self::File(value)
    }
}

impl From<&Utf8Path> for Source {
    fn from(value: &Utf8Path) -> Self {
        Self::File(value.to_owned())
    }
}

/// Read a UTF-8 file through a directory capability for its parent.
pub(crate) fn read_utf8(path: &Utf8Path) -> io::Result<String> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read_to_string(name)
}
