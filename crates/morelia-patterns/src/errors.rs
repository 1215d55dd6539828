//! Why a format pattern could not become a regular expression.

use thiserror::Error;

/// Errors surfaced while converting format patterns into regular expressions.
///
/// Positions are zero-based byte offsets into the pattern.
///
/// # Examples
/// ```
/// use morelia_patterns::{PatternError, build_regex_from_pattern};
///
/// let error = build_regex_from_pattern("press {key:}").unwrap_err();
/// assert_eq!(error.position(), Some(6));
/// assert_eq!(error.placeholder(), Some("key"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PatternError {
    /// A placeholder is malformed or braces are unbalanced.
    #[error("{reason}{} at offset {position}", in_placeholder(.name.as_deref()))]
    Placeholder {
        /// What is wrong with the placeholder.
        reason: &'static str,
        /// Where the placeholder starts.
        position: usize,
        /// Placeholder name, when one was read before the failure.
        name: Option<String>,
    },
    /// The same placeholder name appears twice.
    #[error("placeholder `{{{name}}}` repeated at offset {position}")]
    DuplicateName {
        /// The repeated name.
        name: String,
        /// Where the second occurrence starts.
        position: usize,
    },
    /// The generated regular expression failed to compile.
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

impl PatternError {
    /// Offset of the offending placeholder, if the error points at one.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Placeholder { position, .. } | Self::DuplicateName { position, .. } => {
                Some(*position)
            }
            Self::Regex(_) => None,
        }
    }

    /// Name of the offending placeholder, if it had one.
    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            Self::Placeholder { name, .. } => name.as_deref().filter(|n| !n.is_empty()),
            Self::DuplicateName { name, .. } => Some(name),
            Self::Regex(_) => None,
        }
    }
}

fn in_placeholder(name: Option<&str>) -> String {
    name.filter(|name| !name.is_empty())
        .map(|name| format!(" in `{{{name}}}`"))
        .unwrap_or_default()
}

pub(crate) fn placeholder_error(
    reason: &'static str,
    position: usize,
    name: Option<String>,
) -> PatternError {
    PatternError::Placeholder {
        reason,
        position,
        name,
    }
}

#[cfg(test)]
mod tests {
    use super::{PatternError, placeholder_error};
    use rstest::rstest;

    #[rstest]
    #[case(Some("count"), "bad type in `{count}` at offset 4")]
    #[case(Some(""), "bad type at offset 4")]
    #[case(None, "bad type at offset 4")]
    fn placeholder_errors_name_the_placeholder(#[case] name: Option<&str>, #[case] expected: &str) {
        let error = placeholder_error("bad type", 4, name.map(str::to_owned));
        assert_eq!(error.to_string(), expected);
        assert_eq!(error.position(), Some(4));
    }

    #[test]
    fn duplicate_names_report_the_second_occurrence() {
        let error = PatternError::DuplicateName {
            name: "n".into(),
            position: 7,
        };
        assert_eq!(error.to_string(), "placeholder `{n}` repeated at offset 7");
        assert_eq!(error.placeholder(), Some("n"));
    }

    #[test]
    fn regex_errors_have_no_position() {
        let error = PatternError::from(regex::Error::Syntax("bad".into()));
        assert_eq!(error.to_string(), "bad");
        assert_eq!(error.position(), None);
    }
}
