//! Regex capture helpers shared by the step matchers.

use regex::Regex;

/// A single capture group value together with its group name, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    /// Group name for `(?P<name>...)` groups, `None` for positional groups.
    pub name: Option<String>,
    /// Captured text, empty when the group did not participate.
    pub value: String,
}

/// Extract the capture groups when `text` matches `re`, returning `None` otherwise.
///
/// Capture group 0 (the full match) is ignored so only user-defined groups
/// contribute to the result, and optional groups that do not participate
/// yield empty strings to keep positional alignment.
///
/// # Examples
/// ```
/// # use regex::Regex;
/// # use morelia_patterns::extract_captured_values;
/// let regex = Regex::new(r"^(\d+)-(\w+)$")
///     .expect("example ensures fallible call succeeds");
/// let values = extract_captured_values(&regex, "42-answer")
///     .expect("example ensures fallible call succeeds");
/// assert_eq!(values, vec!["42".to_string(), "answer".to_string()]);
/// ```
#[must_use]
pub fn extract_captured_values(re: &Regex, text: &str) -> Option<Vec<String>> {
    extract_captures(re, text).map(|caps| caps.into_iter().map(|c| c.value).collect())
}

/// Extract capture groups with their names when `text` matches `re`.
///
/// # Examples
/// ```
/// # use regex::Regex;
/// # use morelia_patterns::extract_captures;
/// let regex = Regex::new(r"^(?P<count>\d+) (\w+)$")
///     .expect("example ensures fallible call succeeds");
/// let caps = extract_captures(&regex, "3 cukes")
///     .expect("example ensures fallible call succeeds");
/// assert_eq!(caps[0].name.as_deref(), Some("count"));
/// assert_eq!(caps[1].name, None);
/// ```
#[must_use]
pub fn extract_captures(re: &Regex, text: &str) -> Option<Vec<Capture>> {
    let caps = re.captures(text)?;
    let values = re
        .capture_names()
        .zip(caps.iter())
        .skip(1)
        .map(|(name, capture)| Capture {
            name: name.map(str::to_string),
            value: capture.map_or_else(String::new, |m| m.as_str().to_string()),
        })
        .collect();
    Some(values)
}
