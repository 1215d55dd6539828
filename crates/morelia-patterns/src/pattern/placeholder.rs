//! Placeholder parsing utilities used by the lexer.

use crate::errors::{PatternError, placeholder_error};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlaceholderSpec {
    pub name: Option<String>,
    pub hint: Option<String>,
    pub start: usize,
}

/// Parse a `{name}`, `{}`, `{name:code}` or `{:code}` placeholder starting at
/// the opening brace and return the index just past its closing brace.
pub(crate) fn parse_placeholder(
    bytes: &[u8],
    start: usize,
) -> Result<(usize, PlaceholderSpec), PatternError> {
    let mut index = start + 1;
    let mut name = String::new();
    while let Some(&b) = bytes.get(index) {
        if b.is_ascii_alphanumeric() || b == b'_' {
            name.push(char::from(b));
            index += 1;
        } else {
            break;
        }
    }

    let mut hint = None;
    match bytes.get(index) {
        Some(b'}') => {}
        Some(b':') => {
            index += 1;
            let hint_start = index;
            while let Some(&b) = bytes.get(index) {
                if b == b'}' {
                    break;
                }
                index += 1;
            }
            let raw = bytes
                .get(hint_start..index)
                .and_then(|raw| std::str::from_utf8(raw).ok())
                .unwrap_or_default();
            if raw.is_empty() || raw.chars().any(|c| c.is_ascii_whitespace() || c == '{') {
                return Err(placeholder_error(
                    "invalid placeholder in step pattern",
                    start,
                    Some(name),
                ));
            }
            hint = Some(raw.to_string());
        }
        Some(_) => {
            return Err(placeholder_error(
                "invalid placeholder in step pattern",
                start,
                Some(name),
            ));
        }
        None => {}
    }

    if !matches!(bytes.get(index), Some(b'}')) {
        return Err(placeholder_error(
            "missing closing '}' for placeholder",
            start,
            Some(name),
        ));
    }
    index += 1;

    Ok((
        index,
        PlaceholderSpec {
            name: (!name.is_empty()).then_some(name),
            hint,
            start,
        },
    ))
}
