//! Triple-quoted payload blocks.

use std::sync::LazyLock;

use regex::Regex;

static OPENER: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r#"^\s*"""\s*$"#).ok());

/// Whether `line` opens a docstring block.
pub(crate) fn is_delimiter(line: &str) -> bool {
    OPENER.as_ref().is_some_and(|regex| regex.is_match(line))
}

/// Collect lines up to a line identical to `opener` and dedent them.
///
/// Returns `None` if the input ends first.
pub(crate) fn collect<'a>(opener: &str, lines: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut body = Vec::new();
    for line in lines {
        if line == opener {
            return Some(dedent(&body));
        }
        body.push(line);
    }
    None
}

/// Remove the whitespace prefix shared by every line.
pub(crate) fn dedent(lines: &[&str]) -> String {
    let mut common: Option<&str> = None;
    for line in lines {
        let indent_len = line.len() - line.trim_start().len();
        let indent = line.get(..indent_len).unwrap_or_default();
        common = Some(match common {
            None => indent,
            Some(previous) => shared_prefix(previous, indent),
        });
    }
    let strip = common.map_or(0, str::len);
    lines
        .iter()
        .map(|line| line.get(strip..).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n")
}

fn shared_prefix<'a>(left: &'a str, right: &str) -> &'a str {
    let len = left
        .char_indices()
        .zip(right.chars())
        .take_while(|((_, a), b)| a == b)
        .last()
        .map_or(0, |((index, c), _)| index + c.len_utf8());
    left.get(..len).unwrap_or_default()
}
