//! Lines that steer the parser without producing nodes.

use std::sync::LazyLock;

use regex::Regex;

static LANGUAGE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\s*#\s*language:\s*([\w-]+)\s*$").ok());
static LABEL_LINE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\s*@").ok());
static LABEL: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"@(\w+)").ok());

/// Language code named by a `# language: xx` directive.
pub(crate) fn language(line: &str) -> Option<&str> {
    LANGUAGE
        .as_ref()?
        .captures(line)?
        .get(1)
        .map(|code| code.as_str())
}

/// Labels read from `@tag` lines, waiting for the next node.
#[derive(Debug, Default)]
pub(crate) struct LabelBuffer {
    pending: Vec<String>,
}

impl LabelBuffer {
    /// Buffer the labels of `line`; returns `false` if it is not a label line.
    pub(crate) fn parse(&mut self, line: &str) -> bool {
        let (Some(prefix), Some(label)) = (LABEL_LINE.as_ref(), LABEL.as_ref()) else {
            return false;
        };
        if !prefix.is_match(line) {
            return false;
        }
        let before = self.pending.len();
        self.pending.extend(
            label
                .captures_iter(line)
                .filter_map(|captures| captures.get(1))
                .map(|name| name.as_str().to_owned()),
        );
        self.pending.len() > before
    }

    /// Hand the buffered labels to a new node.
    pub(crate) fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::{LabelBuffer, language};
    use rstest::rstest;

    #[rstest]
    #[case("# language: pl", Some("pl"))]
    #[case("#language: en-au", Some("en-au"))]
    #[case("# just a comment", None)]
    #[case("Given # language: pl", None)]
    fn reads_language_directives(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(language(line), expected);
    }

    #[test]
    fn labels_wait_for_the_next_node() {
        let mut buffer = LabelBuffer::default();
        assert!(buffer.parse("@web @android"));
        assert!(buffer.parse("  @ios"));
        assert!(!buffer.parse("Feature: @not a label line"));
        assert_eq!(buffer.take(), vec!["web", "android", "ios"]);
        assert!(buffer.take().is_empty());
    }

    #[test]
    fn bare_at_sign_is_not_a_label_line() {
        let mut buffer = LabelBuffer::default();
        assert!(!buffer.parse("@ "));
    }
}
