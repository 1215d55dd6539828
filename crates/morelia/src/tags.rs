//! Tag expressions selecting scenarios by label.
//!
//! An expression is a whitespace-separated list of tags. A plain tag must be
//! among the labels; a tag prefixed with `-` must not be. A leading `@` is
//! ignored so `@web` and `web` name the same label.

/// Parsed tag expression.
///
/// # Examples
/// ```
/// use morelia::Tags;
///
/// let tags = Tags::parse("web -slow");
/// assert!(!tags.should_skip(&["web"]));
/// assert!(tags.should_skip(&["web", "slow"]));
/// assert!(tags.should_skip(&["cli"]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags {
    required: Vec<String>,
    excluded: Vec<String>,
}

impl Tags {
    /// Parse a tag expression such as `"tag1 -tag2"`.
    #[must_use]
    pub fn parse(expression: &str) -> Self {
        let mut tags = Self::default();
        for word in expression.split_whitespace() {
            match word.strip_prefix('-') {
                Some(excluded) => push_label(&mut tags.excluded, excluded),
                None => push_label(&mut tags.required, word),
            }
        }
        tags
    }

    /// Whether the expression selects everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.excluded.is_empty()
    }

    /// Tags that must be present.
    #[must_use]
    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Tags that must be absent.
    #[must_use]
    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    /// Whether something carrying `labels` is left out.
    ///
    /// Any excluded label skips; so does any required label that is missing.
    #[must_use]
    pub fn should_skip<S: AsRef<str>>(&self, labels: &[S]) -> bool {
        let has = |tag: &String| labels.iter().any(|label| label.as_ref() == tag);
        self.excluded.iter().any(has) || !self.required.iter().all(has)
    }
}

fn push_label(into: &mut Vec<String>, word: &str) {
    let label = word.trim_start_matches('@');
    if !label.is_empty() {
        into.push(label.to_owned());
    }
}
