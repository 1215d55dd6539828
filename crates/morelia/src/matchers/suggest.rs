//! Method stubs proposed for unmatched steps.

use std::sync::LazyLock;

use convert_case::{Case, Casing};
use regex::{NoExpand, Regex};

static TOKEN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r#""(.+?)"|<(.+?)>"#).ok());
static NON_WORD: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[^\w]+").ok());
static WIDE_SPACE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r" \s+").ok());

const PREFIX: &str = "step";

/// A ready-to-paste method implementing a missing step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Suggestion {
    /// Registration line and method skeleton.
    pub code: String,
    /// Method name without its `step_` prefix.
    pub method_name: String,
    /// Pattern as a raw string literal, empty when matching by name.
    pub docstring: String,
}

impl Suggestion {
    /// Stub whose pattern is a regular expression.
    ///
    /// Quoted values become `"([^"]+)"` groups and `<placeholders>` become
    /// `(.+)` groups; everything else is escaped.
    ///
    /// # Examples
    /// ```
    /// use morelia::matchers::Suggestion;
    ///
    /// let suggestion = Suggestion::for_regex(r#"I enter "50" into the calculator"#);
    /// assert_eq!(suggestion.method_name, "i_enter_number_into_the_calculator");
    /// assert_eq!(suggestion.docstring, r##"r#"I enter "([^"]+)" into the calculator"#"##);
    /// ```
    #[must_use]
    pub fn for_regex(predicate: &str) -> Self {
        Self::with_template(predicate, Style::Regex)
    }

    /// Stub whose pattern is a format string.
    ///
    /// ```
    /// use morelia::matchers::Suggestion;
    ///
    /// let suggestion = Suggestion::for_format("ship to <destination> by <speed>");
    /// assert_eq!(suggestion.docstring, r##"r#"ship to {destination} by {speed}"#"##);
    /// ```
    #[must_use]
    pub fn for_format(predicate: &str) -> Self {
        Self::with_template(predicate, Style::Format)
    }

    /// Stub matched by its method name alone.
    #[must_use]
    pub fn for_method_name(predicate: &str) -> Self {
        let method_name = slug(predicate, false);
        let code = skeleton(&format!("Self::{PREFIX}_{method_name}"), &method_name, false, predicate);
        Self {
            code,
            method_name,
            docstring: String::new(),
        }
    }

    fn with_template(predicate: &str, style: Style) -> Self {
        let arguments = name_arguments(&extra_arguments(predicate));
        let pattern = style.template(predicate, &arguments);
        let docstring = raw_literal(&pattern);
        let method_name = slugify(predicate);
        let mut registration = format!("Self::{PREFIX}_{method_name}, {docstring}");
        if !arguments.is_empty() {
            let params: Vec<String> = arguments.iter().map(|name| format!("{name:?}")).collect();
            registration.push_str(&format!(", [{}]", params.join(", ")));
        }
        let code = skeleton(&registration, &method_name, !arguments.is_empty(), predicate);
        Self {
            code,
            method_name,
            docstring,
        }
    }
}

fn skeleton(registration: &str, method_name: &str, uses_args: bool, predicate: &str) -> String {
    let args = if uses_args { "args" } else { "_args" };
    format!(
        "    // step!({registration})\n    fn {PREFIX}_{method_name}(&mut self, {args}: &StepArgs) -> StepResult {{\n        todo!({predicate:?})\n    }}\n\n"
    )
}

/// Identifier-safe form of `text`.
///
/// Non-word runs become single underscores, numeric words become `number`,
/// non-ASCII characters are dropped and the result is lower snake case.
///
/// # Examples
/// ```
/// use morelia::matchers::slugify;
///
/// assert_eq!(slugify("missing thing"), "missing_thing");
/// assert_eq!(slugify(r#"I enter "50" into the calculator"#), "i_enter_number_into_the_calculator");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    slug(text, true)
}

fn slug(text: &str, replace_numbers: bool) -> String {
    let Some(non_word) = NON_WORD.as_ref() else {
        return String::new();
    };
    let words: Vec<String> = non_word
        .split(text)
        .map(|word| {
            let ascii: String = word
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect();
            if replace_numbers && is_number(&ascii) {
                "number".to_owned()
            } else {
                ascii
            }
        })
        .collect();
    words
        .join("_")
        .trim_matches('_')
        .from_case(Case::Snake)
        .to_case(Case::Snake)
}

fn is_number(text: &str) -> bool {
    !text.trim().is_empty() && text.trim().parse::<f64>().is_ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Argument {
    Number,
    Id(String),
}

fn extra_arguments(predicate: &str) -> Vec<Argument> {
    let Some(token) = TOKEN.as_ref() else {
        return Vec::new();
    };
    token
        .captures_iter(predicate)
        .filter_map(|captures| captures.get(1).or_else(|| captures.get(2)))
        .map(|value| {
            if is_number(value.as_str()) {
                Argument::Number
            } else {
                Argument::Id(slugify(value.as_str()))
            }
        })
        .collect()
}

fn name_arguments(arguments: &[Argument]) -> Vec<String> {
    let numbers = arguments
        .iter()
        .filter(|argument| **argument == Argument::Number)
        .count();
    let mut suffix = 0usize;
    arguments
        .iter()
        .map(|argument| match argument {
            Argument::Number if numbers < 2 => "number".to_owned(),
            Argument::Number => {
                suffix += 1;
                format!("number{suffix}")
            }
            Argument::Id(name) => name.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
enum Style {
    Regex,
    Format,
}

impl Style {
    fn template(self, predicate: &str, names: &[String]) -> String {
        let Some(token) = TOKEN.as_ref() else {
            return self.literal(predicate);
        };
        let mut pattern = String::with_capacity(predicate.len());
        let mut last = 0;
        for (found, name) in token.find_iter(predicate).zip(names) {
            let text = predicate.get(last..found.start()).unwrap_or_default();
            pattern.push_str(&self.literal(text));
            pattern.push_str(&self.placeholder(name, found.as_str().starts_with('"')));
            last = found.end();
        }
        pattern.push_str(&self.literal(predicate.get(last..).unwrap_or_default()));
        pattern
    }

    fn literal(self, text: &str) -> String {
        match self {
            Self::Regex => {
                let escaped = regex::escape(text).replace('\n', r"\n");
                WIDE_SPACE.as_ref().map_or_else(
                    || escaped.clone(),
                    |wide| wide.replace_all(&escaped, NoExpand(r"\s+")).into_owned(),
                )
            }
            Self::Format => text
                .replace('{', "{{")
                .replace('}', "}}")
                .replace('\n', r"\n"),
        }
    }

    fn placeholder(self, name: &str, quoted: bool) -> String {
        match (self, quoted) {
            (Self::Regex, true) => r#""([^"]+)""#.to_owned(),
            (Self::Regex, false) => "(.+)".to_owned(),
            (Self::Format, true) => format!("\"{{{name}}}\""),
            (Self::Format, false) => format!("{{{name}}}"),
        }
    }
}

fn raw_literal(text: &str) -> String {
    let mut hashes = String::from("#");
    while text.contains(&format!("\"{hashes}")) {
        hashes.push('#');
    }
    format!("r{hashes}\"{text}\"{hashes}")
}
