//! Convert lexed tokens into anchored regular-expression sources.

use std::collections::HashSet;

use crate::errors::{PatternError, placeholder_error};
use crate::hint::get_type_pattern;

use super::lexer::{Token, lex_pattern};

/// Regex source under construction.
#[derive(Default)]
struct Assembler {
    source: String,
    names: HashSet<String>,
    open_braces: usize,
}

impl Assembler {
    fn push(&mut self, token: Token) -> Result<(), PatternError> {
        match token {
            Token::Literal(text) => self.source.push_str(&regex::escape(&text)),
            Token::Placeholder { start, name, hint } => {
                self.group(start, name)?;
                self.source.push_str(get_type_pattern(hint.as_deref()));
                self.source.push(')');
            }
            Token::OpenBrace { .. } => {
                self.open_braces += 1;
                self.source.push_str(r"\{");
            }
            Token::CloseBrace { index } => {
                let Some(remaining) = self.open_braces.checked_sub(1) else {
                    return Err(placeholder_error(
                        "unmatched closing brace '}' in step pattern",
                        index,
                        None,
                    ));
                };
                self.open_braces = remaining;
                self.source.push_str(r"\}");
            }
        }
        Ok(())
    }

    /// Open a named group for `name`, or a positional group for `{}`.
    fn group(&mut self, start: usize, name: Option<String>) -> Result<(), PatternError> {
        let Some(name) = name else {
            self.source.push('(');
            return Ok(());
        };
        self.source.push_str("(?P<");
        self.source.push_str(&name);
        self.source.push('>');
        if self.names.insert(name.clone()) {
            Ok(())
        } else {
            Err(PatternError::DuplicateName {
                name,
                position: start,
            })
        }
    }
}

/// Build an anchored regular expression from a format pattern.
///
/// Named placeholders become named groups and anonymous `{}` placeholders
/// become positional groups, so a match yields both kinds of argument.
///
/// # Errors
/// Returns [`PatternError`] when the pattern contains malformed placeholders,
/// repeats a placeholder name or leaves braces unbalanced.
///
/// # Examples
/// ```
/// # use morelia_patterns::build_regex_from_pattern;
/// let regex = build_regex_from_pattern("Given {item} and {}")?;
/// assert_eq!(regex, r"^Given (?P<item>.+?) and (.+?)$");
/// # Ok::<(), morelia_patterns::PatternError>(())
/// ```
pub fn build_regex_from_pattern(pat: &str) -> Result<String, PatternError> {
    let mut assembler = Assembler {
        source: String::with_capacity(pat.len().saturating_mul(2) + 2),
        ..Assembler::default()
    };
    assembler.source.push('^');
    for token in lex_pattern(pat)? {
        assembler.push(token)?;
    }
    if assembler.open_braces > 0 {
        return Err(placeholder_error(
            "unbalanced braces in step pattern",
            pat.len(),
            None,
        ));
    }
    assembler.source.push('$');
    Ok(assembler.source)
}

#[cfg(test)]
mod tests {
    use super::build_regex_from_pattern;
    use crate::errors::PatternError;
    use rstest::rstest;

    #[rstest]
    #[case("I have {count:u32} cukes", r"^I have (?P<count>\d+) cukes$")]
    #[case("costs ${} (approx.)", r"^costs \$(.+?) \(approx\.\)$")]
    #[case("a {{literal}} brace", r"^a \{literal\} brace$")]
    fn builds_anchored_sources(#[case] pattern: &str, #[case] expected: &str) {
        let source = build_regex_from_pattern(pattern)
            .unwrap_or_else(|error| panic!("{pattern} should compile: {error}"));
        assert_eq!(source, expected);
    }

    #[rstest]
    #[case("broken}", "unmatched closing brace '}' in step pattern at offset 6")]
    #[case("{open", "missing closing '}' for placeholder in `{open}` at offset 0")]
    #[case("x { y", "unbalanced braces in step pattern at offset 5")]
    fn rejects_unbalanced_braces(#[case] pattern: &str, #[case] expected: &str) {
        let Err(error) = build_regex_from_pattern(pattern) else {
            panic!("{pattern} should fail");
        };
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn rejects_repeated_names() {
        let Err(error) = build_regex_from_pattern("{a} then {a}") else {
            panic!("repeated name should fail");
        };
        assert!(matches!(error, PatternError::DuplicateName { ref name, position: 9 } if name == "a"));
    }
}
