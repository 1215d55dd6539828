//! Format-pattern lexing and compilation helpers.

mod compiler;
mod lexer;
mod placeholder;

use crate::errors::PatternError;
use regex::{Regex, RegexBuilder};

pub use compiler::build_regex_from_pattern;

/// Build and compile a case-insensitive regular expression from a format
/// pattern.
///
/// # Errors
/// Returns [`PatternError`] when placeholder parsing fails or the generated
/// regex source cannot be compiled.
pub fn compile_regex_from_pattern(pat: &str) -> Result<Regex, PatternError> {
    let source = build_regex_from_pattern(pat)?;
    RegexBuilder::new(&source)
        .case_insensitive(true)
        .build()
        .map_err(PatternError::from)
}

#[cfg(test)]
mod tests {
    use super::{build_regex_from_pattern, compile_regex_from_pattern};
    use crate::errors::PatternError;
    use rstest::rstest;

    #[rstest]
    #[case("I press add", "I PRESS ADD")]
    #[case("the result should be \"{number}\" on the screen", "The result should be \"120\" on the screen")]
    fn compiled_patterns_ignore_case(#[case] pattern: &str, #[case] text: &str) {
        let regex = compile_regex_from_pattern(pattern)
            .unwrap_or_else(|error| panic!("{pattern} should compile: {error}"));
        assert!(regex.is_match(text));
    }

    #[test]
    fn literal_patterns_are_anchored() {
        let source = build_regex_from_pattern("I press add")
            .unwrap_or_else(|error| panic!("pattern should compile: {error}"));
        assert_eq!(source, "^I press add$");
    }

    #[test]
    fn oversized_patterns_surface_regex_errors() {
        let pattern = format!("enter {}", "{:f}".repeat(20_000));
        let Err(error) = compile_regex_from_pattern(&pattern) else {
            panic!("pattern should be too large");
        };
        assert!(matches!(error, PatternError::Regex(regex::Error::CompiledTooBig(_))));
    }
}
