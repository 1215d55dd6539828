//! Format-pattern utilities shared by the morelia step matchers.
//!
//! Step methods may describe the text they accept with a format-like pattern
//! such as `the result should be "{number:d}" on the screen`. This crate turns
//! those patterns into anchored regular expressions and extracts the captured
//! values, keeping the regex construction separate from the runtime crate.

mod capture;
mod errors;
mod hint;
mod pattern;

pub use capture::{Capture, extract_captured_values, extract_captures};
pub use errors::PatternError;
pub use hint::get_type_pattern;
pub use pattern::{build_regex_from_pattern, compile_regex_from_pattern};
