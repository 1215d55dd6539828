//! Conversion of step patterns into regular expressions.
#![expect(clippy::expect_used, reason = "test asserts conversion path")]

use regex::Regex;

use morelia_patterns::{
    Capture, PatternError, build_regex_from_pattern, compile_regex_from_pattern,
    extract_captured_values, extract_captures, get_type_pattern,
};

#[test]
fn compile_regex_from_pattern_smoke_test() {
    let regex =
        compile_regex_from_pattern("Given {n:d}").expect("pattern should compile into regex");
    assert!(regex.is_match("given 12"));

    assert!(
        compile_regex_from_pattern("broken {").is_err(),
        "malformed pattern should fail to compile"
    );
}

#[test]
fn builds_regex_and_extracts_values() {
    let regex_src =
        build_regex_from_pattern("I have {count:u32} cukes").expect("pattern should compile");
    let regex = Regex::new(&regex_src).expect("regex should compile");
    let captures = extract_captured_values(&regex, "I have 12 cukes")
        .expect("expected captures for test step");
    assert_eq!(captures, vec!["12".to_string()]);
}

#[test]
fn separates_named_and_positional_arguments() {
    let regex = compile_regex_from_pattern("{} enters {weight:f} kg of {fruit}")
        .expect("pattern should compile");
    let captures = extract_captures(&regex, "Alice enters 2.5 kg of apples")
        .expect("expected captures for test step");
    assert_eq!(
        captures,
        vec![
            Capture {
                name: None,
                value: "Alice".into(),
            },
            Capture {
                name: Some("weight".into()),
                value: "2.5".into(),
            },
            Capture {
                name: Some("fruit".into()),
                value: "apples".into(),
            },
        ]
    );
}

#[test]
fn exposes_placeholder_error_details() {
    let err = build_regex_from_pattern("I enter {value:} twice").expect_err("empty type code");
    assert!(matches!(err, PatternError::Placeholder { .. }));
    assert_eq!(err.placeholder(), Some("value"));
    assert_eq!(err.position(), Some(8));
}

#[test]
fn maps_unknown_type_hint_to_lazy_match() {
    assert_eq!(get_type_pattern(Some("Custom")), r".+?");
    assert_eq!(get_type_pattern(None), r".+?");
}

#[test]
fn rejects_placeholder_hint_with_whitespace() {
    let Err(err) = build_regex_from_pattern("{value:bad hint}") else {
        panic!("expected placeholder error");
    };
    assert!(err.to_string().contains("invalid placeholder"));
}

#[test]
fn format_patterns_require_a_full_match() {
    let regex = compile_regex_from_pattern("I press {key}").expect("pattern should compile");
    assert!(regex.is_match("I press add"));
    assert!(!regex.is_match("and I press add"));
}
