//! Placeholder type-code helpers used during regex compilation.

/// Translate a placeholder type code into a regular-expression fragment.
///
/// Both the single-letter codes of format patterns (`d`, `f`, `w`, `W`, `s`,
/// `S`, `l`) and Rust primitive names (`u32`, `i64`, `f64`, ...) are
/// understood. Anything else falls back to a lazy match.
///
/// # Examples
/// ```
/// use morelia_patterns::get_type_pattern;
/// assert_eq!(get_type_pattern(Some("d")), r"[+-]?\d+");
/// assert_eq!(get_type_pattern(Some("u32")), r"\d+");
/// assert_eq!(get_type_pattern(None), ".+?");
/// ```
#[must_use]
pub fn get_type_pattern(type_hint: Option<&str>) -> &'static str {
    match type_hint {
        Some("u8" | "u16" | "u32" | "u64" | "u128" | "usize") => r"\d+",
        Some("d" | "i8" | "i16" | "i32" | "i64" | "i128" | "isize") => r"[+-]?\d+",
        Some("f" | "e" | "g" | "f32" | "f64") => {
            r"(?i:(?:[+-]?(?:\d+\.\d*|\.\d+|\d+)(?:[eE][+-]?\d+)?|nan|inf|infinity))"
        }
        Some("w") => r"\w+",
        Some("W") => r"\W+",
        Some("s") => r"\s+",
        Some("S") => r"\S+",
        Some("l") => r"[[:alpha:]]+",
        _ => r".+?",
    }
}
