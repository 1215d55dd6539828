//! Splitting table rows into cells.

/// Split a row predicate into trimmed cell values.
///
/// The leading pipe is already consumed by the row keyword; a single trailing
/// pipe is dropped. A backslash-escaped pipe becomes a literal pipe inside its
/// cell; other escapes are kept verbatim.
///
/// # Examples
/// ```
/// use morelia::grammar::split_cells;
///
/// assert_eq!(split_cells("a | b |"), vec!["a", "b"]);
/// assert_eq!(split_cells(r"x \| y | z |"), vec!["x | y", "z"]);
/// ```
#[must_use]
pub fn split_cells(predicate: &str) -> Vec<String> {
    let trimmed = predicate.trim_end();
    let body = trimmed.strip_suffix('|').unwrap_or(trimmed);
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('|') => current.push('|'),
                Some(escaped) => {
                    current.push(c);
                    current.push(escaped);
                }
                None => current.push(c),
            },
            '|' => cells.push(std::mem::take(&mut current).trim().to_owned()),
            _ => current.push(c),
        }
    }
    cells.push(current.trim().to_owned());
    cells
}

#[cfg(test)]
mod tests {
    use super::split_cells;
    use rstest::rstest;

    #[rstest]
    #[case("a | b | c |", &["a", "b", "c"])]
    #[case("  98.00 | Rhode Island |  8.25 |", &["98.00", "Rhode Island", "8.25"])]
    #[case("a | b", &["a", "b"])]
    #[case("only |", &["only"])]
    #[case(r"pipe \| inside | next |", &["pipe | inside", "next"])]
    #[case(r"C:\temp | \|edge\| |", &[r"C:\temp", "|edge|"])]
    #[case("| |", &["", ""])]
    fn splits_rows(#[case] predicate: &str, #[case] expected: &[&str]) {
        assert_eq!(split_cells(predicate), expected);
    }
}
