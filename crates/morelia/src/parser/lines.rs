//! Line source feeding the parser.

/// Lazily yields the non-blank lines of a document.
///
/// Line numbers count only the lines handed out, so blank and
/// whitespace-only lines do not advance them.
#[derive(Debug)]
pub(crate) struct LineSource<'a> {
    lines: std::str::Lines<'a>,
    line_number: usize,
}

impl<'a> LineSource<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line_number: 0,
        }
    }

    /// Number of the line most recently returned.
    pub(crate) fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<'a> Iterator for LineSource<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.find(|line| !line.trim().is_empty())?;
        self.line_number += 1;
        Some(line)
    }
}
