//! Plain and colored text rendering of a running feature.

use std::io::Write;

use crate::execution::{StepReport, StepStatus, VisitorObserver};
use crate::grammar::NodeRef;

const RESET: &str = "\x1b[0m";

fn color(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Passed => "\x1b[32m",
        StepStatus::Failed | StepStatus::Errored => "\x1b[31m",
    }
}

/// Writes each node's source line to a sink as the feature runs.
///
/// Step lines are padded to 60 columns and followed by the status and the
/// duration. The colored variant drops the status word and colors the whole
/// line instead. Write failures are logged and otherwise ignored.
///
/// ```
/// use morelia::reporting::TextFormat;
///
/// let format = TextFormat::new(Vec::new());
/// assert!(format.get_ref().is_empty());
/// ```
#[derive(Debug)]
pub struct TextFormat<W: Write> {
    sink: W,
    color: bool,
}

impl<W: Write> TextFormat<W> {
    /// Plain text output.
    pub fn new(sink: W) -> Self {
        Self { sink, color: false }
    }

    /// ANSI-colored output.
    pub fn colored(sink: W) -> Self {
        Self { sink, color: true }
    }

    /// The sink written to.
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Recover the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn emit(&mut self, text: &str) {
        if let Err(error) = self
            .sink
            .write_all(text.as_bytes())
            .and_then(|()| self.sink.flush())
        {
            log::warn!("cannot write feature output: {error}");
        }
    }
}

impl<W: Write> VisitorObserver for TextFormat<W> {
    fn feature_started(&mut self, node: NodeRef<'_>) {
        self.emit("\n");
        self.node_started(node);
    }

    fn step_started(&mut self, _node: NodeRef<'_>) {}

    fn step_finished(&mut self, node: NodeRef<'_>, report: &StepReport) {
        let source = node.interpolated_source();
        let line = source.trim_matches('\n');
        let seconds = report.duration.as_secs_f64();
        let text = if self.color {
            format!("{}{line:<60} # {seconds:.3}s{RESET}\n", color(report.status))
        } else {
            format!("{line:<60} # {:<5} {seconds:.3}s\n", report.status.as_str())
        };
        self.emit(&text);
    }

    fn node_started(&mut self, node: NodeRef<'_>) {
        let source = node.interpolated_source();
        let text = format!("{}\n", source.trim_matches('\n'));
        self.emit(&text);
    }
}
