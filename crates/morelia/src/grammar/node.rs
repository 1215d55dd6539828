//! Nodes stored in a [`FeatureTree`](super::FeatureTree) and borrowed views of them.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::kind::NodeKind;
use super::row::split_cells;
use super::tree::FeatureTree;

static CONTINUATION_BREAK: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[ \t]*\\[ \t]*\n").ok());

/// A fold together with the indentation of the continued line.
static STEP_CONTINUATION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[ \t]*\\[ \t]*\n[ \t]*").ok());

/// Index of a node inside its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the tree's arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A parsed grammar element.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) keyword: String,
    pub(crate) source: String,
    pub(crate) predicate: String,
    pub(crate) line: usize,
    pub(crate) language: String,
    pub(crate) labels: Vec<String>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) payload: String,
    pub(crate) row_indices: Vec<usize>,
    pub(crate) background_steps: Option<Vec<NodeId>>,
}

impl Node {
    /// Build a node whose predicate starts at `predicate_start` in `source`.
    pub(crate) fn new(
        kind: NodeKind,
        keyword: &str,
        source: String,
        predicate_start: usize,
        line: usize,
        language: &str,
        labels: Vec<String>,
    ) -> Self {
        let predicate = extract_predicate(kind, &source, predicate_start);
        Self {
            kind,
            keyword: keyword.to_owned(),
            source,
            predicate,
            line,
            language: language.to_owned(),
            labels,
            parent: None,
            children: Vec::new(),
            payload: String::new(),
            row_indices: vec![0],
            background_steps: None,
        }
    }

    pub(crate) fn append_line(&mut self, line: &str) {
        self.source.push('\n');
        self.source.push_str(line);
        self.predicate.push('\n');
        self.predicate.push_str(line.trim());
    }

    pub(crate) fn reconstruction(&self) -> String {
        let Self {
            keyword, predicate, ..
        } = self;
        let recon = match self.kind {
            NodeKind::Feature => {
                format!("{keyword}: {}", predicate.replace('\n', "\n    "))
            }
            NodeKind::Scenario => return format!("\n{keyword}: {predicate}"),
            NodeKind::Background => format!("{keyword}: {predicate}"),
            NodeKind::Examples => format!("    {keyword}: {predicate}"),
            NodeKind::Row => format!("        | {predicate}"),
            NodeKind::Comment => format!("    # {predicate}"),
            NodeKind::Given
            | NodeKind::When
            | NodeKind::Then
            | NodeKind::And
            | NodeKind::But
            | NodeKind::Step => format!("  {keyword}: {predicate}"),
        };
        terminate_line(recon)
    }
}

fn terminate_line(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

/// Step folds join into one line; other kinds keep the line break.
fn extract_predicate(kind: NodeKind, source: &str, start: usize) -> String {
    let rest = source.get(start..).unwrap_or_default();
    let (fold, joint) = if kind.is_step() {
        (&STEP_CONTINUATION, " ")
    } else {
        (&CONTINUATION_BREAK, "\n")
    };
    let unfolded = fold
        .as_ref()
        .map_or(Cow::Borrowed(rest), |regex| regex.replace_all(rest, joint));
    unfolded.trim().to_owned()
}

/// A borrowed view of one node together with the tree that owns it.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    pub(crate) tree: &'a FeatureTree,
    pub(crate) id: NodeId,
    pub(crate) node: &'a Node,
}

impl<'a> NodeRef<'a> {
    /// Identifier of the node.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Kind of the node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.node.kind
    }

    /// Keyword exactly as written in the source, for example `Scenario Outline`.
    #[must_use]
    pub fn keyword(&self) -> &'a str {
        &self.node.keyword
    }

    /// Raw source text, including folded continuation lines.
    #[must_use]
    pub fn source(&self) -> &'a str {
        &self.node.source
    }

    /// Source text without its keyword.
    #[must_use]
    pub fn predicate(&self) -> &'a str {
        &self.node.predicate
    }

    /// 1-based line number, counting non-blank lines.
    #[must_use]
    pub fn line(&self) -> usize {
        self.node.line
    }

    /// Language active when the node was parsed.
    #[must_use]
    pub fn language(&self) -> &'a str {
        &self.node.language
    }

    /// Labels written directly above this node, without the `@`.
    #[must_use]
    pub fn own_labels(&self) -> &'a [String] {
        &self.node.labels
    }

    /// Own labels followed by the labels of every ancestor.
    ///
    /// Duplicates are kept.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        let mut labels = self.node.labels.clone();
        if let Some(parent) = self.parent() {
            labels.extend(parent.labels());
        }
        labels
    }

    /// Docstring attached to the node; empty when none was given.
    #[must_use]
    pub fn payload(&self) -> &'a str {
        &self.node.payload
    }

    /// Current row-index vector of an outline scenario.
    #[must_use]
    pub fn row_indices(&self) -> &'a [usize] {
        &self.node.row_indices
    }

    /// The parent node, if the node is attached.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.node.parent.and_then(|id| self.tree.node(id))
    }

    /// Children in source order.
    pub fn children(self) -> impl Iterator<Item = Self> + 'a {
        let tree = self.tree;
        self.node
            .children
            .iter()
            .filter_map(move |child| tree.node(*child))
    }

    /// Row children in source order; the first one is the header.
    pub fn rows(self) -> impl Iterator<Item = Self> + 'a {
        self.children().filter(|child| child.kind() == NodeKind::Row)
    }

    /// Cells of a row; empty for other kinds.
    #[must_use]
    pub fn cells(&self) -> Vec<String> {
        if self.kind() == NodeKind::Row {
            split_cells(self.predicate())
        } else {
            Vec::new()
        }
    }

    /// Name of the source the tree was parsed from.
    #[must_use]
    pub fn filename(&self) -> &'a str {
        self.tree.filename()
    }

    /// Canonical one-line rendering used in diagnostics.
    #[must_use]
    pub fn reconstruction(&self) -> String {
        self.node.reconstruction()
    }

    /// Source text with outline placeholders resolved against the parent's
    /// current row indices.
    ///
    /// Non-step nodes render their source unchanged.
    #[must_use]
    pub fn interpolated_source(&self) -> String {
        if !self.kind().is_step() {
            return terminate_line(self.source().to_owned());
        }
        let augmented = self.augmented_predicate();
        let source = self.source();
        let predicate = self.predicate();
        let rendered = if augmented == predicate {
            source.to_owned()
        } else if !predicate.is_empty() && source.contains(predicate) {
            source.replacen(predicate, &augmented, 1)
        } else {
            format!("{} {augmented}", self.keyword())
        };
        terminate_line(rendered)
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("kind", &self.node.kind)
            .field("line", &self.node.line)
            .field("predicate", &self.node.predicate)
            .finish_non_exhaustive()
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}
