//! Arena holding every node of one parsed feature file.

use super::error::SyntaxError;
use super::kind::{NodeKind, ParentRule};
use super::node::{Node, NodeId, NodeRef};
use crate::localization;

/// Every node parsed from one source, addressed by [`NodeId`].
///
/// Parent links are plain indices, so copying a subtree never creates
/// ownership cycles.
#[derive(Debug, Clone, Default)]
pub struct FeatureTree {
    nodes: Vec<Node>,
    feature: Option<NodeId>,
    filename: String,
}

impl FeatureTree {
    pub(crate) fn new(filename: impl Into<String>) -> Self {
        Self {
            nodes: Vec::new(),
            feature: None,
            filename: filename.into(),
        }
    }

    /// Name of the source the tree was parsed from.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The root Feature node.
    ///
    /// Trees returned by the parser always have one.
    #[must_use]
    pub fn feature(&self) -> Option<NodeRef<'_>> {
        self.feature.and_then(|id| self.node(id))
    }

    /// Borrow a node by identifier.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.nodes.get(id.0).map(|node| NodeRef {
            tree: self,
            id,
            node,
        })
    }

    /// Every node in parse order, reachable from the Feature or not.
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_>> {
        self.nodes.iter().enumerate().map(|(index, node)| NodeRef {
            tree: self,
            id: NodeId(index),
            node,
        })
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    pub(crate) fn last_id(&self) -> Option<NodeId> {
        self.nodes.len().checked_sub(1).map(NodeId)
    }

    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Link `node` to the nearest eligible predecessor and store it.
    ///
    /// Every kind but Feature and Comment needs such a predecessor, so only
    /// comments can precede the Feature.
    pub(crate) fn attach(&mut self, mut node: Node) -> Result<NodeId, SyntaxError> {
        match node.kind.parent_rule() {
            ParentRule::Root => {
                if self.feature.is_some() {
                    let message = localization::message("syntax-only-one-feature");
                    return Err(self.error_for(&node, None, message));
                }
            }
            ParentRule::Any => node.parent = self.last_id(),
            ParentRule::OneOf(kinds) => {
                let Some(parent) = self
                    .nodes
                    .iter()
                    .rposition(|candidate| kinds.contains(&candidate.kind))
                else {
                    let message = missing_parent_message(node.kind, kinds);
                    return Err(self.error_for(&node, None, message));
                };
                node.parent = Some(NodeId(parent));
            }
        }
        let is_feature = node.kind == NodeKind::Feature;
        let parent = node.parent;
        let id = self.push(node);
        if let Some(parent) = parent.and_then(|parent| self.node_mut(parent)) {
            parent.children.push(id);
        }
        if is_feature {
            self.feature = Some(id);
        }
        self.validate(id)?;
        Ok(id)
    }

    /// Extend a node with an unrecognized follow-up line.
    pub(crate) fn append_line(&mut self, id: NodeId, line: &str) -> Result<(), SyntaxError> {
        if let Some(node) = self.node_mut(id) {
            node.append_line(line);
        }
        self.validate(id)
    }

    pub(crate) fn set_payload(&mut self, id: NodeId, payload: String) {
        if let Some(node) = self.node_mut(id) {
            node.payload = payload;
        }
    }

    pub(crate) fn set_children(&mut self, id: NodeId, children: Vec<NodeId>) {
        if let Some(node) = self.node_mut(id) {
            node.children = children;
        }
    }

    fn validate(&self, id: NodeId) -> Result<(), SyntaxError> {
        match self.nodes.get(id.0) {
            Some(node) if node.kind == NodeKind::Comment && node.predicate.contains('\n') => {
                Err(self.syntax_error(id, localization::message("syntax-linefeed-in-comment")))
            }
            _ => Ok(()),
        }
    }

    /// Build a syntax error located at `id`.
    ///
    /// The snippet reconstructs the parent and the node itself.
    #[must_use]
    pub fn syntax_error(&self, id: NodeId, message: impl Into<String>) -> SyntaxError {
        let message = message.into();
        self.nodes.get(id.0).map_or_else(
            || SyntaxError::new(&self.filename, 0, "", message.clone()),
            |node| {
                let parent = node.parent.and_then(|parent| self.nodes.get(parent.0));
                self.error_for(node, parent, message.clone())
            },
        )
    }

    fn error_for(
        &self,
        node: &Node,
        parent: Option<&Node>,
        message: impl Into<String>,
    ) -> SyntaxError {
        let mut text = parent.map(Node::reconstruction).unwrap_or_default();
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(&node.reconstruction());
        let snippet = text.replace("\n\n", "\n").replace('\n', "\n\t");
        SyntaxError::new(&self.filename, node.line, snippet, message)
    }
}

fn missing_parent_message(kind: NodeKind, parents: &[NodeKind]) -> String {
    let separator = format!(" {} ", localization::message("syntax-keyword-separator"));
    let parents = parents
        .iter()
        .map(|parent| parent.name())
        .collect::<Vec<_>>()
        .join(&separator);
    localization::message_with_args("syntax-missing-parent", |args| {
        args.set("kind", kind.name());
        args.set("parents", parents);
    })
}
