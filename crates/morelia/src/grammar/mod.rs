//! Typed node tree of a feature file.
//!
//! Nodes live in a flat [`FeatureTree`] arena and refer to each other by
//! [`NodeId`]. Each [`NodeKind`] owns a language-specific recognizer, a
//! parent rule deciding where it attaches, and a reconstruction used in
//! diagnostics. Scenario outlines are expanded through [`permute`] and
//! [`NodeRef::augmented_predicate`].

mod error;
mod kind;
mod node;
mod outline;
mod row;
mod tree;

pub use error::SyntaxError;
pub use kind::{NodeKind, Recognized};
pub use node::{NodeId, NodeRef};
pub use outline::{Schedule, permute};
pub use row::split_cells;
pub use tree::FeatureTree;

pub(crate) use node::Node;

/// Per-kind callbacks driven by [`NodeKind::accept`].
pub trait Visitor {
    /// Error type that aborts the traversal.
    type Error;

    /// Visit the root Feature.
    ///
    /// # Errors
    /// Implementation defined.
    fn visit_feature(&mut self, id: NodeId) -> Result<(), Self::Error>;

    /// Visit a Background.
    ///
    /// # Errors
    /// Implementation defined.
    fn visit_background(&mut self, id: NodeId) -> Result<(), Self::Error>;

    /// Visit a Scenario.
    ///
    /// # Errors
    /// Implementation defined.
    fn visit_scenario(&mut self, id: NodeId) -> Result<(), Self::Error>;

    /// Visit any step kind.
    ///
    /// # Errors
    /// Implementation defined.
    fn visit_step(&mut self, id: NodeId) -> Result<(), Self::Error>;

    /// Visit a table row.
    ///
    /// # Errors
    /// Implementation defined.
    fn visit_row(&mut self, id: NodeId) -> Result<(), Self::Error>;

    /// Visit an Examples block.
    ///
    /// # Errors
    /// Implementation defined.
    fn visit_examples(&mut self, id: NodeId) -> Result<(), Self::Error>;

    /// Visit a comment.
    ///
    /// # Errors
    /// Implementation defined.
    fn visit_comment(&mut self, id: NodeId) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests;
