//! Scenario outlines: table dimensions, permutation schedules, placeholder
//! substitution and background merging.

use std::borrow::Cow;
use std::sync::LazyLock;

use derive_more::{Deref, From, IntoIterator};
use regex::Regex;

use super::kind::NodeKind;
use super::node::{NodeId, NodeRef};
use super::tree::FeatureTree;

static PLACEHOLDER: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"<(\w+)>").ok());

/// Row-index tuples a scenario is executed with, in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Deref, From, IntoIterator)]
pub struct Schedule(#[into_iterator(owned, ref)] Vec<Vec<usize>>);

/// Enumerate the Cartesian product of `0..max(d, 1)` over `dimensions`.
///
/// The last dimension varies fastest.
///
/// # Examples
/// ```
/// use morelia::grammar::permute;
///
/// let schedule = permute(&[2, 0, 3]);
/// assert_eq!(schedule.len(), 6);
/// assert_eq!(schedule.first(), Some(&vec![0, 0, 0]));
/// assert_eq!(schedule.get(1), Some(&vec![0, 0, 1]));
/// assert_eq!(schedule.last(), Some(&vec![1, 0, 2]));
/// ```
#[must_use]
pub fn permute(dimensions: &[usize]) -> Schedule {
    let mut entries = vec![Vec::with_capacity(dimensions.len())];
    for &dimension in dimensions {
        let span = dimension.max(1);
        entries = entries
            .into_iter()
            .flat_map(|prefix| {
                (0..span).map(move |index| {
                    let mut entry = prefix.clone();
                    entry.push(index);
                    entry
                })
            })
            .collect();
    }
    Schedule(entries)
}

impl FeatureTree {
    /// Number of data rows below each child of `id`, header rows excluded.
    #[must_use]
    pub fn dimensions(&self, id: NodeId) -> Vec<usize> {
        self.node(id).map_or_else(Vec::new, |node| {
            node.children()
                .map(|child| child.rows().count().saturating_sub(1))
                .collect()
        })
    }

    /// Permutation schedule of a scenario.
    #[must_use]
    pub fn schedule(&self, id: NodeId) -> Schedule {
        permute(&self.dimensions(id))
    }

    /// Select the table rows used for placeholder substitution.
    pub fn set_row_indices(&mut self, id: NodeId, indices: Vec<usize>) {
        if let Some(node) = self.node_mut(id) {
            node.row_indices = indices;
        }
    }

    /// Prepend copies of the feature's Background children to `scenario`.
    ///
    /// The merge happens once per scenario; later calls return the copies
    /// made the first time. Copies are re-parented to the scenario and share
    /// their table rows with the originals.
    pub fn prepend_background(&mut self, scenario: NodeId) -> Vec<NodeId> {
        let Some(node) = self.node(scenario) else {
            return Vec::new();
        };
        if let Some(merged) = &node.node.background_steps {
            return merged.clone();
        }
        let background = node
            .parent()
            .and_then(|feature| {
                feature
                    .children()
                    .find(|child| child.kind() == NodeKind::Background)
            })
            .map(|background| background.node.children.clone())
            .unwrap_or_default();

        let mut copies = Vec::with_capacity(background.len());
        for original in background {
            let Some(template) = self.node(original).map(|step| step.node.clone()) else {
                continue;
            };
            let mut copy = template;
            copy.parent = Some(scenario);
            copies.push(self.push(copy));
        }
        if let Some(target) = self.node_mut(scenario) {
            let mut children = copies.clone();
            children.append(&mut target.children);
            target.children = children;
            target.background_steps = Some(copies.clone());
        }
        copies
    }
}

impl<'a> NodeRef<'a> {
    /// The predicate with `<name>` placeholders replaced by the table cells
    /// selected by the parent scenario's current row indices.
    ///
    /// Steps of un-dimensioned scenarios, steps without placeholders and
    /// steps still owned by a Background are returned verbatim.
    #[must_use]
    pub fn augmented_predicate(&self) -> Cow<'a, str> {
        let predicate = self.predicate();
        let Some(parent) = self.parent() else {
            return Cow::Borrowed(predicate);
        };
        if parent.kind() == NodeKind::Background {
            return Cow::Borrowed(predicate);
        }
        if self.tree.dimensions(parent.id()).iter().all(|d| *d == 0) {
            return Cow::Borrowed(predicate);
        }
        let Some(placeholder) = PLACEHOLDER.as_ref() else {
            return Cow::Borrowed(predicate);
        };
        let names: Vec<&str> = placeholder
            .captures_iter(predicate)
            .filter_map(|captures| captures.get(1).map(|name| name.as_str()))
            .collect();
        if names.is_empty() {
            return Cow::Borrowed(predicate);
        }

        let siblings: Vec<Self> = parent.children().collect();
        let mut augmented = predicate.to_owned();
        for name in names {
            for (sibling, row_index) in siblings.iter().zip(parent.row_indices()) {
                if let Some(value) = lookup_cell(*sibling, *row_index, name) {
                    augmented = augmented.replace(&format!("<{name}>"), &value);
                }
            }
        }
        Cow::Owned(augmented)
    }
}

fn lookup_cell(table: NodeRef<'_>, row_index: usize, name: &str) -> Option<String> {
    let mut rows = table.rows();
    let header = rows.next()?;
    let column = header.cells().iter().position(|title| title == name)?;
    let row = rows.nth(row_index)?;
    row.cells()
        .get(column)
        .map(|cell| cell.replace('\n', "\\n"))
}
