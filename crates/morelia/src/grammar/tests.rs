//! Tree-level tests: parent linking, outlines and backgrounds.

use std::collections::BTreeSet;

use rstest::rstest;

use super::{FeatureTree, Node, NodeId, NodeKind, NodeRef, permute};
use crate::parser::parse;

fn parsed(text: &str) -> FeatureTree {
    parse(text).unwrap_or_else(|error| panic!("document should parse: {error}"))
}

fn scenario(tree: &FeatureTree, index: usize) -> NodeId {
    tree.feature()
        .and_then(|feature| {
            feature
                .children()
                .filter(|child| child.kind() == NodeKind::Scenario)
                .nth(index)
        })
        .map(|node| node.id())
        .unwrap_or_else(|| panic!("scenario {index} expected"))
}

fn node(tree: &FeatureTree, id: NodeId) -> NodeRef<'_> {
    tree.node(id)
        .unwrap_or_else(|| panic!("node {id:?} should exist"))
}

fn bare(kind: NodeKind, line: usize) -> Node {
    Node::new(kind, kind.name(), format!("{kind}: x"), 0, line, "en", Vec::new())
}

fn tree_of(predecessors: &[NodeKind]) -> FeatureTree {
    let mut tree = FeatureTree::new("table.feature");
    for (line, predecessor) in predecessors.iter().enumerate() {
        if let Err(error) = tree.attach(bare(*predecessor, line + 1)) {
            panic!("predecessor should attach: {error}");
        }
    }
    tree
}

#[rstest]
#[case(&[NodeKind::Feature], NodeKind::Scenario, Some(0))]
#[case(&[NodeKind::Feature, NodeKind::Scenario, NodeKind::Given], NodeKind::When, Some(1))]
#[case(&[NodeKind::Feature, NodeKind::Background], NodeKind::And, Some(1))]
#[case(&[NodeKind::Feature, NodeKind::Scenario, NodeKind::Given], NodeKind::Row, Some(2))]
#[case(&[NodeKind::Feature, NodeKind::Scenario, NodeKind::Examples, NodeKind::Row], NodeKind::Row, Some(2))]
#[case(&[NodeKind::Feature, NodeKind::Scenario, NodeKind::Given], NodeKind::Comment, Some(2))]
#[case(&[], NodeKind::Comment, None)]
#[case(&[NodeKind::Comment], NodeKind::Feature, None)]
fn links_to_nearest_eligible_predecessor(
    #[case] predecessors: &[NodeKind],
    #[case] kind: NodeKind,
    #[case] parent: Option<usize>,
) {
    let mut tree = tree_of(predecessors);
    let id = tree
        .attach(bare(kind, predecessors.len() + 1))
        .unwrap_or_else(|error| panic!("node should attach: {error}"));
    assert_eq!(
        node(&tree, id).parent().map(|found| found.id().index()),
        parent
    );
}

#[rstest]
#[case(&[], NodeKind::Scenario, "Scenario must follow a Feature")]
#[case(&[], NodeKind::Given, "Given must follow a Scenario or Background")]
#[case(&[NodeKind::Comment], NodeKind::Background, "Background must follow a Feature")]
#[case(&[NodeKind::Feature], NodeKind::Examples, "Examples must follow a Scenario")]
#[case(&[NodeKind::Feature], NodeKind::Then, "Then must follow a Scenario or Background")]
#[case(
    &[NodeKind::Feature, NodeKind::Scenario],
    NodeKind::Row,
    "Row must follow a Given or When or Then or And or But or Step or Examples"
)]
fn nodes_without_an_eligible_predecessor_are_rejected(
    #[case] predecessors: &[NodeKind],
    #[case] kind: NodeKind,
    #[case] message: &str,
) {
    let mut tree = tree_of(predecessors);
    let line = predecessors.len() + 1;
    let error = tree
        .attach(bare(kind, line))
        .err()
        .unwrap_or_else(|| panic!("{kind} should be rejected"));
    assert_eq!(error.message(), message);
    assert_eq!(error.line(), line);
    assert_eq!(tree.nodes().count(), predecessors.len());
}

#[test]
fn feature_refuses_a_second_root() {
    let mut tree = FeatureTree::new("twice.feature");
    assert!(tree.attach(bare(NodeKind::Feature, 1)).is_ok());
    let error = tree
        .attach(bare(NodeKind::Feature, 2))
        .err()
        .unwrap_or_else(|| panic!("second feature should fail"));
    assert_eq!(error.message(), "Only one Feature per file");
    assert_eq!(error.file(), "twice.feature");
    assert_eq!(error.line(), 2);
}

#[rstest]
#[case(&[], 1)]
#[case(&[0], 1)]
#[case(&[3], 3)]
#[case(&[2, 3], 6)]
#[case(&[2, 0, 4], 8)]
#[case(&[1, 1, 1], 1)]
fn schedule_size_is_product_of_dimensions(#[case] dims: &[usize], #[case] expected: usize) {
    let schedule = permute(dims);
    assert_eq!(schedule.len(), expected);
    let distinct: BTreeSet<_> = schedule.iter().cloned().collect();
    assert_eq!(distinct.len(), expected);
    assert!(schedule.iter().all(|entry| entry.len() == dims.len()));
}

#[test]
fn schedule_is_lexicographic_with_last_dimension_fastest() {
    let schedule: Vec<Vec<usize>> = permute(&[2, 2]).into_iter().collect();
    assert_eq!(
        schedule,
        vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]
    );
}

const OUTLINE: &str = "\
Feature: Shipping
Scenario: orders
  When we send an order totaling $<total>
  And the order will ship to <destination>
  And we choose <speed> delivery
    | speed   |
    | rapid   |
    | regular |
  Then the cost is $<cost>
    |  total | destination  |  cost |
    |  98.00 | Rhode Island |  8.25 |
    | 101.00 | Kansas       |  0.00 |
    |  99.00 | Hawaii       |  8.25 |
";

#[test]
fn dimensions_count_data_rows_per_child() {
    let tree = parsed(OUTLINE);
    let id = scenario(&tree, 0);
    assert_eq!(tree.dimensions(id), vec![0, 0, 2, 3]);
    assert_eq!(tree.schedule(id).len(), 6);
}

#[test]
fn placeholders_follow_the_row_indices() {
    let mut tree = parsed(OUTLINE);
    let id = scenario(&tree, 0);
    tree.set_row_indices(id, vec![0, 0, 1, 2]);
    let augmented: Vec<String> = node(&tree, id)
        .children()
        .map(|step| step.augmented_predicate().into_owned())
        .collect();
    assert_eq!(
        augmented,
        vec![
            "we send an order totaling $99.00",
            "the order will ship to Hawaii",
            "we choose regular delivery",
            "the cost is $8.25",
        ]
    );
}

#[test]
fn interpolated_source_shows_resolved_values() {
    let mut tree = parsed(OUTLINE);
    let id = scenario(&tree, 0);
    tree.set_row_indices(id, vec![0, 0, 0, 1]);
    let step = node(&tree, id)
        .children()
        .nth(1)
        .unwrap_or_else(|| panic!("second step expected"));
    assert_eq!(
        step.interpolated_source(),
        "  And the order will ship to Kansas\n"
    );
    assert_eq!(node(&tree, id).interpolated_source(), "Scenario: orders\n");
}

#[test]
fn predicates_without_placeholders_are_unchanged() {
    let tree = parsed("Feature: F\nScenario: S\n  Given plain <text>\n  Then done");
    let id = scenario(&tree, 0);
    for step in node(&tree, id).children() {
        assert_eq!(step.augmented_predicate(), step.predicate());
    }
}

#[test]
fn multiline_cells_are_escaped() {
    let mut tree = parsed("Feature: F\nScenario: S\n  Given <x>\n    | x |\n    | a \\\n b |");
    let id = scenario(&tree, 0);
    tree.set_row_indices(id, vec![0]);
    let step = node(&tree, id)
        .children()
        .next()
        .unwrap_or_else(|| panic!("step expected"));
    assert_eq!(step.augmented_predicate(), "a\\n b");
}

const WITH_BACKGROUND: &str = "\
Feature: F
Background:
  Given a calculator
  And a table
    | n |
    | 1 |
Scenario: first
  When I add
Scenario: second
  When I subtract
";

#[test]
fn background_steps_are_prepended_as_copies() {
    let mut tree = parsed(WITH_BACKGROUND);
    let first = scenario(&tree, 0);
    let copies = tree.prepend_background(first);
    assert_eq!(copies.len(), 2);

    let predicates: Vec<_> = node(&tree, first)
        .children()
        .map(|step| step.predicate().to_owned())
        .collect();
    assert_eq!(predicates, vec!["a calculator", "a table", "I add"]);

    let background = tree
        .feature()
        .and_then(|feature| feature.children().next())
        .unwrap_or_else(|| panic!("background expected"));
    let originals: Vec<NodeId> = background.children().map(|step| step.id()).collect();
    for (copy, original) in copies.iter().zip(&originals) {
        assert_ne!(copy, original);
        assert_eq!(node(&tree, *copy).parent().map(|p| p.id()), Some(first));
        assert_eq!(
            node(&tree, *original).parent().map(|p| p.kind()),
            Some(NodeKind::Background)
        );
    }
    let shared_rows = |id: NodeId| -> Vec<NodeId> { node(&tree, id).rows().map(|r| r.id()).collect() };
    assert_eq!(
        copies.get(1).map(|id| shared_rows(*id)),
        originals.get(1).map(|id| shared_rows(*id))
    );
}

#[test]
fn background_merge_happens_once_per_scenario() {
    let mut tree = parsed(WITH_BACKGROUND);
    let first = scenario(&tree, 0);
    let second = scenario(&tree, 1);
    let once = tree.prepend_background(first);
    let twice = tree.prepend_background(first);
    assert_eq!(once, twice);
    assert_eq!(node(&tree, first).children().count(), 3);

    let other = tree.prepend_background(second);
    assert!(other.iter().all(|id| !once.contains(id)));
    assert_eq!(node(&tree, second).children().count(), 3);
}

#[test]
fn mutating_a_copy_leaves_the_template_alone() {
    let mut tree = parsed(WITH_BACKGROUND);
    let first = scenario(&tree, 0);
    let copies = tree.prepend_background(first);
    let copy = copies
        .first()
        .copied()
        .unwrap_or_else(|| panic!("copy expected"));
    if let Err(error) = tree.append_line(copy, "with extras") {
        panic!("append should succeed: {error}");
    }
    let background = tree
        .feature()
        .and_then(|feature| feature.children().next())
        .unwrap_or_else(|| panic!("background expected"));
    let template = background
        .children()
        .next()
        .unwrap_or_else(|| panic!("template expected"));
    assert_eq!(template.predicate(), "a calculator");
    assert_eq!(
        node(&tree, copy).predicate(),
        "a calculator\nwith extras"
    );
}

#[test]
fn labels_include_ancestors() {
    let tree = parsed("@web\nFeature: F\n@wip\nScenario: S\n  Given a");
    let id = scenario(&tree, 0);
    let labels: BTreeSet<String> = node(&tree, id).labels().into_iter().collect();
    let expected: BTreeSet<String> = ["web", "wip"].into_iter().map(String::from).collect();
    assert_eq!(labels, expected);

    let step_labels: BTreeSet<String> = node(&tree, id)
        .children()
        .flat_map(|step| step.labels())
        .collect();
    assert_eq!(step_labels, expected);
}

#[rstest]
#[case("Feature: F\nScenario: S\n  Given a", NodeKind::Given, "  Given: a\n")]
#[case("Feature: F\nScenario: S\n  Given a\n  # note", NodeKind::Comment, "    # note\n")]
#[case("Feature: F\nScenario: S\n  Given a\n  | x | y |", NodeKind::Row, "        | x | y |\n")]
#[case("Feature: F\nScenario: S\n  Given a", NodeKind::Scenario, "\nScenario: S")]
#[case("Feature: F\n  more\nScenario: S\n  Given a", NodeKind::Feature, "Feature: F\n    more\n")]
fn reconstructions(#[case] text: &str, #[case] kind: NodeKind, #[case] expected: &str) {
    let tree = parsed(text);
    let found = tree
        .nodes()
        .find(|candidate| candidate.kind() == kind)
        .unwrap_or_else(|| panic!("{kind} node expected"));
    assert_eq!(found.reconstruction(), expected);
}

#[test]
fn syntax_errors_reconstruct_parent_and_node() {
    let tree = parsed("Feature: F\nScenario: S\n  Given a");
    let step = tree
        .nodes()
        .find(|candidate| candidate.kind() == NodeKind::Given)
        .unwrap_or_else(|| panic!("step expected"));
    let error = tree.syntax_error(step.id(), "boom");
    assert_eq!(error.snippet(), "\n\tScenario: S\n\t  Given: a\n\t");
    assert_eq!(error.line(), 3);
    assert_eq!(
        error.to_string(),
        "boom (<stdin>, line 3)\n\tScenario: S\n\t  Given: a"
    );
}
