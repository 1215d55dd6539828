//! Unit tests for the feature parser.

use rstest::rstest;

use super::{ParseError, Parser, parse};
use crate::grammar::{FeatureTree, NodeKind, NodeRef, SyntaxError};
use crate::tags::Tags;

fn parsed(text: &str) -> FeatureTree {
    parse(text).unwrap_or_else(|error| panic!("document should parse: {error}"))
}

fn syntax_error(result: Result<FeatureTree, ParseError>) -> SyntaxError {
    match result {
        Ok(_) => panic!("document should be rejected"),
        Err(ParseError::Syntax(error)) => error,
        Err(other) => panic!("expected a syntax error, got {other}"),
    }
}

fn kinds(node: NodeRef<'_>) -> Vec<NodeKind> {
    node.children().map(|child| child.kind()).collect()
}

fn feature(tree: &FeatureTree) -> NodeRef<'_> {
    tree.feature()
        .unwrap_or_else(|| panic!("parsed tree should have a feature"))
}

#[test]
fn builds_feature_scenario_and_steps() {
    let tree = parsed("Feature: F\nScenario: S\nGiven a\nWhen b\nThen c");
    let feature = feature(&tree);
    assert_eq!(feature.kind(), NodeKind::Feature);
    assert_eq!(feature.predicate(), "F");
    let scenario = feature
        .children()
        .next()
        .unwrap_or_else(|| panic!("scenario expected"));
    assert_eq!(scenario.predicate(), "S");
    assert_eq!(
        kinds(scenario),
        vec![NodeKind::Given, NodeKind::When, NodeKind::Then]
    );
    let predicates: Vec<_> = scenario.children().map(|step| step.predicate()).collect();
    assert_eq!(predicates, vec!["a", "b", "c"]);
}

#[test]
fn description_lines_extend_the_feature_predicate() {
    let tree = parsed(
        "Feature: Addition\n    In order to avoid silly mistakes\n    As a math idiot\nScenario: S\nGiven a",
    );
    assert_eq!(
        feature(&tree).predicate(),
        "Addition\nIn order to avoid silly mistakes\nAs a math idiot"
    );
}

#[test]
fn line_numbers_skip_blank_lines() {
    let tree = parsed("Feature: F\n\n\nScenario: S\n\n  Given a\n");
    let scenario = feature(&tree)
        .children()
        .next()
        .unwrap_or_else(|| panic!("scenario expected"));
    assert_eq!(scenario.line(), 2);
    let step = scenario
        .children()
        .next()
        .unwrap_or_else(|| panic!("step expected"));
    assert_eq!(step.line(), 3);
}

#[test]
fn labels_attach_to_the_next_node() {
    let tree = parsed("@web\nFeature: F\n@wip @slow\nScenario: S\nGiven a");
    let feature = feature(&tree);
    assert_eq!(feature.own_labels(), ["web"]);
    let scenario = feature
        .children()
        .next()
        .unwrap_or_else(|| panic!("scenario expected"));
    assert_eq!(scenario.own_labels(), ["wip", "slow"]);
    let step = scenario
        .children()
        .next()
        .unwrap_or_else(|| panic!("step expected"));
    assert!(step.own_labels().is_empty());
}

#[test]
fn docstring_becomes_payload_of_previous_node() {
    let text = "Feature: F\nScenario: S\n  Given a text\n    \"\"\"\n    Docstring line1\n    line2\n    \"\"\"\n  Then done";
    let tree = parsed(text);
    let scenario = feature(&tree)
        .children()
        .next()
        .unwrap_or_else(|| panic!("scenario expected"));
    let steps: Vec<_> = scenario.children().collect();
    assert_eq!(steps.len(), 2);
    assert_eq!(
        steps.first().map(|step| step.payload()),
        Some("Docstring line1\nline2")
    );
    assert_eq!(steps.get(1).map(|step| step.payload()), Some(""));
}

#[test]
fn backslash_folds_following_lines() {
    let tree = parsed("Feature: F\nScenario: S\n  Given a very \\\n    long step\n  Then b");
    let scenario = feature(&tree)
        .children()
        .next()
        .unwrap_or_else(|| panic!("scenario expected"));
    let first = scenario
        .children()
        .next()
        .unwrap_or_else(|| panic!("step expected"));
    assert_eq!(first.predicate(), "a very long step");
    assert_eq!(first.source(), "  Given a very \\\n    long step");
    assert_eq!(scenario.children().count(), 2);
}

#[test]
fn rows_attach_to_steps_and_examples() {
    let text = "Feature: F\nScenario: S\n  Given <x>\n  Examples: values\n    | x |\n    | 1 |\n    | 2 |";
    let tree = parsed(text);
    let scenario = feature(&tree)
        .children()
        .next()
        .unwrap_or_else(|| panic!("scenario expected"));
    assert_eq!(kinds(scenario), vec![NodeKind::Given, NodeKind::Examples]);
    let examples = scenario
        .children()
        .nth(1)
        .unwrap_or_else(|| panic!("examples expected"));
    let cells: Vec<_> = examples.rows().map(|row| row.cells()).collect();
    assert_eq!(cells, vec![vec!["x"], vec!["1"], vec!["2"]]);
}

#[test]
fn language_directive_switches_keywords() {
    let text = "# language: pl\nFunkcja: Kalkulator\nScenariusz: Dodawanie\n  Zakładając, że mam kalkulator\n  Wtedy wynik";
    let tree = parsed(text);
    let feature = feature(&tree);
    assert_eq!(feature.keyword(), "Funkcja");
    assert_eq!(feature.language(), "pl");
    let scenario = feature
        .children()
        .next()
        .unwrap_or_else(|| panic!("scenario expected"));
    assert_eq!(kinds(scenario), vec![NodeKind::Given, NodeKind::Then]);
    let given = scenario
        .children()
        .next()
        .unwrap_or_else(|| panic!("step expected"));
    assert_eq!(given.predicate(), "mam kalkulator");
}

#[test]
fn default_language_can_be_configured() {
    let tree = Parser::new()
        .with_language("fr")
        .parse("Fonctionnalité: F\nScénario: S\nSoit a", "fr.feature")
        .unwrap_or_else(|error| panic!("French document should parse: {error}"));
    assert_eq!(feature(&tree).keyword(), "Fonctionnalité");
    assert_eq!(tree.filename(), "fr.feature");
}

#[test]
fn unknown_language_is_rejected() {
    let error = syntax_error(parse("# language: xx\nFeature: F"));
    assert_eq!(error.message(), r#"unknown language "xx""#);
    assert_eq!(error.line(), 1);
}

#[test]
fn linefeed_in_comment_is_rejected() {
    let error = syntax_error(parse("Feature: F\n# a comment\nwith a second line\nScenario: S\nGiven a"));
    assert_eq!(error.message(), "linefeed in comment");
    assert_eq!(error.line(), 2);
}

#[test]
fn folded_comment_is_rejected() {
    let error = syntax_error(parse("Feature: F\n# a comment \\\ncontinued\nScenario: S\nGiven a"));
    assert_eq!(error.message(), "linefeed in comment");
}

#[test]
fn second_feature_is_rejected() {
    let error = syntax_error(parse("Feature: one\nScenario: S\nGiven a\nFeature: two"));
    assert_eq!(error.message(), "Only one Feature per file");
    assert_eq!(error.line(), 4);
    assert_eq!(error.file(), "<stdin>");
}

#[test]
fn document_must_start_with_a_feature() {
    let error = syntax_error(parse("Scenarioo: S\nGiven a"));
    assert_eq!(
        error.message(),
        "feature files must start with a Feature or Business Need or Ability"
    );
}

#[rstest]
#[case::scenario_first("Scenario: Early\n  Given a\nFeature: F\nScenario: Late\n  Given b", 1)]
#[case::labelled_step("@tag\nGiven a\nFeature: F\nScenario: S\n  Given b", 2)]
#[case::after_comments("# note\n# more\nScenario: S\n  Given a", 3)]
#[case::step_only("Scenario: S\nGiven a", 1)]
fn nodes_before_the_feature_are_rejected(#[case] text: &str, #[case] line: usize) {
    let error = syntax_error(parse(text));
    assert!(
        error.message().starts_with("feature files must start with a Feature"),
        "unexpected message: {}",
        error.message()
    );
    assert_eq!(error.line(), line);
}

#[test]
fn comment_only_documents_report_the_first_line() {
    let error = syntax_error(parse("# only\n# comments"));
    assert!(error.message().starts_with("feature files must start with a Feature"));
    assert_eq!(error.line(), 1);
}

#[rstest]
#[case::step_before_scenario(
    "Feature: F\n  Given a\nScenario: S\n  Given b",
    2,
    "Given must follow a Scenario or Background"
)]
#[case::row_under_scenario(
    "Feature: F\nScenario: S\n  | x |\n  Given a",
    3,
    "Row must follow a Given or When or Then or And or But or Step or Examples"
)]
#[case::examples_before_scenario(
    "Feature: F\nExamples: loose\nScenario: S\n  Given a",
    2,
    "Examples must follow a Scenario"
)]
fn nodes_without_an_owner_are_rejected(
    #[case] text: &str,
    #[case] line: usize,
    #[case] message: &str,
) {
    let error = syntax_error(parse(text));
    assert_eq!(error.message(), message);
    assert_eq!(error.line(), line);
}

#[test]
fn feature_needs_a_scenario() {
    let error = syntax_error(parse("Feature: lonely\n  just a description"));
    assert_eq!(error.message(), "Feature without Scenario(s)");
    assert!(error.to_string().contains("Feature: lonely"));
}

#[test]
fn empty_document_has_no_feature() {
    let error = syntax_error(parse("\n\n"));
    assert!(error.message().starts_with("feature files must start with a Feature"));
}

#[test]
fn unterminated_docstring_is_rejected() {
    let error = syntax_error(parse("Feature: F\nScenario: S\nGiven a\n\"\"\"\ntext"));
    assert_eq!(error.message(), "unterminated docstring");
}

#[test]
fn leading_comments_are_tolerated() {
    let tree = parsed("# header comment\nFeature: F\nScenario: S\nGiven a");
    assert_eq!(feature(&tree).predicate(), "F");
}

#[rstest]
#[case(None, &["Matches 1", "Matches 2", "Other"])]
#[case(Some("Matches [12]"), &["Matches 1", "Matches 2"])]
#[case(Some("Other"), &["Other"])]
#[case(Some("1"), &[])]
fn scenario_filter_keeps_matching_scenarios(
    #[case] filter: Option<&str>,
    #[case] expected: &[&str],
) {
    let text = "Feature: F\nBackground: B\n  Given setup\nScenario: Matches 1\n  Given a\nScenario: Matches 2\n  Given b\nScenario: Other\n  Given c";
    let parser = filter.map_or_else(Parser::new, |pattern| {
        Parser::new().with_scenario_filter(pattern)
    });
    match parser.parse(text, "filter.feature") {
        Ok(tree) => {
            let feature = feature(&tree);
            assert_eq!(
                feature.children().next().map(|child| child.kind()),
                Some(NodeKind::Background)
            );
            let scenarios: Vec<_> = feature
                .children()
                .filter(|child| child.kind() == NodeKind::Scenario)
                .map(|child| child.predicate())
                .collect();
            assert_eq!(scenarios, expected);
        }
        Err(error) => {
            assert!(expected.is_empty(), "unexpected failure: {error}");
            assert_eq!(
                error.as_syntax().map(SyntaxError::message),
                Some("Feature without Scenario(s)")
            );
        }
    }
}

#[rstest]
#[case::no_tags("", &["smoke", "slow", "plain"])]
#[case::required("smoke", &["smoke", "slow"])]
#[case::all_required("smoke -slow web", &["smoke"])]
#[case::inherited("web", &["smoke", "slow", "plain"])]
#[case::excluded("-slow", &["smoke", "plain"])]
#[case::everything_skipped("-web", &[])]
fn tags_select_scenarios_by_label(#[case] expression: &str, #[case] expected: &[&str]) {
    let text = "@web\nFeature: F\nBackground: B\n  Given setup\n@smoke\nScenario: smoke\n  Given a\n@slow @smoke\nScenario: slow\n  Given b\nScenario: plain\n  Given c";
    let tree = Parser::new()
        .with_tags(Tags::parse(expression))
        .parse(text, "tags.feature")
        .unwrap_or_else(|error| panic!("tag selection should not fail: {error}"));
    let feature = feature(&tree);
    assert_eq!(
        feature.children().next().map(|child| child.kind()),
        Some(NodeKind::Background)
    );
    let scenarios: Vec<_> = feature
        .children()
        .filter(|child| child.kind() == NodeKind::Scenario)
        .map(|child| child.predicate())
        .collect();
    assert_eq!(scenarios, expected);
}

#[test]
fn invalid_scenario_filter_is_reported_separately() {
    let error = Parser::new()
        .with_scenario_filter("\\")
        .parse("Feature: F\nScenario: S\nGiven a", "bad.feature")
        .err()
        .unwrap_or_else(|| panic!("filter should be rejected"));
    assert!(error.is_invalid_scenario_pattern());
    assert!(
        error
            .to_string()
            .starts_with(r#"Invalid scenario matching regex "\""#)
    );
}
