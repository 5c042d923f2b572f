use dscope_domain::portfolio::{Node, SeverityBreakdown, sample_portfolio};
use dscope_portfolio::{ExpansionState, Portfolio, PortfolioError, PortfolioErrorExt, find_node};

fn portfolio() -> Portfolio {
    Portfolio::new(sample_portfolio())
}

#[test]
fn resolve_unknown_id_is_not_found() {
    let session = portfolio().session();
    let err = session.resolve("proj-404").unwrap_err();
    assert!(matches!(err, PortfolioError::NotFound { ref id, .. } if id == "proj-404"));
}

#[test]
fn resolve_finds_nodes_at_any_depth() {
    let session = portfolio().session();

    let root = session.resolve("proj-2").unwrap();
    assert_eq!(root.name, "Admin Portal");

    let nested = session.resolve("comp-4").unwrap();
    assert_eq!(nested.name, "lodash 4.17.21");
    assert_eq!(nested.vulnerabilities, 2);
}

#[test]
fn resolve_is_deterministic_under_duplicate_ids() {
    // Deliberately violates the uniqueness invariant: same id at two depths.
    let roots = vec![
        Node::project(
            "proj-1",
            "First",
            0,
            SeverityBreakdown::default(),
            vec![Node::component("dup", "nested copy", 1)],
        ),
        Node::component("dup", "root copy", 9),
    ];

    // Preorder reaches the nested copy before the second root.
    let found = find_node(&roots, "dup").unwrap();
    assert_eq!(found.name, "nested copy");
}

#[test]
fn all_collapsed_renders_exactly_the_roots() {
    let session = portfolio().session();
    let rows: Vec<_> = session.visible_nodes().map(|v| (v.node.id.clone(), v.depth)).collect();
    assert_eq!(rows, vec![("proj-1".to_owned(), 1), ("proj-2".to_owned(), 1)]);
}

#[test]
fn expanded_project_inserts_children_before_next_sibling() {
    let session = portfolio().session_with_expanded(["proj-1"]);
    let rows: Vec<_> = session.visible_nodes().map(|v| (v.node.id.clone(), v.depth)).collect();
    assert_eq!(
        rows,
        vec![
            ("proj-1".to_owned(), 1),
            ("comp-1".to_owned(), 2),
            ("comp-2".to_owned(), 2),
            ("proj-2".to_owned(), 1),
        ]
    );
}

#[test]
fn collapsed_subtrees_are_excluded_not_hidden() {
    let session = portfolio().session_with_expanded(["proj-1"]);
    assert!(!session.visible_nodes().any(|v| v.node.id == "comp-3" || v.node.id == "comp-4"));
}

#[test]
fn click_through_scenario() {
    // Starting state: empty expansion, no selection.
    let mut session = portfolio().session();
    assert_eq!(session.selection().current(), None);

    session.toggle_expansion("proj-1");
    assert!(session.is_expanded("proj-1"));

    session.select("comp-1");
    assert_eq!(session.selection().current(), Some("comp-1"));

    let node = session.resolve("comp-1").unwrap();
    assert_eq!(node.name, "log4j 2.17.0");
    assert_eq!(node.vulnerabilities, 3);
    assert_eq!(session.selected_node().map(|n| n.id.as_str()), Some("comp-1"));
}

#[test]
fn selection_replacement_is_atomic() {
    let mut session = portfolio().session();
    session.select("proj-1");
    session.select("comp-2");
    assert_eq!(session.selection().current(), Some("comp-2"));
    assert!(!session.selection().is_selected("proj-1"));

    session.clear_selection();
    assert_eq!(session.selection().current(), None);
}

#[test]
fn selecting_a_nonexistent_id_stays_inert() {
    let mut session = portfolio().session();
    session.select("ghost");

    // The mutation is accepted; only the read side reports the miss.
    assert_eq!(session.selection().current(), Some("ghost"));
    assert!(session.selected_node().is_none());
    let err = session.resolve("ghost").context("detail panel").unwrap_err();
    assert_eq!(err.to_string(), "Node not found (detail panel): ghost");
}

#[test]
fn toggling_leaves_and_unknown_ids_is_allowed() {
    let mut session = portfolio().session();

    session.toggle_expansion("comp-1"); // leaf
    session.toggle_expansion("nope"); // not in the tree

    // Neither changes what renders.
    let rows: Vec<_> = session.visible_nodes().map(|v| v.node.id.clone()).collect();
    assert_eq!(rows, vec!["proj-1".to_owned(), "proj-2".to_owned()]);

    // Both flips still round-trip.
    session.toggle_expansion("comp-1");
    session.toggle_expansion("nope");
    assert_eq!(session.expansion(), &ExpansionState::new());
}

#[test]
fn visible_nodes_is_referentially_transparent() {
    let session = portfolio().session_with_expanded(["proj-1", "proj-2"]);
    let first: Vec<_> = session.visible_nodes().map(|v| (v.node.id.clone(), v.depth)).collect();
    let second: Vec<_> = session.visible_nodes().map(|v| (v.node.id.clone(), v.depth)).collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 6);
}

#[test]
fn expansion_state_serializes_as_plain_ids() {
    let state = ExpansionState::with_expanded(["proj-1"]);
    let json = serde_json::to_value(&state).unwrap();
    let back: ExpansionState = serde_json::from_value(json).unwrap();
    assert!(back.is_expanded("proj-1"));
    assert!(!back.is_expanded("proj-2"));
}
