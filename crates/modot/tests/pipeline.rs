//! End-to-end tests for the parse -> render pipeline through the public API.

use modot::{KeywordFilter, ModuleGraph, render_to_string};
use rstest::rstest;

fn build(input: &str, keyword: &str) -> ModuleGraph {
    let mut graph = ModuleGraph::new(KeywordFilter::new(keyword, "yellow"));
    graph.parse(input.as_bytes()).expect("parse failed");
    graph
}

#[test]
fn go_mod_graph_style_input() {
    // The shape `go mod graph` emits: versioned module paths, the main
    // module without a version, fan-out from popular modules.
    let input = "\
example.com/app github.com/pkg/errors@v0.9.1
example.com/app golang.org/x/sync@v0.7.0
github.com/pkg/errors@v0.9.1 golang.org/x/tools@v0.1.0
golang.org/x/sync@v0.7.0 golang.org/x/tools@v0.1.0
";
    let graph = build(input, "errors");

    // Only the two edges touching pkg/errors survive.
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);

    let errors = graph.node("github.com/pkg/errors@v0.9.1").expect("kept");
    assert!(errors.highlighted);
    assert!(!graph.node("example.com/app").expect("kept").highlighted);
    assert!(graph.node("golang.org/x/sync@v0.7.0").is_none());

    let dot = render_to_string(&graph).expect("render failed");
    assert!(dot.contains("rankdir=LR;"));
    assert!(dot.contains(r#"label="github.com/pkg/errors@v0.9.1""#));
    assert_eq!(dot.matches(" -> ").count(), 2);
}

#[rstest]
#[case::no_edges_no_directive("", "B", false)]
#[case::self_edge_single_node("A A\n", "A", true)]
#[case::normal_edge("A B\n", "A", true)]
#[case::everything_filtered_out("A B\n", "zzz", false)]
fn layout_directive_tracks_adjacency_map(
    #[case] input: &str,
    #[case] keyword: &str,
    #[case] expect_directive: bool,
) {
    let graph = build(input, keyword);
    let dot = render_to_string(&graph).expect("render failed");
    assert_eq!(dot.contains("rankdir=LR;"), expect_directive);
}

#[test]
fn malformed_lines_do_not_disturb_surrounding_records() {
    let graph = build("A B\nBADLINE\nA C\n", "A");

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);

    let dot = render_to_string(&graph).expect("render failed");
    assert!(dot.contains("0 -> 1;"));
    assert!(dot.contains("0 -> 2;"));
}

#[test]
fn rendering_twice_is_byte_identical() {
    let graph = build("A B\nB C\nC A\n", "B");

    let first = render_to_string(&graph).expect("render failed");
    let second = render_to_string(&graph).expect("render failed");
    assert_eq!(first, second);
}

#[test]
fn empty_keyword_yields_empty_document() {
    let graph = build("A B\nB C\n", "");
    assert_eq!(graph.node_count(), 0);

    let dot = render_to_string(&graph).expect("render failed");
    assert_eq!(dot, "digraph {\n    node [shape=box];\n}\n");
}
