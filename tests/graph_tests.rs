//! Structural tests for the rewrite graph: occurrence isolation and edge
//! cardinalities, asserted directly on the public graph API.

use idna_shorten::index::{ShortcutEntry, ShortcutIndex};
use idna_shorten::prelude::*;

fn index(entries: &[(&str, &[&str])]) -> ShortcutIndex {
    ShortcutIndex::from_entries(
        entries
            .iter()
            .map(|&(long, shortcuts)| ShortcutEntry {
                long: long.to_string(),
                shortcuts: shortcuts.iter().map(|s| s.to_string()).collect(),
            })
            .collect(),
    )
}

#[test]
fn test_occurrence_isolation_two_distinct_nodes() {
    // "xabyab" contains two non-overlapping occurrences of "ab"; each must
    // get its own shortcut node with its own wiring.
    let graph = build_rewrite_graph("xabyab", &index(&[("ab", &["q"])]));
    let dag = &graph.dag;

    // start + 6 chars + end + 2 occurrence nodes
    assert_eq!(dag.node_count(), 10);

    let occurrence_nodes: Vec<usize> = (0..dag.node_count())
        .filter(|&id| dag.fragment(id) == "q")
        .collect();
    assert_eq!(occurrence_nodes.len(), 2);

    let (first, second) = (occurrence_nodes[0], occurrence_nodes[1]);

    // First occurrence spans chars 1..=2: enters from char 0, exits to char 3.
    assert_eq!(dag.predecessors(first), &[graph.char_nodes[0]]);
    assert_eq!(dag.successors(first), &[graph.char_nodes[3]]);

    // Second occurrence spans chars 4..=5: enters from char 3, exits to end.
    assert_eq!(dag.predecessors(second), &[graph.char_nodes[3]]);
    assert_eq!(dag.successors(second), &[graph.end]);

    // No cross-linking between the two occurrences.
    assert!(!dag.successors(first).contains(&second));
    assert!(!dag.successors(second).contains(&first));
}

#[test]
fn test_adjacent_occurrences_are_chained_not_merged() {
    let graph = build_rewrite_graph("abab", &index(&[("ab", &["q"])]));
    let dag = &graph.dag;

    let occurrence_nodes: Vec<usize> = (0..dag.node_count())
        .filter(|&id| dag.fragment(id) == "q")
        .collect();
    assert_eq!(occurrence_nodes.len(), 2);

    let (first, second) = (occurrence_nodes[0], occurrence_nodes[1]);
    // The first occurrence feeds the second, enabling "qq", but the
    // second never feeds the first.
    assert!(dag.successors(first).contains(&second));
    assert!(!dag.successors(second).contains(&first));

    assert_eq!(shortest_path(&graph).expect("path"), "qq");
}

#[test]
fn test_pass_through_chain_always_present() {
    let graph = build_rewrite_graph("abc", &index(&[("abc", &["q"])]));
    let dag = &graph.dag;

    // Chain start -> a -> b -> c -> end survives alongside the shortcut.
    let mut node = graph.start;
    for i in 0..3 {
        let chain_next = graph.char_nodes[i];
        assert!(dag.successors(node).contains(&chain_next));
        node = chain_next;
    }
    assert!(dag.successors(node).contains(&graph.end));
}

#[test]
fn test_empty_target_graph() {
    let graph = build_rewrite_graph("", &index(&[("ab", &["q"])]));
    assert_eq!(graph.dag.node_count(), 2);
    assert_eq!(graph.dag.successors(graph.start), &[graph.end]);
    assert_eq!(shortest_path(&graph).expect("path"), "");
}

#[test]
fn test_overlapping_occurrences_each_get_nodes() {
    let graph = build_rewrite_graph("aaa", &index(&[("aa", &["q"])]));
    let dag = &graph.dag;
    let occurrence_nodes: Vec<usize> = (0..dag.node_count())
        .filter(|&id| dag.fragment(id) == "q")
        .collect();
    assert_eq!(occurrence_nodes.len(), 2);
}

#[test]
fn test_search_emits_fragments_in_order() {
    let graph = build_rewrite_graph(
        "abcd",
        &index(&[("ab", &["x"]), ("cd", &["y"])]),
    );
    assert_eq!(shortest_path(&graph).expect("path"), "xy");
}
