//! Rewrite graph construction for a target string.
//!
//! The graph encodes every way of rewriting the target using the shortcut
//! index: a pass-through chain emits the target unchanged, and each match
//! occurrence of an index key contributes a detour node that emits the
//! shortcut instead of the matched substring. Every start-to-end path
//! concatenates to a string that normalizes back into the target.

use super::RewriteDag;
use crate::index::ShortcutIndex;
use smallvec::SmallVec;

/// A rewrite graph for one target string, plus its entry points.
#[derive(Debug, Clone)]
pub struct RewriteGraph {
    /// The underlying DAG.
    pub dag: RewriteDag,
    /// Start sentinel (empty fragment).
    pub start: usize,
    /// End sentinel (empty fragment).
    pub end: usize,
    /// `char_nodes[i]` keeps character `i` of the target unchanged.
    pub char_nodes: Vec<usize>,
}

/// Build the rewrite graph for `target` under `index`.
///
/// Construction order matters and is deterministic:
///
/// 1. A chain `start -> char_nodes[0] -> .. -> char_nodes[n-1] -> end`
///    guarantees the target itself is always reachable (`start -> end`
///    directly for an empty target).
/// 2. For every index entry, the first shortcut of its tie list gets one
///    fresh node per match occurrence of the key in the target, scanning
///    all overlapping start positions left to right. The occurrence node
///    is wired from every predecessor of the occurrence's first char node
///    and into every successor of its last char node, as they stand at
///    insertion time.
///
/// A fresh node per occurrence is required for correctness: a node shared
/// between two occurrences could be entered at one occurrence's start and
/// left toward the other's end, emitting a string that does not normalize
/// back to the target. Capturing the full predecessor/successor sets (not
/// just the chain neighbors) is equally load-bearing: it lets the node of
/// one occurrence feed the node of an adjacent one, so `"abab"` with
/// `ab -> x` can reach `"xx"`.
pub fn build_rewrite_graph(target: &str, index: &ShortcutIndex) -> RewriteGraph {
    let chars: Vec<char> = target.chars().collect();
    let mut dag = RewriteDag::new();

    let start = dag.add_node("");
    let mut char_nodes = Vec::with_capacity(chars.len());
    let mut last = start;
    for &c in &chars {
        let node = dag.add_node(c.to_string());
        dag.add_edge(last, node);
        char_nodes.push(node);
        last = node;
    }
    let end = dag.add_node("");
    dag.add_edge(last, end);

    for entry in index.entries() {
        let shortcut = &entry.shortcuts[0];
        let long: Vec<char> = entry.long.chars().collect();
        if long.is_empty() || long.len() > chars.len() {
            continue;
        }

        for pos in occurrences(&chars, &long) {
            let node = dag.add_node(shortcut.clone());
            let first_char = char_nodes[pos];
            let last_char = char_nodes[pos + long.len() - 1];

            // Snapshot both neighbor sets before wiring; adding the new
            // edges would otherwise alias the lists being iterated.
            let sources: SmallVec<[usize; 4]> =
                SmallVec::from_slice(dag.predecessors(first_char));
            let targets: SmallVec<[usize; 4]> =
                SmallVec::from_slice(dag.successors(last_char));

            for &source in &sources {
                dag.add_edge(source, node);
            }
            for &target_node in &targets {
                dag.add_edge(node, target_node);
            }
        }
    }

    RewriteGraph {
        dag,
        start,
        end,
        char_nodes,
    }
}

/// All start positions (including overlapping ones) where `needle` occurs
/// in `haystack`, left to right.
fn occurrences(haystack: &[char], needle: &[char]) -> Vec<usize> {
    let mut positions = Vec::new();
    if needle.is_empty() || needle.len() > haystack.len() {
        return positions;
    }
    for pos in 0..=(haystack.len() - needle.len()) {
        if &haystack[pos..pos + needle.len()] == needle {
            positions.push(pos);
        }
    }
    positions
}
