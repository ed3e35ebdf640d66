//! Breadth-first shortest path over the rewrite graph.

use super::rewrite::RewriteGraph;
use std::collections::VecDeque;
use thiserror::Error;

/// Errors raised by the path search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// No path connects the start and end sentinels.
    ///
    /// The pass-through chain makes this impossible for any graph built by
    /// [`super::build_rewrite_graph`]; seeing it means an internal
    /// invariant was violated, and a partial result must never be
    /// returned in its place.
    #[error("no rewrite path connects the start and end sentinels")]
    TargetUnreachable,
}

/// Find a start-to-end path with the fewest edges and emit its string.
///
/// Standard BFS by edge count: a node is finalized the first time it is
/// reached, and later visits never overwrite its distance or predecessor.
/// The path is reconstructed backwards from `end`, the sentinels are
/// dropped, and the remaining fragments are concatenated in order.
///
/// The cost being minimized is the number of emitted fragments, not the
/// total character count: when shortcuts are themselves multi-character,
/// a path with fewer fragments is not guaranteed to emit fewer characters
/// than one with more, shorter fragments.
pub fn shortest_path(graph: &RewriteGraph) -> Result<String, SearchError> {
    let dag = &graph.dag;
    let mut distance: Vec<Option<u32>> = vec![None; dag.node_count()];
    let mut predecessor: Vec<Option<usize>> = vec![None; dag.node_count()];

    let mut frontier = VecDeque::new();
    distance[graph.start] = Some(0);
    frontier.push_back((graph.start, 0u32));

    'search: while let Some((current, depth)) = frontier.pop_front() {
        for &next in dag.successors(current) {
            if distance[next].is_none() {
                distance[next] = Some(depth + 1);
                predecessor[next] = Some(current);
                if next == graph.end {
                    break 'search;
                }
                frontier.push_back((next, depth + 1));
            }
        }
    }

    if distance[graph.end].is_none() {
        return Err(SearchError::TargetUnreachable);
    }

    let mut path = Vec::new();
    let mut current = graph.end;
    loop {
        path.push(current);
        match predecessor[current] {
            Some(prev) => current = prev,
            None => break,
        }
    }
    path.reverse();

    // Drop the two sentinels, concatenate the rest.
    let mut emitted = String::new();
    for &node in &path[1..path.len() - 1] {
        emitted.push_str(dag.fragment(node));
    }
    Ok(emitted)
}
