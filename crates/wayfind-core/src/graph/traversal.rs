//! Exhaustive simple-path enumeration and cheapest-path selection.
//!
//! `all_paths` produces every simple path (no repeated node) between two
//! nodes via recursive depth-first search with per-call cycle avoidance.
//! `cheapest_path` is built strictly on top of it: enumerate, then pick the
//! minimum total cost. "Cheapest" means lowest summed cost across ALL simple
//! paths, not fewest hops, so enumeration cannot be replaced by a
//! shortest-path algorithm here. Worst case is exponential in the number of
//! simple paths, which is inherent to the exhaustive contract.

use std::collections::HashMap;

use super::adjacency::Graph;
use super::types::Path;

/// Per-traversal visitation marker.
///
/// `OnPath` blocks re-entry while a node sits on the current path; `Retired`
/// marks a node the search has backtracked past, which may be entered again
/// by later branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    OnPath,
    Retired,
}

/// Enumerates every simple path from `start` to `end`.
///
/// Each returned [`Path`] carries its accumulated cost. The visitation map is
/// allocated fresh per call, so concurrent enumerations over the same graph
/// never share state. When the search reaches `end` it emits the accumulated
/// path and does not explore past it. `start == end` yields a single
/// one-node path with cost 0. An absent connection yields an empty vec,
/// never an error; termination on cyclic graphs is guaranteed by the
/// simple-path constraint.
#[must_use]
pub fn all_paths(graph: &Graph, start: &str, end: &str) -> Vec<Path> {
    let mut visited: HashMap<String, VisitState> = HashMap::new();
    let mut trail: Vec<String> = Vec::new();
    let mut found: Vec<Path> = Vec::new();

    dfs_collect(graph, start, end, 0.0, &mut visited, &mut trail, &mut found);

    found
}

/// Selects the minimum-total-cost simple path from `start` to `end`.
///
/// Returns `None` when enumeration yields no path. Among equal-cost paths the
/// first encountered in enumeration order wins; no stricter tie-break is
/// specified.
#[must_use]
pub fn cheapest_path(graph: &Graph, start: &str, end: &str) -> Option<Path> {
    all_paths(graph, start, end)
        .into_iter()
        .min_by(|a, b| a.total_cost().total_cmp(&b.total_cost()))
}

fn dfs_collect(
    graph: &Graph,
    current: &str,
    end: &str,
    cost_so_far: f64,
    visited: &mut HashMap<String, VisitState>,
    trail: &mut Vec<String>,
    found: &mut Vec<Path>,
) {
    visited.insert(current.to_string(), VisitState::OnPath);
    trail.push(current.to_string());

    if current == end {
        // Emission point: a match is recorded and the search does not
        // continue past `end`.
        found.push(Path::new(trail.clone(), cost_so_far));
    } else {
        for edge in graph.out_edges(current) {
            if visited.get(edge.to()) == Some(&VisitState::OnPath) {
                // Entering would repeat a node on the current path.
                continue;
            }
            dfs_collect(
                graph,
                edge.to(),
                end,
                cost_so_far + edge.cost(),
                visited,
                trail,
                found,
            );
        }
    }

    trail.pop();
    visited.insert(current.to_string(), VisitState::Retired);
}
