//! Alternative route enumeration (bounded depth-first search).
//!
//! Enumerates simple paths between two locations, drops the already-reported
//! optimum, and ranks the rest by ascending distance. Simple paths in a
//! cyclic graph grow combinatorially, so two hard bounds keep the search
//! cheap: a path-length cap and a total-paths cap. This trades completeness
//! for bounded latency; the feature is "show a few good alternatives", not
//! an exhaustive enumeration.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::RouteGraph;
use crate::path::Path;

/// Bounds on the depth-first path search.
#[derive(Debug, Clone, Copy)]
pub struct SearchBounds {
    /// Abandon a branch once the path would exceed this many nodes.
    pub max_path_nodes: usize,
    /// Stop searching once this many paths have been collected.
    pub max_paths: usize,
}

impl Default for SearchBounds {
    fn default() -> Self {
        Self {
            max_path_nodes: 10,
            max_paths: 20,
        }
    }
}

/// An alternative route with its total distance, for ranked presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub path: Path,
    pub distance: f64,
}

/// One frame of the explicit DFS stack: a node on the current path and a
/// cursor into its adjacency list.
#[derive(Debug)]
struct Frame {
    node: usize,
    next_edge: usize,
}

/// Collects up to `bounds.max_paths` simple paths from `start` to `end`,
/// each at most `bounds.max_path_nodes` long, in depth-first discovery
/// order (adjacency insertion order, so deterministic).
fn collect_simple_paths(
    graph: &RouteGraph,
    start: usize,
    end: usize,
    bounds: SearchBounds,
) -> Vec<Path> {
    let n = graph.location_count();
    let mut found: Vec<Path> = Vec::new();
    if start >= n || end >= n || bounds.max_path_nodes == 0 {
        return found;
    }
    if start == end {
        // The trivial path is the only simple path from a node to itself.
        found.push(Path::new(vec![start]));
        return found;
    }

    // The stack of frames is the current path; a node sits in `on_path`
    // exactly while its frame is on the stack (the backtrack invariant).
    let mut on_path = vec![false; n];
    let mut stack = vec![Frame {
        node: start,
        next_edge: 0,
    }];
    on_path[start] = true;

    while !stack.is_empty() {
        if found.len() >= bounds.max_paths {
            break;
        }
        let depth = stack.len();
        let Some(frame) = stack.last_mut() else {
            break;
        };

        let edges = graph.neighbors(frame.node);
        let mut step = None;
        while frame.next_edge < edges.len() {
            let candidate = edges[frame.next_edge].to;
            frame.next_edge += 1;
            if !on_path[candidate] {
                step = Some(candidate);
                break;
            }
        }

        match step {
            // Extending would exceed the length cap: abandon the branch.
            Some(_) if depth >= bounds.max_path_nodes => {
                if let Some(done) = stack.pop() {
                    on_path[done.node] = false;
                }
            }
            // Reached the target: record, then keep scanning siblings
            // rather than extending past the end node.
            Some(next) if next == end => {
                let mut nodes: Vec<usize> = stack.iter().map(|frame| frame.node).collect();
                nodes.push(end);
                found.push(Path::new(nodes));
            }
            Some(next) => {
                on_path[next] = true;
                stack.push(Frame {
                    node: next,
                    next_edge: 0,
                });
            }
            // Adjacency list exhausted: backtrack.
            None => {
                if let Some(done) = stack.pop() {
                    on_path[done.node] = false;
                }
            }
        }
    }

    found
}

/// Enumerates up to `top_k` simple paths from `start` to `end` distinct
/// from `exclude`, ranked by ascending total distance.
///
/// An empty result means no alternatives exist within the search bounds;
/// that is a reportable outcome, not an error.
pub fn alternatives(
    graph: &RouteGraph,
    start: usize,
    end: usize,
    exclude: &Path,
    top_k: usize,
    bounds: SearchBounds,
) -> Vec<RankedAlternative> {
    let paths = collect_simple_paths(graph, start, end, bounds);
    debug!(
        collected = paths.len(),
        max_paths = bounds.max_paths,
        "simple path search finished"
    );

    let mut ranked: Vec<RankedAlternative> = paths
        .into_iter()
        .filter(|path| path != exclude)
        .map(|path| {
            let distance = graph.path_distance(&path);
            RankedAlternative { path, distance }
        })
        .collect();

    // Stable sort keeps discovery order among equal distances.
    ranked.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal));
    ranked.truncate(top_k);
    ranked
}
