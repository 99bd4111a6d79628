//! Shortest-path search (Dijkstra).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::RouteGraph;
use crate::path::Path;
use crate::traits::PathProvider;

/// Heap entry ordered as a min-heap on tentative distance.
///
/// Ties are broken by smaller node index so traversal order is deterministic
/// across runs, independent of heap internals.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    distance: f64,
    node: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the smallest distance first. Weights
        // are non-negative by contract, so NaN never arises here.
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Computes the minimum-weight path between two location indices.
///
/// Returns the empty path when `end` is unreachable from `start`; a query
/// from a location to itself yields the trivial single-node path. Exits
/// early once the target is settled (sound for non-negative weights).
pub fn shortest_path(graph: &RouteGraph, start: usize, end: usize) -> Path {
    let n = graph.location_count();
    if start >= n || end >= n {
        return Path::none();
    }

    let mut distances = vec![f64::INFINITY; n];
    let mut previous: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut queue = BinaryHeap::new();

    distances[start] = 0.0;
    queue.push(HeapEntry {
        distance: 0.0,
        node: start,
    });

    while let Some(HeapEntry { distance, node }) = queue.pop() {
        if settled[node] {
            continue;
        }
        settled[node] = true;

        if node == end {
            break;
        }

        for edge in graph.neighbors(node) {
            let tentative = distance + edge.weight;
            if tentative < distances[edge.to] {
                distances[edge.to] = tentative;
                previous[edge.to] = Some(node);
                queue.push(HeapEntry {
                    distance: tentative,
                    node: edge.to,
                });
            }
        }
    }

    if distances[end].is_infinite() {
        return Path::none();
    }

    let mut nodes = vec![end];
    let mut at = end;
    while let Some(prev) = previous[at] {
        nodes.push(prev);
        at = prev;
    }
    nodes.reverse();
    Path::new(nodes)
}

impl PathProvider for RouteGraph {
    fn shortest_path(&self, start: usize, end: usize) -> Path {
        shortest_path(self, start, end)
    }

    fn path_distance(&self, path: &Path) -> f64 {
        RouteGraph::path_distance(self, path)
    }
}
