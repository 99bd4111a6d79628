//! Location registry and weighted adjacency-list graph.

use std::collections::HashMap;
use std::fmt;

use crate::path::Path;

/// Errors from index-based graph lookups.
///
/// The name-based public API cannot produce these; they only arise when a
/// caller holds on to raw indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The index was never allocated by the registry.
    UnknownIndex(usize),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::UnknownIndex(index) => {
                write!(f, "unknown location index {index}")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Bidirectional mapping between location names and dense indices.
///
/// Indices start at 0, grow monotonically, and are never reused. Resolving
/// a name registers it on first sight; this is the only mutation point and
/// a documented side effect, not a hidden one.
#[derive(Debug, Clone, Default)]
pub struct LocationRegistry {
    names: Vec<String>,
    index_by_name: HashMap<String, usize>,
}

impl LocationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index for `name`, registering it if unseen.
    ///
    /// Registering an existing name is a no-op returning its index, so the
    /// name/index mapping stays a bijection.
    pub fn resolve(&mut self, name: &str) -> usize {
        if let Some(&index) = self.index_by_name.get(name) {
            return index;
        }
        let index = self.names.len();
        self.names.push(name.to_string());
        self.index_by_name.insert(name.to_string(), index);
        index
    }

    /// Looks up a name without registering it.
    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.index_by_name.get(name).copied()
    }

    /// Returns the name for a previously allocated index.
    pub fn name_of(&self, index: usize) -> Result<&str, GraphError> {
        self.names
            .get(index)
            .map(String::as_str)
            .ok_or(GraphError::UnknownIndex(index))
    }

    /// All registered names in allocation order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A weighted connection to another location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to: usize,
    /// Distance in km (or any non-negative unit the caller settles on).
    pub weight: f64,
}

/// Undirected weighted multigraph over registered locations.
///
/// Edges are stored symmetrically in per-location adjacency lists; parallel
/// edges and self-loops are retained, not deduplicated. Locations and edges
/// are append-only. Weights must be non-negative; this is a caller contract
/// and is not validated at runtime (negative weights silently break the
/// shortest-path assumptions).
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    registry: LocationRegistry,
    adjacency: Vec<Vec<Edge>>,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `name` to its index, registering it (with an empty adjacency
    /// list) if unseen.
    pub fn resolve(&mut self, name: &str) -> usize {
        let index = self.registry.resolve(name);
        if index == self.adjacency.len() {
            self.adjacency.push(Vec::new());
        }
        index
    }

    /// Adds an undirected route between two named locations.
    ///
    /// Both names are resolved (auto-registering unseen ones) and the edge
    /// is appended in both adjacency directions.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) {
        let from_index = self.resolve(from);
        let to_index = self.resolve(to);
        self.adjacency[from_index].push(Edge {
            to: to_index,
            weight,
        });
        self.adjacency[to_index].push(Edge {
            to: from_index,
            weight,
        });
    }

    /// Adjacency entries for a location, in insertion order.
    pub fn neighbors(&self, index: usize) -> &[Edge] {
        self.adjacency
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Weight of the first adjacency entry from `from` to `to`, if any.
    pub fn edge_weight(&self, from: usize, to: usize) -> Option<f64> {
        self.neighbors(from)
            .iter()
            .find(|edge| edge.to == to)
            .map(|edge| edge.weight)
    }

    /// Total distance along a path, summing the first matching edge between
    /// each consecutive pair. Paths shorter than two nodes have distance 0;
    /// a pair with no connecting edge contributes nothing.
    pub fn path_distance(&self, path: &Path) -> f64 {
        let nodes = path.nodes();
        let mut total = 0.0;
        for pair in nodes.windows(2) {
            if let Some(weight) = self.edge_weight(pair[0], pair[1]) {
                total += weight;
            }
        }
        total
    }

    pub fn registry(&self) -> &LocationRegistry {
        &self.registry
    }

    pub fn location_count(&self) -> usize {
        self.registry.len()
    }

    pub fn location_name(&self, index: usize) -> Result<&str, GraphError> {
        self.registry.name_of(index)
    }
}
