//! Name-based delivery network facade.
//!
//! This is the surface the presentation layer talks to: plain location
//! names in, paths, distances, and ranked alternatives out. Name resolution
//! happens here, up front, so the algorithm layers below operate on a
//! read-only graph of indices. Resolving an unseen name registers it as an
//! isolated location; that is a deliberate, documented side effect of every
//! name-taking operation (queries against unknown names still run, they
//! just find no route).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::alternatives::{self, RankedAlternative, SearchBounds};
use crate::dijkstra;
use crate::graph::{GraphError, RouteGraph};
use crate::path::Path;
use crate::sequencer::{self, SequenceError};

/// A sequenced multi-stop delivery plan, translated back to location names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryPlan {
    /// Depot first, stops in visit order, depot again if the loop closes.
    pub order: Vec<String>,
    /// Concrete path for each leg between consecutive entries of `order`.
    pub segments: Vec<Path>,
    pub total_distance: f64,
}

/// Failures surfaced by the facade.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanError {
    Graph(GraphError),
    Sequence(SequenceError),
}

impl From<GraphError> for PlanError {
    fn from(err: GraphError) -> Self {
        PlanError::Graph(err)
    }
}

impl From<SequenceError> for PlanError {
    fn from(err: SequenceError) -> Self {
        PlanError::Sequence(err)
    }
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::Graph(err) => err.fmt(f),
            PlanError::Sequence(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlanError::Graph(err) => Some(err),
            PlanError::Sequence(err) => Some(err),
        }
    }
}

/// The delivery network engine: a weighted location graph plus the search
/// bounds used for alternative-route enumeration.
#[derive(Debug, Clone, Default)]
pub struct DeliveryNetwork {
    graph: RouteGraph,
    bounds: SearchBounds,
}

impl DeliveryNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the default alternative-search bounds (20 paths, 10 nodes).
    pub fn with_bounds(bounds: SearchBounds) -> Self {
        Self {
            graph: RouteGraph::new(),
            bounds,
        }
    }

    /// Registers a location, returning its index. A no-op for known names.
    pub fn register_location(&mut self, name: &str) -> usize {
        self.graph.resolve(name)
    }

    /// Adds an undirected route between two locations, auto-registering
    /// unseen names. `distance` must be non-negative (caller contract).
    pub fn add_route(&mut self, from: &str, to: &str, distance: f64) {
        self.graph.add_edge(from, to, distance);
    }

    /// Read-only view of the underlying graph, for rendering the network.
    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    /// Name of a location index held from an earlier result.
    pub fn location_name(&self, index: usize) -> Result<&str, GraphError> {
        self.graph.location_name(index)
    }

    /// Translates a path of indices back to location names for display.
    pub fn path_names(&self, path: &Path) -> Result<Vec<String>, GraphError> {
        path.nodes()
            .iter()
            .map(|&node| self.graph.location_name(node).map(str::to_string))
            .collect()
    }

    /// Shortest route between two named locations; empty when none exists.
    pub fn shortest_path(&mut self, start: &str, end: &str) -> Path {
        let start = self.graph.resolve(start);
        let end = self.graph.resolve(end);
        dijkstra::shortest_path(&self.graph, start, end)
    }

    /// Total distance along a path.
    pub fn path_distance(&self, path: &Path) -> f64 {
        self.graph.path_distance(path)
    }

    /// Up to `top_k` alternative routes distinct from `exclude`, ranked by
    /// ascending distance. Empty when no alternatives exist in bounds.
    pub fn alternatives(
        &mut self,
        start: &str,
        end: &str,
        exclude: &Path,
        top_k: usize,
    ) -> Vec<RankedAlternative> {
        let start = self.graph.resolve(start);
        let end = self.graph.resolve(end);
        alternatives::alternatives(&self.graph, start, end, exclude, top_k, self.bounds)
    }

    /// Sequences a multi-stop delivery from `depot` through `stops` with
    /// the nearest-neighbor heuristic, optionally closing the loop.
    pub fn sequence(
        &mut self,
        depot: &str,
        stops: &[&str],
        return_to_depot: bool,
    ) -> Result<DeliveryPlan, PlanError> {
        let depot = self.graph.resolve(depot);
        let stops: Vec<usize> = stops.iter().map(|stop| self.graph.resolve(stop)).collect();

        let route = sequencer::sequence(&self.graph, depot, &stops, return_to_depot)?;

        let order = route
            .order
            .iter()
            .map(|&node| self.graph.location_name(node).map(str::to_string))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DeliveryPlan {
            order,
            segments: route.segments,
            total_distance: route.total_distance,
        })
    }
}
