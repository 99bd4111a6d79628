//! Path representation for computed routes.
//!
//! A path is an ordered sequence of location indices. Indices are internal
//! keys; translation to display names happens at the API boundary (see
//! [`crate::network`]), not within the routing core.

use serde::{Deserialize, Serialize};

/// A route through the network as an ordered sequence of location indices.
///
/// A single-node path is the trivial route from a location to itself. An
/// empty path is the "no route found" outcome and is a normal result, not
/// an error; callers check [`Path::is_empty`] before reading nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    nodes: Vec<usize>,
}

impl Path {
    /// Creates a path from an ordered node sequence.
    pub fn new(nodes: Vec<usize>) -> Self {
        Self { nodes }
    }

    /// The empty "no route found" path.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns a reference to the node sequence.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Consumes the path and returns the owned node sequence.
    pub fn into_nodes(self) -> Vec<usize> {
        self.nodes
    }

    /// Number of nodes on the path.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when no route was found.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node of the path, if any.
    pub fn start(&self) -> Option<usize> {
        self.nodes.first().copied()
    }

    /// Last node of the path, if any.
    pub fn end(&self) -> Option<usize> {
        self.nodes.last().copied()
    }
}
