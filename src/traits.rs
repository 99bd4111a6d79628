//! Core traits for the delivery planner.
//!
//! These are intentionally minimal. The sequencer is generic over a path
//! provider so it can be exercised against synthetic distances in tests.

use crate::path::Path;

/// Supplies shortest paths and path distances over location indices.
///
/// Implemented by [`crate::graph::RouteGraph`]; the sequencer issues
/// repeated queries through this seam.
pub trait PathProvider {
    /// Minimum-weight path between two locations, empty when unreachable.
    fn shortest_path(&self, start: usize, end: usize) -> Path;

    /// Total distance along a path.
    fn path_distance(&self, path: &Path) -> f64;
}
