//! Multi-stop delivery sequencing (nearest-neighbor heuristic).

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::path::Path;
use crate::traits::PathProvider;

/// A fully sequenced multi-stop route over location indices.
///
/// `order` starts at the depot and lists stops in visit order (ending with
/// the depot again when the loop is closed). `segments[i]` is the concrete
/// path from `order[i]` to `order[i + 1]`, so the whole route can be
/// reproduced exactly, not just the stop order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequencedRoute {
    pub order: Vec<usize>,
    pub segments: Vec<Path>,
    pub total_distance: f64,
}

/// Sequencing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// No remaining stop is reachable from the current location, so the
    /// plan cannot be completed. Reported instead of a silent partial route.
    NoFeasibleSequence {
        from: usize,
        unreachable: Vec<usize>,
    },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::NoFeasibleSequence { from, unreachable } => write!(
                f,
                "no feasible sequence: {} stop(s) unreachable from location {from}",
                unreachable.len()
            ),
        }
    }
}

impl std::error::Error for SequenceError {}

/// Orders `stops` from `depot` with the greedy nearest-neighbor heuristic.
///
/// Repeatedly queries the provider from the current location to every
/// remaining stop and takes the closest one; ties go to the stop iterated
/// first, so results are deterministic for a fixed stop order. Unreachable
/// stops have infinite candidate distance and are never selected; once only
/// unreachable stops remain the plan fails with
/// [`SequenceError::NoFeasibleSequence`]. With `return_to_depot` a closing
/// leg back to the depot is appended (and its absence is also infeasible).
///
/// This is an O(stops² · query) approximation with no optimality guarantee.
pub fn sequence<P: PathProvider>(
    provider: &P,
    depot: usize,
    stops: &[usize],
    return_to_depot: bool,
) -> Result<SequencedRoute, SequenceError> {
    let mut remaining: Vec<usize> = stops.to_vec();
    let mut order = vec![depot];
    let mut segments: Vec<Path> = Vec::new();
    let mut total_distance = 0.0;
    let mut current = depot;

    while !remaining.is_empty() {
        let mut nearest: Option<(usize, Path, f64)> = None;
        for (position, &stop) in remaining.iter().enumerate() {
            let path = provider.shortest_path(current, stop);
            if path.is_empty() {
                continue;
            }
            let distance = provider.path_distance(&path);
            let closer = match &nearest {
                Some((_, _, best)) => distance < *best,
                None => true,
            };
            if closer {
                nearest = Some((position, path, distance));
            }
        }

        let Some((position, path, distance)) = nearest else {
            return Err(SequenceError::NoFeasibleSequence {
                from: current,
                unreachable: remaining,
            });
        };

        let stop = remaining.remove(position);
        debug!(from = current, stop, distance, "nearest stop selected");
        order.push(stop);
        segments.push(path);
        total_distance += distance;
        current = stop;
    }

    if return_to_depot {
        let path = provider.shortest_path(current, depot);
        if path.is_empty() {
            return Err(SequenceError::NoFeasibleSequence {
                from: current,
                unreachable: vec![depot],
            });
        }
        total_distance += provider.path_distance(&path);
        order.push(depot);
        segments.push(path);
    }

    Ok(SequencedRoute {
        order,
        segments,
        total_distance,
    })
}
