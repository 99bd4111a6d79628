//! delivery-planner core engine
//!
//! Routing over a small weighted, undirected location graph: shortest paths,
//! ranked alternative routes, and greedy multi-stop delivery sequencing.
//! Presentation (menus, input parsing, formatting) lives outside this crate
//! and calls in with plain location names.

pub mod traits;
pub mod path;
pub mod graph;
pub mod dijkstra;
pub mod alternatives;
pub mod sequencer;
pub mod network;
