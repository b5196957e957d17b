//! Shortest path search over weighted grid graphs.
//!
//! Builds lattice graphs with random edge costs and compares plain Dijkstra
//! against a goal directed variant that reweights edges with an admissible
//! potential before running the same search.

pub mod bench;
mod collections;
pub mod errors;
pub mod graph;
pub mod graph_algos;

pub use graph::{Edge, EdgeId, Graph, Node, NodeId};
pub use graph_algos::{Potential, SearchResult, dijkstra, goal_directed};
