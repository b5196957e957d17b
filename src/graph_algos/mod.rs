pub mod dijkstra;
pub mod potential;
mod shortest_path;

pub use dijkstra::dijkstra;
pub use potential::{Potential, goal_directed};

use crate::graph::NodeId;


/// Outcome of a successful search.
/// `visited` counts finalized nodes, including the target itself.
#[derive(Clone, Debug)]
pub struct SearchResult<C> {
    pub cost: C,
    pub visited: usize,
    pub path: Vec<NodeId>,
}
