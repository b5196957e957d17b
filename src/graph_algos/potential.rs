use crate::errors::SearchError;
use crate::graph::{Edge, Graph, NodeId};
use crate::graph::grid::{euclidean_distance, manhattan_distance};
use super::SearchResult;
use super::dijkstra::search_with;

use num_traits::{Float, Num, NumCast};


/// Per-node potential values used to reweight edge costs for goal directed
/// search. The potential is an overlay applied while edges are read, the
/// graph itself is never modified, so one graph instance can serve any number
/// of plain and goal directed searches.
///
/// The heuristic must be admissible (never overestimate the true remaining
/// cost) or the reweighted costs can turn negative, which breaks the search.
#[derive(Clone, Debug)]
pub struct Potential<C> {
    values: Vec<C>,
}

impl<C> Potential<C>
where
    C: Num + Copy + PartialOrd,
{
    /// Evaluate `heuristic` at every node of the graph
    pub fn new<H>(graph: &Graph<C>, heuristic: H) -> Self
    where
        H: Fn(NodeId) -> C,
    {
        Self {
            values: (0..graph.node_count()).map(heuristic).collect(),
        }
    }

    /// All-zero potential, the goal directed search degenerates to plain
    /// Dijkstra
    pub fn zero(graph: &Graph<C>) -> Self {
        Self {
            values: vec![C::zero(); graph.node_count()],
        }
    }

    /// Straight-line grid distance to `target`. Admissible on lattices whose
    /// edge costs are at least 1, since adjacent nodes sit at distance 1.
    /// Grid graphs only.
    pub fn euclidean(graph: &Graph<C>, target: NodeId) -> Self
    where
        C: Float + NumCast,
    {
        let goal = graph.point_of(target);
        Self::new(graph, |id| {
            let distance = euclidean_distance(graph.point_of(id), goal);
            NumCast::from(distance).unwrap() // finite and non-negative
        })
    }

    /// Manhattan grid distance to `target`, the integer-cost counterpart of
    /// [`Potential::euclidean`]. Grid graphs only.
    pub fn manhattan(graph: &Graph<C>, target: NodeId) -> Self
    where
        C: NumCast,
    {
        let goal = graph.point_of(target);
        Self::new(graph, |id| {
            let distance = manhattan_distance(graph.point_of(id), goal);
            NumCast::from(distance).unwrap() // usize distance fits the cost type
        })
    }

    /// Potential value of a node
    pub fn value(&self, node: NodeId) -> C {
        self.values[node]
    }

    /// Cost the goal directed search sees when crossing `edge` from `from`
    /// to `to`. Along any path the adjustments telescope, so the reweighted
    /// path cost is the true cost plus `value(target) - value(source)`.
    ///
    /// Evaluated left to right so unsigned cost types never underflow: a
    /// consistent potential guarantees `cost + value(to) >= value(from)`.
    pub fn reweighted_cost(&self, edge: &Edge<C>, from: NodeId, to: NodeId) -> C {
        edge.cost + self.values[to] - self.values[from]
    }

    /// The full rewritten cost sequence, one entry per edge, oriented
    /// `node1 -> node2`. For undirected graphs the orientation is arbitrary
    /// and only the traversal-relative [`Potential::reweighted_cost`] form
    /// telescopes; this sequence is for directed graphs and diagnostics.
    pub fn reweighted_costs(&self, graph: &Graph<C>) -> Vec<C> {
        graph
            .edges()
            .iter()
            .map(|edge| self.reweighted_cost(edge, edge.node1, edge.node2))
            .collect()
    }
}


/// Goal directed shortest path: run the plain search over potential-reweighted
/// edge costs, then undo the offset the reweighting introduced at the
/// endpoints to recover the true path cost.
///
/// With an admissible potential this returns exactly what plain [`dijkstra`]
/// returns, usually after visiting fewer nodes.
///
/// [`dijkstra`]: super::dijkstra::dijkstra
pub fn goal_directed<C>(
    graph: &Graph<C>,
    source: NodeId,
    target: NodeId,
    potential: &Potential<C>,
) -> Result<SearchResult<C>, SearchError>
where
    C: Num + Copy + PartialOrd,
{
    let mut result = search_with(graph, source, target, |edge, from, to| {
        potential.reweighted_cost(edge, from, to)
    })?;

    // The observed cost is true + value(target) - value(source)
    result.cost = result.cost + potential.value(source) - potential.value(target);
    Ok(result)
}
