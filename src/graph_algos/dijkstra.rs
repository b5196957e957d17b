use crate::errors::SearchError;
use crate::graph::{Edge, Graph, NodeId};
use super::SearchResult;
use super::shortest_path::backtrace;

use std::{cmp::Ordering, collections::BinaryHeap};
use num_traits::Zero;


/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
///
/// Lazy deletion discipline: a node may sit in the frontier several times with
/// different tentative costs; stale entries are never removed in place, only
/// skipped when popped. Edge costs must be non-negative.
pub fn dijkstra<C>(
    graph: &Graph<C>,
    source: NodeId,
    target: NodeId,
) -> Result<SearchResult<C>, SearchError>
where
    C: Zero + Copy + PartialOrd,
{
    search_with(graph, source, target, |edge, _, _| edge.cost)
}


/// The search engine shared by [`dijkstra`] and the goal directed variant.
/// `edge_cost` is evaluated per traversal as `(edge, from, to)`, which lets
/// the goal directed search substitute reweighted costs without touching the
/// graph.
pub(crate) fn search_with<C, F>(
    graph: &Graph<C>,
    source: NodeId,
    target: NodeId,
    edge_cost: F,
) -> Result<SearchResult<C>, SearchError>
where
    C: Zero + Copy + PartialOrd,
    F: Fn(&Edge<C>, NodeId, NodeId) -> C,
{
    // Best known cost per node, None until the node is finalized
    let mut best: Vec<Option<C>> = vec![None; graph.node_count()];

    // Finalized predecessor per node, usize::MAX marks the source
    let mut predecessor: Vec<NodeId> = vec![usize::MAX; graph.node_count()];

    let mut visited = 0;

    // Frontier of (tentative cost, node) entries, smallest cost first
    let mut frontier: BinaryHeap<FrontierEntry<C>> = BinaryHeap::new();
    frontier.push(FrontierEntry {
        cost: C::zero(),
        node: source,
        prev: usize::MAX,
    });

    while let Some(FrontierEntry { cost, node, prev }) = frontier.pop() {

        // Already finalized, this entry is a stale non-optimal label
        if best[node].is_some() {
            continue;
        }

        // First pop of a node settles its optimal cost
        best[node] = Some(cost);
        predecessor[node] = prev;
        visited += 1;

        if node == target {
            return Ok(SearchResult {
                cost,
                visited,
                path: backtrace(&predecessor, target),
            });
        }

        // Push every unsettled neighbor with its new tentative cost
        for &edge_id in graph.incident(node) {
            let edge = graph.edge(edge_id);
            let next = edge.other(node);
            if best[next].is_some() {
                continue;
            }

            let step = edge_cost(edge, node, next);
            debug_assert!(step >= C::zero(), "negative edge cost breaks the search contract");

            frontier.push(FrontierEntry {
                cost: cost + step,
                node: next,
                prev: node,
            });
        }
    }

    // Frontier drained without reaching the target
    Err(SearchError::NoPathFound)
}


/// Frontier entry
/// - ordering only looks at the cost, ties pop in insertion-dependent order
/// - `prev` records which node pushed the entry, for path reconstruction
#[derive(Debug)]
struct FrontierEntry<C> {
    cost: C,
    node: NodeId,
    prev: NodeId,
}

// Reversed comparison turns std's max-heap into a min-heap. Costs are finite
// and non-negative here, so partial_cmp never sees a NaN.
impl<C: PartialOrd> Ord for FrontierEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.partial_cmp(&self.cost).unwrap_or(Ordering::Equal)
    }
}
impl<C: PartialOrd> PartialOrd for FrontierEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: PartialEq> PartialEq for FrontierEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}
impl<C: PartialEq> Eq for FrontierEntry<C> {}
