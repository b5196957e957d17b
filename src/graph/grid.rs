use crate::errors::GraphBuildError;
use crate::graph::{Graph, NodeId};

use num_traits::NumCast;
use rand::{Rng, SeedableRng, rngs::StdRng};


/// Position of a node on the lattice.
/// Nodes are laid out column-major: `x` is the offset inside a column,
/// `y` is the column index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

/// The four lattice directions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}


/// Manhattan distance between two grid positions
pub fn manhattan_distance(a: Point, b: Point) -> usize {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// Euclidean distance between two grid positions
pub fn euclidean_distance(a: Point, b: Point) -> f64 {
    let dx = a.x as f64 - b.x as f64;
    let dy = a.y as f64 - b.y as f64;
    (dx * dx + dy * dy).sqrt()
}


impl<C: Copy + NumCast> Graph<C> {

    /// Build a rows x cols lattice with edge costs drawn uniformly from
    /// `[1, max_cost]`. Construction is deterministic for a fixed seed.
    ///
    /// Undirected grids share one edge per adjacency; directed grids add a
    /// pair of opposite edges with the same drawn cost.
    pub fn grid(
        rows: usize,
        cols: usize,
        max_cost: u32,
        directed: bool,
        seed: u64,
    ) -> Result<Self, GraphBuildError> {
        Self::grid_with_rng(rows, cols, max_cost, directed, &mut StdRng::seed_from_u64(seed))
    }

    /// Same as [`Graph::grid`] for callers that hold their own rng
    pub fn grid_with_rng<R>(
        rows: usize,
        cols: usize,
        max_cost: u32,
        directed: bool,
        rng: &mut R,
    ) -> Result<Self, GraphBuildError>
    where
        R: Rng,
    {
        if rows < 1 || cols < 1 {
            return Err(GraphBuildError::InvalidDimensions(rows, cols));
        }
        if max_cost < 1 {
            return Err(GraphBuildError::InvalidMaxCost(max_cost));
        }

        let mut graph = Graph::with_grid_dims(directed, rows, cols);

        // Top left node, then the rest of the first column
        graph.add_node();
        for _ in 1..rows {
            let current = graph.add_node();
            let cost = draw_cost(rng, max_cost);
            graph.link(current - 1, current, cost);
        }

        // Remaining columns, top to bottom. The head of each column has no
        // node above it, every node connects back to the previous column.
        for _ in 1..cols {
            for row in 0..rows {
                let current = graph.add_node();
                if row > 0 {
                    let cost = draw_cost(rng, max_cost);
                    graph.link(current - 1, current, cost);
                }
                let cost = draw_cost(rng, max_cost);
                graph.link(current - rows, current, cost);
            }
        }

        Ok(graph)
    }
}

/// Uniform cost in `[1, max_cost]`, widened to the graph's cost type
fn draw_cost<C, R>(rng: &mut R, max_cost: u32) -> C
where
    C: NumCast,
    R: Rng,
{
    NumCast::from(rng.random_range(1..=max_cost)).unwrap() // u32 fits every supported cost type
}


impl<C> Graph<C> {

    /// Rows of the lattice, 0 for graphs not built by [`Graph::grid`]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Columns of the lattice, 0 for graphs not built by [`Graph::grid`]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Grid position of a node id. Grid graphs only.
    pub fn point_of(&self, id: NodeId) -> Point {
        Point {
            x: id % self.rows,
            y: id / self.rows,
        }
    }

    /// Node id of a grid position. Grid graphs only.
    pub fn id_of(&self, point: Point) -> NodeId {
        point.x + point.y * self.rows
    }

    /// Id of the adjacent node in `direction`, or None at the lattice
    /// boundary. Grid graphs only.
    pub fn grid_neighbor(&self, id: NodeId, direction: Direction) -> Option<NodeId> {
        let Point { x, y } = self.point_of(id);
        let point = match direction {
            Direction::Up if x > 0 => Point { x: x - 1, y },
            Direction::Down if x + 1 < self.rows => Point { x: x + 1, y },
            Direction::Left if y > 0 => Point { x, y: y - 1 },
            Direction::Right if y + 1 < self.cols => Point { x, y: y + 1 },
            _ => return None,
        };
        Some(self.id_of(point))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GraphBuildError;

    #[test]
    fn test_grid_node_and_edge_counts() {
        let rows = 4;
        let cols = 5;
        let graph: Graph<f64> = Graph::grid(rows, cols, 9, false, 1).unwrap();

        assert_eq!(graph.node_count(), rows * cols);
        // vertical connections per column + horizontal connections per row
        let connections = cols * (rows - 1) + rows * (cols - 1);
        assert_eq!(graph.edge_count(), connections);

        let directed: Graph<f64> = Graph::grid(rows, cols, 9, true, 1).unwrap();
        assert_eq!(directed.edge_count(), 2 * connections);
    }

    #[test]
    fn test_grid_costs_stay_in_range() {
        let max_cost = 7;
        let graph: Graph<u32> = Graph::grid(6, 6, max_cost, false, 42).unwrap();

        for edge in graph.edges() {
            assert!(edge.cost >= 1 && edge.cost <= max_cost);
        }
    }

    #[test]
    fn test_grid_is_deterministic_for_a_fixed_seed() {
        let a: Graph<u32> = Graph::grid(5, 4, 10, false, 77).unwrap();
        let b: Graph<u32> = Graph::grid(5, 4, 10, false, 77).unwrap();

        let costs_a: Vec<u32> = a.edges().iter().map(|e| e.cost).collect();
        let costs_b: Vec<u32> = b.edges().iter().map(|e| e.cost).collect();
        assert_eq!(costs_a, costs_b);
    }

    #[test]
    fn test_grid_rejects_invalid_dimensions() {
        let zero_rows: Result<Graph<f64>, _> = Graph::grid(0, 3, 5, false, 0);
        assert!(matches!(zero_rows, Err(GraphBuildError::InvalidDimensions(0, 3))));

        let zero_cols: Result<Graph<f64>, _> = Graph::grid(3, 0, 5, false, 0);
        assert!(matches!(zero_cols, Err(GraphBuildError::InvalidDimensions(3, 0))));

        let zero_cost: Result<Graph<f64>, _> = Graph::grid(3, 3, 0, false, 0);
        assert!(matches!(zero_cost, Err(GraphBuildError::InvalidMaxCost(0))));
    }

    #[test]
    fn test_point_mapping_round_trip() {
        let graph: Graph<u32> = Graph::grid(3, 4, 5, false, 0).unwrap();

        for id in 0..graph.node_count() {
            assert_eq!(graph.id_of(graph.point_of(id)), id);
        }

        // column-major layout: ids walk down the first column first
        assert_eq!(graph.point_of(0), Point { x: 0, y: 0 });
        assert_eq!(graph.point_of(2), Point { x: 2, y: 0 });
        assert_eq!(graph.point_of(3), Point { x: 0, y: 1 });
        assert_eq!(graph.id_of(Point { x: 2, y: 3 }), 11);
    }

    #[test]
    fn test_grid_neighbor_respects_boundaries() {
        let graph: Graph<u32> = Graph::grid(3, 3, 5, false, 0).unwrap();

        // top left corner
        assert_eq!(graph.grid_neighbor(0, Direction::Up), None);
        assert_eq!(graph.grid_neighbor(0, Direction::Left), None);
        assert_eq!(graph.grid_neighbor(0, Direction::Down), Some(1));
        assert_eq!(graph.grid_neighbor(0, Direction::Right), Some(3));

        // center node has all four neighbors
        let center = graph.id_of(Point { x: 1, y: 1 });
        for direction in Direction::ALL {
            assert!(graph.grid_neighbor(center, direction).is_some());
        }

        // bottom right corner
        let corner = graph.id_of(Point { x: 2, y: 2 });
        assert_eq!(graph.grid_neighbor(corner, Direction::Down), None);
        assert_eq!(graph.grid_neighbor(corner, Direction::Right), None);
    }

    #[test]
    fn test_distances() {
        let a = Point { x: 0, y: 0 };
        let b = Point { x: 3, y: 4 };

        assert_eq!(manhattan_distance(a, b), 7);
        assert_eq!(manhattan_distance(b, a), 7);
        assert_eq!(euclidean_distance(a, b), 5.0);
        assert_eq!(euclidean_distance(a, a), 0.0);
    }
}
