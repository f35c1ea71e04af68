//! Find [all pairs shortest paths] and their distances in a graph, using the
//! [Floyd–Warshall algorithm].
//!
//! See available parameters [here](ShortestPathsBuilder#implementations).
//!
//! The algorithm runs in `O(n³)` time regardless of the number of arcs and
//! accepts negative arc weights. If the graph contains a cycle with negative
//! total weight, the shortest paths are not defined. This is reported as
//! [`Outcome::NegativeCycle`], which does not allow path queries.
//!
//! The graph is solved in place. Its [distance](Graph::dist) and
//! [predecessor](Graph::pred) matrices hold the solution afterwards and stay
//! readable through the returned [`Outcome`].
//!
//! [all pairs shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#All-pairs_shortest_paths
//! [Floyd–Warshall algorithm]:
//!     https://en.wikipedia.org/wiki/Floyd%E2%80%93Warshall_algorithm
//!
//! # Examples
//!
//! ```
//! use warshall::{algo::ShortestPaths, core::Graph};
//!
//! let mut graph = Graph::new(4).unwrap();
//!
//! graph
//!     .extend_with_arcs([(0, 1, 3), (1, 2, 1), (0, 2, 10), (2, 3, 2)])
//!     .unwrap();
//!
//! let outcome = ShortestPaths::on(&mut graph).run();
//! let shortest_paths = outcome.solved().expect("no negative cycle");
//!
//! assert_eq!(shortest_paths.dist(0, 3), Some(&6));
//! assert_eq!(shortest_paths.reconstruct(0, 3), Some(vec![0, 1, 2, 3]));
//! ```

use std::ops::Index;

use fixedbitset::FixedBitSet;
use tracing::debug;

use crate::core::{Graph, Matrix, Weight};

mod builder;
mod floyd_warshall;

pub use builder::ShortestPathsBuilder;
pub use floyd_warshall::floyd_warshall;

/// Result of a [`ShortestPaths`] run.
#[derive(Debug)]
pub enum Outcome<'a, W> {
    /// The graph does not contain a negative cycle and all shortest paths are
    /// well defined.
    Solved(ShortestPaths<'a, W>),

    /// The graph contains a cycle with negative total weight. The distances
    /// of vertices connected through the cycle are meaningless.
    NegativeCycle(NegativeCycle<'a, W>),
}

impl<'a, W> Outcome<'a, W> {
    pub fn has_negative_cycle(&self) -> bool {
        matches!(self, Outcome::NegativeCycle(_))
    }

    /// The solved graph, regardless of the outcome.
    pub fn graph(&self) -> &'a Graph<W> {
        match self {
            Outcome::Solved(paths) => paths.graph,
            Outcome::NegativeCycle(cycle) => cycle.graph,
        }
    }

    pub fn solved(self) -> Option<ShortestPaths<'a, W>> {
        match self {
            Outcome::Solved(paths) => Some(paths),
            Outcome::NegativeCycle(_) => None,
        }
    }

    pub fn negative_cycle(self) -> Option<NegativeCycle<'a, W>> {
        match self {
            Outcome::Solved(_) => None,
            Outcome::NegativeCycle(cycle) => Some(cycle),
        }
    }
}

/// Shortest paths and their distances between all pairs of vertices.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct ShortestPaths<'a, W> {
    graph: &'a Graph<W>,
}

impl<'a, W> ShortestPaths<'a, W> {
    pub fn graph(&self) -> &'a Graph<W> {
        self.graph
    }

    /// Returns the path distance between the two vertices, or `None` if `to`
    /// is not reachable from `from`.
    pub fn dist(&self, from: usize, to: usize) -> Option<&'a W> {
        self.graph.dist(from, to)
    }

    /// Returns the vertices on a shortest path from `from` to `to`, both ends
    /// included, or `None` if there is no such path.
    pub fn reconstruct(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        reconstruct_path(self.graph.pred_matrix(), from, to)
    }
}

impl<W> Index<(usize, usize)> for ShortestPaths<'_, W> {
    type Output = W;

    fn index(&self, (from, to): (usize, usize)) -> &Self::Output {
        self.dist(from, to).unwrap()
    }
}

/// Evidence of a negative cycle found by [`ShortestPaths`].
#[derive(Debug)]
pub struct NegativeCycle<'a, W> {
    graph: &'a Graph<W>,
}

impl<'a, W: Weight> NegativeCycle<'a, W> {
    pub fn graph(&self) -> &'a Graph<W> {
        self.graph
    }

    /// Vertices that lie on a negative cycle, that is, those with a negative
    /// distance to themselves.
    pub fn vertices(&self) -> Vec<usize> {
        negative_cycle_vertices(self.graph.dist_matrix()).collect()
    }
}

/// Snapshot of the matrices after processing intermediate vertex `k`.
#[derive(Debug)]
pub struct Step<'a, W> {
    pub k: usize,
    pub dist: &'a Matrix<Option<W>>,
    pub pred: &'a Matrix<Option<usize>>,
}

/// Receives a [`Step`] after each iteration of the outer loop.
///
/// Any `FnMut(Step<'_, W>)` closure is an observer. Observers cannot
/// influence the computation.
pub trait Observer<W> {
    fn on_step(&mut self, step: Step<'_, W>);
}

impl<W, F> Observer<W> for F
where
    F: FnMut(Step<'_, W>),
{
    fn on_step(&mut self, step: Step<'_, W>) {
        (self)(step)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl<W> Observer<W> for NoObserver {
    fn on_step(&mut self, _step: Step<'_, W>) {}
}

/// Reconstructs a path from `start` to `end` by following the predecessor
/// matrix backwards.
///
/// Returns `None` if either vertex is out of range, if there is no path, or
/// if the predecessors do not lead back to `start` without repeating a
/// vertex. The last case cannot happen for a matrix produced by
/// [`floyd_warshall`] on a graph without negative cycles.
pub fn reconstruct_path(
    pred: &Matrix<Option<usize>>,
    start: usize,
    end: usize,
) -> Option<Vec<usize>> {
    if pred.get(start, end).copied().flatten().is_none() {
        return None;
    }

    let mut visited = FixedBitSet::with_capacity(pred.size());
    let mut path = vec![end];
    let mut curr = end;
    visited.insert(curr);

    while curr != start {
        curr = match pred.get(start, curr).copied().flatten() {
            Some(prev) if prev < pred.size() => prev,
            _ => {
                debug!(start, end, curr, "predecessor chain is broken");
                return None;
            }
        };

        if visited.put(curr) {
            debug!(start, end, curr, "predecessor chain contains a cycle");
            return None;
        }

        path.push(curr);
    }

    path.reverse();
    Some(path)
}

pub(crate) fn negative_cycle_vertices<W: Weight>(
    dist: &Matrix<Option<W>>,
) -> impl Iterator<Item = usize> + '_ {
    dist.diagonal()
        .enumerate()
        .filter(|(_, d)| d.as_ref().is_some_and(|d| d.is_negative()))
        .map(|(v, _)| v)
}
