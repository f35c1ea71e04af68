use thiserror::Error;

use crate::core::{Graph, Weight};

pub fn create_path<W: Weight>(vertex_count: usize, weight: W) -> Graph<W> {
    let mut graph = Graph::new(vertex_count.max(1)).unwrap();

    for v in 1..vertex_count {
        graph.add_arc(v - 1, v, weight.clone()).unwrap();
    }

    graph
}

pub fn create_complete<W: Weight>(vertex_count: usize, weight: W) -> Graph<W> {
    let mut graph = Graph::new(vertex_count.max(1)).unwrap();

    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u != v {
                graph.add_arc(u, v, weight.clone()).unwrap();
            }
        }
    }

    graph
}

/// Total weight of the arcs along the path, or `None` if some consecutive pair
/// is not connected by an arc or the total overflows.
pub fn path_weight<W: Weight>(graph: &Graph<W>, path: &[usize]) -> Option<W> {
    path.windows(2).try_fold(W::zero(), |total, pair| {
        graph
            .arc(pair[0], pair[1])
            .and_then(|weight| total.checked_add(weight))
    })
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("predecessor of vertex {0} on its trivial path is not itself")]
    TrivialPathPredecessor(usize),
    #[error("distance from {0} to {1} is known but predecessor is not, or vice versa")]
    DistPredMismatch(usize, usize),
    #[error("predecessor of {1} on the path from {0} is out of range")]
    PredecessorOutOfRange(usize, usize),
}

/// Checks the invariants of the distance and predecessor matrices that hold
/// for any graph without a negative cycle, solved or not.
pub fn check_consistency<W: Weight>(graph: &Graph<W>) -> Result<(), ConsistencyCheckError> {
    for u in graph.vertices() {
        if graph.pred(u, u) != Some(u) {
            return Err(ConsistencyCheckError::TrivialPathPredecessor(u));
        }

        for v in graph.vertices() {
            let pred = graph.pred(u, v);

            if graph.dist(u, v).is_some() != pred.is_some() {
                return Err(ConsistencyCheckError::DistPredMismatch(u, v));
            }

            if pred.is_some_and(|p| !graph.contains_vertex(p)) {
                return Err(ConsistencyCheckError::PredecessorOutOfRange(u, v));
            }
        }
    }

    Ok(())
}
