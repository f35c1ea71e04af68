use proptest::{collection::vec, strategy::Strategy};

use crate::core::{Graph, Weight};

/// Arcs of a graph as generated by [`arcs`].
///
/// The arc list can contain the same ordered pair multiple times, later
/// occurrences overwrite earlier ones when building the graph.
#[derive(Debug, Clone)]
pub struct ArcList<W> {
    pub vertex_count: usize,
    pub arcs: Vec<(usize, usize, W)>,
}

impl<W: Weight> ArcList<W> {
    pub fn to_graph(&self) -> Graph<W> {
        let mut graph = Graph::new(self.vertex_count).unwrap();
        graph.extend_with_arcs(self.arcs.iter().cloned()).unwrap();
        graph
    }
}

/// Generates a graph with `1..=max_vertices` vertices and arcs with weights
/// from the given strategy. Self-loops are not generated.
pub fn arcs<S>(max_vertices: usize, weight: S) -> impl Strategy<Value = ArcList<S::Value>>
where
    S: Strategy + Clone,
    S::Value: Weight,
{
    assert!(max_vertices > 0, "graph must have at least one vertex");

    (1..=max_vertices).prop_flat_map(move |vertex_count| {
        let arc = (0..vertex_count, 0..vertex_count, weight.clone());

        vec(arc, 0..=vertex_count * vertex_count).prop_map(move |arcs| ArcList {
            vertex_count,
            arcs: arcs.into_iter().filter(|(u, v, _)| u != v).collect(),
        })
    })
}
