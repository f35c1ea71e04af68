use std::ops::Range;

use super::{
    error::{AddArcError, AddArcErrorKind, CreateGraphError},
    matrix::Matrix,
    weight::Weight,
};

/// Directed weighted graph on vertices `0..n`, represented by dense matrices.
///
/// Besides the arcs as they were inserted, the graph owns the distance matrix
/// and the predecessor matrix that the [shortest paths
/// engine](crate::algo::shortest_paths) relaxes in place. Before the engine
/// runs, the distance of each pair is the weight of the direct arc (if any),
/// and the predecessor of the arc destination is the arc source.
///
/// The vertex count is fixed at construction.
///
/// # Examples
///
/// ```
/// use warshall::core::Graph;
///
/// let mut graph = Graph::new(3).unwrap();
/// graph.add_arc(0, 1, 4).unwrap();
/// graph.add_arc(1, 2, -1).unwrap();
///
/// assert_eq!(graph.dist(0, 1), Some(&4));
/// assert_eq!(graph.pred(0, 1), Some(0));
/// assert_eq!(graph.dist(0, 2), None);
/// assert!(graph.add_arc(0, 3, 1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<W> {
    arcs: Matrix<Option<W>>,
    dist: Matrix<Option<W>>,
    pred: Matrix<Option<usize>>,
}

impl<W: Weight> Graph<W> {
    /// Fails with [`CreateGraphError::InvalidSize`] for zero vertices and
    /// with [`CreateGraphError::TooLarge`] if the matrices cannot be
    /// allocated.
    pub fn new(vertex_count: usize) -> Result<Self, CreateGraphError> {
        if vertex_count == 0 {
            return Err(CreateGraphError::InvalidSize);
        }

        let too_large = || CreateGraphError::TooLarge;
        let arcs = Matrix::try_new(vertex_count, None).ok_or_else(too_large)?;
        let mut dist = Matrix::try_new(vertex_count, None).ok_or_else(too_large)?;
        let mut pred = Matrix::try_new(vertex_count, None).ok_or_else(too_large)?;

        for v in 0..vertex_count {
            dist[(v, v)] = Some(W::zero());
            pred[(v, v)] = Some(v);
        }

        Ok(Self {
            arcs,
            dist,
            pred,
        })
    }

    /// Adds the arc `src -> dst`, or replaces the weight of an existing one.
    ///
    /// The arc also overwrites the current distance between its endpoints,
    /// even if a shorter path was already known. A self-loop only affects the
    /// distance if its weight is negative, because a non-negative loop never
    /// beats the trivial path of cost zero.
    ///
    /// On failure the graph is left untouched and the weight is returned in
    /// the error.
    pub fn add_arc(&mut self, src: usize, dst: usize, weight: W) -> Result<(), AddArcError<W>> {
        if !self.contains_vertex(src) {
            return Err(AddArcError::new(weight, AddArcErrorKind::SourceOutOfRange));
        }

        if !self.contains_vertex(dst) {
            return Err(AddArcError::new(
                weight,
                AddArcErrorKind::DestinationOutOfRange,
            ));
        }

        self.dist[(src, dst)] = if src != dst || weight.is_negative() {
            Some(weight.clone())
        } else {
            Some(W::zero())
        };

        self.pred[(src, dst)] = Some(src);
        self.arcs[(src, dst)] = Some(weight);

        Ok(())
    }

    /// Adds all arcs from the iterator, stopping at the first failure.
    pub fn extend_with_arcs<I>(&mut self, arcs: I) -> Result<(), AddArcError<W>>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        for (src, dst, weight) in arcs {
            self.add_arc(src, dst, weight)?;
        }

        Ok(())
    }
}

impl<W> Graph<W> {
    pub fn vertex_count(&self) -> usize {
        self.dist.size()
    }

    pub fn vertices(&self) -> Range<usize> {
        0..self.vertex_count()
    }

    pub fn contains_vertex(&self, v: usize) -> bool {
        v < self.vertex_count()
    }

    /// Weight of the arc `src -> dst` as it was inserted.
    pub fn arc(&self, src: usize, dst: usize) -> Option<&W> {
        self.arcs.get(src, dst)?.as_ref()
    }

    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize, &W)> + '_ {
        self.arcs
            .entries()
            .filter_map(|((src, dst), weight)| weight.as_ref().map(|w| (src, dst, w)))
    }

    pub fn arc_count(&self) -> usize {
        self.arcs().count()
    }

    /// Current distance from `src` to `dst`, or `None` if no path is known.
    pub fn dist(&self, src: usize, dst: usize) -> Option<&W> {
        self.dist.get(src, dst)?.as_ref()
    }

    /// Current predecessor of `dst` on the best known path from `src`.
    pub fn pred(&self, src: usize, dst: usize) -> Option<usize> {
        self.pred.get(src, dst).copied().flatten()
    }

    pub fn dist_matrix(&self) -> &Matrix<Option<W>> {
        &self.dist
    }

    pub fn pred_matrix(&self) -> &Matrix<Option<usize>> {
        &self.pred
    }

    pub(crate) fn matrices_mut(&mut self) -> (&mut Matrix<Option<W>>, &mut Matrix<Option<usize>>) {
        (&mut self.dist, &mut self.pred)
    }
}
