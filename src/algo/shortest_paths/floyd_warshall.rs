use tracing::{debug, trace};

use crate::core::{Matrix, Weight};

use super::{negative_cycle_vertices, Observer, Step};

/// Relaxes the distance and predecessor matrices in place and returns `true`
/// if a negative cycle was found.
///
/// The matrices must be initialized as by [`Graph`](crate::core::Graph): the
/// diagonal set to zero and to the vertex itself, respectively, and every arc
/// `u -> v` recorded as its weight and `u`. The observer is notified after
/// each intermediate vertex is processed.
pub fn floyd_warshall<W, O>(
    dist: &mut Matrix<Option<W>>,
    pred: &mut Matrix<Option<usize>>,
    observer: &mut O,
) -> bool
where
    W: Weight,
    O: Observer<W> + ?Sized,
{
    let n = dist.size();
    assert_eq!(n, pred.size(), "matrices have different sizes");

    debug!(vertex_count = n, "computing all pairs shortest paths");

    for k in 0..n {
        let mut relaxed = 0usize;

        for i in 0..n {
            // Nothing goes through k if k is unreachable from i. The entry can
            // only become known by going through k itself.
            if dist[(i, k)].is_none() {
                continue;
            }

            for j in 0..n {
                let candidate = match (&dist[(i, k)], &dist[(k, j)]) {
                    (Some(ik), Some(kj)) => match ik.checked_add(kj) {
                        Some(sum) => sum,
                        // Below the lower bound. The bound is still not
                        // lower than the true cost.
                        None if kj.is_negative() => ik.saturating_add(kj),
                        // Above the upper bound, cannot improve anything.
                        None => continue,
                    },
                    _ => continue,
                };

                // Strict comparison, ties keep the path found first.
                let improves = match &dist[(i, j)] {
                    Some(current) => candidate < *current,
                    None => true,
                };

                if improves {
                    dist[(i, j)] = Some(candidate);
                    // The predecessor of j on the k -> j path, which is not
                    // necessarily k.
                    pred[(i, j)] = pred[(k, j)];
                    relaxed += 1;
                }
            }
        }

        trace!(k, relaxed, "intermediate vertex processed");

        observer.on_step(Step {
            k,
            dist: &*dist,
            pred: &*pred,
        });
    }

    let negative_cycle = !W::is_unsigned() && negative_cycle_vertices(dist).next().is_some();

    debug!(negative_cycle, "all pairs shortest paths computed");

    negative_cycle
}

#[cfg(test)]
mod tests {
    use crate::core::Graph;

    use super::{super::NoObserver, *};

    #[test]
    fn raw_matrices() {
        let mut graph = Graph::new(3).unwrap();
        graph
            .extend_with_arcs([(0, 1, 2), (1, 2, 2), (2, 0, 2)])
            .unwrap();
        let (dist, pred) = graph.matrices_mut();

        assert!(!floyd_warshall(dist, pred, &mut NoObserver));

        assert_eq!(dist[(0, 2)], Some(4));
        assert_eq!(pred[(0, 2)], Some(1));
        assert_eq!(dist[(2, 1)], Some(4));
        assert_eq!(pred[(2, 1)], Some(0));
    }

    #[test]
    fn negative_cycle_flag() {
        let mut graph = Graph::new(2).unwrap();
        graph.extend_with_arcs([(0, 1, 1), (1, 0, -3)]).unwrap();
        let (dist, pred) = graph.matrices_mut();

        assert!(floyd_warshall(dist, pred, &mut NoObserver));
        assert_eq!(dist[(0, 0)], Some(-2));
    }

    #[test]
    fn zero_weight_cycle_is_not_negative() {
        let mut graph = Graph::new(2).unwrap();
        graph.extend_with_arcs([(0, 1, 3), (1, 0, -3)]).unwrap();
        let (dist, pred) = graph.matrices_mut();

        assert!(!floyd_warshall(dist, pred, &mut NoObserver));
        assert_eq!(dist[(0, 0)], Some(0));
        assert_eq!(pred[(0, 0)], Some(0));
    }

    #[test]
    fn overflowing_cycle_is_not_negative() {
        // The cycle costs 126, the path 0 -> 1 -> 2 alone does not fit in i8.
        let mut graph = Graph::<i8>::new(3).unwrap();
        graph
            .extend_with_arcs([(0, 1, 127), (1, 2, 127), (2, 0, -128)])
            .unwrap();
        let (dist, pred) = graph.matrices_mut();

        assert!(!floyd_warshall(dist, pred, &mut NoObserver));
        assert_eq!(dist[(0, 2)], None);
        assert_eq!(pred[(0, 2)], None);
        assert_eq!(dist[(1, 0)], Some(-1));
        assert_eq!(pred[(1, 0)], Some(2));
    }

    #[test]
    fn underflowing_cycle_is_negative() {
        let mut graph = Graph::<i8>::new(2).unwrap();
        graph.extend_with_arcs([(0, 1, -100), (1, 0, -100)]).unwrap();
        let (dist, pred) = graph.matrices_mut();

        assert!(floyd_warshall(dist, pred, &mut NoObserver));
        assert_eq!(dist[(1, 1)], Some(i8::MIN));
    }

    #[test]
    #[should_panic]
    fn mismatched_sizes() {
        let mut dist = Matrix::<Option<i32>>::new(2, None);
        let mut pred = Matrix::new(3, None);

        floyd_warshall(&mut dist, &mut pred, &mut NoObserver);
    }
}
