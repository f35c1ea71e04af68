use crate::core::{Graph, Weight};

use super::{
    floyd_warshall::floyd_warshall, NegativeCycle, NoObserver, Observer, Outcome, ShortestPaths,
    Step,
};

pub struct ShortestPathsBuilder<'a, W, O> {
    graph: &'a mut Graph<W>,
    observer: O,
}

impl<'a, W> ShortestPaths<'a, W>
where
    W: Weight,
{
    pub fn on(graph: &'a mut Graph<W>) -> ShortestPathsBuilder<'a, W, NoObserver> {
        ShortestPathsBuilder {
            graph,
            observer: NoObserver,
        }
    }
}

impl<'a, W, O> ShortestPathsBuilder<'a, W, O>
where
    W: Weight,
{
    pub fn observe<O2>(self, observer: O2) -> ShortestPathsBuilder<'a, W, O2>
    where
        O2: Observer<W>,
    {
        ShortestPathsBuilder {
            graph: self.graph,
            observer,
        }
    }

    // Using closures in `observe` gives "type annotations needed" for the
    // closure argument. This method that uses explicit FnMut signature
    // circumvents the problem.
    pub fn observe_fn<F>(self, observer: F) -> ShortestPathsBuilder<'a, W, F>
    where
        F: FnMut(Step<'_, W>),
    {
        self.observe(observer)
    }
}

impl<'a, W, O> ShortestPathsBuilder<'a, W, O>
where
    W: Weight,
    O: Observer<W>,
{
    pub fn run(self) -> Outcome<'a, W> {
        let ShortestPathsBuilder {
            graph,
            mut observer,
        } = self;

        let (dist, pred) = graph.matrices_mut();
        let negative_cycle = floyd_warshall(dist, pred, &mut observer);

        let graph: &'a Graph<W> = graph;

        if negative_cycle {
            Outcome::NegativeCycle(NegativeCycle { graph })
        } else {
            Outcome::Solved(ShortestPaths { graph })
        }
    }
}
