mod common;

use common::{petgraph_random, warshall_random, RANDOM_SEED};
use fastrand::Rng;
use warshall::algo::ShortestPaths;

fn main() {
    divan::main();
}

#[divan::bench(consts = [50, 100, 200], args = [0.25, 0.75])]
fn warshall_random_graph<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = warshall_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher
        .with_inputs(|| graph.clone())
        .bench_local_values(|mut graph| ShortestPaths::on(&mut graph).run().has_negative_cycle());
}

#[divan::bench(consts = [50, 100, 200], args = [0.25, 0.75])]
fn petgraph_random_graph<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| petgraph::algo::floyd_warshall(&graph, |e| *e.weight()));
}

#[divan::bench(consts = [50, 100, 200])]
fn warshall_reconstruct_all<const N: usize>(bencher: divan::Bencher) {
    let mut graph = warshall_random(N, 0.25, &mut Rng::with_seed(RANDOM_SEED));
    let paths = ShortestPaths::on(&mut graph).run().solved().unwrap();

    bencher.bench(|| {
        let mut total = 0;
        for u in 0..N {
            for v in 0..N {
                total += paths.reconstruct(u, v).map_or(0, |path| path.len());
            }
        }
        total
    });
}
