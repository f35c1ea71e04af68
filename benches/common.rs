#![allow(dead_code)]

use fastrand::Rng;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Yields each ordered pair `(v, w)` with `w < v < vertex_bound` with
/// probability `p`, skipping the rest geometrically.
pub struct RandomArcs {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomArcs {
    pub fn new(vertex_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_bound,
            p,
        }
    }

    pub fn next_arc(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n { Some((*v, *w)) } else { None }
    }
}

/// Arcs go both ways at random so that the graph has cycles, but all weights
/// are positive.
pub fn random_arcs(vertex_count: usize, density: f32, rng: &mut Rng) -> Vec<(usize, usize, f32)> {
    let mut arcs = Vec::new();
    let mut pairs = RandomArcs::new(vertex_count, density);

    while let Some((u, v)) = pairs.next_arc(rng) {
        let (src, dst) = if rng.bool() { (u, v) } else { (v, u) };
        arcs.push((src, dst, rng.f32() + 0.1));
    }

    arcs
}

pub fn warshall_random(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> warshall::core::Graph<f32> {
    let mut graph = warshall::core::Graph::new(vertex_count).unwrap();
    graph
        .extend_with_arcs(random_arcs(vertex_count, density, rng))
        .unwrap();
    graph
}

pub fn petgraph_random(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<(), f32, petgraph::Directed> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        graph.add_node(());
    }

    for (u, v, w) in random_arcs(vertex_count, density, rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), w);
    }

    graph
}
