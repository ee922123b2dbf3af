#![allow(dead_code)]

use diwalk::storage::{AdjList, AdjMatrix};
use fastrand::Rng;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0x5d1a_c0ff_ee42_b7e3;

/// Generates random vertex pairs of a G(n, p) graph by skipping over the
/// pairs that are not selected instead of flipping a coin for each pair.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_bound,
            p,
        }
    }

    /// Returns a pair `(u, v)` with `u ≠ v`, oriented randomly.
    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
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

        if *v >= n {
            None
        } else if rng.bool() {
            Some((*v, *w))
        } else {
            Some((*w, *v))
        }
    }
}

pub fn list_random(vertex_count: usize, density: f32, rng: &mut Rng) -> AdjList {
    let mut graph = AdjList::with_capacity(vertex_count);
    let vertices = graph.extend_with_vertices(vertex_count);

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(&vertices[u], &vertices[v]);
    }

    graph
}

pub fn matrix_random(vertex_count: usize, density: f32, rng: &mut Rng) -> AdjMatrix {
    let mut graph = AdjMatrix::with_capacity(vertex_count);
    let vertices = graph.extend_with_vertices(vertex_count);

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(&vertices[u], &vertices[v]);
    }

    graph
}

pub fn petgraph_random(vertex_count: usize, density: f32, rng: &mut Rng) -> DiGraph<(), ()> {
    let mut graph = DiGraph::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        graph.add_node(());
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }

    graph
}
