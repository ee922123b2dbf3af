use std::{fmt, marker::PhantomData};

use proptest::{
    prelude::Rng,
    strategy::{NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};

use crate::{
    core::{create::Create, id::VertexId},
    storage::AdjList,
};

pub fn graph_directed() -> GraphStrategy<AdjList> {
    GraphStrategy::new()
}

pub fn graph_directed_in<G: Create>() -> GraphStrategy<G> {
    GraphStrategy::new()
}

#[derive(Debug, Clone, Copy)]
pub struct StrategyParams {
    max_size: usize,
    allow_loops: bool,
    multi_edge_prob: f32,
    density: Option<f32>,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 32,
            allow_loops: false,
            multi_edge_prob: 0.0,
            density: None,
        }
    }
}

pub struct GraphStrategy<G> {
    params: StrategyParams,
    ty: PhantomData<fn() -> G>,
}

// G is phantom data, we should not require Debug bound on it.
impl<G> fmt::Debug for GraphStrategy<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStrategy")
            .field("params", &self.params)
            .finish()
    }
}

impl<G> GraphStrategy<G> {
    pub fn new() -> Self {
        Self {
            params: StrategyParams::default(),
            ty: PhantomData,
        }
    }

    /// Maximum number of vertices.
    pub fn max_size(self, max_size: usize) -> Self {
        Self {
            params: StrategyParams {
                max_size,
                ..self.params
            },
            ..self
        }
    }

    pub fn allow_loops(self) -> Self {
        Self {
            params: StrategyParams {
                allow_loops: true,
                ..self.params
            },
            ..self
        }
    }

    /// Probability that a generated edge is inserted twice. Storages that do
    /// not support parallel edges silently ignore the duplicate.
    pub fn multi_edge_prob(self, multi_edge_prob: f32) -> Self {
        assert!(
            (0.0..=1.0).contains(&multi_edge_prob),
            "invalid probability"
        );

        Self {
            params: StrategyParams {
                multi_edge_prob,
                ..self.params
            },
            ..self
        }
    }

    /// Fixes the probability of an edge between any ordered pair of vertices.
    /// When not set, the density is random for each generated graph.
    pub fn density(self, density: f32) -> Self {
        assert!((0.0..=1.0).contains(&density), "invalid probability");

        Self {
            params: StrategyParams {
                density: Some(density),
                ..self.params
            },
            ..self
        }
    }
}

impl<G> Strategy for GraphStrategy<G>
where
    G: Create<VertexId = VertexId> + fmt::Debug,
{
    type Tree = GraphValueTree<G>;
    type Value = G;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        let rng = runner.rng();
        let params = self.params;

        let vertex_count = rng.gen_range(0..=params.max_size);
        let density = params.density.unwrap_or_else(|| rng.gen_range(0.0..0.5));

        let mut edges = Vec::new();

        for u in 0..vertex_count {
            for v in 0..vertex_count {
                if u == v && !params.allow_loops {
                    continue;
                }

                if rng.gen_bool(density as f64) {
                    edges.push((u, v));

                    if rng.gen_bool(params.multi_edge_prob as f64) {
                        edges.push((u, v));
                    }
                }
            }
        }

        // Do not rely on the order of edge insertion.
        for i in (1..edges.len()).rev() {
            let j = rng.gen_range(0..=i);
            edges.swap(i, j);
        }

        Ok(GraphValueTree {
            vertex_count,
            removed: vec![false; edges.len()],
            edges,
            shrink: Shrink::Edge(0),
            last: None,
            ty: PhantomData,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shrink {
    Edge(usize),
    Vertex,
    Done,
}

pub struct GraphValueTree<G> {
    vertex_count: usize,
    edges: Vec<(usize, usize)>,
    removed: Vec<bool>,
    shrink: Shrink,
    last: Option<Shrink>,
    ty: PhantomData<fn() -> G>,
}

impl<G> ValueTree for GraphValueTree<G>
where
    G: Create<VertexId = VertexId> + fmt::Debug,
{
    type Value = G;

    fn current(&self) -> Self::Value {
        let mut graph = G::with_capacity(self.vertex_count);

        let vertices = (0..self.vertex_count)
            .map(|_| graph.add_vertex())
            .collect::<Vec<_>>();

        let edges = self
            .edges
            .iter()
            .zip(self.removed.iter())
            .filter(|(_, removed)| !**removed)
            .map(|(edge, _)| edge)
            .filter(|(u, v)| *u < self.vertex_count && *v < self.vertex_count);

        for (u, v) in edges {
            // Multi edges are rejected by some storages.
            let _ = graph.try_add_edge(&vertices[*u], &vertices[*v]);
        }

        graph
    }

    fn simplify(&mut self) -> bool {
        loop {
            match self.shrink {
                Shrink::Edge(i) if i < self.edges.len() => {
                    self.shrink = Shrink::Edge(i + 1);

                    if !self.removed[i] {
                        self.removed[i] = true;
                        self.last = Some(Shrink::Edge(i));
                        return true;
                    }
                }
                Shrink::Edge(_) => self.shrink = Shrink::Vertex,
                Shrink::Vertex => {
                    if self.vertex_count == 0 {
                        self.shrink = Shrink::Done;
                        return false;
                    }

                    self.vertex_count -= 1;
                    self.last = Some(Shrink::Vertex);
                    return true;
                }
                Shrink::Done => return false,
            }
        }
    }

    fn complicate(&mut self) -> bool {
        match self.last.take() {
            Some(Shrink::Edge(i)) => {
                self.removed[i] = false;
                true
            }
            Some(Shrink::Vertex) => {
                self.vertex_count += 1;
                // Removing the last vertex again would fail the same way.
                self.shrink = Shrink::Done;
                true
            }
            Some(Shrink::Done) | None => false,
        }
    }
}
