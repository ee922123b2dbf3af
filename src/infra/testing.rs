use std::{iter::Cloned, slice::Iter};

use rustc_hash::FxHashMap;

use crate::core::{create::Create, id::IdType, marker::Direction, GraphBase, Neighbors, VertexSet};

pub fn create_complete<G: Create>(vertex_count: usize) -> G {
    let mut graph = G::with_capacity(vertex_count);

    let vertices = (0..vertex_count)
        .map(|_| graph.add_vertex())
        .collect::<Vec<_>>();

    for u in vertices.iter() {
        for v in vertices.iter() {
            if u != v {
                graph.add_edge(u, v);
            }
        }
    }

    graph
}

pub fn create_path<G: Create>(vertex_count: usize) -> G {
    if vertex_count == 0 {
        return G::empty();
    }

    let mut graph = G::with_capacity(vertex_count);
    let mut src = graph.add_vertex();

    for _ in 1..vertex_count {
        let dst = graph.add_vertex();
        graph.add_edge(&src, &dst);
        src = dst;
    }

    graph
}

pub fn create_cycle<G: Create>(vertex_count: usize) -> G {
    if vertex_count == 0 {
        return G::empty();
    }

    let mut graph = G::with_capacity(vertex_count);

    let vertices = (0..vertex_count)
        .map(|_| graph.add_vertex())
        .collect::<Vec<_>>();

    for (i, u) in vertices.iter().enumerate() {
        graph.add_edge(u, &vertices[(i + 1) % vertex_count]);
    }

    graph
}

/// Graph identified by arbitrary keys.
///
/// Useful for writing readable fixtures (`'A' → 'B'`) and for checking that
/// algorithms do not rely on integer vertex IDs.
#[derive(Debug, Clone)]
pub struct KeyedGraph<K> {
    vertices: Vec<K>,
    neighbors: FxHashMap<K, [Vec<K>; 2]>,
}

impl<K: IdType> KeyedGraph<K> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            neighbors: FxHashMap::default(),
        }
    }

    pub fn from_edges<V, E>(vertices: V, edges: E) -> Self
    where
        V: IntoIterator<Item = K>,
        E: IntoIterator<Item = (K, K)>,
    {
        let mut graph = Self::new();

        for vertex in vertices {
            graph.add_vertex(vertex);
        }

        for (from, to) in edges {
            graph.add_edge(from, to);
        }

        graph
    }

    /// Adds a vertex if it is not in the graph yet.
    pub fn add_vertex(&mut self, key: K) {
        if !self.neighbors.contains_key(&key) {
            self.neighbors.insert(key.clone(), [Vec::new(), Vec::new()]);
            self.vertices.push(key);
        }
    }

    /// Adds an edge, adding missing endpoints as vertices.
    pub fn add_edge(&mut self, from: K, to: K) {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());

        if let Some(lists) = self.neighbors.get_mut(&from) {
            lists[Direction::Outgoing.index()].push(to.clone());
        }

        if let Some(lists) = self.neighbors.get_mut(&to) {
            lists[Direction::Incoming.index()].push(from);
        }
    }
}

impl<K: IdType> Default for KeyedGraph<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: IdType> GraphBase for KeyedGraph<K> {
    type VertexId = K;

    fn vertex_count_hint(&self) -> Option<usize> {
        Some(self.vertices.len())
    }
}

impl<K: IdType> VertexSet for KeyedGraph<K> {
    type VerticesByIdIter<'a> = Cloned<Iter<'a, K>>
    where
        Self: 'a;

    fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_> {
        self.vertices.iter().cloned()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn contains_vertex(&self, id: &K) -> bool {
        self.neighbors.contains_key(id)
    }
}

impl<K: IdType> Neighbors for KeyedGraph<K> {
    type NeighborsIter<'a> = Cloned<Iter<'a, K>>
    where
        Self: 'a;

    fn neighbors_directed(&self, src: &K, dir: Direction) -> Self::NeighborsIter<'_> {
        self.neighbors
            .get(src)
            .map(|lists| lists[dir.index()].as_slice())
            .unwrap_or(&[])
            .iter()
            .cloned()
    }
}
