//! Directed graph stored as adjacency lists.
//!
//! Every vertex keeps two lists of neighbors, one for outgoing and one for
//! incoming edges. Parallel edges and self-loops are allowed; a vertex
//! connected by two parallel edges appears twice in the neighbor list.

use std::{iter::Copied, slice::Iter};

use crate::core::{
    error::{AddEdgeError, AddEdgeErrorKind},
    id::{IntegerIdType, VertexId},
    marker::Direction,
    Create, GraphBase, Neighbors, VertexSet,
};

pub use super::shared::RangeIds as VertexIds;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjList<VI = VertexId> {
    // Neighbor lists indexed by `Direction::index`.
    vertices: Vec<[Vec<VI>; 2]>,
    edge_count: usize,
}

impl AdjList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            edge_count: 0,
        }
    }
}

impl<VI: IntegerIdType> Default for AdjList<VI> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edge_count: 0,
        }
    }
}

impl<VI: IntegerIdType> AdjList<VI> {
    pub fn add_vertex(&mut self) -> VI {
        let id = VI::from_usize(self.vertices.len());
        self.vertices.push([Vec::new(), Vec::new()]);
        id
    }

    pub fn extend_with_vertices(&mut self, count: usize) -> Vec<VI> {
        (0..count).map(|_| self.add_vertex()).collect()
    }

    pub fn try_add_edge(&mut self, from: &VI, to: &VI) -> Result<(), AddEdgeError<VI>> {
        if !self.contains_vertex(from) {
            return Err(AddEdgeError::new(*from, *to, AddEdgeErrorKind::SourceAbsent));
        }

        if !self.contains_vertex(to) {
            return Err(AddEdgeError::new(
                *from,
                *to,
                AddEdgeErrorKind::DestinationAbsent,
            ));
        }

        self.vertices[from.as_usize()][Direction::Outgoing.index()].push(*to);
        self.vertices[to.as_usize()][Direction::Incoming.index()].push(*from);
        self.edge_count += 1;

        Ok(())
    }

    /// Adds a directed edge `from → to`.
    ///
    /// # Panics
    ///
    /// Panics if any of the endpoints is not in the graph. Use
    /// [`try_add_edge`](Self::try_add_edge) for a fallible version.
    pub fn add_edge(&mut self, from: &VI, to: &VI) {
        if let Err(error) = self.try_add_edge(from, to) {
            panic!("{error}");
        }
    }

    pub fn extend_with_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (VI, VI)>,
    {
        for (from, to) in edges {
            self.add_edge(&from, &to);
        }
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains_edge(&self, from: &VI, to: &VI) -> bool {
        self.neighbors_directed(from, Direction::Outgoing)
            .any(|v| &v == to)
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edge_count = 0;
    }
}

impl<VI: IntegerIdType> GraphBase for AdjList<VI> {
    type VertexId = VI;

    fn vertex_count_hint(&self) -> Option<usize> {
        Some(self.vertices.len())
    }
}

impl<VI: IntegerIdType> VertexSet for AdjList<VI> {
    type VerticesByIdIter<'a> = VertexIds<VI>
    where
        Self: 'a;

    fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_> {
        (0..self.vertices.len()).into()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn contains_vertex(&self, id: &VI) -> bool {
        id.as_usize() < self.vertices.len()
    }
}

impl<VI: IntegerIdType> Neighbors for AdjList<VI> {
    type NeighborsIter<'a> = Copied<Iter<'a, VI>>
    where
        Self: 'a;

    fn neighbors_directed(&self, src: &VI, dir: Direction) -> Self::NeighborsIter<'_> {
        self.vertices
            .get(src.as_usize())
            .map(|lists| lists[dir.index()].as_slice())
            .unwrap_or(&[])
            .iter()
            .copied()
    }

    fn degree_directed(&self, id: &VI, dir: Direction) -> usize {
        self.vertices
            .get(id.as_usize())
            .map(|lists| lists[dir.index()].len())
            .unwrap_or(0)
    }
}

impl<VI: IntegerIdType> Create for AdjList<VI> {
    fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            edge_count: 0,
        }
    }

    fn add_vertex(&mut self) -> VI {
        Self::add_vertex(self)
    }

    fn try_add_edge(&mut self, from: &VI, to: &VI) -> Result<(), AddEdgeError<VI>> {
        Self::try_add_edge(self, from, to)
    }
}
