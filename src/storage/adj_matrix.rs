//! Directed graph stored as a bit adjacency matrix.
//!
//! The matrix has one bit per ordered pair of vertices, so parallel edges are
//! rejected with [`AddEdgeErrorKind::MultiEdge`]. Neighbors are reported in
//! the increasing order of their IDs.

use std::marker::PhantomData;

use fixedbitset::FixedBitSet;

use crate::core::{
    error::{AddEdgeError, AddEdgeErrorKind},
    id::{IntegerIdType, VertexId},
    marker::Direction,
    Create, GraphBase, Neighbors, VertexSet,
};

pub use super::shared::RangeIds as VertexIds;

const INITIAL_CAPACITY: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjMatrix<VI = VertexId> {
    // Row-major `capacity × capacity` matrix. Bit `(from, to)` is set iff
    // there is an edge `from → to`.
    matrix: FixedBitSet,
    capacity: usize,
    vertex_count: usize,
    edge_count: usize,
    ty: PhantomData<fn() -> VI>,
}

impl AdjMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self::with_capacity_in(vertex_capacity)
    }
}

impl<VI: IntegerIdType> Default for AdjMatrix<VI> {
    fn default() -> Self {
        Self::with_capacity_in(INITIAL_CAPACITY)
    }
}

impl<VI: IntegerIdType> AdjMatrix<VI> {
    fn with_capacity_in(capacity: usize) -> Self {
        Self {
            matrix: FixedBitSet::with_capacity(capacity * capacity),
            capacity,
            vertex_count: 0,
            edge_count: 0,
            ty: PhantomData,
        }
    }

    fn index(&self, from: usize, to: usize) -> usize {
        from * self.capacity + to
    }

    fn grow(&mut self) {
        let capacity = (self.capacity * 2).max(INITIAL_CAPACITY);
        let mut matrix = FixedBitSet::with_capacity(capacity * capacity);

        for bit in self.matrix.ones() {
            let (from, to) = (bit / self.capacity, bit % self.capacity);
            matrix.insert(from * capacity + to);
        }

        self.matrix = matrix;
        self.capacity = capacity;
    }

    pub fn add_vertex(&mut self) -> VI {
        if self.vertex_count == self.capacity {
            self.grow();
        }

        let id = VI::from_usize(self.vertex_count);
        self.vertex_count += 1;
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

        let index = self.index(from.as_usize(), to.as_usize());
        if self.matrix.put(index) {
            return Err(AddEdgeError::new(*from, *to, AddEdgeErrorKind::MultiEdge));
        }

        self.edge_count += 1;
        Ok(())
    }

    /// Adds a directed edge `from → to`.
    ///
    /// # Panics
    ///
    /// Panics if any of the endpoints is not in the graph or if the edge
    /// already exists. Use [`try_add_edge`](Self::try_add_edge) for a
    /// fallible version.
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
        self.contains_vertex(from)
            && self.contains_vertex(to)
            && self.matrix.contains(self.index(from.as_usize(), to.as_usize()))
    }
}

impl<VI: IntegerIdType> GraphBase for AdjMatrix<VI> {
    type VertexId = VI;

    fn vertex_count_hint(&self) -> Option<usize> {
        Some(self.vertex_count)
    }
}

impl<VI: IntegerIdType> VertexSet for AdjMatrix<VI> {
    type VerticesByIdIter<'a> = VertexIds<VI>
    where
        Self: 'a;

    fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_> {
        (0..self.vertex_count).into()
    }

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn contains_vertex(&self, id: &VI) -> bool {
        id.as_usize() < self.vertex_count
    }
}

impl<VI: IntegerIdType> Neighbors for AdjMatrix<VI> {
    type NeighborsIter<'a> = NeighborsIter<'a, VI>
    where
        Self: 'a;

    fn neighbors_directed(&self, src: &VI, dir: Direction) -> Self::NeighborsIter<'_> {
        let src = src.as_usize();

        NeighborsIter {
            graph: self,
            src,
            dir,
            // Nothing to iterate over for a vertex that is not in the graph.
            next: if src < self.vertex_count {
                0
            } else {
                self.vertex_count
            },
        }
    }
}

pub struct NeighborsIter<'a, VI> {
    graph: &'a AdjMatrix<VI>,
    src: usize,
    dir: Direction,
    next: usize,
}

impl<'a, VI: IntegerIdType> Iterator for NeighborsIter<'a, VI> {
    type Item = VI;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.graph.vertex_count {
            let other = self.next;
            self.next += 1;

            let index = match self.dir {
                Direction::Outgoing => self.graph.index(self.src, other),
                Direction::Incoming => self.graph.index(other, self.src),
            };

            if self.graph.matrix.contains(index) {
                return Some(VI::from_usize(other));
            }
        }

        None
    }
}

impl<VI: IntegerIdType> Create for AdjMatrix<VI> {
    fn with_capacity(vertex_capacity: usize) -> Self {
        Self::with_capacity_in(vertex_capacity)
    }

    fn add_vertex(&mut self) -> VI {
        Self::add_vertex(self)
    }

    fn try_add_edge(&mut self, from: &VI, to: &VI) -> Result<(), AddEdgeError<VI>> {
        Self::try_add_edge(self, from, to)
    }
}
