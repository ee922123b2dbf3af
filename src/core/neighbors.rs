use super::{marker::Direction, GraphBase};

/// Neighbor queries on a directed graph.
///
/// Neighbors are reported as vertex IDs. When there are multiple edges
/// between the same pair of vertices, the neighbor is reported once for each
/// of them. The order of neighbors is specified by the implementation, but it
/// must be stable while the graph is not modified.
pub trait Neighbors: GraphBase {
    type NeighborsIter<'a>: Iterator<Item = Self::VertexId>
    where
        Self: 'a;

    /// Returns neighbors of `src` in given direction.
    ///
    /// For a vertex that is not in the graph, implementations should return
    /// an empty iterator.
    fn neighbors_directed(&self, src: &Self::VertexId, dir: Direction) -> Self::NeighborsIter<'_>;

    /// Vertices `x` for which there is an edge `src → x`.
    fn downstream(&self, src: &Self::VertexId) -> Self::NeighborsIter<'_> {
        self.neighbors_directed(src, Direction::Outgoing)
    }

    /// Vertices `x` for which there is an edge `x → src`.
    fn upstream(&self, src: &Self::VertexId) -> Self::NeighborsIter<'_> {
        self.neighbors_directed(src, Direction::Incoming)
    }

    fn degree_directed(&self, id: &Self::VertexId, dir: Direction) -> usize {
        self.neighbors_directed(id, dir).count()
    }
}

macro_rules! deref_neighbors {
    ($($ref_kind:tt)*) => {
        impl<G> Neighbors for $($ref_kind)* G
        where
            G: Neighbors,
        {
            type NeighborsIter<'a> = G::NeighborsIter<'a>
            where
                Self: 'a;

            fn neighbors_directed(&self, src: &Self::VertexId, dir: Direction) -> Self::NeighborsIter<'_> {
                (**self).neighbors_directed(src, dir)
            }

            fn degree_directed(&self, id: &Self::VertexId, dir: Direction) -> usize {
                (**self).degree_directed(id, dir)
            }
        }
    }
}

deref_neighbors!(&);
deref_neighbors!(&mut);
