use super::GraphBase;

/// Enumeration of the vertices of a graph.
pub trait VertexSet: GraphBase {
    type VerticesByIdIter<'a>: Iterator<Item = Self::VertexId>
    where
        Self: 'a;

    /// Returns all vertices of the graph.
    ///
    /// The order is specified by the implementation, but it must be stable
    /// while the graph is not modified.
    fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_>;

    fn vertex_count(&self) -> usize {
        self.vertices_by_id().count()
    }

    fn contains_vertex(&self, id: &Self::VertexId) -> bool {
        self.vertices_by_id().any(|v| &v == id)
    }
}

macro_rules! deref_vertex_set {
    ($($ref_kind:tt)*) => {
        impl<G> VertexSet for $($ref_kind)* G
        where
            G: VertexSet,
        {
            type VerticesByIdIter<'a> = G::VerticesByIdIter<'a>
            where
                Self: 'a;

            fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_> {
                (**self).vertices_by_id()
            }

            fn vertex_count(&self) -> usize {
                (**self).vertex_count()
            }

            fn contains_vertex(&self, id: &Self::VertexId) -> bool {
                (**self).contains_vertex(id)
            }
        }
    }
}

deref_vertex_set!(&);
deref_vertex_set!(&mut);
