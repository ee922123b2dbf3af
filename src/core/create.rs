use super::{error::AddEdgeError, GraphBase};

/// Construction of a graph from scratch.
///
/// The algorithms never create or modify graphs. This trait exists so that
/// graph generators and test fixtures can be written once for all storages.
pub trait Create: GraphBase + Sized {
    fn with_capacity(vertex_capacity: usize) -> Self;

    fn empty() -> Self {
        Self::with_capacity(0)
    }

    fn add_vertex(&mut self) -> Self::VertexId;

    fn try_add_edge(
        &mut self,
        from: &Self::VertexId,
        to: &Self::VertexId,
    ) -> Result<(), AddEdgeError<Self::VertexId>>;

    /// # Panics
    ///
    /// Panics if adding the edge fails.
    fn add_edge(&mut self, from: &Self::VertexId, to: &Self::VertexId) {
        if let Err(error) = self.try_add_edge(from, to) {
            panic!("{error}");
        }
    }
}
