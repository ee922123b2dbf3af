use crate::core::{GraphBase, Neighbors};

use super::{bfs::bfs, ShortestDistance};

/// Builder for [`ShortestDistance`].
pub struct ShortestDistanceBuilder<'a, G>
where
    G: GraphBase,
{
    graph: &'a G,
}

impl ShortestDistance {
    /// Starts the builder of the algorithm on given graph.
    pub fn on<G>(graph: &G) -> ShortestDistanceBuilder<'_, G>
    where
        G: GraphBase,
    {
        ShortestDistanceBuilder { graph }
    }
}

impl<'a, G> ShortestDistanceBuilder<'a, G>
where
    G: GraphBase,
{
    /// Runs the search from `from` until `to` is reached or all vertices
    /// reachable from `from` are explored.
    pub fn run(self, from: &G::VertexId, to: &G::VertexId) -> ShortestDistance
    where
        G: Neighbors,
    {
        bfs(self.graph, from, to)
    }
}
