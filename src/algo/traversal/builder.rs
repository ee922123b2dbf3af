use crate::core::{GraphBase, Neighbors, VertexSet};

use super::{full::traverse_all, Algo, Traversals};

/// Builder for [`Traversals`].
pub struct TraversalsBuilder<'a, G>
where
    G: GraphBase,
{
    graph: &'a G,
    algo: Algo,
}

impl<G> Traversals<G>
where
    G: GraphBase,
{
    /// Starts the builder of the algorithm on given graph.
    ///
    /// Breadth-first search is used unless specified otherwise.
    pub fn on(graph: &G) -> TraversalsBuilder<'_, G> {
        TraversalsBuilder {
            graph,
            algo: Algo::default(),
        }
    }
}

impl<'a, G> TraversalsBuilder<'a, G>
where
    G: GraphBase,
{
    pub fn bfs(self) -> Self {
        self.using(Algo::Bfs)
    }

    pub fn dfs(self) -> Self {
        self.using(Algo::Dfs)
    }

    /// Chooses the algorithm at runtime.
    pub fn using(self, algo: Algo) -> Self {
        Self { algo, ..self }
    }

    /// Runs a traversal from every vertex of the graph.
    pub fn run(self) -> Traversals<G>
    where
        G: Neighbors + VertexSet,
    {
        traverse_all(self.graph, self.algo)
    }
}
