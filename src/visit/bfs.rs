use super::*;

/// Breadth-first traversal.
///
/// Vertices are visited in the order of their distance from the root, ties
/// broken by the order in which the graph reports neighbors.
pub struct Bfs<G>
where
    G: GraphBase,
{
    raw: RawVisit<G, RawBfs>,
}

pub struct BfsRooted<'a, G>
where
    G: GraphBase,
{
    raw: &'a mut RawVisit<G, RawBfs>,
}

impl<G> Bfs<G>
where
    G: GraphBase,
{
    pub fn new(graph: &G) -> Self {
        Self {
            raw: RawVisit::new(graph.vertex_count_hint()),
        }
    }

    /// Starts the traversal from `root`.
    ///
    /// Vertices visited in previous traversals are not visited again.
    pub fn start(&mut self, root: G::VertexId) -> BfsRooted<'_, G> {
        self.raw.start(root);
        BfsRooted { raw: &mut self.raw }
    }
}

impl<'a, G> Visitor<G> for BfsRooted<'a, G>
where
    G: Neighbors,
{
    type Item = G::VertexId;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        self.raw.next(graph)
    }
}
