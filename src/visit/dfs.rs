use super::*;

/// Depth-first traversal in preorder.
///
/// The neighbors of a visited vertex are pushed to a stack in the order in
/// which the graph reports them, so the last reported neighbor is explored
/// first.
pub struct Dfs<G>
where
    G: GraphBase,
{
    raw: RawVisit<G, RawDfs>,
}

pub struct DfsRooted<'a, G>
where
    G: GraphBase,
{
    raw: &'a mut RawVisit<G, RawDfs>,
}

impl<G> Dfs<G>
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
    /// The stack of pending vertices is cleared, but vertices visited in
    /// previous traversals are not visited again.
    pub fn start(&mut self, root: G::VertexId) -> DfsRooted<'_, G> {
        self.raw.start(root);
        DfsRooted { raw: &mut self.raw }
    }
}

impl<'a, G> Visitor<G> for DfsRooted<'a, G>
where
    G: Neighbors,
{
    type Item = G::VertexId;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        self.raw.next(graph)
    }
}
