use tracing::{debug, trace};

use crate::{
    core::{Neighbors, VertexSet},
    visit::{Bfs, Dfs, Visitor},
};

use super::{Algo, Traversals};

pub fn traverse_all<G>(graph: &G, algo: Algo) -> Traversals<G>
where
    G: Neighbors + VertexSet,
{
    debug!(?algo, vertex_count = graph.vertex_count(), "full traversal started");

    let orders = match algo {
        // Each start gets its own visitor with an empty queue or stack and no
        // visited vertices.
        Algo::Bfs => collect_orders(graph, |start| {
            Bfs::new(graph).start(start).into_iter(graph).collect()
        }),
        Algo::Dfs => collect_orders(graph, |start| {
            Dfs::new(graph).start(start).into_iter(graph).collect()
        }),
    };

    debug!(traversals = orders.len(), "full traversal finished");

    Traversals::new(algo, orders)
}

fn collect_orders<G, F>(graph: &G, mut traverse: F) -> Vec<(G::VertexId, Vec<G::VertexId>)>
where
    G: VertexSet,
    F: FnMut(G::VertexId) -> Vec<G::VertexId>,
{
    let mut orders = Vec::with_capacity(graph.vertex_count());

    for start in graph.vertices_by_id() {
        let order = traverse(start.clone());
        trace!(?start, visited = order.len(), "traversal finished");
        orders.push((start, order));
    }

    orders
}
