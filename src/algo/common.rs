//! Find vertices adjacent to both vertices of a pair.
//!
//! A vertex connected to `a` by `m` edges and to `b` by `n` edges (in the
//! queried direction) is reported `m × n` times. The result follows the order
//! in which the graph reports the neighbors of `a`.
//!
//! # Examples
//!
//! ```
//! use diwalk::{algo::{common_downstream_vertices, common_upstream_vertices}, storage::AdjList};
//!
//! let mut graph = AdjList::new();
//!
//! let a = graph.add_vertex();
//! let b = graph.add_vertex();
//! let c = graph.add_vertex();
//! let d = graph.add_vertex();
//!
//! graph.extend_with_edges([(a, b), (a, c), (b, d), (c, d)]);
//!
//! assert_eq!(common_downstream_vertices(&graph, &b, &c), vec![d]);
//! assert_eq!(common_upstream_vertices(&graph, &b, &c), vec![a]);
//! ```

use std::iter;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::core::{marker::Direction, Neighbors};

/// Returns the vertices that are neighbors of both `a` and `b` in given
/// direction.
pub fn common_neighbors<G>(
    graph: &G,
    a: &G::VertexId,
    b: &G::VertexId,
    dir: Direction,
) -> Vec<G::VertexId>
where
    G: Neighbors,
{
    let mut counts = FxHashMap::default();

    for neighbor in graph.neighbors_directed(b, dir) {
        *counts.entry(neighbor).or_insert(0usize) += 1;
    }

    let mut common = Vec::new();

    for neighbor in graph.neighbors_directed(a, dir) {
        if let Some(&count) = counts.get(&neighbor) {
            common.extend(iter::repeat(neighbor).take(count));
        }
    }

    trace!(?a, ?b, ?dir, common = common.len(), "common neighbors");

    common
}

/// Returns the vertices `x` with edges `x → a` and `x → b`.
pub fn common_upstream_vertices<G>(graph: &G, a: &G::VertexId, b: &G::VertexId) -> Vec<G::VertexId>
where
    G: Neighbors,
{
    common_neighbors(graph, a, b, Direction::Incoming)
}

/// Returns the vertices `x` with edges `a → x` and `b → x`.
pub fn common_downstream_vertices<G>(
    graph: &G,
    a: &G::VertexId,
    b: &G::VertexId,
) -> Vec<G::VertexId>
where
    G: Neighbors,
{
    common_neighbors(graph, a, b, Direction::Outgoing)
}
