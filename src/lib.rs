//! Classic algorithms on directed, unweighted graphs.
//!
//! The algorithms in [`algo`] are written against the capability traits in
//! [`core`] and never against a concrete graph type. Any structure that can
//! enumerate its vertices ([`VertexSet`](core::VertexSet)) and answer
//! upstream/downstream neighbor queries ([`Neighbors`](core::Neighbors)) can
//! be analyzed. The [`storage`] module bundles two in-memory representations
//! that implement these traits.
//!
//! # Examples
//!
//! ```
//! use diwalk::{algo::shortest_distance, storage::AdjList};
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
//! assert_eq!(shortest_distance(&graph, &a, &d), Some(2));
//! assert_eq!(shortest_distance(&graph, &d, &a), None);
//! ```

pub mod algo;
pub mod core;
pub mod infra;
pub mod storage;
pub mod visit;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        core::{GraphBase, Neighbors, VertexSet},
        visit::Visitor,
    };
}
