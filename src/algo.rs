//! Algorithms on directed graphs.
//!
//! Every algorithm is available as a plain function for the common case and,
//! where there is something to configure or more to report, as a builder
//! started by the `on` associated function of the result type.
//!
//! All algorithms take the graph by shared reference and allocate their own
//! working state, so the graph is never modified and no state is kept between
//! calls.

pub mod common;
pub mod shortest_distance;
pub mod traversal;

#[doc(inline)]
pub use self::{
    common::{common_downstream_vertices, common_neighbors, common_upstream_vertices},
    shortest_distance::{shortest_distance, ShortestDistance},
    traversal::{breadth_first_search, depth_first_search, Algo, Traversals},
};
