//! Capabilities that a graph needs to provide to be analyzed by the
//! algorithms in this crate.
//!
//! The algorithms do not require any particular graph representation. They
//! consume the graph only through [`VertexSet`] (enumeration of all vertices)
//! and [`Neighbors`] (upstream and downstream neighbors of a vertex). Both
//! traits are implemented for references, so the algorithms can be given
//! `&G` as well as `&&G` or `&mut G`.

pub mod create;
pub mod error;
pub mod id;
pub mod marker;

mod neighbors;
mod vertices;

pub use create::Create;
pub use error::{AddEdgeError, AddEdgeErrorKind};
pub use neighbors::Neighbors;
pub use vertices::VertexSet;

use id::IdType;

/// The base of every graph: the type used for identifying vertices.
pub trait GraphBase {
    /// Vertex identifier.
    ///
    /// The algorithms treat it as an opaque token that is only compared,
    /// hashed, cloned and collected.
    type VertexId: IdType;

    /// An estimate of the number of vertices, used for preallocation.
    fn vertex_count_hint(&self) -> Option<usize> {
        None
    }
}

macro_rules! deref_graph_base {
    ($($ref_kind:tt)*) => {
        impl<G> GraphBase for $($ref_kind)* G
        where
            G: GraphBase,
        {
            type VertexId = G::VertexId;

            fn vertex_count_hint(&self) -> Option<usize> {
                (**self).vertex_count_hint()
            }
        }
    }
}

deref_graph_base!(&);
deref_graph_base!(&mut);
