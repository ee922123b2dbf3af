//! In-memory graph storages.
//!
//! A _storage_ is an implementation of the graph representation. It implements
//! traits from the [`core`](crate::core) module so that it can be analyzed by
//! the algorithms in [`algo`](crate::algo).
//!
//! # Storages and their properties
//!
//! |                | **[AdjList]**  | **[AdjMatrix]** |
//! |----------------|----------------|-----------------|
//! | add vertex     | _O*(1)_        | _O*(V)_         |
//! | add edge       | _O*(1)_        | _O(1)_          |
//! | get neighbors  | _O(d)_         | _O(V)_          |
//! | contains edge  | _O(d)_         | _O(1)_          |
//! | space          | _O(V + E)_     | _O(V²)_         |
//! | multi edge     | YES            | NO              |
//!
//! * _V_ – vertex count
//! * _E_ – edge count
//! * _d_ – vertex degree
//! * _O*(..)_ – amortized complexity
//!
//! Both storages identify vertices by consecutive integers starting at zero
//! and report neighbors in a deterministic order: [`AdjList`] in the order of
//! edge insertion, [`AdjMatrix`] in the increasing order of vertex IDs.
//! Querying neighbors of a vertex that is not in the graph yields nothing.

pub mod adj_list;
pub mod adj_matrix;
mod shared;

#[doc(inline)]
pub use self::{adj_list::AdjList, adj_matrix::AdjMatrix};
