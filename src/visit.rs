//! Implementations of graph traversal methods.
//!
//! All traversal implementations in this module are **iterative**, that is,
//! they don't use recursion. This means that
//!
//! * &#128077; visitor is lazy and can be stopped without tricks,
//! * &#128077; visitor state is independent on the graph itself, so it can be
//!   passed around without lifetime problems,
//! * &#128077; traversal is not limited by the size of the program stack.
//!
//! Neighbors are always followed in the direction of the edges (downstream)
//! and in the order in which the graph reports them.
//!
//! # Examples
//!
//! ```
//! use diwalk::{storage::AdjList, visit::{Bfs, Dfs, Visitor}};
//!
//! let mut graph = AdjList::new();
//! let [a, b, c, d] = [(); 4].map(|_| graph.add_vertex());
//!
//! graph.extend_with_edges([(a, b), (a, c), (b, d)]);
//!
//! let bfs = Bfs::new(&graph).start(a).into_iter(&graph).collect::<Vec<_>>();
//! assert_eq!(bfs, vec![a, b, c, d]);
//!
//! let dfs = Dfs::new(&graph).start(a).into_iter(&graph).collect::<Vec<_>>();
//! assert_eq!(dfs, vec![a, c, b, d]);
//! ```

pub mod bfs;
pub mod dfs;

pub(crate) mod raw;
mod visit_set;

#[doc(inline)]
pub use self::{
    bfs::{Bfs, BfsRooted},
    dfs::{Dfs, DfsRooted},
    visit_set::VisitSet,
};

use raw::*;

use crate::core::{GraphBase, Neighbors};

/// Trait for a specific graph traversal approach.
#[doc(alias = "Walker")]
pub trait Visitor<G> {
    /// The type of the elements being visited.
    type Item;

    /// Advances the visitor and returns the next visited element in given
    /// graph.
    ///
    /// The difference from the [`Iterator::next`] is that the visitor doesn't
    /// hold a reference to the graph.
    fn visit_next(&mut self, graph: &G) -> Option<Self::Item>;

    /// Returns an [iterator](Iterator) that uses the visitor to iterate over
    /// the elements in given graph.
    fn iter<'a>(&'a mut self, graph: &'a G) -> Iter<'a, Self, G>
    where
        Self: Sized,
    {
        Iter {
            visitor: self,
            graph,
        }
    }

    /// Converts the visitor into an [iterator](Iterator) to visit the elements
    /// in given graph.
    fn into_iter(self, graph: &G) -> IntoIter<'_, Self, G>
    where
        Self: Sized,
    {
        IntoIter {
            visitor: self,
            graph,
        }
    }
}

/// Visitor iterator returned from [`Visitor::iter`].
pub struct Iter<'a, V, G> {
    visitor: &'a mut V,
    graph: &'a G,
}

impl<'a, V, G> Iterator for Iter<'a, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// Visitor iterator returned from [`Visitor::into_iter`].
pub struct IntoIter<'a, V, G> {
    visitor: V,
    graph: &'a G,
}

impl<'a, V, G> Iterator for IntoIter<'a, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}
