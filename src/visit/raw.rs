use std::{
    collections::{HashSet, VecDeque},
    hash::BuildHasherDefault,
};

use rustc_hash::FxHashSet;

use crate::core::{GraphBase, Neighbors};

use super::VisitSet;

pub trait TraversalCollection<T>: Default {
    fn push(&mut self, value: T);
    fn pop(&mut self) -> Option<T>;
    fn clear(&mut self);
}

pub struct Queue<T>(pub VecDeque<T>);

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> TraversalCollection<T> for Queue<T> {
    fn push(&mut self, value: T) {
        self.0.push_back(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

#[derive(Debug)]
pub struct Stack<T>(pub Vec<T>);

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> TraversalCollection<T> for Stack<T> {
    fn push(&mut self, value: T) {
        self.0.push(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

pub(crate) trait RawAlgo<G: GraphBase> {
    type Collection: TraversalCollection<G::VertexId>;

    fn visit_on_start() -> bool;
}

pub(crate) struct RawVisit<G: GraphBase, A: RawAlgo<G>> {
    pub collection: A::Collection,
    pub visited: FxHashSet<G::VertexId>,
}

impl<G: GraphBase, A: RawAlgo<G>> RawVisit<G, A> {
    pub fn new(count_hint: Option<usize>) -> Self {
        let visited = count_hint
            .map(|count| HashSet::with_capacity_and_hasher(count, BuildHasherDefault::default()))
            .unwrap_or_default();

        Self {
            collection: A::Collection::default(),
            visited,
        }
    }

    pub fn start(&mut self, root: G::VertexId) {
        if A::visit_on_start() {
            self.visited.visit(root.clone());
        }

        self.collection.clear();
        self.collection.push(root);
    }
}

// Vertices are marked as visited when they are pushed to the queue. The order
// of visiting is the same as if they were marked when popped, but no vertex
// is ever enqueued twice.
pub(crate) enum RawBfs {}

impl<G: GraphBase> RawAlgo<G> for RawBfs {
    type Collection = Queue<G::VertexId>;

    fn visit_on_start() -> bool {
        true
    }
}

impl<G: Neighbors> RawVisit<G, RawBfs> {
    pub fn next(&mut self, graph: &G) -> Option<G::VertexId> {
        let v = self.collection.pop()?;

        for u in graph.downstream(&v) {
            if self.visited.visit(u.clone()) {
                self.collection.push(u);
            }
        }

        Some(v)
    }
}

// Vertices are marked as visited when they are popped from the stack. Marking
// on push would change the order compared to the recursive formulation.
pub(crate) enum RawDfs {}

impl<G: GraphBase> RawAlgo<G> for RawDfs {
    type Collection = Stack<G::VertexId>;

    fn visit_on_start() -> bool {
        false
    }
}

impl<G: Neighbors> RawVisit<G, RawDfs> {
    pub fn next(&mut self, graph: &G) -> Option<G::VertexId> {
        while let Some(v) = self.collection.pop() {
            if self.visited.visit(v.clone()) {
                for u in graph.downstream(&v) {
                    if !self.visited.is_visited(&u) {
                        self.collection.push(u);
                    }
                }

                return Some(v);
            }
        }

        None
    }
}
