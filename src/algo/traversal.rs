//! Traverse the whole graph, once from every vertex.
//!
//! For every vertex of the graph, an independent traversal is started from
//! that vertex and the order in which the vertices reachable from it were
//! visited is recorded. Each traversal starts with an empty set of visited
//! vertices, so every recorded order contains exactly the vertices reachable
//! from its start.
//!
//! The plain functions [`breadth_first_search`] and [`depth_first_search`]
//! return the orders as an unordered set of sequences. Use [`Traversals`] to
//! look the orders up by their start or to iterate them in the order of
//! vertex enumeration.
//!
//! # Examples
//!
//! ```
//! use diwalk::{algo::Traversals, storage::AdjList};
//!
//! let mut graph = AdjList::new();
//!
//! let a = graph.add_vertex();
//! let b = graph.add_vertex();
//! let c = graph.add_vertex();
//!
//! graph.extend_with_edges([(a, b), (a, c), (b, c)]);
//!
//! let traversals = Traversals::on(&graph).dfs().run();
//!
//! assert_eq!(traversals.get(&a), Some([a, c, b].as_slice()));
//! assert_eq!(traversals.get(&b), Some([b, c].as_slice()));
//! assert_eq!(traversals.get(&c), Some([c].as_slice()));
//! ```

use std::{collections::HashMap, fmt, hash::BuildHasherDefault};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{GraphBase, Neighbors, VertexSet};

mod builder;
mod full;

pub use builder::TraversalsBuilder;

/// Traversal orders from every vertex of a graph.
///
/// See [module](self) documentation for more details and example.
pub struct Traversals<G>
where
    G: GraphBase,
{
    algo: Algo,
    // In the order of vertex enumeration.
    orders: Vec<(G::VertexId, Vec<G::VertexId>)>,
    index: FxHashMap<G::VertexId, usize>,
}

// Only vertex IDs are stored, G itself does not need to be Debug or Clone.
impl<G> fmt::Debug for Traversals<G>
where
    G: GraphBase,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traversals")
            .field("algo", &self.algo)
            .field("orders", &self.orders)
            .finish()
    }
}

impl<G> Clone for Traversals<G>
where
    G: GraphBase,
{
    fn clone(&self) -> Self {
        Self {
            algo: self.algo,
            orders: self.orders.clone(),
            index: self.index.clone(),
        }
    }
}

impl<G> Traversals<G>
where
    G: GraphBase,
{
    fn new(algo: Algo, orders: Vec<(G::VertexId, Vec<G::VertexId>)>) -> Self {
        let mut index =
            HashMap::with_capacity_and_hasher(orders.len(), BuildHasherDefault::default());

        for (i, (start, _)) in orders.iter().enumerate() {
            index.insert(start.clone(), i);
        }

        Self {
            algo,
            orders,
            index,
        }
    }

    /// Algorithm that produced the orders.
    pub fn algo(&self) -> Algo {
        self.algo
    }

    /// Returns the visit order of the traversal started from `start`, or
    /// `None` if `start` was not among the vertices of the graph.
    pub fn get(&self, start: &G::VertexId) -> Option<&[G::VertexId]> {
        self.index
            .get(start)
            .map(|&i| self.orders[i].1.as_slice())
    }

    /// Returns an iterator over `(start, order)` pairs in the order in which
    /// the graph enumerated the vertices.
    pub fn iter(&self) -> impl Iterator<Item = (&G::VertexId, &[G::VertexId])> + '_ {
        self.orders
            .iter()
            .map(|(start, order)| (start, order.as_slice()))
    }

    /// Number of traversals, which equals the number of vertices.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Converts the orders into a set of sequences. The start of each
    /// traversal remains its first element.
    pub fn into_set(self) -> FxHashSet<Vec<G::VertexId>> {
        self.orders.into_iter().map(|(_, order)| order).collect()
    }

    pub fn into_map(self) -> FxHashMap<G::VertexId, Vec<G::VertexId>> {
        self.orders.into_iter().collect()
    }
}

/// Algorithm for [`Traversals`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Algo {
    /// [Breadth-first
    /// search](https://en.wikipedia.org/wiki/Breadth-first_search)
    ///
    /// Vertices are visited in the order of their distance from the start.
    #[default]
    Bfs,

    /// [Depth-first search](https://en.wikipedia.org/wiki/Depth-first_search)
    ///
    /// Vertices are visited in preorder. The neighbors of a vertex are pushed
    /// on a stack in the order in which the graph reports them, so the last
    /// reported neighbor is followed first.
    Dfs,
}

/// Returns breadth-first visit orders from every vertex of the graph,
/// deduplicated.
pub fn breadth_first_search<G>(graph: &G) -> FxHashSet<Vec<G::VertexId>>
where
    G: Neighbors + VertexSet,
{
    Traversals::on(graph).bfs().run().into_set()
}

/// Returns depth-first visit orders from every vertex of the graph,
/// deduplicated.
pub fn depth_first_search<G>(graph: &G) -> FxHashSet<Vec<G::VertexId>>
where
    G: Neighbors + VertexSet,
{
    Traversals::on(graph).dfs().run().into_set()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        core::{id::VertexId, marker::Direction},
        infra::{
            proptest::{graph_directed, graph_directed_in},
            testing::{create_complete, create_cycle, create_path, KeyedGraph},
        },
        storage::{AdjList, AdjMatrix},
    };

    use super::*;

    fn v(index: usize) -> VertexId {
        index.into()
    }

    fn set<I: IntoIterator<Item = Vec<char>>>(orders: I) -> FxHashSet<Vec<char>> {
        orders.into_iter().collect()
    }

    fn diamond() -> KeyedGraph<char> {
        KeyedGraph::from_edges(['E'], [('A', 'B'), ('A', 'C'), ('B', 'D'), ('C', 'D')])
    }

    #[test]
    fn bfs_diamond() {
        let graph = diamond();

        assert_eq!(
            breadth_first_search(&graph),
            set([
                vec!['E'],
                vec!['A', 'B', 'C', 'D'],
                vec!['B', 'D'],
                vec!['C', 'D'],
                vec!['D'],
            ])
        );
    }

    #[test]
    fn dfs_diamond() {
        let graph = diamond();

        assert_eq!(
            depth_first_search(&graph),
            set([
                vec!['E'],
                vec!['A', 'C', 'D', 'B'],
                vec!['B', 'D'],
                vec!['C', 'D'],
                vec!['D'],
            ])
        );
    }

    #[test]
    fn dfs_differs_from_bfs() {
        let graph = diamond();
        let bfs = Traversals::on(&graph).bfs().run();
        let dfs = Traversals::on(&graph).dfs().run();

        assert_ne!(bfs.get(&'A'), dfs.get(&'A'));
        assert_eq!(bfs.get(&'B'), dfs.get(&'B'));
    }

    // Neither Clone nor Debug.
    struct Opaque(KeyedGraph<char>);

    impl GraphBase for Opaque {
        type VertexId = char;
    }

    impl VertexSet for Opaque {
        type VerticesByIdIter<'a> = <KeyedGraph<char> as VertexSet>::VerticesByIdIter<'a>
        where
            Self: 'a;

        fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_> {
            self.0.vertices_by_id()
        }
    }

    impl Neighbors for Opaque {
        type NeighborsIter<'a> = <KeyedGraph<char> as Neighbors>::NeighborsIter<'a>
        where
            Self: 'a;

        fn neighbors_directed(&self, src: &char, dir: Direction) -> Self::NeighborsIter<'_> {
            self.0.neighbors_directed(src, dir)
        }
    }

    #[test]
    fn clone_and_debug_without_graph_bounds() {
        let graph = Opaque(diamond());
        let traversals = Traversals::on(&graph).dfs().run();
        let cloned = traversals.clone();

        assert_eq!(cloned.get(&'A'), traversals.get(&'A'));
        assert_eq!(cloned.len(), 5);

        let debug = format!("{:?}", cloned);
        assert!(debug.starts_with("Traversals { algo: Dfs"));
    }

    #[test]
    fn one_order_per_vertex() {
        let cycle: AdjList = create_cycle(4);
        assert_eq!(breadth_first_search(&cycle).len(), 4);

        let graph = KeyedGraph::from_edges(['X', 'Y'], [('A', 'C'), ('A', 'C')]);
        let orders = breadth_first_search(&graph);

        // Parallel edges do not duplicate vertices in the order.
        assert_eq!(orders.len(), 4);
        assert!(orders.contains(&vec!['A', 'C']));
        assert!(orders.contains(&vec!['X']));

        assert_eq!(Traversals::on(&graph).run().len(), 4);
    }

    #[test]
    fn isolated_vertices() {
        let graph = KeyedGraph::from_edges(['E'], []);
        assert_eq!(breadth_first_search(&graph), set([vec!['E']]));
        assert_eq!(depth_first_search(&graph), set([vec!['E']]));

        let mut list = AdjList::new();
        list.extend_with_vertices(3);
        assert_eq!(depth_first_search(&list).len(), 3);
    }

    #[test]
    fn empty_graph() {
        let graph = AdjList::new();

        assert!(breadth_first_search(&graph).is_empty());
        assert!(depth_first_search(&graph).is_empty());
        assert!(Traversals::on(&graph).run().is_empty());
    }

    #[test]
    fn self_loop_visited_once() {
        let graph = KeyedGraph::from_edges([], [('A', 'A'), ('A', 'B'), ('B', 'A')]);

        assert_eq!(
            breadth_first_search(&graph),
            set([vec!['A', 'B'], vec!['B', 'A']])
        );
        assert_eq!(
            depth_first_search(&graph),
            set([vec!['A', 'B'], vec!['B', 'A']])
        );
    }

    #[test]
    fn path_orders() {
        let graph: AdjMatrix = create_path(4);
        let traversals = Traversals::on(&graph).using(Algo::Dfs).run();

        assert_eq!(traversals.algo(), Algo::Dfs);
        assert_eq!(traversals.get(&v(1)), Some([v(1), v(2), v(3)].as_slice()));
        assert_eq!(traversals.get(&v(3)), Some([v(3)].as_slice()));
        assert_eq!(traversals.get(&v(4)), None);
    }

    #[test]
    fn keyed_results() {
        let graph = diamond();
        let traversals = Traversals::on(&graph).bfs().run();

        let starts = traversals.iter().map(|(start, _)| *start).collect::<Vec<_>>();
        assert_eq!(starts, vec!['E', 'A', 'B', 'C', 'D']);

        let map = traversals.into_map();
        assert_eq!(map.len(), 5);
        assert_eq!(map[&'C'], vec!['C', 'D']);
    }

    #[test]
    fn complete_graph() {
        let graph: AdjList = create_complete(5);

        for (start, order) in Traversals::on(&graph).dfs().run().iter() {
            assert_eq!(order.len(), 5);
            assert_eq!(&order[0], start);
        }
    }

    fn reachable(graph: &AdjList, start: VertexId) -> FxHashSet<VertexId> {
        let mut visited = FxHashSet::default();
        let mut stack = vec![start];

        while let Some(v) = stack.pop() {
            if visited.insert(v) {
                stack.extend(graph.downstream(&v));
            }
        }

        visited
    }

    fn assert_valid(traversals: &Traversals<AdjList>, graph: &AdjList) -> Result<(), TestCaseError> {
        prop_assert_eq!(traversals.len(), graph.vertex_count());

        for (start, order) in traversals.iter() {
            prop_assert_eq!(order.first(), Some(start));

            let unique = order.iter().copied().collect::<FxHashSet<_>>();
            prop_assert_eq!(unique.len(), order.len(), "duplicate vertex in order");
            prop_assert_eq!(unique, reachable(graph, *start));
        }

        Ok(())
    }

    // Straightforward formulations that check membership in the growing
    // result and push every neighbor on the stack.
    fn bfs_by_containment<G: Neighbors>(graph: &G, start: &G::VertexId) -> Vec<G::VertexId> {
        let mut order = vec![start.clone()];
        let mut queue = std::collections::VecDeque::from([start.clone()]);

        while let Some(v) = queue.pop_front() {
            for u in graph.downstream(&v) {
                if !order.contains(&u) {
                    order.push(u.clone());
                    queue.push_back(u);
                }
            }
        }

        order
    }

    fn dfs_by_containment<G: Neighbors>(graph: &G, start: &G::VertexId) -> Vec<G::VertexId> {
        let mut order = Vec::new();
        let mut stack = vec![start.clone()];

        while let Some(v) = stack.pop() {
            if !order.contains(&v) {
                stack.extend(graph.downstream(&v));
                order.push(v);
            }
        }

        order
    }

    fn assert_orders_by_containment<G>(graph: &G) -> Result<(), TestCaseError>
    where
        G: Neighbors + VertexSet,
    {
        let bfs = Traversals::on(graph).bfs().run();
        let dfs = Traversals::on(graph).dfs().run();

        let mut bfs_expected = FxHashSet::default();
        let mut dfs_expected = FxHashSet::default();

        for start in graph.vertices_by_id() {
            let bfs_order = bfs_by_containment(graph, &start);
            let dfs_order = dfs_by_containment(graph, &start);

            prop_assert_eq!(bfs.get(&start), Some(bfs_order.as_slice()));
            prop_assert_eq!(dfs.get(&start), Some(dfs_order.as_slice()));

            bfs_expected.insert(bfs_order);
            dfs_expected.insert(dfs_order);
        }

        prop_assert_eq!(breadth_first_search(graph), bfs_expected);
        prop_assert_eq!(depth_first_search(graph), dfs_expected);

        Ok(())
    }

    #[test]
    fn orders_match_containment_formulation() {
        let graph = KeyedGraph::from_edges(
            ['E'],
            [
                ('A', 'A'),
                ('A', 'B'),
                ('A', 'C'),
                ('A', 'B'),
                ('B', 'D'),
                ('C', 'D'),
                ('C', 'A'),
                ('D', 'B'),
                ('D', 'C'),
            ],
        );

        assert_orders_by_containment(&graph).unwrap();
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_orders_match_containment_formulation(graph in graph_directed().allow_loops().multi_edge_prob(0.3)) {
            assert_orders_by_containment(&graph)?;
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_matrix_orders_match_containment_formulation(graph in graph_directed_in::<AdjMatrix>().allow_loops()) {
            assert_orders_by_containment(&graph)?;
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_bfs_visits_reachable(graph in graph_directed().allow_loops().multi_edge_prob(0.2)) {
            assert_valid(&Traversals::on(&graph).bfs().run(), &graph)?;
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_dfs_visits_reachable(graph in graph_directed().allow_loops().multi_edge_prob(0.2)) {
            assert_valid(&Traversals::on(&graph).dfs().run(), &graph)?;
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_bfs_order_by_distance(graph in graph_directed().allow_loops()) {
            use crate::algo::shortest_distance;

            for (start, order) in Traversals::on(&graph).bfs().run().iter() {
                let distances = order
                    .iter()
                    .map(|v| if v == start { 0 } else { shortest_distance(&graph, start, v).unwrap_or(usize::MAX) })
                    .collect::<Vec<_>>();

                prop_assert!(distances.windows(2).all(|w| w[0] <= w[1]));
            }
        }
    }
}
