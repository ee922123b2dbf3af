//! Find the length of the shortest directed path between two vertices.
//!
//! The distance is the number of edges on the path. The search explores the
//! graph level by level, starting from the downstream neighbors of the source
//! vertex. As a consequence, the distance from a vertex to itself is not zero
//! but the length of the shortest cycle passing through the vertex, and there
//! is no distance if the vertex does not lie on a cycle.
//!
//! # Examples
//!
//! ```
//! use diwalk::{algo::ShortestDistance, storage::AdjList};
//!
//! let mut graph = AdjList::new();
//!
//! let a = graph.add_vertex();
//! let b = graph.add_vertex();
//! let c = graph.add_vertex();
//!
//! graph.extend_with_edges([(a, b), (b, c), (c, a)]);
//!
//! let distance = ShortestDistance::on(&graph).run(&a, &c);
//! assert_eq!(distance.dist(), Some(2));
//!
//! // Back to the source through the whole cycle.
//! let distance = ShortestDistance::on(&graph).run(&a, &a);
//! assert_eq!(distance.dist(), Some(3));
//! ```

use crate::core::Neighbors;

mod bfs;
mod builder;

pub use builder::ShortestDistanceBuilder;

/// Result of a shortest distance query between two vertices.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortestDistance {
    dist: Option<usize>,
    levels_explored: usize,
}

impl ShortestDistance {
    /// Number of edges on the shortest path, or `None` if the goal is not
    /// reachable.
    pub fn dist(&self) -> Option<usize> {
        self.dist
    }

    pub fn is_reachable(&self) -> bool {
        self.dist.is_some()
    }

    /// Number of BFS levels that were processed before the search finished.
    pub fn levels_explored(&self) -> usize {
        self.levels_explored
    }

    /// Returns the distance with `-1` standing for an unreachable goal.
    pub fn as_sentinel(&self) -> i64 {
        match self.dist {
            Some(dist) => i64::try_from(dist).unwrap_or(i64::MAX),
            None => -1,
        }
    }
}

/// Returns the number of edges on the shortest directed path from `from` to
/// `to`, or `None` if there is no such path.
///
/// `shortest_distance(graph, v, v)` is the length of the shortest cycle
/// through `v`. See [`ShortestDistance`] for more information.
pub fn shortest_distance<G>(graph: &G, from: &G::VertexId, to: &G::VertexId) -> Option<usize>
where
    G: Neighbors,
{
    ShortestDistance::on(graph).run(from, to).dist()
}

impl ShortestDistance {
    fn unreachable(levels_explored: usize) -> Self {
        Self {
            dist: None,
            levels_explored,
        }
    }

    fn found(dist: usize) -> Self {
        Self {
            dist: Some(dist),
            levels_explored: dist,
        }
    }
}

#[cfg(test)]
mod tests {
    use petgraph::graph::{DiGraph, NodeIndex};
    use proptest::prelude::*;

    use crate::{
        core::{
            id::{IntegerIdType, VertexId},
            VertexSet,
        },
        infra::{
            export::Dot,
            proptest::graph_directed,
            testing::{create_cycle, create_path, KeyedGraph},
        },
        storage::{AdjList, AdjMatrix},
    };

    use super::*;

    fn v(index: usize) -> VertexId {
        index.into()
    }

    fn diamond() -> KeyedGraph<char> {
        KeyedGraph::from_edges([], [('A', 'B'), ('A', 'C'), ('B', 'D'), ('C', 'D')])
    }

    #[test]
    fn diamond_distances() {
        let graph = diamond();

        assert_eq!(shortest_distance(&graph, &'A', &'B'), Some(1));
        assert_eq!(shortest_distance(&graph, &'A', &'D'), Some(2));
        assert_eq!(shortest_distance(&graph, &'B', &'D'), Some(1));
        assert_eq!(shortest_distance(&graph, &'D', &'A'), None);
        assert_eq!(shortest_distance(&graph, &'B', &'C'), None);
    }

    #[test]
    fn diamond_on_storages() {
        let mut list = AdjList::new();
        let [a, b, c, d] = [(); 4].map(|_| list.add_vertex());
        list.extend_with_edges([(a, b), (a, c), (b, d), (c, d)]);

        let mut matrix = AdjMatrix::new();
        matrix.extend_with_vertices(4);
        matrix.extend_with_edges([(a, b), (a, c), (b, d), (c, d)]);

        assert_eq!(shortest_distance(&list, &a, &d), Some(2));
        assert_eq!(shortest_distance(&matrix, &a, &d), Some(2));
        assert_eq!(shortest_distance(&matrix, &d, &a), None);
    }

    #[test]
    fn self_distance_is_shortest_cycle() {
        let graph = KeyedGraph::from_edges([], [('A', 'B'), ('B', 'A')]);
        assert_eq!(shortest_distance(&graph, &'A', &'A'), Some(2));

        let graph: AdjList = create_cycle(5);
        assert_eq!(shortest_distance(&graph, &v(3), &v(3)), Some(5));
    }

    #[test]
    fn self_distance_without_cycle() {
        let graph = diamond();
        assert_eq!(shortest_distance(&graph, &'A', &'A'), None);
    }

    #[test]
    fn self_loop() {
        let graph = KeyedGraph::from_edges([], [('A', 'A'), ('A', 'B')]);

        assert_eq!(shortest_distance(&graph, &'A', &'A'), Some(1));
        assert_eq!(shortest_distance(&graph, &'A', &'B'), Some(1));
    }

    #[test]
    fn isolated_vertex() {
        let graph = KeyedGraph::from_edges(['E'], [('A', 'B')]);

        assert_eq!(shortest_distance(&graph, &'E', &'A'), None);
        assert_eq!(shortest_distance(&graph, &'A', &'E'), None);
        assert_eq!(shortest_distance(&graph, &'E', &'E'), None);
    }

    #[test]
    fn absent_vertex_is_unreachable() {
        let graph: AdjList = create_path(3);
        let absent = v(10);
        let first = v(0);

        assert_eq!(shortest_distance(&graph, &absent, &first), None);
        assert_eq!(shortest_distance(&graph, &first, &absent), None);
    }

    #[test]
    fn parallel_edges() {
        let graph = KeyedGraph::from_edges([], [('A', 'B'), ('A', 'B'), ('B', 'C')]);
        assert_eq!(shortest_distance(&graph, &'A', &'C'), Some(2));
    }

    #[test]
    fn builder_result() {
        let graph: AdjList = create_path(6);
        let first = v(0);
        let last = v(5);

        let reachable = ShortestDistance::on(&graph).run(&first, &last);
        assert!(reachable.is_reachable());
        assert_eq!(reachable.dist(), Some(5));
        assert_eq!(reachable.levels_explored(), 5);
        assert_eq!(reachable.as_sentinel(), 5);

        let unreachable = ShortestDistance::on(&graph).run(&last, &first);
        assert!(!unreachable.is_reachable());
        assert_eq!(unreachable.dist(), None);
        assert_eq!(unreachable.levels_explored(), 0);
        assert_eq!(unreachable.as_sentinel(), -1);

        // The whole path downstream of the second vertex is explored.
        let unreachable = ShortestDistance::on(&graph).run(&v(1), &first);
        assert_eq!(unreachable.levels_explored(), 4);
    }

    #[test]
    fn graph_by_reference() {
        let graph = diamond();
        let reference = &graph;

        assert_eq!(shortest_distance(&reference, &'A', &'D'), Some(2));
    }

    fn to_petgraph(graph: &AdjList) -> DiGraph<(), ()> {
        let mut pg = DiGraph::with_capacity(graph.vertex_count(), graph.edge_count());

        for _ in graph.vertices_by_id() {
            pg.add_node(());
        }

        for u in graph.vertices_by_id() {
            for v in graph.downstream(&u) {
                pg.add_edge(NodeIndex::new(u.into()), NodeIndex::new(v.into()), ());
            }
        }

        pg
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_shortest_distance_agrees_with_dijkstra(graph in graph_directed().allow_loops().max_size(64), from: u64, to: u64) {
            let n = graph.vertex_count() as u64;
            prop_assume!(n > 1);

            let from = VertexId::from_bits(from % n);
            let to = VertexId::from_bits(to % n);
            prop_assume!(from != to);

            let pg = to_petgraph(&graph);
            let expected = petgraph::algo::dijkstra(&pg, NodeIndex::new(from.into()), Some(NodeIndex::new(to.into())), |_| 1usize)
                .get(&NodeIndex::new(to.into()))
                .copied();

            prop_assert_eq!(
                shortest_distance(&graph, &from, &to),
                expected,
                "{:?} -> {:?} in\n{}",
                from,
                to,
                Dot::with_debug(None).to_string(&graph)
            );
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_self_distance_is_shortest_cycle(graph in graph_directed().allow_loops().max_size(32), vertex: u64) {
            let n = graph.vertex_count() as u64;
            prop_assume!(n > 0);

            let vertex = VertexId::from_bits(vertex % n);
            let cycle = graph
                .downstream(&vertex)
                .filter_map(|u| if u == vertex { Some(0) } else { shortest_distance(&graph, &u, &vertex) })
                .min()
                .map(|dist| dist + 1);

            prop_assert_eq!(shortest_distance(&graph, &vertex, &vertex), cycle);
        }
    }
}
