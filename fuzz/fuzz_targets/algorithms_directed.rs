#![no_main]

use libfuzzer_sys::fuzz_target;

use diwalk::{
    algo::{common_downstream_vertices, shortest_distance, Traversals},
    core::{marker::Outgoing, Neighbors, VertexSet},
    storage::AdjList,
};

fuzz_target!(|graph: AdjList| {
    let bfs = Traversals::on(&graph).bfs().run();
    let dfs = Traversals::on(&graph).dfs().run();

    assert_eq!(bfs.len(), graph.vertex_count());

    for u in graph.vertices_by_id() {
        let bfs_order = bfs.get(&u).unwrap();
        let dfs_order = dfs.get(&u).unwrap();

        assert_eq!(bfs_order.first(), Some(&u));
        assert_eq!(dfs_order.first(), Some(&u));

        let mut sorted_bfs = bfs_order.to_vec();
        let mut sorted_dfs = dfs_order.to_vec();
        sorted_bfs.sort();
        sorted_dfs.sort();
        sorted_bfs.dedup();

        assert_eq!(sorted_bfs.len(), bfs_order.len(), "duplicate vertex in order");
        assert_eq!(sorted_bfs, sorted_dfs);

        for v in graph.vertices_by_id() {
            let dist = shortest_distance(&graph, &u, &v);

            if u != v {
                assert_eq!(dist.is_some(), bfs_order.contains(&v));
            }

            if let Some(dist) = dist {
                assert!(dist >= 1 && dist <= graph.vertex_count());
            }

            let common = common_downstream_vertices(&graph, &u, &v);
            let bound = graph.degree_directed(&u, Outgoing) * graph.degree_directed(&v, Outgoing);

            assert!(common.len() <= bound);
            assert!(common
                .iter()
                .all(|x| graph.contains_edge(&u, x) && graph.contains_edge(&v, x)));
        }
    }
});
