#![no_main]

use libfuzzer_sys::fuzz_target;

use diwalk::{
    algo::{common_upstream_vertices, shortest_distance, Traversals},
    core::{Neighbors, VertexSet},
    storage::{AdjList, AdjMatrix},
};

fuzz_target!(|matrix: AdjMatrix| {
    // Same edges, but the adjacency list reports neighbors in reversed order.
    let mut list = AdjList::new();
    let vertices = list.extend_with_vertices(matrix.vertex_count());

    for u in vertices.iter().rev() {
        let neighbors = matrix.downstream(u).collect::<Vec<_>>();

        for v in neighbors.iter().rev() {
            list.add_edge(u, v);
        }
    }

    assert_eq!(list.edge_count(), matrix.edge_count());

    let list_traversals = Traversals::on(&list).dfs().run();
    let matrix_traversals = Traversals::on(&matrix).dfs().run();

    for u in matrix.vertices_by_id() {
        let mut list_order = list_traversals.get(&u).unwrap().to_vec();
        let mut matrix_order = matrix_traversals.get(&u).unwrap().to_vec();
        list_order.sort();
        matrix_order.sort();
        assert_eq!(list_order, matrix_order);

        for v in matrix.vertices_by_id() {
            assert_eq!(
                shortest_distance(&list, &u, &v),
                shortest_distance(&matrix, &u, &v)
            );

            let mut list_common = common_upstream_vertices(&list, &u, &v);
            let matrix_common = common_upstream_vertices(&matrix, &u, &v);
            list_common.sort();
            assert_eq!(list_common, matrix_common);
        }
    }
});
