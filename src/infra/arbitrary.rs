use arbitrary::{Arbitrary, Result, Unstructured};

use crate::{
    core::{create::Create, id::IntegerIdType},
    storage::{AdjList, AdjMatrix},
};

const MAX_VERTEX_COUNT: usize = 32;

fn arbitrary_graph<G>(u: &mut Unstructured<'_>) -> Result<G>
where
    G: Create,
{
    let vertex_count = u.int_in_range(0..=MAX_VERTEX_COUNT)?;

    let mut graph = G::with_capacity(vertex_count);
    let vertices = (0..vertex_count)
        .map(|_| graph.add_vertex())
        .collect::<Vec<_>>();

    if vertices.is_empty() {
        return Ok(graph);
    }

    let edge_count = u.arbitrary_len::<(u8, u8)>()?;

    for _ in 0..edge_count {
        let from = u.choose_index(vertices.len())?;
        let to = u.choose_index(vertices.len())?;

        // Storages without parallel edges reject duplicates.
        let _ = graph.try_add_edge(&vertices[from], &vertices[to]);
    }

    Ok(graph)
}

impl<'a, VI: IntegerIdType> Arbitrary<'a> for AdjList<VI> {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        arbitrary_graph(u)
    }
}

impl<'a, VI: IntegerIdType> Arbitrary<'a> for AdjMatrix<VI> {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        arbitrary_graph(u)
    }
}
