use std::io::{self, Cursor, Write};

use rustc_hash::FxHashMap;

use crate::core::{id::IdType, Neighbors, VertexSet};

pub trait Export<G> {
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()>;
}

/// Export to the [DOT](https://graphviz.org/doc/info/lang.html) format.
pub struct Dot<VI> {
    name: String,
    get_vertex_label: Box<dyn Fn(&VI) -> String>,
}

impl<VI: IdType> Dot<VI> {
    pub fn new<FV>(name: Option<String>, get_vertex_label: FV) -> Self
    where
        FV: Fn(&VI) -> String + 'static,
    {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
            get_vertex_label: Box::new(get_vertex_label),
        }
    }

    pub fn with_debug(name: Option<String>) -> Self {
        Self::new(name, |v| format!("{v:?}"))
    }

    pub fn to_string<G>(&self, graph: &G) -> String
    where
        G: VertexSet<VertexId = VI> + Neighbors,
    {
        let mut cursor = Cursor::new(Vec::new());
        self.export(graph, &mut cursor)
            .expect("writing to vec in cursor does not fail");

        String::from_utf8(cursor.into_inner()).expect("dot format is text format")
    }
}

impl<VI, G> Export<G> for Dot<VI>
where
    VI: IdType,
    G: VertexSet<VertexId = VI> + Neighbors,
{
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()> {
        let mut indexer = Indexer::new();

        out.write_all(b"digraph ")?;
        out.write_all(self.name.as_bytes())?;
        out.write_all(b" {\n")?;

        for vertex in graph.vertices_by_id() {
            writeln!(
                out,
                "    v{} [label={:?}];",
                indexer.get(&vertex),
                (self.get_vertex_label)(&vertex)
            )?;
        }

        for from in graph.vertices_by_id() {
            for to in graph.downstream(&from) {
                writeln!(out, "    v{} -> v{};", indexer.get(&from), indexer.get(&to))?;
            }
        }

        out.write_all(b"}\n")?;

        Ok(())
    }
}

#[derive(Debug)]
struct Indexer<I>(FxHashMap<I, usize>);

impl<I: IdType> Indexer<I> {
    pub fn new() -> Self {
        Self(FxHashMap::default())
    }

    pub fn get(&mut self, id: &I) -> usize {
        let new_index = self.0.len();
        *self.0.entry(id.clone()).or_insert(new_index)
    }
}
