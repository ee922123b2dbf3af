use std::{
    collections::{HashSet, VecDeque},
    hash::BuildHasherDefault,
    mem,
};

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::{core::Neighbors, visit::VisitSet};

use super::ShortestDistance;

pub fn bfs<G>(graph: &G, start: &G::VertexId, goal: &G::VertexId) -> ShortestDistance
where
    G: Neighbors,
{
    debug!(?start, ?goal, "shortest distance search started");

    let mut visited: FxHashSet<_> = HashSet::with_capacity_and_hasher(
        graph.vertex_count_hint().unwrap_or(32),
        BuildHasherDefault::default(),
    );

    // The start itself is not enqueued. Reaching it again gives the length of
    // a cycle.
    let mut current = VecDeque::new();
    let mut next = graph.downstream(start).collect::<VecDeque<_>>();
    let mut depth = 1;

    while !next.is_empty() {
        mem::swap(&mut current, &mut next);
        trace!(depth, frontier = current.len(), "exploring level");

        while let Some(vertex) = current.pop_front() {
            if &vertex == goal {
                debug!(depth, "goal reached");
                return ShortestDistance::found(depth);
            }

            if visited.visit(vertex.clone()) {
                next.extend(graph.downstream(&vertex));
            }
        }

        depth += 1;
    }

    debug!(visited = visited.visited_count(), "goal not reachable");

    ShortestDistance::unreachable(depth - 1)
}
