/// Direction of an edge relative to a queried vertex.
///
/// [`Outgoing`] neighbors of `v` are the *downstream* vertices (edges
/// `v → x`), [`Incoming`] neighbors are the *upstream* vertices (edges
/// `x → v`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Outgoing,
    Incoming,
}

pub use Direction::*;

impl Direction {
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Direction::Outgoing => 0,
            Direction::Incoming => 1,
        }
    }

    pub fn all() -> &'static [Direction] {
        &[Outgoing, Incoming]
    }
}
