use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError<VI> {
    pub from: VI,
    pub to: VI,
    pub kind: AddEdgeErrorKind,
}

impl<VI> AddEdgeError<VI> {
    pub fn new(from: VI, to: VI, kind: AddEdgeErrorKind) -> Self {
        Self { from, to, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
    MultiEdge,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SourceAbsent => "source does not exist",
            AddEdgeErrorKind::DestinationAbsent => "destination does not exist",
            AddEdgeErrorKind::MultiEdge => {
                "an edge already exists and the graph does not allow multi edges"
            }
        };
        f.write_str(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message() {
        let error = AddEdgeError::new(0, 1, AddEdgeErrorKind::DestinationAbsent);
        assert_eq!(
            error.to_string(),
            "adding edge failed: destination does not exist"
        );
    }
}
