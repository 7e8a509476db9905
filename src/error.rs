//! Error types for graph operations.

use thiserror::Error;

/// Errors raised by traversals and searches.
///
/// Edge insertion never fails: an edge naming a missing vertex is ignored.
/// A search that cannot reach its target is not an error either; it returns
/// `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The starting vertex of a traversal or search is not in the graph.
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),
}

impl GraphError {
    pub(crate) fn unknown_vertex<V: core::fmt::Debug>(vertex: &V) -> Self {
        Self::UnknownVertex(format!("{vertex:?}"))
    }
}

/// Result alias for graph operations.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;
