//! Directed graphs and the walks defined over them.
//!
//! - `directed`: the hash-map backed [`DirectedGraph`] with its traversals
//!   (`bft`, `dft`, `dft_recursive`) and path searches (`bfs`, `dfs`)

use core::fmt::Debug;
use core::hash::Hash;

pub mod directed;

pub use directed::{DirectedGraph, Traversal, VisitState};

/// Requirements on a vertex identifier.
///
/// Any hashable, comparable, cloneable value qualifies. `Debug` is needed so
/// errors and logs can name the vertex.
pub trait Vertex: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Vertex for T {}
