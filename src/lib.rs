//! # `pathwise` - Directed Graph Walks
//!
//! A small directed graph keyed by arbitrary hashable vertex identifiers, with
//! the classic walks over it:
//!
//! - **Traversals** visit every vertex reachable from a start exactly once:
//!   breadth-first ([`DirectedGraph::bft`]), depth-first
//!   ([`DirectedGraph::dft`]) and recursive depth-first
//!   ([`DirectedGraph::dft_recursive`]).
//! - **Searches** find a path from a start to a target: breadth-first for a
//!   shortest path ([`DirectedGraph::bfs`]), depth-first for any path
//!   ([`DirectedGraph::dfs`]).
//!
//! ## Architecture
//!
//! Every iterative walk is one routine parameterized by its frontier: a
//! [`Queue`] makes it breadth-first, a [`Stack`] makes it depth-first. Both
//! containers implement [`Frontier`].
//!
//! Neighbor sets are unordered, so when a vertex has several out-neighbors the
//! exact visit order is one of several valid ones. The visited *set* and the
//! length of a breadth-first path are always determined.
//!
//! ## Failure model
//!
//! - Adding an edge whose endpoints are not both vertices does nothing.
//! - Starting a walk at a vertex the graph does not have fails with
//!   [`GraphError::UnknownVertex`].
//! - A search that cannot reach its target returns `Ok(None)`.
//!
//! ## Example
//!
//! ```rust
//! use pathwise::DirectedGraph;
//!
//! let mut graph = DirectedGraph::new();
//! for v in 1..=4 {
//!     graph.add_vertex(v);
//! }
//! graph.add_edge(1, 2);
//! graph.add_edge(2, 3);
//! graph.add_edge(1, 3);
//! graph.add_edge(3, 4);
//!
//! assert_eq!(graph.bfs(&1, &4)?, Some(vec![1, 3, 4]));
//! assert_eq!(graph.bfs(&4, &1)?, None);
//! assert_eq!(graph.bft(&1)?.len(), 4);
//! # Ok::<(), pathwise::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::{Frontier, Queue, Stack};
pub use error::{GraphError, Result};
pub use graph::{DirectedGraph, Traversal, Vertex, VisitState};
