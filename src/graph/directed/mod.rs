//! A dynamic adjacency-set directed graph.
//!
//! Each vertex maps to the set of its out-neighbors:
//! - vertices are any [`Vertex`] value, stored as `HashMap` keys
//! - neighbor sets are `HashSet`s, so a neighbor appears at most once and
//!   enumeration order is unspecified
//!
//! Insertion is lenient (an edge to a missing vertex is dropped), lookups made
//! by traversals are strict (a missing start vertex is an error).

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::Vertex;

mod search;
mod traversal;

#[cfg(test)]
mod tests;

pub use traversal::{Traversal, VisitState};

/// A directed graph keyed by vertex identifiers.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Replaces any existing neighbor set |
/// | `add_edge` | \(O(1)\) amortized | No-op unless both endpoints exist |
/// | `neighbors` | \(O(1)\) | Borrowed set of out-neighbors |
/// | `edge_count` | \(O(n)\) | Sums neighbor set sizes |
/// | `bft` / `dft` / `dft_recursive` | \(O(n + m)\) | Over the reachable subgraph |
/// | `bfs` / `dfs` | \(O((n + m) \cdot L)\) | Paths of length \(L\) are copied per push |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    into = "GraphRecord<V>",
    from = "GraphRecord<V>",
    bound(
        serialize = "V: Vertex + Serialize",
        deserialize = "V: Vertex + Deserialize<'de>"
    )
)]
pub struct DirectedGraph<V: Vertex> {
    vertices: HashMap<V, HashSet<V>>,
}

impl<V: Vertex> DirectedGraph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
        }
    }

    /// Creates an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: HashMap::with_capacity(capacity),
        }
    }

    /// Builds a graph by adding every vertex, then every edge.
    ///
    /// Edges go through [`add_edge`](Self::add_edge), so an edge naming a
    /// vertex that is not in `vertices` is dropped.
    pub fn from_parts<I, E>(vertices: I, edges: E) -> Self
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        for (from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }

    /// Adds `vertex` with no outgoing edges.
    ///
    /// Re-adding an existing vertex resets its neighbor set to empty. Edges
    /// pointing *at* the vertex from elsewhere are kept.
    pub fn add_vertex(&mut self, vertex: V) {
        self.vertices.insert(vertex, HashSet::new());
    }

    /// Adds the directed edge `from -> to`.
    ///
    /// Silently ignored unless both endpoints are already vertices.
    pub fn add_edge(&mut self, from: V, to: V) {
        if !self.vertices.contains_key(&to) {
            debug!(?from, ?to, "ignoring edge: target is not a vertex");
            return;
        }
        match self.vertices.get_mut(&from) {
            Some(neighbors) => {
                neighbors.insert(to);
            }
            None => debug!(?from, ?to, "ignoring edge: source is not a vertex"),
        }
    }

    /// Returns `true` if `vertex` has been added.
    #[inline]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains_key(vertex)
    }

    /// Returns `true` if the edge `from -> to` exists.
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.vertices
            .get(from)
            .is_some_and(|neighbors| neighbors.contains(to))
    }

    /// Returns the out-neighbors of `vertex`, or `None` if it is not a vertex.
    #[inline]
    pub fn neighbors(&self, vertex: &V) -> Option<&HashSet<V>> {
        self.vertices.get(vertex)
    }

    /// Iterates over all vertices in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.keys()
    }

    /// Iterates over all edges `(from, to)` in unspecified order.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.vertices
            .iter()
            .flat_map(|(from, neighbors)| neighbors.iter().map(move |to| (from, to)))
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(HashSet::len).sum()
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Checks that `path` is a walk through this graph.
    ///
    /// A valid path is non-empty, names only vertices of the graph, and every
    /// consecutive pair is a directed edge.
    pub fn is_path(&self, path: &[V]) -> bool {
        let Some(first) = path.first() else {
            return false;
        };
        self.contains_vertex(first)
            && path
                .windows(2)
                .all(|pair| self.has_edge(&pair[0], &pair[1]))
    }

    /// Looks up the out-neighbors of a vertex the walk is about to expand.
    #[inline]
    fn expand(&self, vertex: &V) -> Result<&HashSet<V>> {
        self.vertices
            .get(vertex)
            .ok_or_else(|| GraphError::unknown_vertex(vertex))
    }

    /// Fails with [`GraphError::UnknownVertex`] unless `vertex` is present.
    #[inline]
    fn require(&self, vertex: &V) -> Result<()> {
        self.expand(vertex).map(|_| ())
    }
}

impl<V: Vertex> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized form of a [`DirectedGraph`]: a vertex list and an edge list.
#[derive(Serialize, Deserialize)]
struct GraphRecord<V> {
    vertices: Vec<V>,
    #[serde(default = "Vec::new")]
    edges: Vec<(V, V)>,
}

impl<V: Vertex> From<DirectedGraph<V>> for GraphRecord<V> {
    fn from(graph: DirectedGraph<V>) -> Self {
        let mut edges = Vec::with_capacity(graph.edge_count());
        let mut vertices = Vec::with_capacity(graph.vertex_count());
        for (from, neighbors) in graph.vertices {
            edges.extend(neighbors.into_iter().map(|to| (from.clone(), to)));
            vertices.push(from);
        }
        Self { vertices, edges }
    }
}

impl<V: Vertex> From<GraphRecord<V>> for DirectedGraph<V> {
    fn from(record: GraphRecord<V>) -> Self {
        Self::from_parts(record.vertices, record.edges)
    }
}
