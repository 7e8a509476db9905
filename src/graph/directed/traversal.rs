//! Whole-graph traversals: breadth-first, depth-first and recursive depth-first.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::collections::{Frontier, Queue, Stack};
use crate::error::Result;
use crate::graph::directed::DirectedGraph;
use crate::graph::Vertex;

/// The outcome of an iterative traversal.
///
/// `order` is the traversal result proper. `pattern` and `checks` describe how
/// much work the frontier did and are meant for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal<V> {
    /// Vertices in the order they were first visited.
    pub order: Vec<V>,
    /// Every vertex put on the frontier after the start, in push order.
    /// Repeats are expected: neighbors are pushed whether or not they were seen.
    pub pattern: Vec<V>,
    /// Number of items taken off the frontier.
    pub checks: usize,
}

impl<V> Traversal<V> {
    /// Consumes the report, keeping only the visit order.
    pub fn into_order(self) -> Vec<V> {
        self.order
    }
}

/// Accumulator threaded through [`DirectedGraph::dft_recursive_with`].
///
/// Holding one `VisitState` across several calls walks each vertex at most
/// once over all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitState<V: Vertex> {
    visited: HashSet<V>,
    order: Vec<V>,
}

impl<V: Vertex> VisitState<V> {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self {
            visited: HashSet::new(),
            order: Vec::new(),
        }
    }

    /// Returns `true` if `vertex` has been visited.
    #[inline]
    pub fn is_visited(&self, vertex: &V) -> bool {
        self.visited.contains(vertex)
    }

    /// Vertices in the order they were visited.
    #[inline]
    pub fn order(&self) -> &[V] {
        &self.order
    }

    /// Consumes the accumulator, keeping only the visit order.
    pub fn into_order(self) -> Vec<V> {
        self.order
    }

    fn mark(&mut self, vertex: &V) {
        if self.visited.insert(vertex.clone()) {
            self.order.push(vertex.clone());
        }
    }
}

impl<V: Vertex> Default for VisitState<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> DirectedGraph<V> {
    /// Breadth-first traversal from `start`.
    ///
    /// Returns every vertex reachable from `start` exactly once; all vertices
    /// at distance `d` come before any at distance `d + 1`.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`](crate::GraphError::UnknownVertex) if
    /// `start` is not in the graph.
    pub fn bft(&self, start: &V) -> Result<Vec<V>> {
        self.bft_report(start).map(Traversal::into_order)
    }

    /// Breadth-first traversal returning the full [`Traversal`] report.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`](crate::GraphError::UnknownVertex) if
    /// `start` is not in the graph.
    pub fn bft_report(&self, start: &V) -> Result<Traversal<V>> {
        self.walk(start, Queue::new())
    }

    /// Iterative depth-first traversal from `start`.
    ///
    /// The most recently discovered neighbor is explored first. Since neighbor
    /// order is unspecified, so is the choice among valid depth-first orders.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`](crate::GraphError::UnknownVertex) if
    /// `start` is not in the graph.
    pub fn dft(&self, start: &V) -> Result<Vec<V>> {
        self.dft_report(start).map(Traversal::into_order)
    }

    /// Iterative depth-first traversal returning the full [`Traversal`] report.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`](crate::GraphError::UnknownVertex) if
    /// `start` is not in the graph.
    pub fn dft_report(&self, start: &V) -> Result<Traversal<V>> {
        self.walk(start, Stack::new())
    }

    /// Recursive depth-first traversal from `start`.
    ///
    /// Visits the same vertex set as [`dft`](Self::dft). Recursion depth grows
    /// with the longest simple path explored, one stack frame per vertex on it.
    /// A chain of a few hundred thousand vertices overflows the thread's stack
    /// and aborts the process; use [`dft`](Self::dft) for deep graphs.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`](crate::GraphError::UnknownVertex) if
    /// `start` is not in the graph.
    pub fn dft_recursive(&self, start: &V) -> Result<Vec<V>> {
        let mut state = VisitState::new();
        self.dft_recursive_with(start, &mut state)?;
        debug!(visited = state.order.len(), "recursive depth-first traversal done");
        Ok(state.into_order())
    }

    /// Recursive depth-first traversal into a caller-owned accumulator.
    ///
    /// Returns immediately if `start` was already visited through `state`.
    /// Shares the recursion depth limit of [`dft_recursive`](Self::dft_recursive).
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`](crate::GraphError::UnknownVertex) if
    /// `start` is neither visited nor in the graph.
    pub fn dft_recursive_with(&self, start: &V, state: &mut VisitState<V>) -> Result<()> {
        if state.is_visited(start) {
            return Ok(());
        }
        let neighbors = self.expand(start)?;
        state.mark(start);
        trace!(vertex = ?start, "visit");
        for child in neighbors {
            self.dft_recursive_with(child, state)?;
        }
        Ok(())
    }

    /// Drains `frontier` from `start`, visiting each vertex at most once.
    fn walk<F: Frontier<V>>(&self, start: &V, mut frontier: F) -> Result<Traversal<V>> {
        self.require(start)?;

        let mut visited = HashSet::new();
        let mut report = Traversal {
            order: Vec::new(),
            pattern: Vec::new(),
            checks: 0,
        };

        frontier.put(start.clone());
        while let Some(vertex) = frontier.take() {
            report.checks += 1;
            if visited.contains(&vertex) {
                continue;
            }
            for neighbor in self.expand(&vertex)? {
                frontier.put(neighbor.clone());
                report.pattern.push(neighbor.clone());
            }
            trace!(?vertex, pending = frontier.size(), "visit");
            visited.insert(vertex.clone());
            report.order.push(vertex);
        }

        debug!(
            visited = report.order.len(),
            checks = report.checks,
            "traversal done"
        );
        Ok(report)
    }
}
