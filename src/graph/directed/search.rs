//! Path searches: breadth-first (shortest) and depth-first (any path).

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::collections::{Frontier, Queue, Stack};
use crate::error::Result;
use crate::graph::directed::DirectedGraph;
use crate::graph::Vertex;

impl<V: Vertex> DirectedGraph<V> {
    /// Breadth-first search for a shortest path from `start` to `target`.
    ///
    /// Returns `Ok(Some(path))` with `path` running from `start` to `target`
    /// inclusive and having the fewest edges of any such path, or `Ok(None)`
    /// if `target` is unreachable. `bfs(s, s)` yields `[s]`.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`](crate::GraphError::UnknownVertex) if
    /// `start` is not in the graph.
    pub fn bfs(&self, start: &V, target: &V) -> Result<Option<Vec<V>>> {
        self.find_path(start, target, Queue::new())
    }

    /// Depth-first search for some path from `start` to `target`.
    ///
    /// Returns the first path depth-first exploration reaches; it need not be
    /// the shortest. `Ok(None)` if `target` is unreachable.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`](crate::GraphError::UnknownVertex) if
    /// `start` is not in the graph.
    pub fn dfs(&self, start: &V, target: &V) -> Result<Option<Vec<V>>> {
        self.find_path(start, target, Stack::new())
    }

    /// Expands whole paths through `frontier` until one ends at `target`.
    fn find_path<F>(&self, start: &V, target: &V, mut frontier: F) -> Result<Option<Vec<V>>>
    where
        F: Frontier<Vec<V>>,
    {
        self.require(start)?;

        let mut visited = HashSet::new();
        frontier.put(vec![start.clone()]);

        while let Some(path) = frontier.take() {
            let Some(last) = path.last() else {
                continue;
            };
            if last == target {
                debug!(edges = path.len() - 1, "path found");
                return Ok(Some(path));
            }
            if !visited.insert(last.clone()) {
                continue;
            }
            trace!(vertex = ?last, depth = path.len() - 1, "expand");
            for neighbor in self.expand(last)? {
                let mut next = Vec::with_capacity(path.len() + 1);
                next.extend_from_slice(&path);
                next.push(neighbor.clone());
                frontier.put(next);
            }
        }

        debug!(?start, ?target, "no path");
        Ok(None)
    }
}
