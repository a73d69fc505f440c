//! Breadth-first reachability engine.
//!
//! Keeps an insertion-ordered neighbor set per node and walks the graph on
//! every query. Connects are constant time; queries are linear in the node
//! count.

use std::collections::VecDeque;

use indexmap::IndexSet;
use tracing::instrument;

use crate::{
    error::Result,
    network::{Network, NodeBounds},
};

/// A network that answers reachability queries with breadth-first search.
///
/// # Examples
/// ```
/// use warren_core::{BfsNetwork, Network};
///
/// let mut network = BfsNetwork::new(8);
/// network.connect(1, 2)?;
/// network.connect(2, 4)?;
/// assert!(network.query(1, 4)?);
/// assert!(!network.query(1, 7)?);
/// # Ok::<(), warren_core::NetworkError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BfsNetwork {
    bounds: NodeBounds,
    /// Direct neighbors per label. Slot 0 is unused because labels are
    /// 1-based. Insertion order fixes the traversal order per run; the set
    /// semantics make repeated connects idempotent.
    adjacency: Vec<IndexSet<usize>>,
}

impl BfsNetwork {
    /// Creates a network of `node_count` nodes labeled `[1, node_count]`,
    /// with no edges.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            bounds: NodeBounds::new(node_count),
            adjacency: vec![IndexSet::new(); node_count + 1],
        }
    }

    #[cfg(test)]
    fn neighbors(&self, label: usize) -> Vec<usize> {
        self.adjacency[label].iter().copied().collect()
    }
}

impl Network for BfsNetwork {
    fn node_count(&self) -> usize {
        self.bounds.node_count()
    }

    fn connect(&mut self, src: i64, dest: i64) -> Result<()> {
        let src = self.bounds.require(src)?;
        let dest = self.bounds.require(dest)?;
        self.adjacency[src].insert(dest);
        self.adjacency[dest].insert(src);
        Ok(())
    }

    #[instrument(name = "bfs.query", level = "debug", err, skip(self))]
    fn query(&mut self, src: i64, dest: i64) -> Result<bool> {
        let src = self.bounds.require(src)?;
        let dest = self.bounds.require(dest)?;
        if src == dest {
            return Ok(true);
        }

        let mut visited = vec![false; self.bounds.node_count() + 1];
        let mut queue = VecDeque::new();
        visited[src] = true;
        queue.push_back(src);

        while let Some(current) = queue.pop_front() {
            for &neighbor in &self.adjacency[current] {
                if neighbor == dest {
                    return Ok(true);
                }
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        Ok(false)
    }
}
