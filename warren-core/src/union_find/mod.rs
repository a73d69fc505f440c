//! Union-find reachability engine.
//!
//! Owns a disjoint-set sized to the network and answers reachability by
//! comparing set representatives. Node labels are 1-based at the network
//! boundary and zero-based inside the set; the translation lives here and
//! nowhere else, so the set itself stays domain-agnostic.

mod disjoint_set;

use tracing::instrument;

use crate::{
    error::Result,
    network::{Network, NodeBounds},
};

use self::disjoint_set::DisjointSet;

/// A network that answers reachability queries through a disjoint-set.
///
/// Both operations are amortized near-constant; `query` compresses paths as
/// a side effect, which is why it takes `&mut self`.
///
/// # Examples
/// ```
/// use warren_core::{Network, UnionFindNetwork};
///
/// let mut network = UnionFindNetwork::new(8);
/// network.connect(1, 2)?;
/// network.connect(2, 4)?;
/// assert!(network.query(1, 4)?);
/// assert!(!network.query(1, 7)?);
/// # Ok::<(), warren_core::NetworkError>(())
/// ```
#[derive(Debug, Clone)]
pub struct UnionFindNetwork {
    bounds: NodeBounds,
    sets: DisjointSet,
}

impl UnionFindNetwork {
    /// Creates a network of `node_count` nodes labeled `[1, node_count]`,
    /// each in its own singleton set.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            bounds: NodeBounds::new(node_count),
            sets: DisjointSet::new(node_count),
        }
    }
}

/// Translates a validated 1-based label into the set's zero-based domain.
const fn to_element(label: usize) -> usize {
    label - 1
}

impl Network for UnionFindNetwork {
    fn node_count(&self) -> usize {
        self.bounds.node_count()
    }

    fn connect(&mut self, src: i64, dest: i64) -> Result<()> {
        let src = self.bounds.require(src)?;
        let dest = self.bounds.require(dest)?;
        self.sets.union(to_element(src), to_element(dest))?;
        Ok(())
    }

    #[instrument(name = "union_find.query", level = "debug", err, skip(self))]
    fn query(&mut self, src: i64, dest: i64) -> Result<bool> {
        let src = self.bounds.require(src)?;
        let dest = self.bounds.require(dest)?;
        let src_root = self.sets.find(to_element(src))?;
        let dest_root = self.sets.find(to_element(dest))?;
        Ok(src_root == dest_root)
    }
}
