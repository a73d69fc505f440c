//! Network contract shared by every reachability engine.
//!
//! The [`Network`] trait defines the operations a network offers;
//! [`NodeBounds`] holds the fixed node count and performs the label
//! validation both engines apply before touching any state.

use crate::error::{NetworkError, Result};

/// A fixed-size undirected network of integer-labeled nodes.
///
/// Labels range over `[1, node_count]` and the label set never changes after
/// construction. `query` takes `&mut self` because the union-find engine
/// compresses paths during lookups.
///
/// # Examples
/// ```
/// use warren_core::{EngineStrategy, NetworkBuilder};
///
/// let mut network = NetworkBuilder::new()
///     .with_node_count(3)
///     .with_engine_strategy(EngineStrategy::BreadthFirst)
///     .build()?;
/// network.connect(1, 2)?;
/// assert!(network.query(2, 1)?);
/// assert!(!network.query(1, 3)?);
/// # Ok::<(), warren_core::NetworkError>(())
/// ```
pub trait Network: core::fmt::Debug {
    /// Returns the number of nodes the network was created with.
    fn node_count(&self) -> usize;

    /// Connects `src` and `dest` with an undirected edge.
    ///
    /// Connecting nodes that are already connected, directly or through a
    /// path, is a silent success.
    ///
    /// # Errors
    /// Returns [`NetworkError::NodeNotFound`] when either label lies outside
    /// `[1, node_count]`; no edge is added in that case.
    fn connect(&mut self, src: i64, dest: i64) -> Result<()>;

    /// Reports whether a path of edges connects `src` and `dest`.
    ///
    /// Every node reaches itself, with or without edges.
    ///
    /// # Errors
    /// Returns [`NetworkError::NodeNotFound`] when either label lies outside
    /// `[1, node_count]`.
    fn query(&mut self, src: i64, dest: i64) -> Result<bool>;
}

/// The fixed label range of a network, `[1, node_count]`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeBounds {
    node_count: usize,
}

impl NodeBounds {
    pub(crate) const fn new(node_count: usize) -> Self {
        Self { node_count }
    }

    pub(crate) const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Validates a label, returning it as an index usable by the engines.
    ///
    /// Rejections name the offending label and the valid inclusive range so
    /// callers can see exactly which argument was bad.
    pub(crate) fn require(&self, node: i64) -> Result<usize> {
        usize::try_from(node)
            .ok()
            .filter(|label| (1..=self.node_count).contains(label))
            .ok_or(NetworkError::NodeNotFound {
                node,
                node_count: self.node_count,
            })
    }
}
