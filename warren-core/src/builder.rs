//! Builder utilities for constructing networks.
//!
//! Exposes the engine selection surface and the validation applied before a
//! [`Network`] instance comes into existence.

use tracing::{info, instrument, warn};

use crate::{
    bfs::BfsNetwork,
    error::{NetworkError, Result},
    network::Network,
    union_find::UnionFindNetwork,
};

/// Indicates which reachability engine a [`NetworkBuilder`] constructs.
///
/// `Auto` resolves deterministically to the union-find engine, whose
/// amortized near-constant query cost is the better default. `BreadthFirst`
/// trades that for constant-time connects and a query that leaves the
/// network untouched.
///
/// # Examples
/// ```
/// use warren_core::EngineStrategy;
///
/// let strategy = EngineStrategy::Auto;
/// assert!(matches!(strategy, EngineStrategy::Auto));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStrategy {
    /// Let the library pick an engine.
    Auto,
    /// Answer queries by breadth-first traversal of adjacency sets.
    BreadthFirst,
    /// Answer queries by comparing disjoint-set representatives.
    UnionFind,
}

/// Configures and constructs [`Network`] instances.
///
/// # Examples
/// ```
/// use warren_core::{EngineStrategy, NetworkBuilder};
///
/// let network = NetworkBuilder::new()
///     .with_node_count(8)
///     .with_engine_strategy(EngineStrategy::UnionFind)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(network.node_count(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct NetworkBuilder {
    node_count: i64,
    engine_strategy: EngineStrategy,
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self {
            node_count: 0,
            engine_strategy: EngineStrategy::Auto,
        }
    }
}

impl NetworkBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use warren_core::{EngineStrategy, NetworkBuilder};
    ///
    /// let builder = NetworkBuilder::new();
    /// assert_eq!(builder.node_count(), 0);
    /// assert_eq!(builder.engine_strategy(), EngineStrategy::Auto);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of nodes the network will contain.
    ///
    /// The count is taken signed so that an invalid negative value can be
    /// reported from [`Self::build`] instead of being silently unrepresentable.
    ///
    /// # Examples
    /// ```
    /// use warren_core::NetworkBuilder;
    ///
    /// let builder = NetworkBuilder::new().with_node_count(10);
    /// assert_eq!(builder.node_count(), 10);
    /// ```
    #[must_use]
    pub fn with_node_count(mut self, node_count: i64) -> Self {
        self.node_count = node_count;
        self
    }

    /// Returns the currently configured node count.
    ///
    /// # Examples
    /// ```
    /// use warren_core::NetworkBuilder;
    ///
    /// let builder = NetworkBuilder::new().with_node_count(3);
    /// assert_eq!(builder.node_count(), 3);
    /// ```
    #[must_use]
    pub fn node_count(&self) -> i64 {
        self.node_count
    }

    /// Sets the engine used to answer reachability queries.
    ///
    /// # Examples
    /// ```
    /// use warren_core::{EngineStrategy, NetworkBuilder};
    ///
    /// let builder = NetworkBuilder::new().with_engine_strategy(EngineStrategy::BreadthFirst);
    /// assert_eq!(builder.engine_strategy(), EngineStrategy::BreadthFirst);
    /// ```
    #[must_use]
    pub fn with_engine_strategy(mut self, strategy: EngineStrategy) -> Self {
        self.engine_strategy = strategy;
        self
    }

    /// Returns the currently configured engine strategy.
    ///
    /// # Examples
    /// ```
    /// use warren_core::{EngineStrategy, NetworkBuilder};
    ///
    /// let builder = NetworkBuilder::new().with_engine_strategy(EngineStrategy::UnionFind);
    /// assert_eq!(builder.engine_strategy(), EngineStrategy::UnionFind);
    /// ```
    #[must_use]
    pub fn engine_strategy(&self) -> EngineStrategy {
        self.engine_strategy
    }

    /// Validates the configuration and constructs the selected engine.
    ///
    /// # Errors
    /// Returns [`NetworkError::NegativeNodeCount`] when the configured node
    /// count is negative; the network is never constructed in that case.
    ///
    /// # Examples
    /// ```
    /// use warren_core::NetworkBuilder;
    ///
    /// let network = NetworkBuilder::new()
    ///     .with_node_count(2)
    ///     .build()
    ///     .expect("configuration is valid");
    /// assert_eq!(network.node_count(), 2);
    /// ```
    #[instrument(
        name = "builder.build",
        err,
        skip(self),
        fields(node_count = self.node_count, strategy = ?self.engine_strategy),
    )]
    pub fn build(self) -> Result<Box<dyn Network>> {
        let node_count = usize::try_from(self.node_count).map_err(|_| {
            NetworkError::NegativeNodeCount {
                got: self.node_count,
            }
        })?;

        if node_count == 0 {
            warn!("constructing an empty network; every connect and query will be out of range");
        }

        let network: Box<dyn Network> = match self.engine_strategy {
            EngineStrategy::Auto | EngineStrategy::UnionFind => {
                Box::new(UnionFindNetwork::new(node_count))
            }
            EngineStrategy::BreadthFirst => Box::new(BfsNetwork::new(node_count)),
        };
        info!(node_count, engine = ?self.engine_strategy, "network constructed");
        Ok(network)
    }
}
