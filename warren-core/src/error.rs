//! Error types for the warren core library.
//!
//! Defines the error types exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use thiserror::Error;

/// Error raised by the disjoint-set when an element lies outside its domain.
///
/// The disjoint-set operates on the dense zero-based domain `[0, len)`;
/// network labels are translated into it by the union-find engine before
/// they reach the set.
#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
#[error("element {element} is outside the set domain [0, {len})")]
pub struct ElementOutOfRange {
    /// The element index rejected by the lookup.
    pub element: usize,
    /// The number of elements the set was created with.
    pub len: usize,
}

/// Error type produced when building or operating a [`crate::Network`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum NetworkError {
    /// The builder was given a negative node count.
    #[error("the number of nodes in a network must be non-negative (got {got})")]
    NegativeNodeCount {
        /// The invalid node count supplied by the caller.
        got: i64,
    },
    /// A label passed to `connect` or `query` is not a node of the network.
    #[error("node {node} not found in network [1, {node_count}]")]
    NodeNotFound {
        /// The offending node label.
        node: i64,
        /// The number of nodes in the network; valid labels are
        /// `[1, node_count]`.
        node_count: usize,
    },
    /// The disjoint-set rejected a translated element index.
    ///
    /// Contract validation runs before engine dispatch, so seeing this
    /// variant indicates a logic error in the translation layer rather than
    /// caller misuse.
    #[error("disjoint-set lookup failed: {error}")]
    DisjointSet {
        /// The underlying domain error reported by the disjoint-set.
        #[source]
        error: ElementOutOfRange,
    },
}

impl NetworkError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> NetworkErrorCode {
        match self {
            Self::NegativeNodeCount { .. } => NetworkErrorCode::NegativeNodeCount,
            Self::NodeNotFound { .. } => NetworkErrorCode::NodeNotFound,
            Self::DisjointSet { .. } => NetworkErrorCode::DisjointSet,
        }
    }
}

impl From<ElementOutOfRange> for NetworkError {
    fn from(error: ElementOutOfRange) -> Self {
        Self::DisjointSet { error }
    }
}

/// Machine-readable error codes for [`NetworkError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NetworkErrorCode {
    /// The builder was given a negative node count.
    NegativeNodeCount,
    /// A label passed to `connect` or `query` is not a node of the network.
    NodeNotFound,
    /// The disjoint-set rejected a translated element index.
    DisjointSet,
}

impl NetworkErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NegativeNodeCount => "NEGATIVE_NODE_COUNT",
            Self::NodeNotFound => "NODE_NOT_FOUND",
            Self::DisjointSet => "DISJOINT_SET_ELEMENT",
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, NetworkError>;
