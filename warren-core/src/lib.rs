//! Fixed-size undirected networks with interchangeable reachability engines.
//!
//! A network is a set of nodes labeled `[1, N]` supporting two operations:
//! connecting two nodes with an edge, and querying whether two nodes can
//! reach one another through any path of edges. Two engines implement the
//! same [`Network`] contract with different cost profiles: [`BfsNetwork`]
//! walks insertion-ordered adjacency sets breadth-first on every query,
//! while [`UnionFindNetwork`] merges disjoint sets on connect and compares
//! set representatives on query. [`NetworkBuilder`] selects between them at
//! construction time.

mod bfs;
mod builder;
mod error;
mod network;
mod union_find;

pub use crate::{
    bfs::BfsNetwork,
    builder::{EngineStrategy, NetworkBuilder},
    error::{ElementOutOfRange, NetworkError, NetworkErrorCode, Result},
    network::Network,
    union_find::UnionFindNetwork,
};
