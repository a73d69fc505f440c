//! Support library for the warren benchmarks.
//!
//! Generates seeded random workloads so the BFS and union-find engines are
//! measured against identical graphs.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use warren_core::{EngineStrategy, Network, NetworkBuilder};

/// A reproducible workload: a node count, the edges to connect, and the
/// pairs to query.
#[derive(Clone, Debug)]
pub struct ConnectPlan {
    /// Number of nodes in the network.
    pub node_count: i64,
    /// Edges applied before or during measurement, in order.
    pub edges: Vec<(i64, i64)>,
    /// Query pairs issued during measurement.
    pub probes: Vec<(i64, i64)>,
}

impl ConnectPlan {
    /// Generates a plan over `node_count` nodes with `edge_count` random
    /// edges and `probe_count` random query pairs.
    #[must_use]
    pub fn random(seed: u64, node_count: i64, edge_count: usize, probe_count: usize) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let pair =
            |rng: &mut SmallRng| (rng.gen_range(1..=node_count), rng.gen_range(1..=node_count));
        let edges = (0..edge_count).map(|_| pair(&mut rng)).collect();
        let probes = (0..probe_count).map(|_| pair(&mut rng)).collect();
        Self {
            node_count,
            edges,
            probes,
        }
    }

    /// Builds a network with the given engine and applies every edge.
    ///
    /// # Panics
    /// Panics if the plan was constructed with out-of-range labels; plans
    /// from [`Self::random`] never are.
    #[must_use]
    pub fn build(&self, strategy: EngineStrategy) -> Box<dyn Network> {
        let mut network = NetworkBuilder::new()
            .with_node_count(self.node_count)
            .with_engine_strategy(strategy)
            .build()
            .expect("plan node counts are non-negative");
        for &(src, dest) in &self.edges {
            network.connect(src, dest).expect("plan edges are in range");
        }
        network
    }
}
