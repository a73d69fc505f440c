use warren_core::{EngineStrategy, Network, NetworkBuilder};

/// The two concrete engines, for tests that run against both.
pub const ENGINES: [EngineStrategy; 2] =
    [EngineStrategy::BreadthFirst, EngineStrategy::UnionFind];

/// Builds a network with the given engine, panicking on invalid counts.
pub fn build_network(strategy: EngineStrategy, node_count: i64) -> Box<dyn Network> {
    NetworkBuilder::new()
        .with_node_count(node_count)
        .with_engine_strategy(strategy)
        .build()
        .expect("node count must be non-negative")
}
