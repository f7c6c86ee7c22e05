// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Core algorithm trait and common utilities.

use arbor_common::{Graph, Result};

/// Core trait for all graph algorithms.
pub trait Algorithm {
    /// Algorithm parameters.
    type Config: Default + Clone + Send + 'static;
    /// Result type.
    type Output;

    /// Algorithm identifier.
    fn name() -> &'static str;

    /// Execute algorithm on a graph.
    fn run(graph: &Graph, config: Self::Config) -> Result<Self::Output>;
}

mod shortest_paths;
pub use shortest_paths::ShortestPaths;

mod components;
pub use components::{ComponentsConfig, ComponentsResult, ConnectedComponents, connected_components};

mod dijkstra;
pub use dijkstra::{Dijkstra, DijkstraConfig, dijkstra};

mod bellman_ford;
pub use bellman_ford::{BellmanFord, BellmanFordConfig, bellman_ford};

mod floyd_warshall;
pub use floyd_warshall::{FloydWarshall, FloydWarshallConfig, FloydWarshallResult, floyd_warshall};

mod mst;
pub use mst::{Kruskal, KruskalConfig, MstResult, Prim, PrimConfig, kruskal, prim};

mod topological_sort;
pub use topological_sort::{
    TopologicalSort, TopologicalSortConfig, TopologicalSortResult, topological_sort,
};
