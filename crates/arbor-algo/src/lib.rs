// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod algo;

pub use algo::algorithms::{
    Algorithm, BellmanFord, BellmanFordConfig, ConnectedComponents, ComponentsConfig,
    ComponentsResult, Dijkstra, DijkstraConfig, FloydWarshall, FloydWarshallConfig,
    FloydWarshallResult, Kruskal, KruskalConfig, MstResult, Prim, PrimConfig, ShortestPaths,
    TopologicalSort, TopologicalSortConfig, TopologicalSortResult,
};
pub use algo::algorithms::{
    bellman_ford, connected_components, dijkstra, floyd_warshall, kruskal, prim,
    topological_sort,
};
pub use algo::builder::{GraphBuilder, LabeledGraph};
pub use algo::traversal::{BfsIterator, Path, Traversal, bfs, dfs};
pub use algo::union_find::UnionFind;
