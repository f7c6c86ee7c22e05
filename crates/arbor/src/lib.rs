// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! # Arbor - Graph and Balanced-Tree Algorithms
//!
//! Arbor is an in-memory toolkit of classic graph algorithms (traversal,
//! shortest paths, spanning trees, connectivity) over a dense adjacency-list
//! graph, plus a self-balancing AVL tree.
//!
//! ```
//! use arbor::{Graph, dijkstra, kruskal};
//!
//! let graph = Graph::from_edges(
//!     4,
//!     false,
//!     [(0, 1, 4.0), (0, 2, 1.0), (1, 2, 2.0), (1, 3, 5.0), (2, 3, 8.0)],
//! )?;
//!
//! let paths = dijkstra(&graph, 0)?;
//! assert_eq!(paths.distance(3), Some(8.0));
//! assert_eq!(kruskal(&graph)?.total_weight, 8.0);
//! # Ok::<(), arbor::ArborError>(())
//! ```

pub use arbor_common::{ArborConfig, ArborError, Edge, Graph, IdMap, Neighbors, Result, VertexId};

pub use arbor_algo::{
    Algorithm, BellmanFord, BellmanFordConfig, BfsIterator, ComponentsConfig, ComponentsResult,
    ConnectedComponents, Dijkstra, DijkstraConfig, FloydWarshall, FloydWarshallConfig,
    FloydWarshallResult, GraphBuilder, Kruskal, KruskalConfig, LabeledGraph, MstResult, Path,
    Prim, PrimConfig, ShortestPaths, TopologicalSort, TopologicalSortConfig,
    TopologicalSortResult, Traversal, UnionFind,
};
pub use arbor_algo::{
    bellman_ford, bfs, connected_components, dfs, dijkstra, floyd_warshall, kruskal, prim,
    topological_sort,
};

pub use arbor_tree::AvlTree;

// Re-export crates
pub use arbor_algo as algo;
pub use arbor_common as common;
pub use arbor_tree as tree;
