// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph Algorithm Engine
//!
//! Algorithms run against a borrowed [`Graph`](arbor_common::Graph) and
//! allocate their outputs fresh on every call; nothing is cached on the graph.
//!
//! - **Traversal**: DFS, BFS, lazy BFS iteration, path reconstruction.
//! - **Shortest paths**: Dijkstra, Bellman-Ford, Floyd-Warshall.
//! - **Spanning trees**: Kruskal (over [`UnionFind`]) and Prim.
//! - **Structure**: connected components, topological sort.
//!
//! # Example
//!
//! ```
//! use arbor_algo::{Algorithm, Dijkstra, DijkstraConfig};
//! use arbor_common::Graph;
//!
//! let graph = Graph::from_edges(3, false, vec![(0, 1, 2.0), (1, 2, 3.0)])?;
//! let paths = Dijkstra::run(&graph, DijkstraConfig { source: 0, ..Default::default() })?;
//! assert_eq!(paths.distance(2), Some(5.0));
//! # Ok::<(), arbor_common::ArborError>(())
//! ```

pub mod algorithms;
pub mod builder;
pub mod traversal;
pub mod union_find;

pub use union_find::UnionFind;

#[cfg(test)]
pub mod test_utils;
