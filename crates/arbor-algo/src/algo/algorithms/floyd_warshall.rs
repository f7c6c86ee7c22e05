// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Floyd-Warshall All Pairs Shortest Path Algorithm.
//!
//! O(V^3) time, O(V^2) space. Handles negative weights. Pairs whose shortest
//! path can be made arbitrarily short by a negative cycle are reported as
//! `f64::NEG_INFINITY` and `has_negative_cycle` is set.

use crate::algo::algorithms::Algorithm;
use crate::algo::traversal::Path;
use arbor_common::{ArborConfig, ArborError, Graph, Result, VertexId};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

pub struct FloydWarshall;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FloydWarshallConfig {
    /// Worker threads available; 1 disables the parallel kernel
    pub parallelism: usize,
    /// Vertex count at which rows are relaxed in parallel
    pub parallel_threshold: usize,
    /// Larger graphs are rejected with `InvalidArgument`
    pub max_vertices: usize,
}

impl Default for FloydWarshallConfig {
    fn default() -> Self {
        Self::from(&ArborConfig::default())
    }
}

impl From<&ArborConfig> for FloydWarshallConfig {
    fn from(config: &ArborConfig) -> Self {
        Self {
            parallelism: config.parallelism,
            parallel_threshold: config.parallel_threshold,
            max_vertices: config.max_dense_vertices,
        }
    }
}

impl FloydWarshallConfig {
    fn use_parallel(&self, vertex_count: usize) -> bool {
        self.parallelism > 1 && vertex_count >= self.parallel_threshold
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloydWarshallResult {
    /// `distances[i][j]`: `INFINITY` if unreachable, `NEG_INFINITY` if unbounded
    pub distances: Vec<Vec<f64>>,
    /// `next[i][j]`: first hop on a shortest path from `i` to `j`
    pub next: Vec<Vec<Option<VertexId>>>,
    pub has_negative_cycle: bool,
}

impl FloydWarshallResult {
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Distance from `i` to `j`. `None` when out of range.
    pub fn distance(&self, i: VertexId, j: VertexId) -> Option<f64> {
        self.distances.get(i as usize)?.get(j as usize).copied()
    }

    /// Shortest path from `i` to `j`, `None` if unreachable or unbounded.
    pub fn path(&self, i: VertexId, j: VertexId) -> Option<Path> {
        let d = self.distance(i, j)?;
        if !d.is_finite() {
            return None;
        }

        let mut vertices = vec![i];
        let mut current = i;
        while current != j {
            current = self.next[current as usize][j as usize]?;
            vertices.push(current);
            if vertices.len() > self.vertex_count() {
                return None;
            }
        }
        Some(Path { vertices })
    }
}

/// Relax one row through intermediate `k` using a snapshot of row `k`.
#[inline]
fn relax_row(
    k: usize,
    row: &mut [f64],
    next_row: &mut [Option<VertexId>],
    row_k: &[f64],
) {
    let d_ik = row[k];
    if d_ik == f64::INFINITY {
        return;
    }
    let hop = next_row[k];
    for ((d_ij, next_ij), &d_kj) in row.iter_mut().zip(next_row.iter_mut()).zip(row_k) {
        let candidate = d_ik + d_kj;
        if candidate < *d_ij {
            *d_ij = candidate;
            *next_ij = hop;
        }
    }
}

impl Algorithm for FloydWarshall {
    type Config = FloydWarshallConfig;
    type Output = FloydWarshallResult;

    fn name() -> &'static str {
        "floyd_warshall"
    }

    #[instrument(skip(graph, config), fields(vertices = graph.vertex_count()))]
    fn run(graph: &Graph, config: Self::Config) -> Result<Self::Output> {
        let n = graph.vertex_count();
        if n > config.max_vertices {
            return Err(ArborError::invalid_argument(
                "graph",
                format!(
                    "{} vertices exceeds the all-pairs limit of {}",
                    n, config.max_vertices
                ),
            ));
        }

        let mut dist = vec![vec![f64::INFINITY; n]; n];
        let mut next: Vec<Vec<Option<VertexId>>> = vec![vec![None; n]; n];

        for i in 0..n {
            dist[i][i] = 0.0;
            next[i][i] = Some(i as VertexId);
        }
        for u in graph.vertices() {
            for (v, weight) in graph.neighbors_unchecked(u) {
                // Parallel edges keep the lightest
                if weight < dist[u as usize][v as usize] {
                    dist[u as usize][v as usize] = weight;
                    next[u as usize][v as usize] = Some(v);
                }
            }
        }

        let parallel = config.use_parallel(n);
        for k in 0..n {
            // Row k does not change during iteration k unless k sits on a
            // negative cycle, which is flagged below anyway.
            let row_k = dist[k].clone();
            if parallel {
                dist.par_iter_mut()
                    .zip(next.par_iter_mut())
                    .for_each(|(row, next_row)| relax_row(k, row, next_row, &row_k));
            } else {
                for (row, next_row) in dist.iter_mut().zip(next.iter_mut()) {
                    relax_row(k, row, next_row, &row_k);
                }
            }
        }

        // Any pair routed through a vertex on a negative cycle is unbounded
        let on_cycle: Vec<usize> = (0..n).filter(|&k| dist[k][k] < 0.0).collect();
        let has_negative_cycle = !on_cycle.is_empty();
        if has_negative_cycle {
            warn!(
                cycle_vertices = on_cycle.len(),
                "negative cycle detected, affected pairs set to -inf"
            );
            for &k in &on_cycle {
                for i in 0..n {
                    if dist[i][k] == f64::INFINITY {
                        continue;
                    }
                    for j in 0..n {
                        if dist[k][j] != f64::INFINITY {
                            dist[i][j] = f64::NEG_INFINITY;
                            next[i][j] = None;
                        }
                    }
                }
            }
        }

        debug!(parallel, has_negative_cycle, "floyd-warshall complete");
        Ok(FloydWarshallResult {
            distances: dist,
            next,
            has_negative_cycle,
        })
    }
}

/// All-pairs shortest paths with default configuration.
pub fn floyd_warshall(graph: &Graph) -> Result<FloydWarshallResult> {
    FloydWarshall::run(graph, FloydWarshallConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::{build_test_graph, diamond_graph};

    #[test]
    fn test_floyd_warshall_diamond() {
        let graph = diamond_graph();
        let result = floyd_warshall(&graph).unwrap();

        assert!(!result.has_negative_cycle);
        assert_eq!(result.distances[0], vec![0.0, 3.0, 1.0, 8.0]);
        assert_eq!(result.distance(3, 2), Some(7.0));
        assert_eq!(result.path(0, 3).unwrap().vertices, vec![0, 2, 1, 3]);
        assert_eq!(result.path(2, 2).unwrap().vertices, vec![2]);

        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(result.distance(i, j), result.distance(j, i));
            }
        }
    }

    #[test]
    fn test_floyd_warshall_directed_unreachable() {
        let graph = build_test_graph(3, true, &[(0, 1, 2.0), (1, 2, 3.0)]);
        let result = floyd_warshall(&graph).unwrap();

        assert_eq!(result.distance(0, 2), Some(5.0));
        assert_eq!(result.distance(2, 0), Some(f64::INFINITY));
        assert!(result.path(2, 0).is_none());
        assert_eq!(result.distance(5, 0), None);
    }

    #[test]
    fn test_floyd_warshall_negative_weights() {
        let graph = build_test_graph(
            4,
            true,
            &[(0, 1, 4.0), (0, 2, 5.0), (2, 1, -3.0), (1, 3, 2.0)],
        );
        let result = floyd_warshall(&graph).unwrap();

        assert!(!result.has_negative_cycle);
        assert_eq!(result.distances[0], vec![0.0, 2.0, 5.0, 4.0]);
    }

    #[test]
    fn test_floyd_warshall_flags_negative_cycle() {
        // 0 -> 1 -> 2 -> 1 (negative loop), 3 isolated
        let graph = build_test_graph(
            4,
            true,
            &[(0, 1, 1.0), (1, 2, -1.0), (2, 1, -1.0)],
        );
        let result = floyd_warshall(&graph).unwrap();

        assert!(result.has_negative_cycle);
        assert_eq!(result.distance(0, 2), Some(f64::NEG_INFINITY));
        assert_eq!(result.distance(1, 1), Some(f64::NEG_INFINITY));
        assert!(result.path(0, 2).is_none());
        // Unaffected pairs keep their values
        assert_eq!(result.distance(3, 3), Some(0.0));
        assert_eq!(result.distance(1, 0), Some(f64::INFINITY));
    }

    #[test]
    fn test_floyd_warshall_parallel_matches_sequential() {
        let mut edges = Vec::new();
        for i in 0..40u32 {
            edges.push((i, (i * 7 + 3) % 40, (i % 5) as f64 + 1.0));
            edges.push((i, (i + 1) % 40, 10.0));
        }
        let graph = build_test_graph(40, true, &edges);

        let sequential = FloydWarshall::run(
            &graph,
            FloydWarshallConfig {
                parallelism: 1,
                parallel_threshold: 1,
                max_vertices: 100,
            },
        )
        .unwrap();
        let parallel = FloydWarshall::run(
            &graph,
            FloydWarshallConfig {
                parallelism: 4,
                parallel_threshold: 1,
                max_vertices: 100,
            },
        )
        .unwrap();

        assert_eq!(sequential.distances, parallel.distances);
    }

    #[test]
    fn test_floyd_warshall_rejects_oversized_graph() {
        let graph = build_test_graph(10, false, &[]);
        let config = FloydWarshallConfig {
            max_vertices: 5,
            ..Default::default()
        };
        assert!(matches!(
            FloydWarshall::run(&graph, config),
            Err(ArborError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_floyd_warshall_empty_graph() {
        let graph = build_test_graph(0, false, &[]);
        let result = floyd_warshall(&graph).unwrap();
        assert_eq!(result.vertex_count(), 0);
    }
}
