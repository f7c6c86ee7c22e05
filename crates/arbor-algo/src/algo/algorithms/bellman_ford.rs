// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Bellman-Ford Algorithm.
//!
//! Computes shortest paths from a source node to all other nodes in a weighted graph.
//! Unlike Dijkstra, it handles negative edge weights.
//! Detects negative cycles reachable from the source.
//!
//! On an undirected graph every negative edge is itself a negative cycle
//! (u -> v -> u), so such graphs always fail when the edge is reachable.

use crate::algo::algorithms::{Algorithm, ShortestPaths};
use arbor_common::{ArborError, Graph, Result, VertexId};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

pub struct BellmanFord;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BellmanFordConfig {
    pub source: VertexId,
}

impl Algorithm for BellmanFord {
    type Config = BellmanFordConfig;
    type Output = ShortestPaths;

    fn name() -> &'static str {
        "bellman_ford"
    }

    #[instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
    fn run(graph: &Graph, config: Self::Config) -> Result<Self::Output> {
        let source = config.source;
        graph.check_vertex(source)?;

        let n = graph.vertex_count();
        let mut paths = ShortestPaths::new(source, n);

        // Relax V-1 times
        let mut rounds = 0usize;
        for _ in 1..n {
            rounds += 1;
            let mut changed = false;
            for u in graph.vertices() {
                let dist_u = paths.distances[u as usize];
                if dist_u == f64::INFINITY {
                    continue;
                }

                for (v, weight) in graph.neighbors_unchecked(u) {
                    if dist_u + weight < paths.distances[v as usize] {
                        paths.distances[v as usize] = dist_u + weight;
                        paths.parents[v as usize] = Some(u);
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }

        // Check for negative cycles
        for u in graph.vertices() {
            let dist_u = paths.distances[u as usize];
            if dist_u == f64::INFINITY {
                continue;
            }
            for (v, weight) in graph.neighbors_unchecked(u) {
                if dist_u + weight < paths.distances[v as usize] {
                    warn!(source, edge_src = u, edge_dst = v, "negative cycle detected");
                    return Err(ArborError::NegativeCycleDetected { start: source });
                }
            }
        }

        debug!(rounds, "bellman-ford complete");
        Ok(paths)
    }
}

/// Single-source shortest paths from `source`, tolerating negative weights.
pub fn bellman_ford(graph: &Graph, source: VertexId) -> Result<ShortestPaths> {
    BellmanFord::run(graph, BellmanFordConfig { source })
}
