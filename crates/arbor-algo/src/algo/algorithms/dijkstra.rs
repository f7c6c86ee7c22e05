// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Dijkstra's Shortest Path Algorithm.

use crate::algo::algorithms::{Algorithm, ShortestPaths};
use arbor_common::{ArborError, Graph, Result, VertexId};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::{debug, instrument};

pub struct Dijkstra;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DijkstraConfig {
    pub source: VertexId,
    /// Stop as soon as this vertex is settled. Only the target's distance is
    /// final in that case; other entries are upper bounds.
    pub target: Option<VertexId>,
    /// Do not record distances beyond this bound.
    pub max_distance: Option<f64>,
}

impl Algorithm for Dijkstra {
    type Config = DijkstraConfig;
    type Output = ShortestPaths;

    fn name() -> &'static str {
        "dijkstra"
    }

    /// Fails with `InvalidWeight` when a negative edge reachable from the
    /// source is examined.
    #[instrument(skip(graph), fields(vertices = graph.vertex_count()))]
    fn run(graph: &Graph, config: Self::Config) -> Result<Self::Output> {
        let source = config.source;
        graph.check_vertex(source)?;
        if let Some(target) = config.target {
            graph.check_vertex(target)?;
        }

        let mut paths = ShortestPaths::new(source, graph.vertex_count());
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((0.0f64.to_bits(), source)));

        // Non-negative finite f64 bit patterns order the same as their values
        let mut settled = 0usize;
        while let Some(Reverse((d_bits, u))) = heap.pop() {
            let d = f64::from_bits(d_bits);
            if d > paths.distances[u as usize] {
                continue;
            }
            settled += 1;

            // Early exit for point-to-point
            if config.target == Some(u) {
                break;
            }

            for (v, weight) in graph.neighbors_unchecked(u) {
                if weight < 0.0 {
                    return Err(ArborError::InvalidWeight {
                        src: u,
                        dst: v,
                        weight,
                    });
                }

                let new_dist = d + weight;
                if let Some(max_d) = config.max_distance
                    && new_dist > max_d
                {
                    continue;
                }

                if new_dist < paths.distances[v as usize] {
                    paths.distances[v as usize] = new_dist;
                    paths.parents[v as usize] = Some(u);
                    heap.push(Reverse((new_dist.to_bits(), v)));
                }
            }
        }

        debug!(settled, "dijkstra complete");
        Ok(paths)
    }
}

/// Single-source shortest paths from `source` over non-negative weights.
pub fn dijkstra(graph: &Graph, source: VertexId) -> Result<ShortestPaths> {
    Dijkstra::run(
        graph,
        DijkstraConfig {
            source,
            ..Default::default()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::{build_test_graph, diamond_graph};

    #[test]
    fn test_dijkstra_diamond() {
        let graph = diamond_graph();
        let paths = dijkstra(&graph, 0).unwrap();

        assert_eq!(paths.distances, vec![0.0, 3.0, 1.0, 8.0]);
        assert_eq!(paths.path_to(3).unwrap().vertices, vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_dijkstra_unreachable() {
        let graph = build_test_graph(3, true, &[(0, 1, 2.0)]);
        let paths = dijkstra(&graph, 0).unwrap();

        assert_eq!(paths.distance(1), Some(2.0));
        assert_eq!(paths.distance(2), None);
        assert!(paths.distances[2].is_infinite());
        assert_eq!(paths.parents[2], None);
    }

    #[test]
    fn test_dijkstra_rejects_negative_weight() {
        let graph = build_test_graph(3, true, &[(0, 1, 1.0), (1, 2, -2.0)]);
        let err = dijkstra(&graph, 0).unwrap_err();
        assert_eq!(
            err,
            ArborError::InvalidWeight {
                src: 1,
                dst: 2,
                weight: -2.0
            }
        );
    }

    #[test]
    fn test_dijkstra_ignores_unreachable_negative_weight() {
        let graph = build_test_graph(4, true, &[(0, 1, 1.0), (2, 3, -5.0)]);
        let paths = dijkstra(&graph, 0).unwrap();
        assert_eq!(paths.distance(1), Some(1.0));
    }

    #[test]
    fn test_dijkstra_target_early_exit() {
        let graph = build_test_graph(4, true, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)]);
        let config = DijkstraConfig {
            source: 0,
            target: Some(1),
            max_distance: None,
        };
        let paths = Dijkstra::run(&graph, config).unwrap();

        assert_eq!(paths.distance(1), Some(1.0));
        assert_eq!(paths.distance(3), None);
    }

    #[test]
    fn test_dijkstra_max_distance() {
        let graph = build_test_graph(4, true, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)]);
        let config = DijkstraConfig {
            source: 0,
            target: None,
            max_distance: Some(2.0),
        };
        let paths = Dijkstra::run(&graph, config).unwrap();

        assert_eq!(paths.distance(2), Some(2.0));
        assert_eq!(paths.distance(3), None);
    }

    #[test]
    fn test_dijkstra_source_out_of_range() {
        let graph = build_test_graph(2, false, &[(0, 1, 1.0)]);
        assert!(matches!(
            dijkstra(&graph, 3),
            Err(ArborError::OutOfRange { vertex: 3, .. })
        ));
    }
}
