// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Topological Sort Algorithm.
//!
//! Uses Kahn's algorithm to produce a linear ordering of vertices such that
//! for every directed edge from u to v, vertex u comes before v in the ordering.
//!
//! If the graph contains a cycle, the topological sort is not possible and
//! `has_cycle` will be true.

use crate::algo::algorithms::Algorithm;
use arbor_common::{ArborError, Graph, Result, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, instrument};

pub struct TopologicalSort;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopologicalSortConfig {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologicalSortResult {
    /// Empty when a cycle exists
    pub order: Vec<VertexId>,
    pub has_cycle: bool,
}

impl Algorithm for TopologicalSort {
    type Config = TopologicalSortConfig;
    type Output = TopologicalSortResult;

    fn name() -> &'static str {
        "topological_sort"
    }

    #[instrument(skip_all, fields(vertices = graph.vertex_count()))]
    fn run(graph: &Graph, _config: Self::Config) -> Result<Self::Output> {
        if !graph.is_directed() {
            return Err(ArborError::invalid_argument(
                "graph",
                "topological sort requires a directed graph",
            ));
        }

        let n = graph.vertex_count();

        let mut in_degree = vec![0u32; n];
        for v in graph.vertices() {
            for (neighbor, _) in graph.neighbors_unchecked(v) {
                in_degree[neighbor as usize] += 1;
            }
        }

        let mut queue: VecDeque<VertexId> = graph
            .vertices()
            .filter(|&v| in_degree[v as usize] == 0)
            .collect();

        let mut order = Vec::with_capacity(n);
        while let Some(u) = queue.pop_front() {
            order.push(u);

            for (v, _) in graph.neighbors_unchecked(u) {
                in_degree[v as usize] -= 1;
                if in_degree[v as usize] == 0 {
                    queue.push_back(v);
                }
            }
        }

        let has_cycle = order.len() != n;
        if has_cycle {
            order.clear();
        }

        debug!(has_cycle, "topological sort complete");
        Ok(TopologicalSortResult { order, has_cycle })
    }
}

/// Topological order of a directed graph.
pub fn topological_sort(graph: &Graph) -> Result<TopologicalSortResult> {
    TopologicalSort::run(graph, TopologicalSortConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::build_unweighted_graph;

    #[test]
    fn test_topological_sort_dag() {
        // 0 -> 1 -> 2, 0 -> 3 -> 2
        let graph = build_unweighted_graph(4, true, &[(0, 1), (1, 2), (0, 3), (3, 2)]);
        let result = topological_sort(&graph).unwrap();

        assert!(!result.has_cycle);
        assert_eq!(result.order, vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_topological_sort_cycle() {
        // 0 -> 1 -> 0
        let graph = build_unweighted_graph(3, true, &[(0, 1), (1, 0), (1, 2)]);
        let result = topological_sort(&graph).unwrap();

        assert!(result.has_cycle);
        assert!(result.order.is_empty());
    }

    #[test]
    fn test_topological_sort_self_loop_is_cycle() {
        let graph = build_unweighted_graph(1, true, &[(0, 0)]);
        assert!(topological_sort(&graph).unwrap().has_cycle);
    }

    #[test]
    fn test_topological_sort_requires_directed() {
        let graph = build_unweighted_graph(2, false, &[(0, 1)]);
        assert!(matches!(
            topological_sort(&graph),
            Err(ArborError::InvalidArgument { .. })
        ));
    }
}
