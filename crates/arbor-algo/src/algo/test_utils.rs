// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use arbor_common::{Graph, VertexId};

pub fn build_test_graph(
    vertex_count: usize,
    directed: bool,
    edges: &[(VertexId, VertexId, f64)],
) -> Graph {
    Graph::from_edges(vertex_count, directed, edges.iter().copied())
        .expect("test edges must be valid")
}

pub fn build_unweighted_graph(
    vertex_count: usize,
    directed: bool,
    edges: &[(VertexId, VertexId)],
) -> Graph {
    Graph::from_edges(
        vertex_count,
        directed,
        edges.iter().map(|&(src, dst)| (src, dst, 1.0)),
    )
    .expect("test edges must be valid")
}

/// The four-vertex weighted graph used across shortest path and MST tests:
/// (0,1,4) (0,2,1) (1,2,2) (1,3,5) (2,3,8), undirected.
pub fn diamond_graph() -> Graph {
    build_test_graph(
        4,
        false,
        &[(0, 1, 4.0), (0, 2, 1.0), (1, 2, 2.0), (1, 3, 5.0), (2, 3, 8.0)],
    )
}
