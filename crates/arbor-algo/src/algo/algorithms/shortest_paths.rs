// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::algo::traversal::{Path, reconstruct_path};
use arbor_common::VertexId;
use serde::{Deserialize, Serialize};

/// Single-source shortest path output shared by Dijkstra and Bellman-Ford.
///
/// `distances[v]` is `f64::INFINITY` for unreached vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPaths {
    pub source: VertexId,
    pub distances: Vec<f64>,
    pub parents: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    pub(crate) fn new(source: VertexId, vertex_count: usize) -> Self {
        let mut distances = vec![f64::INFINITY; vertex_count];
        distances[source as usize] = 0.0;
        Self {
            source,
            distances,
            parents: vec![None; vertex_count],
        }
    }

    /// Distance to `v`, `None` if unreached or out of range.
    pub fn distance(&self, v: VertexId) -> Option<f64> {
        self.distances
            .get(v as usize)
            .copied()
            .filter(|d| d.is_finite())
    }

    pub fn is_reachable(&self, v: VertexId) -> bool {
        self.distance(v).is_some()
    }

    /// Reached vertices with their distances, in index order.
    pub fn reachable(&self) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_finite())
            .map(|(v, &d)| (v as VertexId, d))
    }

    /// Shortest path from `source` to `target`.
    pub fn path_to(&self, target: VertexId) -> Option<Path> {
        if !self.is_reachable(target) {
            return None;
        }
        reconstruct_path(&self.parents, self.source, target)
    }
}
