// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Minimum Spanning Tree (MST) Algorithms.
//!
//! Kruskal's algorithm sorts logical edges by weight (stable over insertion
//! order, so ties resolve deterministically) and joins components through a
//! [`UnionFind`]. Prim's algorithm grows a single tree from a start vertex over
//! a priority queue of crossing edges.
//!
//! Both require an undirected graph. On a disconnected graph Kruskal returns a
//! minimum spanning forest and Prim spans only the component of its start
//! vertex; compare `edges.len()` with `V - 1` to detect either case.

use crate::algo::UnionFind;
use crate::algo::algorithms::Algorithm;
use arbor_common::{ArborError, Graph, Result, VertexId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MstResult {
    pub edges: Vec<(VertexId, VertexId, f64)>, // (u, v, weight)
    pub total_weight: f64,
}

impl MstResult {
    fn empty() -> Self {
        Self {
            edges: Vec::new(),
            total_weight: 0.0,
        }
    }

    fn push(&mut self, u: VertexId, v: VertexId, weight: f64) {
        self.edges.push((u, v, weight));
        self.total_weight += weight;
    }

    /// Whether the edges span all `vertex_count` vertices.
    pub fn is_spanning(&self, vertex_count: usize) -> bool {
        self.edges.len() + 1 == vertex_count.max(1)
    }
}

fn require_undirected(graph: &Graph, algorithm: &str) -> Result<()> {
    if graph.is_directed() {
        return Err(ArborError::invalid_argument(
            "graph",
            format!("{} requires an undirected graph", algorithm),
        ));
    }
    Ok(())
}

pub struct Kruskal;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KruskalConfig {}

impl Algorithm for Kruskal {
    type Config = KruskalConfig;
    type Output = MstResult;

    fn name() -> &'static str {
        "kruskal"
    }

    #[instrument(skip_all, fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
    fn run(graph: &Graph, _config: Self::Config) -> Result<Self::Output> {
        require_undirected(graph, Self::name())?;

        let n = graph.vertex_count();
        let mut result = MstResult::empty();
        if n == 0 {
            return Ok(result);
        }

        // Stable sort keeps insertion order among equal weights
        let mut edges = graph.edges();
        edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

        let mut sets = UnionFind::new(n);
        for edge in edges {
            if result.edges.len() == n - 1 {
                break;
            }
            if sets.union_unchecked(edge.src, edge.dst) {
                result.push(edge.src, edge.dst, edge.weight);
            }
        }

        debug!(
            tree_edges = result.edges.len(),
            total_weight = result.total_weight,
            "kruskal complete"
        );
        Ok(result)
    }
}

/// Minimum spanning tree (or forest) by Kruskal's algorithm.
pub fn kruskal(graph: &Graph) -> Result<MstResult> {
    Kruskal::run(graph, KruskalConfig::default())
}

pub struct Prim;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrimConfig {
    pub start: VertexId,
}

/// Edge leaving the current tree. Ordered so `BinaryHeap` pops the lightest
/// edge first, earliest inserted among equals.
#[derive(Debug, Clone, Copy)]
struct Crossing {
    weight: f64,
    seq: u64,
    from: VertexId,
    to: VertexId,
}

impl PartialEq for Crossing {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Crossing {}

impl PartialOrd for Crossing {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Crossing {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
            .then_with(|| other.to.cmp(&self.to))
    }
}

/// Mark `v` as part of the tree and queue its outgoing edges.
fn grow_tree(
    graph: &Graph,
    v: VertexId,
    in_tree: &mut [bool],
    heap: &mut BinaryHeap<Crossing>,
) {
    in_tree[v as usize] = true;
    for (to, weight, seq) in graph.sequenced_neighbors_unchecked(v) {
        if !in_tree[to as usize] {
            heap.push(Crossing {
                weight,
                seq,
                from: v,
                to,
            });
        }
    }
}

impl Algorithm for Prim {
    type Config = PrimConfig;
    type Output = MstResult;

    fn name() -> &'static str {
        "prim"
    }

    #[instrument(skip(graph), fields(vertices = graph.vertex_count()))]
    fn run(graph: &Graph, config: Self::Config) -> Result<Self::Output> {
        require_undirected(graph, Self::name())?;
        graph.check_vertex(config.start)?;

        let mut in_tree = vec![false; graph.vertex_count()];
        let mut heap = BinaryHeap::new();
        let mut result = MstResult::empty();

        grow_tree(graph, config.start, &mut in_tree, &mut heap);
        while let Some(crossing) = heap.pop() {
            if in_tree[crossing.to as usize] {
                continue;
            }
            result.push(crossing.from, crossing.to, crossing.weight);
            grow_tree(graph, crossing.to, &mut in_tree, &mut heap);
        }

        debug!(
            tree_edges = result.edges.len(),
            total_weight = result.total_weight,
            "prim complete"
        );
        Ok(result)
    }
}

/// Minimum spanning tree of the component containing `start` by Prim's algorithm.
pub fn prim(graph: &Graph, start: VertexId) -> Result<MstResult> {
    Prim::run(graph, PrimConfig { start })
}
