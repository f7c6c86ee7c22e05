// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph builder over caller-defined vertex keys.
//!
//! Algorithms work on dense indices. `GraphBuilder` collects vertices and edges
//! named by arbitrary keys, assigns dense slots in first-seen order and
//! materializes a [`Graph`] alongside the [`IdMap`] needed to translate results
//! back.

use arbor_common::{ArborError, Graph, IdMap, Result, VertexId};
use std::hash::Hash;
use tracing::debug;

/// Builder for constructing a [`LabeledGraph`].
///
/// # Example
///
/// ```
/// use arbor_algo::{GraphBuilder, dijkstra};
///
/// let labeled = GraphBuilder::new()
///     .edge("a", "b", 4.0)
///     .edge("b", "c", 1.0)
///     .vertex("isolated")
///     .build()?;
///
/// let paths = dijkstra(&labeled.graph, labeled.slot(&"a")?)?;
/// assert_eq!(paths.distance(labeled.slot(&"c")?), Some(5.0));
/// # Ok::<(), arbor_common::ArborError>(())
/// ```
#[must_use = "builders do nothing until .build() is called"]
pub struct GraphBuilder<K> {
    directed: bool,
    ids: IdMap<K>,
    edges: Vec<(VertexId, VertexId, f64)>,
}

impl<K: Hash + Eq + Clone> GraphBuilder<K> {
    /// Create a builder for an undirected graph.
    pub fn new() -> Self {
        Self {
            directed: false,
            ids: IdMap::new(),
            edges: Vec::new(),
        }
    }

    /// Build a directed graph instead.
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Register a vertex that may have no edges.
    pub fn vertex(mut self, key: K) -> Self {
        self.ids.insert(key);
        self
    }

    pub fn edge(mut self, src: K, dst: K, weight: f64) -> Self {
        let u = self.ids.insert(src);
        let v = self.ids.insert(dst);
        self.edges.push((u, v, weight));
        self
    }

    /// Add an edge with weight 1.
    pub fn unweighted_edge(self, src: K, dst: K) -> Self {
        self.edge(src, dst, 1.0)
    }

    /// Build the graph.
    pub fn build(self) -> Result<LabeledGraph<K>> {
        let graph = Graph::from_edges(self.ids.len(), self.directed, self.edges)?;
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "labeled graph built"
        );
        Ok(LabeledGraph {
            graph,
            ids: self.ids,
        })
    }
}

impl<K: Hash + Eq + Clone> Default for GraphBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// A graph together with the key mapping of its vertices.
#[derive(Debug, Clone)]
pub struct LabeledGraph<K> {
    pub graph: Graph,
    pub ids: IdMap<K>,
}

impl<K: Hash + Eq + Clone> LabeledGraph<K> {
    /// Slot of `key`, `NotFound` if the key was never added.
    pub fn slot(&self, key: &K) -> Result<VertexId> {
        self.ids.to_slot(key).ok_or(ArborError::NotFound)
    }

    pub fn key(&self, slot: VertexId) -> Option<&K> {
        self.ids.to_key(slot)
    }

    /// Translate a sequence of slots back to keys, skipping unknown slots.
    pub fn keys<'a>(&'a self, slots: &'a [VertexId]) -> impl Iterator<Item = &'a K> + 'a {
        slots.iter().filter_map(|&slot| self.ids.to_key(slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::algorithms::kruskal;
    use crate::algo::traversal::bfs;

    #[test]
    fn test_build_assigns_slots_in_first_seen_order() {
        let labeled = GraphBuilder::new()
            .edge("B", "A", 1.0)
            .edge("A", "C", 2.0)
            .build()
            .unwrap();

        assert_eq!(labeled.slot(&"B").unwrap(), 0);
        assert_eq!(labeled.slot(&"A").unwrap(), 1);
        assert_eq!(labeled.slot(&"C").unwrap(), 2);
        assert_eq!(labeled.key(2), Some(&"C"));
        assert_eq!(labeled.slot(&"Z"), Err(ArborError::NotFound));
        assert_eq!(labeled.graph.edge_count(), 2);
        assert!(!labeled.graph.is_directed());
    }

    #[test]
    fn test_labeled_traversal() {
        let labeled = GraphBuilder::new()
            .directed(true)
            .unweighted_edge("home", "work")
            .unweighted_edge("work", "gym")
            .vertex("beach")
            .build()
            .unwrap();

        let start = labeled.slot(&"home").unwrap();
        let traversal = bfs(&labeled.graph, start).unwrap();
        let visited: Vec<_> = labeled.keys(&traversal.order).copied().collect();

        assert_eq!(visited, vec!["home", "work", "gym"]);
        assert_eq!(labeled.graph.vertex_count(), 4);
    }

    #[test]
    fn test_labeled_mst() {
        let labeled = GraphBuilder::new()
            .edge("x", "y", 3.0)
            .edge("y", "z", 1.0)
            .edge("x", "z", 2.0)
            .build()
            .unwrap();

        let mst = kruskal(&labeled.graph).unwrap();
        assert_eq!(mst.total_weight, 3.0);
    }

    #[test]
    fn test_build_rejects_invalid_weight() {
        let result = GraphBuilder::new().edge(1u32, 2u32, f64::NAN).build();
        assert!(matches!(result, Err(ArborError::InvalidWeight { .. })));
    }
}
