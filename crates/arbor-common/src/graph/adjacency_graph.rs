// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Adjacency list graph over dense vertex indices.
//!
//! Complexity:
//! - O(1) neighbor iteration start, O(degree) full iteration
//! - O(degree(src)) `has_edge` / `weight` lookup
//! - O(degree(src) + degree(dst)) edge removal
//!
//! Undirected graphs materialize every edge in both endpoint lists so neighbor
//! iteration is uniform. Each stored entry remembers the insertion sequence of
//! its logical edge, which lets `edges()` report logical edges in insertion order.

use crate::api::error::{ArborError, Result};
use serde::{Deserialize, Serialize};

/// Dense vertex index in `[0, vertex_count)`.
pub type VertexId = u32;

/// A logical edge as supplied by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub src: VertexId,
    pub dst: VertexId,
    pub weight: f64,
}

impl Edge {
    pub fn new(src: VertexId, dst: VertexId, weight: f64) -> Self {
        Self { src, dst, weight }
    }
}

/// Edge entry stored in an adjacency list.
#[derive(Clone, Copy, Debug)]
struct EdgeEntry {
    dst: VertexId,
    weight: f64,
    /// Insertion sequence of the logical edge this entry belongs to
    seq: u64,
    /// True for the reverse copy of an undirected edge
    mirrored: bool,
}

/// Weighted graph with a fixed vertex count.
#[derive(Clone, Debug)]
pub struct Graph {
    directed: bool,
    adjacency: Vec<Vec<EdgeEntry>>,
    /// Number of logical edges
    edge_count: usize,
    next_seq: u64,
}

impl Graph {
    /// Creates an empty graph with `vertex_count` vertices.
    ///
    /// Fails with `InvalidArgument` if the count does not fit a `VertexId`.
    pub fn new(vertex_count: usize, directed: bool) -> Result<Self> {
        if vertex_count > VertexId::MAX as usize {
            return Err(ArborError::invalid_argument(
                "vertex_count",
                format!(
                    "{} exceeds the maximum of {} vertices",
                    vertex_count,
                    VertexId::MAX
                ),
            ));
        }

        Ok(Self {
            directed,
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
            next_seq: 0,
        })
    }

    /// Creates a graph and inserts `edges` in order.
    pub fn from_edges<I>(vertex_count: usize, directed: bool, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (VertexId, VertexId, f64)>,
    {
        let mut graph = Self::new(vertex_count, directed)?;
        for (src, dst, weight) in edges {
            graph.add_edge(src, dst, weight)?;
        }
        Ok(graph)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of logical edges (an undirected edge counts once).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterate over all vertex indices.
    pub fn vertices(&self) -> std::ops::Range<VertexId> {
        0..self.adjacency.len() as VertexId
    }

    /// Fails with `OutOfRange` unless `v < vertex_count`.
    #[inline]
    pub fn check_vertex(&self, v: VertexId) -> Result<()> {
        if (v as usize) < self.adjacency.len() {
            Ok(())
        } else {
            Err(ArborError::out_of_range(v, self.adjacency.len()))
        }
    }

    /// Adds an edge. Undirected graphs also store the mirrored entry; an
    /// undirected self-loop is stored once.
    pub fn add_edge(&mut self, src: VertexId, dst: VertexId, weight: f64) -> Result<()> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;
        if !weight.is_finite() {
            return Err(ArborError::InvalidWeight { src, dst, weight });
        }

        let seq = self.next_seq;
        self.next_seq += 1;

        self.adjacency[src as usize].push(EdgeEntry {
            dst,
            weight,
            seq,
            mirrored: false,
        });
        if !self.directed && src != dst {
            self.adjacency[dst as usize].push(EdgeEntry {
                dst: src,
                weight,
                seq,
                mirrored: true,
            });
        }
        self.edge_count += 1;
        Ok(())
    }

    /// Adds an edge with weight 1.
    pub fn add_unweighted_edge(&mut self, src: VertexId, dst: VertexId) -> Result<()> {
        self.add_edge(src, dst, 1.0)
    }

    /// Removes every edge from `src` to `dst` (and its mirror when undirected).
    ///
    /// Returns the number of logical edges removed. Removing an absent edge is
    /// a no-op.
    pub fn remove_edge(&mut self, src: VertexId, dst: VertexId) -> Result<usize> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;

        let before = self.adjacency[src as usize].len();
        self.adjacency[src as usize].retain(|e| e.dst != dst);
        let removed = before - self.adjacency[src as usize].len();

        if !self.directed && src != dst {
            self.adjacency[dst as usize].retain(|e| e.dst != src);
        }

        self.edge_count -= removed;
        Ok(removed)
    }

    /// Lazy, restartable sequence of `(dst, weight)` pairs in insertion order.
    pub fn neighbors(&self, v: VertexId) -> Result<Neighbors<'_>> {
        self.check_vertex(v)?;
        Ok(self.neighbors_unchecked(v))
    }

    /// Neighbor iteration without the range check; panics if `v` is out of range.
    #[inline]
    pub fn neighbors_unchecked(&self, v: VertexId) -> Neighbors<'_> {
        Neighbors {
            inner: self.adjacency[v as usize].iter(),
        }
    }

    /// Number of stored adjacency entries of `v`.
    pub fn degree(&self, v: VertexId) -> Result<usize> {
        self.check_vertex(v)?;
        Ok(self.adjacency[v as usize].len())
    }

    pub fn has_edge(&self, src: VertexId, dst: VertexId) -> Result<bool> {
        Ok(self.weight(src, dst)?.is_some())
    }

    /// Weight of the first `src -> dst` edge, if any.
    pub fn weight(&self, src: VertexId, dst: VertexId) -> Result<Option<f64>> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;
        Ok(self.adjacency[src as usize]
            .iter()
            .find(|e| e.dst == dst)
            .map(|e| e.weight))
    }

    /// Logical edges in insertion order. Each undirected edge appears once,
    /// oriented as it was added.
    pub fn edges(&self) -> Vec<Edge> {
        self.sequenced_edges()
            .into_iter()
            .map(|(_, edge)| edge)
            .collect()
    }

    /// Like [`Graph::edges`] but also yields the insertion sequence number,
    /// used by algorithms that need deterministic tie-breaking.
    pub fn sequenced_edges(&self) -> Vec<(u64, Edge)> {
        let mut ordered = Vec::with_capacity(self.edge_count);
        for (src, list) in self.adjacency.iter().enumerate() {
            for entry in list.iter().filter(|e| !e.mirrored) {
                ordered.push((entry.seq, Edge::new(src as VertexId, entry.dst, entry.weight)));
            }
        }
        ordered.sort_unstable_by_key(|(seq, _)| *seq);
        ordered
    }

    /// Adjacency entries of `v` with their logical sequence numbers.
    ///
    /// Panics if `v` is out of range.
    pub fn sequenced_neighbors_unchecked(
        &self,
        v: VertexId,
    ) -> impl Iterator<Item = (VertexId, f64, u64)> + '_ {
        self.adjacency[v as usize]
            .iter()
            .map(|e| (e.dst, e.weight, e.seq))
    }
}

/// Iterator over `(dst, weight)` pairs of one vertex.
#[derive(Clone, Debug)]
pub struct Neighbors<'a> {
    inner: std::slice::Iter<'a, EdgeEntry>,
}

impl Iterator for Neighbors<'_> {
    type Item = (VertexId, f64);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (e.dst, e.weight))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}
