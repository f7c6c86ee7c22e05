// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Depth-first and breadth-first traversal with path reconstruction.

use arbor_common::{Graph, Neighbors, Result, VertexId};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Outcome of a single-source traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    pub start: VertexId,
    /// Vertices in visitation order
    pub order: Vec<VertexId>,
    /// Tree parent of each visited vertex (`None` for `start` and unvisited)
    pub parents: Vec<Option<VertexId>>,
    /// Depth in the traversal tree. For BFS this is the minimum hop count.
    pub depths: Vec<Option<u32>>,
}

impl Traversal {
    fn new(start: VertexId, vertex_count: usize) -> Self {
        let mut depths = vec![None; vertex_count];
        depths[start as usize] = Some(0);
        Self {
            start,
            order: vec![start],
            parents: vec![None; vertex_count],
            depths,
        }
    }

    /// Result of traversing a graph with no vertices.
    fn empty(start: VertexId) -> Self {
        Self {
            start,
            order: Vec::new(),
            parents: Vec::new(),
            depths: Vec::new(),
        }
    }

    #[inline]
    pub fn is_visited(&self, v: VertexId) -> bool {
        self.depths.get(v as usize).is_some_and(Option::is_some)
    }

    /// Hop count from `start` recorded for `v`, `None` if unvisited.
    #[inline]
    pub fn distance(&self, v: VertexId) -> Option<u32> {
        self.depths.get(v as usize).copied().flatten()
    }

    /// Tree path from `start` to `target`, `None` if `target` was not reached.
    pub fn path_to(&self, target: VertexId) -> Option<Path> {
        if !self.is_visited(target) {
            return None;
        }
        reconstruct_path(&self.parents, self.start, target)
    }
}

/// Path representation for traversal and shortest path results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    /// Vertices in the path (source to target)
    pub vertices: Vec<VertexId>,
}

impl Path {
    /// Length of the path (number of edges)
    pub fn len(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Whether the path is empty (source == target)
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn source(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    pub fn target(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }
}

/// Walk a parent map back from `target` to `source`.
///
/// Bails out after `parents.len()` steps so a malformed map cannot loop.
pub(crate) fn reconstruct_path(
    parents: &[Option<VertexId>],
    source: VertexId,
    target: VertexId,
) -> Option<Path> {
    let mut vertices = vec![target];
    let mut current = target;
    while current != source {
        current = parents.get(current as usize).copied().flatten()?;
        vertices.push(current);
        if vertices.len() > parents.len() {
            return None;
        }
    }
    vertices.reverse();
    Some(Path { vertices })
}

/// Depth-first traversal from `start` using an explicit stack.
///
/// Neighbors are explored in insertion order, so the visitation order matches
/// the recursive formulation. A graph with no vertices yields an empty result.
#[instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn dfs(graph: &Graph, start: VertexId) -> Result<Traversal> {
    if graph.is_empty() {
        return Ok(Traversal::empty(start));
    }
    graph.check_vertex(start)?;

    let mut result = Traversal::new(start, graph.vertex_count());
    let mut stack: Vec<(VertexId, Neighbors<'_>)> = vec![(start, graph.neighbors_unchecked(start))];

    loop {
        let (u, next) = match stack.last_mut() {
            Some((u, neighbors)) => (*u, neighbors.next()),
            None => break,
        };

        match next {
            Some((v, _)) => {
                if result.is_visited(v) {
                    continue;
                }
                let depth = result.depths[u as usize].map_or(0, |d| d + 1);
                result.depths[v as usize] = Some(depth);
                result.parents[v as usize] = Some(u);
                result.order.push(v);
                stack.push((v, graph.neighbors_unchecked(v)));
            }
            None => {
                stack.pop();
            }
        }
    }

    debug!(visited = result.order.len(), "dfs complete");
    Ok(result)
}

/// Breadth-first traversal from `start`.
///
/// `distance(v)` is the minimum number of edges from `start`; edge weights
/// are ignored.
#[instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn bfs(graph: &Graph, start: VertexId) -> Result<Traversal> {
    if graph.is_empty() {
        return Ok(Traversal::empty(start));
    }
    graph.check_vertex(start)?;

    let mut result = Traversal::new(start, graph.vertex_count());
    let mut queue = VecDeque::from([start]);

    while let Some(u) = queue.pop_front() {
        let next_depth = result.depths[u as usize].map_or(0, |d| d + 1);
        for (v, _) in graph.neighbors_unchecked(u) {
            if result.is_visited(v) {
                continue;
            }
            result.depths[v as usize] = Some(next_depth);
            result.parents[v as usize] = Some(u);
            result.order.push(v);
            queue.push_back(v);
        }
    }

    debug!(visited = result.order.len(), "bfs complete");
    Ok(result)
}

/// BFS iterator yielding `(vertex, depth)` pairs lazily.
pub struct BfsIterator<'a> {
    graph: &'a Graph,
    frontier: VecDeque<(VertexId, u32)>,
    visited: Vec<bool>,
}

impl<'a> BfsIterator<'a> {
    /// Yields nothing on a graph with no vertices.
    pub fn new(graph: &'a Graph, start: VertexId) -> Result<Self> {
        if graph.is_empty() {
            return Ok(Self {
                graph,
                frontier: VecDeque::new(),
                visited: Vec::new(),
            });
        }
        graph.check_vertex(start)?;

        let mut visited = vec![false; graph.vertex_count()];
        visited[start as usize] = true;

        Ok(Self {
            graph,
            frontier: VecDeque::from([(start, 0)]),
            visited,
        })
    }
}

impl Iterator for BfsIterator<'_> {
    type Item = (VertexId, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let (current, depth) = self.frontier.pop_front()?;

        // Enqueue neighbors
        for (neighbor, _) in self.graph.neighbors_unchecked(current) {
            if !self.visited[neighbor as usize] {
                self.visited[neighbor as usize] = true;
                self.frontier.push_back((neighbor, depth + 1));
            }
        }

        Some((current, depth))
    }
}
