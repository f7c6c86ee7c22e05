// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Connected Components Algorithm.
//!
//! Launches a breadth-first search from every vertex not yet assigned to a
//! component, in index order; each launch discovers one component. Directed
//! graphs are treated as undirected (weakly connected components).

use crate::algo::algorithms::Algorithm;
use arbor_common::{Graph, Result, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, instrument};

pub struct ConnectedComponents;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentsConfig {
    /// Drop components smaller than this from `components`
    pub min_component_size: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentsResult {
    /// Component id of every vertex, ids numbered in discovery order
    pub component_of: Vec<u32>,
    /// Members of each component in visitation order, after size filtering
    pub components: Vec<Vec<VertexId>>,
    /// Number of components before filtering
    pub component_count: usize,
}

impl ComponentsResult {
    pub fn same_component(&self, a: VertexId, b: VertexId) -> bool {
        match (
            self.component_of.get(a as usize),
            self.component_of.get(b as usize),
        ) {
            (Some(ca), Some(cb)) => ca == cb,
            _ => false,
        }
    }
}

/// Reverse adjacency for directed graphs so weak connectivity can be walked.
fn reverse_adjacency(graph: &Graph) -> Vec<Vec<VertexId>> {
    let mut incoming = vec![Vec::new(); graph.vertex_count()];
    for u in graph.vertices() {
        for (v, _) in graph.neighbors_unchecked(u) {
            incoming[v as usize].push(u);
        }
    }
    incoming
}

impl Algorithm for ConnectedComponents {
    type Config = ComponentsConfig;
    type Output = ComponentsResult;

    fn name() -> &'static str {
        "connected_components"
    }

    #[instrument(skip(graph), fields(vertices = graph.vertex_count()))]
    fn run(graph: &Graph, config: Self::Config) -> Result<Self::Output> {
        let n = graph.vertex_count();
        let incoming = if graph.is_directed() {
            reverse_adjacency(graph)
        } else {
            Vec::new()
        };

        let mut assigned: Vec<Option<u32>> = vec![None; n];
        let mut components = Vec::new();
        let mut queue = VecDeque::new();

        for root in graph.vertices() {
            if assigned[root as usize].is_some() {
                continue;
            }

            let id = components.len() as u32;
            let mut members = vec![root];
            assigned[root as usize] = Some(id);
            queue.push_back(root);

            while let Some(u) = queue.pop_front() {
                let reverse = incoming.get(u as usize).into_iter().flatten().copied();
                for v in graph.neighbors_unchecked(u).map(|(v, _)| v).chain(reverse) {
                    if assigned[v as usize].is_none() {
                        assigned[v as usize] = Some(id);
                        members.push(v);
                        queue.push_back(v);
                    }
                }
            }

            components.push(members);
        }

        // Every vertex was reached by some launch
        let component_of: Vec<u32> = assigned.into_iter().flatten().collect();
        let component_count = components.len();

        // Filter by min size if specified
        if let Some(min_size) = config.min_component_size {
            components.retain(|members| members.len() >= min_size);
        }

        debug!(component_count, "connected components complete");
        Ok(ComponentsResult {
            component_of,
            components,
            component_count,
        })
    }
}

/// Connected components with default configuration.
pub fn connected_components(graph: &Graph) -> Result<ComponentsResult> {
    ConnectedComponents::run(graph, ComponentsConfig::default())
}
