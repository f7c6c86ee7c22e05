// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod api {
    pub mod error;
}

pub mod config;

pub mod graph {
    pub mod adjacency_graph;
    pub mod id_map;
}

// Re-exports for convenience
pub use api::error::{ArborError, Result};
pub use config::ArborConfig;
pub use graph::adjacency_graph::{Edge, Graph, Neighbors, VertexId};
pub use graph::id_map::IdMap;
