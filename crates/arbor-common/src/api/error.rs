// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ArborError {
    /// Malformed construction parameters or an algorithm precondition that does
    /// not hold for the given graph (e.g. Kruskal on a directed graph).
    #[error("Argument '{arg}' is invalid: {message}")]
    InvalidArgument { arg: String, message: String },

    /// Vertex index outside `[0, vertex_count)`.
    #[error("Vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    OutOfRange { vertex: u64, vertex_count: usize },

    /// Edge weight rejected by the graph store or by an algorithm that forbids it.
    #[error("Edge ({src}, {dst}) has invalid weight {weight}")]
    InvalidWeight { src: u32, dst: u32, weight: f64 },

    /// A negative cycle is reachable from `start`; distances are meaningless.
    #[error("Negative cycle reachable from vertex {start}")]
    NegativeCycleDetected { start: u32 },

    #[error("Key not found")]
    NotFound,
}

impl ArborError {
    pub fn invalid_argument(arg: impl Into<String>, message: impl Into<String>) -> Self {
        ArborError::InvalidArgument {
            arg: arg.into(),
            message: message.into(),
        }
    }

    pub fn out_of_range(vertex: impl Into<u64>, vertex_count: usize) -> Self {
        ArborError::OutOfRange {
            vertex: vertex.into(),
            vertex_count,
        }
    }
}

pub type Result<T> = std::result::Result<T, ArborError>;
