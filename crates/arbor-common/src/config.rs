// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use serde::{Deserialize, Serialize};
use std::thread;

/// Global knobs shared by the algorithm crates.
///
/// Per-algorithm settings live on each algorithm's own config struct; those
/// structs take their defaults from here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArborConfig {
    /// Number of worker threads available to parallel kernels
    pub parallelism: usize,

    /// Vertex count at which dense kernels (Floyd-Warshall) switch to
    /// row-parallel execution (default: 256)
    pub parallel_threshold: usize,

    /// Largest vertex count accepted by O(V^2) memory algorithms (default: 8192)
    pub max_dense_vertices: usize,
}

impl Default for ArborConfig {
    fn default() -> Self {
        let parallelism = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);

        Self {
            parallelism,
            parallel_threshold: 256,
            max_dense_vertices: 8192, // 8192^2 * 8 bytes = 512MB
        }
    }
}
