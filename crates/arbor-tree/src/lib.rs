// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Balanced ordered-set structures for Arbor.

pub mod avl;

pub use avl::{AvlTree, Iter};
