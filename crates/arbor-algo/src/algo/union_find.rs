// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Disjoint-set (Union-Find) over dense indices.
//!
//! Path halving in `find` plus union by rank gives amortized near-O(1)
//! operations. When ranks are equal the lower index becomes the root, so the
//! representative of a set only depends on which unions happened.

use arbor_common::{ArborError, Result, VertexId};
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<VertexId>,
    rank: Vec<u8>,
    sets: usize,
}

impl UnionFind {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n as VertexId).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    #[inline]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    fn check(&self, x: VertexId) -> Result<()> {
        if (x as usize) < self.parent.len() {
            Ok(())
        } else {
            Err(ArborError::out_of_range(x, self.parent.len()))
        }
    }

    /// Representative of the set containing `x`.
    ///
    /// `OutOfRange` if `x >= len()`.
    pub fn find(&mut self, x: VertexId) -> Result<VertexId> {
        self.check(x)?;
        Ok(self.find_unchecked(x))
    }

    /// Merges the sets of `a` and `b`. Returns false if they were already joined.
    pub fn union(&mut self, a: VertexId, b: VertexId) -> Result<bool> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.union_unchecked(a, b))
    }

    pub fn connected(&mut self, a: VertexId, b: VertexId) -> Result<bool> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.find_unchecked(a) == self.find_unchecked(b))
    }

    /// Panics if `x >= len()`.
    pub(crate) fn find_unchecked(&mut self, mut x: VertexId) -> VertexId {
        while self.parent[x as usize] != x {
            let grandparent = self.parent[self.parent[x as usize] as usize];
            self.parent[x as usize] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Panics if either index is `>= len()`.
    pub(crate) fn union_unchecked(&mut self, a: VertexId, b: VertexId) -> bool {
        let ra = self.find_unchecked(a);
        let rb = self.find_unchecked(b);
        if ra == rb {
            return false;
        }

        match self.rank[ra as usize].cmp(&self.rank[rb as usize]) {
            Ordering::Less => self.parent[ra as usize] = rb,
            Ordering::Greater => self.parent[rb as usize] = ra,
            Ordering::Equal => {
                let (root, child) = if ra < rb { (ra, rb) } else { (rb, ra) };
                self.parent[child as usize] = root;
                self.rank[root as usize] += 1;
            }
        }
        self.sets -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut uf = UnionFind::new(4);
        assert_eq!(uf.set_count(), 4);
        for x in 0..4 {
            assert_eq!(uf.find(x).unwrap(), x);
        }
    }

    #[test]
    fn test_union_and_connected() {
        let mut uf = UnionFind::new(5);
        assert!(uf.union(0, 1).unwrap());
        assert!(uf.union(3, 4).unwrap());
        assert!(!uf.union(1, 0).unwrap());

        assert!(uf.connected(0, 1).unwrap());
        assert!(uf.connected(4, 3).unwrap());
        assert!(!uf.connected(1, 3).unwrap());
        assert_eq!(uf.set_count(), 3);

        assert!(uf.union(1, 4).unwrap());
        assert!(uf.connected(0, 3).unwrap());
        assert_eq!(uf.set_count(), 2);
    }

    #[test]
    fn test_equal_rank_prefers_lower_root() {
        let mut uf = UnionFind::new(3);
        uf.union(2, 1).unwrap();
        assert_eq!(uf.find(2).unwrap(), 1);
    }

    #[test]
    fn test_find_is_idempotent_on_long_chain() {
        let mut uf = UnionFind::new(64);
        for i in 0..63 {
            uf.union(i, i + 1).unwrap();
        }
        for x in 0..64 {
            let root = uf.find(x).unwrap();
            assert_eq!(uf.find(root).unwrap(), root);
        }
        assert_eq!(uf.set_count(), 1);
    }

    #[test]
    fn test_out_of_range_is_an_error() {
        let mut uf = UnionFind::new(3);
        assert_eq!(
            uf.find(5),
            Err(ArborError::OutOfRange {
                vertex: 5,
                vertex_count: 3
            })
        );
        assert!(matches!(uf.union(0, 3), Err(ArborError::OutOfRange { .. })));
        assert!(matches!(uf.connected(7, 0), Err(ArborError::OutOfRange { .. })));
        // Failed calls leave the sets untouched
        assert_eq!(uf.set_count(), 3);

        let mut empty = UnionFind::new(0);
        assert!(empty.find(0).is_err());
    }
}
