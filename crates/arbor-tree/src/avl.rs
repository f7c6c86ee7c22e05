// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! AVL tree: an ordered key set kept height-balanced by rotations.
//!
//! Every node satisfies `|height(left) - height(right)| <= 1`, so the height is
//! at most ~1.44 log2(n + 2) and every recursive call below is bounded by it.
//! Children are exclusively owned through `Box`, no parent pointers.
//!
//! Duplicate keys are rejected: inserting a key that is already present leaves
//! the tree untouched and returns `false`.

use arbor_common::{ArborError, Result};
use std::cmp::Ordering;
use std::fmt;
use tracing::trace;

type Link<K> = Option<Box<Node<K>>>;

#[derive(Clone)]
struct Node<K> {
    key: K,
    /// Height of the subtree rooted here; a leaf has height 1
    height: u32,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn leaf(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            height: 1,
            left: None,
            right: None,
        })
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    fn balance_factor(&self) -> i64 {
        height(&self.left) as i64 - height(&self.right) as i64
    }
}

#[inline]
fn height<K>(link: &Link<K>) -> u32 {
    link.as_ref().map_or(0, |n| n.height)
}

/// Ordered set of keys backed by an AVL tree.
#[derive(Clone)]
pub struct AvlTree<K> {
    root: Link<K>,
    len: usize,
    rotations: u64,
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
            rotations: 0,
        }
    }
}

impl<K: Ord> AvlTree<K> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree; 0 when empty.
    #[inline]
    pub fn height(&self) -> u32 {
        height(&self.root)
    }

    /// Total rotations performed since construction.
    #[inline]
    pub fn rotation_count(&self) -> u64 {
        self.rotations
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Insert `key`. Returns false, leaving the tree unchanged, if it is
    /// already present.
    pub fn insert(&mut self, key: K) -> bool {
        let mut inserted = false;
        let root = self.root.take();
        self.root = Some(insert_at(root, key, &mut inserted, &mut self.rotations));
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Remove `key` and return it. Fails with `NotFound` if absent.
    pub fn remove(&mut self, key: &K) -> Result<K> {
        let mut removed = None;
        let root = self.root.take();
        self.root = remove_at(root, key, &mut removed, &mut self.rotations);
        match removed {
            Some(k) => {
                self.len -= 1;
                Ok(k)
            }
            None => Err(ArborError::NotFound),
        }
    }

    /// Stored key equal to `key`, if any. O(log n).
    pub fn get(&self, key: &K) -> Option<&K> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.key),
            };
        }
        None
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    pub fn min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    pub fn max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// In-order iterator over the keys.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left(self.root.as_deref());
        iter
    }

    /// Verify ordering, cached heights, balance and length.
    ///
    /// O(n); meant for tests and debugging.
    pub fn check_invariants(&self) -> bool {
        let mut count = 0;
        let valid = check_subtree(&self.root, None, None, &mut count).is_some();
        valid && count == self.len
    }
}

/// Returns the real height of the subtree, or `None` if any invariant fails.
fn check_subtree<K: Ord>(
    link: &Link<K>,
    lower: Option<&K>,
    upper: Option<&K>,
    count: &mut usize,
) -> Option<u32> {
    let Some(node) = link else {
        return Some(0);
    };

    if lower.is_some_and(|lo| node.key <= *lo) || upper.is_some_and(|hi| node.key >= *hi) {
        return None;
    }
    *count += 1;

    let lh = check_subtree(&node.left, lower, Some(&node.key), count)?;
    let rh = check_subtree(&node.right, Some(&node.key), upper, count)?;
    let h = 1 + lh.max(rh);
    if lh.abs_diff(rh) > 1 || node.height != h {
        return None;
    }
    Some(h)
}

fn rotate_right<K>(mut node: Box<Node<K>>, rotations: &mut u64) -> Box<Node<K>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();

    *rotations += 1;
    trace!(direction = "right", "avl rotation");
    pivot
}

fn rotate_left<K>(mut node: Box<Node<K>>, rotations: &mut u64) -> Box<Node<K>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();

    *rotations += 1;
    trace!(direction = "left", "avl rotation");
    pivot
}

/// Restore the balance invariant at `node`, assuming both subtrees satisfy it.
fn rebalance<K>(mut node: Box<Node<K>>, rotations: &mut u64) -> Box<Node<K>> {
    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        // Left-right case
        if let Some(left) = node.left.take() {
            node.left = Some(if left.balance_factor() < 0 {
                rotate_left(left, rotations)
            } else {
                left
            });
        }
        return rotate_right(node, rotations);
    }

    if balance < -1 {
        // Right-left case
        if let Some(right) = node.right.take() {
            node.right = Some(if right.balance_factor() > 0 {
                rotate_right(right, rotations)
            } else {
                right
            });
        }
        return rotate_left(node, rotations);
    }

    node
}

fn insert_at<K: Ord>(
    link: Link<K>,
    key: K,
    inserted: &mut bool,
    rotations: &mut u64,
) -> Box<Node<K>> {
    let Some(mut node) = link else {
        *inserted = true;
        return Node::leaf(key);
    };

    match key.cmp(&node.key) {
        Ordering::Less => {
            node.left = Some(insert_at(node.left.take(), key, inserted, rotations));
        }
        Ordering::Greater => {
            node.right = Some(insert_at(node.right.take(), key, inserted, rotations));
        }
        Ordering::Equal => return node,
    }

    rebalance(node, rotations)
}

fn remove_at<K: Ord>(
    link: Link<K>,
    key: &K,
    removed: &mut Option<K>,
    rotations: &mut u64,
) -> Link<K> {
    let mut node = link?;

    match key.cmp(&node.key) {
        Ordering::Less => {
            node.left = remove_at(node.left.take(), key, removed, rotations);
        }
        Ordering::Greater => {
            node.right = remove_at(node.right.take(), key, removed, rotations);
        }
        Ordering::Equal => {
            let Node {
                key: found,
                left,
                right,
                ..
            } = *node;

            match (left, right) {
                (None, None) => {
                    *removed = Some(found);
                    return None;
                }
                (Some(child), None) | (None, Some(child)) => {
                    *removed = Some(found);
                    return Some(child);
                }
                (Some(left), Some(right)) => {
                    // Replace with the in-order successor
                    let (right, successor) = take_min(right, rotations);
                    *removed = Some(found);
                    node = Box::new(Node {
                        key: successor,
                        height: 0,
                        left: Some(left),
                        right,
                    });
                }
            }
        }
    }

    Some(rebalance(node, rotations))
}

/// Detach the minimum key of the subtree, returning the rebalanced remainder.
fn take_min<K>(mut node: Box<Node<K>>, rotations: &mut u64) -> (Link<K>, K) {
    match node.left.take() {
        None => {
            let Node { key, right, .. } = *node;
            (right, key)
        }
        Some(left) => {
            let (left, min) = take_min(left, rotations);
            node.left = left;
            (Some(rebalance(node, rotations)), min)
        }
    }
}

/// In-order iterator over an [`AvlTree`].
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn push_left(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<'a, K: Ord> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for AvlTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord + fmt::Debug> fmt::Debug for AvlTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
