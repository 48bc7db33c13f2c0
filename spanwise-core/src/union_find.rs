//! Disjoint-set (union-find) structure backing cycle detection.
//!
//! Nodes are dense indices assigned by [`crate::Graph`]. `find` compresses
//! paths iteratively in two passes, so skewed trees never recurse, and
//! `union` merges by rank.

use crate::error::KruskalError;

/// A partition of `0..len` into disjoint components.
///
/// # Examples
/// ```
/// use spanwise_core::DisjointSet;
///
/// let mut set = DisjointSet::new(3);
/// assert!(set.union(0, 1)?);
/// assert!(!set.union(1, 0)?);
/// assert_eq!(set.components(), 2);
/// # Ok::<(), spanwise_core::KruskalError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
    components: usize,
}

impl DisjointSet {
    /// Creates `len` singleton components.
    #[must_use]
    pub fn new(len: usize) -> Self {
        let mut parent = Vec::with_capacity(len);
        let mut rank = Vec::with_capacity(len);
        for id in 0..len {
            parent.push(id);
            rank.push(0);
        }
        Self {
            parent,
            rank,
            components: len,
        }
    }

    /// Returns the number of tracked nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when no nodes are tracked.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the number of disjoint components.
    #[must_use]
    #[rustfmt::skip]
    pub fn components(&self) -> usize { self.components }

    /// Returns the current parent links, indexed by node.
    #[must_use]
    #[rustfmt::skip]
    pub fn parents(&self) -> &[usize] { &self.parent }

    /// Returns the rank recorded for `node`.
    ///
    /// # Errors
    /// Returns [`KruskalError::InvalidNodeId`] when `node` is out of range.
    pub fn rank(&self, node: usize) -> Result<u32, KruskalError> {
        self.rank
            .get(node)
            .copied()
            .ok_or_else(|| self.invalid(node))
    }

    /// Returns the representative of `node`'s component.
    ///
    /// Every node on the path to the root is rewired to point at the root.
    ///
    /// # Errors
    /// Returns [`KruskalError::InvalidNodeId`] when `node` is out of range.
    pub fn find(&mut self, node: usize) -> Result<usize, KruskalError> {
        let root = self.root_of(node)?;

        let mut current = node;
        while current != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        Ok(root)
    }

    /// Merges the components of `left` and `right`.
    ///
    /// Returns `false`, leaving the structure untouched, when both nodes are
    /// already connected. On equal ranks the root of `left` becomes the parent.
    ///
    /// # Errors
    /// Returns [`KruskalError::InvalidNodeId`] when either node is out of range.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool, KruskalError> {
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        let (parent, child) = choose_parent_child(left_root, right_root, left_rank, right_rank);

        self.parent[child] = parent;
        if left_rank == right_rank {
            self.rank[parent] = left_rank.saturating_add(1);
        }
        self.components = self.components.saturating_sub(1);
        Ok(true)
    }

    /// Returns `true` when `left` and `right` share a representative.
    ///
    /// # Errors
    /// Returns [`KruskalError::InvalidNodeId`] when either node is out of range.
    pub fn connected(&mut self, left: usize, right: usize) -> Result<bool, KruskalError> {
        Ok(self.find(left)? == self.find(right)?)
    }

    fn root_of(&self, node: usize) -> Result<usize, KruskalError> {
        let mut current = node;
        loop {
            let parent = *self.parent.get(current).ok_or_else(|| self.invalid(node))?;
            if parent == current {
                return Ok(current);
            }
            current = parent;
        }
    }

    fn invalid(&self, node: usize) -> KruskalError {
        KruskalError::InvalidNodeId {
            node,
            node_count: self.parent.len(),
        }
    }
}

fn choose_parent_child(
    left_root: usize,
    right_root: usize,
    left_rank: u32,
    right_rank: u32,
) -> (usize, usize) {
    if right_rank > left_rank {
        (right_root, left_root)
    } else {
        (left_root, right_root)
    }
}
