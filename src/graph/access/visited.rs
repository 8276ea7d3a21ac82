//! Visited markers for graph traversals.
//!
//! Both engines run their traversals against the same `VisitedSet`, so the
//! visited logic lives in one place regardless of storage layout.

/// A dense per-vertex visited marker array.
///
/// Sized to the graph's vertex count. A set is single-use: call
/// [`clear`](Self::clear) before handing it to another traversal, otherwise
/// vertices marked by the previous run are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedSet {
    flags: Vec<bool>,
    marked: usize,
}

impl VisitedSet {
    /// Creates a cleared set for `len` vertices.
    pub fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
            marked: 0,
        }
    }

    /// Number of vertices the set covers.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns `true` if the set covers no vertices.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Number of vertices currently marked.
    #[inline(always)]
    pub fn marked(&self) -> usize {
        self.marked
    }

    /// Unmarks every vertex.
    #[inline]
    pub fn clear(&mut self) {
        self.flags.fill(false);
        self.marked = 0;
    }

    /// Returns `true` iff `node` was not yet visited, marking it visited.
    ///
    /// Out-of-range nodes are never visited.
    #[inline(always)]
    pub fn try_visit(&mut self, node: usize) -> bool {
        match self.flags.get_mut(node) {
            Some(flag) if !*flag => {
                *flag = true;
                self.marked += 1;
                true
            }
            _ => false,
        }
    }

    /// Returns whether `node` is marked.
    #[inline(always)]
    pub fn is_visited(&self, node: usize) -> bool {
        self.flags.get(node).copied().unwrap_or(false)
    }
}
