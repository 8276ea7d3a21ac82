//! `NodePool`: an index-addressed object pool with free-list slot reuse.
//!
//! Provides a single backing store for objects of type `T`, handing out plain
//! `usize` indices. Linked structures (the adjacency chains of
//! [`AdjacencyListGraph`](crate::graph::AdjacencyListGraph)) keep those indices
//! as their `next` pointers, so every node of every chain lives in one
//! contiguous vector instead of its own heap allocation.
//!
//! # Features
//! - **Free List Reuse**: freed slots are threaded into a LIFO free list and
//!   handed out again in O(1).
//! - **Checked Access**: `get`/`get_mut` return `None` for free or
//!   out-of-bounds slots; stale indices never alias live values silently.
//! - **No `unsafe`**: occupancy is encoded in the slot enum itself.

/// A slot in the pool.
#[derive(Debug, Clone)]
enum PoolSlot<T> {
    Occupied(T),
    Free { next_free: Option<usize> },
}

/// An index-addressed pool of `T`.
#[derive(Debug, Clone)]
pub struct NodePool<T> {
    storage: Vec<PoolSlot<T>>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> Default for NodePool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodePool<T> {
    /// Creates a new empty pool.
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    /// Creates a new pool with room for `capacity` values before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Number of occupied slots.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slot is occupied.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots ever created (occupied or free).
    #[inline(always)]
    pub fn slots(&self) -> usize {
        self.storage.len()
    }

    /// Stores `value` in the pool, returning its index.
    ///
    /// Reuses the most recently freed slot when one exists.
    #[inline]
    pub fn alloc(&mut self, value: T) -> usize {
        self.len += 1;

        if let Some(idx) = self.free_head {
            let slot = &mut self.storage[idx];
            if let PoolSlot::Free { next_free } = *slot {
                self.free_head = next_free;
            }
            *slot = PoolSlot::Occupied(value);
            idx
        } else {
            let idx = self.storage.len();
            self.storage.push(PoolSlot::Occupied(value));
            idx
        }
    }

    /// Frees the slot at `index` and returns its value.
    ///
    /// Returns `None` (and leaves the pool untouched) if the slot is already
    /// free or out of bounds.
    #[inline]
    pub fn take(&mut self, index: usize) -> Option<T> {
        let slot = self.storage.get_mut(index)?;
        if matches!(slot, PoolSlot::Free { .. }) {
            return None;
        }

        let freed = core::mem::replace(
            slot,
            PoolSlot::Free {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(index);
        self.len -= 1;

        match freed {
            PoolSlot::Occupied(value) => Some(value),
            PoolSlot::Free { .. } => None,
        }
    }

    /// Returns a shared reference to the value at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        match self.storage.get(index)? {
            PoolSlot::Occupied(value) => Some(value),
            PoolSlot::Free { .. } => None,
        }
    }

    /// Returns a mutable reference to the value at `index`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match self.storage.get_mut(index)? {
            PoolSlot::Occupied(value) => Some(value),
            PoolSlot::Free { .. } => None,
        }
    }

    /// Drops every value and forgets all slots.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.free_head = None;
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_and_get() {
        let mut pool = NodePool::new();
        let a = pool.alloc(10);
        let b = pool.alloc(20);

        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(a), Some(&10));
        assert_eq!(pool.get(b), Some(&20));
        assert_eq!(pool.get(7), None);
    }

    #[test]
    fn freed_slots_are_reused_lifo() {
        let mut pool = NodePool::with_capacity(4);
        let a = pool.alloc('a');
        let b = pool.alloc('b');
        let c = pool.alloc('c');

        assert_eq!(pool.take(a), Some('a'));
        assert_eq!(pool.take(c), Some('c'));
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.get(a), None);

        // Most recently freed first.
        assert_eq!(pool.alloc('x'), c);
        assert_eq!(pool.alloc('y'), a);
        assert_eq!(pool.slots(), 3);
        assert_eq!(pool.get(b), Some(&'b'));
    }

    #[test]
    fn double_take_is_rejected() {
        let mut pool = NodePool::new();
        let a = pool.alloc(1u8);
        assert_eq!(pool.take(a), Some(1));
        assert_eq!(pool.take(a), None);
        assert_eq!(pool.take(99), None);
        assert!(pool.is_empty());
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut pool = NodePool::new();
        let a = pool.alloc(String::from("left"));
        pool.get_mut(a).unwrap().push_str("-right");
        assert_eq!(pool.get(a).map(String::as_str), Some("left-right"));

        pool.clear();
        assert!(pool.is_empty());
        assert_eq!(pool.get(a), None);
    }
}
