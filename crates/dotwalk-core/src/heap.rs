//! Array-backed indexed binary min-heap.
//!
//! Backs Dijkstra's algorithm: each entry's live position is tracked through
//! a stable [`Handle`], so an external key improvement can be repaired in
//! O(log n) with a decrease-key instead of a full rebuild.

use crate::error::{Result, WalkError};

/// Stable identifier of a heap entry, assigned at build time in input
/// order. Callers hold the handle and use it to request key fix-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handle(pub usize);

#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
    handle: Handle,
}

/// A min-priority queue over (key, value) entries.
///
/// The queue owns a private backing array: extracted entries remain
/// physically present beyond `len` but are inert. For every non-root live
/// index the parent's key is no greater than the child's, and every live
/// entry's recorded position equals its true array index.
#[derive(Debug)]
pub struct IndexedMinHeap<K, V> {
    entries: Vec<Entry<K, V>>,
    /// handle id -> physical index in `entries`
    pos: Vec<usize>,
    len: usize,
}

impl<K: Ord + Clone, V: Clone> IndexedMinHeap<K, V> {
    /// Build a heap from (key, value) pairs with a bottom-up heapify, O(n).
    /// The i-th input pair is addressable as `Handle(i)` afterwards.
    pub fn build(items: Vec<(K, V)>) -> Self {
        let len = items.len();
        let entries = items
            .into_iter()
            .enumerate()
            .map(|(i, (key, value))| Entry {
                key,
                value,
                handle: Handle(i),
            })
            .collect();
        let mut heap = IndexedMinHeap {
            entries,
            pos: (0..len).collect(),
            len,
        };
        for i in (0..len / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn peek(&self) -> Option<(&K, &V)> {
        if self.len == 0 {
            return None;
        }
        let root = &self.entries[0];
        Some((&root.key, &root.value))
    }

    /// Whether the entry behind `handle` is still live in the queue.
    pub fn is_resident(&self, handle: Handle) -> bool {
        self.position(handle).is_some()
    }

    /// Current live position of an entry, if it has not been extracted.
    pub fn position(&self, handle: Handle) -> Option<usize> {
        self.pos
            .get(handle.0)
            .copied()
            .filter(|&i| i < self.len)
    }

    /// Remove and return the minimum entry.
    ///
    /// The last live entry moves to the root and sifts down; the extracted
    /// entry stays in the backing array beyond the live bound.
    pub fn extract_min(&mut self) -> Result<(K, V)> {
        if self.len == 0 {
            return Err(WalkError::EmptyQueue);
        }
        self.swap(0, self.len - 1);
        self.len -= 1;
        if self.len > 0 {
            self.sift_down(0);
        }
        let extracted = &self.entries[self.len];
        Ok((extracted.key.clone(), extracted.value.clone()))
    }

    /// Lower the key of a live entry and float it toward the root.
    ///
    /// The caller must ensure the entry is resident (`is_resident`) and that
    /// the new key is no greater than the current one.
    pub fn decrease_key(&mut self, handle: Handle, key: K) {
        let Some(i) = self.position(handle) else {
            return;
        };
        debug_assert!(key <= self.entries[i].key);
        self.entries[i].key = key;
        self.float(i);
    }

    /// Non-destructive sorted view of the live entries, for inspection and
    /// rendering; not on the algorithmic hot path.
    pub fn sorted(&self) -> Vec<(K, V)> {
        let mut live: Vec<(K, V)> = self.entries[..self.len]
            .iter()
            .map(|e| (e.key.clone(), e.value.clone()))
            .collect();
        live.sort_by(|a, b| a.0.cmp(&b.0));
        live
    }

    /// Float the entry at index `i` up while it is smaller than its parent.
    fn float(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.entries[i].key < self.entries[parent].key {
                self.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    /// Restore heap order rooted at `i` by swapping with the smaller child
    /// until local order holds or a leaf is reached.
    fn sift_down(&mut self, mut i: usize) {
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;
            if left < self.len && self.entries[left].key < self.entries[smallest].key {
                smallest = left;
            }
            if right < self.len && self.entries[right].key < self.entries[smallest].key {
                smallest = right;
            }
            if smallest == i {
                return;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.pos[self.entries[a].handle.0] = a;
        self.pos[self.entries[b].handle.0] = b;
    }
}
