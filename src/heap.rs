/// Position-map sentinel for vertices that were popped or never pushed.
const ABSENT: usize = usize::MAX;

#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    vertex: usize,
    key: f64,
}

/// Binary min-heap over `(vertex, key)` pairs with a position map.
///
/// The map gives O(1) membership queries and O(log n) `decrease_key`, which
/// is what Prim needs: seed every vertex of interest once, then only ever
/// lower keys. Invariants: min-property on `key` over the live entries, and
/// `pos[entries[i].vertex] == i` for every live slot.
pub struct IndexedMinHeap {
    entries: Vec<HeapEntry>,
    pos: Vec<usize>,
}

impl IndexedMinHeap {
    /// Heap able to hold vertices `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            entries: Vec::with_capacity(capacity),
            pos: vec![ABSENT; capacity],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A vertex is in the heap iff its mapped slot is live.
    pub fn contains(&self, vertex: usize) -> bool {
        self.pos[vertex] < self.entries.len()
    }

    /// Seeds `vertex` with `key`. Each vertex may be pushed at most once;
    /// callers pre-populate the vertex set and adjust via `decrease_key`.
    pub fn push(&mut self, vertex: usize, key: f64) {
        debug_assert!(!self.contains(vertex), "vertex {vertex} pushed twice");
        let slot = self.entries.len();
        self.entries.push(HeapEntry { vertex, key });
        self.pos[vertex] = slot;
        self.sift_up(slot);
    }

    /// Removes and returns the minimum-key entry, or `None` when empty.
    pub fn extract_min(&mut self) -> Option<(usize, f64)> {
        let min = *self.entries.first()?;

        let last = self.entries.pop().expect("non-empty heap has a last entry");
        self.pos[min.vertex] = ABSENT;
        if !self.entries.is_empty() {
            self.entries[0] = last;
            self.pos[last.vertex] = 0;
            self.sift_down(0);
        }

        Some((min.vertex, min.key))
    }

    /// Lowers the key of a resident vertex and restores heap order.
    /// `new_key` must not exceed the current key.
    pub fn decrease_key(&mut self, vertex: usize, new_key: f64) {
        let slot = self.pos[vertex];
        debug_assert!(slot < self.entries.len(), "vertex {vertex} not in heap");
        debug_assert!(new_key <= self.entries[slot].key);

        self.entries[slot].key = new_key;
        self.sift_up(slot);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[slot].key >= self.entries[parent].key {
                break;
            }
            self.swap_slots(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;

            // strict comparisons keep the left child ahead on ties
            if left < self.entries.len() && self.entries[left].key < self.entries[smallest].key {
                smallest = left;
            }
            if right < self.entries.len() && self.entries[right].key < self.entries[smallest].key {
                smallest = right;
            }
            if smallest == slot {
                break;
            }

            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.pos[self.entries[a].vertex] = b;
        self.pos[self.entries[b].vertex] = a;
        self.entries.swap(a, b);
    }
}
