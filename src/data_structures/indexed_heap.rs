use std::fmt::Debug;

/// Errors raised by misuse of an [`IndexedMinHeap`]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    #[error("Heap is full (capacity {0})")]
    CapacityExceeded(usize),

    #[error("Item already present in heap: {0}")]
    DuplicateItem(usize),

    #[error("Item {item} is outside the heap's id range 0..{capacity}")]
    ItemOutOfRange { item: usize, capacity: usize },
}

/// An item together with its current priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry<P> {
    pub item: usize,
    pub priority: P,
}

impl<P> HeapEntry<P> {
    pub fn new(item: usize, priority: P) -> Self {
        HeapEntry { item, priority }
    }
}

/// Binary min-heap over dense integer items with decrease-key and delete by item.
///
/// Every item's slot in the heap array is tracked in `position`, so callers can
/// change an item's priority or remove it without knowing where it lives.
/// Items must be smaller than the capacity given at construction.
///
/// When two children tie during sift-down the left one is taken, which only
/// affects the order in which equal-priority items come out.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<P>
where
    P: Ord + Copy + Debug,
{
    /// Heap-ordered entries, root at index 0
    entries: Vec<HeapEntry<P>>,

    /// item -> index in `entries`
    position: Vec<Option<usize>>,
}

impl<P> IndexedMinHeap<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates an empty heap able to hold items `0..capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            entries: Vec::with_capacity(capacity),
            position: vec![None; capacity],
        }
    }

    /// Resets the heap to empty with room for items `0..capacity`, reusing storage
    pub fn initialize(&mut self, capacity: usize) {
        self.entries.clear();
        self.entries.reserve(capacity);
        self.position.clear();
        self.position.resize(capacity, None);
    }

    pub fn capacity(&self) -> usize {
        self.position.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, item: usize) -> bool {
        self.position.get(item).map_or(false, Option::is_some)
    }

    /// Current priority of `item`, if it is in the heap
    pub fn priority_of(&self, item: usize) -> Option<P> {
        let index = self.position.get(item).copied().flatten()?;
        Some(self.entries[index].priority)
    }

    /// Adds `item` with the given priority
    pub fn insert(&mut self, item: usize, priority: P) -> Result<(), HeapError> {
        let capacity = self.capacity();
        if item >= capacity {
            return Err(HeapError::ItemOutOfRange { item, capacity });
        }
        if self.entries.len() >= capacity {
            return Err(HeapError::CapacityExceeded(capacity));
        }
        if self.position[item].is_some() {
            return Err(HeapError::DuplicateItem(item));
        }

        let index = self.entries.len();
        self.entries.push(HeapEntry::new(item, priority));
        self.position[item] = Some(index);
        self.sift_up(index);
        Ok(())
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn find_min(&self) -> Option<HeapEntry<P>> {
        self.entries.first().copied()
    }

    /// Removes and returns the entry with the smallest priority
    pub fn extract_min(&mut self) -> Option<HeapEntry<P>> {
        let min = self.find_min()?;
        self.delete_at(0);
        Some(min)
    }

    /// Removes `item` from the heap; does nothing if it is absent
    pub fn delete(&mut self, item: usize) {
        if let Some(index) = self.position.get(item).copied().flatten() {
            self.delete_at(index);
        }
    }

    /// Replaces the priority of `item`; does nothing if it is absent
    pub fn change_priority(&mut self, item: usize, priority: P) {
        let Some(index) = self.position.get(item).copied().flatten() else {
            return;
        };

        let old = self.entries[index].priority;
        self.entries[index].priority = priority;

        if priority < old {
            self.sift_up(index);
        } else if priority > old {
            self.sift_down(index);
        }
    }

    /// Iterates over the live entries in heap-array order
    pub fn iter(&self) -> impl Iterator<Item = &HeapEntry<P>> {
        self.entries.iter()
    }

    /// Moves the last entry into `index` and restores heap order from there
    fn delete_at(&mut self, index: usize) {
        let last = self.entries.len() - 1;
        let removed = self.entries.swap_remove(index);
        self.position[removed.item] = None;

        if index == last {
            return;
        }

        let moved = self.entries[index].item;
        self.position[moved] = Some(index);

        // The moved entry can only be out of order in one direction
        if index > 0 && self.entries[index].priority < self.entries[Self::parent_of(index)].priority {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = Self::parent_of(index);
            if self.entries[index].priority >= self.entries[parent].priority {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = Self::left_child_of(index);
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.entries[left].priority < self.entries[smallest].priority {
                smallest = left;
            }
            if right < len && self.entries[right].priority < self.entries[smallest].priority {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.swap(index, smallest);
            index = smallest;
        }
    }

    /// Swaps two slots and keeps `position` in sync
    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.position[self.entries[a].item] = Some(a);
        self.position[self.entries[b].item] = Some(b);
    }

    #[inline(always)]
    fn parent_of(index: usize) -> usize {
        (index - 1) >> 1
    }

    #[inline(always)]
    fn left_child_of(index: usize) -> usize {
        (index << 1) + 1
    }
}
