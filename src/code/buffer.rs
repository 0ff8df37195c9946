use std::cmp;

/// Minimum capacity allocated by the first push into an empty array.
pub const MIN_CAPACITY: usize = 8;

/// Growable array of fixed-width elements with explicit control over the
/// growth schedule: capacity at least doubles whenever the array is full,
/// so pushes are amortized O(1) and storage stays contiguous for O(1)
/// random access.
///
/// Backs all three buffers owned by a `Chunk` (code bytes, constants,
/// line runs).
#[derive(Debug, Clone)]
pub struct DynArray<T> where T: Copy {
    items: Vec<T>,
}

impl<T> Default for DynArray<T> where T: Copy {
    fn default() -> Self { Self::new() }
}

impl<T> DynArray<T> where T: Copy {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Appends an element, growing storage if needed, and returns the
    /// index at which it was written.
    pub fn push(&mut self, item: T) -> usize {
        if self.items.len() == self.items.capacity() {
            self.grow();
        }

        let index = self.items.len();
        self.items.push(item);
        index
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.items.get(index).copied()
    }

    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Releases owned storage entirely, resetting both length and capacity
    /// to zero.
    pub fn clear(&mut self) {
        self.items = Vec::new();
    }

    fn grow(&mut self) {
        let old_capacity = self.items.capacity();
        let new_capacity = cmp::max(MIN_CAPACITY, old_capacity * 2);

        log::trace!("grow buffer: {} => {}", old_capacity, new_capacity);
        self.items.reserve_exact(new_capacity - self.items.len());
    }
}
