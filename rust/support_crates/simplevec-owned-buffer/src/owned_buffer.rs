use std::ops::{Index, IndexMut};

/// Sole owner of a single heap-allocated block of `T` slots.
///
/// The buffer has no logical length: every slot of the block is addressable,
/// and tracking which slots hold meaningful values is up to the owner of the
/// buffer. An empty buffer holds no allocation at all.
///
/// Moving an `OwnedBuffer` transfers the block; no elements are copied.
/// There is no `Clone` implementation, so at most one buffer owns a given
/// block at any time.
pub struct OwnedBuffer<T> {
    /// The owned block; an empty boxed slice does not allocate.
    block: Box<[T]>,
}

impl<T> OwnedBuffer<T> {
    /// Creates an empty buffer without allocating.
    #[inline]
    pub fn new() -> OwnedBuffer<T> {
        OwnedBuffer {
            block: Box::default(),
        }
    }

    /// Allocates a block of `slots` default-initialized values.
    ///
    /// A zero-sized request yields an empty buffer with no allocation.
    /// Allocation failure aborts through the global allocator error handler.
    pub fn with_len(slots: usize) -> OwnedBuffer<T>
    where
        T: Default,
    {
        if slots == 0 {
            return OwnedBuffer::new();
        }
        OwnedBuffer {
            block: std::iter::repeat_with(T::default).take(slots).collect(),
        }
    }

    /// Adopts an already allocated block. No allocation takes place.
    #[inline]
    pub fn from_boxed_slice(block: Box<[T]>) -> OwnedBuffer<T> {
        OwnedBuffer { block }
    }

    /// Number of physical slots in the owned block.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.block.len()
    }

    /// Returns `true` if the buffer owns a non-empty allocation.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        !self.block.is_empty()
    }

    /// Returns a raw pointer to the first slot of the block.
    ///
    /// For an empty buffer the pointer is dangling and must not be read.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.block.as_ptr()
    }

    /// Returns a mutable raw pointer to the first slot of the block.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.block.as_mut_ptr()
    }

    /// Returns all slots of the block as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.block
    }

    /// Returns all slots of the block as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.block
    }

    /// Returns a reference to the slot at `index` without bounds checking.
    ///
    /// The bound is only verified in builds with debug assertions enabled.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`slot_count`](Self::slot_count).
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(
            index < self.block.len(),
            "slot {index} outside of a block of {} slots",
            self.block.len()
        );
        // SAFETY: the caller guarantees `index < self.block.len()`.
        unsafe { self.block.get_unchecked(index) }
    }

    /// Returns a mutable reference to the slot at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`slot_count`](Self::slot_count).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.block.len(),
            "slot {index} outside of a block of {} slots",
            self.block.len()
        );
        // SAFETY: the caller guarantees `index < self.block.len()`.
        unsafe { self.block.get_unchecked_mut(index) }
    }

    /// Gives up ownership of the block and returns it to the caller.
    ///
    /// The buffer is left empty; releasing the returned block becomes the
    /// caller's responsibility.
    #[must_use]
    pub fn release(&mut self) -> Box<[T]> {
        std::mem::take(&mut self.block)
    }

    /// Moves the block out into a new buffer, leaving this one empty.
    #[must_use]
    pub fn take(&mut self) -> OwnedBuffer<T> {
        OwnedBuffer::from_boxed_slice(self.release())
    }

    /// Exchanges the owned blocks of two buffers. No elements are moved.
    #[inline]
    pub fn swap(&mut self, other: &mut OwnedBuffer<T>) {
        std::mem::swap(&mut self.block, &mut other.block);
    }

    /// Consumes the buffer, returning the owned block.
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.block
    }
}

impl<T> Default for OwnedBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Box<[T]>> for OwnedBuffer<T> {
    fn from(block: Box<[T]>) -> Self {
        Self::from_boxed_slice(block)
    }
}

impl<T> Index<usize> for OwnedBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.block[index]
    }
}

impl<T> IndexMut<usize> for OwnedBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.block[index]
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for OwnedBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwnedBuffer")
            .field("slots", &self.block.len())
            .field("values", &&self.block[..])
            .finish()
    }
}
