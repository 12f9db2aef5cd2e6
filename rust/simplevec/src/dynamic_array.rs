use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use simplevec_owned_buffer::OwnedBuffer;

use crate::capacity::{CapacityHint, grown_capacity_for_push, grown_capacity_for_resize};
use crate::cursor::Cursor;
use crate::result::{Result, verify_index};

/// A growable, contiguous, randomly indexable sequence with value semantics.
///
/// The array owns one [`OwnedBuffer`] of `capacity` slots. The first `len`
/// slots hold the live elements; the remaining slots are allocated and hold
/// either default values or leftovers of removed elements.
///
/// Growth follows an explicit doubling law: adding one element to a full
/// array grows the capacity to `max(1, 2 * capacity)`, and resizing past the
/// capacity grows it to `max(new_len, 2 * capacity)`. Capacity never shrinks
/// when elements are removed.
///
/// Two accessors with different contracts are provided: [`at`](Self::at)
/// checks the index against the live length and reports an error, while
/// [`get_unchecked`](Self::get_unchecked) trusts the caller and only checks
/// the index in debug builds.
pub struct DynamicArray<T> {
    buffer: OwnedBuffer<T>,
    len: usize,
    capacity: usize,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array without allocating.
    pub fn new() -> DynamicArray<T> {
        DynamicArray {
            buffer: OwnedBuffer::new(),
            len: 0,
            capacity: 0,
        }
    }

    /// Creates an array of `len` clones of `value`.
    pub fn from_elem(len: usize, value: T) -> DynamicArray<T>
    where
        T: Clone,
    {
        Self::from_block(std::iter::repeat_n(value, len).collect())
    }

    /// Wraps a fully initialized block; every slot of the block is live.
    fn from_block(block: Box<[T]>) -> DynamicArray<T> {
        let len = block.len();
        DynamicArray {
            buffer: OwnedBuffer::from_boxed_slice(block),
            len,
            capacity: len,
        }
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the element at `index`, or an out-of-range error if `index`
    /// does not address a live element.
    pub fn at(&self, index: usize) -> Result<&T> {
        verify_index(index, self.len)?;
        // SAFETY: index < len <= capacity.
        Ok(unsafe { self.get_unchecked(index) })
    }

    /// Mutable counterpart of [`at`](Self::at).
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        verify_index(index, self.len)?;
        // SAFETY: index < len <= capacity.
        Ok(unsafe { self.get_unchecked_mut(index) })
    }

    /// Returns a reference to the slot at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`capacity`](Self::capacity). The bound is
    /// verified only when debug assertions are enabled. Slots at or past
    /// [`len`](Self::len) hold unspecified values.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.capacity);
        // SAFETY: the caller guarantees index < capacity == slot count.
        unsafe { self.buffer.get_unchecked(index) }
    }

    /// Mutable counterpart of [`get_unchecked`](Self::get_unchecked).
    ///
    /// # Safety
    ///
    /// `index` must be less than [`capacity`](Self::capacity).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.capacity);
        // SAFETY: the caller guarantees index < capacity == slot count.
        unsafe { self.buffer.get_unchecked_mut(index) }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer.as_slice()[..self.len]
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer.as_mut_slice()[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Cursor at the first element.
    #[inline]
    pub fn begin(&self) -> Cursor {
        Cursor::new(0)
    }

    /// Cursor one past the last live element.
    #[inline]
    pub fn end(&self) -> Cursor {
        Cursor::new(self.len)
    }

    /// Cursor at `index`. The cursor is not validated until it is used.
    #[inline]
    pub fn cursor_at(&self, index: usize) -> Cursor {
        Cursor::new(index)
    }

    /// Discards all elements. The capacity and the slot contents are kept.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Removes the last element.
    ///
    /// The element is not dropped until its slot is overwritten or the array
    /// is dropped.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn pop_back(&mut self) {
        assert!(!self.is_empty(), "pop_back on an empty array");
        self.len -= 1;
    }

    /// Removes the element at `pos`, shifting the following elements one slot
    /// toward the front.
    ///
    /// Returns a cursor at the slot the element was removed from, which now
    /// holds its successor (or equals [`end`](Self::end) if the last element
    /// was removed).
    ///
    /// # Panics
    ///
    /// Panics unless `begin() <= pos < end()`.
    pub fn erase(&mut self, pos: Cursor) -> Cursor {
        let index = pos.offset();
        assert!(
            index < self.len,
            "erase position {index} outside of live range of length {}",
            self.len
        );
        let len = self.len;
        self.buffer.as_mut_slice()[index..len].rotate_left(1);
        self.len -= 1;
        pos
    }

    /// Exchanges the contents of two arrays without moving any elements.
    pub fn swap(&mut self, other: &mut DynamicArray<T>) {
        self.buffer.swap(&mut other.buffer);
        std::mem::swap(&mut self.len, &mut other.len);
        std::mem::swap(&mut self.capacity, &mut other.capacity);
    }
}

impl<T: Default> DynamicArray<T> {
    /// Creates an empty array with exactly `hint.capacity()` slots reserved.
    pub fn from_hint(hint: CapacityHint) -> DynamicArray<T> {
        let mut array = DynamicArray::new();
        array.reserve(hint.capacity());
        array
    }

    /// Creates an array of `len` default values.
    pub fn with_len(len: usize) -> DynamicArray<T> {
        DynamicArray {
            buffer: OwnedBuffer::with_len(len),
            len,
            capacity: len,
        }
    }

    /// Grows the storage to exactly `new_capacity` slots if it is currently
    /// smaller. Never changes the length or the live elements.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity {
            self.relocate(new_capacity, self.len);
        }
    }

    /// Changes the length to `new_len`.
    ///
    /// Elements cut off by shrinking are reset to their default value; slots
    /// exposed by growing are default-filled. Growing past the capacity
    /// reallocates to `max(new_len, 2 * capacity)` slots.
    pub fn resize(&mut self, new_len: usize) {
        let len = self.len;
        if new_len == len {
            return;
        }

        if new_len < len {
            reset_to_default(&mut self.buffer.as_mut_slice()[new_len..len]);
        } else {
            if new_len > self.capacity {
                self.relocate(grown_capacity_for_resize(new_len, self.capacity), len);
            }
            reset_to_default(&mut self.buffer.as_mut_slice()[len..new_len]);
        }

        self.len = new_len;
    }

    /// Appends `value`, doubling the capacity if the array is full.
    pub fn push_back(&mut self, value: T) {
        let len = self.len;
        if len == self.capacity {
            self.relocate(grown_capacity_for_push(self.capacity), len);
        }
        self.buffer[len] = value;
        self.len += 1;
    }

    /// Appends a clone of `value`.
    pub fn push_back_cloned(&mut self, value: &T)
    where
        T: Clone,
    {
        self.push_back(value.clone());
    }

    /// Inserts `value` at `pos`, shifting the elements at and after `pos` one
    /// slot toward the end. Returns a cursor at the inserted element.
    ///
    /// If the array is full, the storage grows to `max(1, 2 * capacity)` and
    /// the elements are moved into the new block around a gap at `pos`.
    ///
    /// # Panics
    ///
    /// Panics unless `begin() <= pos <= end()`.
    pub fn insert(&mut self, pos: Cursor, value: T) -> Cursor {
        let index = pos.offset();
        let len = self.len;
        assert!(
            index <= len,
            "insert position {index} outside of live range of length {len}"
        );

        if len < self.capacity {
            self.buffer.as_mut_slice()[index..=len].rotate_right(1);
        } else {
            self.relocate(grown_capacity_for_push(self.capacity), index);
        }

        self.buffer[index] = value;
        self.len += 1;
        pos
    }

    /// Inserts a clone of `value` at `pos`. See [`insert`](Self::insert).
    pub fn insert_cloned(&mut self, pos: Cursor, value: &T) -> Cursor
    where
        T: Clone,
    {
        self.insert(pos, value.clone())
    }

    /// Moves the live elements into a fresh block of `new_capacity` slots,
    /// leaving slot `gap` free: elements before `gap` keep their index, the
    /// rest shift one slot toward the end.
    ///
    /// Requires `gap <= len < new_capacity`.
    fn relocate(&mut self, new_capacity: usize, gap: usize) {
        let len = self.len;
        debug_assert!(gap <= len && len < new_capacity);
        debug_assert_eq!(self.buffer.slot_count(), self.capacity);
        log::trace!(
            "reallocating dynamic array: len {len}, capacity {} -> {new_capacity}",
            self.capacity
        );

        let mut block = OwnedBuffer::<T>::with_len(new_capacity);
        {
            let live = &mut self.buffer.as_mut_slice()[..len];
            let (prefix, suffix) = live.split_at_mut(gap);
            let slots = block.as_mut_slice();
            slots[..gap].swap_with_slice(prefix);
            slots[gap + 1..=len].swap_with_slice(suffix);
        }

        self.buffer = block;
        self.capacity = new_capacity;
    }
}

fn reset_to_default<T: Default>(slots: &mut [T]) {
    for slot in slots {
        *slot = T::default();
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default> Clone for DynamicArray<T> {
    /// Deep-copies the live elements into a block with the same capacity as
    /// the source.
    fn clone(&self) -> Self {
        let mut block = OwnedBuffer::with_len(self.capacity);
        block.as_mut_slice()[..self.len].clone_from_slice(self.as_slice());
        DynamicArray {
            buffer: block,
            len: self.len,
            capacity: self.capacity,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if self.capacity != source.capacity {
            *self = source.clone();
            return;
        }

        let slots = self.buffer.as_mut_slice();
        slots[..source.len].clone_from_slice(source.as_slice());
        if self.len > source.len {
            reset_to_default(&mut slots[source.len..self.len]);
        }
        self.len = source.len;
    }
}

/// Addresses a physical slot. Indices in `len..capacity` are accepted and
/// yield unspecified values; use [`DynamicArray::at`] for a checked lookup
/// against the live length.
///
/// # Panics
///
/// Panics if `index >= capacity`.
impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.buffer[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.buffer[index]
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_block(Box::from(values))
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(values: &[T]) -> Self {
        Self::from_block(Box::from(values))
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_block(values.into_boxed_slice())
    }
}

impl<T: Default> From<CapacityHint> for DynamicArray<T> {
    fn from(hint: CapacityHint) -> Self {
        Self::from_hint(hint)
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_block(iter.into_iter().collect())
    }
}

impl<T: Default> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + Default + 'a> Extend<&'a T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut slots = self.buffer.into_boxed_slice().into_vec();
        slots.truncate(self.len);
        IntoIter {
            inner: slots.into_iter(),
        }
    }
}

/// Owning iterator over the live elements of a [`DynamicArray`].
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for DynamicArray<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for DynamicArray<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialOrd> PartialOrd for DynamicArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for DynamicArray<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
