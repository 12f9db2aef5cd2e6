//! Capacity requests and the growth law of [`DynamicArray`](crate::DynamicArray).

/// A request to pre-reserve storage without adding elements.
///
/// Build one with [`reserve`] and hand it to
/// [`DynamicArray::from_hint`](crate::DynamicArray::from_hint):
///
/// ```
/// use simplevec::{DynamicArray, reserve};
///
/// let v = DynamicArray::<u32>::from_hint(reserve(16));
/// assert_eq!(v.len(), 0);
/// assert_eq!(v.capacity(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapacityHint {
    capacity: usize,
}

impl CapacityHint {
    pub fn new(capacity: usize) -> CapacityHint {
        CapacityHint { capacity }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`CapacityHint::new`].
pub fn reserve(capacity: usize) -> CapacityHint {
    CapacityHint::new(capacity)
}

/// Capacity to grow to when a single element must be added to a full array:
/// `max(1, 2 * capacity)`.
#[inline]
pub fn grown_capacity_for_push(capacity: usize) -> usize {
    std::cmp::max(1, doubled(capacity))
}

/// Capacity to grow to when an array of `capacity` slots must hold `new_len`
/// elements: `max(new_len, 2 * capacity)`.
#[inline]
pub fn grown_capacity_for_resize(new_len: usize, capacity: usize) -> usize {
    std::cmp::max(new_len, doubled(capacity))
}

#[inline]
fn doubled(capacity: usize) -> usize {
    capacity.checked_mul(2).expect("capacity overflow")
}
