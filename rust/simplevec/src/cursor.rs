//! Positions into the live range of a [`DynamicArray`](crate::DynamicArray).

use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A position marker into a sequence, used by
/// [`insert`](crate::DynamicArray::insert) and
/// [`erase`](crate::DynamicArray::erase).
///
/// A cursor is a plain offset from the beginning of the sequence. It does not
/// borrow the array, so it stays usable across mutations; whether it still
/// points where the caller expects after an insert or erase is the caller's
/// concern, exactly as with an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cursor(usize);

impl Cursor {
    #[inline]
    pub fn new(offset: usize) -> Cursor {
        Cursor(offset)
    }

    /// Distance from the beginning of the sequence.
    #[inline]
    pub fn offset(self) -> usize {
        self.0
    }
}

impl Add<usize> for Cursor {
    type Output = Cursor;

    #[inline]
    fn add(self, rhs: usize) -> Cursor {
        Cursor(self.0 + rhs)
    }
}

impl AddAssign<usize> for Cursor {
    #[inline]
    fn add_assign(&mut self, rhs: usize) {
        self.0 += rhs;
    }
}

impl Sub<usize> for Cursor {
    type Output = Cursor;

    #[inline]
    fn sub(self, rhs: usize) -> Cursor {
        Cursor(self.0 - rhs)
    }
}

impl SubAssign<usize> for Cursor {
    #[inline]
    fn sub_assign(&mut self, rhs: usize) {
        self.0 -= rhs;
    }
}

impl Sub<Cursor> for Cursor {
    type Output = usize;

    /// Number of positions between two cursors.
    #[inline]
    fn sub(self, rhs: Cursor) -> usize {
        self.0 - rhs.0
    }
}

impl From<usize> for Cursor {
    fn from(offset: usize) -> Self {
        Cursor(offset)
    }
}
