use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Random-access position in a `PtrArray`.
///
/// A cursor is only an index and does not borrow the array. Any operation that reallocates or
/// shifts the storage (insertion, erasure, clear) invalidates it: the index stays the same, but it
/// may then designate another element or lie past the end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor {
    _index: usize,
}

impl Cursor {
    #[inline(always)]
    pub const fn new(index: usize) -> Cursor {
        Cursor { _index: index }
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self._index
    }

    #[inline(always)]
    pub fn forward(self) -> Cursor {
        self.offset(1)
    }

    #[inline(always)]
    pub fn backward(self) -> Cursor {
        self.offset(-1)
    }

    /// Moves the cursor by a signed distance. Panics if it would move before the first slot.
    /// Panics on overflow past `usize::MAX` too.
    pub fn offset(self, distance: isize) -> Cursor {
        if distance >= 0 {
            match self._index.checked_add(distance as usize) {
                Some(index) => Cursor::new(index),
                None => panic!("cursor at {} moved {} slots past the last addressable slot", self._index, distance),
            }
        } else {
            let back = distance.unsigned_abs();
            match self._index.checked_sub(back) {
                Some(index) => Cursor::new(index),
                None => panic!("cursor moved {} slots before the beginning", back - self._index),
            }
        }
    }

    /// Moves forward by `distance` slots, `None` if the index would overflow.
    #[inline(always)]
    pub fn checked_add(self, distance: usize) -> Option<Cursor> {
        self._index.checked_add(distance).map(Cursor::new)
    }

    /// Signed number of slots from `origin` to this cursor.
    #[inline(always)]
    pub fn distance_from(self, origin: Cursor) -> isize {
        self._index.wrapping_sub(origin._index) as isize
    }
}

impl Add<usize> for Cursor {
    type Output = Cursor;

    fn add(self, rhs: usize) -> Cursor {
        match self.checked_add(rhs) {
            Some(cursor) => cursor,
            None => panic!("cursor at {} moved {} slots past the last addressable slot", self._index, rhs),
        }
    }
}

impl Sub<usize> for Cursor {
    type Output = Cursor;

    fn sub(self, rhs: usize) -> Cursor {
        match self._index.checked_sub(rhs) {
            Some(index) => Cursor::new(index),
            None => panic!("cursor moved {} slots before the beginning", rhs - self._index),
        }
    }
}

impl AddAssign<usize> for Cursor {
    fn add_assign(&mut self, rhs: usize) {
        *self = *self + rhs;
    }
}

impl SubAssign<usize> for Cursor {
    fn sub_assign(&mut self, rhs: usize) {
        *self = *self - rhs;
    }
}

impl Sub<Cursor> for Cursor {
    type Output = isize;

    fn sub(self, rhs: Cursor) -> isize {
        self.distance_from(rhs)
    }
}
