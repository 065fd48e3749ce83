use crate::{Cloneable, Cursor, PtrArrayError, Iter, IterMut, IntoIter};
use crate::raw::{RawSlots, grow_capacity, INITIAL_CAPACITY};
use std::ops::{Index, IndexMut};
use std::ptr;

/// Growable array that exclusively owns its boxed elements.
///
/// Elements go in and out as `Box<T>`, so `T` may be a trait object. Cloning the array
/// deep-copies every element through `Cloneable`; moving it (or `take`) transfers the storage
/// and nothing is cloned. Every element is dropped exactly once, by erasure, `clear` or when
/// the array itself is dropped.
///
/// When full, the array grows to `(capacity + 1) * 2` slots and moves the existing handles
/// over without touching the elements.
pub struct PtrArray<T> where T: Cloneable + ?Sized {
    _slots: RawSlots<T>,
    _len: usize,
}

impl<T> PtrArray<T> where T: Cloneable + ?Sized {
    /// Creates an empty array. Does not allocate.
    pub const fn new() -> PtrArray<T> {
        PtrArray {
            _slots: RawSlots::new(),
            _len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> PtrArray<T> {
        PtrArray {
            _slots: RawSlots::with_capacity(capacity),
            _len: 0,
        }
    }

    /// Takes ownership of already boxed elements, in order. Capacity matches the count
    /// exactly and nothing is cloned.
    pub fn from_boxes(items: Vec<Box<T>>) -> PtrArray<T> {
        let mut array = PtrArray::with_capacity(items.len());
        for item in items {
            array.push_back(item);
        }
        array
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self._len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self._len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self._slots.capacity()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[Box<T>] {
        unsafe { std::slice::from_raw_parts(self._slots.ptr(), self._len) }
    }

    /// The owned handles as a mutable slice. Useful for slice algorithms such as
    /// `sort_by_key`, `reverse` or `shuffle`; assigning to a slot drops the element it held.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [Box<T>] {
        unsafe { std::slice::from_raw_parts_mut(self._slots.ptr(), self._len) }
    }

    /// Bounds-checked access.
    pub fn at(&self, index: usize) -> Result<&T, PtrArrayError> {
        let len = self._len;
        self.get(index).ok_or(PtrArrayError::IndexOutOfBounds { index, len })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, PtrArrayError> {
        let len = self._len;
        self.get_mut(index).ok_or(PtrArrayError::IndexOutOfBounds { index, len })
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index).map(|item| &**item)
    }

    #[inline(always)]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index).map(|item| &mut **item)
    }

    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn last(&self) -> Option<&T> {
        self._len.checked_sub(1).and_then(|index| self.get(index))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.as_slice().iter() }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut { inner: self.as_mut_slice().iter_mut() }
    }

    #[inline(always)]
    pub fn begin(&self) -> Cursor {
        Cursor::new(0)
    }

    #[inline(always)]
    pub fn end(&self) -> Cursor {
        Cursor::new(self._len)
    }

    #[inline(always)]
    pub fn cursor(&self, index: usize) -> Cursor {
        Cursor::new(index)
    }

    /// The element at `position`, or `None` if the cursor is at or past the end.
    pub fn get_at(&self, position: Cursor) -> Option<&T> {
        self.get(position.index())
    }

    pub fn get_at_mut(&mut self, position: Cursor) -> Option<&mut T> {
        self.get_mut(position.index())
    }

    fn grow_if_full(&mut self) {
        if self._len == self._slots.capacity() {
            let new_capacity = grow_capacity(self._slots.capacity());
            trace!("array full at {} elements, growing to {}", self._len, new_capacity);
            unsafe { self._slots.relocate(self._len, new_capacity) };
        }
    }

    /// Inserts `item` before `position`, taking ownership of it.
    ///
    /// Elements at and after `position` move one slot towards the end. Panics if `position`
    /// is past `end()`.
    pub fn emplace(&mut self, position: Cursor, item: Box<T>) {
        let index = position.index();
        let len = self._len;
        if index > len {
            panic!("emplace position {} is past the end of array of length {}", index, len);
        }

        self.grow_if_full();

        unsafe {
            let hole = self._slots.ptr().add(index);
            ptr::copy(hole, hole.add(1), len - index);
            ptr::write(hole, item);
        }
        self._len = len + 1;
    }

    #[inline(always)]
    pub fn emplace_back(&mut self, item: Box<T>) {
        self.emplace(self.end(), item)
    }

    #[inline(always)]
    pub fn push_back(&mut self, item: Box<T>) {
        self.emplace(self.end(), item)
    }

    #[inline(always)]
    pub fn insert(&mut self, index: usize, item: Box<T>) {
        self.emplace(Cursor::new(index), item)
    }

    /// Appends an element that may be missing. `None` is rejected and leaves the array as it was.
    pub fn try_push_back(&mut self, item: Option<Box<T>>) -> Result<(), PtrArrayError> {
        match item {
            Some(item) => {
                self.push_back(item);
                Ok(())
            },
            None => Err(PtrArrayError::NullElement),
        }
    }

    /// Drops the elements in `[first, last)` and closes the gap. Returns how many were erased.
    ///
    /// An empty, inverted or out of bounds range does nothing.
    pub fn erase_range(&mut self, first: Cursor, last: Cursor) -> usize {
        let (start, end, len) = (first.index(), last.index(), self._len);
        if self.is_empty() || start >= end || end > len {
            return 0;
        }

        let count = end - start;
        unsafe {
            let base = self._slots.ptr();
            // if a drop panics, the tail leaks instead of being dropped twice
            self._len = start;
            ptr::drop_in_place(std::slice::from_raw_parts_mut(base.add(start), count));
            ptr::copy(base.add(end), base.add(start), len - end);
        }
        self._len = len - count;
        count
    }

    #[inline(always)]
    pub fn erase(&mut self, position: Cursor) -> usize {
        match position.checked_add(1) {
            Some(last) => self.erase_range(position, last),
            None => 0,
        }
    }

    /// Removes the element at `index` and hands it back instead of dropping it.
    pub fn remove(&mut self, index: usize) -> Option<Box<T>> {
        let len = self._len;
        if index >= len {
            return None;
        }

        unsafe {
            let slot = self._slots.ptr().add(index);
            let item = ptr::read(slot);
            ptr::copy(slot.add(1), slot, len - index - 1);
            self._len = len - 1;
            Some(item)
        }
    }

    pub fn pop_back(&mut self) -> Option<Box<T>> {
        if self._len == 0 {
            None
        } else {
            self._len -= 1;
            Some(unsafe { ptr::read(self._slots.ptr().add(self._len)) })
        }
    }

    /// Puts `item` into the slot at `position` and returns the element it replaces.
    /// Panics if the cursor does not point at an element.
    pub fn replace(&mut self, position: Cursor, item: Box<T>) -> Box<T> {
        let (index, len) = (position.index(), self._len);
        match self.as_mut_slice().get_mut(index) {
            Some(slot) => std::mem::replace(slot, item),
            None => panic!("replace position {} is out of bounds for array of length {}", index, len),
        }
    }

    /// Replaces every element matching `predicate` with a new one from `make`.
    /// Returns the number of replaced elements.
    pub fn replace_if<P, F>(&mut self, mut predicate: P, mut make: F) -> usize
        where
            P: FnMut(&T) -> bool,
            F: FnMut() -> Box<T>
    {
        let mut replaced = 0;
        for slot in self.as_mut_slice() {
            if predicate(&**slot) {
                *slot = make();
                replaced += 1;
            }
        }
        replaced
    }

    /// Overwrites every element with a new one from `generator`, in order.
    pub fn generate<F>(&mut self, mut generator: F) where F: FnMut() -> Box<T> {
        for slot in self.as_mut_slice() {
            *slot = generator();
        }
    }

    /// Drops all elements and releases the storage. Capacity goes back to the initial capacity.
    pub fn clear(&mut self) {
        debug!("clear {} elements", self._len);
        self.truncate_to_empty();
        self._slots = RawSlots::with_capacity(INITIAL_CAPACITY);
    }

    /// Moves the contents out, leaving this array empty with no storage.
    pub fn take(&mut self) -> PtrArray<T> {
        std::mem::replace(self, PtrArray::new())
    }

    fn truncate_to_empty(&mut self) {
        let len = self._len;
        self._len = 0;
        unsafe {
            ptr::drop_in_place(std::slice::from_raw_parts_mut(self._slots.ptr(), len));
        }
    }
}

impl<T> Drop for PtrArray<T> where T: Cloneable + ?Sized {
    fn drop(&mut self) {
        self.truncate_to_empty();
    }
}

impl<T> Clone for PtrArray<T> where T: Cloneable + ?Sized {
    fn clone(&self) -> Self {
        debug!("deep copy of {} elements", self._len);
        let mut copy = PtrArray::with_capacity(self.capacity());
        for item in self.iter() {
            copy.push_back(T::clone_boxed(item));
        }
        copy
    }

    /// Drops the current elements first, then copies `source` into storage of the same capacity.
    fn clone_from(&mut self, source: &Self) {
        debug!("deep copy of {} elements over {}", source._len, self._len);
        self.truncate_to_empty();
        if self.capacity() != source.capacity() {
            self._slots = RawSlots::with_capacity(source.capacity());
        }
        for item in source.iter() {
            self.push_back(T::clone_boxed(item));
        }
    }
}

impl<T> Default for PtrArray<T> where T: Cloneable + ?Sized {
    fn default() -> Self {
        PtrArray::new()
    }
}

impl<T> Index<usize> for PtrArray<T> where T: Cloneable + ?Sized {
    type Output = T;

    /// Panics if `index` is out of bounds.
    fn index(&self, index: usize) -> &T {
        match self.as_slice().get(index) {
            Some(item) => &**item,
            None => panic!("index {} is out of bounds for array of length {}", index, self._len),
        }
    }
}

impl<T> IndexMut<usize> for PtrArray<T> where T: Cloneable + ?Sized {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self._len;
        match self.as_mut_slice().get_mut(index) {
            Some(item) => &mut **item,
            None => panic!("index {} is out of bounds for array of length {}", index, len),
        }
    }
}

impl<T> std::fmt::Debug for PtrArray<T> where T: Cloneable + std::fmt::Debug + ?Sized {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> PartialEq for PtrArray<T> where T: Cloneable + PartialEq + ?Sized {
    fn eq(&self, other: &Self) -> bool {
        self._len == other._len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T> From<Vec<Box<T>>> for PtrArray<T> where T: Cloneable + ?Sized {
    fn from(items: Vec<Box<T>>) -> Self {
        PtrArray::from_boxes(items)
    }
}

impl<T> std::iter::FromIterator<Box<T>> for PtrArray<T> where T: Cloneable + ?Sized {
    fn from_iter<I: IntoIterator<Item=Box<T>>>(iter: I) -> Self {
        let mut array = PtrArray::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<Box<T>> for PtrArray<T> where T: Cloneable + ?Sized {
    fn extend<I: IntoIterator<Item=Box<T>>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a PtrArray<T> where T: Cloneable + ?Sized {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut PtrArray<T> where T: Cloneable + ?Sized {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T> IntoIterator for PtrArray<T> where T: Cloneable + ?Sized {
    type Item = Box<T>;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let end = self._len;
        self._len = 0;
        let slots = std::mem::replace(&mut self._slots, RawSlots::new());
        IntoIter {
            slots,
            start: 0,
            end,
        }
    }
}

/// Builds a `PtrArray` from boxed elements, taking ownership of each without cloning.
///
/// ```
/// use ptrarray::{ptr_array, PtrArray};
///
/// let array: PtrArray<i32> = ptr_array![Box::new(5), Box::new(2), Box::new(8)];
/// assert_eq!(3, array.len());
/// assert_eq!(3, array.capacity());
/// ```
#[macro_export]
macro_rules! ptr_array {
    () => ($crate::PtrArray::new());
    ($($item:expr),+ $(,)?) => ($crate::PtrArray::from_boxes(vec![$($item),+]));
}
