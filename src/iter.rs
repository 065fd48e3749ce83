use crate::raw::RawSlots;
use std::ptr;

/// Iterates over shared references to the elements of a `PtrArray`.
pub struct Iter<'a, T> where T: ?Sized {
    pub(crate) inner: std::slice::Iter<'a, Box<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> where T: ?Sized {
    type Item = &'a T;

    #[inline(always)]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|item| &**item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> where T: ?Sized {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back().map(|item| &**item)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> where T: ?Sized {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'a, T> Clone for Iter<'a, T> where T: ?Sized {
    fn clone(&self) -> Self {
        Iter { inner: self.inner.clone() }
    }
}

/// Iterates over mutable references to the elements of a `PtrArray`.
pub struct IterMut<'a, T> where T: ?Sized {
    pub(crate) inner: std::slice::IterMut<'a, Box<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> where T: ?Sized {
    type Item = &'a mut T;

    #[inline(always)]
    fn next(&mut self) -> Option<&'a mut T> {
        self.inner.next().map(|item| &mut **item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> where T: ?Sized {
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.inner.next_back().map(|item| &mut **item)
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> where T: ?Sized {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Owning iterator, hands out the boxed elements. Elements that were not yielded are
/// dropped together with the iterator.
pub struct IntoIter<T> where T: ?Sized {
    pub(crate) slots: RawSlots<T>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> Iterator for IntoIter<T> where T: ?Sized {
    type Item = Box<T>;

    fn next(&mut self) -> Option<Box<T>> {
        if self.start < self.end {
            let item = unsafe { ptr::read(self.slots.ptr().add(self.start)) };
            self.start += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> where T: ?Sized {
    fn next_back(&mut self) -> Option<Box<T>> {
        if self.start < self.end {
            self.end -= 1;
            Some(unsafe { ptr::read(self.slots.ptr().add(self.end)) })
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> where T: ?Sized {}

impl<T> Drop for IntoIter<T> where T: ?Sized {
    fn drop(&mut self) {
        let (start, end) = (self.start, self.end);
        self.start = end;
        unsafe {
            ptr::drop_in_place(std::slice::from_raw_parts_mut(self.slots.ptr().add(start), end - start));
        }
    }
}
