/*!

Slot storage for `PtrArray`: one contiguous heap block of `capacity` slots, each able to hold
a `Box<T>` handle.

`RawSlots` never drops the handles it stores. It does not know which slots are initialized,
the owner tracks that and drops live handles itself. When `RawSlots` is dropped or relocated
only the block is released.

*/

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

/// Capacity of a freshly created, cleared or moved-from array.
pub const INITIAL_CAPACITY: usize = 0;

pub const GROWTH_FACTOR: usize = 2;

/// Capacity after growing a full array of `capacity` slots.
/// The +1 makes the zero-capacity case grow as well.
#[inline(always)]
pub const fn grow_capacity(capacity: usize) -> usize {
    (capacity + 1) * GROWTH_FACTOR
}

pub(crate) struct RawSlots<T> where T: ?Sized {
    ptr: NonNull<Box<T>>,
    capacity: usize,
    _owns: PhantomData<Box<T>>,
}

unsafe impl<T> Send for RawSlots<T> where T: Send + ?Sized {}
unsafe impl<T> Sync for RawSlots<T> where T: Sync + ?Sized {}

impl<T> RawSlots<T> where T: ?Sized {
    pub const fn new() -> RawSlots<T> {
        RawSlots {
            ptr: NonNull::dangling(),
            capacity: 0,
            _owns: PhantomData,
        }
    }

    pub fn with_capacity(capacity: usize) -> RawSlots<T> {
        if capacity == 0 {
            return RawSlots::new();
        }

        let layout = Self::layout(capacity);
        let ptr = unsafe { alloc::alloc(layout) } as *mut Box<T>;
        let ptr = match NonNull::new(ptr) {
            Some(ptr) => ptr,
            None => alloc::handle_alloc_error(layout),
        };

        trace!("allocated {} slots", capacity);

        RawSlots {
            ptr,
            capacity,
            _owns: PhantomData,
        }
    }

    fn layout(capacity: usize) -> Layout {
        match Layout::array::<Box<T>>(capacity) {
            Ok(layout) => layout,
            Err(_) => panic!("capacity overflow"),
        }
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn ptr(&self) -> *mut Box<T> {
        self.ptr.as_ptr()
    }

    /// Moves the first `len` handles into a new block of `new_capacity` slots and frees the
    /// current block. The handles are moved bitwise, nothing is cloned or dropped.
    pub unsafe fn relocate(&mut self, len: usize, new_capacity: usize) {
        debug_assert!(len <= self.capacity, "relocate: len within old capacity");
        debug_assert!(len <= new_capacity, "relocate: len within new capacity");

        let new_slots = RawSlots::<T>::with_capacity(new_capacity);
        ptr::copy_nonoverlapping(self.ptr(), new_slots.ptr(), len);

        trace!("relocated {} handles from {} to {} slots", len, self.capacity, new_capacity);

        // old block is freed here, the handles already live in the new one
        *self = new_slots;
    }
}

impl<T> Drop for RawSlots<T> where T: ?Sized {
    fn drop(&mut self) {
        if self.capacity > 0 {
            unsafe { alloc::dealloc(self.ptr.as_ptr() as *mut u8, Self::layout(self.capacity)) };
        }
    }
}

#[cfg(test)]
mod raw_tests {
    use super::{RawSlots, grow_capacity};
    use crate::dropflag::{live_counter, Circle, Shape};
    use std::ptr;

    #[test]
    fn growth_sequence() {
        assert_eq!(2, grow_capacity(0));
        assert_eq!(6, grow_capacity(2));
        assert_eq!(14, grow_capacity(6));
        assert_eq!(22, grow_capacity(10));
    }

    #[test]
    fn zero_capacity_does_not_allocate() {
        let slots = RawSlots::<i32>::with_capacity(0);
        assert_eq!(0, slots.capacity());
        assert_eq!(ptr::NonNull::<Box<i32>>::dangling().as_ptr(), slots.ptr());
    }

    #[test]
    fn relocation_moves_handles_without_dropping() {
        let live = live_counter();
        let mut slots = RawSlots::<dyn Shape>::with_capacity(2);
        unsafe {
            ptr::write(slots.ptr(), Box::new(Circle::tracked(1, &live)) as Box<dyn Shape>);
            ptr::write(slots.ptr().add(1), Box::new(Circle::tracked(2, &live)) as Box<dyn Shape>);
            slots.relocate(2, grow_capacity(2));
        }
        assert_eq!(6, slots.capacity());
        assert_eq!(2, *live.borrow());
        unsafe {
            assert_eq!(1, (*slots.ptr()).value());
            assert_eq!(2, (*slots.ptr().add(1)).value());
            ptr::drop_in_place(std::slice::from_raw_parts_mut(slots.ptr(), 2));
        }
        assert_eq!(0, *live.borrow());
    }
}
