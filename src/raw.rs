//! Raw slot storage: a single heap block of `capacity` uninitialized slots.
//!
//! `RawSlots` knows nothing about which slots are live. The owner tracks the
//! live prefix and is responsible for dropping those values before the block
//! is released.

use alloc::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use core::marker::PhantomData;
use core::mem;
use core::ptr::{self, NonNull};

pub(crate) struct RawSlots<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _owns: PhantomData<T>,
}

impl<T> RawSlots<T> {
    /// Allocates a block of `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics with "capacity overflow" if the block size does not fit in
    /// `isize`. Aborts through `handle_alloc_error` if the allocator fails.
    pub(crate) fn allocate(capacity: usize) -> Self {
        let layout = Self::layout(capacity);
        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // Safety: `layout` has a non-zero size.
            #[allow(unsafe_code)]
            let raw = unsafe { alloc(layout) };
            match NonNull::new(raw.cast::<T>()) {
                Some(ptr) => ptr,
                None => handle_alloc_error(layout),
            }
        };
        Self {
            ptr,
            capacity,
            _owns: PhantomData,
        }
    }

    #[allow(clippy::expect_used)]
    fn layout(capacity: usize) -> Layout {
        Layout::array::<T>(capacity).expect("capacity overflow")
    }

    #[must_use]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Moves the first `live` values into a fresh block of `new_capacity`
    /// slots and releases the old block.
    ///
    /// # Safety
    ///
    /// Slots `[0, live)` must be initialized and `live <= new_capacity`.
    #[allow(unsafe_code)]
    pub(crate) unsafe fn relocate(&mut self, live: usize, new_capacity: usize) {
        debug_assert!(live <= self.capacity);
        debug_assert!(live <= new_capacity);
        let mut target = Self::allocate(new_capacity);
        ptr::copy_nonoverlapping(self.as_ptr(), target.as_mut_ptr(), live);
        // `target` now owns the old block and releases it on drop.
        mem::swap(self, &mut target);
    }

    /// Writes `value` into slot `slot` without reading the old content.
    ///
    /// # Safety
    ///
    /// `slot < capacity` and the slot must not hold a live value.
    #[allow(unsafe_code)]
    pub(crate) unsafe fn write(&mut self, slot: usize, value: T) {
        debug_assert!(slot < self.capacity);
        ptr::write(self.as_mut_ptr().add(slot), value);
    }

    /// Moves the value out of slot `slot`; the slot holds no live value
    /// afterwards.
    ///
    /// # Safety
    ///
    /// `slot < capacity` and the slot must hold a live value.
    #[allow(unsafe_code)]
    pub(crate) unsafe fn take(&mut self, slot: usize) -> T {
        debug_assert!(slot < self.capacity);
        ptr::read(self.as_ptr().add(slot))
    }

    /// Borrows slot `slot`.
    ///
    /// # Safety
    ///
    /// `slot < capacity` and the slot must hold a live value.
    #[allow(unsafe_code)]
    pub(crate) unsafe fn slot(&self, slot: usize) -> &T {
        debug_assert!(slot < self.capacity);
        &*self.as_ptr().add(slot)
    }

    /// Drops the values in slots `[0, live)` in place.
    ///
    /// # Safety
    ///
    /// Slots `[0, live)` must be initialized; they are uninitialized afterwards.
    #[allow(unsafe_code)]
    pub(crate) unsafe fn drop_live(&mut self, live: usize) {
        debug_assert!(live <= self.capacity);
        ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.as_mut_ptr(), live));
    }
}

impl<T> Drop for RawSlots<T> {
    fn drop(&mut self) {
        let layout = Self::layout(self.capacity);
        if layout.size() != 0 {
            // Safety: the block was allocated in `allocate` with this layout.
            #[allow(unsafe_code)]
            unsafe {
                dealloc(self.ptr.as_ptr().cast::<u8>(), layout);
            }
        }
    }
}

// Safety: `RawSlots<T>` owns its values exactly like `Box<[T]>` does.
#[allow(unsafe_code)]
unsafe impl<T: Send> Send for RawSlots<T> {}
#[allow(unsafe_code)]
unsafe impl<T: Sync> Sync for RawSlots<T> {}
