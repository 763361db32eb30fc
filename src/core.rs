use alloc::string::{String, ToString};
use core::fmt::{self, Write as _};
use core::ops::Index;
use core::slice;

use crate::error::GrowVecError;
use crate::index::normalize_index;
use crate::iter::{GrowVecIter, GrowVecRevIter};
use crate::raw::RawSlots;

const MIN_CAPACITY: usize = 1;
const GROWTH_FACTOR: usize = 2;
const SHRINK_OCCUPANCY_DIVISOR: usize = 4;
const SHRINK_FACTOR: usize = 2;

/// A growable vector that manages its own backing buffer
pub struct GrowVec<T> {
    slots: RawSlots<T>,
    len: usize,
}

impl<T> GrowVec<T> {
    /// Creates an empty `GrowVec` backed by a single slot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: RawSlots::allocate(MIN_CAPACITY),
            len: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the current backing buffer. Never zero.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    fn position(&self, index: isize) -> Result<usize, GrowVecError> {
        normalize_index(index, self.len).ok_or_else(|| {
            tracing::debug!(index, len = self.len, "index out of range");
            GrowVecError::IndexOutOfRange { index }
        })
    }

    /// Gets the element at the specified index.
    ///
    /// Negative indices count back from the end: `-1` is the last element.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::IndexOutOfRange` carrying the original index if
    /// it does not address a live element.
    pub fn get(&self, index: isize) -> Result<&T, GrowVecError> {
        let position = self.position(index)?;
        // Safety: `position < len`, so the slot is live.
        #[allow(unsafe_code)]
        let item = unsafe { self.slots.slot(position) };
        Ok(item)
    }

    /// Returns the last element, or `None` if the vector is empty.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.get(-1).ok()
    }

    /// Returns the last element without removing it.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::EmptyContainer` if the vector is empty.
    pub fn try_last(&self) -> Result<&T, GrowVecError> {
        if self.len == 0 {
            return Err(GrowVecError::EmptyContainer);
        }
        self.get(-1)
    }

    /// Appends an element, doubling the buffer first if it is full.
    ///
    /// # Panics
    ///
    /// Panics if the doubled capacity overflows `usize` or the buffer size
    /// overflows `isize`.
    #[allow(clippy::expect_used)]
    pub fn append(&mut self, value: T) {
        if self.len == self.capacity() {
            let grown = self
                .capacity()
                .checked_mul(GROWTH_FACTOR)
                .expect("capacity overflow");
            self.resize(grown, "grow");
        }
        // Safety: `len < capacity` and slot `len` holds no live value.
        #[allow(unsafe_code)]
        unsafe {
            self.slots.write(self.len, value);
        }
        self.len += 1;
    }

    /// Pushes an element onto the end. Same as [`GrowVec::append`].
    pub fn push(&mut self, value: T) {
        self.append(value);
    }

    /// Removes and returns the last element.
    ///
    /// The buffer is halved afterwards if at most a quarter of it is in use.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::EmptyContainer` if the vector is empty; the
    /// vector is left unchanged.
    pub fn remove_last(&mut self) -> Result<T, GrowVecError> {
        if self.len == 0 {
            tracing::debug!("remove from empty container");
            return Err(GrowVecError::EmptyContainer);
        }

        self.len -= 1;
        // Safety: slot `len` was the last live slot and is not read again.
        #[allow(unsafe_code)]
        let value = unsafe { self.slots.take(self.len) };

        self.shrink_if_sparse();
        Ok(value)
    }

    /// Removes and returns the last element.
    ///
    /// Returns `None` if the vector is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.remove_last().ok()
    }

    /// Drops every element and goes back to a single-slot buffer.
    pub fn clear(&mut self) {
        let live = self.len;
        self.len = 0;
        // Safety: slots `[0, live)` were live; `len` is already zero so a
        // panicking destructor cannot cause a double drop.
        #[allow(unsafe_code)]
        unsafe {
            self.slots.drop_live(live);
        }
        if self.capacity() != MIN_CAPACITY {
            self.slots = RawSlots::allocate(MIN_CAPACITY);
        }
    }

    fn shrink_if_sparse(&mut self) {
        let capacity = self.capacity();
        if capacity > MIN_CAPACITY && self.len <= capacity / SHRINK_OCCUPANCY_DIVISOR {
            self.resize(capacity / SHRINK_FACTOR, "shrink");
        }
    }

    fn resize(&mut self, new_capacity: usize, reason: &'static str) {
        tracing::trace!(
            from = self.capacity(),
            to = new_capacity,
            len = self.len,
            reason,
            "resizing buffer"
        );
        // Safety: slots `[0, len)` are live and `len <= new_capacity` for both
        // growth (capacity doubles) and shrink (len <= capacity / 4).
        #[allow(unsafe_code)]
        unsafe {
            self.slots.relocate(self.len, new_capacity);
        }
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        // Safety: the first `len` slots are initialized and contiguous.
        #[allow(unsafe_code)]
        unsafe {
            slice::from_raw_parts(self.slots.as_ptr(), self.len)
        }
    }

    /// Returns an iterator over the elements, front to back.
    #[must_use]
    pub fn iter(&self) -> GrowVecIter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over the elements, back to front.
    #[must_use]
    pub fn iter_rev(&self) -> GrowVecRevIter<'_, T> {
        GrowVecRevIter::new(self)
    }
}

impl<T: fmt::Display> GrowVec<T> {
    /// Renders the elements as `[a, b, c]`.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl<T> Drop for GrowVec<T> {
    fn drop(&mut self) {
        // Safety: slots `[0, len)` are live; the block itself is released by
        // `RawSlots`.
        #[allow(unsafe_code)]
        unsafe {
            self.slots.drop_live(self.len);
        }
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowVec<T> {
    fn clone(&self) -> Self {
        let mut copy = Self {
            slots: RawSlots::allocate(self.capacity()),
            len: 0,
        };
        for item in self {
            // Safety: `copy.len < self.len <= capacity` and the slot is free.
            #[allow(unsafe_code)]
            unsafe {
                copy.slots.write(copy.len, item.clone());
            }
            copy.len += 1;
        }
        copy
    }
}

impl<T: PartialEq> PartialEq for GrowVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowVec<T> {}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (position, item) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_char(']')
    }
}

impl<T> Index<isize> for GrowVec<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` does not address a live element.
    fn index(&self, index: isize) -> &Self::Output {
        match self.get(index) {
            Ok(item) => item,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T> Extend<T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}
