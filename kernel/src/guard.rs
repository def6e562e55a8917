//! Scoped slot overwrite with guaranteed restoration.
//!
//! Sentinel searches plant the target in a slot of the caller's sequence to
//! drop the bounds check from their scan loop. [`SlotGuard`] owns that
//! mutation: the original value is written back when the guard is dropped,
//! on every exit path including early returns and unwinding.

use std::ops::{Deref, DerefMut};

/// Mutable borrow of a sequence with one slot temporarily overwritten.
///
/// Dereferences to the whole (overwritten) sequence while alive.
#[derive(Debug)]
pub struct SlotGuard<'a, T: Copy> {
    seq: &'a mut [T],
    index: usize,
    original: T,
}

impl<'a, T: Copy> SlotGuard<'a, T> {
    /// Overwrite `seq[index]` with `value` until the guard is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn plant(seq: &'a mut [T], index: usize, value: T) -> Self {
        let original = std::mem::replace(&mut seq[index], value);
        Self {
            seq,
            index,
            original,
        }
    }

    /// The value that occupied the slot before it was overwritten.
    #[must_use]
    pub fn original(&self) -> T {
        self.original
    }

    /// Index of the overwritten slot.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T: Copy> Deref for SlotGuard<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.seq
    }
}

impl<T: Copy> DerefMut for SlotGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.seq
    }
}

impl<T: Copy> Drop for SlotGuard<'_, T> {
    fn drop(&mut self) {
        self.seq[self.index] = self.original;
    }
}
