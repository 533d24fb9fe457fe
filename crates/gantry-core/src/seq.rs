//! Growable contiguous sequence backing every repeated field of a decoded
//! module.
//!
//! `Vec` alone does not pin down the capacity schedule, the splice primitive,
//! or the sorted-insert protocol the decode tables rely on, so that policy
//! lives here and `Vec` is only the backing storage. Capacity grows by
//! doubling with a floor of 8, clamped up to the exact requested size when
//! doubling is not enough, so reallocation stays amortized O(1) without
//! over-reserving for the small tables that dominate real modules.
//!
//! Running out of memory aborts the process (standard library allocation
//! semantics); there is no fallible-allocation path.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Capacity floor applied on the first growth.
const MIN_CAPACITY: usize = 8;

/// Owned, contiguous, resizable sequence.
///
/// Created empty without allocating; storage appears on first insert and is
/// released by [`reset`](Self::reset) or drop. Mutating calls may reallocate
/// and therefore invalidate previously obtained references into the
/// sequence; the borrow checker enforces that statically.
pub struct Seq<T> {
    elems: Vec<T>,
}

impl<T> Seq<T> {
    pub const fn new() -> Self {
        Self { elems: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut seq = Self::new();
        seq.reserve(capacity);
        seq
    }

    /// Occupied element count.
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Allocated element count.
    pub fn capacity(&self) -> usize {
        self.elems.capacity()
    }

    /// Ensure capacity for at least `capacity` elements. No-op when already
    /// satisfied; otherwise reallocates to exactly the requested size.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity > self.elems.capacity() {
            self.elems.reserve_exact(capacity - self.elems.len());
        }
    }

    /// Amortized growth for `extra` more elements: double the capacity, with
    /// a floor of [`MIN_CAPACITY`], clamped up to the exact need.
    fn grow(&mut self, extra: usize) {
        let needed = self.elems.len() + extra;
        if needed > self.elems.capacity() {
            let mut capacity = self.elems.capacity() * 2;
            if capacity < MIN_CAPACITY {
                capacity = MIN_CAPACITY;
            }
            if capacity < needed {
                capacity = needed;
            }
            self.reserve(capacity);
        }
    }

    pub fn push(&mut self, value: T) {
        self.grow(1);
        self.elems.push(value);
    }

    /// Remove and return the last element, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        self.elems.pop()
    }

    pub fn front(&self) -> Option<&T> {
        self.elems.first()
    }

    pub fn back(&self) -> Option<&T> {
        self.elems.last()
    }

    /// Insert `value` at `index`, shifting later elements right.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        self.grow(1);
        self.elems.insert(index, value);
    }

    /// Remove and return the element at `index`, shifting later elements
    /// left.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn erase(&mut self, index: usize) -> T {
        self.elems.remove(index)
    }

    /// Set the length to zero without releasing storage.
    pub fn clear(&mut self) {
        self.elems.clear();
    }

    /// Drop all elements and release the backing storage. The sequence stays
    /// usable and reallocates on the next insert.
    pub fn reset(&mut self) {
        self.elems = Vec::new();
    }

    /// Exchange contents with another sequence.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.elems, &mut other.elems);
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elems
    }

    /// Binary search over a sequence sorted ascending under `compare`.
    ///
    /// `compare` orders an existing element against the needle. Returns the
    /// matching index and `true`, or the insertion index that would keep the
    /// order and `false`.
    ///
    /// The narrowing rule is part of the contract: the span starts at
    /// `[0, len)` and each step moves the lower bound to the midpoint only
    /// while the midpoint compares less-or-equal, so among equal elements
    /// the search lands on the highest index of the run.
    pub fn search_sorted_by<K, F>(&self, mut compare: F, needle: &K) -> (usize, bool)
    where
        F: FnMut(&T, &K) -> Ordering,
    {
        let mut index = 0;
        let mut size = self.elems.len();
        if size == 0 {
            return (0, false);
        }
        while size > 1 {
            let half = size / 2;
            let mid = index + half;
            if compare(&self.elems[mid], needle) != Ordering::Greater {
                index = mid;
            }
            size -= half;
        }
        match compare(&self.elems[index], needle) {
            Ordering::Equal => (index, true),
            Ordering::Less => (index + 1, false),
            Ordering::Greater => (index, false),
        }
    }

    /// Insert `value` into a sequence sorted ascending under `compare`,
    /// unless an equal element already exists. Returns whether the value was
    /// inserted.
    pub fn insert_sorted_by<F>(&mut self, mut compare: F, value: T) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let (index, exists) = self.search_sorted_by(&mut compare, &value);
        if exists {
            return false;
        }
        self.insert(index, value);
        true
    }
}

impl<T: Default> Seq<T> {
    /// Extend by `count` default-initialized elements.
    pub fn grow_by(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.grow(count);
        self.elems
            .extend(std::iter::repeat_with(T::default).take(count));
    }
}

impl<T: Clone> Seq<T> {
    /// Append a copy of every element in `other`.
    pub fn extend_from_slice(&mut self, other: &[T]) {
        self.grow(other.len());
        self.elems.extend_from_slice(other);
    }

    /// Replace contents with a copy of `other`, reallocating if needed.
    pub fn assign(&mut self, other: &[T]) {
        self.elems.clear();
        self.reserve(other.len());
        self.elems.extend_from_slice(other);
    }
}

impl<T: Clone + Default> Seq<T> {
    /// Remove `old_count` elements at `index` and insert `new_count` there,
    /// copied from `source` when given, default-initialized otherwise. The
    /// single primitive underlying insert, erase, and extend.
    ///
    /// # Panics
    /// Panics if `index + old_count > len`, or if `source` is given with a
    /// length other than `new_count`.
    pub fn splice(
        &mut self,
        index: usize,
        old_count: usize,
        new_count: usize,
        source: Option<&[T]>,
    ) {
        let old_end = index + old_count;
        assert!(old_end <= self.elems.len(), "splice range out of bounds");
        if new_count > old_count {
            self.grow(new_count - old_count);
        }
        match source {
            Some(source) => {
                assert_eq!(source.len(), new_count, "splice source length mismatch");
                self.elems.splice(index..old_end, source.iter().cloned());
            }
            None => {
                self.elems
                    .splice(index..old_end, std::iter::repeat_with(T::default).take(new_count));
            }
        }
    }
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Seq<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.elems
    }
}

impl<T> DerefMut for Seq<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.elems
    }
}

impl<T: Clone> Clone for Seq<T> {
    fn clone(&self) -> Self {
        Self {
            elems: self.elems.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Seq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elems == other.elems
    }
}

impl<T: Eq> Eq for Seq<T> {}

impl<T: fmt::Debug> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elems.iter()).finish()
    }
}

impl<T: serde::Serialize> serde::Serialize for Seq<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.elems.iter())
    }
}
