//! The capability set shared by every heap in this crate
//!
//! This module defines [`MeldableHeap`], the minimal operation set needed by
//! mergeable priority queue algorithms, and [`HeapError`], the single
//! precondition failure those operations can report.
//!
//! Every heap is a persistent value: operations take `&self` and return a new
//! heap, leaving the receiver untouched and still usable. Implementations are
//! free to share structure between versions (all of the heaps here do, via
//! `Rc`), but the contract only requires that old values stay valid.

use thiserror::Error;

/// Error type for heap operations
///
/// The only way to misuse a heap is to ask an empty one for its minimum.
/// Rather than invent a sentinel element, the operation fails fast and names
/// itself in the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `find_min`, `delete_min` or `pop_min` was called on an empty heap
    #[error("{operation} called on an empty heap")]
    EmptyHeap {
        /// Name of the operation that was attempted
        operation: &'static str,
    },
}

impl HeapError {
    pub(crate) fn empty(operation: &'static str) -> Self {
        HeapError::EmptyHeap { operation }
    }
}

/// A persistent, mergeable min-heap over a totally ordered element type
///
/// The six operations `empty`, `is_empty`, `insert`, `find_min`,
/// `delete_min` and `meld` form the contract; `len` is required so the
/// laws can check element accounting, and the remaining methods are
/// conveniences derived from the contract.
///
/// Elements are stored directly and compared with `Ord`; there is no
/// separate priority. When the minimum occurs more than once, any
/// occurrence may be reported, since they are indistinguishable by value.
///
/// # Example
///
/// ```rust
/// use heap_laws::MeldableHeap;
/// use heap_laws::leftist::LeftistHeap;
///
/// let heap = LeftistHeap::empty().insert(3).insert(5);
/// assert_eq!(heap.find_min(), Ok(&3));
///
/// let rest = heap.delete_min().unwrap();
/// assert_eq!(rest.find_min(), Ok(&5));
/// assert!(rest.delete_min().unwrap().is_empty());
///
/// // The original value is unaffected
/// assert_eq!(heap.len(), 2);
/// ```
pub trait MeldableHeap<T: Ord>: Clone + Sized {
    /// Returns the canonical empty heap
    fn empty() -> Self;

    /// Returns true if the heap holds no elements
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Returns a new heap holding this heap's elements plus `x`
    fn insert(&self, x: T) -> Self;

    /// Returns the smallest element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    fn find_min(&self) -> Result<&T, HeapError>;

    /// Returns a new heap without one occurrence of the minimum
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    fn delete_min(&self) -> Result<Self, HeapError>;

    /// Returns a new heap whose elements are the multiset union of both heaps
    fn meld(&self, other: &Self) -> Self;

    /// Returns a heap holding only `x`
    fn singleton(x: T) -> Self {
        Self::empty().insert(x)
    }

    /// Returns the minimum together with the heap that remains without it
    ///
    /// Implementations may override this when removing the minimum already
    /// yields it for free.
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    fn pop_min(&self) -> Result<(T, Self), HeapError>
    where
        T: Clone,
    {
        let min = self
            .find_min()
            .map_err(|_| HeapError::empty("pop_min"))?
            .clone();
        let rest = self.delete_min()?;
        Ok((min, rest))
    }

    /// Builds a heap by inserting every element of `iter` into an empty heap
    fn from_elements<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |heap, x| heap.insert(x))
    }

    /// Drains a copy of the heap in ascending order
    fn to_sorted_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len());
        let mut heap = self.clone();
        while let Ok((min, rest)) = heap.pop_min() {
            out.push(min);
            heap = rest;
        }
        out
    }
}
