//! Sorted List Heap implementation
//!
//! A persistent singly linked list kept in ascending order. It is the
//! simplest structure that satisfies the [`MeldableHeap`] contract and serves
//! as the reference model that the other heaps are compared against.
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `insert`     | O(n)       |
//! | `find_min`   | O(1)       |
//! | `delete_min` | O(1)       |
//! | `meld`       | O(n + m)   |
//!
//! `insert` copies only the cells in front of the insertion point; the tail
//! behind it is shared with the previous version.
//!
//! # Example
//!
//! ```rust
//! use heap_laws::MeldableHeap;
//! use heap_laws::sorted_list::SortedListHeap;
//!
//! let heap = SortedListHeap::empty().insert(5).insert(3);
//! assert_eq!(heap.find_min(), Ok(&3));
//! assert_eq!(heap.iter().copied().collect::<Vec<_>>(), vec![3, 5]);
//! ```

use crate::traits::{HeapError, MeldableHeap};
use std::fmt;
use std::rc::Rc;

type List<T> = Option<Rc<Cell<T>>>;

struct Cell<T> {
    element: T,
    next: List<T>,
}

/// A persistent min-heap backed by a sorted linked list
pub struct SortedListHeap<T> {
    head: List<T>,
    len: usize,
}

impl<T> Clone for SortedListHeap<T> {
    fn clone(&self) -> Self {
        SortedListHeap {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

// Unlink iteratively so that dropping a long list cannot overflow the stack.
// Stops at the first cell still shared with another version.
impl<T> Drop for SortedListHeap<T> {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(cell) = cursor {
            match Rc::try_unwrap(cell) {
                Ok(mut cell) => cursor = cell.next.take(),
                Err(_) => break,
            }
        }
    }
}

/// Borrowing iterator over a [`SortedListHeap`] in ascending order
pub struct Iter<'a, T> {
    cursor: Option<&'a Cell<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.cursor?;
        self.cursor = cell.next.as_deref();
        Some(&cell.element)
    }
}

impl<T> SortedListHeap<T> {
    /// Iterate over the elements in ascending order without consuming the heap
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            cursor: self.head.as_deref(),
        }
    }
}

impl<T: Ord + Clone> SortedListHeap<T> {
    /// Prepend `prefix` (ascending) onto `tail`, sharing `tail`
    fn rebuild(prefix: Vec<T>, tail: List<T>) -> List<T> {
        prefix
            .into_iter()
            .rev()
            .fold(tail, |next, element| Some(Rc::new(Cell { element, next })))
    }
}

impl<T: Ord + Clone> MeldableHeap<T> for SortedListHeap<T> {
    fn empty() -> Self {
        SortedListHeap { head: None, len: 0 }
    }

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn insert(&self, x: T) -> Self {
        // Equal elements stay in insertion order: x goes after them
        let mut prefix = Vec::new();
        let mut cursor = &self.head;
        while let Some(cell) = cursor {
            if cell.element > x {
                break;
            }
            prefix.push(cell.element.clone());
            cursor = &cell.next;
        }
        let tail = Some(Rc::new(Cell {
            element: x,
            next: cursor.clone(),
        }));
        SortedListHeap {
            head: Self::rebuild(prefix, tail),
            len: self.len + 1,
        }
    }

    fn find_min(&self) -> Result<&T, HeapError> {
        self.head
            .as_ref()
            .map(|cell| &cell.element)
            .ok_or(HeapError::empty("find_min"))
    }

    fn delete_min(&self) -> Result<Self, HeapError> {
        let cell = self.head.as_ref().ok_or(HeapError::empty("delete_min"))?;
        Ok(SortedListHeap {
            head: cell.next.clone(),
            len: self.len - 1,
        })
    }

    fn meld(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }

        let mut merged = Vec::with_capacity(self.len + other.len);
        let mut left = self.iter().peekable();
        let mut right = other.iter().peekable();
        loop {
            let take_left = match (left.peek(), right.peek()) {
                (Some(a), Some(b)) => a <= b,
                _ => break,
            };
            let next = if take_left { left.next() } else { right.next() };
            merged.extend(next.cloned());
        }
        merged.extend(left.cloned());
        merged.extend(right.cloned());

        SortedListHeap {
            head: Self::rebuild(merged, None),
            len: self.len + other.len,
        }
    }

    fn to_sorted_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Ord + Clone> Default for SortedListHeap<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Ord + Clone> FromIterator<T> for SortedListHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut elements: Vec<T> = iter.into_iter().collect();
        elements.sort();
        SortedListHeap {
            len: elements.len(),
            head: Self::rebuild(elements, None),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedListHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SortedListHeap")
            .field(&DebugList(self))
            .finish()
    }
}

struct DebugList<'a, T>(&'a SortedListHeap<T>);

impl<T: fmt::Debug> fmt::Debug for DebugList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
