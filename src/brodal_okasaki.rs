//! Brodal-Okasaki Heap implementation
//!
//! A purely functional priority queue with optimal worst-case time bounds:
//! - O(1) worst-case: insert, find_min, meld
//! - O(log n) worst-case: delete_min
//!
//! # Overview
//!
//! This follows Brodal and Okasaki's "Optimal Purely Functional Priority
//! Queues", which layers two techniques over a skew binomial heap:
//!
//! 1. **Global Root**: the minimum element is held outside the primitive
//!    heap, giving O(1) `find_min`.
//!
//! 2. **Bootstrapping**: the primitive heap stores whole heaps as its
//!    elements, ordered by their roots. Melding two heaps is one O(1)
//!    insertion of the heap with the larger root into the other.
//!
//! # References
//!
//! - Brodal, G.S. and Okasaki, C. (1996). "Optimal Purely Functional Priority Queues".
//!   Journal of Functional Programming 6(6):839-858.
//! - Okasaki, C. (1998). "Purely Functional Data Structures". Cambridge University Press.

use crate::skew_binomial::SkewBinomialHeap;
use crate::traits::{HeapError, MeldableHeap};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// Bootstrapped Brodal-Okasaki Heap
pub struct BrodalOkasakiHeap<T> {
    inner: Option<Rc<BootstrappedHeap<T>>>,
    len: usize,
}

/// A non-empty heap: the global minimum plus a primitive heap of sub-heaps
struct BootstrappedHeap<T> {
    min: T,
    prim_heap: SkewBinomialHeap<Rc<BootstrappedHeap<T>>>,
}

// Sub-heaps are ordered by their roots only, which is all the primitive heap
// needs to keep the smallest sub-heap reachable
impl<T: Ord> PartialEq for BootstrappedHeap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min
    }
}

impl<T: Ord> Eq for BootstrappedHeap<T> {}

impl<T: Ord> PartialOrd for BootstrappedHeap<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for BootstrappedHeap<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.min.cmp(&other.min)
    }
}

impl<T> Clone for BrodalOkasakiHeap<T> {
    fn clone(&self) -> Self {
        BrodalOkasakiHeap {
            inner: self.inner.clone(),
            len: self.len,
        }
    }
}

// Each sub-heap owns a primitive heap of further sub-heaps, nesting as deep
// as the element count. Unwind them through a worklist.
impl<T> Drop for BrodalOkasakiHeap<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Rc<BootstrappedHeap<T>>> = self.inner.take().into_iter().collect();
        while let Some(heap) = pending.pop() {
            if let Ok(mut heap) = Rc::try_unwrap(heap) {
                heap.prim_heap.take_unshared(&mut pending);
            }
        }
    }
}

impl<T: Ord + Clone> BrodalOkasakiHeap<T> {
    /// Number of sub-heaps directly under the global root
    pub fn sub_heap_count(&self) -> usize {
        self.inner.as_ref().map_or(0, |h| h.prim_heap.len())
    }

    /// Link two non-empty bootstrapped heaps: the one with the larger root
    /// becomes an element of the other's primitive heap
    fn link(
        a: &Rc<BootstrappedHeap<T>>,
        b: &Rc<BootstrappedHeap<T>>,
    ) -> Rc<BootstrappedHeap<T>> {
        let (smaller, larger) = if a.min <= b.min { (a, b) } else { (b, a) };
        Rc::new(BootstrappedHeap {
            min: smaller.min.clone(),
            prim_heap: smaller.prim_heap.insert(Rc::clone(larger)),
        })
    }
}

impl<T: Ord + Clone> MeldableHeap<T> for BrodalOkasakiHeap<T> {
    fn empty() -> Self {
        BrodalOkasakiHeap {
            inner: None,
            len: 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn insert(&self, x: T) -> Self {
        self.meld(&BrodalOkasakiHeap {
            inner: Some(Rc::new(BootstrappedHeap {
                min: x,
                prim_heap: SkewBinomialHeap::empty(),
            })),
            len: 1,
        })
    }

    fn find_min(&self) -> Result<&T, HeapError> {
        self.inner
            .as_ref()
            .map(|h| &h.min)
            .ok_or(HeapError::empty("find_min"))
    }

    fn delete_min(&self) -> Result<Self, HeapError> {
        let h = self.inner.as_ref().ok_or(HeapError::empty("delete_min"))?;

        if h.prim_heap.is_empty() {
            return Ok(BrodalOkasakiHeap::empty());
        }

        // The sub-heap with the smallest root supplies the new global root;
        // its own primitive heap is melded into what remains
        let (next, rest) = h.prim_heap.pop_min()?;
        let new_inner = BootstrappedHeap {
            min: next.min.clone(),
            prim_heap: rest.meld(&next.prim_heap),
        };

        Ok(BrodalOkasakiHeap {
            inner: Some(Rc::new(new_inner)),
            len: self.len - 1,
        })
    }

    fn meld(&self, other: &Self) -> Self {
        let inner = match (&self.inner, &other.inner) {
            (None, inner) | (inner, None) => inner.clone(),
            (Some(h1), Some(h2)) => Some(Self::link(h1, h2)),
        };
        BrodalOkasakiHeap {
            inner,
            len: self.len + other.len,
        }
    }
}

impl<T: Ord + Clone> Default for BrodalOkasakiHeap<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Ord + Clone> FromIterator<T> for BrodalOkasakiHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl<T: Ord + Clone + fmt::Debug> fmt::Debug for BrodalOkasakiHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BrodalOkasakiHeap")
            .field(&self.to_sorted_vec())
            .finish()
    }
}
