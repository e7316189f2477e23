//! Persistent Leftist Heap implementation
//!
//! A leftist heap is a heap-ordered binary tree where every node's left child
//! has rank (distance to the nearest missing child) at least as large as its
//! right child's. The right spine is therefore at most O(log n) long, and
//! melding only ever walks right spines.
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `insert`     | O(log n)   |
//! | `find_min`   | O(1)       |
//! | `delete_min` | O(log n)   |
//! | `meld`       | O(log n)   |
//!
//! Nodes are shared between versions through `Rc`; only the nodes along the
//! merged right spines are rebuilt.
//!
//! # References
//!
//! - Okasaki, C. (1998). "Purely Functional Data Structures", section 3.1.

use crate::traits::{HeapError, MeldableHeap};
use std::fmt;
use std::rc::Rc;

type Link<T> = Option<Rc<Node<T>>>;

struct Node<T> {
    rank: usize,
    element: T,
    left: Link<T>,
    right: Link<T>,
}

/// A persistent leftist min-heap
pub struct LeftistHeap<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Clone for LeftistHeap<T> {
    fn clone(&self) -> Self {
        LeftistHeap {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

// A left spine can be as long as the heap; free it without recursion.
// Nodes still shared with another version are left alone.
impl<T> Drop for LeftistHeap<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Rc<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(node) = pending.pop() {
            if let Ok(mut node) = Rc::try_unwrap(node) {
                pending.extend(node.left.take());
                pending.extend(node.right.take());
            }
        }
    }
}

fn rank<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.rank)
}

impl<T: Ord + Clone> LeftistHeap<T> {
    /// Build a node, swapping children so the higher rank sits on the left
    fn make_node(element: T, a: Link<T>, b: Link<T>) -> Rc<Node<T>> {
        let (left, right) = if rank(&a) >= rank(&b) { (a, b) } else { (b, a) };
        Rc::new(Node {
            rank: rank(&right) + 1,
            element,
            left,
            right,
        })
    }

    /// Merge two trees along their right spines
    ///
    /// Recursion depth is bounded by the sum of both right spine lengths,
    /// which is logarithmic in the heap sizes.
    fn merge(a: &Link<T>, b: &Link<T>) -> Link<T> {
        match (a, b) {
            (None, _) => b.clone(),
            (_, None) => a.clone(),
            (Some(x), Some(y)) => {
                if x.element <= y.element {
                    Some(Self::make_node(
                        x.element.clone(),
                        x.left.clone(),
                        Self::merge(&x.right, b),
                    ))
                } else {
                    Some(Self::make_node(
                        y.element.clone(),
                        y.left.clone(),
                        Self::merge(a, &y.right),
                    ))
                }
            }
        }
    }

    /// Rank of the root, i.e. the length of the right spine
    pub fn rank(&self) -> usize {
        rank(&self.root)
    }
}

impl<T: Ord + Clone> MeldableHeap<T> for LeftistHeap<T> {
    fn empty() -> Self {
        LeftistHeap { root: None, len: 0 }
    }

    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn insert(&self, x: T) -> Self {
        let single = Some(Rc::new(Node {
            rank: 1,
            element: x,
            left: None,
            right: None,
        }));
        LeftistHeap {
            root: Self::merge(&single, &self.root),
            len: self.len + 1,
        }
    }

    fn find_min(&self) -> Result<&T, HeapError> {
        self.root
            .as_ref()
            .map(|node| &node.element)
            .ok_or(HeapError::empty("find_min"))
    }

    fn delete_min(&self) -> Result<Self, HeapError> {
        let root = self.root.as_ref().ok_or(HeapError::empty("delete_min"))?;
        Ok(LeftistHeap {
            root: Self::merge(&root.left, &root.right),
            len: self.len - 1,
        })
    }

    fn meld(&self, other: &Self) -> Self {
        LeftistHeap {
            root: Self::merge(&self.root, &other.root),
            len: self.len + other.len,
        }
    }
}

impl<T: Ord + Clone> Default for LeftistHeap<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Ord + Clone> FromIterator<T> for LeftistHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl<T: Ord + Clone + fmt::Debug> fmt::Debug for LeftistHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LeftistHeap")
            .field(&self.to_sorted_vec())
            .finish()
    }
}
