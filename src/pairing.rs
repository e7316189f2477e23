//! Persistent Pairing Heap implementation
//!
//! A pairing heap is a heap-ordered multiway tree. Melding two trees just
//! makes the larger root the first child of the smaller one, so `insert` and
//! `meld` are O(1). `delete_min` removes the root and combines its children
//! with the classic two-pass scheme: link children pairwise left to right,
//! then fold the pairs together right to left.
//!
//! | Operation    | Complexity            |
//! |--------------|-----------------------|
//! | `insert`     | O(1)                  |
//! | `find_min`   | O(1)                  |
//! | `delete_min` | O(log n) amortized    |
//! | `meld`       | O(1)                  |
//!
//! The amortized bound assumes single-threaded use of each version; a
//! persistent heap may replay an expensive `delete_min` on an old version,
//! in which case the cost is O(n) worst-case per call. The contract only
//! cares about the results, which are the same either way.
//!
//! # References
//!
//! - Fredman, M.L., Sedgewick, R., Sleator, D.D., Tarjan, R.E. (1986).
//!   "The pairing heap: A new form of self-adjusting heap". Algorithmica 1(1).

use crate::traits::{HeapError, MeldableHeap};
use std::fmt;
use std::rc::Rc;

/// A heap-ordered tree: the root element plus a persistent list of subtrees
struct Tree<T> {
    element: T,
    children: Children<T>,
}

type Children<T> = Option<Rc<Child<T>>>;

/// One cell of a tree's child list
struct Child<T> {
    tree: Rc<Tree<T>>,
    next: Children<T>,
}

/// A persistent pairing min-heap
pub struct PairingHeap<T> {
    root: Option<Rc<Tree<T>>>,
    len: usize,
}

impl<T> Clone for PairingHeap<T> {
    fn clone(&self) -> Self {
        PairingHeap {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

// Ascending inserts hang every element off the root's child list, so free
// trees and list cells from a worklist instead of through drop glue
impl<T> Drop for PairingHeap<T> {
    fn drop(&mut self) {
        let mut trees: Vec<Rc<Tree<T>>> = self.root.take().into_iter().collect();
        let mut cells: Vec<Rc<Child<T>>> = Vec::new();
        loop {
            if let Some(cell) = cells.pop() {
                if let Ok(Child { tree, next }) = Rc::try_unwrap(cell) {
                    trees.push(tree);
                    cells.extend(next);
                }
            } else if let Some(tree) = trees.pop() {
                if let Ok(Tree { children, .. }) = Rc::try_unwrap(tree) {
                    cells.extend(children);
                }
            } else {
                break;
            }
        }
    }
}

impl<T: Ord + Clone> PairingHeap<T> {
    /// Link two trees: the one with the larger root becomes the first child
    fn link(a: &Rc<Tree<T>>, b: &Rc<Tree<T>>) -> Rc<Tree<T>> {
        let (winner, loser) = if a.element <= b.element { (a, b) } else { (b, a) };
        Rc::new(Tree {
            element: winner.element.clone(),
            children: Some(Rc::new(Child {
                tree: Rc::clone(loser),
                next: winner.children.clone(),
            })),
        })
    }

    /// Two-pass pairing of a child list into a single tree
    fn merge_pairs(children: &Children<T>) -> Option<Rc<Tree<T>>> {
        let mut trees = Vec::new();
        let mut cursor = children;
        while let Some(cell) = cursor {
            trees.push(Rc::clone(&cell.tree));
            cursor = &cell.next;
        }

        // First pass: left to right, link adjacent pairs
        let mut paired: Vec<Rc<Tree<T>>> = trees
            .chunks(2)
            .map(|pair| match pair {
                [a, b] => Self::link(a, b),
                _ => Rc::clone(&pair[0]),
            })
            .collect();

        // Second pass: right to left, fold into one tree
        let mut acc = paired.pop()?;
        while let Some(tree) = paired.pop() {
            acc = Self::link(&tree, &acc);
        }
        Some(acc)
    }

    /// Number of direct children of the root
    pub fn root_degree(&self) -> usize {
        let mut degree = 0;
        let mut cursor = self.root.as_ref().map(|tree| &tree.children);
        while let Some(Some(cell)) = cursor {
            degree += 1;
            cursor = Some(&cell.next);
        }
        degree
    }
}

impl<T: Ord + Clone> MeldableHeap<T> for PairingHeap<T> {
    fn empty() -> Self {
        PairingHeap { root: None, len: 0 }
    }

    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn insert(&self, x: T) -> Self {
        self.meld(&PairingHeap {
            root: Some(Rc::new(Tree {
                element: x,
                children: None,
            })),
            len: 1,
        })
    }

    fn find_min(&self) -> Result<&T, HeapError> {
        self.root
            .as_ref()
            .map(|tree| &tree.element)
            .ok_or(HeapError::empty("find_min"))
    }

    fn delete_min(&self) -> Result<Self, HeapError> {
        let root = self.root.as_ref().ok_or(HeapError::empty("delete_min"))?;
        Ok(PairingHeap {
            root: Self::merge_pairs(&root.children),
            len: self.len - 1,
        })
    }

    fn meld(&self, other: &Self) -> Self {
        let root = match (&self.root, &other.root) {
            (None, root) | (root, None) => root.clone(),
            (Some(a), Some(b)) => Some(Self::link(a, b)),
        };
        PairingHeap {
            root,
            len: self.len + other.len,
        }
    }
}

impl<T: Ord + Clone> Default for PairingHeap<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Ord + Clone> FromIterator<T> for PairingHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl<T: Ord + Clone + fmt::Debug> fmt::Debug for PairingHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PairingHeap")
            .field(&self.to_sorted_vec())
            .finish()
    }
}
