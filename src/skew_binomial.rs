//! Persistent Skew Binomial Heap implementation
//!
//! A skew binomial heap is a forest of skew binomial trees kept in increasing
//! rank order. Unlike an ordinary binomial heap, the two smallest trees may
//! share a rank; inserting into such a forest "skew links" those two trees
//! with the new element, which never cascades. Insertion is therefore O(1)
//! worst-case.
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `insert`     | O(1)       |
//! | `find_min`   | O(log n)   |
//! | `delete_min` | O(log n)   |
//! | `meld`       | O(log n)   |
//!
//! Every tree carries, besides its children, a list of extra elements that
//! were demoted by skew links. They are re-inserted one at a time when their
//! tree's root is deleted.
//!
//! This heap is also the primitive queue under
//! [`BrodalOkasakiHeap`](crate::brodal_okasaki::BrodalOkasakiHeap).
//!
//! # References
//!
//! - Brodal, G.S. and Okasaki, C. (1996). "Optimal Purely Functional Priority Queues".
//! - Okasaki, C. (1998). "Purely Functional Data Structures", section 9.3.

use crate::traits::{HeapError, MeldableHeap};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// A skew binomial tree node
///
/// - `rank`: determines the tree's shape
/// - `root`: the minimum of the whole tree
/// - `extras`: elements demoted by skew links, each at least `root`
/// - `children`: subtrees in decreasing order of rank
struct TreeNode<T> {
    rank: usize,
    root: T,
    extras: Vec<T>,
    children: Vec<Tree<T>>,
}

type Tree<T> = Rc<TreeNode<T>>;

fn singleton<T>(x: T) -> Tree<T> {
    Rc::new(TreeNode {
        rank: 0,
        root: x,
        extras: Vec::new(),
        children: Vec::new(),
    })
}

/// Simple link: combine two trees of equal rank
///
/// The tree with the larger root becomes the first (highest rank) child of
/// the other.
fn link<T: Ord + Clone>(a: &Tree<T>, b: &Tree<T>) -> Tree<T> {
    debug_assert_eq!(a.rank, b.rank);
    let (winner, loser) = if a.root <= b.root { (a, b) } else { (b, a) };
    let mut children = Vec::with_capacity(winner.children.len() + 1);
    children.push(Rc::clone(loser));
    children.extend(winner.children.iter().cloned());
    Rc::new(TreeNode {
        rank: winner.rank + 1,
        root: winner.root.clone(),
        extras: winner.extras.clone(),
        children,
    })
}

/// Skew link: combine two trees of equal rank with a new element
///
/// The smaller of `x` and the linked root becomes the root; the other one is
/// kept as an extra element. The result has the same rank as a simple link.
fn skew_link<T: Ord + Clone>(x: T, a: &Tree<T>, b: &Tree<T>) -> Tree<T> {
    let linked = link(a, b);
    let (root, demoted) = if x <= linked.root {
        (x, linked.root.clone())
    } else {
        (linked.root.clone(), x)
    };
    let mut extras = Vec::with_capacity(linked.extras.len() + 1);
    extras.push(demoted);
    extras.extend(linked.extras.iter().cloned());
    Rc::new(TreeNode {
        rank: linked.rank,
        root,
        extras,
        children: linked.children.clone(),
    })
}

/// Insert a tree in front of a rank-ordered forest, linking equal ranks
///
/// `tree` must not have a larger rank than the forest's first tree.
fn insert_tree<T: Ord + Clone>(tree: Tree<T>, trees: &[Tree<T>]) -> Vec<Tree<T>> {
    let mut tree = tree;
    let mut rest = trees;
    while let Some((first, tail)) = rest.split_first() {
        if tree.rank < first.rank {
            break;
        }
        tree = link(&tree, first);
        rest = tail;
    }
    let mut result = Vec::with_capacity(rest.len() + 1);
    result.push(tree);
    result.extend(rest.iter().cloned());
    result
}

/// Merge two forests whose ranks are strictly increasing
fn merge_trees<T: Ord + Clone>(ts1: &[Tree<T>], ts2: &[Tree<T>]) -> Vec<Tree<T>> {
    match (ts1.split_first(), ts2.split_first()) {
        (None, _) => ts2.to_vec(),
        (_, None) => ts1.to_vec(),
        (Some((t1, rest1)), Some((t2, rest2))) => match t1.rank.cmp(&t2.rank) {
            Ordering::Less => {
                let mut result = vec![Rc::clone(t1)];
                result.extend(merge_trees(rest1, ts2));
                result
            }
            Ordering::Greater => {
                let mut result = vec![Rc::clone(t2)];
                result.extend(merge_trees(ts1, rest2));
                result
            }
            Ordering::Equal => insert_tree(link(t1, t2), &merge_trees(rest1, rest2)),
        },
    }
}

/// Resolve a possible duplicate rank at the front of the forest
fn normalize<T: Ord + Clone>(trees: &[Tree<T>]) -> Vec<Tree<T>> {
    match trees.split_first() {
        None => Vec::new(),
        Some((first, rest)) => insert_tree(Rc::clone(first), rest),
    }
}

/// A persistent skew binomial min-heap
pub struct SkewBinomialHeap<T> {
    /// Trees in increasing order of rank; only the first two may share one
    trees: Rc<Vec<Tree<T>>>,
    len: usize,
}

impl<T> Clone for SkewBinomialHeap<T> {
    fn clone(&self) -> Self {
        SkewBinomialHeap {
            trees: Rc::clone(&self.trees),
            len: self.len,
        }
    }
}

impl<T> SkewBinomialHeap<T> {
    /// Empty this heap, moving into `out` every element no other version shares
    pub(crate) fn take_unshared(&mut self, out: &mut Vec<T>) {
        let trees = std::mem::take(&mut self.trees);
        self.len = 0;
        let Ok(mut pending) = Rc::try_unwrap(trees) else {
            return;
        };
        while let Some(tree) = pending.pop() {
            if let Ok(node) = Rc::try_unwrap(tree) {
                out.push(node.root);
                out.extend(node.extras);
                pending.extend(node.children);
            }
        }
    }
}

impl<T: Ord + Clone> SkewBinomialHeap<T> {
    fn from_trees(trees: Vec<Tree<T>>, len: usize) -> Self {
        SkewBinomialHeap {
            trees: Rc::new(trees),
            len,
        }
    }

    /// Index of the tree holding the minimum root
    fn min_tree_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, tree) in self.trees.iter().enumerate() {
            match best {
                Some(b) if self.trees[b].root <= tree.root => {}
                _ => best = Some(i),
            }
        }
        best
    }

    /// Ranks of the trees in the forest, smallest first
    pub fn ranks(&self) -> Vec<usize> {
        self.trees.iter().map(|tree| tree.rank).collect()
    }
}

impl<T: Ord + Clone> MeldableHeap<T> for SkewBinomialHeap<T> {
    fn empty() -> Self {
        Self::from_trees(Vec::new(), 0)
    }

    fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn insert(&self, x: T) -> Self {
        let trees = self.trees.as_slice();
        let new_trees = match trees {
            [t1, t2, rest @ ..] if t1.rank == t2.rank => {
                let mut result = Vec::with_capacity(rest.len() + 1);
                result.push(skew_link(x, t1, t2));
                result.extend(rest.iter().cloned());
                result
            }
            _ => {
                let mut result = Vec::with_capacity(trees.len() + 1);
                result.push(singleton(x));
                result.extend(trees.iter().cloned());
                result
            }
        };
        Self::from_trees(new_trees, self.len + 1)
    }

    fn find_min(&self) -> Result<&T, HeapError> {
        self.min_tree_index()
            .map(|i| &self.trees[i].root)
            .ok_or(HeapError::empty("find_min"))
    }

    fn delete_min(&self) -> Result<Self, HeapError> {
        let min_idx = self
            .min_tree_index()
            .ok_or(HeapError::empty("delete_min"))?;
        let min_tree = &self.trees[min_idx];

        let remaining: Vec<Tree<T>> = self
            .trees
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != min_idx)
            .map(|(_, tree)| Rc::clone(tree))
            .collect();

        // Children are stored by decreasing rank; a forest wants increasing
        let children: Vec<Tree<T>> = min_tree.children.iter().rev().cloned().collect();

        let merged = merge_trees(&normalize(&remaining), &normalize(&children));
        let extras_len = min_tree.extras.len();
        let heap = Self::from_trees(merged, self.len - 1 - extras_len);

        Ok(min_tree
            .extras
            .iter()
            .cloned()
            .fold(heap, |heap, x| heap.insert(x)))
    }

    fn meld(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        let merged = merge_trees(&normalize(&self.trees), &normalize(&other.trees));
        Self::from_trees(merged, self.len + other.len)
    }
}

impl<T: Ord + Clone> Default for SkewBinomialHeap<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Ord + Clone> FromIterator<T> for SkewBinomialHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl<T: Ord + Clone + fmt::Debug> fmt::Debug for SkewBinomialHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SkewBinomialHeap")
            .field(&self.to_sorted_vec())
            .finish()
    }
}
