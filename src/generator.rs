//! Random heap generation with proptest
//!
//! Two ways of producing arbitrary heaps:
//!
//! - [`arb_heap`] builds a heap by recursive coin flips: at each level,
//!   either one more random insertion on top of a recursively generated heap
//!   or none, bottoming out at the empty heap. Recursion is bounded by
//!   [`CheckConfig::max_depth`], and the insertion odds decay with depth so
//!   that sizes hover around a handful of elements.
//! - [`arb_heap_via_ops`] folds a random list of [`HeapOp`]s over the empty
//!   heap, so the result may also have been shaped by `delete_min` and
//!   `meld`. The op list is bounded by [`CheckConfig::max_heap_size`] and
//!   shrinks toward fewer, simpler operations.
//!
//! [`arb_reachable_heap`] mixes both and is what the runner uses.

use crate::config::CheckConfig;
use crate::traits::MeldableHeap;
use proptest::collection::vec;
use proptest::prelude::*;
use std::fmt::Debug;
use std::ops::Range;

/// Element range used by the shipped laws
///
/// Kept narrow so that generated heaps routinely contain duplicates.
pub const ELEMENT_RANGE: Range<i64> = -1000..1000;

/// Strategy for the integer elements used by the shipped laws
pub fn elements() -> Range<i64> {
    ELEMENT_RANGE
}

/// One step in building a heap from the empty heap
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeapOp<T> {
    /// Insert one element
    Insert(T),
    /// Delete the minimum, if there is one
    DeleteMin,
    /// Meld with a heap built from these elements
    Meld(Vec<T>),
}

/// Apply `ops` in order, starting from the empty heap
///
/// `DeleteMin` on an empty heap is skipped, so every op list is valid.
pub fn apply_ops<T, H>(ops: &[HeapOp<T>]) -> H
where
    T: Ord + Clone,
    H: MeldableHeap<T>,
{
    ops.iter().fold(H::empty(), |heap, op| match op {
        HeapOp::Insert(x) => heap.insert(x.clone()),
        HeapOp::DeleteMin => heap.delete_min().unwrap_or(heap),
        HeapOp::Meld(elements) => heap.meld(&H::from_elements(elements.iter().cloned())),
    })
}

/// Strategy for a single [`HeapOp`], weighted toward insertions
pub fn arb_op<T, S>(element: S) -> impl Strategy<Value = HeapOp<T>>
where
    T: Debug + Clone + 'static,
    S: Strategy<Value = T> + Clone + 'static,
{
    prop_oneof![
        4 => element.clone().prop_map(HeapOp::Insert),
        1 => Just(HeapOp::DeleteMin),
        1 => vec(element, 0..8).prop_map(HeapOp::Meld),
    ]
}

/// Heaps built by recursive coin flips over `empty` and `insert`
pub fn arb_heap<T, H, S>(element: S, config: &CheckConfig) -> BoxedStrategy<H>
where
    T: Ord + Clone + Debug + 'static,
    H: MeldableHeap<T> + Debug + 'static,
    S: Strategy<Value = T> + Clone + 'static,
{
    Just(H::empty())
        .prop_recursive(config.max_depth, config.max_heap_size, 1, move |inner| {
            (element.clone(), inner).prop_map(|(x, heap)| heap.insert(x))
        })
        .boxed()
}

/// Heaps reachable from `empty` via `insert`, `delete_min` and `meld`
pub fn arb_heap_via_ops<T, H, S>(element: S, config: &CheckConfig) -> BoxedStrategy<H>
where
    T: Ord + Clone + Debug + 'static,
    H: MeldableHeap<T> + Debug + 'static,
    S: Strategy<Value = T> + Clone + 'static,
{
    vec(arb_op(element), 0..=config.max_heap_size as usize)
        .prop_map(|ops| apply_ops::<T, H>(&ops))
        .boxed()
}

/// Either kind of generated heap, with equal weight
pub fn arb_reachable_heap<T, H, S>(element: S, config: &CheckConfig) -> BoxedStrategy<H>
where
    T: Ord + Clone + Debug + 'static,
    H: MeldableHeap<T> + Debug + 'static,
    S: Strategy<Value = T> + Clone + 'static,
{
    prop_oneof![
        arb_heap::<T, H, S>(element.clone(), config),
        arb_heap_via_ops::<T, H, S>(element, config),
    ]
    .boxed()
}

/// An arbitrary pair of elements
pub fn arb_pair<T, S>(element: S) -> impl Strategy<Value = (T, T)>
where
    T: Debug,
    S: Strategy<Value = T> + Clone,
{
    (element.clone(), element)
}
