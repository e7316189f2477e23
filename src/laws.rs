//! Laws every [`MeldableHeap`] must satisfy
//!
//! Each law is a pure predicate over a few elements or heaps, written only in
//! terms of the heap contract. A law holds for an implementation if the
//! predicate is true for every input a generator can produce; a `false`
//! result is a counterexample.
//!
//! The predicates are available as plain generic functions
//! ([`two_element_minimum`], [`meld_consistent`], ...) and as unit structs
//! implementing [`Law`], which pairs each predicate with a name and a one-line
//! description so that a runner can report results by name.
//!
//! None of the predicates call `find_min` or `delete_min` on a heap they
//! know to be empty. If one of those calls fails anyway, the heap lied
//! about being non-empty and the law reports a violation.
//!
//! The recursive checks (extraction order and meld consistency) are written
//! as loops whose step budget is the number of elements the inputs claim to
//! hold, so they terminate even on a heap that never shrinks.

use crate::traits::MeldableHeap;
use std::fmt::Debug;

/// Name and description of a law
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LawInfo {
    /// Short identifier, used for filtering and reporting
    pub name: &'static str,
    /// One-line statement of what must hold
    pub description: &'static str,
}

/// A named predicate over inputs of type `Self::Input`
///
/// Implementations are unit structs; `T` is the element type and `H` the
/// heap under test.
pub trait Law<T: Ord, H: MeldableHeap<T>> {
    /// Arguments of the predicate, as produced by a generator
    type Input: Clone + Debug;

    /// Name and description of this law
    const INFO: LawInfo;

    /// Returns true if the law holds for `input`
    fn holds(input: &Self::Input) -> bool;
}

/// Inserting two elements into an empty heap reports the smaller as minimum
pub fn two_element_minimum<T, H>(x1: T, x2: T) -> bool
where
    T: Ord + Clone,
    H: MeldableHeap<T>,
{
    let expected = x1.clone().min(x2.clone());
    let heap = H::empty().insert(x2).insert(x1);
    heap.find_min() == Ok(&expected)
}

/// Deleting the only element of a heap leaves it empty
pub fn single_element_deletion<T, H>(x: T) -> bool
where
    T: Ord,
    H: MeldableHeap<T>,
{
    H::empty()
        .insert(x)
        .delete_min()
        .is_ok_and(|rest| rest.is_empty())
}

/// Re-inserting the minimum of a heap does not change its minimum
///
/// Holds vacuously for the empty heap.
pub fn minimum_reinsertion_stable<T, H>(heap: &H) -> bool
where
    T: Ord + Clone,
    H: MeldableHeap<T>,
{
    if heap.is_empty() {
        return true;
    }
    match heap.find_min() {
        Ok(min) => heap.insert(min.clone()).find_min() == Ok(min),
        Err(_) => false,
    }
}

/// Repeatedly extracting the minimum yields a non-decreasing sequence
pub fn sorted_by_extraction<T, H>(heap: &H) -> bool
where
    T: Ord + Clone,
    H: MeldableHeap<T>,
{
    let mut current = heap.clone();
    let mut budget = heap.len();
    let mut previous: Option<T> = None;

    while !current.is_empty() {
        if budget == 0 {
            return false;
        }
        budget -= 1;

        let Ok((min, rest)) = current.pop_min() else {
            return false;
        };
        if previous.as_ref().is_some_and(|prev| *prev > min) {
            return false;
        }
        previous = Some(min);
        current = rest;
    }
    true
}

/// Melding `{a, a}` with `{b, b}` behaves as expected, where `a >= b`
///
/// After deleting the minimum twice the minimum is `a`, and inserting `b`
/// into the meld gives minimum `b`.
pub fn small_meld<T, H>(x: T, y: T) -> bool
where
    T: Ord + Clone,
    H: MeldableHeap<T>,
{
    let (high, low) = if x >= y { (x, y) } else { (y, x) };
    let highs = H::empty().insert(high.clone()).insert(high.clone());
    let lows = H::empty().insert(low.clone()).insert(low.clone());
    let melded = highs.meld(&lows);

    let Ok(after_two) = melded.delete_min().and_then(|h| h.delete_min()) else {
        return false;
    };
    after_two.find_min() == Ok(&high) && melded.insert(low.clone()).find_min() == Ok(&low)
}

/// The meld's minimum always comes from one of its sources
///
/// Walks the meld and both sources in lockstep: each step the meld's
/// minimum must equal the minimum of the first source (preferred on ties)
/// or of the second, and is removed from the meld and from that source.
/// The meld is empty exactly when both sources are.
pub fn meld_consistent<T, H>(heap1: &H, heap2: &H) -> bool
where
    T: Ord + Clone,
    H: MeldableHeap<T>,
{
    let mut left = heap1.clone();
    let mut right = heap2.clone();
    let mut melded = heap1.meld(heap2);
    let mut budget = heap1.len() + heap2.len();

    loop {
        if melded.is_empty() {
            return left.is_empty() && right.is_empty();
        }
        if budget == 0 {
            return false;
        }
        budget -= 1;

        let Ok((min, rest)) = melded.pop_min() else {
            return false;
        };
        let source = if !left.is_empty() && left.find_min() == Ok(&min) {
            &mut left
        } else if !right.is_empty() && right.find_min() == Ok(&min) {
            &mut right
        } else {
            return false;
        };
        let Ok(shrunk) = source.delete_min() else {
            return false;
        };
        *source = shrunk;
        melded = rest;
    }
}

/// `len` and `is_empty` agree, and insert/delete change `len` by one
pub fn length_accounting<T, H>(heap: &H, x: T) -> bool
where
    T: Ord,
    H: MeldableHeap<T>,
{
    let n = heap.len();
    let deleted_ok = match heap.delete_min() {
        Ok(rest) => n > 0 && rest.len() == n - 1,
        Err(_) => n == 0,
    };
    heap.is_empty() == (n == 0) && heap.insert(x).len() == n + 1 && deleted_ok
}

/// Deriving new heaps from a heap leaves the original unchanged
///
/// Also checks that the derived insertion holds exactly the original
/// elements plus the inserted one.
pub fn persistence<T, H>(heap: &H, x: T) -> bool
where
    T: Ord + Clone,
    H: MeldableHeap<T>,
{
    let before = heap.to_sorted_vec();

    let grown = heap.insert(x.clone());
    let _shrunk = heap.delete_min();
    let _doubled = heap.meld(heap);

    let mut expected = before.clone();
    let at = expected.partition_point(|e| *e <= x);
    expected.insert(at, x);

    heap.len() == before.len() && heap.to_sorted_vec() == before && grown.to_sorted_vec() == expected
}

/// Melding is multiset union: nothing is lost or duplicated
pub fn meld_preserves_multiset<T, H>(heap1: &H, heap2: &H) -> bool
where
    T: Ord + Clone,
    H: MeldableHeap<T>,
{
    let mut expected = heap1.to_sorted_vec();
    expected.extend(heap2.to_sorted_vec());
    expected.sort();

    let melded = heap1.meld(heap2);
    melded.len() == expected.len() && melded.to_sorted_vec() == expected
}

/// Law: `find_min(insert(x1, insert(x2, empty))) == min(x1, x2)`
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoElementMinimum;

impl TwoElementMinimum {
    pub const INFO: LawInfo = LawInfo {
        name: "two-element-minimum",
        description: "inserting two elements into an empty heap reports the smaller as minimum",
    };
}

impl<T: Ord + Clone + Debug, H: MeldableHeap<T>> Law<T, H> for TwoElementMinimum {
    type Input = (T, T);
    const INFO: LawInfo = TwoElementMinimum::INFO;

    fn holds((x1, x2): &(T, T)) -> bool {
        two_element_minimum::<T, H>(x1.clone(), x2.clone())
    }
}

/// Law: `is_empty(delete_min(insert(x, empty)))`
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleElementDeletion;

impl SingleElementDeletion {
    pub const INFO: LawInfo = LawInfo {
        name: "single-element-deletion",
        description: "deleting the minimum of a one-element heap leaves an empty heap",
    };
}

impl<T: Ord + Clone + Debug, H: MeldableHeap<T>> Law<T, H> for SingleElementDeletion {
    type Input = T;
    const INFO: LawInfo = SingleElementDeletion::INFO;

    fn holds(x: &T) -> bool {
        single_element_deletion::<T, H>(x.clone())
    }
}

/// Law: `find_min(insert(find_min(h), h)) == find_min(h)` for non-empty `h`
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimumReinsertion;

impl MinimumReinsertion {
    pub const INFO: LawInfo = LawInfo {
        name: "minimum-reinsertion",
        description: "inserting a heap's minimum into itself leaves the minimum unchanged",
    };
}

impl<T: Ord + Clone, H: MeldableHeap<T> + Debug> Law<T, H> for MinimumReinsertion {
    type Input = H;
    const INFO: LawInfo = MinimumReinsertion::INFO;

    fn holds(heap: &H) -> bool {
        minimum_reinsertion_stable(heap)
    }
}

/// Law: repeated extraction is non-decreasing until exhaustion
#[derive(Debug, Clone, Copy, Default)]
pub struct SortedExtraction;

impl SortedExtraction {
    pub const INFO: LawInfo = LawInfo {
        name: "sorted-extraction",
        description: "repeatedly deleting the minimum yields a non-decreasing sequence",
    };
}

impl<T: Ord + Clone, H: MeldableHeap<T> + Debug> Law<T, H> for SortedExtraction {
    type Input = H;
    const INFO: LawInfo = SortedExtraction::INFO;

    fn holds(heap: &H) -> bool {
        sorted_by_extraction(heap)
    }
}

/// Law: melding two two-element heaps of duplicates behaves as expected
#[derive(Debug, Clone, Copy, Default)]
pub struct SmallMeld;

impl SmallMeld {
    pub const INFO: LawInfo = LawInfo {
        name: "small-meld",
        description: "melding {max, max} with {min, min} exposes max after two deletions and min after inserting min",
    };
}

impl<T: Ord + Clone + Debug, H: MeldableHeap<T>> Law<T, H> for SmallMeld {
    type Input = (T, T);
    const INFO: LawInfo = SmallMeld::INFO;

    fn holds((x, y): &(T, T)) -> bool {
        small_meld::<T, H>(x.clone(), y.clone())
    }
}

/// Law: the meld's minimum always comes from one of its sources
#[derive(Debug, Clone, Copy, Default)]
pub struct MeldConsistency;

impl MeldConsistency {
    pub const INFO: LawInfo = LawInfo {
        name: "meld-consistency",
        description: "every minimum of a meld is the minimum of one of its sources, until all are empty",
    };
}

impl<T: Ord + Clone, H: MeldableHeap<T> + Debug> Law<T, H> for MeldConsistency {
    type Input = (H, H);
    const INFO: LawInfo = MeldConsistency::INFO;

    fn holds((heap1, heap2): &(H, H)) -> bool {
        meld_consistent(heap1, heap2)
    }
}

/// Law: `len` tracks insertions and deletions
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthAccounting;

impl LengthAccounting {
    pub const INFO: LawInfo = LawInfo {
        name: "length-accounting",
        description: "len agrees with is_empty and changes by exactly one on insert and delete",
    };
}

impl<T: Ord + Clone + Debug, H: MeldableHeap<T> + Debug> Law<T, H> for LengthAccounting {
    type Input = (H, T);
    const INFO: LawInfo = LengthAccounting::INFO;

    fn holds((heap, x): &(H, T)) -> bool {
        length_accounting(heap, x.clone())
    }
}

/// Law: operations never disturb the heap they are applied to
#[derive(Debug, Clone, Copy, Default)]
pub struct Persistence;

impl Persistence {
    pub const INFO: LawInfo = LawInfo {
        name: "persistence",
        description: "insert, delete and meld leave their input heap unchanged",
    };
}

impl<T: Ord + Clone + Debug, H: MeldableHeap<T> + Debug> Law<T, H> for Persistence {
    type Input = (H, T);
    const INFO: LawInfo = Persistence::INFO;

    fn holds((heap, x): &(H, T)) -> bool {
        persistence(heap, x.clone())
    }
}

/// Law: melding neither loses nor duplicates elements
#[derive(Debug, Clone, Copy, Default)]
pub struct MeldMultiset;

impl MeldMultiset {
    pub const INFO: LawInfo = LawInfo {
        name: "meld-multiset",
        description: "the elements of a meld are exactly the elements of both sources",
    };
}

impl<T: Ord + Clone, H: MeldableHeap<T> + Debug> Law<T, H> for MeldMultiset {
    type Input = (H, H);
    const INFO: LawInfo = MeldMultiset::INFO;

    fn holds((heap1, heap2): &(H, H)) -> bool {
        meld_preserves_multiset(heap1, heap2)
    }
}

/// Every law, in the order a runner checks them
pub const CATALOGUE: [LawInfo; 9] = [
    TwoElementMinimum::INFO,
    SingleElementDeletion::INFO,
    MinimumReinsertion::INFO,
    SortedExtraction::INFO,
    SmallMeld::INFO,
    MeldConsistency::INFO,
    LengthAccounting::INFO,
    Persistence::INFO,
    MeldMultiset::INFO,
];

/// Look up a law by name
pub fn find(name: &str) -> Option<LawInfo> {
    CATALOGUE.iter().copied().find(|info| info.name == name)
}
