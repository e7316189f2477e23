//! Generic tests for all MeldableHeap implementations
//!
//! These tests work with any heap implementing the contract and exercise it
//! with fixed edge cases: empty heaps, duplicates, persistence of old
//! versions, and long sequences.

use heap_laws::brodal_okasaki::BrodalOkasakiHeap;
use heap_laws::leftist::LeftistHeap;
use heap_laws::pairing::PairingHeap;
use heap_laws::skew_binomial::SkewBinomialHeap;
use heap_laws::sorted_list::SortedListHeap;
use heap_laws::{HeapError, MeldableHeap};

// Test helpers that work with any MeldableHeap implementation

/// Empty heap reports empty and refuses min operations
fn test_empty_heap<H: MeldableHeap<i32>>() {
    let heap = H::empty();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(
        heap.find_min(),
        Err(HeapError::EmptyHeap {
            operation: "find_min"
        })
    );
    assert_eq!(
        heap.delete_min().err(),
        Some(HeapError::EmptyHeap {
            operation: "delete_min"
        })
    );
    assert_eq!(
        heap.pop_min().err(),
        Some(HeapError::EmptyHeap {
            operation: "pop_min"
        })
    );
}

/// insert(5, insert(3, empty)): min 3, then 5, then empty
fn test_worked_example<H: MeldableHeap<i32>>() {
    let heap = H::empty().insert(3).insert(5);
    assert_eq!(heap.find_min(), Ok(&3));

    let heap = heap.delete_min().unwrap();
    assert_eq!(heap.find_min(), Ok(&5));

    let heap = heap.delete_min().unwrap();
    assert!(heap.is_empty());
}

/// Basic insert and extraction order
fn test_basic_operations<H: MeldableHeap<i32>>() {
    let heap = H::from_elements([5, 1, 10, 3]);
    assert!(!heap.is_empty());
    assert_eq!(heap.len(), 4);
    assert_eq!(heap.find_min(), Ok(&1));
    assert_eq!(heap.to_sorted_vec(), vec![1, 3, 5, 10]);
}

/// Meld of two non-empty heaps
fn test_meld_operations<H: MeldableHeap<i32>>() {
    let heap1 = H::from_elements([5, 1]);
    let heap2 = H::from_elements([10, 3]);

    let melded = heap1.meld(&heap2);
    assert_eq!(melded.len(), 4);
    assert_eq!(melded.find_min(), Ok(&1));
    assert_eq!(melded.to_sorted_vec(), vec![1, 3, 5, 10]);

    // Sources are untouched
    assert_eq!(heap1.to_sorted_vec(), vec![1, 5]);
    assert_eq!(heap2.to_sorted_vec(), vec![3, 10]);
}

/// Meld with the empty heap on either side
fn test_meld_empty<H: MeldableHeap<i32>>() {
    let heap = H::from_elements([5, 1]);
    let empty = H::empty();

    assert_eq!(heap.meld(&empty).to_sorted_vec(), vec![1, 5]);
    assert_eq!(empty.meld(&heap).to_sorted_vec(), vec![1, 5]);
    assert!(empty.meld(&empty).is_empty());
}

/// Meld of a heap with itself doubles every element
fn test_meld_with_self<H: MeldableHeap<i32>>() {
    let heap = H::from_elements([2, 1]);
    let doubled = heap.meld(&heap);
    assert_eq!(doubled.len(), 4);
    assert_eq!(doubled.to_sorted_vec(), vec![1, 1, 2, 2]);
}

/// Duplicate elements are each kept
fn test_duplicates<H: MeldableHeap<i32>>() {
    let heap = H::from_elements([5, 5, 5, 1]);
    let heap = heap.delete_min().unwrap();
    assert_eq!(heap.find_min(), Ok(&5));
    assert_eq!(heap.len(), 3);
    assert_eq!(heap.to_sorted_vec(), vec![5, 5, 5]);
}

/// Old versions stay valid after new ones are derived from them
fn test_persistence<H: MeldableHeap<i32>>() {
    let v1 = H::from_elements([4, 8]);
    let v2 = v1.insert(2);
    let v3 = v1.delete_min().unwrap();
    let v4 = v2.meld(&v3);

    assert_eq!(v1.to_sorted_vec(), vec![4, 8]);
    assert_eq!(v2.to_sorted_vec(), vec![2, 4, 8]);
    assert_eq!(v3.to_sorted_vec(), vec![8]);
    assert_eq!(v4.to_sorted_vec(), vec![2, 4, 8, 8]);
}

/// pop_min agrees with find_min followed by delete_min
fn test_pop_min<H: MeldableHeap<i32>>() {
    let heap = H::from_elements([7, 3, 9]);
    let (min, rest) = heap.pop_min().unwrap();
    assert_eq!(min, 3);
    assert_eq!(rest.to_sorted_vec(), heap.delete_min().unwrap().to_sorted_vec());
}

/// Negative and extreme values
fn test_extreme_values<H: MeldableHeap<i32>>() {
    let heap = H::from_elements([0, i32::MAX, -1, i32::MIN]);
    assert_eq!(heap.find_min(), Ok(&i32::MIN));
    assert_eq!(heap.to_sorted_vec(), vec![i32::MIN, -1, 0, i32::MAX]);
}

/// Many operations in sequence, interleaving inserts and deletes
fn test_stress_operations<H: MeldableHeap<i32>>() {
    let mut heap = H::empty();
    for i in 0..100 {
        heap = heap.insert((i * 37) % 101);
    }
    let mut popped = Vec::new();
    for _ in 0..50 {
        let (min, rest) = heap.pop_min().unwrap();
        popped.push(min);
        heap = rest;
    }
    for i in 0..50 {
        heap = heap.insert(-i);
    }
    assert_eq!(heap.len(), 100);
    assert_eq!(heap.find_min(), Ok(&-49));
    assert!(popped.windows(2).all(|w| w[0] <= w[1]));

    let drained = heap.to_sorted_vec();
    assert!(drained.windows(2).all(|w| w[0] <= w[1]));
}

/// Long descending sequence
fn test_large_sequence<H: MeldableHeap<i32>>() {
    let heap = H::from_elements((0..500).rev());
    assert_eq!(heap.len(), 500);
    assert_eq!(heap.to_sorted_vec(), (0..500).collect::<Vec<_>>());
}

macro_rules! generic_heap_tests {
    ($module:ident, $heap:ty) => {
        mod $module {
            use super::*;

            #[test]
            fn empty_heap() {
                test_empty_heap::<$heap>();
            }

            #[test]
            fn worked_example() {
                test_worked_example::<$heap>();
            }

            #[test]
            fn basic_operations() {
                test_basic_operations::<$heap>();
            }

            #[test]
            fn meld_operations() {
                test_meld_operations::<$heap>();
            }

            #[test]
            fn meld_empty() {
                test_meld_empty::<$heap>();
            }

            #[test]
            fn meld_with_self() {
                test_meld_with_self::<$heap>();
            }

            #[test]
            fn duplicates() {
                test_duplicates::<$heap>();
            }

            #[test]
            fn persistence() {
                test_persistence::<$heap>();
            }

            #[test]
            fn pop_min() {
                test_pop_min::<$heap>();
            }

            #[test]
            fn extreme_values() {
                test_extreme_values::<$heap>();
            }

            #[test]
            fn stress_operations() {
                test_stress_operations::<$heap>();
            }

            #[test]
            fn large_sequence() {
                test_large_sequence::<$heap>();
            }
        }
    };
}

generic_heap_tests!(leftist, LeftistHeap<i32>);
generic_heap_tests!(pairing, PairingHeap<i32>);
generic_heap_tests!(skew_binomial, SkewBinomialHeap<i32>);
generic_heap_tests!(brodal_okasaki, BrodalOkasakiHeap<i32>);
generic_heap_tests!(sorted_list, SortedListHeap<i32>);
