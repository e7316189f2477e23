//! Persistent Meldable Heaps and Their Laws
//!
//! This crate defines a correctness contract for persistent, mergeable
//! priority queues, ships several heaps that implement it, and provides the
//! property laws and random generators needed to check any implementation
//! against the contract.
//!
//! # Contents
//!
//! - [`MeldableHeap`]: the capability set (`empty`, `is_empty`, `insert`,
//!   `find_min`, `delete_min`, `meld`) every heap implements
//! - **Heaps**, all persistent and sharing structure through `Rc`:
//!   - [`leftist::LeftistHeap`]: O(log n) insert, delete and meld
//!   - [`pairing::PairingHeap`]: O(1) insert and meld; O(log n) amortized delete-min
//!   - [`skew_binomial::SkewBinomialHeap`]: O(1) worst-case insert
//!   - [`brodal_okasaki::BrodalOkasakiHeap`]: O(1) worst-case insert, find-min and meld
//!   - [`sorted_list::SortedListHeap`]: sorted linked list, the reference model
//! - [`laws`]: the predicates every heap must satisfy, each with a name
//! - [`generator`]: proptest strategies for arbitrary heaps
//! - [`runner`]: checks laws and reports counterexamples
//!
//! # Example
//!
//! ```rust
//! use heap_laws::MeldableHeap;
//! use heap_laws::laws::{meld_consistent, sorted_by_extraction};
//! use heap_laws::pairing::PairingHeap;
//!
//! let a: PairingHeap<i64> = [5, 1, 9].into_iter().collect();
//! let b: PairingHeap<i64> = [4, 1].into_iter().collect();
//!
//! assert!(sorted_by_extraction(&a.meld(&b)));
//! assert!(meld_consistent(&a, &b));
//! ```
//!
//! Checking every law against one heap with the runner:
//!
//! ```rust
//! use heap_laws::CheckConfig;
//! use heap_laws::runner::HeapKind;
//!
//! let config = CheckConfig { cases: 16, ..CheckConfig::default() };
//! let reports = HeapKind::Leftist.check_all(&config, |_| true);
//! assert!(reports.iter().all(|report| report.passed()));
//! ```

pub mod brodal_okasaki;
pub mod config;
pub mod generator;
pub mod laws;
pub mod leftist;
pub mod pairing;
pub mod runner;
pub mod skew_binomial;
pub mod sorted_list;
pub mod traits;

// Re-export the main types for convenience
pub use config::{CheckConfig, ConfigError};
pub use laws::{Law, LawInfo};
pub use runner::{LawFailure, LawReport, Outcome};
pub use traits::{HeapError, MeldableHeap};
