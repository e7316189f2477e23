//! Checking laws against heap implementations
//!
//! [`check_law`] drives one [`Law`] with a proptest
//! [`TestRunner`](proptest::test_runner::TestRunner): it
//! generates `cases` inputs, evaluates the predicate on each, and on the
//! first failure lets proptest shrink the input to a minimal counterexample.
//! The outcome is returned as a [`LawReport`] rather than a panic, so a
//! caller can check a whole catalogue and summarize the results.
//!
//! [`HeapKind`] names every heap shipped in this crate and runs the full
//! catalogue against one of them with `i64` elements.

use crate::brodal_okasaki::BrodalOkasakiHeap;
use crate::config::CheckConfig;
use crate::generator::{arb_pair, arb_reachable_heap, elements};
use crate::laws::{
    Law, LawInfo, LengthAccounting, MeldConsistency, MeldMultiset, MinimumReinsertion,
    Persistence, SingleElementDeletion, SmallMeld, SortedExtraction, TwoElementMinimum,
};
use crate::leftist::LeftistHeap;
use crate::pairing::PairingHeap;
use crate::skew_binomial::SkewBinomialHeap;
use crate::sorted_list::SortedListHeap;
use crate::traits::MeldableHeap;
use proptest::strategy::Strategy;
use proptest::test_runner::{TestCaseError, TestError};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info, warn};

/// How a law fared against one heap
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every generated case satisfied the law
    Passed,
    /// The law failed; `counterexample` is the shrunk input, `Debug`-formatted
    Violated {
        reason: String,
        counterexample: String,
    },
    /// Generation gave up before enough cases were tried
    Aborted { reason: String },
}

/// Result of checking one law against one heap implementation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawReport {
    /// The law that was checked
    pub law: LawInfo,
    /// Display name of the heap implementation
    pub heap: &'static str,
    /// Number of cases requested from the generator
    pub cases: u32,
    /// Whether the law held, and the counterexample if not
    pub outcome: Outcome,
}

/// A law that did not pass, as an error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LawFailure {
    #[error("law `{law}` violated by {heap}: {reason}; minimal counterexample: {counterexample}")]
    Violated {
        /// Name of the violated law
        law: &'static str,
        /// Heap the law failed for
        heap: &'static str,
        /// Failure message from the property runner
        reason: String,
        /// Debug rendering of the shrunk failing input
        counterexample: String,
    },
    #[error("law `{law}` aborted for {heap}: {reason}")]
    Aborted {
        /// Name of the law that could not be checked
        law: &'static str,
        /// Heap the check was running against
        heap: &'static str,
        /// Why generation gave up
        reason: String,
    },
}

impl LawReport {
    /// True unless the law was violated or aborted
    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Passed
    }

    /// Convert into a `Result` for `?`-style propagation
    pub fn into_result(self) -> Result<(), LawFailure> {
        match self.outcome {
            Outcome::Passed => Ok(()),
            Outcome::Violated {
                reason,
                counterexample,
            } => Err(LawFailure::Violated {
                law: self.law.name,
                heap: self.heap,
                reason,
                counterexample,
            }),
            Outcome::Aborted { reason } => Err(LawFailure::Aborted {
                law: self.law.name,
                heap: self.heap,
                reason,
            }),
        }
    }
}

impl fmt::Display for LawReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<16} {:<26} ", self.heap, self.law.name)?;
        match &self.outcome {
            Outcome::Passed => write!(f, "ok ({} cases)", self.cases),
            Outcome::Violated { counterexample, .. } => {
                write!(f, "VIOLATED, counterexample: {}", counterexample)
            }
            Outcome::Aborted { reason } => write!(f, "ABORTED: {}", reason),
        }
    }
}

/// Check law `L` against heap `H` on inputs drawn from `strategy`
pub fn check_law<T, H, L, S>(heap: &'static str, strategy: &S, config: &CheckConfig) -> LawReport
where
    T: Ord,
    H: MeldableHeap<T>,
    L: Law<T, H>,
    S: Strategy<Value = L::Input>,
{
    let law = L::INFO;
    debug!(law = law.name, heap, cases = config.cases, "checking law");

    let mut runner = config.test_runner();
    let result = runner.run(strategy, |input| {
        if L::holds(&input) {
            Ok(())
        } else {
            Err(TestCaseError::fail(format!("{} does not hold", law.name)))
        }
    });

    let outcome = match result {
        Ok(()) => {
            info!(law = law.name, heap, "law holds");
            Outcome::Passed
        }
        Err(TestError::Fail(reason, input)) => {
            let counterexample = format!("{:?}", input);
            warn!(law = law.name, heap, %counterexample, "law violated");
            Outcome::Violated {
                reason: reason.to_string(),
                counterexample,
            }
        }
        Err(TestError::Abort(reason)) => {
            warn!(law = law.name, heap, %reason, "law check aborted");
            Outcome::Aborted {
                reason: reason.to_string(),
            }
        }
    };

    LawReport {
        law,
        heap,
        cases: config.cases,
        outcome,
    }
}

/// Check every law selected by `selected` against heap `H` with `i64` elements
pub fn check_all<H, F>(heap: &'static str, config: &CheckConfig, selected: F) -> Vec<LawReport>
where
    H: MeldableHeap<i64> + fmt::Debug + 'static,
    F: Fn(&LawInfo) -> bool,
{
    let heaps = || arb_reachable_heap::<i64, H, _>(elements(), config);
    let pairs = || arb_pair(elements());
    let mut reports = Vec::new();

    if selected(&TwoElementMinimum::INFO) {
        reports.push(check_law::<i64, H, TwoElementMinimum, _>(
            heap,
            &pairs(),
            config,
        ));
    }
    if selected(&SingleElementDeletion::INFO) {
        reports.push(check_law::<i64, H, SingleElementDeletion, _>(
            heap,
            &elements(),
            config,
        ));
    }
    if selected(&MinimumReinsertion::INFO) {
        reports.push(check_law::<i64, H, MinimumReinsertion, _>(
            heap,
            &heaps(),
            config,
        ));
    }
    if selected(&SortedExtraction::INFO) {
        reports.push(check_law::<i64, H, SortedExtraction, _>(
            heap,
            &heaps(),
            config,
        ));
    }
    if selected(&SmallMeld::INFO) {
        reports.push(check_law::<i64, H, SmallMeld, _>(
            heap,
            &pairs(),
            config,
        ));
    }
    if selected(&MeldConsistency::INFO) {
        reports.push(check_law::<i64, H, MeldConsistency, _>(
            heap,
            &(heaps(), heaps()),
            config,
        ));
    }
    if selected(&LengthAccounting::INFO) {
        reports.push(check_law::<i64, H, LengthAccounting, _>(
            heap,
            &(heaps(), elements()),
            config,
        ));
    }
    if selected(&Persistence::INFO) {
        reports.push(check_law::<i64, H, Persistence, _>(
            heap,
            &(heaps(), elements()),
            config,
        ));
    }
    if selected(&MeldMultiset::INFO) {
        reports.push(check_law::<i64, H, MeldMultiset, _>(
            heap,
            &(heaps(), heaps()),
            config,
        ));
    }

    reports
}

/// The heap implementations shipped in this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapKind {
    Leftist,
    Pairing,
    SkewBinomial,
    BrodalOkasaki,
    SortedList,
}

/// Error returned when parsing an unknown heap name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown heap `{0}` (expected one of: leftist, pairing, skew-binomial, brodal-okasaki, sorted-list)")]
pub struct UnknownHeap(pub String);

impl HeapKind {
    /// Every shipped implementation, in reporting order
    pub const ALL: [HeapKind; 5] = [
        HeapKind::Leftist,
        HeapKind::Pairing,
        HeapKind::SkewBinomial,
        HeapKind::BrodalOkasaki,
        HeapKind::SortedList,
    ];

    /// Name used on the command line and in reports
    pub fn name(self) -> &'static str {
        match self {
            HeapKind::Leftist => "leftist",
            HeapKind::Pairing => "pairing",
            HeapKind::SkewBinomial => "skew-binomial",
            HeapKind::BrodalOkasaki => "brodal-okasaki",
            HeapKind::SortedList => "sorted-list",
        }
    }

    /// Run the selected laws against this heap with `i64` elements
    pub fn check_all<F>(self, config: &CheckConfig, selected: F) -> Vec<LawReport>
    where
        F: Fn(&LawInfo) -> bool,
    {
        let name = self.name();
        match self {
            HeapKind::Leftist => check_all::<LeftistHeap<i64>, _>(name, config, selected),
            HeapKind::Pairing => check_all::<PairingHeap<i64>, _>(name, config, selected),
            HeapKind::SkewBinomial => {
                check_all::<SkewBinomialHeap<i64>, _>(name, config, selected)
            }
            HeapKind::BrodalOkasaki => {
                check_all::<BrodalOkasakiHeap<i64>, _>(name, config, selected)
            }
            HeapKind::SortedList => check_all::<SortedListHeap<i64>, _>(name, config, selected),
        }
    }
}

impl fmt::Display for HeapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeapKind {
    type Err = UnknownHeap;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeapKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownHeap(s.to_string()))
    }
}
