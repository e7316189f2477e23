//! Parallel property-based tests comparing all heap implementations
//!
//! These tests generate random sequences of operations and apply them to ALL
//! heap implementations side by side, with `SortedListHeap` as the reference
//! model. Because the heaps are persistent, the tests also keep every
//! intermediate version and check that none of them changed by the end.
//!
//! ## Testing Strategy
//!
//! 1. **Generate random inputs**: sequences of insert, delete-min and meld
//! 2. **Apply to all heaps**: run the same sequence on every implementation
//! 3. **Compare intermediate results**: after each operation, all heaps must
//!    report the same minimum and length as the model
//! 4. **Compare final results**: drain every heap, and every saved version,
//!    and compare against the model's drain

use heap_laws::brodal_okasaki::BrodalOkasakiHeap;
use heap_laws::generator::{arb_op, elements, HeapOp};
use heap_laws::leftist::LeftistHeap;
use heap_laws::pairing::PairingHeap;
use heap_laws::skew_binomial::SkewBinomialHeap;
use heap_laws::sorted_list::SortedListHeap;
use heap_laws::MeldableHeap;
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

/// One heap implementation evolving alongside the model
struct Track<H> {
    current: H,
    versions: Vec<H>,
}

impl<H: MeldableHeap<i64>> Track<H> {
    fn new() -> Self {
        Track {
            current: H::empty(),
            versions: Vec::new(),
        }
    }

    fn apply(&mut self, op: &HeapOp<i64>) {
        let next = match op {
            HeapOp::Insert(x) => self.current.insert(*x),
            HeapOp::DeleteMin => match self.current.delete_min() {
                Ok(rest) => rest,
                Err(_) => self.current.clone(),
            },
            HeapOp::Meld(elements) => self
                .current
                .meld(&H::from_elements(elements.iter().copied())),
        };
        let previous = std::mem::replace(&mut self.current, next);
        self.versions.push(previous);
    }

    fn verify_against(
        &self,
        name: &str,
        model: &Track<SortedListHeap<i64>>,
    ) -> Result<(), TestCaseError> {
        prop_assert_eq!(
            self.current.find_min().ok(),
            model.current.find_min().ok(),
            "{} minimum differs from model",
            name
        );
        prop_assert_eq!(
            self.current.len(),
            model.current.len(),
            "{} length differs",
            name
        );
        prop_assert_eq!(self.current.is_empty(), model.current.is_empty());
        Ok(())
    }

    fn verify_history(
        &self,
        name: &str,
        model: &Track<SortedListHeap<i64>>,
    ) -> Result<(), TestCaseError> {
        prop_assert_eq!(
            self.current.to_sorted_vec(),
            model.current.to_sorted_vec(),
            "{} final drain differs",
            name
        );
        prop_assert_eq!(self.versions.len(), model.versions.len());
        for (i, (version, expected)) in self.versions.iter().zip(&model.versions).enumerate() {
            prop_assert_eq!(
                version.to_sorted_vec(),
                expected.to_sorted_vec(),
                "{} version {} changed after later operations",
                name,
                i
            );
        }
        Ok(())
    }
}

/// Apply the same ops to every heap and the model, checking after each step
fn test_all_heaps_identical_behavior(ops: Vec<HeapOp<i64>>) -> Result<(), TestCaseError> {
    let mut model = Track::<SortedListHeap<i64>>::new();
    let mut leftist = Track::<LeftistHeap<i64>>::new();
    let mut pairing = Track::<PairingHeap<i64>>::new();
    let mut skew_binomial = Track::<SkewBinomialHeap<i64>>::new();
    let mut brodal_okasaki = Track::<BrodalOkasakiHeap<i64>>::new();

    for op in &ops {
        model.apply(op);
        leftist.apply(op);
        pairing.apply(op);
        skew_binomial.apply(op);
        brodal_okasaki.apply(op);

        leftist.verify_against("leftist", &model)?;
        pairing.verify_against("pairing", &model)?;
        skew_binomial.verify_against("skew_binomial", &model)?;
        brodal_okasaki.verify_against("brodal_okasaki", &model)?;
    }

    leftist.verify_history("leftist", &model)?;
    pairing.verify_history("pairing", &model)?;
    skew_binomial.verify_history("skew_binomial", &model)?;
    brodal_okasaki.verify_history("brodal_okasaki", &model)?;
    Ok(())
}

/// Meld every pair of saved versions and compare the drains
fn test_cross_version_melds(ops: Vec<HeapOp<i64>>) -> Result<(), TestCaseError> {
    let mut model = Track::<SortedListHeap<i64>>::new();
    let mut pairing = Track::<PairingHeap<i64>>::new();
    let mut brodal_okasaki = Track::<BrodalOkasakiHeap<i64>>::new();
    for op in &ops {
        model.apply(op);
        pairing.apply(op);
        brodal_okasaki.apply(op);
    }

    let n = model.versions.len();
    for i in 0..n {
        let j = n - 1 - i;
        let expected = model.versions[i].meld(&model.versions[j]).to_sorted_vec();
        prop_assert_eq!(
            pairing.versions[i].meld(&pairing.versions[j]).to_sorted_vec(),
            expected.clone()
        );
        prop_assert_eq!(
            brodal_okasaki.versions[i]
                .meld(&brodal_okasaki.versions[j])
                .to_sorted_vec(),
            expected
        );
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_all_heaps_match_model(ops in prop::collection::vec(arb_op(elements()), 0..100)) {
        test_all_heaps_identical_behavior(ops)?;
    }

    #[test]
    fn test_all_heaps_match_model_with_few_values(ops in prop::collection::vec(arb_op(0i64..5), 0..100)) {
        test_all_heaps_identical_behavior(ops)?;
    }

    #[test]
    fn test_versions_meld_like_model(ops in prop::collection::vec(arb_op(elements()), 1..60)) {
        test_cross_version_melds(ops)?;
    }
}
