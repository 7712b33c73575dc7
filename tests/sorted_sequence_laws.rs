//! Property-based tests for SortedSequence.
//!
//! These tests verify the algebraic laws of merging (associativity and
//! identity), agreement with a sort-based model, and that every exposed
//! operation keeps the non-decreasing invariant.

#![cfg(feature = "sorted")]

use proptest::prelude::*;
use sortedseq::sorted::SortedSequence;
use sortedseq::typeclass::{Monoid, Semigroup};

// =============================================================================
// Strategies and Model Helpers
// =============================================================================

/// Generates a `SortedSequence<i32>` with up to `max_size` elements.
fn sorted_sequence_strategy(max_size: usize) -> impl Strategy<Value = SortedSequence<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_size)
        .prop_map(SortedSequence::from_unsorted)
}

/// Generates a small `SortedSequence<i32>` for faster tests.
fn small_sequence() -> impl Strategy<Value = SortedSequence<i32>> {
    sorted_sequence_strategy(32)
}

/// Generates a vector together with a permutation of itself.
fn vector_with_permutation() -> impl Strategy<Value = (Vec<i32>, Vec<i32>)> {
    prop::collection::vec(any::<i32>(), 0..32)
        .prop_flat_map(|vector| (Just(vector.clone()), Just(vector).prop_shuffle()))
}

/// Reference model: plain sorted vector.
fn sorted_model(mut values: Vec<i32>) -> Vec<i32> {
    values.sort();
    values
}

fn is_non_decreasing(slice: &[i32]) -> bool {
    slice.windows(2).all(|window| window[0] <= window[1])
}

proptest! {
    // =========================================================================
    // Basic Properties
    // =========================================================================

    #[test]
    fn prop_len_matches_iter_count(sequence in small_sequence()) {
        prop_assert_eq!(sequence.len(), sequence.iter().count());
    }

    #[test]
    fn prop_is_empty_matches_len_zero(sequence in small_sequence()) {
        prop_assert_eq!(sequence.is_empty(), sequence.len() == 0);
    }

    #[test]
    fn prop_construction_ignores_input_order((original, permuted) in vector_with_permutation()) {
        let from_original = SortedSequence::from_unsorted(original);
        let from_permuted = SortedSequence::from_unsorted(permuted);
        prop_assert_eq!(from_original, from_permuted);
    }

    #[test]
    fn prop_from_sorted_accepts_own_output(sequence in small_sequence()) {
        let elements = sequence.clone().into_vec();
        let readopted = SortedSequence::from_sorted(elements);
        prop_assert_eq!(readopted, Some(sequence));
    }

    // =========================================================================
    // Merge Laws (Semigroup / Monoid)
    // =========================================================================

    #[test]
    fn prop_merge_is_associative(
        first in small_sequence(),
        second in small_sequence(),
        third in small_sequence(),
    ) {
        let left_grouped = first.merge(&second).merge(&third);
        let right_grouped = first.merge(&second.merge(&third));
        prop_assert_eq!(left_grouped, right_grouped);
    }

    #[test]
    fn prop_empty_is_identity_of_merge(sequence in small_sequence()) {
        let empty = SortedSequence::empty();
        prop_assert_eq!(sequence.merge(&empty), sequence.clone());
        prop_assert_eq!(empty.merge(&sequence), sequence);
    }

    #[test]
    fn prop_combine_agrees_with_merge(
        left in small_sequence(),
        right in small_sequence(),
    ) {
        let merged = left.merge(&right);
        let combined_by_reference = left.combine_ref(&right);
        let combined = left.combine(right);
        prop_assert_eq!(&merged, &combined_by_reference);
        prop_assert_eq!(merged, combined);
    }

    #[test]
    fn prop_merge_matches_sorted_concatenation(
        left in prop::collection::vec(any::<i32>(), 0..32),
        right in prop::collection::vec(any::<i32>(), 0..32),
    ) {
        let merged = SortedSequence::from_unsorted(left.clone())
            .merge(&SortedSequence::from_unsorted(right.clone()));

        let mut model = left;
        model.extend(right);
        prop_assert_eq!(merged.into_vec(), sorted_model(model));
    }

    // =========================================================================
    // Invariant Closure
    // =========================================================================

    #[test]
    fn prop_insert_and_remove_stay_sorted(
        sequence in small_sequence(),
        element in any::<i32>(),
    ) {
        let inserted = sequence.insert(element);
        prop_assert!(is_non_decreasing(inserted.as_slice()));

        let removed = inserted.remove(&element);
        prop_assert!(is_non_decreasing(removed.as_slice()));
    }

    #[test]
    fn prop_sublist_operations_stay_sorted(
        sequence in small_sequence(),
        count in 0usize..40,
        pivot in any::<i32>(),
    ) {
        prop_assert!(is_non_decreasing(sequence.take(count).as_slice()));
        prop_assert!(is_non_decreasing(sequence.drop_first(count).as_slice()));
        prop_assert!(is_non_decreasing(
            sequence.filter(|element| element % 2 == 0).as_slice()
        ));
        prop_assert!(is_non_decreasing(sequence.filter_lt(&pivot).as_slice()));
        prop_assert!(is_non_decreasing(sequence.filter_ge(&pivot).as_slice()));
        prop_assert!(is_non_decreasing(sequence.dedup_adjacent().as_slice()));
    }

    // =========================================================================
    // Sublist Complementarity
    // =========================================================================

    #[test]
    fn prop_take_then_drop_first_reassembles(
        sequence in small_sequence(),
        count in 0usize..40,
    ) {
        let mut reassembled = sequence.take(count).into_vec();
        reassembled.extend(sequence.drop_first(count).into_vec());
        prop_assert_eq!(reassembled, sequence.into_vec());
    }

    #[test]
    fn prop_strict_and_non_strict_bounds_are_complementary(
        sequence in small_sequence(),
        pivot in any::<i32>(),
    ) {
        let mut below_with_rest = sequence.filter_lt(&pivot).into_vec();
        below_with_rest.extend(sequence.filter_ge(&pivot).into_vec());
        prop_assert_eq!(below_with_rest.as_slice(), sequence.as_slice());

        let mut upto_with_rest = sequence.filter_le(&pivot).into_vec();
        upto_with_rest.extend(sequence.filter_gt(&pivot).into_vec());
        prop_assert_eq!(upto_with_rest.as_slice(), sequence.as_slice());
    }

    #[test]
    fn prop_filter_agrees_with_model_retain(sequence in small_sequence()) {
        let filtered = sequence.filter(|element| element % 3 == 0);
        let mut model = sequence.into_vec();
        model.retain(|element| element % 3 == 0);
        prop_assert_eq!(filtered.into_vec(), model);
    }

    #[test]
    fn prop_partition_splits_without_losing_elements(sequence in small_sequence()) {
        let (matching, rest) = sequence.partition(|element| *element >= 0);
        prop_assert_eq!(matching.len() + rest.len(), sequence.len());
        prop_assert!(matching.iter().all(|element| *element >= 0));
        prop_assert!(rest.iter().all(|element| *element < 0));
    }

    // =========================================================================
    // Deduplication Properties
    // =========================================================================

    #[test]
    fn prop_dedup_adjacent_is_strictly_increasing(sequence in small_sequence()) {
        let deduplicated = sequence.dedup_adjacent();
        prop_assert!(deduplicated
            .as_slice()
            .windows(2)
            .all(|window| window[0] < window[1]));
    }

    #[test]
    fn prop_dedup_adjacent_agrees_with_model_dedup(sequence in small_sequence()) {
        let deduplicated = sequence.dedup_adjacent();
        let mut model = sequence.into_vec();
        model.dedup();
        prop_assert_eq!(deduplicated.into_vec(), model);
    }

    // =========================================================================
    // Insertion and Membership Properties
    // =========================================================================

    #[test]
    fn prop_insert_then_remove_is_identity(
        sequence in small_sequence(),
        element in any::<i32>(),
    ) {
        let roundtripped = sequence.insert(element).remove(&element);
        prop_assert_eq!(roundtripped, sequence);
    }

    #[test]
    fn prop_inserted_element_is_contained(
        sequence in small_sequence(),
        element in any::<i32>(),
    ) {
        prop_assert!(sequence.insert(element).contains_ord(&element));
    }

    #[test]
    fn prop_remove_shrinks_only_when_contained(
        sequence in small_sequence(),
        element in any::<i32>(),
    ) {
        let removed = sequence.remove(&element);
        if sequence.contains_ord(&element) {
            prop_assert_eq!(removed.len(), sequence.len() - 1);
        } else {
            prop_assert_eq!(removed, sequence);
        }
    }

    // =========================================================================
    // Deconstruction Properties
    // =========================================================================

    #[test]
    fn prop_uncons_returns_the_minimum(
        sequence in sorted_sequence_strategy(32)
            .prop_filter("non-empty", |sequence| !sequence.is_empty()),
    ) {
        let original_length = sequence.len();
        let minimum = *sequence.minimum();
        let (head, rest) = sequence.uncons().unwrap();

        prop_assert_eq!(head, minimum);
        prop_assert_eq!(rest.len(), original_length - 1);
        prop_assert!(rest.iter().all(|element| *element >= head));
    }

    #[test]
    fn prop_minimum_and_maximum_bound_all_elements(
        sequence in sorted_sequence_strategy(32)
            .prop_filter("non-empty", |sequence| !sequence.is_empty()),
    ) {
        let minimum = *sequence.minimum();
        let maximum = *sequence.maximum();
        prop_assert!(sequence.iter().all(|element| minimum <= *element));
        prop_assert!(sequence.iter().all(|element| *element <= maximum));
        prop_assert_eq!(sequence.iter().min(), Some(&minimum));
        prop_assert_eq!(sequence.iter().max(), Some(&maximum));
    }
}
