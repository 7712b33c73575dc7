//! Unit tests for SortedStream.
//!
//! Covers the generators, lazy merging against the eager merge, and the
//! demand-driven evaluation contract: generator functions run only as
//! far as the consumer pulls.

#![cfg(feature = "sorted")]

use std::cell::Cell;

use rstest::rstest;
use sortedseq::sorted::{iterate_monotone, repeat, SortedSequence};

// =============================================================================
// Generator Behavior
// =============================================================================

#[rstest]
fn test_repeat_bounded_by_take() {
    let zeros: Vec<i32> = repeat(0).take(1000).collect();
    assert_eq!(zeros.len(), 1000);
    assert!(zeros.iter().all(|element| *element == 0));
}

#[rstest]
fn test_iterate_monotone_with_non_numeric_elements() {
    let words: Vec<String> = iterate_monotone(String::from("a"), |word| format!("{word}a"))
        .take(3)
        .collect();

    // Lexicographic order: every extension sorts after its prefix.
    assert_eq!(words, vec!["a", "aa", "aaa"]);
}

#[rstest]
fn test_iterate_monotone_truncates_at_first_decrease() {
    let wrapped: Vec<u8> = iterate_monotone(250u8, |n| n.wrapping_add(3)).collect();
    assert_eq!(wrapped, vec![250, 253]);
}

// =============================================================================
// Demand-Driven Evaluation
// =============================================================================

#[rstest]
fn test_generator_function_runs_once_per_pull() {
    let calls = Cell::new(0);
    let counted = iterate_monotone(0, |n| {
        calls.set(calls.get() + 1);
        n + 1
    });

    let pulled: Vec<i32> = counted.take(3).collect();

    assert_eq!(pulled, vec![0, 1, 2]);
    assert_eq!(calls.get(), 3);
}

#[rstest]
fn test_merge_reads_one_element_ahead_per_side() {
    let left_calls = Cell::new(0);
    let right_calls = Cell::new(0);

    let evens = iterate_monotone(0, |n| {
        left_calls.set(left_calls.get() + 1);
        n + 2
    });
    let odds = iterate_monotone(1, |n| {
        right_calls.set(right_calls.get() + 1);
        n + 2
    });

    let merged: Vec<i32> = evens.merge(odds).take(2).collect();

    assert_eq!(merged, vec![0, 1]);
    // The left side was peeked past the emitted 0, the right side only
    // up to its head.
    assert_eq!(left_calls.get(), 2);
    assert_eq!(right_calls.get(), 1);
}

// =============================================================================
// Merge Semantics
// =============================================================================

#[rstest]
fn test_stream_merge_is_associative_on_observed_prefix() {
    let first = || iterate_monotone(0, |n| n + 3);
    let second = || iterate_monotone(1, |n| n + 3);
    let third = || iterate_monotone(2, |n| n + 3);

    let left_grouped: Vec<i32> = first().merge(second()).merge(third()).take(9).collect();
    let right_grouped: Vec<i32> = first().merge(second().merge(third())).take(9).collect();

    assert_eq!(left_grouped, right_grouped);
    assert_eq!(left_grouped, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
}

#[rstest]
fn test_stream_merge_agrees_with_sequence_merge() {
    let left = SortedSequence::from_unsorted([9, 1, 5, 5]);
    let right = SortedSequence::from_unsorted([5, 2, 8]);

    let eager = left.merge(&right).into_vec();
    let lazy: Vec<i32> = left
        .into_stream()
        .merge(right.into_stream())
        .collect();

    assert_eq!(lazy, eager);
}

// =============================================================================
// Materialization
// =============================================================================

#[rstest]
fn test_into_sequence_feeds_back_into_eager_operations() {
    let sequence = iterate_monotone(1, |n| n + 4).take(4).into_sequence();

    assert_eq!(sequence.as_slice(), &[1, 5, 9, 13]);
    assert!(sequence.contains_ord(&9));
    assert_eq!(*sequence.maximum(), 13);
}

#[rstest]
fn test_sequence_stream_roundtrip_preserves_elements() {
    let sequence = SortedSequence::from_unsorted([4, 4, 1, 3]);
    let roundtripped = sequence.clone().into_stream().into_sequence();
    assert_eq!(roundtripped, sequence);
}
