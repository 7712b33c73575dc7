//! Sequences and streams that are sorted by construction.
//!
//! This module provides ordered collections whose sortedness is a type
//! invariant rather than a runtime claim:
//!
//! - [`SortedSequence`]: Immutable, eager, non-decreasing sequence
//! - [`SortedStream`]: Lazy, pull-based, possibly unbounded sorted stream
//!
//! # Sortedness by Construction
//!
//! The backing storage of both types is private. Every exposed
//! constructor sorts ([`SortedSequence::from_unsorted`]), validates
//! ([`SortedSequence::from_sorted`]), or generates elements in order (the
//! stream generators), and every transformation preserves order. Holding
//! a value is therefore a proof that its elements are non-decreasing, and
//! consumers such as [`SortedSequence::merge`] and
//! [`SortedSequence::contains_ord`] exploit the invariant instead of
//! re-checking it.
//!
//! # Examples
//!
//! ## `SortedSequence`
//!
//! ```rust
//! use sortedseq::sorted::SortedSequence;
//!
//! let sequence = SortedSequence::from_unsorted([3, 1, 2]);
//! assert_eq!(sequence.as_slice(), &[1, 2, 3]);
//!
//! // Merging walks both sides once; nothing is re-sorted
//! let other = SortedSequence::from_unsorted([4, 0]);
//! assert_eq!(sequence.merge(&other).as_slice(), &[0, 1, 2, 3, 4]);
//! ```
//!
//! ## `SortedStream`
//!
//! ```rust
//! use sortedseq::sorted::{iterate_monotone, repeat};
//!
//! // Streams are lazy, so unbounded generators are fine
//! let naturals = iterate_monotone(0, |n| n + 1);
//! let zeros = repeat(0).take(2);
//!
//! let merged: Vec<i32> = zeros.merge(naturals).take(5).collect();
//! assert_eq!(merged, vec![0, 0, 0, 1, 2]);
//! ```

mod sequence;
mod stream;

pub use sequence::SortedSequence;
pub use sequence::SortedSequenceIntoIterator;
pub use sequence::SortedSequenceIterator;
pub use stream::iterate_monotone;
pub use stream::repeat;
pub use stream::IterateMonotone;
pub use stream::MergeSorted;
pub use stream::SortedStream;
