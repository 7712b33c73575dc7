//! # sortedseq
//!
//! A type-enforced non-decreasing sequence library with monoidal merge,
//! monotone generators, and lazy sorted streams.
//!
//! ## Overview
//!
//! This library provides sequences whose sortedness is a static guarantee
//! rather than a runtime hope. Constructing a [`sorted::SortedSequence`]
//! always goes through an operation that establishes or preserves the
//! non-decreasing order, so holding a value of the type *is* the proof
//! that its elements are sorted. It includes:
//!
//! - **`SortedSequence`**: an eager, immutable, duplicate-preserving
//!   sequence guaranteed non-decreasing by construction
//! - **`SortedStream`**: a lazy pull-based counterpart for unbounded
//!   monotone sources (`repeat`, `iterate_monotone`) and incremental merge
//! - **Type Classes**: Semigroup, Monoid, and Foldable, so the ordered
//!   merge participates in generic algebraic code
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Semigroup, Monoid, Foldable)
//! - `sorted`: Sorted sequence and stream types
//! - `serde`: Serde support for `SortedSequence`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use sortedseq::prelude::*;
//!
//! let left = SortedSequence::from_unsorted([5, 1, 3]);
//! let right = SortedSequence::from_unsorted([4, 2]);
//!
//! let merged = left.merge(&right);
//! assert_eq!(merged.as_slice(), &[1, 2, 3, 4, 5]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use sortedseq::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "sorted")]
    pub use crate::sorted::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "sorted")]
pub mod sorted;
