//! Algebraic traits behind the sorted-sequence API.
//!
//! The ordered merge in [`crate::sorted`] is not just a function, it is an
//! associative operation with an identity. These traits give that structure
//! a name so generic code can rely on it:
//!
//! - [`Semigroup`]: an associative `combine`
//! - [`Monoid`]: a `Semigroup` with an `empty` identity
//! - [`Foldable`]: reducing a container's elements to one value
//! - [`TypeConstructor`]: the GAT foundation that lets [`Foldable`] name
//!   "the same container with a different element type", standing in for
//!   higher-kinded types
//!
//! Implementations are provided for `SortedSequence` (behind the `sorted`
//! feature) and for the std types that show up in examples and tests:
//! `String`, `Vec`, and `Option`.
//!
//! # Examples
//!
//! Reducing values pairwise or all at once:
//!
//! ```rust
//! use sortedseq::typeclass::{Monoid, Semigroup};
//!
//! let ab = String::from("a").combine(String::from("b"));
//! assert_eq!(ab, "ab");
//!
//! let runs = vec![vec![1, 7], vec![4]];
//! assert_eq!(Vec::combine_all(runs), vec![1, 7, 4]);
//! ```
//!
//! Folding a container:
//!
//! ```rust
//! use sortedseq::typeclass::Foldable;
//!
//! let largest = vec![3, 11, 4].fold_left(i32::MIN, i32::max);
//! assert_eq!(largest, 11);
//! ```

mod foldable;
mod higher;
mod monoid;
mod semigroup;

pub use foldable::Foldable;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
