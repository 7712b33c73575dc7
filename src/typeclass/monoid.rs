//! Monoid: a semigroup with a do-nothing element.
//!
//! Adding an identity to [`Semigroup`] buys one thing: reductions no longer
//! need a special case for "nothing to reduce". `combine_all` over an empty
//! iterator simply answers [`empty()`](Monoid::empty), and folds can seed
//! their accumulator with it. The empty
//! [`SortedSequence`](crate::sorted::SortedSequence) plays this role for
//! ordered merge: merging it into anything, from either side, changes
//! nothing.
//!
//! # Laws
//!
//! On top of the associativity inherited from [`Semigroup`], for all `a`:
//!
//! ```text
//! T::empty().combine(a) == a        (left identity)
//! a.combine(T::empty()) == a        (right identity)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sortedseq::typeclass::{Monoid, Semigroup};
//!
//! let chunks = vec![vec![2, 9], vec![], vec![4]];
//! assert_eq!(Vec::combine_all(chunks), vec![2, 9, 4]);
//!
//! assert_eq!(String::empty().combine(String::from("intact")), "intact");
//! ```

use super::semigroup::Semigroup;

/// A [`Semigroup`] with an identity element.
///
/// [`empty()`](Self::empty) must be neutral on both sides of
/// [`combine`](Semigroup::combine):
///
/// ```text
/// Self::empty().combine(a) == a
/// a.combine(Self::empty()) == a
/// ```
///
/// # Examples
///
/// ```rust
/// use sortedseq::typeclass::{Monoid, Semigroup};
///
/// let value = vec![1, 2];
/// assert_eq!(Vec::empty().combine(value.clone()), value);
/// assert_eq!(value.clone().combine(Vec::empty()), value);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::typeclass::Monoid;
    ///
    /// assert_eq!(String::empty(), "");
    /// assert!(Vec::<i32>::empty().is_empty());
    /// ```
    fn empty() -> Self;

    /// Folds an iterator of values into one, starting from the identity.
    ///
    /// Always produces a value, unlike [`Semigroup::reduce_all`]: the empty
    /// iterator yields [`empty()`](Self::empty).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::typeclass::Monoid;
    ///
    /// let syllables = vec![String::from("mo"), String::from("no"), String::from("id")];
    /// assert_eq!(String::combine_all(syllables), "monoid");
    ///
    /// let nothing: Vec<String> = Vec::new();
    /// assert_eq!(String::combine_all(nothing), "");
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().fold(Self::empty(), Semigroup::combine)
    }

    /// Returns whether this value is the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::typeclass::Monoid;
    ///
    /// assert!(Vec::<u8>::empty().is_empty_value());
    /// assert!(!vec![0_u8].is_empty_value());
    /// ```
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

/// `None` is the identity for the lifted semigroup on `Option`.
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}
