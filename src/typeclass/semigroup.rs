//! Semigroup: types whose values combine associatively.
//!
//! `combine` is the crate's abstract name for "merge two of these into one".
//! Associativity is the whole contract: when `(a.combine(b)).combine(c)` and
//! `a.combine(b.combine(c))` always agree, code that reduces many values may
//! group the work however it likes (pairwise, left to right, or split across
//! chunks) without changing the answer. That freedom is what lets
//! [`SortedSequence::merge`](crate::sorted::SortedSequence::merge) fold
//! sorted shards together in whatever order they arrive.
//!
//! # Laws
//!
//! For all values `a`, `b`, `c` of an implementing type:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sortedseq::typeclass::Semigroup;
//!
//! let joined = vec![1, 4].combine(vec![2, 8]);
//! assert_eq!(joined, vec![1, 4, 2, 8]);
//!
//! let greeting = String::from("good ").combine(String::from("morning"));
//! assert_eq!(greeting, "good morning");
//! ```

/// An associative binary operation over a type.
///
/// Only [`combine`](Self::combine) is required; the remaining methods are
/// conveniences built on top of it. Implementations must keep `combine`
/// associative:
///
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
///
/// Nothing here requires commutativity. String concatenation is the usual
/// counterexample, and the ordered merge in this crate relies on the
/// distinction (ties keep the left operand's elements first).
///
/// # Examples
///
/// ```rust
/// use sortedseq::typeclass::Semigroup;
///
/// let chanted = String::from("hey ").combine_n(2);
/// assert_eq!(chanted, "hey hey ");
/// ```
pub trait Semigroup {
    /// Combines two values into one, consuming both.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::typeclass::Semigroup;
    ///
    /// assert_eq!(vec![10, 20].combine(vec![30]), vec![10, 20, 30]);
    /// ```
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two borrowed values into a fresh one.
    ///
    /// By default this clones both operands and delegates to
    /// [`combine`](Self::combine); implementations override it when they can
    /// build the result without the intermediate clones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::typeclass::Semigroup;
    ///
    /// let left = String::from("ab");
    /// let right = String::from("cd");
    /// assert_eq!(left.combine_ref(&right), "abcd");
    /// // Both operands remain usable.
    /// assert_eq!(left, "ab");
    /// assert_eq!(right, "cd");
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines `count` copies of this value, left to right.
    ///
    /// `combine_n(x, 1)` is `x` itself; `combine_n(x, 3)` is
    /// `x.combine(x).combine(x)`.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero: a semigroup has no identity to return.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::typeclass::Semigroup;
    ///
    /// assert_eq!(String::from("na").combine_n(4), "nananana");
    /// ```
    #[must_use]
    fn combine_n(self, count: usize) -> Self
    where
        Self: Clone,
    {
        assert!(count > 0, "combine_n requires a count of at least 1");

        if count == 1 {
            return self;
        }

        std::iter::repeat_n(self.clone(), count - 1).fold(self, Semigroup::combine)
    }

    /// Reduces an iterator of values down to one, or `None` when empty.
    ///
    /// When the element type also has an identity, prefer
    /// [`Monoid::combine_all`](super::Monoid::combine_all), which folds the
    /// empty case into the identity instead of `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::typeclass::Semigroup;
    ///
    /// let runs = vec![vec![1, 5], vec![2], vec![9, 9]];
    /// assert_eq!(Vec::reduce_all(runs), Some(vec![1, 5, 2, 9, 9]));
    ///
    /// assert_eq!(String::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().reduce(Semigroup::combine)
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.extend(self.iter().cloned());
        result.extend(other.iter().cloned());
        result
    }
}

/// Lifts a semigroup into `Option`, treating `None` as an absent operand:
/// two present values combine, a lone present value survives, and two
/// absences stay absent.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}
