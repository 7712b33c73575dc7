//! Foldable: collapsing a container into a single value.
//!
//! Two folds anchor the trait: [`fold_left`](Foldable::fold_left) walks the
//! container front to back threading an accumulator, and
//! [`fold_right`](Foldable::fold_right) walks it back to front. Everything
//! else (`length`, `to_list`, `find`, and friends) is defined in terms of
//! `fold_left`, so a container only has to say how it is traversed once.
//!
//! For containers with a meaningful element order, such as
//! [`SortedSequence`](crate::sorted::SortedSequence), `fold_left` visits
//! elements in that order; a fold is how ascending order becomes observable
//! without exposing the backing storage.
//!
//! # Laws
//!
//! Folding is expected to agree with the container's element sequence:
//!
//! ```text
//! fa.fold_left(init, f) == fa.to_list().fold_left(init, f)
//! ```
//!
//! and `fold_right` must visit the same elements in reverse.
//!
//! # Examples
//!
//! ```rust
//! use sortedseq::typeclass::Foldable;
//!
//! let total = vec![3, 5, 7].fold_left(0, |sum, element| sum + element);
//! assert_eq!(total, 15);
//!
//! let absent: Option<i32> = None;
//! assert_eq!(absent.fold_left(100, |sum, element| sum + element), 100);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// Containers whose elements can be reduced to one value.
///
/// Implementors provide [`fold_left`](Self::fold_left) and
/// [`fold_right`](Self::fold_right); the other methods have default bodies
/// built on `fold_left` and are overridden only when the container can do
/// better (a `Vec` knows its `length` without traversing, for instance).
///
/// # Examples
///
/// ```rust
/// use sortedseq::typeclass::Foldable;
///
/// let words = vec!["fold", "able"];
///
/// let joined: String = words.clone().fold_map(String::from);
/// assert_eq!(joined, "foldable");
///
/// assert_eq!(words.length(), 2);
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds front to back: the accumulator meets elements in container
    /// order, like `Iterator::fold`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::typeclass::Foldable;
    ///
    /// let spelled = vec![1, 2, 3].fold_left(String::new(), |text, digit| {
    ///     format!("{text}{digit}")
    /// });
    /// assert_eq!(spelled, "123");
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds back to front. The function receives the element first and the
    /// accumulator second, mirroring the `foldr` convention.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::typeclass::Foldable;
    ///
    /// // f(1, f(2, f(3, "|"))) builds left to right even though the walk
    /// // starts at the back.
    /// let spelled = vec![1, 2, 3].fold_right(String::from("|"), |digit, text| {
    ///     format!("{digit}{text}")
    /// });
    /// assert_eq!(spelled, "123|");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps every element into a [`Monoid`] and combines the images in
    /// traversal order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::typeclass::Foldable;
    ///
    /// let doubled_pairs: Vec<i32> = vec![1, 2].fold_map(|n| vec![n, n * 10]);
    /// assert_eq!(doubled_pairs, vec![1, 10, 2, 20]);
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the container holds no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns how many elements the container holds.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements into a `Vec` in traversal order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::typeclass::Foldable;
    ///
    /// assert_eq!(Some('x').to_list(), vec!['x']);
    /// assert_eq!(None::<char>.to_list(), Vec::new());
    /// ```
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns the first element satisfying `predicate`, if any.
    ///
    /// The whole container is still traversed; only predicate calls stop
    /// after a match, since `fold_left` cannot terminate early.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::typeclass::Foldable;
    ///
    /// let sizes = vec![2, 9, 4, 11];
    /// assert_eq!(sizes.clone().find(|size| *size > 8), Some(9));
    /// assert_eq!(sizes.find(|size| *size > 20), None);
    /// ```
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |found, element| match found {
            Some(_) => found,
            None if predicate(&element) => Some(element),
            None => None,
        })
    }

    /// Returns whether any element satisfies `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Returns whether every element satisfies `predicate`. Vacuously true
    /// for empty containers.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(value) => function(init, value),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(value) => function(value, init),
            None => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}

impl<T> Foldable for Vec<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn to_list(self) -> Self {
        self
    }
}
