//! An immutable sequence that is non-decreasing by construction.
//!
//! [`SortedSequence`] wraps a `Vec<T>` behind a private field and only
//! exposes constructors and transformations that establish or preserve
//! non-decreasing order. Holding a value of the type is therefore a proof
//! that its elements are sorted, and operations such as [`merge`] and
//! [`contains_ord`] can rely on that invariant instead of re-checking or
//! re-sorting.
//!
//! Duplicates are preserved everywhere; callers collapse them explicitly
//! with [`dedup_adjacent`] when unique elements are wanted.
//!
//! [`merge`]: SortedSequence::merge
//! [`contains_ord`]: SortedSequence::contains_ord
//! [`dedup_adjacent`]: SortedSequence::dedup_adjacent
//!
//! # Examples
//!
//! ```rust
//! use sortedseq::sorted::SortedSequence;
//!
//! let sequence = SortedSequence::from_unsorted([3, 1, 2, 1]);
//! assert_eq!(sequence.as_slice(), &[1, 1, 2, 3]);
//!
//! let inserted = sequence.insert(2);
//! assert_eq!(inserted.as_slice(), &[1, 1, 2, 2, 3]);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use crate::typeclass::{Foldable, Monoid, Semigroup, TypeConstructor};

use super::stream::SortedStream;

/// An immutable sequence of elements guaranteed to be non-decreasing.
///
/// Every constructor either sorts its input ([`from_unsorted`]), validates
/// it ([`from_sorted`]), or produces output that is sorted by construction
/// ([`singleton`], [`replicate`], [`merge`], [`insert`], the sublist
/// operations). The backing storage is private, so no code outside this
/// crate can produce a value that violates the ordering invariant:
///
/// ```compile_fail
/// use sortedseq::sorted::SortedSequence;
///
/// // The field is private; this does not compile.
/// let forged = SortedSequence { elements: vec![3, 1, 2] };
/// ```
///
/// Duplicate elements are retained. Equality, ordering, and hashing are
/// element-wise over the sorted contents, so two sequences built from
/// different permutations of the same elements compare equal.
///
/// [`from_unsorted`]: SortedSequence::from_unsorted
/// [`from_sorted`]: SortedSequence::from_sorted
/// [`singleton`]: SortedSequence::singleton
/// [`replicate`]: SortedSequence::replicate
/// [`merge`]: SortedSequence::merge
/// [`insert`]: SortedSequence::insert
///
/// # Examples
///
/// ```rust
/// use sortedseq::sorted::SortedSequence;
///
/// let left = SortedSequence::from_unsorted([5, 1, 3]);
/// let right = SortedSequence::from_unsorted([2, 4]);
/// assert_eq!(left.merge(&right).as_slice(), &[1, 2, 3, 4, 5]);
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortedSequence<T> {
    elements: Vec<T>,
}

impl<T> SortedSequence<T> {
    /// Creates a new, empty sequence.
    ///
    /// The empty sequence is the identity element of [`merge`].
    ///
    /// [`merge`]: SortedSequence::merge
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let empty: SortedSequence<i32> = SortedSequence::new();
    /// assert!(empty.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates a sequence containing a single element.
    ///
    /// A one-element sequence is trivially non-decreasing, so no ordering
    /// constraint is required here.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::singleton(42);
    /// assert_eq!(sequence.as_slice(), &[42]);
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self {
            elements: vec![element],
        }
    }

    /// Returns the number of elements in the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::from_unsorted([2, 1, 2]);
    /// assert_eq!(sequence.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// assert!(SortedSequence::<i32>::new().is_empty());
    /// assert!(!SortedSequence::singleton(1).is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the elements as a slice, in non-decreasing order.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::from_unsorted([3, 1, 2]);
    /// assert_eq!(sequence.as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the sequence and returns its elements as a `Vec`, in
    /// non-decreasing order.
    ///
    /// # Complexity
    ///
    /// O(1) - the backing storage is moved out
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::from_unsorted([3, 1, 2]);
    /// assert_eq!(sequence.into_vec(), vec![1, 2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Returns a reference to the smallest element, or `None` if empty.
    ///
    /// This is the non-panicking counterpart of [`minimum`].
    ///
    /// [`minimum`]: SortedSequence::minimum
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::from_unsorted([2, 1, 3]);
    /// assert_eq!(sequence.first(), Some(&1));
    /// assert_eq!(SortedSequence::<i32>::new().first(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns a reference to the largest element, or `None` if empty.
    ///
    /// This is the non-panicking counterpart of [`maximum`].
    ///
    /// [`maximum`]: SortedSequence::maximum
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::from_unsorted([2, 1, 3]);
    /// assert_eq!(sequence.last(), Some(&3));
    /// ```
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns a reference to the smallest element.
    ///
    /// Sortedness makes this an O(1) read of the front of the sequence.
    /// For a non-panicking variant, see [`first`].
    ///
    /// [`first`]: SortedSequence::first
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::from_unsorted([2, 1, 3]);
    /// assert_eq!(*sequence.minimum(), 1);
    /// ```
    #[must_use]
    pub fn minimum(&self) -> &T {
        self.elements
            .first()
            .unwrap_or_else(|| panic!("{}", EMPTY_SEQUENCE_PANIC_MESSAGE))
    }

    /// Returns a reference to the largest element.
    ///
    /// Sortedness makes this an O(1) read of the back of the sequence.
    /// For a non-panicking variant, see [`last`].
    ///
    /// [`last`]: SortedSequence::last
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::from_unsorted([2, 1, 3]);
    /// assert_eq!(*sequence.maximum(), 3);
    /// ```
    #[must_use]
    pub fn maximum(&self) -> &T {
        self.elements
            .last()
            .unwrap_or_else(|| panic!("{}", EMPTY_SEQUENCE_PANIC_MESSAGE))
    }

    /// Splits the sequence into its smallest element and the sorted rest.
    ///
    /// Returns `None` if the sequence is empty. This is the structural
    /// deconstruction primitive: repeatedly applying it drains the
    /// elements in non-decreasing order.
    ///
    /// # Complexity
    ///
    /// O(n) - the remaining elements shift down one position
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::from_unsorted([2, 1]);
    /// let (head, rest) = sequence.uncons().unwrap();
    /// assert_eq!(head, 1);
    /// assert_eq!(rest.as_slice(), &[2]);
    ///
    /// assert!(SortedSequence::<i32>::new().uncons().is_none());
    /// ```
    #[must_use]
    pub fn uncons(self) -> Option<(T, Self)> {
        if self.elements.is_empty() {
            return None;
        }
        let mut elements = self.elements;
        let head = elements.remove(0);
        Some((head, Self { elements }))
    }

    /// Returns an iterator over references to the elements, smallest first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::from_unsorted([3, 1, 2]);
    /// let collected: Vec<&i32> = sequence.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> SortedSequenceIterator<'_, T> {
        SortedSequenceIterator {
            inner: self.elements.iter(),
        }
    }

    /// Applies a function to every element and re-establishes ordering.
    ///
    /// The function is not assumed to be monotone, so the mapped elements
    /// are re-sorted (stable) to restore the invariant.
    ///
    /// # Complexity
    ///
    /// O(n log n) due to the re-sort
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::from_unsorted([1, 2, 3]);
    /// let negated = sequence.map(|element| -element);
    /// assert_eq!(negated.as_slice(), &[-3, -2, -1]);
    /// ```
    #[must_use]
    pub fn map<B, F>(self, function: F) -> SortedSequence<B>
    where
        B: Ord,
        F: FnMut(T) -> B,
    {
        let mapped: Vec<B> = self.elements.into_iter().map(function).collect();
        SortedSequence::from_unsorted(mapped)
    }

    /// Converts this sequence into a lazy sorted stream over its elements.
    ///
    /// The resulting stream can be merged incrementally with other sorted
    /// streams, including unbounded ones such as
    /// [`repeat`](crate::sorted::repeat) or
    /// [`iterate_monotone`](crate::sorted::iterate_monotone).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let stream = SortedSequence::from_unsorted([2, 1]).into_stream();
    /// let collected: Vec<i32> = stream.collect();
    /// assert_eq!(collected, vec![1, 2]);
    /// ```
    #[must_use]
    pub fn into_stream(self) -> SortedStream<SortedSequenceIntoIterator<T>> {
        SortedStream::from_monotone(SortedSequenceIntoIterator {
            inner: self.elements.into_iter(),
        })
    }
}

impl<T: Ord> SortedSequence<T> {
    /// Builds a sequence from arbitrary input by sorting it.
    ///
    /// The sort is stable, so elements that compare equal keep their
    /// arrival order. Duplicates are preserved.
    ///
    /// The input must be finite; collecting an unbounded iterator here
    /// diverges. Unbounded sorted sources are built with the stream
    /// generators ([`repeat`](crate::sorted::repeat),
    /// [`iterate_monotone`](crate::sorted::iterate_monotone)) instead.
    ///
    /// # Complexity
    ///
    /// O(n log n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::from_unsorted([3, 1, 1, 2]);
    /// assert_eq!(sequence.as_slice(), &[1, 1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from_unsorted<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut elements: Vec<T> = elements.into_iter().collect();
        elements.sort();
        Self::from_sorted_unchecked(elements)
    }

    /// Adopts an already-sorted vector without re-sorting.
    ///
    /// Returns `Some` if the input is non-decreasing, taking it verbatim,
    /// or `None` if the ordering claim does not hold. This is the checked
    /// entry point for callers that obtained sorted data elsewhere and
    /// want to avoid the O(n log n) of [`from_unsorted`].
    ///
    /// [`from_unsorted`]: SortedSequence::from_unsorted
    ///
    /// # Complexity
    ///
    /// O(n) for the validation scan
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let accepted = SortedSequence::from_sorted(vec![1, 2, 2, 3]);
    /// assert!(accepted.is_some());
    ///
    /// let rejected = SortedSequence::from_sorted(vec![2, 1]);
    /// assert!(rejected.is_none());
    /// ```
    #[must_use]
    pub fn from_sorted(elements: Vec<T>) -> Option<Self> {
        if is_non_decreasing(&elements) {
            Some(Self { elements })
        } else {
            None
        }
    }

    /// Wraps a vector that is already known to be non-decreasing.
    ///
    /// # Preconditions
    ///
    /// `elements` must be non-decreasing. In debug builds this is validated
    /// with `debug_assert!`; in release builds a violation yields an
    /// incorrect sequence (logic error, not memory unsafety).
    #[inline]
    pub(crate) fn from_sorted_unchecked(elements: Vec<T>) -> Self {
        debug_assert!(
            is_non_decreasing(&elements),
            "{}",
            SORTED_INVARIANT_PANIC_MESSAGE
        );
        Self { elements }
    }

    /// Tests whether the sequence contains an element equal to `element`.
    ///
    /// Scans from the smallest element and stops at the first element
    /// greater than the query, spending exactly one comparison per visited
    /// element. Membership of a small query is therefore decided without
    /// looking at the large tail of the sequence.
    ///
    /// The element type is borrowed, so a `SortedSequence<String>` can be
    /// queried with `&str`.
    ///
    /// # Complexity
    ///
    /// O(k) where k is the position of the first element `>= element`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::from_unsorted([1, 3, 5, 7]);
    /// assert!(sequence.contains_ord(&5));
    /// assert!(!sequence.contains_ord(&4));
    ///
    /// let words = SortedSequence::from_unsorted([
    ///     String::from("pear"),
    ///     String::from("apple"),
    /// ]);
    /// assert!(words.contains_ord("apple"));
    /// ```
    #[must_use]
    pub fn contains_ord<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        for candidate in &self.elements {
            match candidate.borrow().cmp(element) {
                Ordering::Less => {}
                Ordering::Equal => return true,
                Ordering::Greater => return false,
            }
        }
        false
    }
}

impl<T: Clone> SortedSequence<T> {
    /// Creates a sequence of `count` copies of `element`.
    ///
    /// A constant sequence is trivially non-decreasing, so no ordering
    /// constraint is required. `replicate(0, element)` is the empty
    /// sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::replicate(3, 7);
    /// assert_eq!(sequence.as_slice(), &[7, 7, 7]);
    /// ```
    #[must_use]
    pub fn replicate(count: usize, element: T) -> Self {
        Self {
            elements: vec![element; count],
        }
    }

    /// Returns the first `count` elements as a new sequence.
    ///
    /// A prefix of a sorted sequence is sorted, so this only slices and
    /// never re-sorts. If `count` exceeds the length, the whole sequence
    /// is returned.
    ///
    /// # Complexity
    ///
    /// O(count) to copy the prefix
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::from_unsorted([4, 2, 1, 3]);
    /// assert_eq!(sequence.take(2).as_slice(), &[1, 2]);
    /// assert_eq!(sequence.take(10).as_slice(), &[1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        if count >= self.elements.len() {
            return self.clone();
        }
        Self {
            elements: self.elements[..count].to_vec(),
        }
    }

    /// Returns the sequence without its first `count` elements.
    ///
    /// A suffix of a sorted sequence is sorted, so this only slices and
    /// never re-sorts. If `count` exceeds the length, the result is empty.
    ///
    /// # Complexity
    ///
    /// O(n - count) to copy the suffix
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::from_unsorted([4, 2, 1, 3]);
    /// assert_eq!(sequence.drop_first(2).as_slice(), &[3, 4]);
    /// assert!(sequence.drop_first(10).is_empty());
    /// ```
    #[must_use]
    pub fn drop_first(&self, count: usize) -> Self {
        if count >= self.elements.len() {
            return Self::new();
        }
        Self {
            elements: self.elements[count..].to_vec(),
        }
    }

    /// Splits the sequence into the first `index` elements and the rest.
    ///
    /// Equivalent to `(self.take(index), self.drop_first(index))`. An
    /// `index` of 0 leaves the left side empty; an `index` at or beyond
    /// the length leaves the right side empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::from_unsorted([4, 2, 1, 3]);
    /// let (front, back) = sequence.split_at(2);
    /// assert_eq!(front.as_slice(), &[1, 2]);
    /// assert_eq!(back.as_slice(), &[3, 4]);
    /// ```
    #[must_use]
    pub fn split_at(&self, index: usize) -> (Self, Self) {
        (self.take(index), self.drop_first(index))
    }

    /// Keeps the elements satisfying the predicate.
    ///
    /// Removing elements cannot disturb the relative order of the
    /// survivors, so the result is sorted without re-sorting.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::from_unsorted([4, 1, 3, 2]);
    /// let even = sequence.filter(|element| element % 2 == 0);
    /// assert_eq!(even.as_slice(), &[2, 4]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool,
    {
        Self {
            elements: self
                .elements
                .iter()
                .filter(|element| predicate(element))
                .cloned()
                .collect(),
        }
    }

    /// Splits the elements into those satisfying the predicate and those
    /// that do not, preserving order within both sides.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::from_unsorted([4, 1, 3, 2]);
    /// let (even, odd) = sequence.partition(|element| element % 2 == 0);
    /// assert_eq!(even.as_slice(), &[2, 4]);
    /// assert_eq!(odd.as_slice(), &[1, 3]);
    /// ```
    #[must_use]
    pub fn partition<P>(&self, predicate: P) -> (Self, Self)
    where
        P: Fn(&T) -> bool,
    {
        let (matching, rest): (Vec<T>, Vec<T>) =
            self.elements.iter().cloned().partition(|element| predicate(element));
        (Self { elements: matching }, Self { elements: rest })
    }
}

impl<T: PartialEq + Clone> SortedSequence<T> {
    /// Collapses each run of adjacent equal elements to its first
    /// occurrence.
    ///
    /// In a sorted sequence all equal elements are adjacent, so this
    /// removes every duplicate. Only equality is required, not ordering.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::from_unsorted([3, 1, 1, 2, 2, 2, 3]);
    /// assert_eq!(sequence.as_slice(), &[1, 1, 2, 2, 2, 3, 3]);
    /// assert_eq!(sequence.dedup_adjacent().as_slice(), &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn dedup_adjacent(&self) -> Self {
        let mut elements = self.elements.clone();
        elements.dedup();
        Self { elements }
    }
}

impl<T: Ord + Clone> SortedSequence<T> {
    /// Merges two sorted sequences into one sorted sequence.
    ///
    /// Walks both sequences once, so no re-sorting happens. Duplicates
    /// are preserved: the result has exactly `self.len() + other.len()`
    /// elements. When elements compare equal, the copy from `self` is
    /// emitted first.
    ///
    /// Merging is associative and has [`SortedSequence::new`] as its
    /// identity, which is what the [`Semigroup`] and [`Monoid`]
    /// implementations expose.
    ///
    /// # Complexity
    ///
    /// O(n + m)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let left = SortedSequence::from_unsorted([1, 3, 5]);
    /// let right = SortedSequence::from_unsorted([2, 3, 4]);
    /// let merged = left.merge(&right);
    /// assert_eq!(merged.as_slice(), &[1, 2, 3, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self::from_sorted_unchecked(merge_slices(&self.elements, &other.elements))
    }

    /// Inserts an element at its ordered position.
    ///
    /// Equivalent to `SortedSequence::singleton(element).merge(self)`: the
    /// new element is placed before any existing equal elements. The
    /// position is found by binary search, but building the new sequence
    /// copies every element.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::from_unsorted([1, 3, 5]);
    /// assert_eq!(sequence.insert(4).as_slice(), &[1, 3, 4, 5]);
    /// assert_eq!(sequence.insert(0).as_slice(), &[0, 1, 3, 5]);
    /// ```
    #[must_use]
    pub fn insert(&self, element: T) -> Self {
        let position = self.elements.partition_point(|existing| *existing < element);
        let mut elements = Vec::with_capacity(self.elements.len() + 1);
        elements.extend_from_slice(&self.elements[..position]);
        elements.push(element);
        elements.extend_from_slice(&self.elements[position..]);
        Self::from_sorted_unchecked(elements)
    }

    /// Removes the first occurrence of an element, if present.
    ///
    /// Later duplicates of the element survive. If the element is absent
    /// the result is an unchanged copy.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::from_unsorted([1, 2, 2, 3]);
    /// assert_eq!(sequence.remove(&2).as_slice(), &[1, 2, 3]);
    /// assert_eq!(sequence.remove(&9).as_slice(), &[1, 2, 2, 3]);
    /// ```
    #[must_use]
    pub fn remove<Q>(&self, element: &Q) -> Self
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let position = self
            .elements
            .partition_point(|existing| existing.borrow() < element);
        if position < self.elements.len() && self.elements[position].borrow() == element {
            let mut elements = Vec::with_capacity(self.elements.len() - 1);
            elements.extend_from_slice(&self.elements[..position]);
            elements.extend_from_slice(&self.elements[position + 1..]);
            Self { elements }
        } else {
            self.clone()
        }
    }

    /// Keeps the elements strictly less than `pivot`.
    ///
    /// Sortedness turns this into a binary search for the cut point plus
    /// one prefix copy.
    ///
    /// # Complexity
    ///
    /// O(log n + k) where k is the number of kept elements
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::from_unsorted([1, 2, 2, 3]);
    /// assert_eq!(sequence.filter_lt(&2).as_slice(), &[1]);
    /// ```
    #[must_use]
    pub fn filter_lt(&self, pivot: &T) -> Self {
        let cut = self.elements.partition_point(|element| element < pivot);
        Self {
            elements: self.elements[..cut].to_vec(),
        }
    }

    /// Keeps the elements less than or equal to `pivot`.
    ///
    /// # Complexity
    ///
    /// O(log n + k) where k is the number of kept elements
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::from_unsorted([1, 2, 2, 3]);
    /// assert_eq!(sequence.filter_le(&2).as_slice(), &[1, 2, 2]);
    /// ```
    #[must_use]
    pub fn filter_le(&self, pivot: &T) -> Self {
        let cut = self.elements.partition_point(|element| element <= pivot);
        Self {
            elements: self.elements[..cut].to_vec(),
        }
    }

    /// Keeps the elements strictly greater than `pivot`.
    ///
    /// # Complexity
    ///
    /// O(log n + k) where k is the number of kept elements
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::from_unsorted([1, 2, 2, 3]);
    /// assert_eq!(sequence.filter_gt(&2).as_slice(), &[3]);
    /// ```
    #[must_use]
    pub fn filter_gt(&self, pivot: &T) -> Self {
        let cut = self.elements.partition_point(|element| element <= pivot);
        Self {
            elements: self.elements[cut..].to_vec(),
        }
    }

    /// Keeps the elements greater than or equal to `pivot`.
    ///
    /// # Complexity
    ///
    /// O(log n + k) where k is the number of kept elements
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::from_unsorted([1, 2, 2, 3]);
    /// assert_eq!(sequence.filter_ge(&2).as_slice(), &[2, 2, 3]);
    /// ```
    #[must_use]
    pub fn filter_ge(&self, pivot: &T) -> Self {
        let cut = self.elements.partition_point(|element| element < pivot);
        Self {
            elements: self.elements[cut..].to_vec(),
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// An iterator over references to elements of a [`SortedSequence`].
///
/// Yields elements in non-decreasing order.
pub struct SortedSequenceIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for SortedSequenceIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SortedSequenceIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SortedSequenceIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over elements of a [`SortedSequence`].
///
/// Yields elements in non-decreasing order.
pub struct SortedSequenceIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for SortedSequenceIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SortedSequenceIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SortedSequenceIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for SortedSequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Collecting establishes the ordering with a stable sort, like
/// [`SortedSequence::from_unsorted`].
impl<T: Ord> FromIterator<T> for SortedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_unsorted(iter)
    }
}

impl<T> IntoIterator for SortedSequence<T> {
    type Item = T;
    type IntoIter = SortedSequenceIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        SortedSequenceIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SortedSequence<T> {
    type Item = &'a T;
    type IntoIter = SortedSequenceIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SortedSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for SortedSequence<T> {
    type Inner = T;
    type WithType<B> = SortedSequence<B>;
}

/// The associative operation is [`SortedSequence::merge`].
impl<T: Ord + Clone> Semigroup for SortedSequence<T> {
    fn combine(self, other: Self) -> Self {
        self.merge(&other)
    }

    fn combine_ref(&self, other: &Self) -> Self {
        self.merge(other)
    }
}

/// The identity element is the empty sequence.
impl<T: Ord + Clone> Monoid for SortedSequence<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Foldable for SortedSequence<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.elements.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.elements
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    /// Optimized implementation reading the backing length.
    #[inline]
    fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Optimized implementation reading the backing length.
    #[inline]
    fn length(&self) -> usize {
        self.elements.len()
    }

    /// Optimized implementation - moves the backing storage out.
    #[inline]
    fn to_list(self) -> Vec<T> {
        self.elements
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SortedSequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SortedSequenceVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SortedSequenceVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SortedSequenceVisitor<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    type Value = SortedSequence<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(SortedSequence::from_unsorted(elements))
    }
}

/// Deserialization sorts the incoming elements, so any serialized
/// sequence is accepted and an unsorted payload cannot forge a sequence
/// that violates the invariant.
#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SortedSequence<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SortedSequenceVisitor::new())
    }
}

// =============================================================================
// Internal Helpers
// =============================================================================

/// Merges two non-decreasing slices into a new non-decreasing `Vec`,
/// preserving duplicates.
///
/// Uses an index-based two-pointer walk with an integrated disjoint fast
/// path. When the ranges do not overlap, the comparison loop is skipped
/// entirely and elements are concatenated directly.
///
/// Equal elements take the `left` copy first, which is what makes insert
/// via `singleton + merge` place new elements before existing equals.
///
/// # Preconditions
///
/// Both `left` and `right` must be non-decreasing.
///
/// # Complexity
///
/// O(n + m) where n = `left.len()`, m = `right.len()`.
/// Disjoint case: two `extend_from_slice` calls (no per-element comparison).
fn merge_slices<T: Clone + Ord>(left: &[T], right: &[T]) -> Vec<T> {
    if left.is_empty() {
        return right.to_vec();
    }
    if right.is_empty() {
        return left.to_vec();
    }

    // Disjoint fast path: no overlap between ranges.
    // Both slices are non-empty (checked above), so last()/first() are safe.
    // Equal boundary elements still put left first, so `<=` is correct here.
    if left.last().unwrap() <= right.first().unwrap() {
        let mut result = Vec::with_capacity(left.len() + right.len());
        result.extend_from_slice(left);
        result.extend_from_slice(right);
        return result;
    }
    if right.last().unwrap() < left.first().unwrap() {
        let mut result = Vec::with_capacity(left.len() + right.len());
        result.extend_from_slice(right);
        result.extend_from_slice(left);
        return result;
    }

    // General two-pointer merge keeping duplicates
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less | Ordering::Equal => {
                result.push(left[left_index].clone());
                left_index += 1;
            }
            Ordering::Greater => {
                result.push(right[right_index].clone());
                right_index += 1;
            }
        }
    }

    // Tail: copy remaining elements in bulk
    if left_index < left.len() {
        result.extend_from_slice(&left[left_index..]);
    }
    if right_index < right.len() {
        result.extend_from_slice(&right[right_index..]);
    }

    result
}

#[inline]
fn is_non_decreasing<T: Ord>(slice: &[T]) -> bool {
    slice.windows(2).all(|window| window[0] <= window[1])
}

/// Message constant for the panic raised by `minimum`/`maximum` on an
/// empty sequence.
const EMPTY_SEQUENCE_PANIC_MESSAGE: &str =
    "minimum/maximum requires a non-empty SortedSequence";

/// Message constant for debug assertions on internal construction paths.
const SORTED_INVARIANT_PANIC_MESSAGE: &str =
    "sorted sequence invariant violated: elements must be non-decreasing";



#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_as_plain_sequence() {
        let sequence = SortedSequence::from_unsorted([3, 1, 2]);
        let json = serde_json::to_string(&sequence).unwrap();
        assert_eq!(json, "[1,2,3]");
    }

    #[rstest]
    fn test_json_roundtrip() {
        let sequence = SortedSequence::from_unsorted([5, 3, 3, 1]);
        let json = serde_json::to_string(&sequence).unwrap();
        let restored: SortedSequence<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(sequence, restored);
    }

    #[rstest]
    fn test_deserialize_sorts_unsorted_payload() {
        let restored: SortedSequence<i32> = serde_json::from_str("[3,1,2]").unwrap();
        assert_eq!(restored.as_slice(), &[1, 2, 3]);
    }
}
