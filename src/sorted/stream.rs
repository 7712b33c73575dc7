//! Lazy, pull-based sorted streams.
//!
//! [`SortedStream`] is the lazy counterpart of
//! [`SortedSequence`](super::SortedSequence): a wrapper around an iterator
//! whose elements are non-decreasing by construction. Nothing is computed
//! until the consumer pulls, so streams may be unbounded. The generators
//! [`repeat`] and [`iterate_monotone`] produce infinite streams, and
//! [`SortedStream::merge`] combines two streams while reading at most one
//! element ahead on each side.
//!
//! Unbounded streams must be bounded with [`SortedStream::take`] before
//! they are collected or materialized with [`SortedStream::into_sequence`].
//!
//! # Examples
//!
//! ```rust
//! use sortedseq::sorted::{iterate_monotone, SortedSequence};
//!
//! let evens = iterate_monotone(0, |n| n + 2);
//! let odds = iterate_monotone(1, |n| n + 2);
//! let merged: Vec<i32> = evens.merge(odds).take(6).collect();
//! assert_eq!(merged, vec![0, 1, 2, 3, 4, 5]);
//! ```

use std::iter::Peekable;

use super::sequence::SortedSequence;

/// A lazy stream of non-decreasing elements.
///
/// Constructed only from sources whose order is guaranteed: sorted
/// sequences ([`SortedSequence::into_stream`]), the generators in this
/// module, and combinators on existing streams. The wrapped iterator is
/// private, so arbitrary iterators cannot be declared sorted.
///
/// `SortedStream` implements [`Iterator`] directly; pulling elements
/// consumes the stream front to back.
pub struct SortedStream<I> {
    inner: I,
}

impl<I> SortedStream<I>
where
    I: Iterator,
{
    /// Wraps an iterator that is already known to yield non-decreasing
    /// elements.
    ///
    /// # Preconditions
    ///
    /// `inner` must yield elements in non-decreasing order.
    pub(crate) const fn from_monotone(inner: I) -> Self {
        Self { inner }
    }

    /// Bounds the stream to its first `count` elements.
    ///
    /// A prefix of a sorted stream is sorted, so the result is again a
    /// sorted stream. This is the standard way to make an unbounded
    /// stream finite before collecting it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::repeat;
    ///
    /// let bounded: Vec<i32> = repeat(7).take(3).collect();
    /// assert_eq!(bounded, vec![7, 7, 7]);
    /// ```
    #[must_use]
    pub fn take(self, count: usize) -> SortedStream<std::iter::Take<I>> {
        SortedStream {
            inner: self.inner.take(count),
        }
    }

    /// Merges two sorted streams into one sorted stream.
    ///
    /// Lazy: each pull performs one comparison between the current heads
    /// and emits the smaller one, so merging unbounded streams is fine as
    /// long as the consumer bounds the result. When heads compare equal,
    /// the element from `self` is emitted first, matching
    /// [`SortedSequence::merge`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::{repeat, SortedSequence};
    ///
    /// let finite = SortedSequence::from_unsorted([2, 4]).into_stream();
    /// let merged: Vec<i32> = finite.merge(repeat(3)).take(4).collect();
    /// assert_eq!(merged, vec![2, 3, 3, 3]);
    /// ```
    #[must_use]
    pub fn merge<J>(self, other: SortedStream<J>) -> SortedStream<MergeSorted<I, J>>
    where
        J: Iterator<Item = I::Item>,
        I::Item: Ord,
    {
        SortedStream {
            inner: MergeSorted {
                left: self.inner.peekable(),
                right: other.inner.peekable(),
            },
        }
    }

    /// Materializes the stream into a [`SortedSequence`] without
    /// re-sorting.
    ///
    /// The stream invariant already guarantees order, so this is a plain
    /// O(n) collection. Diverges on an unbounded stream; bound it with
    /// [`take`](SortedStream::take) first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedseq::sorted::iterate_monotone;
    ///
    /// let sequence = iterate_monotone(1, |n| n * 2).take(4).into_sequence();
    /// assert_eq!(sequence.as_slice(), &[1, 2, 4, 8]);
    /// ```
    #[must_use]
    pub fn into_sequence(self) -> SortedSequence<I::Item>
    where
        I::Item: Ord,
    {
        SortedSequence::from_sorted_unchecked(self.inner.collect())
    }
}

impl<I> Iterator for SortedStream<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Creates an unbounded stream repeating one element.
///
/// A constant stream is trivially non-decreasing, so only `Clone` is
/// required. The stream never ends; bound it with
/// [`SortedStream::take`] before collecting.
///
/// # Examples
///
/// ```rust
/// use sortedseq::sorted::repeat;
///
/// let sevens: Vec<i32> = repeat(7).take(3).collect();
/// assert_eq!(sevens, vec![7, 7, 7]);
/// ```
#[must_use]
pub fn repeat<T: Clone>(element: T) -> SortedStream<std::iter::Repeat<T>> {
    SortedStream::from_monotone(std::iter::repeat(element))
}

/// Creates a stream by repeatedly applying `function`, keeping only the
/// non-decreasing prefix.
///
/// The seed is always emitted. After emitting an element, the next
/// candidate is computed once; if it is smaller than the element just
/// emitted, the stream ends there and the violating candidate is never
/// observed by the consumer. A function that never decreases therefore
/// yields an unbounded stream.
///
/// # Examples
///
/// ```rust
/// use sortedseq::sorted::iterate_monotone;
///
/// // Unbounded: doubling never decreases for positive seeds.
/// let powers: Vec<i32> = iterate_monotone(1, |n| n * 2).take(5).collect();
/// assert_eq!(powers, vec![1, 2, 4, 8, 16]);
///
/// // Self-truncating: the step to 0 violates monotonicity, so the
/// // stream ends after 5 and can be collected without `take`.
/// let capped: Vec<i32> =
///     iterate_monotone(1, |n| if *n < 5 { n + 1 } else { 0 }).collect();
/// assert_eq!(capped, vec![1, 2, 3, 4, 5]);
/// ```
#[must_use]
pub fn iterate_monotone<T, F>(seed: T, function: F) -> SortedStream<IterateMonotone<T, F>>
where
    T: Ord,
    F: FnMut(&T) -> T,
{
    SortedStream::from_monotone(IterateMonotone {
        function,
        state: Some(seed),
    })
}

/// Iterator merging two sorted iterators, created by
/// [`SortedStream::merge`].
///
/// Peeks one element on each side and emits the smaller head, preferring
/// the left side on ties.
pub struct MergeSorted<L, R>
where
    L: Iterator,
    R: Iterator<Item = L::Item>,
{
    left: Peekable<L>,
    right: Peekable<R>,
}

impl<L, R> Iterator for MergeSorted<L, R>
where
    L: Iterator,
    R: Iterator<Item = L::Item>,
    L::Item: Ord,
{
    type Item = L::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match (self.left.peek(), self.right.peek()) {
            (Some(left_head), Some(right_head)) => {
                // Ties go left so merging matches the eager merge exactly.
                if left_head <= right_head {
                    self.left.next()
                } else {
                    self.right.next()
                }
            }
            (Some(_), None) => self.left.next(),
            (None, Some(_)) => self.right.next(),
            (None, None) => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (left_lower, left_upper) = self.left.size_hint();
        let (right_lower, right_upper) = self.right.size_hint();
        let lower = left_lower.saturating_add(right_lower);
        let upper = match (left_upper, right_upper) {
            (Some(left), Some(right)) => left.checked_add(right),
            _ => None,
        };
        (lower, upper)
    }
}

/// Iterator produced by [`iterate_monotone`].
///
/// Holds the next element to emit; `None` once a decreasing step has been
/// detected or the stream is exhausted.
pub struct IterateMonotone<T, F> {
    function: F,
    state: Option<T>,
}

impl<T, F> Iterator for IterateMonotone<T, F>
where
    T: Ord,
    F: FnMut(&T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.state.take()?;
        let candidate = (self.function)(&current);
        // A candidate smaller than the element being emitted would break
        // the stream invariant; end the stream instead of yielding it.
        if candidate >= current {
            self.state = Some(candidate);
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::from(self.state.is_some()), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Generator Tests
    // =========================================================================

    #[rstest]
    fn test_repeat_is_productive() {
        let sevens: Vec<i32> = repeat(7).take(3).collect();
        assert_eq!(sevens, vec![7, 7, 7]);
    }

    #[rstest]
    fn test_repeat_take_zero_is_empty() {
        let none: Vec<i32> = repeat(7).take(0).collect();
        assert!(none.is_empty());
    }

    #[rstest]
    fn test_iterate_monotone_emits_seed_first() {
        let first = iterate_monotone(10, |n| n + 1).next();
        assert_eq!(first, Some(10));
    }

    #[rstest]
    fn test_iterate_monotone_unbounded_prefix() {
        let counted: Vec<i32> = iterate_monotone(1, |n| n + 1).take(4).collect();
        assert_eq!(counted, vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_iterate_monotone_stops_before_violation() {
        let capped: Vec<i32> =
            iterate_monotone(1, |n| if *n < 5 { n + 1 } else { 0 }).collect();
        assert_eq!(capped, vec![1, 2, 3, 4, 5]);
    }

    #[rstest]
    fn test_iterate_monotone_immediate_violation_keeps_seed() {
        let only_seed: Vec<i32> = iterate_monotone(10, |n| n - 1).collect();
        assert_eq!(only_seed, vec![10]);
    }

    #[rstest]
    fn test_iterate_monotone_constant_function_never_ends() {
        let constant: Vec<i32> = iterate_monotone(5, |n| *n).take(4).collect();
        assert_eq!(constant, vec![5, 5, 5, 5]);
    }

    // =========================================================================
    // Merge Tests
    // =========================================================================

    #[rstest]
    fn test_merge_interleaves_two_unbounded_streams() {
        let evens = iterate_monotone(0, |n| n + 2);
        let odds = iterate_monotone(1, |n| n + 2);
        let merged: Vec<i32> = evens.merge(odds).take(6).collect();
        assert_eq!(merged, vec![0, 1, 2, 3, 4, 5]);
    }

    #[rstest]
    fn test_merge_finite_with_unbounded() {
        let finite = SortedSequence::from_unsorted([2, 4]).into_stream();
        let merged: Vec<i32> = finite.merge(repeat(3)).take(4).collect();
        assert_eq!(merged, vec![2, 3, 3, 3]);
    }

    #[rstest]
    fn test_merge_with_bounded_repeat_drains_remainder() {
        let finite = SortedSequence::from_unsorted([2, 4]).into_stream();
        let merged: Vec<i32> = finite.merge(repeat(3).take(2)).collect();
        assert_eq!(merged, vec![2, 3, 3, 4]);
    }

    #[rstest]
    fn test_merge_exhausts_both_finite_sides() {
        let left = SortedSequence::from_unsorted([1, 3]).into_stream();
        let right = SortedSequence::from_unsorted([2, 9]).into_stream();
        let merged: Vec<i32> = left.merge(right).collect();
        assert_eq!(merged, vec![1, 2, 3, 9]);
    }

    #[rstest]
    fn test_merge_agrees_with_eager_merge() {
        let left = SortedSequence::from_unsorted([1, 3, 5]);
        let right = SortedSequence::from_unsorted([2, 3, 4]);
        let eager = left.merge(&right);
        let lazy: Vec<i32> = left
            .clone()
            .into_stream()
            .merge(right.into_stream())
            .collect();
        assert_eq!(lazy, eager.into_vec());
    }

    // =========================================================================
    // Materialization Tests
    // =========================================================================

    #[rstest]
    fn test_into_sequence_materializes_without_resorting() {
        let sequence = iterate_monotone(1, |n| n * 2).take(4).into_sequence();
        assert_eq!(sequence.as_slice(), &[1, 2, 4, 8]);
    }

    #[rstest]
    fn test_into_stream_roundtrip() {
        let sequence = SortedSequence::from_unsorted([3, 1, 2]);
        let roundtripped = sequence.clone().into_stream().into_sequence();
        assert_eq!(roundtripped, sequence);
    }

    #[rstest]
    fn test_size_hint_of_bounded_repeat() {
        let bounded = repeat(1).take(5);
        assert_eq!(bounded.size_hint(), (5, Some(5)));
    }
}
