//! Generic Associated Types standing in for higher-kinded types.
//!
//! Traits like [`Foldable`] need to talk about "this container, but holding
//! `B` instead of `A`". Rust cannot abstract over the container itself the
//! way Haskell abstracts over the `f` in `f a`, so this module encodes the
//! idea with a GAT: [`TypeConstructor::Inner`] names the element type a
//! container currently holds, and [`TypeConstructor::WithType`] names the
//! same container re-applied to a different element type.
//!
//! [`Foldable`]: super::Foldable
//!
//! # Example
//!
//! ```rust
//! use sortedseq::typeclass::TypeConstructor;
//!
//! // Generic over the constructor: whichever container comes in, the
//! // return type names "the same container holding u8".
//! fn empty_rewrap<C>(_witness: &C) -> C::WithType<u8>
//! where
//!     C: TypeConstructor,
//!     C::WithType<u8>: Default,
//! {
//!     Default::default()
//! }
//!
//! let lengths: Option<usize> = Some(3);
//! let bytes: Option<u8> = empty_rewrap(&lengths);
//! assert_eq!(bytes, None);
//! ```

/// Names a type constructor and the family of types it generates.
///
/// `Option<i32>`, `Vec<i32>`, and `SortedSequence<i32>` are each "a
/// constructor applied to `i32`". This trait lets generic code recover both
/// halves: [`Inner`](Self::Inner) is the element type the constructor is
/// applied to, and [`WithType<B>`](Self::WithType) is the same constructor
/// applied to `B`.
///
/// Implementations must pick `WithType` so that re-applying the current
/// element type leads back to the implementing type:
/// `Self::WithType<Self::Inner>` is `Self` for every implementation in this
/// crate.
///
/// # Example
///
/// ```rust
/// use sortedseq::typeclass::TypeConstructor;
///
/// fn takes_int_container<C: TypeConstructor<Inner = i32>>() {}
///
/// takes_int_container::<Vec<i32>>();
/// takes_int_container::<Result<i32, String>>();
/// ```
pub trait TypeConstructor {
    /// The element type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B` instead of [`Inner`](Self::Inner).
    ///
    /// The `TypeConstructor<Inner = B>` bound keeps the result usable as a
    /// constructor in its own right, so transformations chain.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}
