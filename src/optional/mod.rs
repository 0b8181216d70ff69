//! Optional type - zero or one value.
//!
//! This module provides [`Optional<V>`], which is either `Empty` or
//! `Full(V)`, together with its combinators and the [`FluentOptional`]
//! extension trait.
//!
//! `Optional` mirrors the standard `Option` but adds the operations this
//! crate is built around: pairwise merging with one-sided fallbacks,
//! projecting and merging two sub-values of one payload, and conversion into
//! a [`Try`](crate::attempt::Try). Conversions to and from `Option` are
//! provided both ways.
//!
//! # Examples
//!
//! ```rust
//! use fluent_monads::optional::Optional;
//!
//! let doubled = Optional::of(10).filter(|x| *x > 5).map(|x| x * 2).or_else(-1);
//! assert_eq!(doubled, 20);
//!
//! let fallback = Optional::<i32>::empty().filter(|x| *x > 5).map(|x| x * 2).or_else(-1);
//! assert_eq!(fallback, -1);
//! ```

mod fluent;

pub use fluent::FluentOptional;

use std::fmt;

use crate::error::ContainerError;
use crate::iter::{IntoSingle, Single};

/// A container holding zero or one value.
///
/// Equality is structural: two optionals are equal iff both are empty, or
/// both are full with equal payloads.
///
/// # Examples
///
/// ```rust
/// use fluent_monads::optional::Optional;
///
/// let full = Optional::of("hello");
/// assert!(full.is_present());
/// assert_eq!(full.get(), Ok("hello"));
///
/// let empty: Optional<&str> = Optional::of_nullable(None);
/// assert!(empty.is_empty());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<V> {
    /// No value.
    Empty,
    /// Exactly one value.
    Full(V),
}

impl<V> Optional<V> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Returns the empty optional.
    #[inline]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Wraps a value in a `Full` optional.
    #[inline]
    pub const fn of(value: V) -> Self {
        Self::Full(value)
    }

    /// Builds an optional from a nullable input: `None` is `Empty`,
    /// `Some(v)` is `Full(v)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_monads::optional::Optional;
    ///
    /// assert_eq!(Optional::of_nullable(Some(3)), Optional::of(3));
    /// assert_eq!(Optional::<i32>::of_nullable(None), Optional::empty());
    /// ```
    #[inline]
    pub fn of_nullable(value: Option<V>) -> Self {
        match value {
            Some(value) => Self::Full(value),
            None => Self::Empty,
        }
    }

    // =========================================================================
    // Queries and Access
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Full(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the payload, consuming the optional.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::ValueAbsent`] if the optional is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_monads::error::ContainerError;
    /// use fluent_monads::optional::Optional;
    ///
    /// assert_eq!(Optional::of(42).get(), Ok(42));
    /// assert_eq!(Optional::<i32>::empty().get(), Err(ContainerError::ValueAbsent));
    /// ```
    #[inline]
    pub fn get(self) -> Result<V, ContainerError> {
        match self {
            Self::Full(value) => Ok(value),
            Self::Empty => Err(ContainerError::ValueAbsent),
        }
    }

    /// Returns a reference to the payload.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::ValueAbsent`] if the optional is empty.
    #[inline]
    pub const fn get_ref(&self) -> Result<&V, ContainerError> {
        match self {
            Self::Full(value) => Ok(value),
            Self::Empty => Err(ContainerError::ValueAbsent),
        }
    }

    /// Converts `&Optional<V>` into `Optional<&V>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&V> {
        match self {
            Self::Full(value) => Optional::Full(value),
            Self::Empty => Optional::Empty,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the payload if present.
    ///
    /// Nesting is kept as is: a function returning an `Optional` yields an
    /// `Optional<Optional<_>>`. Use [`flat_map`](Self::flat_map) to collapse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_monads::optional::Optional;
    ///
    /// assert_eq!(Optional::of(21).map(|x| x * 2), Optional::of(42));
    ///
    /// let nested = Optional::of(1).map(Optional::of);
    /// assert_eq!(nested, Optional::of(Optional::of(1)));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Full(value) => Optional::Full(function(value)),
            Self::Empty => Optional::Empty,
        }
    }

    /// Applies a function returning an optional to the payload, collapsing
    /// one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_monads::optional::Optional;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Optional::of(x / 2) } else { Optional::empty() };
    /// assert_eq!(Optional::of(8).flat_map(half), Optional::of(4));
    /// assert_eq!(Optional::of(7).flat_map(half), Optional::empty());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(V) -> Optional<U>,
    {
        match self {
            Self::Full(value) => function(value),
            Self::Empty => Optional::Empty,
        }
    }

    /// Like [`flat_map`](Self::flat_map), for mapping functions whose result
    /// is nullable.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::NullMappingResult`] if the function returns
    /// `None` instead of an optional.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_monads::error::ContainerError;
    /// use fluent_monads::optional::Optional;
    ///
    /// let proper = Optional::of(2).flat_map_nullable(|x| Some(Optional::of(x + 1)));
    /// assert_eq!(proper, Ok(Optional::of(3)));
    ///
    /// let absent = Optional::of(2).flat_map_nullable(|_| None::<Optional<i32>>);
    /// assert_eq!(absent, Err(ContainerError::NullMappingResult));
    /// ```
    pub fn flat_map_nullable<U, F>(self, function: F) -> Result<Optional<U>, ContainerError>
    where
        F: FnOnce(V) -> Option<Optional<U>>,
    {
        match self {
            Self::Full(value) => function(value).ok_or(ContainerError::NullMappingResult),
            Self::Empty => Ok(Optional::Empty),
        }
    }

    /// Keeps the payload only if it satisfies the predicate.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&V) -> bool,
    {
        match self {
            Self::Full(value) if predicate(&value) => Self::Full(value),
            _ => Self::Empty,
        }
    }

    /// Runs a side effect on the payload if present and returns the optional
    /// unchanged.
    #[inline]
    pub fn if_present<A>(self, action: A) -> Self
    where
        A: FnOnce(&V),
    {
        if let Self::Full(value) = &self {
            action(value);
        }
        self
    }

    // =========================================================================
    // Alternatives
    // =========================================================================

    /// Substitutes `Full(alternative)` when empty; a full optional is
    /// returned unchanged.
    #[inline]
    pub fn or(self, alternative: V) -> Self {
        match self {
            Self::Full(value) => Self::Full(value),
            Self::Empty => Self::Full(alternative),
        }
    }

    /// Substitutes `Full(supplier())` when empty. The supplier only runs for
    /// an empty optional.
    #[inline]
    pub fn or_get<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> V,
    {
        match self {
            Self::Full(value) => Self::Full(value),
            Self::Empty => Self::Full(supplier()),
        }
    }

    /// Returns the payload, or `alternative` if empty.
    #[inline]
    pub fn or_else(self, alternative: V) -> V {
        match self {
            Self::Full(value) => value,
            Self::Empty => alternative,
        }
    }

    /// Returns the payload, or the supplier's value if empty.
    #[inline]
    pub fn or_else_get<F>(self, supplier: F) -> V
    where
        F: FnOnce() -> V,
    {
        match self {
            Self::Full(value) => value,
            Self::Empty => supplier(),
        }
    }

    /// Returns the payload, or raises the supplied cause if empty.
    ///
    /// # Errors
    ///
    /// Returns the supplier's cause if the optional is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_monads::optional::Optional;
    ///
    /// let missing: Optional<u32> = Optional::empty();
    /// assert_eq!(missing.or_throw(|| "no port configured"), Err("no port configured"));
    /// assert_eq!(Optional::of(8080_u32).or_throw(|| "no port configured"), Ok(8080));
    /// ```
    #[inline]
    pub fn or_throw<E, F>(self, cause_supplier: F) -> Result<V, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Full(value) => Ok(value),
            Self::Empty => Err(cause_supplier()),
        }
    }

    /// Like [`or_throw`](Self::or_throw), for a cause supplier whose result is
    /// nullable. An absent cause is raised as
    /// [`ContainerError::NullCause`].
    ///
    /// # Errors
    ///
    /// Returns the supplied cause if the optional is empty, or
    /// `E::from(ContainerError::NullCause)` if the supplier returned `None`.
    pub fn or_throw_nullable<E, F>(self, cause_supplier: F) -> Result<V, E>
    where
        E: From<ContainerError>,
        F: FnOnce() -> Option<E>,
    {
        match self {
            Self::Full(value) => Ok(value),
            Self::Empty => {
                Err(cause_supplier().unwrap_or_else(|| ContainerError::NullCause.into()))
            }
        }
    }

    // =========================================================================
    // Merging
    // =========================================================================

    /// Merges two optionals; `Full` only when both are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_monads::optional::Optional;
    ///
    /// let sum = Optional::of(2).merge_with(Optional::of(3), |a, b| a + b);
    /// assert_eq!(sum, Optional::of(5));
    ///
    /// let partial = Optional::of(2).merge_with(Optional::<i32>::empty(), |a, b| a + b);
    /// assert_eq!(partial, Optional::empty());
    /// ```
    #[inline]
    pub fn merge_with<W, R, M>(self, other: Optional<W>, merge: M) -> Optional<R>
    where
        M: FnOnce(V, W) -> R,
    {
        self.merge_with_parts(other, merge, None::<fn(V) -> R>, None::<fn(W) -> R>)
    }

    /// Merges two optionals, falling back to `this_only` when only this
    /// optional is present.
    #[inline]
    pub fn merge_with_this_fallback<W, R, M, T>(
        self,
        other: Optional<W>,
        merge: M,
        this_only: T,
    ) -> Optional<R>
    where
        M: FnOnce(V, W) -> R,
        T: FnOnce(V) -> R,
    {
        self.merge_with_parts(other, merge, Some(this_only), None::<fn(W) -> R>)
    }

    /// Merges two optionals, falling back to `other_only` when only the other
    /// optional is present.
    #[inline]
    pub fn merge_with_other_fallback<W, R, M, O>(
        self,
        other: Optional<W>,
        merge: M,
        other_only: O,
    ) -> Optional<R>
    where
        M: FnOnce(V, W) -> R,
        O: FnOnce(W) -> R,
    {
        self.merge_with_parts(other, merge, None::<fn(V) -> R>, Some(other_only))
    }

    /// Merges two optionals with a fallback for each one-sided case.
    ///
    /// Precedence: both present uses `merge`; only this present uses
    /// `this_only`; only the other present uses `other_only`; neither present
    /// is `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_monads::optional::Optional;
    ///
    /// let describe = |left: Optional<&str>, right: Optional<&str>| {
    ///     left.merge_with_fallbacks(
    ///         right,
    ///         |a, b| format!("{a}+{b}"),
    ///         |a| format!("{a} only"),
    ///         |b| format!("only {b}"),
    ///     )
    /// };
    ///
    /// assert_eq!(describe(Optional::of("x"), Optional::of("y")), Optional::of("x+y".to_string()));
    /// let x_only = describe(Optional::of("x"), Optional::empty());
    /// assert_eq!(x_only, Optional::of("x only".to_string()));
    /// let only_y = describe(Optional::empty(), Optional::of("y"));
    /// assert_eq!(only_y, Optional::of("only y".to_string()));
    /// assert_eq!(describe(Optional::empty(), Optional::empty()), Optional::empty());
    /// ```
    #[inline]
    pub fn merge_with_fallbacks<W, R, M, T, O>(
        self,
        other: Optional<W>,
        merge: M,
        this_only: T,
        other_only: O,
    ) -> Optional<R>
    where
        M: FnOnce(V, W) -> R,
        T: FnOnce(V) -> R,
        O: FnOnce(W) -> R,
    {
        self.merge_with_parts(other, merge, Some(this_only), Some(other_only))
    }

    fn merge_with_parts<W, R, M, T, O>(
        self,
        other: Optional<W>,
        merge: M,
        this_only: Option<T>,
        other_only: Option<O>,
    ) -> Optional<R>
    where
        M: FnOnce(V, W) -> R,
        T: FnOnce(V) -> R,
        O: FnOnce(W) -> R,
    {
        match (self, other) {
            (Self::Full(left), Optional::Full(right)) => Optional::Full(merge(left, right)),
            (Self::Full(left), Optional::Empty) => {
                Optional::of_nullable(this_only.map(|fallback| fallback(left)))
            }
            (Self::Empty, Optional::Full(right)) => {
                Optional::of_nullable(other_only.map(|fallback| fallback(right)))
            }
            (Self::Empty, Optional::Empty) => Optional::Empty,
        }
    }

    /// Projects two nullable sub-values out of the payload and merges them.
    ///
    /// Both extractors borrow the payload. The merge is `Full` only if both
    /// extractors yield a value; an empty optional stays empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_monads::optional::Optional;
    ///
    /// struct Endpoint {
    ///     host: Option<&'static str>,
    ///     port: Option<u16>,
    /// }
    ///
    /// let endpoint = Optional::of(Endpoint { host: Some("localhost"), port: Some(80) });
    /// let address = endpoint.explode_and_merge(
    ///     |e| e.host,
    ///     |e| e.port,
    ///     |host, port| format!("{host}:{port}"),
    /// );
    /// assert_eq!(address, Optional::of("localhost:80".to_string()));
    /// ```
    #[inline]
    pub fn explode_and_merge<A, B, R, XA, XB, M>(
        self,
        extract_a: XA,
        extract_b: XB,
        merge: M,
    ) -> Optional<R>
    where
        XA: FnOnce(&V) -> Option<A>,
        XB: FnOnce(&V) -> Option<B>,
        M: FnOnce(A, B) -> R,
    {
        self.flat_map(|value| {
            let (left, right) = explode(&value, extract_a, extract_b);
            left.merge_with(right, merge)
        })
    }

    /// Projects two nullable sub-values out of the payload and merges them,
    /// with the same one-sided fallback precedence as
    /// [`merge_with_fallbacks`](Self::merge_with_fallbacks).
    pub fn explode_and_merge_with_fallbacks<A, B, R, XA, XB, M, T, O>(
        self,
        extract_a: XA,
        extract_b: XB,
        merge: M,
        a_only: T,
        b_only: O,
    ) -> Optional<R>
    where
        XA: FnOnce(&V) -> Option<A>,
        XB: FnOnce(&V) -> Option<B>,
        M: FnOnce(A, B) -> R,
        T: FnOnce(A) -> R,
        O: FnOnce(B) -> R,
    {
        self.flat_map(|value| {
            let (left, right) = explode(&value, extract_a, extract_b);
            left.merge_with_fallbacks(right, merge, a_only, b_only)
        })
    }

    // =========================================================================
    // Iteration and Conversion
    // =========================================================================

    /// Returns an iterator over the payload, yielding zero or one element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_monads::optional::Optional;
    ///
    /// let full = Optional::of(5);
    /// assert_eq!(full.iter().copied().collect::<Vec<_>>(), vec![5]);
    /// // a fresh iteration starts over
    /// assert_eq!(full.iter().count(), 1);
    /// ```
    #[inline]
    pub fn iter(&self) -> Single<'_, V> {
        match self {
            Self::Full(value) => Single::new(Some(value)),
            Self::Empty => Single::new(None),
        }
    }

    /// Converts into the standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<V> {
        match self {
            Self::Full(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Converts into a [`Try`](crate::attempt::Try): `Full(v)` is a success,
    /// `Empty` a failure with the supplied cause.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_monads::attempt::Try;
    /// use fluent_monads::optional::Optional;
    ///
    /// let attempt: Try<i32, &str> = Optional::empty().to_try(|| "missing");
    /// assert_eq!(attempt, Try::error("missing"));
    /// ```
    #[cfg(feature = "attempt")]
    #[inline]
    pub fn to_try<E, F>(self, cause_supplier: F) -> crate::attempt::Try<V, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Full(value) => crate::attempt::Try::success(value),
            Self::Empty => crate::attempt::Try::error(cause_supplier()),
        }
    }
}

fn explode<V, A, B, XA, XB>(value: &V, extract_a: XA, extract_b: XB) -> (Optional<A>, Optional<B>)
where
    XA: FnOnce(&V) -> Option<A>,
    XB: FnOnce(&V) -> Option<B>,
{
    (
        Optional::of_nullable(extract_a(value)),
        Optional::of_nullable(extract_b(value)),
    )
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<V> Default for Optional<V> {
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

impl<V: fmt::Debug> fmt::Debug for Optional<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => formatter.write_str("Empty"),
            Self::Full(value) => formatter.debug_tuple("Full").field(value).finish(),
        }
    }
}

impl<V> From<Option<V>> for Optional<V> {
    #[inline]
    fn from(value: Option<V>) -> Self {
        Self::of_nullable(value)
    }
}

impl<V> From<Optional<V>> for Option<V> {
    #[inline]
    fn from(optional: Optional<V>) -> Self {
        optional.into_option()
    }
}

impl<V> FromIterator<V> for Optional<V> {
    /// Keeps the first element of the iterator, if any.
    fn from_iter<I: IntoIterator<Item = V>>(iterable: I) -> Self {
        Self::of_nullable(iterable.into_iter().next())
    }
}

impl<V> IntoIterator for Optional<V> {
    type Item = V;
    type IntoIter = IntoSingle<V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoSingle::new(self.into_option())
    }
}

impl<'a, V> IntoIterator for &'a Optional<V> {
    type Item = &'a V;
    type IntoIter = Single<'a, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(Optional<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Optional<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_of_is_present() {
        let optional = Optional::of(1);
        assert!(optional.is_present());
        assert!(!optional.is_empty());
    }

    #[rstest]
    fn test_empty_is_default() {
        assert_eq!(Optional::<String>::default(), Optional::empty());
    }

    #[rstest]
    fn test_get_ref_on_empty() {
        let optional: Optional<i32> = Optional::empty();
        assert_eq!(optional.get_ref(), Err(ContainerError::ValueAbsent));
    }

    #[rstest]
    fn test_or_get_supplier_not_called_when_full() {
        let calls = Cell::new(0);
        let result = Optional::of(1).or_get(|| {
            calls.set(calls.get() + 1);
            2
        });
        assert_eq!(result, Optional::of(1));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_or_throw_nullable_absent_cause() {
        let optional: Optional<i32> = Optional::empty();
        let result: Result<i32, ContainerError> = optional.or_throw_nullable(|| None);
        assert_eq!(result, Err(ContainerError::NullCause));
    }

    #[rstest]
    fn test_if_present_runs_once_only_when_full() {
        let seen = Cell::new(0);
        let _ = Optional::of(3).if_present(|value| seen.set(seen.get() + value));
        let _ = Optional::<i32>::empty().if_present(|value| seen.set(seen.get() + value));
        assert_eq!(seen.get(), 3);
    }

    #[rstest]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Optional::of(1)), "Full(1)");
        assert_eq!(format!("{:?}", Optional::<i32>::empty()), "Empty");
    }

    #[rstest]
    fn test_from_iterator_takes_first() {
        let optional: Optional<i32> = vec![4, 5, 6].into_iter().collect();
        assert_eq!(optional, Optional::of(4));
    }
}
