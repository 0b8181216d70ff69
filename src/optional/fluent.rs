//! Extension point for optional-like containers.
//!
//! [`FluentOptional`] lets a user-defined container reuse every `Optional`
//! combinator while keeping its own type through the chain. It follows the
//! same Generic Associated Type trick used to emulate higher-kinded types:
//! `WithType<U>` names "this container, holding `U` instead".
//!
//! An implementor only supplies the conversions to and from [`Optional`] and
//! a borrowing view; the combinators come as default methods, and new
//! combinators are added as ordinary inherent methods on the extension type.
//!
//! # Examples
//!
//! ```rust
//! use fluent_monads::optional::{FluentOptional, Optional};
//!
//! #[derive(Debug, PartialEq)]
//! struct Percent<V>(Optional<V>);
//!
//! impl<V> FluentOptional for Percent<V> {
//!     type Value = V;
//!     type WithType<U> = Percent<U>;
//!
//!     fn into_optional(self) -> Optional<V> {
//!         self.0
//!     }
//!
//!     fn from_optional<U>(optional: Optional<U>) -> Percent<U> {
//!         Percent(optional)
//!     }
//!
//!     fn as_optional(&self) -> Optional<&V> {
//!         self.0.as_ref()
//!     }
//! }
//!
//! impl Percent<u32> {
//!     fn clamp(self) -> Self {
//!         self.map(|value| value.min(100))
//!     }
//! }
//!
//! // `map` and `filter` return `Percent`, so the new `clamp` stays reachable.
//! let clamped = Percent(Optional::of(70_u32)).map(|x| x * 2).filter(|x| *x > 10).clamp();
//! assert!(clamped.is_present());
//! assert_eq!(clamped, Percent(Optional::of(100)));
//! ```

use super::Optional;
use crate::error::ContainerError;
use crate::iter::Single;

/// A container that behaves like an [`Optional`] and keeps its own type
/// through every combinator.
///
/// # Laws
///
/// The conversions must be inverse to each other, and the borrowing view
/// must agree with the owned one:
///
/// ```text
/// Self::from_optional(value.into_optional()) == value
/// value.as_optional() == value.into_optional().as_ref()
/// ```
pub trait FluentOptional: Sized {
    /// The type of the payload.
    type Value;

    /// The same container holding a `U` instead.
    type WithType<U>: FluentOptional<Value = U>;

    /// Unwraps the container into a plain [`Optional`].
    fn into_optional(self) -> Optional<Self::Value>;

    /// Wraps a plain [`Optional`] into this kind of container.
    fn from_optional<U>(optional: Optional<U>) -> Self::WithType<U>;

    /// Borrows the payload as a plain [`Optional`].
    fn as_optional(&self) -> Optional<&Self::Value>;

    // =========================================================================
    // Queries and Access
    // =========================================================================

    /// See [`Optional::is_present`].
    #[inline]
    fn is_present(&self) -> bool {
        self.as_optional().is_present()
    }

    /// See [`Optional::is_empty`].
    #[inline]
    fn is_empty(&self) -> bool {
        self.as_optional().is_empty()
    }

    /// See [`Optional::get`].
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::ValueAbsent`] if the container is empty.
    #[inline]
    fn get(self) -> Result<Self::Value, ContainerError> {
        self.into_optional().get()
    }

    /// See [`Optional::iter`].
    #[inline]
    fn iter(&self) -> Single<'_, Self::Value> {
        Single::new(self.as_optional().into_option())
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// See [`Optional::map`].
    #[inline]
    fn map<U, F>(self, function: F) -> Self::WithType<U>
    where
        F: FnOnce(Self::Value) -> U,
    {
        Self::from_optional(self.into_optional().map(function))
    }

    /// See [`Optional::flat_map`]. The function returns the extension type.
    #[inline]
    fn flat_map<U, F>(self, function: F) -> Self::WithType<U>
    where
        F: FnOnce(Self::Value) -> Self::WithType<U>,
    {
        Self::from_optional(self.into_optional().flat_map(|value| function(value).into_optional()))
    }

    /// See [`Optional::flat_map_nullable`]. The function returns the
    /// extension type.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::NullMappingResult`] if the function returns
    /// `None`.
    fn flat_map_nullable<U, F>(self, function: F) -> Result<Self::WithType<U>, ContainerError>
    where
        F: FnOnce(Self::Value) -> Option<Self::WithType<U>>,
    {
        self.into_optional()
            .flat_map_nullable(|value| function(value).map(FluentOptional::into_optional))
            .map(Self::from_optional)
    }

    /// See [`Optional::filter`].
    #[inline]
    fn filter<P>(self, predicate: P) -> Self::WithType<Self::Value>
    where
        P: FnOnce(&Self::Value) -> bool,
    {
        Self::from_optional(self.into_optional().filter(predicate))
    }

    /// See [`Optional::if_present`].
    #[inline]
    fn if_present<A>(self, action: A) -> Self::WithType<Self::Value>
    where
        A: FnOnce(&Self::Value),
    {
        Self::from_optional(self.into_optional().if_present(action))
    }

    // =========================================================================
    // Alternatives
    // =========================================================================

    /// See [`Optional::or`].
    #[inline]
    fn or(self, alternative: Self::Value) -> Self::WithType<Self::Value> {
        Self::from_optional(self.into_optional().or(alternative))
    }

    /// See [`Optional::or_get`].
    #[inline]
    fn or_get<F>(self, supplier: F) -> Self::WithType<Self::Value>
    where
        F: FnOnce() -> Self::Value,
    {
        Self::from_optional(self.into_optional().or_get(supplier))
    }

    /// See [`Optional::or_else`].
    #[inline]
    fn or_else(self, alternative: Self::Value) -> Self::Value {
        self.into_optional().or_else(alternative)
    }

    /// See [`Optional::or_else_get`].
    #[inline]
    fn or_else_get<F>(self, supplier: F) -> Self::Value
    where
        F: FnOnce() -> Self::Value,
    {
        self.into_optional().or_else_get(supplier)
    }

    /// See [`Optional::or_throw`].
    ///
    /// # Errors
    ///
    /// Returns the supplier's cause if the container is empty.
    #[inline]
    fn or_throw<E, F>(self, cause_supplier: F) -> Result<Self::Value, E>
    where
        F: FnOnce() -> E,
    {
        self.into_optional().or_throw(cause_supplier)
    }

    /// See [`Optional::or_throw_nullable`].
    ///
    /// # Errors
    ///
    /// Returns the supplied cause if the container is empty, or
    /// `E::from(ContainerError::NullCause)` if the supplier returned `None`.
    #[inline]
    fn or_throw_nullable<E, F>(self, cause_supplier: F) -> Result<Self::Value, E>
    where
        E: From<ContainerError>,
        F: FnOnce() -> Option<E>,
    {
        self.into_optional().or_throw_nullable(cause_supplier)
    }

    // =========================================================================
    // Merging
    // =========================================================================

    /// See [`Optional::merge_with`]. The other side may be any optional-like
    /// container.
    #[inline]
    fn merge_with<O, R, M>(self, other: O, merge: M) -> Self::WithType<R>
    where
        O: FluentOptional,
        M: FnOnce(Self::Value, O::Value) -> R,
    {
        Self::from_optional(self.into_optional().merge_with(other.into_optional(), merge))
    }

    /// See [`Optional::merge_with_this_fallback`].
    #[inline]
    fn merge_with_this_fallback<O, R, M, T>(
        self,
        other: O,
        merge: M,
        this_only: T,
    ) -> Self::WithType<R>
    where
        O: FluentOptional,
        M: FnOnce(Self::Value, O::Value) -> R,
        T: FnOnce(Self::Value) -> R,
    {
        let merged = self
            .into_optional()
            .merge_with_this_fallback(other.into_optional(), merge, this_only);
        Self::from_optional(merged)
    }

    /// See [`Optional::merge_with_other_fallback`].
    #[inline]
    fn merge_with_other_fallback<O, R, M, W>(
        self,
        other: O,
        merge: M,
        other_only: W,
    ) -> Self::WithType<R>
    where
        O: FluentOptional,
        M: FnOnce(Self::Value, O::Value) -> R,
        W: FnOnce(O::Value) -> R,
    {
        let merged = self
            .into_optional()
            .merge_with_other_fallback(other.into_optional(), merge, other_only);
        Self::from_optional(merged)
    }

    /// See [`Optional::merge_with_fallbacks`].
    #[inline]
    fn merge_with_fallbacks<O, R, M, T, W>(
        self,
        other: O,
        merge: M,
        this_only: T,
        other_only: W,
    ) -> Self::WithType<R>
    where
        O: FluentOptional,
        M: FnOnce(Self::Value, O::Value) -> R,
        T: FnOnce(Self::Value) -> R,
        W: FnOnce(O::Value) -> R,
    {
        let merged = self.into_optional().merge_with_fallbacks(
            other.into_optional(),
            merge,
            this_only,
            other_only,
        );
        Self::from_optional(merged)
    }

    /// See [`Optional::explode_and_merge`].
    #[inline]
    fn explode_and_merge<A, B, R, XA, XB, M>(
        self,
        extract_a: XA,
        extract_b: XB,
        merge: M,
    ) -> Self::WithType<R>
    where
        XA: FnOnce(&Self::Value) -> Option<A>,
        XB: FnOnce(&Self::Value) -> Option<B>,
        M: FnOnce(A, B) -> R,
    {
        Self::from_optional(self.into_optional().explode_and_merge(extract_a, extract_b, merge))
    }

    /// See [`Optional::explode_and_merge_with_fallbacks`].
    #[inline]
    fn explode_and_merge_with_fallbacks<A, B, R, XA, XB, M, T, W>(
        self,
        extract_a: XA,
        extract_b: XB,
        merge: M,
        a_only: T,
        b_only: W,
    ) -> Self::WithType<R>
    where
        XA: FnOnce(&Self::Value) -> Option<A>,
        XB: FnOnce(&Self::Value) -> Option<B>,
        M: FnOnce(A, B) -> R,
        T: FnOnce(A) -> R,
        W: FnOnce(B) -> R,
    {
        let merged = self.into_optional().explode_and_merge_with_fallbacks(
            extract_a, extract_b, merge, a_only, b_only,
        );
        Self::from_optional(merged)
    }
}

impl<V> FluentOptional for Optional<V> {
    type Value = V;
    type WithType<U> = Optional<U>;

    #[inline]
    fn into_optional(self) -> Self {
        self
    }

    #[inline]
    fn from_optional<U>(optional: Optional<U>) -> Optional<U> {
        optional
    }

    #[inline]
    fn as_optional(&self) -> Optional<&V> {
        self.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn increment<O>(container: O) -> O::WithType<i32>
    where
        O: FluentOptional<Value = i32>,
    {
        FluentOptional::map(container, |value| value + 1)
    }

    fn count_present<O: FluentOptional>(containers: &[O]) -> usize {
        containers.iter().filter(|container| FluentOptional::is_present(*container)).count()
    }

    #[rstest]
    fn test_generic_code_over_plain_optional() {
        assert_eq!(increment(Optional::of(1)), Optional::of(2));
        assert_eq!(increment(Optional::<i32>::empty()), Optional::empty());
    }

    #[rstest]
    fn test_generic_queries_over_plain_optional() {
        let containers = [Optional::of(1), Optional::empty(), Optional::of(3)];
        assert_eq!(count_present(&containers), 2);
    }

    #[rstest]
    fn test_conversions_are_inverse() {
        let optional = Optional::of("value");
        assert_eq!(Optional::<()>::from_optional(optional.into_optional()), optional);
        assert_eq!(optional.as_optional(), Optional::of(&"value"));
    }
}
