//! Extension point for try-like containers.
//!
//! [`FluentTry`] is the `Try` counterpart of
//! [`FluentOptional`](crate::optional::FluentOptional): an implementor
//! supplies the conversions to and from [`Try`] and a borrowing view, and
//! every default combinator returns `Self::WithTypes<..>`, so a chain never
//! falls back to the plain `Try` and the extension's own methods stay
//! callable at every step.

use std::error::Error as StdError;

use super::Try;
use crate::error::{CauseChain, ContainerError};
use crate::iter::Single;

/// A container that behaves like a [`Try`] and keeps its own type through
/// every combinator.
///
/// # Laws
///
/// ```text
/// Self::from_try(value.into_try()) == value
/// value.as_try() == value.into_try().as_ref()
/// ```
///
/// # Examples
///
/// ```rust
/// use fluent_monads::attempt::{FluentTry, Try};
///
/// #[derive(Debug, PartialEq)]
/// struct Validation<S, E>(Try<S, E>);
///
/// impl<S, E> FluentTry for Validation<S, E> {
///     type Success = S;
///     type Error = E;
///     type WithTypes<S2, E2> = Validation<S2, E2>;
///
///     fn into_try(self) -> Try<S, E> {
///         self.0
///     }
///
///     fn from_try<S2, E2>(value: Try<S2, E2>) -> Validation<S2, E2> {
///         Validation(value)
///     }
///
///     fn as_try(&self) -> Try<&S, &E> {
///         self.0.as_ref()
///     }
/// }
///
/// impl Validation<String, String> {
///     fn non_blank(self) -> Self {
///         self.filter_get(|s| !s.trim().is_empty(), || "blank".to_string())
///     }
/// }
///
/// let input: Try<String, String> = Try::success("  ".to_string());
/// let name = Validation(input).map(|s| s.to_uppercase()).non_blank();
/// assert!(name.is_error());
/// assert_eq!(name, Validation(Try::error("blank".to_string())));
/// ```
pub trait FluentTry: Sized {
    /// The type of the success value.
    type Success;

    /// The type of the failure cause.
    type Error;

    /// The same container holding different success and failure types.
    type WithTypes<S2, E2>: FluentTry<Success = S2, Error = E2>;

    /// Unwraps the container into a plain [`Try`].
    fn into_try(self) -> Try<Self::Success, Self::Error>;

    /// Wraps a plain [`Try`] into this kind of container.
    fn from_try<S2, E2>(value: Try<S2, E2>) -> Self::WithTypes<S2, E2>;

    /// Borrows both sides as a plain [`Try`].
    fn as_try(&self) -> Try<&Self::Success, &Self::Error>;

    // =========================================================================
    // Queries and Access
    // =========================================================================

    /// See [`Try::is_success`].
    #[inline]
    fn is_success(&self) -> bool {
        self.as_try().is_success()
    }

    /// See [`Try::is_error`].
    #[inline]
    fn is_error(&self) -> bool {
        self.as_try().is_error()
    }

    /// See [`Try::is_error_type_of`].
    #[inline]
    fn is_error_type_of<K>(&self) -> bool
    where
        K: StdError + 'static,
        Self::Error: CauseChain,
    {
        match self.as_try() {
            Try::Failure(cause) => cause.has_kind::<K>(),
            Try::Success(_) => false,
        }
    }

    /// See [`Try::get_success`].
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::WrongVariant`] on a failure.
    #[inline]
    fn get_success(self) -> Result<Self::Success, ContainerError> {
        self.into_try().get_success()
    }

    /// See [`Try::get_error`].
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::WrongVariant`] on a success.
    #[inline]
    fn get_error(self) -> Result<Self::Error, ContainerError> {
        self.into_try().get_error()
    }

    /// See [`Try::iter`].
    #[inline]
    fn iter(&self) -> Single<'_, Self::Success> {
        Single::new(self.as_try().into_result().ok())
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// See [`Try::map`].
    #[inline]
    fn map<U, F>(self, function: F) -> Self::WithTypes<U, Self::Error>
    where
        F: FnOnce(Self::Success) -> U,
    {
        Self::from_try(self.into_try().map(function))
    }

    /// See [`Try::try_map`].
    #[inline]
    fn try_map<U, X, F>(self, function: F) -> Self::WithTypes<U, Self::Error>
    where
        X: Into<Self::Error>,
        F: FnOnce(Self::Success) -> Result<U, X>,
    {
        Self::from_try(self.into_try().try_map(function))
    }

    /// See [`Try::map_error`].
    #[inline]
    fn map_error<E2, F>(self, function: F) -> Self::WithTypes<Self::Success, E2>
    where
        F: FnOnce(Self::Error) -> E2,
    {
        Self::from_try(self.into_try().map_error(function))
    }

    /// See [`Try::flat_map`]. The function returns the extension type.
    #[inline]
    fn flat_map<U, F>(self, function: F) -> Self::WithTypes<U, Self::Error>
    where
        F: FnOnce(Self::Success) -> Self::WithTypes<U, Self::Error>,
    {
        Self::from_try(self.into_try().flat_map(|value| function(value).into_try()))
    }

    /// See [`Try::flat_map_error`]. The function returns the extension type.
    #[inline]
    fn flat_map_error<E2, F>(self, function: F) -> Self::WithTypes<Self::Success, E2>
    where
        F: FnOnce(Self::Error) -> Self::WithTypes<Self::Success, E2>,
    {
        Self::from_try(self.into_try().flat_map_error(|cause| function(cause).into_try()))
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// See [`Try::filter`].
    #[inline]
    fn filter<P>(self, predicate: P) -> Self::WithTypes<Self::Success, Self::Error>
    where
        Self::Error: From<ContainerError>,
        P: FnOnce(&Self::Success) -> bool,
    {
        Self::from_try(self.into_try().filter(predicate))
    }

    /// See [`Try::filter_get`].
    #[inline]
    fn filter_get<P, C>(
        self,
        predicate: P,
        cause_supplier: C,
    ) -> Self::WithTypes<Self::Success, Self::Error>
    where
        P: FnOnce(&Self::Success) -> bool,
        C: FnOnce() -> Self::Error,
    {
        Self::from_try(self.into_try().filter_get(predicate, cause_supplier))
    }

    /// See [`Try::filter_map`].
    #[inline]
    fn filter_map<P, C>(
        self,
        predicate: P,
        value_to_cause: C,
    ) -> Self::WithTypes<Self::Success, Self::Error>
    where
        P: FnOnce(&Self::Success) -> bool,
        C: FnOnce(Self::Success) -> Self::Error,
    {
        Self::from_try(self.into_try().filter_map(predicate, value_to_cause))
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// See [`Try::recover`].
    #[inline]
    fn recover(self, value: Self::Success) -> Self::WithTypes<Self::Success, Self::Error> {
        Self::from_try(self.into_try().recover(value))
    }

    /// See [`Try::recover_get`].
    #[inline]
    fn recover_get<F>(self, supplier: F) -> Self::WithTypes<Self::Success, Self::Error>
    where
        F: FnOnce() -> Self::Success,
    {
        Self::from_try(self.into_try().recover_get(supplier))
    }

    /// See [`Try::recover_map`].
    #[inline]
    fn recover_map<F>(self, function: F) -> Self::WithTypes<Self::Success, Self::Error>
    where
        F: FnOnce(Self::Error) -> Self::Success,
    {
        Self::from_try(self.into_try().recover_map(function))
    }

    /// See [`Try::try_recover_map`].
    #[inline]
    fn try_recover_map<X, F>(self, function: F) -> Self::WithTypes<Self::Success, Self::Error>
    where
        X: Into<Self::Error>,
        F: FnOnce(Self::Error) -> Result<Self::Success, X>,
    {
        Self::from_try(self.into_try().try_recover_map(function))
    }

    /// See [`Try::recover_flat`].
    #[inline]
    fn recover_flat(self, other: Self) -> Self::WithTypes<Self::Success, Self::Error> {
        Self::from_try(self.into_try().recover_flat(other.into_try()))
    }

    /// See [`Try::recover_flat_get`].
    #[inline]
    fn recover_flat_get<F>(self, supplier: F) -> Self::WithTypes<Self::Success, Self::Error>
    where
        F: FnOnce() -> Self,
    {
        Self::from_try(self.into_try().recover_flat_get(|| supplier().into_try()))
    }

    /// See [`Try::recover_flat_map`].
    #[inline]
    fn recover_flat_map<F>(self, function: F) -> Self::WithTypes<Self::Success, Self::Error>
    where
        F: FnOnce(Self::Error) -> Self,
    {
        Self::from_try(self.into_try().recover_flat_map(|cause| function(cause).into_try()))
    }

    // =========================================================================
    // Cause-Kind Scoped Recovery
    // =========================================================================

    /// See [`Try::recover_kind`].
    #[inline]
    fn recover_kind<K>(self, value: Self::Success) -> Self::WithTypes<Self::Success, Self::Error>
    where
        K: StdError + 'static,
        Self::Error: CauseChain,
    {
        Self::from_try(self.into_try().recover_kind::<K>(value))
    }

    /// See [`Try::recover_get_kind`].
    #[inline]
    fn recover_get_kind<K, F>(self, supplier: F) -> Self::WithTypes<Self::Success, Self::Error>
    where
        K: StdError + 'static,
        Self::Error: CauseChain,
        F: FnOnce() -> Self::Success,
    {
        Self::from_try(self.into_try().recover_get_kind::<K, _>(supplier))
    }

    /// See [`Try::recover_map_kind`].
    #[inline]
    fn recover_map_kind<K, F>(self, function: F) -> Self::WithTypes<Self::Success, Self::Error>
    where
        K: StdError + 'static,
        Self::Error: CauseChain,
        F: FnOnce(Self::Error) -> Self::Success,
    {
        Self::from_try(self.into_try().recover_map_kind::<K, _>(function))
    }

    /// See [`Try::recover_flat_kind`].
    #[inline]
    fn recover_flat_kind<K>(self, other: Self) -> Self::WithTypes<Self::Success, Self::Error>
    where
        K: StdError + 'static,
        Self::Error: CauseChain,
    {
        Self::from_try(self.into_try().recover_flat_kind::<K>(other.into_try()))
    }

    /// See [`Try::recover_flat_map_kind`].
    #[inline]
    fn recover_flat_map_kind<K, F>(
        self,
        function: F,
    ) -> Self::WithTypes<Self::Success, Self::Error>
    where
        K: StdError + 'static,
        Self::Error: CauseChain,
        F: FnOnce(Self::Error) -> Self,
    {
        let recovered = self
            .into_try()
            .recover_flat_map_kind::<K, _>(|cause| function(cause).into_try());
        Self::from_try(recovered)
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// See [`Try::on_success`].
    #[inline]
    fn on_success<A>(self, action: A) -> Self::WithTypes<Self::Success, Self::Error>
    where
        A: FnOnce(&Self::Success),
    {
        Self::from_try(self.into_try().on_success(action))
    }

    /// See [`Try::on_error`].
    #[inline]
    fn on_error<A>(self, action: A) -> Self::WithTypes<Self::Success, Self::Error>
    where
        A: FnOnce(&Self::Error),
    {
        Self::from_try(self.into_try().on_error(action))
    }

    /// See [`Try::try_on_success`].
    #[inline]
    fn try_on_success<X, A>(self, action: A) -> Self::WithTypes<Self::Success, Self::Error>
    where
        X: Into<Self::Error>,
        A: FnOnce(&Self::Success) -> Result<(), X>,
    {
        Self::from_try(self.into_try().try_on_success(action))
    }

    /// See [`Try::try_on_error`].
    #[inline]
    fn try_on_error<X, A>(self, action: A) -> Self::WithTypes<Self::Success, Self::Error>
    where
        X: Into<Self::Error>,
        A: FnOnce(&Self::Error) -> Result<(), X>,
    {
        Self::from_try(self.into_try().try_on_error(action))
    }

    // =========================================================================
    // Alternatives
    // =========================================================================

    /// See [`Try::switch_with_error`].
    #[inline]
    fn switch_with_error(self) -> Self::WithTypes<Self::Error, ContainerError> {
        Self::from_try(self.into_try().switch_with_error())
    }

    /// See [`Try::or`].
    #[inline]
    fn or(self, other: Self) -> Self::WithTypes<Self::Success, Self::Error> {
        Self::from_try(self.into_try().or(other.into_try()))
    }

    /// See [`Try::or_else`].
    #[inline]
    fn or_else<F>(self, supplier: F) -> Self::WithTypes<Self::Success, Self::Error>
    where
        F: FnOnce() -> Self,
    {
        Self::from_try(self.into_try().or_else(|| supplier().into_try()))
    }
}

impl<S, E> FluentTry for Try<S, E> {
    type Success = S;
    type Error = E;
    type WithTypes<S2, E2> = Try<S2, E2>;

    #[inline]
    fn into_try(self) -> Self {
        self
    }

    #[inline]
    fn from_try<S2, E2>(value: Try<S2, E2>) -> Try<S2, E2> {
        value
    }

    #[inline]
    fn as_try(&self) -> Try<&S, &E> {
        self.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn double<T>(container: T) -> T::WithTypes<i32, T::Error>
    where
        T: FluentTry<Success = i32>,
    {
        FluentTry::map(container, |n| n * 2)
    }

    fn default_to_zero<T>(container: T) -> T::WithTypes<i32, T::Error>
    where
        T: FluentTry<Success = i32>,
    {
        FluentTry::recover(container, 0)
    }

    fn first_success<T: FluentTry>(containers: &[T]) -> Option<&T::Success> {
        containers.iter().find_map(|container| FluentTry::iter(container).next())
    }

    #[rstest]
    fn test_generic_code_over_plain_try() {
        let success: Try<i32, String> = Try::success(4);
        let failure: Try<i32, String> = Try::error("bad".to_string());
        assert_eq!(double(success), Try::success(8));
        assert_eq!(double(failure.clone()), Try::error("bad".to_string()));
        assert_eq!(default_to_zero(failure), Try::success(0));
    }

    #[rstest]
    fn test_generic_queries_over_plain_try() {
        let containers: [Try<i32, String>; 3] =
            [Try::error("a".to_string()), Try::success(2), Try::success(3)];
        assert_eq!(first_success(&containers), Some(&2));
    }

    #[rstest]
    fn test_concrete_chain_stays_plain_try() {
        let chained: Try<i32, String> = FluentTry::on_error(
            FluentTry::map(Try::<i32, String>::success(1), |n| n + 1),
            |_| {},
        );
        assert_eq!(chained, Try::success(2));
    }
}
