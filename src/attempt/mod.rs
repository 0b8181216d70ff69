//! Try type - success value or failure cause.
//!
//! This module provides [`Try<S, E>`], the outcome of an operation that may
//! fail: either `Success(S)` or `Failure(E)`. The failure type defaults to
//! [`Cause`], a type-erased recoverable error.
//!
//! # Recoverable and fatal failures
//!
//! `Try` captures *returned* errors only. A fallible computation returns
//! `Result<S, X>`; `Err` values become a `Failure`. Panics, aborts, stack
//! overflow and allocation failure are fatal and bypass `Try` entirely: a
//! panic raised inside any combinator closure propagates to the caller.
//!
//! Combinators whose closure can itself fail come in a `try_` form taking a
//! `Result`-returning closure; a returned `Err` turns the `Try` into a new
//! `Failure`.
//!
//! # Cause kinds
//!
//! The kind-scoped operations (`is_error_type_of`, `recover_kind` and the
//! other `*_kind` forms) require `E: CauseChain`, which holds for the
//! type-erased causes: [`Cause`] and `Box<dyn Error + Send + Sync>`. A `Try`
//! over a concrete error type matches kinds through
//! [`has_kind_in_chain`](crate::error::has_kind_in_chain) instead.
//!
//! # Examples
//!
//! ```rust
//! use fluent_monads::attempt::Try;
//!
//! let parsed: Try<i32> = Try::of(|| "42".parse::<i32>());
//! assert_eq!(parsed.map(|n| n + 1).get_success().ok(), Some(43));
//!
//! let recovered: Try<i32> = Try::of(|| "x".parse::<i32>()).recover_map(|_| 0);
//! assert_eq!(recovered.get_success().ok(), Some(0));
//! ```

mod fluent;

pub use fluent::FluentTry;

use std::error::Error as StdError;
use std::fmt;

pub use crate::error::Cause;
use crate::error::{CauseChain, ContainerError};
use crate::iter::{IntoSingle, Single};

const SUCCESS: &str = "success";
const ERROR: &str = "error";

/// The outcome of an operation that may fail.
///
/// Exactly one of the success value or the failure cause is accessible.
///
/// # Examples
///
/// ```rust
/// use fluent_monads::attempt::Try;
/// use fluent_monads::error::ContainerError;
///
/// let success: Try<i32, String> = Try::success(1);
/// assert!(success.is_success());
/// assert_eq!(
///     success.get_error(),
///     Err(ContainerError::WrongVariant { requested: "error", actual: "success" })
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Try<S, E = Cause> {
    /// The operation succeeded with a value.
    Success(S),
    /// The operation failed with a cause.
    Failure(E),
}

impl<S, E> Try<S, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Runs a fallible supplier and captures its outcome.
    ///
    /// `Ok(value)` becomes `Success(value)`; `Err(cause)` becomes
    /// `Failure(cause.into())`. Panics in the supplier are not captured.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_monads::attempt::Try;
    ///
    /// let success: Try<u8> = Try::of(|| "7".parse::<u8>());
    /// assert!(success.is_success());
    ///
    /// let failure: Try<u8> = Try::of(|| "300".parse::<u8>());
    /// assert!(failure.is_error());
    /// ```
    pub fn of<X, F>(supplier: F) -> Self
    where
        X: Into<E>,
        F: FnOnce() -> Result<S, X>,
    {
        match supplier() {
            Ok(value) => Self::Success(value),
            Err(cause) => {
                tracing::trace!(
                    cause_type = std::any::type_name::<X>(),
                    "captured failure from supplier"
                );
                Self::Failure(cause.into())
            }
        }
    }

    /// Directly constructs a success.
    #[inline]
    pub const fn success(value: S) -> Self {
        Self::Success(value)
    }

    /// Directly constructs a failure.
    #[inline]
    pub const fn error(cause: E) -> Self {
        Self::Failure(cause)
    }

    /// Constructs a failure from a nullable cause.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::NullCause`] if `cause` is `None`.
    #[inline]
    pub fn error_nullable(cause: Option<E>) -> Result<Self, ContainerError> {
        cause.map(Self::Failure).ok_or(ContainerError::NullCause)
    }

    // =========================================================================
    // Queries and Access
    // =========================================================================

    /// Returns `true` if this is a success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a failure.
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the success value, consuming the `Try`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::WrongVariant`] on a failure.
    #[inline]
    pub fn get_success(self) -> Result<S, ContainerError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(ContainerError::WrongVariant {
                requested: SUCCESS,
                actual: ERROR,
            }),
        }
    }

    /// Returns the failure cause, consuming the `Try`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::WrongVariant`] on a success.
    #[inline]
    pub fn get_error(self) -> Result<E, ContainerError> {
        match self {
            Self::Success(_) => Err(ContainerError::WrongVariant {
                requested: ERROR,
                actual: SUCCESS,
            }),
            Self::Failure(cause) => Ok(cause),
        }
    }

    /// Returns a reference to the success value, if any.
    #[inline]
    pub const fn success_ref(&self) -> Option<&S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the failure cause, if any.
    #[inline]
    pub const fn error_ref(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(cause) => Some(cause),
        }
    }

    /// Converts `&Try<S, E>` into `Try<&S, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Try<&S, &E> {
        match self {
            Self::Success(value) => Try::Success(value),
            Self::Failure(cause) => Try::Failure(cause),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Transforms the success value; a failure is returned unchanged.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Try<U, E>
    where
        F: FnOnce(S) -> U,
    {
        match self {
            Self::Success(value) => Try::Success(function(value)),
            Self::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Transforms the success value with a fallible function. An `Err`
    /// returned by the function becomes the new failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_monads::attempt::Try;
    ///
    /// let parsed: Try<&str, String> = Try::success("12");
    /// let number = parsed.try_map(|text| text.parse::<i32>().map_err(|e| e.to_string()));
    /// assert_eq!(number, Try::success(12));
    /// ```
    pub fn try_map<U, X, F>(self, function: F) -> Try<U, E>
    where
        X: Into<E>,
        F: FnOnce(S) -> Result<U, X>,
    {
        match self {
            Self::Success(value) => Try::of(|| function(value)),
            Self::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Transforms the failure cause; a success is returned unchanged.
    #[inline]
    pub fn map_error<E2, F>(self, function: F) -> Try<S, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => Try::Success(value),
            Self::Failure(cause) => Try::Failure(function(cause)),
        }
    }

    /// Chains a computation returning another `Try` on the success value.
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Try<U, E>
    where
        F: FnOnce(S) -> Try<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Like [`flat_map`](Self::flat_map), for functions whose result is
    /// nullable.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::NullMappingResult`] if the function returns
    /// `None` instead of a `Try`.
    pub fn flat_map_nullable<U, F>(self, function: F) -> Result<Try<U, E>, ContainerError>
    where
        F: FnOnce(S) -> Option<Try<U, E>>,
    {
        match self {
            Self::Success(value) => function(value).ok_or(ContainerError::NullMappingResult),
            Self::Failure(cause) => Ok(Try::Failure(cause)),
        }
    }

    /// Chains a computation returning another `Try` on the failure cause.
    #[inline]
    pub fn flat_map_error<E2, F>(self, function: F) -> Try<S, E2>
    where
        F: FnOnce(E) -> Try<S, E2>,
    {
        match self {
            Self::Success(value) => Try::Success(value),
            Self::Failure(cause) => function(cause),
        }
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Turns a success whose value does not match the predicate into a
    /// failure caused by [`ContainerError::PredicateNotMatching`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_monads::attempt::Try;
    /// use fluent_monads::error::ContainerError;
    ///
    /// let odd: Try<i32, ContainerError> = Try::success(3).filter(|n| n % 2 == 0);
    /// assert_eq!(odd, Try::error(ContainerError::PredicateNotMatching));
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        E: From<ContainerError>,
        P: FnOnce(&S) -> bool,
    {
        self.filter_get(predicate, || ContainerError::PredicateNotMatching.into())
    }

    /// Like [`filter`](Self::filter) with a supplied cause.
    #[inline]
    pub fn filter_get<P, C>(self, predicate: P, cause_supplier: C) -> Self
    where
        P: FnOnce(&S) -> bool,
        C: FnOnce() -> E,
    {
        self.filter_map(predicate, |_| cause_supplier())
    }

    /// Like [`filter`](Self::filter) with a cause derived from the rejected
    /// success value.
    pub fn filter_map<P, C>(self, predicate: P, value_to_cause: C) -> Self
    where
        P: FnOnce(&S) -> bool,
        C: FnOnce(S) -> E,
    {
        match self {
            Self::Success(value) if predicate(&value) => Self::Success(value),
            Self::Success(value) => Self::Failure(value_to_cause(value)),
            Self::Failure(cause) => Self::Failure(cause),
        }
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// Replaces a failure with `Success(value)`.
    #[inline]
    pub fn recover(self, value: S) -> Self {
        self.recover_map(|_| value)
    }

    /// Replaces a failure with `Success(supplier())`. The supplier only runs
    /// on a failure.
    #[inline]
    pub fn recover_get<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> S,
    {
        self.recover_map(|_| supplier())
    }

    /// Replaces a failure with a success computed from its cause.
    #[inline]
    pub fn recover_map<F>(self, function: F) -> Self
    where
        F: FnOnce(E) -> S,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(cause) => Self::Success(function(cause)),
        }
    }

    /// Like [`recover_map`](Self::recover_map) with a fallible function. An
    /// `Err` returned by the function becomes the new failure.
    pub fn try_recover_map<X, F>(self, function: F) -> Self
    where
        X: Into<E>,
        F: FnOnce(E) -> Result<S, X>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(cause) => Self::of(|| function(cause)),
        }
    }

    /// Replaces a failure with an alternate `Try`.
    #[inline]
    pub fn recover_flat(self, other: Self) -> Self {
        self.recover_flat_map(|_| other)
    }

    /// Replaces a failure with the `Try` produced by the supplier.
    #[inline]
    pub fn recover_flat_get<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        self.recover_flat_map(|_| supplier())
    }

    /// Replaces a failure with a `Try` computed from its cause.
    #[inline]
    pub fn recover_flat_map<F>(self, function: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        self.flat_map_error(function)
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs an action on the success value and returns the `Try` unchanged.
    #[inline]
    pub fn on_success<A>(self, action: A) -> Self
    where
        A: FnOnce(&S),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Runs an action on the failure cause and returns the `Try` unchanged.
    #[inline]
    pub fn on_error<A>(self, action: A) -> Self
    where
        A: FnOnce(&E),
    {
        if let Self::Failure(cause) = &self {
            action(cause);
        }
        self
    }

    /// Runs a fallible action on the success value. If the action returns
    /// `Err`, the `Try` becomes a failure with that cause.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_monads::attempt::Try;
    ///
    /// let audited: Try<i32, String> = Try::success(-1).try_on_success(|n| {
    ///     if *n < 0 { Err("negative".to_string()) } else { Ok(()) }
    /// });
    /// assert_eq!(audited, Try::error("negative".to_string()));
    /// ```
    pub fn try_on_success<X, A>(self, action: A) -> Self
    where
        X: Into<E>,
        A: FnOnce(&S) -> Result<(), X>,
    {
        match self {
            Self::Success(value) => match action(&value) {
                Ok(()) => Self::Success(value),
                Err(cause) => {
                    tracing::trace!("success action failed; converting into a failure");
                    Self::Failure(cause.into())
                }
            },
            Self::Failure(cause) => Self::Failure(cause),
        }
    }

    /// Runs a fallible action on the failure cause. If the action returns
    /// `Err`, that error replaces the cause.
    pub fn try_on_error<X, A>(self, action: A) -> Self
    where
        X: Into<E>,
        A: FnOnce(&E) -> Result<(), X>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(cause) => match action(&cause) {
                Ok(()) => Self::Failure(cause),
                Err(replacement) => {
                    tracing::trace!("error action failed; replacing the cause");
                    Self::Failure(replacement.into())
                }
            },
        }
    }

    // =========================================================================
    // Alternatives and Elimination
    // =========================================================================

    /// Promotes the failure cause into the success slot.
    ///
    /// A success becomes a failure caused by
    /// [`ContainerError::ErrorNotPresent`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_monads::attempt::Try;
    /// use fluent_monads::error::ContainerError;
    ///
    /// let failure: Try<i32, String> = Try::error("boom".to_string());
    /// assert_eq!(failure.switch_with_error(), Try::success("boom".to_string()));
    ///
    /// let success: Try<i32, String> = Try::success(1);
    /// assert_eq!(success.switch_with_error(), Try::error(ContainerError::ErrorNotPresent));
    /// ```
    #[inline]
    pub fn switch_with_error(self) -> Try<E, ContainerError> {
        match self {
            Self::Success(_) => Try::Failure(ContainerError::ErrorNotPresent),
            Self::Failure(cause) => Try::Success(cause),
        }
    }

    /// Substitutes `other` when this is a failure.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        self.or_else(|| other)
    }

    /// Substitutes the supplier's `Try` when this is a failure. The supplier
    /// only runs on a failure.
    #[inline]
    pub fn or_else<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => supplier(),
        }
    }

    /// Eliminates the `Try` by applying one of two functions.
    #[inline]
    pub fn fold<T, F, G>(self, on_success: F, on_failure: G) -> T
    where
        F: FnOnce(S) -> T,
        G: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(cause) => on_failure(cause),
        }
    }

    // =========================================================================
    // Iteration and Conversion
    // =========================================================================

    /// Returns an iterator yielding the success value, or nothing on a
    /// failure.
    #[inline]
    pub fn iter(&self) -> Single<'_, S> {
        Single::new(self.success_ref())
    }

    /// Converts into the standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<S, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(cause) => Err(cause),
        }
    }

    /// Returns the success value as an [`Optional`](crate::optional::Optional),
    /// dropping any failure cause.
    #[cfg(feature = "optional")]
    #[inline]
    pub fn success_optional(self) -> crate::optional::Optional<S> {
        self.into_iter().collect()
    }

    /// Returns the failure cause as an [`Optional`](crate::optional::Optional).
    #[cfg(feature = "optional")]
    #[inline]
    pub fn error_optional(self) -> crate::optional::Optional<E> {
        match self {
            Self::Success(_) => crate::optional::Optional::Empty,
            Self::Failure(cause) => crate::optional::Optional::Full(cause),
        }
    }
}

impl<E> Try<(), E> {
    /// Runs a fallible action with no result value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_monads::attempt::Try;
    ///
    /// let done: Try<(), String> = Try::run(|| Ok::<(), String>(()));
    /// assert_eq!(done, Try::success(()));
    /// ```
    #[inline]
    pub fn run<X, F>(action: F) -> Self
    where
        X: Into<E>,
        F: FnOnce() -> Result<(), X>,
    {
        Self::of(action)
    }
}

// =============================================================================
// Cause-Kind Scoped Operations
// =============================================================================

impl<S, E: CauseChain> Try<S, E> {
    /// Returns `true` if this is a failure whose cause is a `K`, or wraps a
    /// `K` somewhere in its source chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_monads::attempt::Try;
    /// use std::num::ParseIntError;
    ///
    /// let failure: Try<i32> = Try::of(|| "x".parse::<i32>());
    /// assert!(failure.is_error_type_of::<ParseIntError>());
    /// assert!(!failure.is_error_type_of::<std::fmt::Error>());
    /// ```
    #[inline]
    pub fn is_error_type_of<K>(&self) -> bool
    where
        K: StdError + 'static,
    {
        self.error_ref().is_some_and(|cause| cause.has_kind::<K>())
    }

    /// Recovers with `value` only if the cause is of kind `K`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_monads::attempt::Try;
    /// use std::num::ParseIntError;
    ///
    /// let defaulted: Try<i32> = Try::of(|| "x".parse::<i32>()).recover_kind::<ParseIntError>(0);
    /// assert_eq!(defaulted.get_success().ok(), Some(0));
    ///
    /// let untouched: Try<i32> = Try::of(|| "x".parse::<i32>()).recover_kind::<std::fmt::Error>(0);
    /// assert!(untouched.is_error());
    /// ```
    #[inline]
    pub fn recover_kind<K>(self, value: S) -> Self
    where
        K: StdError + 'static,
    {
        self.recover_map_kind::<K, _>(|_| value)
    }

    /// Recovers with the supplier's value only if the cause is of kind `K`.
    #[inline]
    pub fn recover_get_kind<K, F>(self, supplier: F) -> Self
    where
        K: StdError + 'static,
        F: FnOnce() -> S,
    {
        self.recover_map_kind::<K, _>(|_| supplier())
    }

    /// Recovers with a value computed from the cause only if the cause is of
    /// kind `K`.
    #[inline]
    pub fn recover_map_kind<K, F>(self, function: F) -> Self
    where
        K: StdError + 'static,
        F: FnOnce(E) -> S,
    {
        self.recover_flat_map_kind::<K, _>(|cause| Self::Success(function(cause)))
    }

    /// Replaces the failure with `other` only if the cause is of kind `K`.
    #[inline]
    pub fn recover_flat_kind<K>(self, other: Self) -> Self
    where
        K: StdError + 'static,
    {
        self.recover_flat_map_kind::<K, _>(|_| other)
    }

    /// Replaces the failure with a `Try` computed from the cause only if the
    /// cause is of kind `K`. Non-matching failures pass through unchanged.
    pub fn recover_flat_map_kind<K, F>(self, function: F) -> Self
    where
        K: StdError + 'static,
        F: FnOnce(E) -> Self,
    {
        match self {
            Self::Failure(cause) if cause.has_kind::<K>() => function(cause),
            Self::Failure(cause) => {
                tracing::trace!(
                    kind = std::any::type_name::<K>(),
                    "cause kind did not match; failure passes through"
                );
                Self::Failure(cause)
            }
            Self::Success(value) => Self::Success(value),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<S: fmt::Debug, E: fmt::Debug> fmt::Debug for Try<S, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(cause) => formatter.debug_tuple("Failure").field(cause).finish(),
        }
    }
}

impl<S, E> From<Result<S, E>> for Try<S, E> {
    #[inline]
    fn from(result: Result<S, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(cause) => Self::Failure(cause),
        }
    }
}

impl<S, E> From<Try<S, E>> for Result<S, E> {
    #[inline]
    fn from(attempt: Try<S, E>) -> Self {
        attempt.into_result()
    }
}

impl<S, E> IntoIterator for Try<S, E> {
    type Item = S;
    type IntoIter = IntoSingle<S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoSingle::new(self.into_result().ok())
    }
}

impl<'a, S, E> IntoIterator for &'a Try<S, E> {
    type Item = &'a S;
    type IntoIter = Single<'a, S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(Try<i32>: Send, Sync);
static_assertions::assert_impl_all!(Try<String, ContainerError>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_error_nullable_requires_cause() {
        let missing: Result<Try<i32, String>, ContainerError> = Try::error_nullable(None);
        assert_eq!(missing, Err(ContainerError::NullCause));

        let present: Result<Try<i32, String>, ContainerError> =
            Try::error_nullable(Some("cause".to_string()));
        assert_eq!(present, Ok(Try::error("cause".to_string())));
    }

    #[rstest]
    fn test_get_success_on_failure_is_wrong_variant() {
        let failure: Try<i32, String> = Try::error("e".to_string());
        assert_eq!(
            failure.get_success(),
            Err(ContainerError::WrongVariant {
                requested: "success",
                actual: "error"
            })
        );
    }

    #[rstest]
    fn test_flat_map_nullable_absent() {
        let success: Try<i32, String> = Try::success(1);
        let result = success.flat_map_nullable(|_| None::<Try<i32, String>>);
        assert_eq!(result, Err(ContainerError::NullMappingResult));
    }

    #[rstest]
    fn test_recover_get_supplier_not_called_on_success() {
        let calls = Cell::new(0);
        let success: Try<i32, String> = Try::success(1);
        let result = success.recover_get(|| {
            calls.set(calls.get() + 1);
            2
        });
        assert_eq!(result, Try::success(1));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_try_on_error_replaces_cause() {
        let failure: Try<i32, String> = Try::error("first".to_string());
        let result = failure.try_on_error(|_| Err("second".to_string()));
        assert_eq!(result, Try::error("second".to_string()));
    }

    #[rstest]
    fn test_fold_both_sides() {
        let success: Try<i32, String> = Try::success(2);
        let failure: Try<i32, String> = Try::error("abc".to_string());
        assert_eq!(success.fold(|n| n * 10, |e| e.len() as i32), 20);
        assert_eq!(failure.fold(|n| n * 10, |e| e.len() as i32), 3);
    }

    #[rstest]
    fn test_debug_format() {
        let success: Try<i32, String> = Try::success(1);
        assert_eq!(format!("{success:?}"), "Success(1)");
    }
}
