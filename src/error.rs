//! Error taxonomy for the containers.
//!
//! [`ContainerError`] lists the contract violations the containers report:
//! reading the wrong side of a container, a nullable mapping result that was
//! absent, and so on. These are programming errors and are returned to the
//! immediate caller; they are never captured into a [`Try`](crate::attempt::Try).
//!
//! Two of the kinds double as default causes placed *inside* a failure:
//! [`ContainerError::PredicateNotMatching`] (used by `Try::filter`) and
//! [`ContainerError::ErrorNotPresent`] (used by `Try::switch_with_error`).
//!
//! [`Cause`] is the default failure type of `Try`, and [`CauseChain`] is the
//! cause-kind matcher behind the kind-scoped recovery combinators.
//! [`has_kind_in_chain`] is the same matcher for concrete error types.

use std::error::Error as StdError;

/// The default failure cause carried by a `Try`.
///
/// Any `std::error::Error + Send + Sync + 'static` converts into it, so
/// fallible code using `?` feeds it directly.
pub type Cause = anyhow::Error;

/// Contract violations reported by the containers.
///
/// # Examples
///
/// ```rust
/// use fluent_monads::error::ContainerError;
/// use fluent_monads::optional::Optional;
///
/// let empty: Optional<i32> = Optional::empty();
/// assert_eq!(empty.get(), Err(ContainerError::ValueAbsent));
/// assert_eq!(
///     ContainerError::ValueAbsent.to_string(),
///     "no value present in an empty Optional"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ContainerError {
    /// A value was read from an empty `Optional`.
    #[error("no value present in an empty Optional")]
    ValueAbsent,
    /// One side of a `Try` was read while it holds the other side.
    #[error("requested the {requested} of a Try holding a {actual}")]
    WrongVariant {
        /// The side the caller asked for.
        requested: &'static str,
        /// The variant the `Try` actually holds.
        actual: &'static str,
    },
    /// A flat-mapping function returned an absent result instead of a container.
    #[error("flat-mapping function returned an absent result")]
    NullMappingResult,
    /// A failure cause was required but none was supplied.
    #[error("a failure cause was required but none was supplied")]
    NullCause,
    /// Default cause of a filter whose predicate rejected the success value.
    #[error("success value did not match the predicate")]
    PredicateNotMatching,
    /// The failure cause of a successful `Try` was requested.
    #[error("no error present in a successful Try")]
    ErrorNotPresent,
}

/// Cause-kind matching over an error and its `source()` chain.
///
/// A cause is "of kind `K`" when the cause itself is a `K`, or when any error
/// in its source chain is a `K`. The second rule is how a wrapping error
/// (for example an enum variant carrying a narrower error) stands in for the
/// subtype relation other languages express through inheritance.
///
/// Implemented for every type exposing itself as a thread-safe
/// `dyn Error`, which includes [`Cause`] and
/// `Box<dyn Error + Send + Sync>`.
///
/// # Examples
///
/// ```rust
/// use fluent_monads::error::{Cause, CauseChain, ContainerError};
///
/// let cause = Cause::from(ContainerError::NullCause);
/// assert!(cause.has_kind::<ContainerError>());
/// assert!(!cause.has_kind::<std::fmt::Error>());
/// ```
pub trait CauseChain {
    /// Returns `true` if this cause, or any error it wraps, is a `K`.
    fn has_kind<K>(&self) -> bool
    where
        K: StdError + 'static;
}

impl<E> CauseChain for E
where
    E: AsRef<dyn StdError + Send + Sync + 'static>,
{
    fn has_kind<K>(&self) -> bool
    where
        K: StdError + 'static,
    {
        let root: &(dyn StdError + Send + Sync + 'static) = self.as_ref();
        has_kind_in_chain::<K>(root)
    }
}

/// Returns `true` if `error`, or any error in its `source()` chain, is a `K`.
///
/// This is the matcher behind [`CauseChain`], usable on any concrete error
/// type. A `Try` whose failure type is a plain error enum reaches it through
/// `error_ref`.
///
/// # Examples
///
/// ```rust
/// use fluent_monads::attempt::Try;
/// use fluent_monads::error::has_kind_in_chain;
/// use std::num::ParseIntError;
///
/// let failure: Try<i32, ParseIntError> = Try::of(|| "x".parse::<i32>());
/// let recovered = failure.recover_flat_map(|cause| {
///     if has_kind_in_chain::<ParseIntError>(&cause) {
///         Try::success(0)
///     } else {
///         Try::error(cause)
///     }
/// });
/// assert_eq!(recovered, Try::success(0));
/// ```
pub fn has_kind_in_chain<K>(error: &(dyn StdError + 'static)) -> bool
where
    K: StdError + 'static,
{
    let mut current = Some(error);
    while let Some(error) = current {
        if error.is::<K>() {
            return true;
        }
        current = error.source();
    }
    false
}
