//! # fluent-monads
//!
//! Extensible monadic containers and predicate combinators.
//!
//! ## Overview
//!
//! - **Optional**: [`Optional<V>`](optional::Optional), zero or one value,
//!   with mapping, filtering, alternatives and pairwise merging
//! - **Try**: [`Try<S, E>`](attempt::Try), success value or failure cause,
//!   with mapping, filtering, cause-kind scoped recovery and side-effect hooks
//! - **Predicates**: combinators over `Fn(&T) -> bool`
//!
//! Both containers are extensible. A user-defined wrapper implements
//! [`FluentOptional`](optional::FluentOptional) or
//! [`FluentTry`](attempt::FluentTry) and inherits every combinator, each
//! returning the wrapper's own type, so new chained operations can be added
//! without losing the type along the chain.
//!
//! ## Feature Flags
//!
//! - `optional`: the `Optional` container
//! - `attempt`: the `Try` container
//! - `predicate`: predicate combinators and the `and!` / `or!` macros
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fluent_monads::prelude::*;
//!
//! let in_range = and!(|x: &i32| *x > 3, |x: &i32| *x <= 5);
//!
//! let value = Optional::of(4).filter(|x| in_range(x)).map(|x| x * 10).or_else(0);
//! assert_eq!(value, 40);
//!
//! let recovered: Try<i32> = Try::of(|| "nope".parse::<i32>()).recover_map(|_| 42);
//! assert_eq!(recovered.get_success().ok(), Some(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, their extension traits, the error types and
/// the predicate combinators.
///
/// # Usage
///
/// ```rust
/// use fluent_monads::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Cause, CauseChain, ContainerError};

    #[cfg(feature = "optional")]
    pub use crate::optional::{FluentOptional, Optional};

    #[cfg(feature = "attempt")]
    pub use crate::attempt::{FluentTry, Try};

    #[cfg(feature = "predicate")]
    pub use crate::predicate::{BoxedPredicate, PredicateExt};

    #[cfg(feature = "predicate")]
    pub use crate::{and, or};
}

pub mod error;

#[cfg(any(feature = "optional", feature = "attempt"))]
pub mod iter;

#[cfg(feature = "optional")]
pub mod optional;

#[cfg(feature = "attempt")]
pub mod attempt;

#[cfg(feature = "predicate")]
pub mod predicate;
