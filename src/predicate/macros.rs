//! Variadic `and!` / `or!` macros.
//!
//! The function forms [`and`](super::and) and [`or`](super::or) need every
//! predicate to share one type. The macros accept closures of different
//! types and expand into a single nested closure.

/// Conjunction of predicates of any (possibly different) closure types.
///
/// Evaluation is left to right and stops at the first predicate that fails.
/// With no arguments the result is always `true`.
///
/// # Examples
///
/// ```rust
/// use fluent_monads::and;
///
/// let in_range = and!(|x: &i32| *x > 3, |x: &i32| *x <= 5);
/// assert!(in_range(&5));
/// assert!(!in_range(&6));
///
/// let anything = and!();
/// assert!(anything(&0));
/// ```
#[macro_export]
macro_rules! and {
    // No predicates: always true
    () => {
        |_: &_| true
    };

    ($predicate:expr $(,)?) => {{
        let predicate = $predicate;
        move |value: &_| predicate(value)
    }};

    // and!(p, q, ...) = p && and!(q, ...)
    ($first_predicate:expr, $($remaining_predicates:expr),+ $(,)?) => {{
        let first = $first_predicate;
        let remaining = $crate::and!($($remaining_predicates),+);
        move |value: &_| first(value) && remaining(value)
    }};
}

/// Disjunction of predicates of any (possibly different) closure types.
///
/// Evaluation is left to right and stops at the first predicate that holds.
/// With no arguments the result is always `true`, matching the function
/// form [`or`](crate::predicate::or).
///
/// # Examples
///
/// ```rust
/// use fluent_monads::or;
///
/// let extreme = or!(|x: &i32| *x < -100, |x: &i32| *x > 100);
/// assert!(extreme(&500));
/// assert!(!extreme(&0));
/// ```
#[macro_export]
macro_rules! or {
    // No predicates: always true
    () => {
        |_: &_| true
    };

    ($predicate:expr $(,)?) => {{
        let predicate = $predicate;
        move |value: &_| predicate(value)
    }};

    // or!(p, q, ...) = p || or!(q, ...)
    ($first_predicate:expr, $($remaining_predicates:expr),+ $(,)?) => {{
        let first = $first_predicate;
        let remaining = $crate::or!($($remaining_predicates),+);
        move |value: &_| first(value) || remaining(value)
    }};
}
