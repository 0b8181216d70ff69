//! Predicate combinators.
//!
//! A predicate is any `Fn(&T) -> bool`. The functions in this module build
//! new predicates out of existing ones; each returns an `impl Fn(&T) -> bool`
//! that is pure and, when its parts are, `Send + Sync`.
//!
//! - [`not`], [`and`], [`or`], [`xor`], [`nand`], [`nor`]: boolean algebra
//! - [`each_element`], [`neither_element`]: lift to (possibly absent) sequences
//! - [`is_in`], [`is_not_in`]: membership by equality
//! - [`compose`]: test a projected field
//!
//! The [`and!`](crate::and) and [`or!`](crate::or) macros are the variadic
//! forms for closures of different types.
//!
//! # Vacuous cases
//!
//! An empty [`and`] is always `true`, and so is an empty [`or`]. Likewise
//! [`each_element`] accepts an absent sequence while [`neither_element`]
//! rejects it. Both asymmetries are long-standing behaviour kept as is.
//!
//! # Examples
//!
//! ```rust
//! use fluent_monads::predicate::{and, boxed};
//!
//! let in_range = and([boxed(|x: &i32| *x > 3), boxed(|x: &i32| *x <= 5)]);
//! assert!(in_range(&5));
//! assert!(!in_range(&6));
//! ```

mod ext;
mod macros;

pub use ext::PredicateExt;

/// A type-erased, thread-safe predicate.
///
/// Lets predicates built from different closures share one collection, as
/// needed by [`and`] and [`or`].
pub type BoxedPredicate<'a, T> = Box<dyn Fn(&T) -> bool + Send + Sync + 'a>;

/// Boxes a predicate into a [`BoxedPredicate`].
#[inline]
pub fn boxed<'a, T, P>(predicate: P) -> BoxedPredicate<'a, T>
where
    T: ?Sized,
    P: Fn(&T) -> bool + Send + Sync + 'a,
{
    Box::new(predicate)
}

/// A predicate that holds for every input.
#[inline]
pub fn always<T: ?Sized>() -> impl Fn(&T) -> bool + Copy {
    |_: &T| true
}

/// A predicate that holds for no input.
#[inline]
pub fn never<T: ?Sized>() -> impl Fn(&T) -> bool + Copy {
    |_: &T| false
}

/// Negates a predicate.
///
/// # Examples
///
/// ```rust
/// use fluent_monads::predicate::not;
///
/// let is_odd = not(|x: &i32| x % 2 == 0);
/// assert!(is_odd(&3));
/// assert!(!is_odd(&4));
/// ```
#[inline]
pub fn not<T, P>(predicate: P) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
{
    move |value: &T| !predicate(value)
}

/// Conjunction of any number of predicates, short-circuiting left to right.
///
/// An empty list yields a predicate that is always `true`.
#[inline]
pub fn and<T, P, I>(predicates: I) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
    I: IntoIterator<Item = P>,
{
    let predicates: Vec<P> = predicates.into_iter().collect();
    move |value: &T| predicates.iter().all(|predicate| predicate(value))
}

/// Disjunction of any number of predicates, short-circuiting left to right.
///
/// An empty list yields a predicate that is always `true`.
///
/// # Examples
///
/// ```rust
/// use fluent_monads::predicate::{or, BoxedPredicate};
///
/// let none: Vec<BoxedPredicate<'_, i32>> = Vec::new();
/// assert!(or(none)(&0));
/// ```
#[inline]
pub fn or<T, P, I>(predicates: I) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
    I: IntoIterator<Item = P>,
{
    let predicates: Vec<P> = predicates.into_iter().collect();
    move |value: &T| predicates.is_empty() || predicates.iter().any(|predicate| predicate(value))
}

/// Holds when exactly one of the two predicates holds.
#[inline]
pub fn xor<T, P, Q>(first: P, second: Q) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    move |value: &T| first(value) != second(value)
}

/// Holds unless both predicates hold.
#[inline]
pub fn nand<T, P, Q>(first: P, second: Q) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    move |value: &T| !(first(value) && second(value))
}

/// Holds when neither predicate holds.
#[inline]
pub fn nor<T, P, Q>(first: P, second: Q) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    move |value: &T| !(first(value) || second(value))
}

/// Lifts an element predicate to a possibly absent sequence: holds when
/// every element matches. An absent sequence is accepted.
///
/// # Examples
///
/// ```rust
/// use fluent_monads::predicate::each_element;
///
/// let all_positive = each_element::<i32, Vec<i32>, _>(|x| *x > 0);
/// assert!(all_positive(&Some(vec![1, 2, 3])));
/// assert!(!all_positive(&Some(vec![1, -2])));
/// assert!(all_positive(&None));
/// ```
#[inline]
pub fn each_element<T, C, P>(predicate: P) -> impl Fn(&Option<C>) -> bool
where
    for<'a> &'a C: IntoIterator<Item = &'a T>,
    P: Fn(&T) -> bool,
{
    move |sequence: &Option<C>| {
        sequence
            .as_ref()
            .is_none_or(|elements| elements.into_iter().all(|element| predicate(element)))
    }
}

/// Lifts an element predicate to a possibly absent sequence: holds when no
/// element matches. An absent sequence is rejected.
///
/// # Examples
///
/// ```rust
/// use fluent_monads::predicate::neither_element;
///
/// let no_blank = neither_element::<&str, Vec<&str>, _>(|s| s.is_empty());
/// assert!(no_blank(&Some(vec!["a", "b"])));
/// assert!(!no_blank(&Some(vec!["a", ""])));
/// assert!(!no_blank(&None));
/// ```
#[inline]
pub fn neither_element<T, C, P>(predicate: P) -> impl Fn(&Option<C>) -> bool
where
    for<'a> &'a C: IntoIterator<Item = &'a T>,
    P: Fn(&T) -> bool,
{
    move |sequence: &Option<C>| {
        sequence
            .as_ref()
            .is_some_and(|elements| !elements.into_iter().any(|element| predicate(element)))
    }
}

/// Holds when the input equals one of `values`. Empty `values` never match.
///
/// # Examples
///
/// ```rust
/// use fluent_monads::predicate::is_in;
///
/// let primary = is_in(["red", "green", "blue"]);
/// assert!(primary(&"green"));
/// assert!(!primary(&"pink"));
/// ```
#[inline]
pub fn is_in<T, I>(values: I) -> impl Fn(&T) -> bool
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    let values: Vec<T> = values.into_iter().collect();
    move |value: &T| values.contains(value)
}

/// Holds when the input equals none of `values`. Empty `values` always match.
#[inline]
pub fn is_not_in<T, I>(values: I) -> impl Fn(&T) -> bool
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    not(is_in(values))
}

/// Projects a field out of the input and tests it.
///
/// # Examples
///
/// ```rust
/// use fluent_monads::predicate::compose;
///
/// struct User {
///     age: u32,
/// }
///
/// let adult = compose(|user: &User| user.age, |age: &u32| *age >= 18);
/// assert!(adult(&User { age: 30 }));
/// assert!(!adult(&User { age: 12 }));
/// ```
#[inline]
pub fn compose<T, U, G, P>(field_getter: G, field_predicate: P) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    G: Fn(&T) -> U,
    P: Fn(&U) -> bool,
{
    move |value: &T| field_predicate(&field_getter(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(false, false, false)]
    #[case(false, true, true)]
    #[case(true, false, true)]
    #[case(true, true, false)]
    fn test_xor_truth_table(#[case] left: bool, #[case] right: bool, #[case] expected: bool) {
        let combined = xor(move |_: &()| left, move |_: &()| right);
        assert_eq!(combined(&()), expected);
    }

    #[rstest]
    #[case(false, false, true)]
    #[case(false, true, true)]
    #[case(true, false, true)]
    #[case(true, true, false)]
    fn test_nand_truth_table(#[case] left: bool, #[case] right: bool, #[case] expected: bool) {
        let combined = nand(move |_: &()| left, move |_: &()| right);
        assert_eq!(combined(&()), expected);
    }

    #[rstest]
    #[case(false, false, true)]
    #[case(false, true, false)]
    #[case(true, false, false)]
    #[case(true, true, false)]
    fn test_nor_truth_table(#[case] left: bool, #[case] right: bool, #[case] expected: bool) {
        let combined = nor(move |_: &()| left, move |_: &()| right);
        assert_eq!(combined(&()), expected);
    }

    #[rstest]
    fn test_always_and_never_on_unsized() {
        assert!(always::<str>()("anything"));
        assert!(!never::<str>()("anything"));
    }

    #[rstest]
    fn test_not_on_str() {
        let non_empty = not(|s: &str| s.is_empty());
        assert!(non_empty("x"));
        assert!(!non_empty(""));
    }
}
