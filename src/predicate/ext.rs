//! Method-style predicate combinators.

/// Method-style combinators available on every `Fn(&T) -> bool`.
///
/// # Examples
///
/// ```rust
/// use fluent_monads::predicate::PredicateExt;
///
/// let positive = |x: &i32| *x > 0;
/// let even = |x: &i32| x % 2 == 0;
///
/// let positive_odd = positive.and(even.negate());
/// assert!(positive_odd(&3));
/// assert!(!positive_odd(&4));
/// assert!(!positive_odd(&-3));
/// ```
pub trait PredicateExt<T: ?Sized>: Fn(&T) -> bool + Sized {
    /// Holds when both predicates hold; `other` is skipped if `self` fails.
    #[inline]
    fn and<Q>(self, other: Q) -> impl Fn(&T) -> bool
    where
        Q: Fn(&T) -> bool,
    {
        move |value: &T| self(value) && other(value)
    }

    /// Holds when either predicate holds; `other` is skipped if `self` holds.
    #[inline]
    fn or<Q>(self, other: Q) -> impl Fn(&T) -> bool
    where
        Q: Fn(&T) -> bool,
    {
        move |value: &T| self(value) || other(value)
    }

    /// Holds when exactly one of the predicates holds.
    #[inline]
    fn xor<Q>(self, other: Q) -> impl Fn(&T) -> bool
    where
        Q: Fn(&T) -> bool,
    {
        super::xor(self, other)
    }

    /// Negates the predicate.
    #[inline]
    fn negate(self) -> impl Fn(&T) -> bool {
        super::not(self)
    }
}

impl<T, F> PredicateExt<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-1, false)]
    #[case(0, true)]
    #[case(7, true)]
    #[case(8, false)]
    fn test_or_and_xor_chain(#[case] input: i32, #[case] expected: bool) {
        let zero = |x: &i32| *x == 0;
        let odd = |x: &i32| x % 2 != 0;
        let positive = |x: &i32| *x > 0;
        let predicate = zero.or(odd.and(positive));
        assert_eq!(predicate(&input), expected);
    }

    #[rstest]
    fn test_xor_method() {
        let small = |x: &u8| *x < 10;
        let even = |x: &u8| x % 2 == 0;
        let exactly_one = small.xor(even);
        assert!(exactly_one(&3));
        assert!(exactly_one(&12));
        assert!(!exactly_one(&4));
        assert!(!exactly_one(&13));
    }
}
