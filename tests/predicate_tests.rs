//! Tests for the predicate combinators and the `and!` / `or!` macros.

#![cfg(feature = "predicate")]

use fluent_monads::predicate::{
    and, boxed, compose, each_element, is_in, is_not_in, nand, neither_element, nor, not, or,
    xor, BoxedPredicate, PredicateExt,
};
use fluent_monads::{and, or};
use rstest::rstest;
use std::cell::Cell;
use std::collections::BTreeSet;

// =============================================================================
// Test data types
// =============================================================================

#[derive(Debug, Clone)]
struct Order {
    quantity: u32,
    tags: Option<Vec<String>>,
}

fn order(quantity: u32, tags: Option<&[&str]>) -> Order {
    Order {
        quantity,
        tags: tags.map(|tags| tags.iter().map(|tag| (*tag).to_string()).collect()),
    }
}

// =============================================================================
// Boolean Algebra
// =============================================================================

#[rstest]
#[case(5, true)]
#[case(6, false)]
#[case(3, false)]
fn and_macro_range(#[case] input: i32, #[case] expected: bool) {
    let in_range = and!(|x: &i32| *x > 3, |x: &i32| *x <= 5);
    assert_eq!(in_range(&input), expected);
}

#[rstest]
fn and_of_nothing_is_true() {
    let none: Vec<BoxedPredicate<'_, i32>> = Vec::new();
    assert!(and(none)(&42));

    let empty_macro = and!();
    assert!(empty_macro(&42));
}

#[rstest]
fn or_of_nothing_is_true() {
    let none: Vec<BoxedPredicate<'_, i32>> = Vec::new();
    assert!(or(none)(&42));

    let empty_macro = or!();
    assert!(empty_macro(&42));
}

#[rstest]
#[case(-5, true)]
#[case(50, false)]
#[case(500, true)]
fn or_over_boxed_predicates(#[case] input: i32, #[case] expected: bool) {
    let extreme = or([boxed(|x: &i32| *x < 0), boxed(|x: &i32| *x > 100)]);
    assert_eq!(extreme(&input), expected);
}

#[rstest]
fn and_short_circuits_left_to_right() {
    let later_calls = Cell::new(0);
    let later = |_: &i32| {
        later_calls.set(later_calls.get() + 1);
        true
    };
    let combined = and!(|x: &i32| *x > 0, later);
    assert!(!combined(&-1));
    assert_eq!(later_calls.get(), 0);
    assert!(combined(&1));
    assert_eq!(later_calls.get(), 1);
}

#[rstest]
fn or_function_short_circuits() {
    let calls = Cell::new(0);
    let counting = |_: &i32| {
        calls.set(calls.get() + 1);
        false
    };
    let always_true = |_: &i32| true;
    let first: &dyn Fn(&i32) -> bool = &always_true;
    let second: &dyn Fn(&i32) -> bool = &counting;
    let combined = or([first, second]);
    assert!(combined(&0));
    assert_eq!(calls.get(), 0);
}

#[rstest]
#[case(false, false)]
#[case(false, true)]
#[case(true, false)]
#[case(true, true)]
fn binary_combinators_agree_with_bool_operators(#[case] left: bool, #[case] right: bool) {
    let first = move |_: &()| left;
    let second = move |_: &()| right;
    assert_eq!(xor(first, second)(&()), left ^ right);
    assert_eq!(nand(first, second)(&()), !(left && right));
    assert_eq!(nor(first, second)(&()), !(left || right));
    assert_eq!(not(first)(&()), !left);
}

#[rstest]
fn predicate_ext_chain() {
    let positive = |x: &i32| *x > 0;
    let even = |x: &i32| x % 2 == 0;
    let small = |x: &i32| *x < 10;
    let predicate = positive.and(even).or(small.negate());
    assert!(predicate(&4));
    assert!(predicate(&20));
    assert!(!predicate(&3));
    assert!(!predicate(&-2));
}

// =============================================================================
// Sequences
// =============================================================================

#[rstest]
#[case(Some(vec![2, 4, 6]), true)]
#[case(Some(vec![2, 3]), false)]
#[case(Some(Vec::new()), true)]
#[case(None, true)]
fn each_element_cases(#[case] sequence: Option<Vec<i32>>, #[case] expected: bool) {
    let all_even = each_element::<i32, Vec<i32>, _>(|x| x % 2 == 0);
    assert_eq!(all_even(&sequence), expected);
}

#[rstest]
#[case(Some(vec![1, 3]), true)]
#[case(Some(vec![1, 2]), false)]
#[case(Some(Vec::new()), true)]
#[case(None, false)]
fn neither_element_cases(#[case] sequence: Option<Vec<i32>>, #[case] expected: bool) {
    let none_even = neither_element::<i32, Vec<i32>, _>(|x| x % 2 == 0);
    assert_eq!(none_even(&sequence), expected);
}

#[rstest]
fn each_element_over_set() {
    let short_words = each_element::<&str, BTreeSet<&str>, _>(|word| word.len() <= 3);
    assert!(short_words(&Some(BTreeSet::from(["a", "bee", "cat"]))));
    assert!(!short_words(&Some(BTreeSet::from(["a", "horse"]))));
}

// =============================================================================
// Membership
// =============================================================================

#[rstest]
#[case(1, true)]
#[case(4, false)]
fn is_in_cases(#[case] input: i32, #[case] expected: bool) {
    let member = is_in(vec![1, 2, 3]);
    assert_eq!(member(&input), expected);
    assert_eq!(is_not_in(vec![1, 2, 3])(&input), !expected);
}

#[rstest]
fn is_in_empty_never_matches() {
    let member = is_in(Vec::<i32>::new());
    let non_member = is_not_in(Vec::<i32>::new());
    assert!(!member(&0));
    assert!(non_member(&0));
}

// =============================================================================
// Composition
// =============================================================================

#[rstest]
fn compose_tests_projected_field() {
    let bulk = compose(|order: &Order| order.quantity, |quantity: &u32| *quantity >= 100);
    assert!(bulk(&order(150, None)));
    assert!(!bulk(&order(10, None)));
}

#[rstest]
fn compose_with_sequence_predicate() {
    let untagged_or_clean = compose(
        |order: &Order| order.tags.clone(),
        each_element::<String, Vec<String>, _>(|tag| !tag.starts_with("hold")),
    );
    assert!(untagged_or_clean(&order(1, None)));
    assert!(untagged_or_clean(&order(1, Some(&["gift", "express"]))));
    assert!(!untagged_or_clean(&order(1, Some(&["gift", "hold-payment"]))));
}

#[rstest]
fn combinators_nest() {
    let rule = and!(
        compose(|order: &Order| order.quantity, |quantity: &u32| *quantity > 0),
        not(compose(
            |order: &Order| order.tags.clone(),
            neither_element::<String, Vec<String>, _>(|tag| tag == "vip"),
        )),
    );
    assert!(rule(&order(2, Some(&["vip"]))));
    assert!(!rule(&order(2, Some(&["regular"]))));
    assert!(rule(&order(2, None)));
    assert!(!rule(&order(0, Some(&["vip"]))));
}
