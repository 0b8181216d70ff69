#![cfg(all(feature = "optional", feature = "attempt", feature = "predicate"))]
//! Integration tests for fluent-monads.
//!
//! These tests exercise the containers and the predicate combinators
//! together through the prelude.

use fluent_monads::prelude::*;
use rstest::rstest;

#[rstest]
#[case(5, true)]
#[case(6, false)]
fn range_predicate(#[case] input: i32, #[case] expected: bool) {
    let in_range = and!(|x: &i32| *x > 3, |x: &i32| *x <= 5);
    assert_eq!(in_range(&input), expected);
}

#[rstest]
#[case(Optional::of(10), 20)]
#[case(Optional::empty(), -1)]
fn optional_pipeline(#[case] input: Optional<i32>, #[case] expected: i32) {
    let result = input.filter(|x| *x > 5).map(|x| x * 2).or_else(-1);
    assert_eq!(result, expected);
}

#[rstest]
fn try_pipeline_recovers_from_failure() {
    let attempt: Try<i32> = Try::of(|| Err(anyhow::anyhow!("x")));
    assert_eq!(attempt.recover_map(|_| 42).get_success().ok(), Some(42));
}

#[rstest]
fn predicate_drives_optional_and_try() {
    let valid_port = and!(|port: &u16| *port >= 1024, |port: &u16| *port != 8081);

    let configured =
        Optional::of_nullable("8080".parse::<u16>().ok()).filter(|port| valid_port(port));
    assert_eq!(configured, Optional::of(8080));

    let parsed: Try<u16> = Try::of(|| "80".parse::<u16>());
    let parsed = parsed
        .filter(|port| valid_port(port))
        .recover_kind::<ContainerError>(1024);
    assert_eq!(parsed.get_success().ok(), Some(1024));
}

#[rstest]
fn optional_and_try_convert_into_each_other() {
    let missing: Optional<i32> = Optional::empty();
    let attempt: Try<i32, ContainerError> = missing.to_try(|| ContainerError::ValueAbsent);
    assert_eq!(attempt.clone().get_error(), Ok(ContainerError::ValueAbsent));
    assert_eq!(attempt.recover(3).success_optional(), Optional::of(3));
}
