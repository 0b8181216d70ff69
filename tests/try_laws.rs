//! Property-based tests for Try laws.
//!
//! - **Identity Law**: `t.map(|x| x) == t`
//! - **Composition Law**: `t.map(f).map(g) == t.map(|x| g(f(x)))`
//! - **Left Identity**: `Try::success(v).flat_map(f) == f(v)`
//! - **Right Identity**: `t.flat_map(Try::success) == t`
//! - **Recovery**: `t.recover(v)` is always a success
//! - **Round Trip**: `Try -> Result -> Try` is the identity

#![cfg(feature = "attempt")]

use fluent_monads::attempt::Try;
use proptest::prelude::*;

fn try_strategy() -> impl Strategy<Value = Try<i32, String>> {
    prop::result::maybe_ok(any::<i32>(), any::<String>()).prop_map(Try::from)
}

proptest! {
    /// Identity Law: mapping the identity function changes nothing
    #[test]
    fn prop_identity_law(attempt in try_strategy()) {
        prop_assert_eq!(attempt.clone().map(|x| x), attempt);
    }

    /// Composition Law: mapping composed functions equals composing maps
    #[test]
    fn prop_composition_law(attempt in try_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = attempt.clone().map(function1).map(function2);
        let right = attempt.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// Left Identity: flat_map on a success is the function applied to the value
    #[test]
    fn prop_flat_map_left_identity(value in any::<i32>()) {
        let function = |n: i32| -> Try<i32, String> {
            if n % 3 == 0 { Try::error(n.to_string()) } else { Try::success(n.wrapping_sub(1)) }
        };
        prop_assert_eq!(Try::success(value).flat_map(function), function(value));
    }

    /// Right Identity: flat_map with `success` changes nothing
    #[test]
    fn prop_flat_map_right_identity(attempt in try_strategy()) {
        prop_assert_eq!(attempt.clone().flat_map(Try::success), attempt);
    }

    /// Exactly one side of a Try is readable
    #[test]
    fn prop_exactly_one_side(attempt in try_strategy()) {
        prop_assert_ne!(attempt.is_success(), attempt.is_error());
        prop_assert_eq!(attempt.clone().get_success().is_ok(), attempt.is_success());
        prop_assert_eq!(attempt.clone().get_error().is_ok(), attempt.is_error());
    }

    /// Recovery always yields a success and never touches an existing one
    #[test]
    fn prop_recover_yields_success(attempt in try_strategy(), fallback in any::<i32>()) {
        let recovered = attempt.clone().recover(fallback);
        prop_assert!(recovered.is_success());
        if attempt.is_success() {
            prop_assert_eq!(recovered, attempt);
        }
    }

    /// map_error never changes a success, map never changes a failure
    #[test]
    fn prop_map_touches_one_side(attempt in try_strategy()) {
        let error_mapped: Try<i32, usize> = attempt.clone().map_error(|e| e.len());
        prop_assert_eq!(error_mapped.success_ref(), attempt.success_ref());

        let value_mapped = attempt.clone().map(|n| n.wrapping_neg());
        prop_assert_eq!(value_mapped.error_ref(), attempt.error_ref());
    }

    /// switch_with_error succeeds exactly when the original failed
    #[test]
    fn prop_switch_with_error_flips(attempt in try_strategy()) {
        prop_assert_eq!(attempt.clone().switch_with_error().is_success(), attempt.is_error());
    }

    /// Round Trip through the standard Result preserves the variant and payload
    #[test]
    fn prop_result_round_trip(attempt in try_strategy()) {
        let native: Result<i32, String> = attempt.clone().into();
        prop_assert_eq!(Try::from(native), attempt);
    }
}
