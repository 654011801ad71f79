//! Property-based tests for the checked operations.
//!
//! Each property compares against the true mathematical result computed in
//! `i128`, which cannot overflow for 64-bit operands.

use intguard_core::{ArithOp, OverflowCause, checked_add, checked_mul};
use proptest::prelude::*;

fn exact_sum(x: i64, y: i64) -> i128 {
    i128::from(x) + i128::from(y)
}

fn exact_product(x: i64, y: i64) -> i128 {
    i128::from(x) * i128::from(y)
}

fn representable(v: i128) -> bool {
    (i128::from(i64::MIN)..=i128::from(i64::MAX)).contains(&v)
}

/// Operands that skip every multiplication fast path and the `MIN` guard.
fn ordinary() -> impl Strategy<Value = i64> {
    any::<i64>().prop_filter("not 0, 1 or MIN", |v| *v != 0 && *v != 1 && *v != i64::MIN)
}

proptest! {
    #[test]
    fn prop_add_in_range_is_exact(x in any::<i64>(), y in any::<i64>()) {
        let sum = exact_sum(x, y);
        prop_assume!(representable(sum));

        prop_assert_eq!(checked_add(x, y).map(i128::from), Ok(sum));
    }

    #[test]
    fn prop_add_past_max_is_reported(x in 1i64.., y in 1i64..) {
        prop_assume!(exact_sum(x, y) > i128::from(i64::MAX));

        let err = checked_add(x, y).unwrap_err();
        prop_assert_eq!(err.operation(), ArithOp::Add);
        prop_assert_eq!(err.cause(), OverflowCause::Sum);
    }

    #[test]
    fn prop_add_never_returns_sum_above_max(x in any::<i64>(), y in any::<i64>()) {
        // Whatever comes back, it is never a wrapped positive overflow.
        if let Ok(v) = checked_add(x, y) {
            prop_assert!(exact_sum(x, y) <= i128::from(i64::MAX));
            if representable(exact_sum(x, y)) {
                prop_assert_eq!(i128::from(v), exact_sum(x, y));
            }
        }
    }

    #[test]
    fn prop_mul_by_zero_is_zero(x in any::<i64>()) {
        prop_assert_eq!(checked_mul(x, 0), Ok(0));
        prop_assert_eq!(checked_mul(0, x), Ok(0));
    }

    #[test]
    fn prop_mul_by_one_is_identity(x in any::<i64>()) {
        prop_assert_eq!(checked_mul(x, 1), Ok(x));
        prop_assert_eq!(checked_mul(1, x), Ok(x));
    }

    #[test]
    fn prop_mul_min_operand_is_reported(y in ordinary()) {
        let err = checked_mul(i64::MIN, y).unwrap_err();
        prop_assert_eq!(err.cause(), OverflowCause::MinOperand);

        let err = checked_mul(y, i64::MIN).unwrap_err();
        prop_assert_eq!(err.cause(), OverflowCause::MinOperand);
    }

    #[test]
    fn prop_mul_matches_exact_product(x in ordinary(), y in ordinary()) {
        let product = exact_product(x, y);

        match checked_mul(x, y) {
            Ok(v) => prop_assert_eq!(i128::from(v), product),
            Err(err) => {
                prop_assert!(!representable(product), "{x} * {y} = {product} fits but was rejected");
                prop_assert_eq!(err.cause(), OverflowCause::QuotientMismatch);
            },
        }
    }

    #[test]
    fn prop_mul_small_factors_never_overflow(x in -3_000_000_000i64..3_000_000_000, y in -3_000_000_000i64..3_000_000_000) {
        let expected = exact_product(x, y);
        prop_assert_eq!(checked_mul(x, y).map(i128::from), Ok(expected));
    }
}

#[test]
fn exhaustive_i8_add() {
    for x in i8::MIN..=i8::MAX {
        for y in i8::MIN..=i8::MAX {
            let sum = i16::from(x) + i16::from(y);
            let result = checked_add(x, y);

            if sum > i16::from(i8::MAX) {
                assert!(result.is_err(), "{x} + {y} should overflow");
            } else if sum < i16::from(i8::MIN) {
                // Underflow is not guarded and wraps.
                assert_eq!(result, Ok(x.wrapping_add(y)), "{x} + {y}");
            } else {
                assert_eq!(result.map(i16::from), Ok(sum), "{x} + {y}");
            }
        }
    }
}

#[test]
fn exhaustive_i8_mul() {
    for x in i8::MIN..=i8::MAX {
        for y in i8::MIN..=i8::MAX {
            let product = i16::from(x) * i16::from(y);
            let result = checked_mul(x, y);

            let fast_path = x == 0 || y == 0 || x == 1 || y == 1;
            let in_range = (i16::from(i8::MIN)..=i16::from(i8::MAX)).contains(&product);

            if fast_path {
                assert_eq!(result.map(i16::from), Ok(product), "{x} * {y}");
            } else if x == i8::MIN || y == i8::MIN {
                assert_eq!(result.map_err(|e| e.cause()), Err(OverflowCause::MinOperand));
            } else if in_range {
                assert_eq!(result.map(i16::from), Ok(product), "{x} * {y}");
            } else {
                assert_eq!(
                    result.map_err(|e| e.cause()),
                    Err(OverflowCause::QuotientMismatch),
                    "{x} * {y}"
                );
            }
        }
    }
}

#[test]
fn native_width_examples() {
    assert!(intguard_core::add(isize::MAX, 1).is_err());
    assert_eq!(intguard_core::add(2, 3), Ok(5));
    assert_eq!(intguard_core::mul(0, isize::MIN), Ok(0));
    assert!(intguard_core::mul(isize::MIN, 2).is_err());
    assert_eq!(intguard_core::mul(3, 4), Ok(12));
}
