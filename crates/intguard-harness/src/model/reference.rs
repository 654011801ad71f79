//! Widening reference model.
//!
//! Computes the true result in `i128` and then applies the contract's rules
//! in the order they are documented, without any of the wrapping or division
//! tricks of the real implementation.

use intguard_core::OverflowCause;

use super::operation::Outcome;

/// Oracle for checked `i64` arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceModel;

impl ReferenceModel {
    /// Create a new model.
    pub fn new() -> Self {
        Self
    }

    /// Expected outcome of `x + y`.
    pub fn add(&self, x: i64, y: i64) -> Outcome {
        let sum = i128::from(x) + i128::from(y);

        if sum > i128::from(i64::MAX) {
            return Outcome::Overflow(OverflowCause::Sum);
        }

        // The negative direction is unguarded: below MIN the sum wraps.
        Outcome::Value(x.wrapping_add(y))
    }

    /// Expected outcome of `x * y`.
    pub fn mul(&self, x: i64, y: i64) -> Outcome {
        if x == 0 || y == 0 {
            return Outcome::Value(0);
        }
        if x == 1 {
            return Outcome::Value(y);
        }
        if y == 1 {
            return Outcome::Value(x);
        }
        if x == i64::MIN || y == i64::MIN {
            return Outcome::Overflow(OverflowCause::MinOperand);
        }

        let product = i128::from(x) * i128::from(y);
        match i64::try_from(product) {
            Ok(v) => Outcome::Value(v),
            Err(_) => Outcome::Overflow(OverflowCause::QuotientMismatch),
        }
    }
}
