//! Checked addition and multiplication.
//!
//! Both operations detect overflow using only same-width wrapping arithmetic,
//! never a wider intermediate type.
//!
//! # Invariants
//!
//! - A positive-direction overflow is never returned as a value
//! - Multiplication by 0 or 1 never reports overflow, for any other operand
//! - Multiplication with a `MIN` operand (and no 0/1 operand) always reports
//!   overflow

use crate::{
    error::{ArithOp, ArithmeticError, OverflowCause},
    int::SignedInt,
};

/// Adds `x` and `y`, reporting overflow past `T::MAX`.
///
/// The guard is `x > MAX - y`, evaluated without wrapping: for `y <= 0` the
/// bound is at least `MAX` and the guard cannot fire. Underflow below
/// `T::MIN` is not checked and the wrapped sum is returned.
///
/// # Example
///
/// ```
/// use intguard_core::checked_add;
///
/// assert_eq!(checked_add(2i32, 3), Ok(5));
/// assert!(checked_add(i32::MAX, 1).is_err());
/// ```
pub fn checked_add<T: SignedInt>(x: T, y: T) -> Result<T, ArithmeticError> {
    if y > T::ZERO && x > T::MAX.wrapping_sub(y) {
        return Err(overflow(ArithOp::Add, x, y, OverflowCause::Sum));
    }

    Ok(x.wrapping_add(y))
}

/// Multiplies `x` and `y`, reporting overflow in either direction.
///
/// Evaluation order matters:
///
/// 1. A zero operand yields zero
/// 2. A one operand yields the other operand
/// 3. A `MIN` operand is overflow
/// 4. The wrapped product must divide back: `product / x == y`
///
/// Steps 1 and 2 run before the `MIN` guard, so `0 * MIN` and `1 * MIN` are
/// fine.
///
/// # Example
///
/// ```
/// use intguard_core::checked_mul;
///
/// assert_eq!(checked_mul(3i64, 4), Ok(12));
/// assert_eq!(checked_mul(1i64, i64::MIN), Ok(i64::MIN));
/// assert!(checked_mul(i64::MIN, 2).is_err());
/// ```
pub fn checked_mul<T: SignedInt>(x: T, y: T) -> Result<T, ArithmeticError> {
    if x == T::ZERO || y == T::ZERO {
        return Ok(T::ZERO);
    }
    if x == T::ONE {
        return Ok(y);
    }
    if y == T::ONE {
        return Ok(x);
    }

    let product = x.wrapping_mul(y);

    // MIN / -1 overflows, so MIN is rejected before the division check.
    if x == T::MIN || y == T::MIN {
        return Err(overflow(ArithOp::Mul, x, y, OverflowCause::MinOperand));
    }
    if product.wrapping_div(x) != y {
        return Err(overflow(ArithOp::Mul, x, y, OverflowCause::QuotientMismatch));
    }

    Ok(product)
}

/// Adds `x` and `y`, panicking on overflow.
///
/// Same checks as [`checked_add`]. For programs where overflow is a bug and
/// must stop execution.
///
/// # Panics
///
/// If [`checked_add`] would return an error.
#[track_caller]
pub fn add_or_abort<T: SignedInt>(x: T, y: T) -> T {
    match checked_add(x, y) {
        Ok(value) => value,
        Err(err) => abort(err),
    }
}

/// Multiplies `x` and `y`, panicking on overflow.
///
/// # Panics
///
/// If [`checked_mul`] would return an error.
#[track_caller]
pub fn mul_or_abort<T: SignedInt>(x: T, y: T) -> T {
    match checked_mul(x, y) {
        Ok(value) => value,
        Err(err) => abort(err),
    }
}

/// Native-width [`checked_add`].
pub fn add(x: isize, y: isize) -> Result<isize, ArithmeticError> {
    checked_add(x, y)
}

/// Native-width [`checked_mul`].
pub fn mul(x: isize, y: isize) -> Result<isize, ArithmeticError> {
    checked_mul(x, y)
}

fn overflow<T: SignedInt>(op: ArithOp, x: T, y: T, cause: OverflowCause) -> ArithmeticError {
    ArithmeticError::OverflowDetected { op, lhs: x.widen(), rhs: y.widen(), cause }
}

#[cold]
#[track_caller]
#[allow(clippy::panic)]
pub(crate) fn abort(err: ArithmeticError) -> ! {
    panic!("{err}")
}
