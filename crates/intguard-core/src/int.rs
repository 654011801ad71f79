//! Fixed-width signed integer abstraction.
//!
//! The checked operations are written once against [`SignedInt`] and
//! instantiated for every primitive signed type. Only two's-complement
//! wrapping primitives are required: the overflow checks are expressed in
//! terms of them rather than a wider intermediate type.

use std::fmt;

/// A fixed-width two's-complement signed integer.
///
/// # Invariants
///
/// - `MIN < ZERO < ONE <= MAX`
/// - `MIN` has no positive counterpart: `MIN.wrapping_mul(-1) == MIN`
/// - `widen` is lossless
pub trait SignedInt:
    Copy + Eq + Ord + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Smallest representable value.
    const MIN: Self;
    /// Largest representable value.
    const MAX: Self;
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Width in bits.
    const BITS: u32;

    /// Two's-complement addition.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Two's-complement subtraction.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Two's-complement multiplication.
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Truncating division. `rhs` must be non-zero.
    fn wrapping_div(self, rhs: Self) -> Self;

    /// Widens to `i128` for reporting.
    fn widen(self) -> i128;
}

macro_rules! impl_signed_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SignedInt for $ty {
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const BITS: u32 = <$ty>::BITS;

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$ty>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$ty>::wrapping_mul(self, rhs)
                }

                #[inline]
                fn wrapping_div(self, rhs: Self) -> Self {
                    <$ty>::wrapping_div(self, rhs)
                }

                #[inline]
                #[allow(clippy::cast_lossless, clippy::unnecessary_cast)]
                fn widen(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_signed_int!(i8, i16, i32, i64, i128, isize);
