//! Operations for model-based testing.
//!
//! Operations represent every call the harness can make. They are generated
//! randomly by proptest or the fuzzer and applied to both the model and the
//! real implementation.

use arbitrary::Arbitrary;
use intguard_core::{ArithmeticError, OverflowCause};

/// Operand description.
///
/// Uniformly random `i64` values almost never hit the interesting edges, so
/// the edges get their own variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum Operand {
    /// `i64::MIN`
    Min,
    /// `i64::MAX`
    Max,
    /// `0`
    Zero,
    /// `1`
    One,
    /// `-1`
    MinusOne,
    /// Small magnitude value.
    Small(i8),
    /// Value near the square root of `i64::MAX`, where products straddle the
    /// overflow boundary.
    NearSqrt(i32),
    /// Any value.
    Any(i64),
}

impl Operand {
    /// Expand to the concrete operand.
    pub fn value(self) -> i64 {
        match self {
            Self::Min => i64::MIN,
            Self::Max => i64::MAX,
            Self::Zero => 0,
            Self::One => 1,
            Self::MinusOne => -1,
            Self::Small(v) => i64::from(v),
            Self::NearSqrt(v) => i64::from(v) + 3_037_000_499,
            Self::Any(v) => v,
        }
    }
}

/// Operations that can be applied to the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum Operation {
    /// Checked `lhs + rhs`.
    Add {
        /// Left operand.
        lhs: Operand,
        /// Right operand.
        rhs: Operand,
    },

    /// Checked `lhs * rhs`.
    Mul {
        /// Left operand.
        lhs: Operand,
        /// Right operand.
        rhs: Operand,
    },

    /// Checked `accumulator + operand`, stored back on success.
    AccumulateAdd {
        /// Right operand.
        operand: Operand,
    },

    /// Checked `accumulator * operand`, stored back on success.
    AccumulateMul {
        /// Right operand.
        operand: Operand,
    },

    /// Overwrite the accumulator.
    Reset {
        /// New accumulator value.
        value: Operand,
    },
}

/// Observable result of applying an operation.
///
/// Used to compare model and real system behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Operation produced a value.
    Value(i64),

    /// Operation reported overflow.
    Overflow(OverflowCause),
}

impl Outcome {
    /// Check if operation produced a value.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Check if operation reported overflow.
    pub fn is_overflow(&self) -> bool {
        !self.is_value()
    }
}

impl From<Result<i64, ArithmeticError>> for Outcome {
    fn from(result: Result<i64, ArithmeticError>) -> Self {
        match result {
            Ok(v) => Self::Value(v),
            Err(err) => Self::Overflow(err.cause()),
        }
    }
}
