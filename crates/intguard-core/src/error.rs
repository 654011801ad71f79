//! Arithmetic error types.

use std::fmt;

use thiserror::Error;

/// The checked operation that was being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    /// `lhs + rhs`
    Add,
    /// `lhs * rhs`
    Mul,
}

impl ArithOp {
    /// Infix symbol for the operation.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Mul => "*",
        }
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => f.write_str("addition"),
            Self::Mul => f.write_str("multiplication"),
        }
    }
}

/// Which check flagged the overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverflowCause {
    /// Addition bound `lhs > MAX - rhs`.
    Sum,
    /// One multiplication operand is `MIN` and the other is neither 0 nor 1.
    ///
    /// Detected by equality, before the division check: `MIN / -1` itself
    /// overflows.
    MinOperand,
    /// Dividing the wrapped product by `lhs` did not give back `rhs`.
    QuotientMismatch,
}

impl fmt::Display for OverflowCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sum => f.write_str("sum exceeds maximum"),
            Self::MinOperand => f.write_str("minimum-value operand"),
            Self::QuotientMismatch => f.write_str("product does not divide back"),
        }
    }
}

/// Errors from checked arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The true result is not representable in the operand width.
    #[error("{op} overflow: {lhs} {sym} {rhs} ({cause})", sym = .op.symbol())]
    OverflowDetected {
        /// Operation that overflowed.
        op: ArithOp,
        /// Left operand, widened.
        lhs: i128,
        /// Right operand, widened.
        rhs: i128,
        /// Check that fired.
        cause: OverflowCause,
    },
}

impl ArithmeticError {
    /// Returns true if this error is fatal (unrecoverable).
    ///
    /// Overflow indicates a programming error, not bad input, so every
    /// variant is fatal. Callers that feed user input into the checked
    /// operations should validate ranges first.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::OverflowDetected { .. } => true,
        }
    }

    /// Operation that failed.
    pub fn operation(&self) -> ArithOp {
        match self {
            Self::OverflowDetected { op, .. } => *op,
        }
    }

    /// Check that fired.
    pub fn cause(&self) -> OverflowCause {
        match self {
            Self::OverflowDetected { cause, .. } => *cause,
        }
    }
}
