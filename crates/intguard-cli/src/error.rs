//! CLI error types.

use intguard_core::ArithmeticError;
use thiserror::Error;

use crate::Width;

/// Errors from evaluating a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Operand does not fit in the selected width.
    #[error("operand {value} does not fit in {width}")]
    OperandOutOfRange {
        /// Operand as parsed.
        value: i128,
        /// Width it was narrowed to.
        width: Width,
    },

    /// The checked operation overflowed.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    /// Writing the result failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::OperandOutOfRange { .. } => 2,
            Self::Arithmetic(_) | Self::Io(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use intguard_core::{ArithOp, OverflowCause};

    use super::*;

    #[test]
    fn out_of_range_display() {
        let err = CliError::OperandOutOfRange { value: 300, width: Width::W8 };
        assert_eq!(err.to_string(), "operand 300 does not fit in i8");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn arithmetic_is_transparent() {
        let inner = ArithmeticError::OverflowDetected {
            op: ArithOp::Add,
            lhs: 127,
            rhs: 1,
            cause: OverflowCause::Sum,
        };
        let err = CliError::from(inner);
        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(err.exit_code(), 1);
    }
}
