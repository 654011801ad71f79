//! Overflow policy configuration.
//!
//! Defines what a [`Guard`] does when a checked operation overflows.

use std::{fmt, str::FromStr};

use crate::{
    arith::{abort, checked_add, checked_mul},
    error::ArithmeticError,
    int::SignedInt,
};

/// Policy for handling a detected overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverflowPolicy {
    /// Return [`ArithmeticError::OverflowDetected`] to the caller.
    #[default]
    Report,

    /// Panic immediately. Under `panic = "abort"` this terminates the
    /// process.
    Abort,
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Report => f.write_str("report"),
            Self::Abort => f.write_str("abort"),
        }
    }
}

/// Error parsing an [`OverflowPolicy`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown overflow policy: {0} (expected `report` or `abort`)")]
pub struct ParsePolicyError(String);

impl FromStr for OverflowPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "report" => Ok(Self::Report),
            "abort" => Ok(Self::Abort),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

/// Applies an [`OverflowPolicy`] to the checked operations.
///
/// Every detected overflow is logged at `warn` before the policy acts on it.
///
/// ```
/// use intguard_core::{Guard, OverflowPolicy};
///
/// let guard = Guard::new(OverflowPolicy::Report);
/// assert_eq!(guard.add(2i16, 3), Ok(5));
/// assert!(guard.mul(i16::MIN, 2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Guard {
    policy: OverflowPolicy,
}

impl Guard {
    /// Create a guard with the given policy.
    pub fn new(policy: OverflowPolicy) -> Self {
        Self { policy }
    }

    /// Policy this guard applies.
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// [`checked_add`] under this guard's policy.
    ///
    /// # Panics
    ///
    /// On overflow when the policy is [`OverflowPolicy::Abort`].
    #[track_caller]
    pub fn add<T: SignedInt>(&self, x: T, y: T) -> Result<T, ArithmeticError> {
        self.apply(checked_add(x, y))
    }

    /// [`checked_mul`] under this guard's policy.
    ///
    /// # Panics
    ///
    /// On overflow when the policy is [`OverflowPolicy::Abort`].
    #[track_caller]
    pub fn mul<T: SignedInt>(&self, x: T, y: T) -> Result<T, ArithmeticError> {
        self.apply(checked_mul(x, y))
    }

    #[track_caller]
    fn apply<T: SignedInt>(&self, result: Result<T, ArithmeticError>) -> Result<T, ArithmeticError> {
        let Err(err) = result else {
            return result;
        };

        let ArithmeticError::OverflowDetected { op, lhs, rhs, cause } = err;
        tracing::warn!(%op, lhs, rhs, %cause, policy = %self.policy, width = T::BITS, "overflow detected");

        match self.policy {
            OverflowPolicy::Report => Err(err),
            OverflowPolicy::Abort => abort(err),
        }
    }
}
