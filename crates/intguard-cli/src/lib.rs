//! Command-line evaluation of overflow-checked arithmetic.
//!
//! Operands arrive as `i128`, are narrowed to the selected [`Width`], and are
//! passed through a [`Guard`] configured with the selected policy. The result
//! is widened back to `i128` for printing.
//!
//! ## Architecture
//!
//! ```text
//! intguard (main.rs)
//!   ├─ Args        (clap)
//!   ├─ EvalConfig  (width, policy, log level)
//!   └─ evaluate    (narrow → Guard → widen)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;

use std::fmt;

pub use error::CliError;
use intguard_core::{ArithOp, Guard, OverflowPolicy, SignedInt};

/// Integer width to evaluate in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Width {
    /// `i8`
    #[value(name = "8")]
    W8,
    /// `i16`
    #[value(name = "16")]
    W16,
    /// `i32`
    #[value(name = "32")]
    W32,
    /// `i64`
    #[value(name = "64")]
    W64,
    /// `i128`
    #[value(name = "128")]
    W128,
    /// `isize`, the platform's native width
    #[default]
    #[value(name = "size")]
    Size,
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::W8 => "i8",
            Self::W16 => "i16",
            Self::W32 => "i32",
            Self::W64 => "i64",
            Self::W128 => "i128",
            Self::Size => "isize",
        };
        f.write_str(name)
    }
}

/// Evaluation configuration.
#[derive(Debug, Clone)]
pub struct EvalConfig {
    /// Width the operands are narrowed to
    pub width: Width,
    /// What to do on overflow
    pub policy: OverflowPolicy,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self { width: Width::Size, policy: OverflowPolicy::Report, log_level: "info".to_string() }
    }
}

/// Evaluate `lhs op rhs` under `config`.
///
/// # Errors
///
/// - [`CliError::OperandOutOfRange`] if either operand does not fit the width
/// - [`CliError::Arithmetic`] on overflow under [`OverflowPolicy::Report`]
///
/// # Panics
///
/// On overflow under [`OverflowPolicy::Abort`].
pub fn evaluate(config: &EvalConfig, op: ArithOp, lhs: i128, rhs: i128) -> Result<i128, CliError> {
    let guard = Guard::new(config.policy);

    tracing::debug!(%op, lhs, rhs, width = %config.width, policy = %config.policy, "evaluating");

    match config.width {
        Width::W8 => eval_as::<i8>(guard, config.width, op, lhs, rhs),
        Width::W16 => eval_as::<i16>(guard, config.width, op, lhs, rhs),
        Width::W32 => eval_as::<i32>(guard, config.width, op, lhs, rhs),
        Width::W64 => eval_as::<i64>(guard, config.width, op, lhs, rhs),
        Width::W128 => eval_as::<i128>(guard, config.width, op, lhs, rhs),
        Width::Size => eval_as::<isize>(guard, config.width, op, lhs, rhs),
    }
}

fn eval_as<T>(guard: Guard, width: Width, op: ArithOp, lhs: i128, rhs: i128) -> Result<i128, CliError>
where
    T: SignedInt + TryFrom<i128>,
{
    let x = narrow::<T>(lhs, width)?;
    let y = narrow::<T>(rhs, width)?;

    let value = match op {
        ArithOp::Add => guard.add(x, y)?,
        ArithOp::Mul => guard.mul(x, y)?,
    };

    Ok(value.widen())
}

fn narrow<T: TryFrom<i128>>(value: i128, width: Width) -> Result<T, CliError> {
    T::try_from(value).map_err(|_| CliError::OperandOutOfRange { value, width })
}
