//! Overflow-checked signed integer arithmetic.
//!
//! This crate provides addition and multiplication over fixed-width signed
//! integers that never silently wrap on positive overflow. Callers choose how
//! a detected overflow surfaces:
//!
//! - `Result`: [`checked_add`] / [`checked_mul`] return
//!   [`ArithmeticError::OverflowDetected`]
//! - Abort: [`add_or_abort`] / [`mul_or_abort`] panic on the spot
//! - Policy-driven: [`Guard`] picks one of the above from an
//!   [`OverflowPolicy`]
//!
//! The native-width entry points [`add`] and [`mul`] operate on `isize`.
//!
//! # Known Limitation
//!
//! Addition only guards the positive direction (`x > MAX - y`). A sum that
//! falls below `MIN` wraps and is returned as a value.
//!
//! # Example
//!
//! ```
//! use intguard_core::{ArithmeticError, OverflowCause, add, mul};
//!
//! assert_eq!(add(2, 3), Ok(5));
//! assert_eq!(mul(3, 4), Ok(12));
//! assert_eq!(mul(0, isize::MIN), Ok(0));
//!
//! let err = mul(isize::MIN, 2).unwrap_err();
//! assert!(matches!(
//!     err,
//!     ArithmeticError::OverflowDetected { cause: OverflowCause::MinOperand, .. }
//! ));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod arith;
pub mod error;
pub mod int;
pub mod policy;

pub use arith::{add, add_or_abort, checked_add, checked_mul, mul, mul_or_abort};
pub use error::{ArithOp, ArithmeticError, OverflowCause};
pub use int::SignedInt;
pub use policy::{Guard, OverflowPolicy, ParsePolicyError};
