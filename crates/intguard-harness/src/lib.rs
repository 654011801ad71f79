//! Model-based test harness for intguard arithmetic.
//!
//! Operations are applied to both a widening reference model and the real
//! checked operations, and their observable outcomes are compared.
//!
//! # Model-Based Testing
//!
//! The `model` module provides the reference implementation. It computes in
//! `i128`, where no 64-bit operation can overflow, and encodes the documented
//! conservative rules (zero/one fast paths, the `MIN` guard, unguarded
//! addition underflow) explicitly.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod model;

pub use model::{
    Divergence, ModelWorld, ObservableState, Operand, Operation, Outcome, ReferenceModel,
    run_sequence,
};
