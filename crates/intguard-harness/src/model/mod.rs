//! Reference model for model-based testing.
//!
//! The model is a simplified implementation that captures the contract of the
//! checked operations without the same-width tricks the real implementation
//! uses. It serves as the oracle against which the real implementation is
//! verified.
//!
//! # Design Principles
//!
//! - Simplicity: The model should be obviously correct
//! - Contract not implementation: Captures WHAT, not HOW
//! - Deterministic: Same inputs produce same outputs

pub mod operation;
mod reference;
mod world;

pub use operation::{Operand, Operation, Outcome};
pub use reference::ReferenceModel;
pub use world::{Divergence, ModelWorld, ObservableState, run_sequence};
