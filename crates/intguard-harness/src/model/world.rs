//! Model world - applies operations to model and real implementation.
//!
//! The world owns an accumulator for each side so that sequences of
//! operations, not just single calls, are compared. A failed accumulate
//! leaves the accumulator untouched on both sides.

use intguard_core::{Guard, OverflowPolicy};
use thiserror::Error;

use super::{
    operation::{Operation, Outcome},
    reference::ReferenceModel,
};

/// Observable state for oracle comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservableState {
    /// Current accumulator value.
    pub accumulator: i64,
    /// Operations applied so far.
    pub applied: usize,
    /// Operations that reported overflow.
    pub overflows: usize,
}

/// Model and real implementation disagreed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("divergence at operation {index} ({op:?}): model {expected:?}, real {actual:?}")]
pub struct Divergence {
    /// Index of the operation in the sequence.
    pub index: usize,
    /// Operation that diverged.
    pub op: Operation,
    /// Model outcome.
    pub expected: Outcome,
    /// Real outcome.
    pub actual: Outcome,
}

/// Side of the comparison: where each operation is evaluated.
trait Evaluator {
    fn add(&self, x: i64, y: i64) -> Outcome;
    fn mul(&self, x: i64, y: i64) -> Outcome;
}

impl Evaluator for ReferenceModel {
    fn add(&self, x: i64, y: i64) -> Outcome {
        Self::add(self, x, y)
    }

    fn mul(&self, x: i64, y: i64) -> Outcome {
        Self::mul(self, x, y)
    }
}

/// Real checked operations, always under [`OverflowPolicy::Report`].
impl Evaluator for Guard {
    fn add(&self, x: i64, y: i64) -> Outcome {
        Self::add(self, x, y).into()
    }

    fn mul(&self, x: i64, y: i64) -> Outcome {
        Self::mul(self, x, y).into()
    }
}

#[derive(Debug, Clone, Copy)]
struct Side<E> {
    evaluator: E,
    state: ObservableState,
}

impl<E: Evaluator> Side<E> {
    fn new(evaluator: E) -> Self {
        Self { evaluator, state: ObservableState { accumulator: 0, applied: 0, overflows: 0 } }
    }

    fn apply(&mut self, op: &Operation) -> Outcome {
        let outcome = match *op {
            Operation::Add { lhs, rhs } => self.evaluator.add(lhs.value(), rhs.value()),
            Operation::Mul { lhs, rhs } => self.evaluator.mul(lhs.value(), rhs.value()),
            Operation::AccumulateAdd { operand } => {
                let outcome = self.evaluator.add(self.state.accumulator, operand.value());
                self.store(outcome)
            },
            Operation::AccumulateMul { operand } => {
                let outcome = self.evaluator.mul(self.state.accumulator, operand.value());
                self.store(outcome)
            },
            Operation::Reset { value } => {
                self.state.accumulator = value.value();
                Outcome::Value(self.state.accumulator)
            },
        };

        self.state.applied += 1;
        if outcome.is_overflow() {
            self.state.overflows += 1;
        }
        outcome
    }

    fn store(&mut self, outcome: Outcome) -> Outcome {
        if let Outcome::Value(v) = outcome {
            self.state.accumulator = v;
        }
        outcome
    }
}

/// Model world - reference and real implementation side by side.
#[derive(Debug, Clone)]
pub struct ModelWorld {
    model: Side<ReferenceModel>,
    real: Side<Guard>,
}

impl Default for ModelWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelWorld {
    /// Create a world with both accumulators at zero.
    pub fn new() -> Self {
        Self {
            model: Side::new(ReferenceModel::new()),
            real: Side::new(Guard::new(OverflowPolicy::Report)),
        }
    }

    /// Apply an operation to both sides.
    ///
    /// Returns `(model, real)` outcomes.
    pub fn apply(&mut self, op: &Operation) -> (Outcome, Outcome) {
        (self.model.apply(op), self.real.apply(op))
    }

    /// Model's observable state.
    pub fn model_state(&self) -> ObservableState {
        self.model.state
    }

    /// Real implementation's observable state.
    pub fn real_state(&self) -> ObservableState {
        self.real.state
    }
}

/// Apply `ops` in order and stop at the first disagreement.
///
/// Returns the final observable state when model and real implementation
/// agree on every outcome.
pub fn run_sequence(ops: &[Operation]) -> Result<ObservableState, Divergence> {
    let mut world = ModelWorld::new();

    for (index, op) in ops.iter().enumerate() {
        let (expected, actual) = world.apply(op);

        if expected != actual || world.model_state() != world.real_state() {
            tracing::debug!(index, ?op, ?expected, ?actual, "model divergence");
            return Err(Divergence { index, op: *op, expected, actual });
        }
    }

    Ok(world.real_state())
}
