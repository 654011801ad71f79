//! Fuzz target for the checked operations against the reference model
//!
//! # Strategy
//!
//! - Operation sequences: Arbitrary mixes of one-shot and accumulating
//!   add/mul calls, with resets
//! - Edge operands: `MIN`, `MAX`, 0, 1, -1 and values near `sqrt(MAX)` are
//!   first-class operand variants
//!
//! # Invariants
//!
//! - Model and real outcomes agree on every operation
//! - A failed accumulate leaves the accumulator unchanged
//! - NEVER panic under the `Report` policy

#![no_main]

use intguard_harness::{Operation, run_sequence};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|ops: Vec<Operation>| {
    if let Err(divergence) = run_sequence(&ops) {
        panic!("{divergence}");
    }
});
