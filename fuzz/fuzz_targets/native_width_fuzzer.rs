//! Fuzz target for native-width `add`/`mul`
//!
//! # Invariants
//!
//! - A returned sum or product equals the true result whenever the true
//!   result is representable
//! - Positive overflow is never returned as a value
//! - Zero and one operands never report overflow

#![no_main]

use arbitrary::Arbitrary;
use intguard_core::{add, mul};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
struct FuzzInput {
    lhs: isize,
    rhs: isize,
}

fuzz_target!(|input: FuzzInput| {
    let (x, y) = (input.lhs, input.rhs);
    let max = isize::MAX as i128;
    let min = isize::MIN as i128;

    let sum = x as i128 + y as i128;
    match add(x, y) {
        Ok(v) if sum <= max && sum >= min => assert_eq!(v as i128, sum),
        Ok(_) => assert!(sum < min, "positive overflow {x} + {y} returned a value"),
        Err(_) => assert!(sum > max, "{x} + {y} = {sum} rejected"),
    }

    let product = x as i128 * y as i128;
    match mul(x, y) {
        Ok(v) => assert_eq!(v as i128, product),
        Err(_) => {
            assert!(x != 0 && y != 0 && x != 1 && y != 1);
            assert!(product > max || product < min || x == isize::MIN || y == isize::MIN);
        },
    }
});
