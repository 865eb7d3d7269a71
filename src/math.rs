//! Fixture arithmetic
//!
//! Both recursions are kept naive on purpose: tools attached to the fixture
//! observe the call count and stack depth they produce. The plain variants
//! wrap on overflow like the C fixture does on two's-complement targets; the
//! `checked_` variants report it instead.

use crate::common::{Error, Result};

/// The array summed by the fixture
pub const FIXTURE_ARRAY: [i32; 5] = [1, 2, 3, 4, 5];

/// Input used when nothing else is configured
pub const DEFAULT_NUMBER: i32 = 5;

/// Largest `n` whose factorial fits in an i32 (12! = 479001600)
pub const MAX_FACTORIAL_INPUT: i32 = 12;

/// Largest `n` whose fibonacci number fits in an i32 (F(46) = 1836311903)
pub const MAX_FIBONACCI_INPUT: i32 = 46;

/// Recursive factorial. `n <= 1` (including negatives) yields 1.
pub fn factorial(n: i32) -> i32 {
    // BREAKPOINT_MARKER: factorial_body
    if n <= 1 {
        return 1;
    }
    n.wrapping_mul(factorial(n - 1))
}

/// Recursive fibonacci with double recursion. `n <= 1` yields `n`.
pub fn fibonacci(n: i32) -> i32 {
    // BREAKPOINT_MARKER: fibonacci_body
    if n <= 1 {
        return n;
    }
    fibonacci(n - 1).wrapping_add(fibonacci(n - 2))
}

/// Sum of `values`, accumulated front to back from zero
pub fn array_sum(values: &[i32]) -> i32 {
    let mut sum = 0i32;
    for &value in values {
        sum = sum.wrapping_add(value);
    }
    sum
}

/// Factorial that fails instead of wrapping
///
/// Inputs past [`MAX_FACTORIAL_INPUT`] fail before recursing, so huge
/// values never reach the stack.
pub fn checked_factorial(n: i32) -> Result<i32> {
    fn go(n: i32) -> Option<i32> {
        if n <= 1 {
            return Some(1);
        }
        n.checked_mul(go(n - 1)?)
    }
    if n > MAX_FACTORIAL_INPUT {
        return Err(Error::overflow("factorial", n));
    }
    go(n).ok_or_else(|| Error::overflow("factorial", n))
}

/// Fibonacci that fails instead of wrapping
///
/// Inputs past [`MAX_FIBONACCI_INPUT`] fail before recursing.
pub fn checked_fibonacci(n: i32) -> Result<i32> {
    fn go(n: i32) -> Option<i32> {
        if n <= 1 {
            return Some(n);
        }
        go(n - 1)?.checked_add(go(n - 2)?)
    }
    if n > MAX_FIBONACCI_INPUT {
        return Err(Error::overflow("fibonacci", n));
    }
    go(n).ok_or_else(|| Error::overflow("fibonacci", n))
}
