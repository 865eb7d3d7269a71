//! Call instrumentation
//!
//! Instrumented copies of the fixture recursions. They compute the same
//! values as [`crate::math`] and record what a debugger attached to the
//! fixture would observe: how many frames were entered and how deep the
//! stack got.

use serde::Serialize;
use tracing::trace;

/// Call statistics for one top-level invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CallStats {
    /// Total invocations, root included
    pub calls: u64,
    /// Deepest number of simultaneously active frames (root = 1)
    pub max_depth: u32,
}

impl CallStats {
    fn enter(&mut self, depth: u32) {
        self.calls += 1;
        self.max_depth = self.max_depth.max(depth);
    }
}

/// Factorial with call statistics
pub fn traced_factorial(n: i32) -> (i32, CallStats) {
    fn go(n: i32, depth: u32, stats: &mut CallStats) -> i32 {
        stats.enter(depth);
        trace!(n, depth, "factorial");
        if n <= 1 {
            return 1;
        }
        n.wrapping_mul(go(n - 1, depth + 1, stats))
    }

    let mut stats = CallStats::default();
    let value = go(n, 1, &mut stats);
    (value, stats)
}

/// Fibonacci with call statistics
pub fn traced_fibonacci(n: i32) -> (i32, CallStats) {
    fn go(n: i32, depth: u32, stats: &mut CallStats) -> i32 {
        stats.enter(depth);
        trace!(n, depth, "fibonacci");
        if n <= 1 {
            return n;
        }
        go(n - 1, depth + 1, stats).wrapping_add(go(n - 2, depth + 1, stats))
    }

    let mut stats = CallStats::default();
    let value = go(n, 1, &mut stats);
    (value, stats)
}
