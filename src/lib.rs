//! Simple Program - a deterministic fixture for debuggers and tracing tools
//!
//! This library provides the recursive factorial and fibonacci routines the
//! `simple_program` binary runs, plus call instrumentation and report
//! rendering so the fixture's behavior can be checked without a debugger.

pub mod cli;
pub mod commands;
pub mod common;
pub mod math;
pub mod report;
pub mod trace;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use math::{array_sum, factorial, fibonacci, FIXTURE_ARRAY};
pub use report::Report;
