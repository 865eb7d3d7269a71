//! Fixture report
//!
//! The text rendering is the fixture's whole external interface and must
//! stay byte-identical to the C program's `printf` output.

use serde::Serialize;
use std::fmt;

use crate::common::Result;
use crate::math::{self, FIXTURE_ARRAY};
use crate::trace::{self, CallStats};

/// Results for one fixture run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Report {
    pub number: i32,
    pub factorial: i32,
    pub fibonacci: i32,
    pub sum: i32,
}

impl Report {
    /// Compute with the wrapping arithmetic
    pub fn compute(number: i32) -> Self {
        Self {
            number,
            factorial: math::factorial(number),
            fibonacci: math::fibonacci(number),
            sum: math::array_sum(&FIXTURE_ARRAY),
        }
    }

    /// Compute with overflow reported as an error
    pub fn try_compute(number: i32) -> Result<Self> {
        Ok(Self {
            number,
            factorial: math::checked_factorial(number)?,
            fibonacci: math::checked_fibonacci(number)?,
            sum: math::array_sum(&FIXTURE_ARRAY),
        })
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Calculating factorial and fibonacci for {}", self.number)?;
        writeln!(f, "Factorial of {} is {}", self.number, self.factorial)?;
        writeln!(
            f,
            "Fibonacci number at position {} is {}",
            self.number, self.fibonacci
        )?;
        writeln!(f, "Sum of array elements: {}", self.sum)
    }
}

/// Call statistics for both recursions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallReport {
    pub factorial: CallStats,
    pub fibonacci: CallStats,
}

impl CallReport {
    pub fn collect(number: i32) -> Self {
        Self {
            factorial: trace::traced_factorial(number).1,
            fibonacci: trace::traced_fibonacci(number).1,
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for CallReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, stats) in [("factorial", self.factorial), ("fibonacci", self.fibonacci)] {
            writeln!(
                f,
                "{name}: calls={}, max_depth={}",
                stats.calls, stats.max_depth
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const FIXTURE_OUTPUT: &str = "\
Calculating factorial and fibonacci for 5
Factorial of 5 is 120
Fibonacci number at position 5 is 5
Sum of array elements: 15
";

    #[test]
    fn test_default_report_text() {
        let report = Report::compute(5);
        assert_eq!(report.to_string(), FIXTURE_OUTPUT);
    }

    #[test]
    fn test_report_fields() {
        let report = Report::compute(10);
        assert_eq!(
            report,
            Report {
                number: 10,
                factorial: 3_628_800,
                fibonacci: 55,
                sum: 15,
            }
        );
    }

    #[test]
    fn test_try_compute_matches_in_range() {
        for n in 0..=12 {
            assert_eq!(Report::try_compute(n).unwrap(), Report::compute(n));
        }
    }

    #[test]
    fn test_try_compute_overflow() {
        assert!(matches!(
            Report::try_compute(13),
            Err(Error::Overflow { operation: "factorial", .. })
        ));
    }

    #[test]
    fn test_json() {
        let json = Report::compute(5).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["number"], 5);
        assert_eq!(value["factorial"], 120);
        assert_eq!(value["fibonacci"], 5);
        assert_eq!(value["sum"], 15);
    }

    #[test]
    fn test_call_report_text() {
        let report = CallReport::collect(5);
        assert_eq!(
            report.to_string(),
            "factorial: calls=5, max_depth=5\nfibonacci: calls=15, max_depth=5\n"
        );
    }

    #[test]
    fn test_call_report_json() {
        let json = CallReport::collect(10).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["factorial"]["calls"], 10);
        assert_eq!(value["factorial"]["max_depth"], 10);
        assert_eq!(value["fibonacci"]["calls"], 177);
        assert_eq!(value["fibonacci"]["max_depth"], 10);
    }
}
