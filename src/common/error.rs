//! Error types for the fixture
//!
//! The plain arithmetic routines never fail; errors only arise from the
//! checked variants, the input guard, configuration and output.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the fixture
#[derive(Error, Debug)]
pub enum Error {
    // === Arithmetic Errors ===
    #[error("{operation}({n}) overflows a 32-bit integer")]
    Overflow { operation: &'static str, n: i32 },

    #[error("Input {n} is outside the allowed range -{max}..={max}. Raise [limits] max_number in the config to allow it")]
    InputOutOfRange { n: i32, max: u32 },

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an overflow error for the named operation
    pub fn overflow(operation: &'static str, n: i32) -> Self {
        Self::Overflow { operation, n }
    }
}
