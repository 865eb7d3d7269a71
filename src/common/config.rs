//! Configuration file handling

use serde::Deserialize;
use std::path::Path;

use super::paths::config_path;
use super::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Fixture input settings
    #[serde(default)]
    pub input: InputConfig,

    /// Recursion limits
    #[serde(default)]
    pub limits: Limits,
}

/// Fixture input settings
#[derive(Debug, Deserialize)]
pub struct InputConfig {
    /// Value passed to factorial and fibonacci
    #[serde(default = "default_number")]
    pub number: i32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            number: default_number(),
        }
    }
}

fn default_number() -> i32 {
    crate::math::DEFAULT_NUMBER
}

/// Bounds applied before any recursion starts
#[derive(Debug, Deserialize)]
pub struct Limits {
    /// Largest accepted absolute input.
    ///
    /// Naive fibonacci is exponential, so this also bounds run time.
    #[serde(default = "default_max_number")]
    pub max_number: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_number: default_max_number(),
        }
    }
}

fn default_max_number() -> u32 {
    40
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        Ok(Self::default())
    }

    /// Load configuration from an explicit path
    ///
    /// Unlike [`Config::load`], a missing file is an error here
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| super::Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| super::Error::ConfigParse(e.to_string()))
    }

    /// Check `n` against the configured recursion limit
    pub fn check_input(&self, n: i32) -> Result<i32> {
        if n.unsigned_abs() > self.limits.max_number {
            return Err(super::Error::InputOutOfRange {
                n,
                max: self.limits.max_number,
            });
        }
        Ok(n)
    }
}
