//! CLI option definitions
//!
//! Defines the clap flags for the fixture binary. Every flag is optional;
//! running without any reproduces the fixture's default output, unless a
//! user config file (`$XDG_CONFIG_HOME/simple-program/config.toml` on Linux)
//! overrides the input.

use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default, Clone)]
pub struct Options {
    /// Input for factorial and fibonacci (default: 5, or `[input] number` from config)
    #[arg(long, short, allow_negative_numbers = true)]
    pub number: Option<i32>,

    /// Read configuration from this file instead of the user config directory
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Print call count and maximum stack depth to stderr (as JSON with --json)
    #[arg(long)]
    pub stats: bool,
}
