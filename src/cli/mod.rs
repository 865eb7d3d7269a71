//! CLI handling
//!
//! Resolves the fixture input, runs the computations and formats output.
//!
//! Without `--config`, a run reads `config.toml` from the user's config
//! directory (see [`crate::common::paths::config_path`]) when it exists.
//! Its `[input] number` changes the printed lines and an invalid file makes
//! the run exit 1. Pass `--number` or a `--config` file to pin the input.

use std::io::Write;

use crate::commands::Options;
use crate::common::config::Config;
use crate::common::Result;
use crate::report::{CallReport, Report};

/// Run the fixture against stdout/stderr
pub fn run(options: Options) -> Result<()> {
    let config = match &options.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    run_with(&options, &config, &mut stdout.lock(), &mut stderr.lock())
}

/// Run the fixture with explicit config and output streams
pub fn run_with(
    options: &Options,
    config: &Config,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    // BREAKPOINT_MARKER: run_start
    let number = config.check_input(resolve_number(options, config))?;
    tracing::debug!(number, max_number = config.limits.max_number, "resolved input");

    // BREAKPOINT_MARKER: before_compute
    let report = Report::try_compute(number)?;

    if options.json {
        writeln!(out, "{}", report.to_json()?)?;
    } else {
        write!(out, "{report}")?;
    }
    out.flush()?;

    if options.stats {
        let calls = CallReport::collect(number);
        if options.json {
            writeln!(err, "{}", calls.to_json()?)?;
        } else {
            write!(err, "{calls}")?;
        }
    }

    // BREAKPOINT_MARKER: before_exit
    Ok(())
}

/// `--number` wins over the config file, which defaults to 5
fn resolve_number(options: &Options, config: &Config) -> i32 {
    options.number.unwrap_or(config.input.number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn run_capture(options: Options, config: Config) -> Result<(String, String)> {
        let mut out = Vec::new();
        let mut err = Vec::new();
        run_with(&options, &config, &mut out, &mut err)?;
        Ok((
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        ))
    }

    #[test]
    fn test_default_run() {
        let (out, err) = run_capture(Options::default(), Config::default()).unwrap();
        assert_eq!(
            out,
            "Calculating factorial and fibonacci for 5\n\
             Factorial of 5 is 120\n\
             Fibonacci number at position 5 is 5\n\
             Sum of array elements: 15\n"
        );
        assert!(err.is_empty());
    }

    #[test]
    fn test_number_precedence() {
        let config = Config::parse("[input]\nnumber = 7\n").unwrap();
        assert_eq!(resolve_number(&Options::default(), &config), 7);

        let options = Options {
            number: Some(3),
            ..Options::default()
        };
        assert_eq!(resolve_number(&options, &config), 3);
        assert_eq!(resolve_number(&Options::default(), &Config::default()), 5);
    }

    #[test]
    fn test_stats_go_to_stderr() {
        let options = Options {
            stats: true,
            ..Options::default()
        };
        let (out, err) = run_capture(options, Config::default()).unwrap();
        assert_eq!(out, Report::compute(5).to_string());
        assert!(err.contains("fibonacci: calls=15, max_depth=5"));
    }

    #[test]
    fn test_json_output() {
        let options = Options {
            json: true,
            number: Some(6),
            ..Options::default()
        };
        let (out, _) = run_capture(options, Config::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["factorial"], 720);
        assert_eq!(value["fibonacci"], 8);
    }

    #[test]
    fn test_json_stats() {
        let options = Options {
            json: true,
            stats: true,
            ..Options::default()
        };
        let (out, err) = run_capture(options, Config::default()).unwrap();
        let report: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(report["number"], 5);

        let calls: serde_json::Value = serde_json::from_str(&err).unwrap();
        assert_eq!(calls["factorial"]["calls"], 5);
        assert_eq!(calls["fibonacci"]["calls"], 15);
        assert_eq!(calls["fibonacci"]["max_depth"], 5);
    }

    #[test]
    fn test_input_guard() {
        let options = Options {
            number: Some(41),
            ..Options::default()
        };
        assert!(matches!(
            run_capture(options, Config::default()),
            Err(Error::InputOutOfRange { n: 41, max: 40 })
        ));
    }

    #[test]
    fn test_overflow_is_reported() {
        let options = Options {
            number: Some(13),
            ..Options::default()
        };
        assert!(matches!(
            run_capture(options, Config::default()),
            Err(Error::Overflow { .. })
        ));
    }
}
