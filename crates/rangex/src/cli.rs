//! Command-line front end for the `rangex` binary.
//!
//! Argument handling is deliberately small: flags map straight onto
//! [`ExpandOptions`], every remaining argument is a pattern.

use std::sync::Once;

use rangex_core::{CodeUnits, OutputShape, RangeError, RangeOutput};

use crate::expand::expand_with;
use crate::options::ExpandOptions;

/// Usage text printed for `--help` and on argument errors.
pub const USAGE: &str = "\
Usage: rangex [options] <pattern>...

Expand character ranges such as `a-z` or `9-0` in each pattern.

Options:
  -s, --separator <sep>   Range separator (default: -)
      --sequence          Print one character per line
  -h, --help              Show this help
      --                  Treat all following arguments as patterns";

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CliCommand {
    /// Print usage and exit successfully.
    Help,
    /// Expand each pattern with the given options.
    Expand {
        options: ExpandOptions,
        patterns: Vec<String>,
    },
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=rangex=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Parse arguments (without the program name) into a [`CliCommand`].
///
/// # Errors
///
/// Returns a message for unknown options, a separator flag without a
/// value, or a missing pattern.
pub fn parse_args(args: &[String]) -> Result<CliCommand, String> {
    let mut options = ExpandOptions::default();
    let mut patterns = Vec::new();
    let mut only_patterns = false;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if only_patterns || arg == "-" || !arg.starts_with('-') {
            patterns.push(arg.clone());
            continue;
        }
        match arg.as_str() {
            "--" => only_patterns = true,
            "-h" | "--help" => return Ok(CliCommand::Help),
            "--sequence" => options.shape = OutputShape::Sequence,
            "-s" | "--separator" => {
                let Some(value) = iter.next() else {
                    return Err(format!("option `{arg}` requires a value"));
                };
                options.separator.clone_from(value);
            }
            other => {
                if let Some(value) = other.strip_prefix("--separator=") {
                    options.separator = value.to_owned();
                } else {
                    return Err(format!("unknown option `{other}`"));
                }
            }
        }
    }

    if patterns.is_empty() {
        return Err("missing pattern".to_owned());
    }
    Ok(CliCommand::Expand { options, patterns })
}

/// Expand every pattern of `command` into the lines the binary prints.
///
/// Text output is one line per pattern; sequence output is one line per
/// character. [`CliCommand::Help`] yields the usage text.
pub fn run(command: &CliCommand) -> Result<Vec<String>, RangeError> {
    let (options, patterns) = match command {
        CliCommand::Help => return Ok(vec![USAGE.to_owned()]),
        CliCommand::Expand { options, patterns } => (options, patterns),
    };

    let config = options.resolve()?;
    let mut lines = Vec::new();
    for pattern in patterns {
        match expand_with(&CodeUnits::new(pattern), &config)? {
            RangeOutput::Text(text) => lines.push(text),
            RangeOutput::Sequence(chars) => {
                lines.extend(chars.into_iter().map(String::from));
            }
        }
    }
    Ok(lines)
}
