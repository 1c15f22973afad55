//! Character range expansion.
//!
//! Expands compact range notation into the characters it denotes:
//!
//! ```
//! use rangex::{expand, ExpandOptions, OutputShape, RangeOutput};
//!
//! assert_eq!(expand("a-e", ExpandOptions::default()).map(RangeOutput::into_string), Ok("abcde".to_owned()));
//! assert_eq!(expand("9..7", "..").map(RangeOutput::into_string), Ok("987".to_owned()));
//! assert_eq!(
//!     expand("x-z", OutputShape::Sequence),
//!     Ok(RangeOutput::Sequence(vec!['x', 'y', 'z'])),
//! );
//! ```
//!
//! # Syntax
//!
//! - `a<sep>b`: every scalar value from `a` to `b`, ascending or descending,
//!   skipping the surrogate block. The separator defaults to `-`.
//! - `\c`: the character `c` verbatim (escapes the separator or a backslash).
//! - Anything else, including a leading or trailing separator and a trailing
//!   backslash, is literal text.
//!
//! Input is read as UTF-16 code units, so malformed text (lone surrogates)
//! is reported at the position it is read. See [`rangex_core`] for the
//! low-level primitives.

mod cli;
mod expand;
mod options;

pub use cli::{init_tracing, parse_args, run, CliCommand, USAGE};
pub use expand::{expand, expand_with};
pub use options::{ExpandConfig, ExpandOptions, DEFAULT_SEPARATOR};
pub use rangex_core::{
    char_at, generate_range, range_between, CodeUnits, ErrorKind, OutputShape, RangeError,
    RangeOutput, SurrogateHalf,
};
