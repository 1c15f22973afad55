//! Low-level building blocks for character range expansion.
//!
//! This crate is standalone: it knows nothing about separators, escapes
//! or option handling. It provides:
//! - [`CodeUnits`]: an owned UTF-16 code-unit string that may carry lone surrogates
//! - [`Cursor`]: a copyable scan position over code units, advancing one scalar at a time
//! - [`char_at`]: surrogate-aware extraction of one scalar value at a code-unit index
//! - [`generate_range`] / [`range_between`]: enumeration of the scalar values
//!   between two endpoints, skipping the surrogate block
//!
//! # Encoding Model
//!
//! Input is held as 16-bit code units rather than `&str` so that malformed
//! text (isolated surrogates) can be represented and rejected at the exact
//! position it is accessed. Output is always well-formed and is produced as
//! `char`s.

mod code_units;
mod cursor;
mod error;
mod range;
mod scalar;

pub use code_units::CodeUnits;
pub use cursor::Cursor;
pub use error::{ErrorKind, RangeError, SurrogateHalf};
pub use range::{generate_range, range_between, OutputShape, RangeOutput};
pub use scalar::{
    char_at, is_high_surrogate, is_low_surrogate, HIGH_SURROGATES_BEGIN, HIGH_SURROGATES_END,
    LOW_SURROGATES_BEGIN, LOW_SURROGATES_END, SURROGATES_BEGIN, SURROGATES_END,
};
