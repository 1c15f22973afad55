//! The expansion state machine.
//!
//! Scans the input left to right one scalar value at a time. At each
//! character `ch`:
//!
//! 1. `\` with input remaining: the next character is appended verbatim
//!    and the backslash is dropped.
//! 2. Separator next, with at least one code unit after it: `ch` and the
//!    character after the separator are range endpoints.
//! 3. Otherwise `ch` is literal.
//!
//! Escape detection wins over range detection, and a separator with
//! nothing after it (or nothing before it) is ordinary text.

use rangex_core::{range_between, CodeUnits, RangeError, RangeOutput};

use crate::options::{ExpandConfig, ExpandOptions};

const ESCAPE: char = '\\';

/// Expand range notation in `input`.
///
/// `options` accepts an [`ExpandOptions`], a bare separator string, or an
/// [`OutputShape`](rangex_core::OutputShape). `None::<&str>` as input
/// expands to an empty result.
///
/// # Errors
///
/// - [`RangeError::InvalidArgument`] if the separator is empty.
/// - [`RangeError::InvalidEncoding`] if the scan reads a lone surrogate.
pub fn expand(
    input: impl Into<CodeUnits>,
    options: impl Into<ExpandOptions>,
) -> Result<RangeOutput, RangeError> {
    let config = options.into().resolve()?;
    expand_with(&input.into(), &config)
}

/// Expand `input` against an already resolved configuration.
#[tracing::instrument(level = "trace", skip_all, fields(len = input.len()))]
pub fn expand_with(input: &CodeUnits, config: &ExpandConfig) -> Result<RangeOutput, RangeError> {
    let separator = config.separator();
    let mut cursor = input.cursor();
    let mut output = Vec::with_capacity(input.len());

    while let Some(ch) = cursor.next_char()? {
        if ch == ESCAPE && !cursor.is_eof() {
            if let Some(escaped) = cursor.next_char()? {
                output.push(escaped);
            }
            continue;
        }

        if cursor.remaining().len() > separator.len() && cursor.eat(separator) {
            if let Some(last) = cursor.next_char()? {
                let range = range_between(ch, last);
                tracing::trace!(first = ?ch, last = ?last, count = range.len(), "expanded range");
                output.extend(range);
            }
            continue;
        }

        output.push(ch);
    }

    Ok(RangeOutput::from_chars(output, config.shape()))
}
