//! Character range generation.
//!
//! A range is every scalar value between two endpoints, inclusive, in the
//! direction the endpoints are given. The surrogate block `0xD800..=0xDFFF`
//! holds no scalar values and is skipped: a span that straddles it is
//! emitted as two ascending segments, concatenated, and only then reversed
//! for descending ranges.

use crate::{scalar, CodeUnits, RangeError};

/// Result shape requested by the caller.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum OutputShape {
    /// One concatenated string.
    #[default]
    Text,
    /// The ordered sequence of individual characters.
    Sequence,
}

/// Expanded characters in the requested [`OutputShape`].
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum RangeOutput {
    /// Produced for [`OutputShape::Text`].
    Text(String),
    /// Produced for [`OutputShape::Sequence`].
    Sequence(Vec<char>),
}

impl RangeOutput {
    /// Finalize an accumulated character sequence into `shape`.
    pub fn from_chars(chars: Vec<char>, shape: OutputShape) -> Self {
        match shape {
            OutputShape::Text => RangeOutput::Text(chars.into_iter().collect()),
            OutputShape::Sequence => RangeOutput::Sequence(chars),
        }
    }

    /// Number of characters (not bytes or code units).
    pub fn len(&self) -> usize {
        match self {
            RangeOutput::Text(text) => text.chars().count(),
            RangeOutput::Sequence(chars) => chars.len(),
        }
    }

    /// Returns `true` if no characters were produced.
    pub fn is_empty(&self) -> bool {
        match self {
            RangeOutput::Text(text) => text.is_empty(),
            RangeOutput::Sequence(chars) => chars.is_empty(),
        }
    }

    /// The output as one string, regardless of shape.
    pub fn into_string(self) -> String {
        match self {
            RangeOutput::Text(text) => text,
            RangeOutput::Sequence(chars) => chars.into_iter().collect(),
        }
    }

    /// The output as a character sequence, regardless of shape.
    pub fn into_chars(self) -> Vec<char> {
        match self {
            RangeOutput::Text(text) => text.chars().collect(),
            RangeOutput::Sequence(chars) => chars,
        }
    }

    /// The output re-encoded as UTF-16 code units.
    pub fn to_utf16(&self) -> Vec<u16> {
        match self {
            RangeOutput::Text(text) => text.encode_utf16().collect(),
            RangeOutput::Sequence(chars) => chars.iter().collect::<String>().encode_utf16().collect(),
        }
    }
}

/// Every scalar value from `first` to `last` inclusive, in that direction.
///
/// `first == last` yields a single character.
pub fn range_between(first: char, last: char) -> Vec<char> {
    let first = u32::from(first);
    let last = u32::from(last);
    let reverse = first > last;
    let (min, max) = if reverse { (last, first) } else { (first, last) };

    // Either segment is empty when the span lies entirely on one side.
    let below = min..=max.min(u32::from(scalar::SURROGATES_BEGIN) - 1);
    let above = min.max(u32::from(scalar::SURROGATES_END) + 1)..=max;

    let mut chars: Vec<char> = below.chain(above).filter_map(char::from_u32).collect();
    if reverse {
        chars.reverse();
    }
    chars
}

/// Generate the range between two single-character strings.
///
/// # Errors
///
/// - [`RangeError::InvalidArgument`] if either endpoint is empty or holds
///   more than one character.
/// - [`RangeError::InvalidEncoding`] if an endpoint is a lone surrogate.
pub fn generate_range(
    first: impl Into<CodeUnits>,
    last: impl Into<CodeUnits>,
    shape: OutputShape,
) -> Result<RangeOutput, RangeError> {
    let first = single_char(
        &first.into(),
        "`first` must consist of a single character",
    )?;
    let last = single_char(&last.into(), "`last` must consist of a single character")?;
    Ok(RangeOutput::from_chars(range_between(first, last), shape))
}

/// Decode `units` as exactly one character occupying the whole string.
fn single_char(units: &CodeUnits, reason: &'static str) -> Result<char, RangeError> {
    match units.char_at(0)? {
        Some(ch) if ch.len_utf16() == units.len() => Ok(ch),
        _ => Err(RangeError::invalid_argument(reason)),
    }
}
