//! Surrogate-aware scalar extraction from UTF-16 code units.
//!
//! [`char_at`] is the single character-boundary primitive the rest of the
//! workspace is built on. It never decodes through a runtime string
//! iterator: every surrogate decision is an explicit numeric range check,
//! so lone surrogates and mid-pair indices are reported precisely.

use crate::error::{RangeError, SurrogateHalf};

/// First code unit of the high (leading) surrogate sub-range.
pub const HIGH_SURROGATES_BEGIN: u16 = 0xD800;
/// Last code unit of the high (leading) surrogate sub-range.
pub const HIGH_SURROGATES_END: u16 = 0xDBFF;
/// First code unit of the low (trailing) surrogate sub-range.
pub const LOW_SURROGATES_BEGIN: u16 = 0xDC00;
/// Last code unit of the low (trailing) surrogate sub-range.
pub const LOW_SURROGATES_END: u16 = 0xDFFF;
/// First value of the whole surrogate block.
pub const SURROGATES_BEGIN: u16 = HIGH_SURROGATES_BEGIN;
/// Last value of the whole surrogate block.
pub const SURROGATES_END: u16 = LOW_SURROGATES_END;

/// Returns `true` if `unit` is a high (leading) surrogate.
#[inline]
pub fn is_high_surrogate(unit: u16) -> bool {
    (HIGH_SURROGATES_BEGIN..=HIGH_SURROGATES_END).contains(&unit)
}

/// Returns `true` if `unit` is a low (trailing) surrogate.
#[inline]
pub fn is_low_surrogate(unit: u16) -> bool {
    (LOW_SURROGATES_BEGIN..=LOW_SURROGATES_END).contains(&unit)
}

/// Combine a valid high/low pair into its scalar value.
///
/// The result lies in `0x1_0000..=0x10_FFFF`, which is always a scalar.
#[inline]
fn combine_pair(high: u16, low: u16) -> char {
    let hi = u32::from(high - HIGH_SURROGATES_BEGIN);
    let lo = u32::from(low - LOW_SURROGATES_BEGIN);
    char::from_u32(0x1_0000 + ((hi << 10) | lo)).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Convert a non-surrogate code unit into its BMP scalar.
#[inline]
fn bmp_char(unit: u16) -> char {
    char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Read the scalar value starting at code-unit `index`.
///
/// Returns `Ok(None)` when `index` is at or past the end of `units`. On
/// success, `ch.len_utf16()` (1 or 2) is the number of code units the
/// caller should advance.
///
/// # Errors
///
/// - [`RangeError::MalformedIndex`] if `index` is the low half of a valid pair.
/// - [`RangeError::InvalidEncoding`] if the unit at `index` is a lone
///   surrogate (a low surrogate with no high before it, or a high surrogate
///   not followed by a low one).
pub fn char_at(units: &[u16], index: usize) -> Result<Option<char>, RangeError> {
    let Some(&unit) = units.get(index) else {
        return Ok(None);
    };

    if is_low_surrogate(unit) {
        let after_high = index
            .checked_sub(1)
            .and_then(|prev| units.get(prev))
            .is_some_and(|&prev| is_high_surrogate(prev));
        return Err(if after_high {
            RangeError::MalformedIndex { index }
        } else {
            RangeError::lone_surrogate(index, SurrogateHalf::Low)
        });
    }

    if is_high_surrogate(unit) {
        return match units.get(index + 1) {
            Some(&next) if is_low_surrogate(next) => Ok(Some(combine_pair(unit, next))),
            _ => Err(RangeError::lone_surrogate(index, SurrogateHalf::High)),
        };
    }

    Ok(Some(bmp_char(unit)))
}
