//! Copyable scan cursor over UTF-16 code units.
//!
//! The cursor advances one scalar value at a time using [`char_at`], so a
//! read either yields a whole character (one or two code units) or fails
//! at the exact position of a lone surrogate. Positions are code-unit
//! offsets throughout.

use crate::scalar::char_at;
use crate::RangeError;

/// Scan position over a code-unit slice.
///
/// Created via [`CodeUnits::cursor()`](crate::CodeUnits::cursor). The cursor
/// is [`Copy`], so a snapshot is just a copy.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    units: &'a [u16],
    pos: usize,
}

/// &[u16] = 16 (fat pointer), usize = 8 => 24 bytes on 64-bit platforms.
const _: () = assert!(std::mem::size_of::<Cursor<'_>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `units`.
    pub fn new(units: &'a [u16]) -> Self {
        Self { units, pos: 0 }
    }

    /// Returns `true` once the cursor has consumed every code unit.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.units.len()
    }

    /// Code units not yet consumed.
    #[inline]
    pub fn remaining(&self) -> &'a [u16] {
        self.units.get(self.pos..).unwrap_or_default()
    }

    /// Read the character under the cursor and advance past it.
    ///
    /// Returns `Ok(None)` at EOF without moving.
    pub fn next_char(&mut self) -> Result<Option<char>, RangeError> {
        let ch = char_at(self.units, self.pos)?;
        if let Some(c) = ch {
            self.pos += c.len_utf16();
        }
        Ok(ch)
    }

    /// Returns `true` if the unconsumed input begins with `token`.
    #[inline]
    pub fn starts_with(&self, token: &[u16]) -> bool {
        self.remaining().starts_with(token)
    }

    /// Consume `token` if the unconsumed input begins with it.
    pub fn eat(&mut self, token: &[u16]) -> bool {
        if self.starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests;
