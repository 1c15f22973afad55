//! Owned UTF-16 code-unit string.
//!
//! Callers usually hold text as `&str`, which cannot contain lone
//! surrogates. The expansion algorithms, however, are defined over 16-bit
//! code units and must reject malformed text where it is read. `CodeUnits`
//! bridges the two: it is built from well-formed Rust strings or from raw
//! code units, and is the input type of every public operation.
//!
//! # Absent Input
//!
//! `Option<&str>` converts with `None` mapping to the empty string, so an
//! absent input expands to an empty result instead of failing.

use crate::{scalar, Cursor, RangeError};

/// Owned sequence of UTF-16 code units, possibly containing lone surrogates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CodeUnits {
    units: Vec<u16>,
}

impl CodeUnits {
    /// Encode a well-formed string as UTF-16.
    pub fn new(source: &str) -> Self {
        Self {
            units: source.encode_utf16().collect(),
        }
    }

    /// Wrap raw code units without validating them.
    ///
    /// Lone surrogates are allowed here and reported only when a read
    /// lands on them.
    pub fn from_units(units: impl Into<Vec<u16>>) -> Self {
        Self {
            units: units.into(),
        }
    }

    /// The raw code units.
    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    /// Length in code units (not characters).
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` if there are no code units.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Read the character starting at code-unit `index`. See [`scalar::char_at`].
    pub fn char_at(&self, index: usize) -> Result<Option<char>, RangeError> {
        scalar::char_at(&self.units, index)
    }

    /// Create a [`Cursor`] positioned at code unit 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.units)
    }
}

impl From<&str> for CodeUnits {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<&String> for CodeUnits {
    fn from(source: &String) -> Self {
        Self::new(source)
    }
}

impl From<String> for CodeUnits {
    fn from(source: String) -> Self {
        Self::new(&source)
    }
}

impl From<char> for CodeUnits {
    fn from(ch: char) -> Self {
        let mut buf = [0u16; 2];
        Self::from_units(ch.encode_utf16(&mut buf).to_vec())
    }
}

impl From<Option<&str>> for CodeUnits {
    fn from(source: Option<&str>) -> Self {
        source.map(Self::new).unwrap_or_default()
    }
}

impl From<&[u16]> for CodeUnits {
    fn from(units: &[u16]) -> Self {
        Self::from_units(units)
    }
}

impl<const N: usize> From<[u16; N]> for CodeUnits {
    fn from(units: [u16; N]) -> Self {
        Self::from_units(units)
    }
}

impl From<Vec<u16>> for CodeUnits {
    fn from(units: Vec<u16>) -> Self {
        Self::from_units(units)
    }
}

impl AsRef<[u16]> for CodeUnits {
    fn as_ref(&self) -> &[u16] {
        &self.units
    }
}
