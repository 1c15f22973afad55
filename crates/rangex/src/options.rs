//! Expansion options and their resolution.
//!
//! [`ExpandOptions`] is what callers build: every field has a default and
//! a bare separator string is accepted as shorthand. [`ExpandOptions::resolve`]
//! validates it once per call into an immutable [`ExpandConfig`], which is
//! the only form the engine reads.

use rangex_core::{CodeUnits, OutputShape, RangeError};

/// Separator used when the caller does not supply one.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Caller-facing expansion options.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExpandOptions {
    /// Token marking a range between the characters on either side.
    pub separator: String,
    /// Whether to return one string or a character sequence.
    pub shape: OutputShape,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_owned(),
            shape: OutputShape::default(),
        }
    }
}

impl ExpandOptions {
    /// Replace the separator token.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Replace the output shape.
    #[must_use]
    pub fn with_shape(mut self, shape: OutputShape) -> Self {
        self.shape = shape;
        self
    }

    /// Validate these options into an [`ExpandConfig`].
    ///
    /// # Errors
    ///
    /// [`RangeError::InvalidArgument`] if the separator is empty.
    pub fn resolve(&self) -> Result<ExpandConfig, RangeError> {
        if self.separator.is_empty() {
            tracing::debug!("rejected empty separator");
            return Err(RangeError::InvalidArgument {
                reason: "separator must be a non-empty string",
            });
        }
        Ok(ExpandConfig {
            separator: CodeUnits::new(&self.separator),
            shape: self.shape,
        })
    }
}

impl From<&str> for ExpandOptions {
    fn from(separator: &str) -> Self {
        Self::default().with_separator(separator)
    }
}

impl From<String> for ExpandOptions {
    fn from(separator: String) -> Self {
        Self::default().with_separator(separator)
    }
}

impl From<OutputShape> for ExpandOptions {
    fn from(shape: OutputShape) -> Self {
        Self::default().with_shape(shape)
    }
}

/// Validated, immutable configuration for one expansion.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExpandConfig {
    separator: CodeUnits,
    shape: OutputShape,
}

impl ExpandConfig {
    /// The separator as UTF-16 code units; never empty.
    pub fn separator(&self) -> &[u16] {
        self.separator.as_units()
    }

    /// The requested output shape.
    pub fn shape(&self) -> OutputShape {
        self.shape
    }
}
