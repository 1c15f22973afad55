//! Error types shared by scalar reading, range generation and expansion.
//!
//! Every failure aborts the whole call; there is no partial output and no
//! recovery. Past-the-end reads are not errors (they yield `None`).

use std::fmt;

/// Which half of a surrogate pair was found on its own.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SurrogateHalf {
    /// A code unit in `0xD800..=0xDBFF` not followed by a low surrogate.
    High,
    /// A code unit in `0xDC00..=0xDFFF` not preceded by a high surrogate.
    Low,
}

impl fmt::Display for SurrogateHalf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurrogateHalf::High => f.write_str("high"),
            SurrogateHalf::Low => f.write_str("low"),
        }
    }
}

/// Error raised by any rangex operation.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum RangeError {
    /// A caller-supplied value is missing, empty, or has the wrong shape.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },

    /// An isolated surrogate was accessed as a character boundary.
    #[error("invalid UTF-16: lone {surrogate} surrogate at code unit {index}")]
    InvalidEncoding {
        index: usize,
        surrogate: SurrogateHalf,
    },

    /// The requested index is the second half of a valid surrogate pair.
    #[error("index {index} points inside a surrogate pair")]
    MalformedIndex { index: usize },
}

/// Fieldless category of a [`RangeError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// See [`RangeError::InvalidArgument`].
    InvalidArgument,
    /// See [`RangeError::InvalidEncoding`].
    InvalidEncoding,
    /// See [`RangeError::MalformedIndex`].
    MalformedIndex,
}

impl RangeError {
    pub(crate) fn invalid_argument(reason: &'static str) -> Self {
        RangeError::InvalidArgument { reason }
    }

    pub(crate) fn lone_surrogate(index: usize, surrogate: SurrogateHalf) -> Self {
        RangeError::InvalidEncoding { index, surrogate }
    }

    /// The category of this error, without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RangeError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            RangeError::InvalidEncoding { .. } => ErrorKind::InvalidEncoding,
            RangeError::MalformedIndex { .. } => ErrorKind::MalformedIndex,
        }
    }
}
