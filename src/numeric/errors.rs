// ============================================================================
// Numeral Errors
// Error types for the Chinese numeral codec
// ============================================================================

use std::fmt;
use std::io;

/// Errors that can occur while encoding or decoding Chinese numerals.
///
/// Unrecognized input is not an error: decoding stops at the first glyph
/// outside the table and reports how many bytes it consumed. Overflow is not
/// an error either; amounts wrap modulo 2^64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralError {
    /// Decode was asked to write into an absent destination
    InvalidTarget,
    /// The output sink rejected a write
    WriteFailure(io::ErrorKind),
}

impl fmt::Display for NumeralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralError::InvalidTarget => {
                write!(f, "invalid target: Chinese numeral decode on absent destination")
            },
            NumeralError::WriteFailure(kind) => {
                write!(f, "write failure: could not emit numeral glyph ({})", kind)
            },
        }
    }
}

impl std::error::Error for NumeralError {}

impl From<fmt::Error> for NumeralError {
    fn from(_: fmt::Error) -> Self {
        NumeralError::WriteFailure(io::ErrorKind::Other)
    }
}

impl From<io::Error> for NumeralError {
    fn from(err: io::Error) -> Self {
        NumeralError::WriteFailure(err.kind())
    }
}

/// Result type alias for numeral operations
pub type NumeralResult<T> = Result<T, NumeralError>;

/// Error returned by the strict `FromStr` parse of [`Chinese`](super::Chinese).
///
/// Carries the number of bytes the decoder recognized before it stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseChineseError {
    consumed: usize,
    len: usize,
}

impl ParseChineseError {
    pub(crate) fn new(consumed: usize, len: usize) -> Self {
        Self { consumed, len }
    }

    /// Bytes recognized as numeral glyphs before decoding stopped.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Length of the rejected input in bytes.
    pub fn input_len(&self) -> usize {
        self.len
    }

    /// True when the input held no bytes at all.
    pub fn is_empty_input(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for ParseChineseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len == 0 {
            write!(f, "cannot parse Chinese numeral from empty string")
        } else {
            write!(
                f,
                "invalid Chinese numeral: unrecognized glyph at byte {} of {}",
                self.consumed, self.len
            )
        }
    }
}

impl std::error::Error for ParseChineseError {}
