// ============================================================================
// Glyph Sink Interface
// Destination contract for encoded numeral text
// ============================================================================

use crate::numeric::NumeralResult;
use std::fmt;
use std::io;

/// Receives encoded glyphs one at a time.
///
/// In-memory sinks never fail. Streaming sinks surface their write errors as
/// `NumeralError::WriteFailure`, which the encoder propagates immediately
/// without trying to recover partial output.
pub trait GlyphSink {
    /// Append one glyph
    fn put(&mut self, glyph: &str) -> NumeralResult<()>;
}

impl GlyphSink for String {
    #[inline]
    fn put(&mut self, glyph: &str) -> NumeralResult<()> {
        self.push_str(glyph);
        Ok(())
    }
}

impl GlyphSink for Vec<u8> {
    #[inline]
    fn put(&mut self, glyph: &str) -> NumeralResult<()> {
        self.extend_from_slice(glyph.as_bytes());
        Ok(())
    }
}

/// Adapter for any `fmt::Write` destination (e.g. a `Formatter`)
pub struct FmtSink<W>(pub W);

impl<W: fmt::Write> GlyphSink for FmtSink<W> {
    #[inline]
    fn put(&mut self, glyph: &str) -> NumeralResult<()> {
        self.0.write_str(glyph)?;
        Ok(())
    }
}

/// Adapter for any `io::Write` destination (files, sockets, buffers)
pub struct IoSink<W>(pub W);

impl<W: io::Write> GlyphSink for IoSink<W> {
    #[inline]
    fn put(&mut self, glyph: &str) -> NumeralResult<()> {
        self.0.write_all(glyph.as_bytes())?;
        Ok(())
    }
}
