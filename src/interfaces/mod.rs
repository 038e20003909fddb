// ============================================================================
// Interfaces Module
// Trait seams between the codec and its output destinations
// ============================================================================

pub mod glyph_sink;

pub use glyph_sink::{FmtSink, GlyphSink, IoSink};
