// ============================================================================
// Codec Module
// Conversion between u64 amounts and Chinese numeral text
// ============================================================================
//
// This module provides:
// - Glyph table: code point -> numeral value (canonical glyphs and synonyms)
// - Decoder: glyph stream -> amount, reporting bytes consumed
// - Encoder: amount -> place-value or digit-readout text
//
// The two directions are independent; the decoder accepts far more glyphs
// than the encoder ever writes.

mod decoder;
mod encoder;
pub mod glyph_table;

pub use decoder::{decode, decode_into, decode_str};
pub use encoder::{encode, encode_to_string};
pub use glyph_table::{is_numeral_glyph, lookup, NumeralValue, GLYPH_TABLE};
