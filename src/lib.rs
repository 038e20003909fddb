// ============================================================================
// Chinese Numeral Library
// Encode and decode u64 amounts as Chinese numeral text
// ============================================================================

//! # Chinese Numeral
//!
//! Conversion between a wrapping `u64` amount and Chinese numeral text.
//!
//! ## Features
//!
//! - **Three output styles**: everyday lower (一千零一), financial upper
//!   (壹仟零壹) and digit readout for years and serial numbers (二〇二一)
//! - **Lenient decoding**: both glyph sets, full-width and ASCII digits, and the
//!   colloquial 幺 两 兩 卄 廿 卅 卌
//! - **Embedded numerals**: decoding stops at the first unknown glyph and
//!   reports how many bytes it consumed
//! - **Wraparound arithmetic**: amounts reduce modulo 2^64, never overflow
//!
//! ## Example
//!
//! ```rust
//! use chinese_numeral::prelude::*;
//!
//! let amount = Chinese::new(1001);
//! assert_eq!(amount.to_string(), "一千零一");
//! assert_eq!(amount.encode_to_string(&UPPER).unwrap(), "壹仟零壹");
//!
//! let year = Chinese::new(2021);
//! assert_eq!(year.encode_to_string(NumeralStyle::DigitReadout.descriptor()).unwrap(), "二〇二一");
//!
//! // Numerals embedded in text
//! let (weight, consumed) = Chinese::decode_str("两万零一斤");
//! assert_eq!(weight.value(), 20001);
//! assert_eq!(consumed, "两万零一".len());
//! ```

pub mod codec;
pub mod domain;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::codec::{decode, decode_into, decode_str, encode, encode_to_string};
    pub use crate::domain::{FormatDescriptor, NumeralStyle, DIGIT_READOUT, LOWER, UPPER};
    pub use crate::interfaces::{FmtSink, GlyphSink, IoSink};
    pub use crate::numeric::{Chinese, NumeralError, NumeralResult, ParseChineseError};
}
