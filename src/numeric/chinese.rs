// ============================================================================
// Chinese Amount
// Wrapping u64 amount with Chinese numeral text conversions
// ============================================================================

use super::errors::{NumeralResult, ParseChineseError};
use crate::codec;
use crate::domain::format::{FormatDescriptor, LOWER};
use crate::interfaces::{FmtSink, IoSink};
use std::fmt;
use std::io;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

/// An amount rendered as, or read from, Chinese numerals.
///
/// Backed by a `u64`. All arithmetic wraps modulo 2^64; there is no overflow
/// state, so `x + (0 - x)` is always zero.
///
/// # Example
/// ```
/// use chinese_numeral::domain::format::UPPER;
/// use chinese_numeral::numeric::Chinese;
///
/// let amount = Chinese::new(20001);
/// assert_eq!(amount.to_string(), "二万零一");
/// assert_eq!(amount.encode_to_string(&UPPER).unwrap(), "贰萬零壹");
///
/// let (parsed, consumed) = Chinese::decode_str("两万零一元");
/// assert_eq!(parsed, amount);
/// assert_eq!(consumed, "两万零一".len());
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Chinese(u64);

impl Chinese {
    /// Zero value
    pub const ZERO: Self = Self(0);

    /// Largest representable amount (2^64 - 1)
    pub const MAX: Self = Self(u64::MAX);

    // ========================================================================
    // Construction
    // ========================================================================

    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Decode the numeral at the start of `input`.
    ///
    /// Returns the amount and the bytes consumed; see [`codec::decode`].
    #[inline]
    pub fn decode(input: &[u8]) -> (Self, usize) {
        codec::decode(input)
    }

    /// Decode the numeral at the start of `s`.
    #[inline]
    pub fn decode_str(s: &str) -> (Self, usize) {
        codec::decode(s.as_bytes())
    }

    /// Replace this amount with the numeral at the start of `input`.
    ///
    /// Returns the bytes consumed.
    pub fn decode_from(&mut self, input: &[u8]) -> usize {
        let (amount, consumed) = codec::decode(input);
        *self = amount;
        consumed
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    // ========================================================================
    // Encoding
    // ========================================================================

    /// Encode as UTF-8 bytes.
    pub fn encode(self, format: &FormatDescriptor) -> NumeralResult<Vec<u8>> {
        let mut out = Vec::new();
        codec::encode(self, format, &mut out)?;
        Ok(out)
    }

    /// Encode as a `String`.
    pub fn encode_to_string(self, format: &FormatDescriptor) -> NumeralResult<String> {
        let mut out = String::new();
        codec::encode(self, format, &mut out)?;
        Ok(out)
    }

    /// Stream the glyphs into a `fmt::Write` destination.
    ///
    /// # Errors
    /// `WriteFailure` if the writer rejects a glyph.
    pub fn encode_to_writer<W: fmt::Write>(
        self,
        writer: &mut W,
        format: &FormatDescriptor,
    ) -> NumeralResult<()> {
        codec::encode(self, format, &mut FmtSink(writer))
    }

    /// Stream the glyphs into an `io::Write` destination.
    ///
    /// # Errors
    /// `WriteFailure` carrying the writer's error kind.
    pub fn encode_to_io<W: io::Write>(
        self,
        writer: W,
        format: &FormatDescriptor,
    ) -> NumeralResult<()> {
        codec::encode(self, format, &mut IoSink(writer))
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<u64> for Chinese {
    #[inline]
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Chinese> for u64 {
    #[inline]
    fn from(amount: Chinese) -> Self {
        amount.0
    }
}

// ============================================================================
// Wrapping Arithmetic
// ============================================================================

impl Add for Chinese {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Chinese {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl Mul for Chinese {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_mul(rhs.0))
    }
}

impl AddAssign for Chinese {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Chinese {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Chinese {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Chinese {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chinese({})", self.0)
    }
}

impl fmt::Display for Chinese {
    /// Renders with the everyday [`LOWER`] glyphs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.encode_to_string(&LOWER) {
            Ok(text) => f.pad(&text),
            Err(err) => {
                tracing::warn!(value = self.0, %err, "numeral encode failed, using decimal form");
                write!(f, "Chinese({})", self.0)
            }
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Chinese {
    type Err = ParseChineseError;

    /// Parse a string that is entirely one numeral.
    ///
    /// Surrounding whitespace is ignored. Any other unrecognized glyph, or an
    /// empty string, is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (amount, consumed) = Self::decode_str(s);
        if s.is_empty() || consumed != s.len() {
            return Err(ParseChineseError::new(consumed, s.len()));
        }
        Ok(amount)
    }
}

// ============================================================================
// Serde (as text)
// ============================================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Chinese;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Chinese {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    struct ChineseVisitor;

    impl Visitor<'_> for ChineseVisitor {
        type Value = Chinese;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a Chinese numeral string or an unsigned integer")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Chinese, E> {
            v.parse().map_err(E::custom)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Chinese, E> {
            Ok(Chinese::new(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Chinese, E> {
            u64::try_from(v)
                .map(Chinese::new)
                .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
        }
    }

    impl<'de> Deserialize<'de> for Chinese {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(ChineseVisitor)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::format::{DIGIT_READOUT, UPPER};
    use crate::numeric::NumeralError;

    struct BrokenPipe;

    impl io::Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_constants() {
        assert_eq!(Chinese::ZERO.value(), 0);
        assert_eq!(Chinese::MAX.value(), u64::MAX);
        assert!(Chinese::default().is_zero());
    }

    #[test]
    fn test_display_uses_lower() {
        assert_eq!(Chinese::new(0).to_string(), "零");
        assert_eq!(Chinese::new(11).to_string(), "一十一");
        assert_eq!(Chinese::new(1001).to_string(), "一千零一");
    }

    #[test]
    fn test_display_padding() {
        assert_eq!(format!("[{:>3}]", Chinese::new(3)), "[  三]");
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Chinese::new(2021)), "Chinese(2021)");
    }

    #[test]
    fn test_encode_formats() {
        let year = Chinese::new(2021);
        assert_eq!(year.encode_to_string(&DIGIT_READOUT).unwrap(), "二〇二一");
        assert_eq!(year.encode(&UPPER).unwrap(), "贰仟零贰拾壹".as_bytes());
    }

    #[test]
    fn test_encode_to_writer() {
        let mut out = String::from("金额：");
        Chinese::new(10).encode_to_writer(&mut out, &UPPER).unwrap();
        assert_eq!(out, "金额：壹拾");
    }

    #[test]
    fn test_encode_to_io() {
        let mut buf = Vec::new();
        Chinese::new(30).encode_to_io(&mut buf, &LOWER).unwrap();
        assert_eq!(buf, "三十".as_bytes());
    }

    #[test]
    fn test_encode_to_io_failure() {
        assert_eq!(
            Chinese::new(5).encode_to_io(BrokenPipe, &LOWER),
            Err(NumeralError::WriteFailure(io::ErrorKind::BrokenPipe))
        );
    }

    #[test]
    fn test_decode_from() {
        let mut amount = Chinese::new(99);
        let consumed = amount.decode_from("卅五号".as_bytes());
        assert_eq!(consumed, 6);
        assert_eq!(amount.value(), 35);
    }

    #[test]
    fn test_wrapping_arithmetic() {
        let x = Chinese::new(123_456);
        let wrapped = x + (Chinese::ZERO - x);
        assert!(wrapped.is_zero());
        assert_eq!(wrapped.to_string(), "零");

        assert_eq!(Chinese::MAX + Chinese::new(1), Chinese::ZERO);
        assert_eq!(Chinese::MAX * Chinese::new(2), Chinese::new(u64::MAX - 1));

        let mut acc = Chinese::new(5);
        acc += Chinese::new(5);
        acc *= Chinese::new(3);
        acc -= Chinese::new(31);
        assert_eq!(acc, Chinese::MAX);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("一千零一".parse::<Chinese>(), Ok(Chinese::new(1001)));
        assert_eq!(" 廿一 ".parse::<Chinese>(), Ok(Chinese::new(21)));
        assert_eq!("２３".parse::<Chinese>(), Ok(Chinese::new(23)));
    }

    #[test]
    fn test_from_str_invalid() {
        let err = "一百斤".parse::<Chinese>().unwrap_err();
        assert_eq!(err.consumed(), 6);
        assert_eq!(err.input_len(), 9);

        assert!("".parse::<Chinese>().unwrap_err().is_empty_input());
        assert!("斤".parse::<Chinese>().is_err());
    }

    #[test]
    fn test_conversions() {
        let amount: Chinese = 42u64.into();
        assert_eq!(u64::from(amount), 42);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Chinese::new(1001)).unwrap();
        assert_eq!(json, "\"一千零一\"");

        let back: Chinese = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Chinese::new(1001));

        let from_int: Chinese = serde_json::from_str("2021").unwrap();
        assert_eq!(from_int.value(), 2021);

        assert!(serde_json::from_str::<Chinese>("\"一百斤\"").is_err());
        assert!(serde_json::from_str::<Chinese>("-1").is_err());
    }
}
