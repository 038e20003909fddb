// ============================================================================
// Numeral Encoder
// Expands a u64 amount into place-value or digit-readout text
// ============================================================================

use crate::domain::format::FormatDescriptor;
use crate::interfaces::GlyphSink;
use crate::numeric::{Chinese, NumeralResult};

const TEN: u64 = 10;
const HUNDRED: u64 = 100;
const THOUSAND: u64 = 1_000;
const TEN_THOUSAND: u64 = 10_000;
const HUNDRED_MILLION: u64 = 100_000_000;

// ============================================================================
// Numeric Helpers
// ============================================================================

/// Number of decimal digits in `n`. Zero has none.
#[inline]
pub(crate) const fn digit_count(n: u64) -> u32 {
    match n.checked_ilog10() {
        Some(log) => log + 1,
        None => 0,
    }
}

/// Digit-count gap between a tier remainder and its last digit.
///
/// A non-zero gap means decimal positions were skipped after the unit glyph
/// and a single zero glyph is written for all of them.
#[inline]
pub(crate) const fn zero_gap(c: u64) -> u32 {
    digit_count(c).abs_diff(digit_count(c % 10))
}

// ============================================================================
// Encoding
// ============================================================================

/// Encode `amount` into `sink` using `format`.
///
/// # Errors
/// Only `WriteFailure`, raised by the sink.
pub fn encode<S: GlyphSink + ?Sized>(
    amount: Chinese,
    format: &FormatDescriptor,
    sink: &mut S,
) -> NumeralResult<()> {
    if format.is_digit_readout() {
        encode_digits(amount.value(), format, sink)
    } else {
        encode_place_value(amount.value(), format, sink)
    }
}

/// Encode `amount` into a fresh `String`.
///
/// # Example
/// ```
/// use chinese_numeral::codec::encode_to_string;
/// use chinese_numeral::domain::format::{DIGIT_READOUT, LOWER};
/// use chinese_numeral::numeric::Chinese;
///
/// assert_eq!(encode_to_string(Chinese::new(1001), &LOWER), "一千零一");
/// assert_eq!(encode_to_string(Chinese::new(2021), &DIGIT_READOUT), "二〇二一");
/// ```
pub fn encode_to_string(amount: Chinese, format: &FormatDescriptor) -> String {
    let mut out = String::new();
    let written = encode(amount, format, &mut out);
    debug_assert!(written.is_ok(), "String sink rejected a glyph");
    out
}

/// Each decimal digit in order, zeros included.
fn encode_digits<S: GlyphSink + ?Sized>(
    amount: u64,
    format: &FormatDescriptor,
    sink: &mut S,
) -> NumeralResult<()> {
    let length = amount.checked_ilog10().unwrap_or(0);
    let mut place = TEN.pow(length);
    while place != 0 {
        sink.put(format.digit(((amount / place) % 10) as usize))?;
        place /= 10;
    }
    Ok(())
}

/// Most significant tier first. Each tier encodes its quotient recursively,
/// writes the unit glyph and continues with the remainder. 10..19 keep their
/// leading 一 (一十一).
fn encode_place_value<S: GlyphSink + ?Sized>(
    mut c: u64,
    format: &FormatDescriptor,
    sink: &mut S,
) -> NumeralResult<()> {
    if c == 0 {
        return sink.put(format.zero());
    }

    let tens = format.tens_units();
    let big = format.big_units();

    while c != 0 {
        let (place, unit, collapse) = match c {
            HUNDRED_MILLION.. => (HUNDRED_MILLION, big[1], true),
            TEN_THOUSAND.. => (TEN_THOUSAND, big[0], true),
            THOUSAND.. => (THOUSAND, tens[2], true),
            HUNDRED.. => (HUNDRED, tens[1], true),
            TEN.. => (TEN, tens[0], false),
            _ => {
                sink.put(format.digit(c as usize))?;
                break;
            }
        };

        encode_place_value(c / place, format, sink)?;
        sink.put(unit)?;
        if collapse && zero_gap(c) != 0 {
            sink.put(format.zero())?;
        }
        c %= place;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::format::{DIGIT_READOUT, LOWER, UPPER};

    fn lower(n: u64) -> String {
        encode_to_string(Chinese::new(n), &LOWER)
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 0);
        assert_eq!(digit_count(7), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(999_999_999_999_999_999), 18);
        assert_eq!(digit_count(u64::MAX), 20);
    }

    #[test]
    fn test_zero_gap() {
        assert_eq!(zero_gap(5), 0);
        assert_eq!(zero_gap(1001), 3);
        assert_eq!(zero_gap(1100), 4);
    }

    #[test]
    fn test_zero() {
        assert_eq!(lower(0), "零");
        assert_eq!(encode_to_string(Chinese::ZERO, &UPPER), "零");
    }

    #[test]
    fn test_single_digits() {
        assert_eq!(lower(1), "一");
        assert_eq!(lower(9), "九");
    }

    #[test]
    fn test_teens_keep_leading_one() {
        assert_eq!(lower(10), "一十");
        assert_eq!(lower(11), "一十一");
        assert_eq!(lower(19), "一十九");
        assert_eq!(lower(20), "二十");
        assert_eq!(lower(99), "九十九");
    }

    #[test]
    fn test_zero_collapse() {
        assert_eq!(lower(1001), "一千零一");
        assert_eq!(lower(1010), "一千零一十");
        assert_eq!(lower(10001), "一万零一");
        assert_eq!(lower(100_000_001), "一亿零一");
        assert_eq!(lower(1001).matches('零').count(), 1);
    }

    #[test]
    fn test_zero_follows_each_collapsing_unit() {
        assert_eq!(lower(100), "一百零");
        assert_eq!(lower(123), "一百零二十三");
        assert_eq!(lower(1234), "一千零二百零三十四");
        assert_eq!(lower(20000), "二万零");
    }

    #[test]
    fn test_large_groups() {
        assert_eq!(lower(1_000_000_000_000), "一万零亿零");
        assert_eq!(lower(123_456_789), "一亿零二千零三百零四十五万零六千零七百零八十九");
    }

    #[test]
    fn test_upper() {
        assert_eq!(encode_to_string(Chinese::new(11), &UPPER), "壹拾壹");
        assert_eq!(encode_to_string(Chinese::new(1001), &UPPER), "壹仟零壹");
        assert_eq!(encode_to_string(Chinese::new(20001), &UPPER), "贰萬零壹");
    }

    #[test]
    fn test_digit_readout() {
        assert_eq!(encode_to_string(Chinese::new(2021), &DIGIT_READOUT), "二〇二一");
        assert_eq!(encode_to_string(Chinese::new(0), &DIGIT_READOUT), "〇");
        assert_eq!(encode_to_string(Chinese::new(1000), &DIGIT_READOUT), "一〇〇〇");
        assert_eq!(
            encode_to_string(Chinese::MAX, &DIGIT_READOUT),
            "一八四四六七四四〇七三七〇九五五一六一五"
        );
    }

    #[test]
    fn test_encode_to_string_matches_sink_output() {
        for n in [0, 11, 1001, 20001, u64::MAX] {
            let mut sink = String::new();
            encode(Chinese::new(n), &UPPER, &mut sink).unwrap();
            assert_eq!(encode_to_string(Chinese::new(n), &UPPER), sink);
        }
    }

    #[test]
    fn test_digit_readout_near_powers_of_ten() {
        let nines = 999_999_999_999_999_999;
        assert_eq!(
            encode_to_string(Chinese::new(nines), &DIGIT_READOUT),
            "九".repeat(18)
        );
    }
}
