// ============================================================================
// Numeral Decoder
// Folds a run of numeral glyphs into a wrapping u64 amount
// ============================================================================

use super::glyph_table::{lookup, NumeralValue};
use crate::numeric::{Chinese, NumeralError, NumeralResult};

const TEN_THOUSAND: u64 = NumeralValue::TEN_THOUSAND.get();
const HUNDRED_MILLION: u64 = NumeralValue::HUNDRED_MILLION.get();

/// Running state of a decode.
///
/// - `tmp`: digits seen since the last unit glyph
/// - `result`: total of the current ten-thousand group
/// - `mln`: total of everything already scaled by 亿
///
/// All arithmetic wraps modulo 2^64.
#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    tmp: u64,
    result: u64,
    mln: u64,
}

impl Accumulator {
    #[inline]
    fn push(&mut self, value: NumeralValue) {
        let curr = value.get();
        match curr {
            HUNDRED_MILLION => {
                self.mln = self
                    .mln
                    .wrapping_add(self.result)
                    .wrapping_add(self.tmp)
                    .wrapping_mul(curr);
                self.result = 0;
                self.tmp = 0;
            }
            TEN_THOUSAND => {
                self.result = self.result.wrapping_add(self.tmp).wrapping_mul(curr);
                self.tmp = 0;
            }
            0..=9 => {
                self.tmp = self.tmp.wrapping_mul(10).wrapping_add(curr);
            }
            // 十 百 千 and the 廿 卅 卌 synonyms scale the pending digits
            _ => {
                let scaled = if self.tmp != 0 {
                    curr.wrapping_mul(self.tmp)
                } else {
                    curr
                };
                self.result = self.result.wrapping_add(scaled);
                self.tmp = 0;
            }
        }
    }

    #[inline]
    fn total(&self) -> u64 {
        self.result.wrapping_add(self.tmp).wrapping_add(self.mln)
    }
}

/// Decode the numeral at the start of `input`.
///
/// Returns the amount and the number of bytes recognized. Decoding stops at
/// the first code point outside the glyph table, at invalid UTF-8, or at the
/// end of input. Stopping early is not an error; callers that need the whole
/// input to be a numeral compare the returned length with `input.len()`.
///
/// # Example
/// ```
/// use chinese_numeral::codec::decode;
///
/// let (amount, consumed) = decode("一百斤".as_bytes());
/// assert_eq!(amount.value(), 100);
/// assert_eq!(consumed, "一百".len());
/// ```
pub fn decode(input: &[u8]) -> (Chinese, usize) {
    let text = match std::str::from_utf8(input) {
        Ok(text) => text,
        Err(err) => std::str::from_utf8(&input[..err.valid_up_to()]).unwrap_or_default(),
    };

    let mut acc = Accumulator::default();
    let mut consumed = 0;
    for ch in text.chars() {
        let Some(value) = lookup(ch) else {
            break;
        };
        acc.push(value);
        consumed += ch.len_utf8();
    }

    if consumed < input.len() {
        tracing::trace!(
            consumed,
            len = input.len(),
            "numeral decode stopped before end of input"
        );
    }

    (Chinese::new(acc.total()), consumed)
}

/// Decode the numeral at the start of `s`.
#[inline]
pub fn decode_str(s: &str) -> (Chinese, usize) {
    decode(s.as_bytes())
}

/// Decode into a caller-provided destination.
///
/// # Errors
/// Returns `InvalidTarget` without reading `input` when `target` is absent.
pub fn decode_into(target: Option<&mut Chinese>, input: &[u8]) -> NumeralResult<usize> {
    let Some(target) = target else {
        tracing::trace!("numeral decode rejected: no destination");
        return Err(NumeralError::InvalidTarget);
    };
    let (amount, consumed) = decode(input);
    *target = amount;
    Ok(consumed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(s: &str) -> u64 {
        decode_str(s).0.value()
    }

    #[test]
    fn test_place_value() {
        assert_eq!(value("零"), 0);
        assert_eq!(value("一十一"), 11);
        assert_eq!(value("十一"), 11);
        assert_eq!(value("三十"), 30);
        assert_eq!(value("一千零一"), 1001);
        assert_eq!(value("一千零二百零三十四"), 1234);
        assert_eq!(value("一千二百三十四"), 1234);
        assert_eq!(value("一亿零二万"), 100_020_000);
    }

    #[test]
    fn test_upper_glyphs() {
        assert_eq!(value("壹萬贰仟叁佰肆拾伍"), 12345);
        assert_eq!(value("玖億"), 900_000_000);
    }

    #[test]
    fn test_synonyms() {
        assert_eq!(value("两万零一"), 20001);
        assert_eq!(value("兩百"), 200);
        assert_eq!(value("廿一"), 21);
        assert_eq!(value("卄"), 20);
        assert_eq!(value("卅五"), 35);
        assert_eq!(value("卌"), 40);
        assert_eq!(value("幺幺零"), 110);
    }

    #[test]
    fn test_digit_sequences() {
        assert_eq!(value("二〇二一"), 2021);
        assert_eq!(value("２３"), 23);
        assert_eq!(value("42"), 42);
        assert_eq!(value("１9九"), 199);
    }

    #[test]
    fn test_nested_hundred_million() {
        // 一万亿 = 10^12
        assert_eq!(value("一万亿"), 1_000_000_000_000);
        assert_eq!(value("一万零亿"), 1_000_000_000_000);
        assert_eq!(value("三亿零五万六千"), 300_056_000);
    }

    #[test]
    fn test_partial_consumption() {
        let input = "一百斤";
        let (amount, consumed) = decode_str(input);
        assert_eq!(amount.value(), 100);
        assert_eq!(consumed, 6);
        assert!(consumed < input.len());
    }

    #[test]
    fn test_no_numeral() {
        assert_eq!(decode_str(""), (Chinese::ZERO, 0));
        assert_eq!(decode_str("斤"), (Chinese::ZERO, 0));
    }

    #[test]
    fn test_invalid_utf8_stops_decoding() {
        let mut input = "三十".as_bytes().to_vec();
        input.push(0xFF);
        input.extend_from_slice("五".as_bytes());
        let (amount, consumed) = decode(&input);
        assert_eq!(amount.value(), 30);
        assert_eq!(consumed, 6);
    }

    #[test]
    fn test_wraparound() {
        // 2^64 + 1 wraps to 1
        assert_eq!(value("18446744073709551617"), 1);
        // Digit accumulation never panics on long runs
        let _ = value(&"九".repeat(64));
    }

    #[test]
    fn test_decode_into() {
        let mut target = Chinese::new(7);
        assert_eq!(decode_into(Some(&mut target), "廿一日".as_bytes()), Ok(6));
        assert_eq!(target.value(), 21);
    }

    #[test]
    fn test_decode_into_absent_target() {
        assert_eq!(
            decode_into(None, "一".as_bytes()),
            Err(NumeralError::InvalidTarget)
        );
    }
}
