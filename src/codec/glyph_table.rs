// ============================================================================
// Glyph Table
// Many-to-one mapping from numeral code points to their values
// ============================================================================

use std::collections::HashMap;
use std::sync::LazyLock;

/// The value carried by a single numeral glyph.
///
/// Either a digit (0-9), a unit multiplier (10, 100, 1,000, 10,000,
/// 100,000,000) or one of the colloquial tens synonyms (20, 30, 40).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NumeralValue(u64);

impl NumeralValue {
    pub const TEN: Self = Self(10);
    pub const HUNDRED: Self = Self(100);
    pub const THOUSAND: Self = Self(1_000);
    pub const TEN_THOUSAND: Self = Self(10_000);
    pub const HUNDRED_MILLION: Self = Self(100_000_000);

    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_digit(self) -> bool {
        self.0 < 10
    }
}

const fn d(value: u64) -> NumeralValue {
    NumeralValue(value)
}

/// Every recognized glyph with its value
#[rustfmt::skip]
pub static GLYPH_TABLE: [(char, NumeralValue); 57] = [
    // Lower digits
    ('〇', d(0)), ('一', d(1)), ('二', d(2)), ('三', d(3)), ('四', d(4)),
    ('五', d(5)), ('六', d(6)), ('七', d(7)), ('八', d(8)), ('九', d(9)),
    // Upper (financial) digits
    ('零', d(0)), ('壹', d(1)), ('贰', d(2)), ('叁', d(3)), ('肆', d(4)),
    ('伍', d(5)), ('陆', d(6)), ('柒', d(7)), ('捌', d(8)), ('玖', d(9)),
    // Full-width Arabic digits
    ('０', d(0)), ('１', d(1)), ('２', d(2)), ('３', d(3)), ('４', d(4)),
    ('５', d(5)), ('６', d(6)), ('７', d(7)), ('８', d(8)), ('９', d(9)),
    // ASCII digits
    ('0', d(0)), ('1', d(1)), ('2', d(2)), ('3', d(3)), ('4', d(4)),
    ('5', d(5)), ('6', d(6)), ('7', d(7)), ('8', d(8)), ('9', d(9)),
    // Lower units
    ('十', NumeralValue::TEN),
    ('百', NumeralValue::HUNDRED),
    ('千', NumeralValue::THOUSAND),
    ('万', NumeralValue::TEN_THOUSAND),
    ('亿', NumeralValue::HUNDRED_MILLION),
    // Upper units
    ('拾', NumeralValue::TEN),
    ('佰', NumeralValue::HUNDRED),
    ('仟', NumeralValue::THOUSAND),
    ('萬', NumeralValue::TEN_THOUSAND),
    ('億', NumeralValue::HUNDRED_MILLION),
    // Colloquial synonyms
    ('幺', d(1)),
    ('两', d(2)), ('兩', d(2)),
    ('卄', NumeralValue(20)), ('廿', NumeralValue(20)),
    ('卅', NumeralValue(30)),
    ('卌', NumeralValue(40)),
];

static INDEX: LazyLock<HashMap<char, NumeralValue>> =
    LazyLock::new(|| GLYPH_TABLE.iter().copied().collect());

/// Look up the value of a glyph. Unknown code points yield `None`.
#[inline]
pub fn lookup(ch: char) -> Option<NumeralValue> {
    INDEX.get(&ch).copied()
}

/// Whether `ch` is recognized by the decoder.
#[inline]
pub fn is_numeral_glyph(ch: char) -> bool {
    INDEX.contains_key(&ch)
}
