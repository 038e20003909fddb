// ============================================================================
// Format Descriptors
// Glyph tables selecting how an amount is rendered as text
// ============================================================================

/// Describes one textual style of Chinese numerals.
///
/// A descriptor is either place-value (digits interleaved with unit glyphs,
/// e.g. "一千零一") or digit-readout (every decimal digit spelled out, e.g.
/// "二〇二一"). Unit tables are ignored in digit-readout mode.
///
/// The standard instances are [`LOWER`], [`UPPER`] and [`DIGIT_READOUT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatDescriptor {
    /// Spell each digit instead of using place-value units
    digit_readout: bool,

    /// Glyphs for 0 through 9
    basic: [&'static str; 10],

    /// Glyphs for ×10, ×100, ×1,000
    tens_units: [&'static str; 3],

    /// Glyphs for ×10,000 and ×100,000,000
    big_units: [&'static str; 2],
}

/// Everyday numerals: 零一二三四五六七八九 十百千 万亿
pub const LOWER: FormatDescriptor = FormatDescriptor::place_value(
    ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"],
    ["十", "百", "千"],
    ["万", "亿"],
);

/// Financial numerals, distinct glyphs that resist alteration:
/// 零壹贰叁肆伍陆柒捌玖 拾佰仟 萬億
pub const UPPER: FormatDescriptor = FormatDescriptor::place_value(
    ["零", "壹", "贰", "叁", "肆", "伍", "陆", "柒", "捌", "玖"],
    ["拾", "佰", "仟"],
    ["萬", "億"],
);

/// Digit-by-digit readout used for years and serial numbers: 〇一二…九
pub const DIGIT_READOUT: FormatDescriptor = FormatDescriptor::digit_readout(
    ["〇", "一", "二", "三", "四", "五", "六", "七", "八", "九"],
);

impl FormatDescriptor {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a place-value descriptor.
    ///
    /// Glyphs are not checked here; use [`checked`](Self::checked) for tables
    /// that come from user input.
    pub const fn place_value(
        basic: [&'static str; 10],
        tens_units: [&'static str; 3],
        big_units: [&'static str; 2],
    ) -> Self {
        Self {
            digit_readout: false,
            basic,
            tens_units,
            big_units,
        }
    }

    /// Create a digit-readout descriptor. Unit tables stay empty.
    pub const fn digit_readout(basic: [&'static str; 10]) -> Self {
        Self {
            digit_readout: true,
            basic,
            tens_units: [""; 3],
            big_units: [""; 2],
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn is_digit_readout(&self) -> bool {
        self.digit_readout
    }

    /// Glyph for a single digit.
    ///
    /// # Panics
    /// Panics if `digit` is 10 or greater.
    #[inline]
    pub const fn digit(&self, digit: usize) -> &'static str {
        self.basic[digit]
    }

    /// The zero glyph, also used by the zero-collapse rule.
    #[inline]
    pub const fn zero(&self) -> &'static str {
        self.basic[0]
    }

    #[inline]
    pub const fn basic(&self) -> &[&'static str; 10] {
        &self.basic
    }

    #[inline]
    pub const fn tens_units(&self) -> &[&'static str; 3] {
        &self.tens_units
    }

    #[inline]
    pub const fn big_units(&self) -> &[&'static str; 2] {
        &self.big_units
    }

    /// Validate the descriptor
    ///
    /// Every digit glyph must be non-empty; place-value descriptors also need
    /// all five unit glyphs.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(i) = self.basic.iter().position(|g| g.is_empty()) {
            return Err(format!("Glyph for digit {} cannot be empty", i));
        }

        if !self.digit_readout {
            if self.tens_units.iter().any(|g| g.is_empty()) {
                return Err("Tens unit glyphs cannot be empty".to_string());
            }
            if self.big_units.iter().any(|g| g.is_empty()) {
                return Err("Big unit glyphs cannot be empty".to_string());
            }
        }

        Ok(())
    }

    /// Validate and return the descriptor
    ///
    /// # Errors
    /// The message from [`validate`](Self::validate) when a glyph is missing.
    ///
    /// # Example
    /// ```
    /// use chinese_numeral::domain::format::{FormatDescriptor, LOWER};
    ///
    /// let traditional = FormatDescriptor::place_value(*LOWER.basic(), ["十", "百", "千"], ["萬", "億"])
    ///     .checked()
    ///     .unwrap();
    /// assert!(FormatDescriptor::place_value(*LOWER.basic(), ["", "百", "千"], ["萬", "億"])
    ///     .checked()
    ///     .is_err());
    /// # let _ = traditional;
    /// ```
    pub fn checked(self) -> Result<Self, String> {
        self.validate()?;
        Ok(self)
    }
}

impl Default for FormatDescriptor {
    fn default() -> Self {
        LOWER
    }
}
