// ============================================================================
// Numeral Style Configuration
// The recognized set of output styles and their parsing from names
// ============================================================================

use super::format::{FormatDescriptor, DIGIT_READOUT, LOWER, UPPER};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Numeral Style
// ============================================================================

/// Selects one of the standard format descriptors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum NumeralStyle {
    /// Everyday numerals (一千零一)
    /// Use case: prose, prices on menus, spoken amounts
    #[default]
    Lower,

    /// Financial numerals (壹仟零壹)
    /// Use case: cheques, invoices, contracts
    Upper,

    /// Digit-by-digit readout (二〇二一)
    /// Use case: years, serial and account numbers
    DigitReadout,
}

impl NumeralStyle {
    /// All recognized styles
    pub const ALL: [NumeralStyle; 3] = [
        NumeralStyle::Lower,
        NumeralStyle::Upper,
        NumeralStyle::DigitReadout,
    ];

    /// The descriptor this style renders with
    pub const fn descriptor(self) -> &'static FormatDescriptor {
        match self {
            NumeralStyle::Lower => &LOWER,
            NumeralStyle::Upper => &UPPER,
            NumeralStyle::DigitReadout => &DIGIT_READOUT,
        }
    }

    /// Canonical configuration name
    pub const fn name(self) -> &'static str {
        match self {
            NumeralStyle::Lower => "lower",
            NumeralStyle::Upper => "upper",
            NumeralStyle::DigitReadout => "digit-readout",
        }
    }
}

impl fmt::Display for NumeralStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NumeralStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lower" => Ok(NumeralStyle::Lower),
            "upper" => Ok(NumeralStyle::Upper),
            "digit-readout" | "digit_readout" | "number" => Ok(NumeralStyle::DigitReadout),
            other => Err(format!("Unknown numeral style: {:?}", other)),
        }
    }
}
