// ============================================================================
// Numeric Module
// The wrapping u64 amount and the codec's error types
// ============================================================================
//
// This module provides:
// - Chinese: u64 newtype with text encode/decode and wrapping arithmetic
// - NumeralError: the codec's error taxonomy (InvalidTarget, WriteFailure)
// - ParseChineseError: strict FromStr failures
//
// Design principles:
// - No floating-point operations
// - Arithmetic wraps modulo 2^64, never panics
// - Malformed input is reported by bytes consumed, not by error

mod chinese;
mod errors;

pub use chinese::Chinese;
pub use errors::{NumeralError, NumeralResult, ParseChineseError};
