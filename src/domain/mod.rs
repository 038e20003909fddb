// ============================================================================
// Domain Models Module
// Format descriptors and the style configuration that selects them
// ============================================================================

pub mod config;
pub mod format;

pub use config::NumeralStyle;
pub use format::{FormatDescriptor, DIGIT_READOUT, LOWER, UPPER};
