//! Length limits applied while reading and rendering

/// Maximum number of bytes kept from a single word
///
/// Longer tokens are truncated; the remainder is discarded.
pub const FIELD_MAX: usize = 20;

/// Maximum number of bytes in a raw template line, newline excluded
pub const LINE_MAX: usize = 1024;

/// Maximum number of bytes in a line after all substitutions
pub const OUTPUT_MAX: usize = 100;
