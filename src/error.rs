//! Error types for region operations.

use thiserror::Error;

/// Region errors.
///
/// Geometry operations on well-formed inputs never fail; errors arise only
/// from out-of-range operand access, malformed encodings, and unparseable
/// textual renderings.
#[derive(Error, Debug)]
pub enum RegionError {
    /// Operand index past the end of a compound region's operand list.
    #[error("operand index {index} out of range for compound with {n_operands} operands")]
    IndexOutOfRange { index: usize, n_operands: usize },

    /// Encoding format error (corrupt, truncated, or trailing bytes).
    #[error("region format error: {0}")]
    Format(String),

    /// Decoded a known tag, but not the one the caller asked for.
    #[error("region type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Textual rendering could not be re-parsed.
    #[error("region parse error: {0}")]
    Parse(String),
}

/// Result type for region operations.
pub type Result<T> = std::result::Result<T, RegionError>;
