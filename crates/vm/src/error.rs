//! Error types for script emission.

use thiserror::Error;

/// Result type for VM script operations
pub type VmResult<T> = std::result::Result<T, VmError>;

/// Errors raised while emitting script bytes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VmError {
    /// The input was not valid hexadecimal.
    #[error("Invalid hex data: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Integers below -1 have no defined encoding.
    #[error("Unsupported integer for push: {0}")]
    UnsupportedInteger(i64),

    /// A data blob longer than a PUSHDATA4 prefix can describe.
    #[error("Data too large to push: {0} bytes")]
    DataTooLarge(usize),
}
