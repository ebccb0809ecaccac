//! # Error Types
//!
//! Construction-time validation errors for the identity newtypes. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! Decode-layer failures (unresolvable fields, unencodable records) are
//! deliberately NOT errors — they are `Option`/empty-string signals in
//! `zka-record`, because they are expected, recoverable outcomes the
//! caller handles by aborting the pending action.

use thiserror::Error;

/// A value failed validation at newtype construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The string is not a well-formed Aleo account address.
    #[error("invalid address: {reason}")]
    InvalidAddress {
        /// Description of the format violation.
        reason: String,
    },

    /// The string is not a well-formed program identifier.
    #[error("invalid program id: {reason}")]
    InvalidProgramId {
        /// Description of the format violation.
        reason: String,
    },

    /// A transaction identifier must be non-empty.
    #[error("transaction id is empty")]
    EmptyTransactionId,
}
