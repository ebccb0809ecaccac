//! # Wallet-Boundary Errors
//!
//! The failure taxonomy for wallet interactions. Every variant carries a
//! human-readable reason suitable for direct display — the caller's only
//! job on failure is to surface the message and abort the pending action.

use thiserror::Error;

/// Errors from wallet adapter operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WalletError {
    /// No wallet session is active.
    #[error("wallet not connected")]
    NotConnected,

    /// The connection handshake was rejected or timed out.
    #[error("wallet connection failed: {reason}")]
    ConnectionFailed {
        /// Display-ready description of the handshake failure.
        reason: String,
    },

    /// A record-retrieval request failed. The record pipeline treats
    /// this as an empty result rather than propagating it.
    #[error("record request failed: {reason}")]
    RequestFailed {
        /// Display-ready description of the request failure.
        reason: String,
    },

    /// The wallet refused or failed to execute a transaction.
    #[error("execution rejected: {reason}")]
    ExecutionRejected {
        /// Display-ready description of the rejection.
        reason: String,
    },
}
