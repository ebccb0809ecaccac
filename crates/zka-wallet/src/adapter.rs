//! # Wallet Adapter Trait
//!
//! The seam between this stack and a concrete wallet implementation.
//! Implementations must be `Send + Sync` so they can be shared behind an
//! `Arc`, and the trait is object-safe to support runtime selection
//! (mock vs. a real bridge).
//!
//! The core never inspects `program`/`function` beyond passing them
//! through, and it never parses the transaction identifier a wallet
//! returns. Calls are made sequentially and are never pipelined; any
//! timeout or cancellation policy belongs to the adapter, not to the
//! callers in this stack.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use zka_core::{ProgramId, TransactionId};

use crate::error::WalletError;

/// A program-execution request, assembled by the proof-call builders.
///
/// `inputs` elements are exact literal strings — the wallet passes them
/// to the prover byte-for-byte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRequest {
    /// The on-chain program to execute.
    pub program: ProgramId,
    /// The transition function name within the program.
    pub function: String,
    /// Exact input literals, in declaration order.
    pub inputs: Vec<String>,
    /// Fee in microcredits.
    pub fee: u64,
    /// Whether the fee is paid from a private record.
    pub private_fee: bool,
}

/// What a wallet returns for a submitted execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionReceipt {
    /// Opaque transaction identifier, echoed verbatim everywhere.
    pub transaction_id: TransactionId,
}

/// Adapter trait for a connected wallet.
pub trait WalletAdapter: Send + Sync {
    /// Request the records a program owns for the connected account.
    ///
    /// `include_plaintext` asks the wallet to decrypt record payloads
    /// where its permission level allows. Wallets that cannot honor the
    /// flag return whatever shape they have — the record pipeline
    /// normalizes the difference.
    fn request_records(
        &self,
        program: &ProgramId,
        include_plaintext: bool,
    ) -> Result<Vec<Value>, WalletError>;

    /// Execute a program transition. The wallet proves, signs, and
    /// broadcasts; the caller only learns the transaction identifier.
    fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionReceipt, WalletError>;

    /// Human-readable adapter name for diagnostics
    /// (e.g. "MockWalletAdapter", "LeoWalletBridge").
    fn adapter_name(&self) -> &str;
}
