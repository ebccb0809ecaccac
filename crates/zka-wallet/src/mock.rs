//! # Mock Wallet Adapter
//!
//! A deterministic in-process wallet for tests and the offline demo
//! mode. Returns exactly the record fixtures it was configured with and
//! mints sequential transaction identifiers. No cryptography, no
//! network — execution "succeeds" by construction unless configured to
//! reject.

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::Value;

use zka_core::{ProgramId, TransactionId};

use crate::adapter::{ExecutionReceipt, ExecutionRequest, WalletAdapter};
use crate::error::WalletError;

/// Deterministic wallet adapter backed by configured fixtures.
#[derive(Debug, Default)]
pub struct MockWalletAdapter {
    connected: bool,
    plaintext_records: Vec<Value>,
    spendable_records: Vec<Value>,
    plaintext_error: Option<WalletError>,
    spendable_error: Option<WalletError>,
    execution_error: Option<WalletError>,
    executions: AtomicU64,
}

impl MockWalletAdapter {
    /// A connected wallet with no records.
    pub fn connected() -> Self {
        Self {
            connected: true,
            ..Self::default()
        }
    }

    /// A wallet with no active session; every call fails `NotConnected`.
    pub fn disconnected() -> Self {
        Self::default()
    }

    /// Configure the plaintext-visible record set.
    pub fn with_plaintext_records(mut self, records: Vec<Value>) -> Self {
        self.plaintext_records = records;
        self
    }

    /// Configure the spendable-only record set.
    pub fn with_spendable_records(mut self, records: Vec<Value>) -> Self {
        self.spendable_records = records;
        self
    }

    /// Make plaintext-visible requests fail with the given error.
    pub fn failing_plaintext(mut self, error: WalletError) -> Self {
        self.plaintext_error = Some(error);
        self
    }

    /// Make spendable-only requests fail with the given error.
    pub fn failing_spendable(mut self, error: WalletError) -> Self {
        self.spendable_error = Some(error);
        self
    }

    /// Make executions fail with the given error.
    pub fn failing_execution(mut self, error: WalletError) -> Self {
        self.execution_error = Some(error);
        self
    }

    /// How many executions this adapter has accepted.
    pub fn execution_count(&self) -> u64 {
        self.executions.load(Ordering::Relaxed)
    }
}

impl WalletAdapter for MockWalletAdapter {
    fn request_records(
        &self,
        _program: &ProgramId,
        include_plaintext: bool,
    ) -> Result<Vec<Value>, WalletError> {
        if !self.connected {
            return Err(WalletError::NotConnected);
        }
        let (error, records) = if include_plaintext {
            (&self.plaintext_error, &self.plaintext_records)
        } else {
            (&self.spendable_error, &self.spendable_records)
        };
        if let Some(e) = error {
            return Err(e.clone());
        }
        Ok(records.clone())
    }

    fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionReceipt, WalletError> {
        if !self.connected {
            return Err(WalletError::NotConnected);
        }
        if let Some(e) = &self.execution_error {
            return Err(e.clone());
        }
        if request.inputs.is_empty() {
            return Err(WalletError::ExecutionRejected {
                reason: "no inputs supplied".into(),
            });
        }
        let n = self.executions.fetch_add(1, Ordering::Relaxed) + 1;
        let transaction_id = TransactionId::new(format!("at1mock{n:06}")).map_err(|e| {
            WalletError::ExecutionRejected {
                reason: e.to_string(),
            }
        })?;
        Ok(ExecutionReceipt { transaction_id })
    }

    fn adapter_name(&self) -> &str {
        "MockWalletAdapter"
    }
}
