//! # zka-wallet — Wallet Collaborator Contract
//!
//! The wallet is an external collaborator: it holds the keys, decrypts
//! records, generates the actual zero-knowledge proofs, and submits
//! transactions. This crate defines the seam — an object-safe adapter
//! trait — plus the record fetch/merge pipeline that normalizes what
//! different wallet implementations hand back.
//!
//! ## Error Policy
//!
//! Wallet-boundary failures are the only errors in the stack that use
//! `Result` end to end (decode failures are `Option`/empty signals in
//! `zka-record`). Record-retrieval failures degrade to empty record
//! sets; connection and execution failures carry a display-ready reason
//! and abort the in-progress action.

pub mod adapter;
pub mod error;
pub mod mock;
pub mod records;

pub use adapter::{ExecutionReceipt, ExecutionRequest, WalletAdapter};
pub use error::WalletError;
pub use mock::MockWalletAdapter;
pub use records::fetch_credential_records;
