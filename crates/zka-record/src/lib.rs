//! # zka-record — Credential Record Decoding & Proof-Input Normalization
//!
//! The decoding engine between a wallet's raw record objects and a
//! program-execution call. Wallet implementations disagree about record
//! shape: field names may carry visibility suffixes (`owner.private`,
//! `owner_private`), the payload may be nested under a `data` container,
//! and scalar values may arrive double-wrapped. This crate recovers a
//! canonical representation from any of those shapes and re-serializes it
//! into the exact literal syntax the program's input grammar requires.
//!
//! ## Pipeline
//!
//! - **Classifier** ([`classify`]): is this record a credential at all?
//! - **Resolver** ([`resolve`]): extract one logical field across all
//!   name variants and wrappers.
//! - **Encoder** ([`encode`]): render a resolved value as a program-input
//!   literal (`25u8`, `840u16`, `true`, `aleo1...private`).
//! - **Serializer** ([`serialize`]): passthrough cascade, else full
//!   struct-literal reconstruction.
//! - **Decoder** ([`decode`]): typed field recovery for display.
//!
//! ## Failure Policy
//!
//! Every function here is pure and total: no I/O, no panics, no errors
//! thrown. "Cannot decode" is an expected outcome — it surfaces as
//! `Absent`, an empty literal, or `None`, and the caller aborts before
//! anything reaches the wallet. A partially-built literal is never
//! emitted: a malformed input would be rejected on-chain much later,
//! with no way to attribute the failure to the offending field.

pub mod classify;
pub mod decode;
pub mod encode;
pub mod field;
pub mod resolve;
pub mod serialize;

pub use classify::is_credential_record;
pub use decode::DecodedCredential;
pub use encode::{encode_literal, ensure_visibility};
pub use field::{FieldKey, LiteralSuffix, Visibility};
pub use resolve::{resolve_field, ResolvedValue};
pub use serialize::{
    build_credential_literal, passthrough_payload, to_record_input, RECORD_INPUT_KEY,
};
