//! # zka-proof — Proof Catalog & Predicate Evaluation
//!
//! The five boolean-disclosure proofs a credential supports, in two
//! renditions:
//!
//! - **On-chain** ([`request`]): builders that assemble the exact
//!   `ExecutionRequest` for each proof's transition function. The wallet
//!   proves and submits; only a boolean claim result lands on-chain.
//!
//! - **Offline** ([`predicate`]): the same predicates evaluated locally
//!   against decoded credential claims — the demo mode's stand-in for a
//!   real proving round-trip.
//!
//! Both paths share [`ProofKind`] and its parameters, so a proof
//! generated offline describes exactly what the on-chain call would
//! have attested.

pub mod predicate;
pub mod request;

pub use predicate::{
    evaluate, CredentialClaims, ProofKind, ProofParams, UnknownProofKind, DEFAULT_MINIMUM_AGE,
};
pub use request::{explorer_url, issue_request, proof_request, DEFAULT_FEE, PROGRAM_ID};
