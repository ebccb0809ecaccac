//! # zka-core — Foundational Types
//!
//! Shared building blocks for the zkaccess stack:
//!
//! - **Identity newtypes** ([`identity`]): validated wrappers for Aleo
//!   addresses and program identifiers, plus the deliberately-opaque
//!   transaction identifier.
//!
//! - **Country reference data** ([`country`]): the ISO-3166 numeric code
//!   table the UI labels credentials with, and the fixed restricted set
//!   consumed by predicate evaluation.
//!
//! - **Errors** ([`error`]): the `ValidationError` hierarchy for newtype
//!   construction failures.
//!
//! ## Crate Policy
//!
//! No I/O, no wallet coupling, no decode logic — those live in
//! `zka-record` and `zka-wallet`. Everything here is a plain value type.

pub mod country;
pub mod error;
pub mod identity;

pub use country::{country_name, is_restricted, COUNTRY_NAMES, RESTRICTED_COUNTRIES};
pub use error::ValidationError;
pub use identity::{AleoAddress, ProgramId, TransactionId};
