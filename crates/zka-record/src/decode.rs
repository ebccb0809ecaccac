//! # Typed Credential Decode
//!
//! Recovers a typed credential view from a raw record for display.
//! Unlike the literal path, which must preserve pre-formed literals
//! byte-for-byte, display decoding is lenient: `"25u8.private"`,
//! `"25"`, and `25` all read as age 25.

use serde_json::Value;

use zka_core::country_name;

use crate::field::FieldKey;
use crate::resolve::{resolve_field, ResolvedValue};

/// A credential's six data fields plus optional nonce, typed for display.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedCredential {
    /// Owner address literal, visibility suffix stripped.
    pub owner: String,
    /// Issuer address literal, visibility suffix stripped.
    pub issuer: String,
    /// Age in years.
    pub age: u8,
    /// ISO-3166 numeric country code.
    pub country_code: u16,
    /// KYC verification status.
    pub kyc_passed: bool,
    /// Accredited investor status.
    pub accredited_investor: bool,
    /// Record nonce, when the wallet exposed one.
    pub nonce: Option<String>,
}

impl DecodedCredential {
    /// Decode a raw record into typed fields. `None` when any of the six
    /// mandatory fields is missing or unreadable.
    pub fn from_record(record: &Value) -> Option<Self> {
        Some(Self {
            owner: decode_address(&resolve_field(record, FieldKey::Owner))?,
            issuer: decode_address(&resolve_field(record, FieldKey::Issuer))?,
            age: decode_unsigned(&resolve_field(record, FieldKey::Age), u8::MAX as u64)? as u8,
            country_code: decode_unsigned(
                &resolve_field(record, FieldKey::CountryCode),
                u16::MAX as u64,
            )? as u16,
            kyc_passed: decode_bool(&resolve_field(record, FieldKey::KycPassed))?,
            accredited_investor: decode_bool(&resolve_field(
                record,
                FieldKey::AccreditedInvestor,
            ))?,
            nonce: match resolve_field(record, FieldKey::Nonce) {
                ResolvedValue::Text(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                _ => None,
            },
        })
    }

    /// Display name for the credential's country, falling back to the
    /// bare code when it is not in the reference table.
    pub fn country_label(&self) -> String {
        match country_name(self.country_code) {
            Some(name) => name.to_string(),
            None => self.country_code.to_string(),
        }
    }
}

fn decode_address(value: &ResolvedValue) -> Option<String> {
    let ResolvedValue::Text(s) = value else {
        return None;
    };
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    let stripped = trimmed
        .strip_suffix(".private")
        .or_else(|| trimmed.strip_suffix(".public"))
        .unwrap_or(trimmed);
    Some(stripped.to_string())
}

/// Read an unsigned integer out of a number, a digit string, or a
/// suffixed literal like `840u16.private`.
fn decode_unsigned(value: &ResolvedValue, max: u64) -> Option<u64> {
    let n = match value {
        ResolvedValue::Number(f) if f.is_finite() && *f >= 0.0 => f.trunc() as u64,
        ResolvedValue::Text(s) => {
            let digits: String = s.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
            digits.parse::<u64>().ok()?
        }
        _ => return None,
    };
    (n <= max).then_some(n)
}

/// Read a boolean out of a flag or a literal like `true.private`.
fn decode_bool(value: &ResolvedValue) -> Option<bool> {
    match value {
        ResolvedValue::Flag(b) => Some(*b),
        ResolvedValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed == "true" || trimmed.starts_with("true.") {
                Some(true)
            } else if trimmed == "false" || trimmed.starts_with("false.") {
                Some(false)
            } else {
                None
            }
        }
        _ => None,
    }
}
