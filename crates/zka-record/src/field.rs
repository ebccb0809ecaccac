//! # Logical Field Model
//!
//! The seven logical fields a credential record carries, the numeric
//! type suffixes the program grammar attaches to two of them, and the
//! visibility markers identity fields default to.

use serde::{Deserialize, Serialize};

/// A logical credential field. Exactly these seven keys are ever
/// resolved from a record — nothing else in a record is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    /// The record owner's account address.
    Owner,
    /// The issuing party's account address.
    Issuer,
    /// Age in years, a `u8` in the program grammar.
    Age,
    /// ISO-3166 numeric country code, a `u16` in the program grammar.
    CountryCode,
    /// Whether KYC verification passed.
    KycPassed,
    /// Whether the holder is an accredited investor.
    AccreditedInvestor,
    /// The record nonce, stored on records as `_nonce`.
    Nonce,
}

impl FieldKey {
    /// The six mandatory data fields, in struct-literal order.
    pub const MANDATORY: [FieldKey; 6] = [
        FieldKey::Owner,
        FieldKey::Issuer,
        FieldKey::Age,
        FieldKey::CountryCode,
        FieldKey::KycPassed,
        FieldKey::AccreditedInvestor,
    ];

    /// The field name as it appears on records and in the output
    /// literal. The nonce's underscore is part of the record grammar.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKey::Owner => "owner",
            FieldKey::Issuer => "issuer",
            FieldKey::Age => "age",
            FieldKey::CountryCode => "country_code",
            FieldKey::KycPassed => "kyc_passed",
            FieldKey::AccreditedInvestor => "accredited_investor",
            FieldKey::Nonce => "_nonce",
        }
    }

    /// The numeric type suffix this field's literal carries, if any.
    pub fn suffix(&self) -> Option<LiteralSuffix> {
        match self {
            FieldKey::Age => Some(LiteralSuffix::U8),
            FieldKey::CountryCode => Some(LiteralSuffix::U16),
            _ => None,
        }
    }

    /// Whether this field's literal is visibility-finalized (identity
    /// fields default to `.private`).
    pub fn wants_visibility(&self) -> bool {
        matches!(self, FieldKey::Owner | FieldKey::Issuer)
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Numeric-width suffix in the program input grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralSuffix {
    /// 8-bit unsigned, rendered `u8`.
    U8,
    /// 16-bit unsigned, rendered `u16`.
    U16,
}

impl LiteralSuffix {
    /// The literal text appended to a decimal value.
    pub fn as_str(&self) -> &'static str {
        match self {
            LiteralSuffix::U8 => "u8",
            LiteralSuffix::U16 => "u16",
        }
    }
}

impl std::fmt::Display for LiteralSuffix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Visibility marker on a struct-literal member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Field value stays encrypted on execution.
    Private,
    /// Field value is disclosed on execution.
    Public,
}

impl Visibility {
    /// The dotted suffix form, e.g. `.private`.
    pub fn as_suffix(&self) -> &'static str {
        match self {
            Visibility::Private => ".private",
            Visibility::Public => ".public",
        }
    }
}
