//! # Identity Newtypes
//!
//! Domain-primitive newtypes for the identifiers that cross the wallet
//! boundary. Each identifier is a distinct type — you cannot pass a
//! [`ProgramId`] where an [`AleoAddress`] is expected.
//!
//! ## Validation
//!
//! [`AleoAddress`] and [`ProgramId`] validate format at construction time
//! and route deserialization through the same constructor, so invalid
//! values are rejected at the serde layer rather than silently accepted.
//! [`TransactionId`] is deliberately opaque: the chain hands them back,
//! this stack echoes them verbatim and never parses them.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Implements `Deserialize` for a string newtype by deserializing a
/// plain `String` and routing it through the type's `new()` constructor,
/// so malformed values fail at the serde layer.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// The bech32 data-part alphabet. Aleo addresses use bech32m encoding,
/// whose data characters exclude `1`, `b`, `i`, and `o`.
const BECH32_CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// An Aleo account address: the literal `aleo1` prefix followed by 58
/// bech32 data characters, 63 characters total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AleoAddress(String);

impl AleoAddress {
    /// Validate and wrap an address string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAddress`] when the prefix,
    /// length, or character set is wrong.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if !raw.starts_with("aleo1") {
            return Err(ValidationError::InvalidAddress {
                reason: "missing aleo1 prefix".into(),
            });
        }
        if raw.len() != 63 {
            return Err(ValidationError::InvalidAddress {
                reason: format!("expected 63 characters, got {}", raw.len()),
            });
        }
        if let Some(bad) = raw[5..].chars().find(|c| !BECH32_CHARSET.contains(*c)) {
            return Err(ValidationError::InvalidAddress {
                reason: format!("character {bad:?} is not in the bech32 alphabet"),
            });
        }
        Ok(Self(raw))
    }

    /// Access the address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_validating_deserialize!(AleoAddress);

impl std::fmt::Display for AleoAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AleoAddress {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// An on-chain program identifier, e.g. `zkaccess_v2.aleo`.
///
/// The name part is lowercase alphanumeric with underscores and must
/// start with a letter; the `.aleo` suffix is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProgramId(String);

impl ProgramId {
    /// Validate and wrap a program identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidProgramId`] when the suffix or
    /// name part is malformed.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let name = raw
            .strip_suffix(".aleo")
            .ok_or_else(|| ValidationError::InvalidProgramId {
                reason: "missing .aleo suffix".into(),
            })?;
        if name.is_empty() {
            return Err(ValidationError::InvalidProgramId {
                reason: "empty program name".into(),
            });
        }
        if !name.chars().next().is_some_and(|c| c.is_ascii_lowercase()) {
            return Err(ValidationError::InvalidProgramId {
                reason: "program name must start with a lowercase letter".into(),
            });
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_'))
        {
            return Err(ValidationError::InvalidProgramId {
                reason: format!("character {bad:?} is not allowed in a program name"),
            });
        }
        Ok(Self(raw))
    }

    /// Access the full identifier, suffix included.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_validating_deserialize!(ProgramId);

impl std::fmt::Display for ProgramId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProgramId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// An opaque transaction identifier returned by the wallet.
///
/// Never parsed, never normalized — the explorer link and the history
/// both echo it back exactly as the wallet produced it. The only
/// constraint is non-emptiness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TransactionId(String);

impl TransactionId {
    /// Wrap a transaction identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTransactionId`] when the string is
    /// empty after trimming.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::EmptyTransactionId);
        }
        Ok(Self(raw))
    }

    /// Access the identifier string, verbatim.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_validating_deserialize!(TransactionId);

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
