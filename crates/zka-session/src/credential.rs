//! # Offline Credential & Proof Objects
//!
//! Value objects for the fully-offline demo mode, where credentials and
//! proofs are client-simulated instead of living on-chain. A credential
//! is immutable after issuance and destroyed only by session reset; a
//! proof references its credential by id without owning it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use zka_proof::{CredentialClaims, ProofKind, ProofParams};

/// A client-simulated credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    /// Unique credential identifier.
    pub id: Uuid,
    /// Owner address literal.
    pub owner: String,
    /// Issuer address literal.
    pub issuer: String,
    /// Age in years.
    pub age: u8,
    /// ISO-3166 numeric country code.
    pub country_code: u16,
    /// KYC verification status.
    pub kyc_passed: bool,
    /// Accredited investor status.
    pub accredited_investor: bool,
    /// Issuer-assigned risk score, 0–100.
    pub risk_score: u8,
    /// When the credential was issued.
    pub issued_at: DateTime<Utc>,
    /// When the credential expires.
    pub expires_at: DateTime<Utc>,
}

/// What an issuance request specifies; everything else is generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueParams {
    /// Recipient address literal.
    pub owner: String,
    /// Age in years.
    pub age: u8,
    /// ISO-3166 numeric country code.
    pub country_code: u16,
    /// KYC verification status.
    pub kyc_passed: bool,
    /// Accredited investor status.
    pub accredited_investor: bool,
    /// Issuer-assigned risk score, 0–100.
    pub risk_score: u8,
}

impl Credential {
    /// Issue a credential valid for one year.
    pub fn issue(params: IssueParams, issuer: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner: params.owner,
            issuer: issuer.into(),
            age: params.age,
            country_code: params.country_code,
            kyc_passed: params.kyc_passed,
            accredited_investor: params.accredited_investor,
            risk_score: params.risk_score,
            issued_at: now,
            expires_at: now + Duration::days(365),
        }
    }

    /// The claims the proof predicates read.
    pub fn claims(&self) -> CredentialClaims {
        CredentialClaims {
            age: self.age,
            country_code: self.country_code,
            kyc_passed: self.kyc_passed,
            accredited_investor: self.accredited_investor,
        }
    }
}

/// A client-simulated boolean-disclosure proof.
///
/// Immutable once generated. `credential_id` is a reference, not
/// ownership — the credential may be reset away independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proof {
    /// Unique proof identifier; what a third party looks up.
    pub id: Uuid,
    /// The credential this proof was generated from.
    pub credential_id: Uuid,
    /// Which predicate was proven.
    pub kind: ProofKind,
    /// The boolean claim result — the only thing a verifier learns.
    pub result: bool,
    /// Parameters the predicate ran with.
    pub params: ProofParams,
    /// When the proof was generated.
    pub generated_at: DateTime<Utc>,
    /// Uniqueness nonce.
    pub nonce: String,
    /// Owner address literal of the proving credential.
    pub owner: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> IssueParams {
        IssueParams {
            owner: "aleo1demo".into(),
            age: 25,
            country_code: 840,
            kyc_passed: true,
            accredited_investor: false,
            risk_score: 15,
        }
    }

    #[test]
    fn issuance_fills_generated_fields() {
        let now = Utc::now();
        let cred = Credential::issue(params(), "aleo1issuer", now);
        assert_eq!(cred.owner, "aleo1demo");
        assert_eq!(cred.issuer, "aleo1issuer");
        assert_eq!(cred.issued_at, now);
        assert_eq!(cred.expires_at, now + Duration::days(365));
    }

    #[test]
    fn distinct_issuances_get_distinct_ids() {
        let now = Utc::now();
        let a = Credential::issue(params(), "aleo1issuer", now);
        let b = Credential::issue(params(), "aleo1issuer", now);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn claims_mirror_the_credential() {
        let cred = Credential::issue(params(), "aleo1issuer", Utc::now());
        let claims = cred.claims();
        assert_eq!(claims.age, 25);
        assert_eq!(claims.country_code, 840);
        assert!(claims.kyc_passed);
        assert!(!claims.accredited_investor);
    }

    #[test]
    fn credential_serde_roundtrip() {
        let cred = Credential::issue(params(), "aleo1issuer", Utc::now());
        let json = serde_json::to_string(&cred).unwrap();
        let back: Credential = serde_json::from_str(&json).unwrap();
        assert_eq!(cred, back);
    }
}
