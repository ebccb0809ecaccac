//! # Predicate Evaluator
//!
//! Local evaluation of the proof predicates against decoded credential
//! claims. Used only by the offline demo mode — the production path
//! delegates the equivalent checks to the on-chain program.
//!
//! The kind enum is closed and textual kinds parse fail-closed: an
//! unrecognized name is a parse error, never a vacuously-true proof.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use zka_core::is_restricted;
use zka_record::DecodedCredential;

/// Minimum age applied when an age or composite proof is requested
/// without an explicit threshold.
pub const DEFAULT_MINIMUM_AGE: u8 = 18;

/// The proof kinds a credential supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProofKind {
    /// Age meets a minimum threshold.
    Age,
    /// KYC verification passed.
    Kyc,
    /// Country of residence is not in the restricted set.
    Country,
    /// Accredited investor status.
    Accredited,
    /// Age AND KYC AND country, in one claim.
    Composite,
}

impl ProofKind {
    /// The on-chain transition function implementing this proof.
    pub fn function_name(&self) -> &'static str {
        match self {
            ProofKind::Age => "prove_age",
            ProofKind::Kyc => "prove_kyc",
            ProofKind::Country => "prove_country",
            ProofKind::Accredited => "prove_accredited",
            ProofKind::Composite => "prove_composite",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            ProofKind::Age => "Age Minimum",
            ProofKind::Kyc => "KYC Status",
            ProofKind::Country => "Country Check",
            ProofKind::Accredited => "Accredited Investor",
            ProofKind::Composite => "Composite (Age + KYC + Country)",
        }
    }

    /// All kinds, in display order.
    pub const ALL: [ProofKind; 5] = [
        ProofKind::Age,
        ProofKind::Kyc,
        ProofKind::Country,
        ProofKind::Accredited,
        ProofKind::Composite,
    ];
}

impl std::fmt::Display for ProofKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ProofKind::Age => "age",
            ProofKind::Kyc => "kyc",
            ProofKind::Country => "country",
            ProofKind::Accredited => "accredited",
            ProofKind::Composite => "composite",
        };
        write!(f, "{name}")
    }
}

/// A textual proof kind was not recognized.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown proof kind {0:?}; expected age, kyc, country, accredited, or composite")]
pub struct UnknownProofKind(pub String);

impl std::str::FromStr for ProofKind {
    type Err = UnknownProofKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "age" => Ok(ProofKind::Age),
            "kyc" => Ok(ProofKind::Kyc),
            "country" => Ok(ProofKind::Country),
            "accredited" => Ok(ProofKind::Accredited),
            "composite" => Ok(ProofKind::Composite),
            other => Err(UnknownProofKind(other.to_string())),
        }
    }
}

/// Parameters a proof request may carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofParams {
    /// Minimum age for age/composite proofs. Defaults to
    /// [`DEFAULT_MINIMUM_AGE`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_age: Option<u8>,
}

impl ProofParams {
    /// Parameters with an explicit minimum age.
    pub fn with_minimum_age(minimum_age: u8) -> Self {
        Self {
            minimum_age: Some(minimum_age),
        }
    }

    /// The effective minimum age.
    pub fn effective_minimum_age(&self) -> u8 {
        self.minimum_age.unwrap_or(DEFAULT_MINIMUM_AGE)
    }
}

/// The claims a predicate reads — the subset of credential fields the
/// proofs attest over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialClaims {
    /// Age in years.
    pub age: u8,
    /// ISO-3166 numeric country code.
    pub country_code: u16,
    /// KYC verification status.
    pub kyc_passed: bool,
    /// Accredited investor status.
    pub accredited_investor: bool,
}

impl From<&DecodedCredential> for CredentialClaims {
    fn from(cred: &DecodedCredential) -> Self {
        Self {
            age: cred.age,
            country_code: cred.country_code,
            kyc_passed: cred.kyc_passed,
            accredited_investor: cred.accredited_investor,
        }
    }
}

/// Evaluate one proof predicate against credential claims.
pub fn evaluate(claims: &CredentialClaims, kind: ProofKind, params: &ProofParams) -> bool {
    match kind {
        ProofKind::Age => claims.age >= params.effective_minimum_age(),
        ProofKind::Kyc => claims.kyc_passed,
        ProofKind::Country => !is_restricted(claims.country_code),
        ProofKind::Accredited => claims.accredited_investor,
        ProofKind::Composite => {
            evaluate(claims, ProofKind::Age, params)
                && evaluate(claims, ProofKind::Kyc, params)
                && evaluate(claims, ProofKind::Country, params)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(age: u8, country_code: u16, kyc: bool, accredited: bool) -> CredentialClaims {
        CredentialClaims {
            age,
            country_code,
            kyc_passed: kyc,
            accredited_investor: accredited,
        }
    }

    #[test]
    fn age_respects_explicit_minimum() {
        let c = claims(17, 840, true, false);
        assert!(!evaluate(&c, ProofKind::Age, &ProofParams::with_minimum_age(18)));
        assert!(evaluate(&c, ProofKind::Age, &ProofParams::with_minimum_age(16)));
    }

    #[test]
    fn age_defaults_to_eighteen() {
        assert!(!evaluate(&claims(17, 840, true, false), ProofKind::Age, &ProofParams::default()));
        assert!(evaluate(&claims(18, 840, true, false), ProofKind::Age, &ProofParams::default()));
    }

    #[test]
    fn kyc_reads_the_flag() {
        assert!(evaluate(&claims(30, 840, true, false), ProofKind::Kyc, &ProofParams::default()));
        assert!(!evaluate(&claims(30, 840, false, false), ProofKind::Kyc, &ProofParams::default()));
    }

    #[test]
    fn country_rejects_all_four_restricted_codes() {
        for code in [408, 364, 760, 192] {
            let c = claims(30, code, true, true);
            assert!(
                !evaluate(&c, ProofKind::Country, &ProofParams::default()),
                "code {code} must fail the country predicate"
            );
        }
    }

    #[test]
    fn country_accepts_unrestricted_codes() {
        for code in [840, 276] {
            let c = claims(30, code, true, true);
            assert!(evaluate(&c, ProofKind::Country, &ProofParams::default()));
        }
    }

    #[test]
    fn accredited_reads_the_flag() {
        assert!(evaluate(&claims(30, 840, false, true), ProofKind::Accredited, &ProofParams::default()));
        assert!(!evaluate(&claims(30, 840, true, false), ProofKind::Accredited, &ProofParams::default()));
    }

    #[test]
    fn composite_truth_table() {
        // All eight combinations of (age passes, kyc passes, country passes).
        let params = ProofParams::default();
        for (age_ok, kyc_ok, country_ok) in [
            (false, false, false),
            (false, false, true),
            (false, true, false),
            (false, true, true),
            (true, false, false),
            (true, false, true),
            (true, true, false),
            (true, true, true),
        ] {
            let c = claims(
                if age_ok { 21 } else { 17 },
                if country_ok { 840 } else { 408 },
                kyc_ok,
                false,
            );
            assert_eq!(
                evaluate(&c, ProofKind::Composite, &params),
                age_ok && kyc_ok && country_ok,
                "composite mismatch for ({age_ok}, {kyc_ok}, {country_ok})"
            );
        }
    }

    #[test]
    fn composite_ignores_accreditation() {
        let c = claims(30, 840, true, false);
        assert!(evaluate(&c, ProofKind::Composite, &ProofParams::default()));
    }

    #[test]
    fn parse_is_fail_closed() {
        assert_eq!("age".parse::<ProofKind>(), Ok(ProofKind::Age));
        assert_eq!("composite".parse::<ProofKind>(), Ok(ProofKind::Composite));
        assert!("AGE".parse::<ProofKind>().is_err());
        assert!("residency".parse::<ProofKind>().is_err());
        assert!("".parse::<ProofKind>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for kind in ProofKind::ALL {
            assert_eq!(kind.to_string().parse::<ProofKind>(), Ok(kind));
        }
    }

    #[test]
    fn function_names_match_the_program() {
        assert_eq!(ProofKind::Age.function_name(), "prove_age");
        assert_eq!(ProofKind::Kyc.function_name(), "prove_kyc");
        assert_eq!(ProofKind::Country.function_name(), "prove_country");
        assert_eq!(ProofKind::Accredited.function_name(), "prove_accredited");
        assert_eq!(ProofKind::Composite.function_name(), "prove_composite");
    }

    #[test]
    fn claims_from_decoded_credential() {
        let record = serde_json::json!({
            "owner": "aleo1abc", "issuer": "aleo1xyz", "age": 25,
            "country_code": 840, "kyc_passed": true, "accredited_investor": false
        });
        let decoded = DecodedCredential::from_record(&record).unwrap();
        let c = CredentialClaims::from(&decoded);
        assert_eq!(c.age, 25);
        assert_eq!(c.country_code, 840);
        assert!(c.kyc_passed);
        assert!(!c.accredited_investor);
    }
}
