//! # Program-Call Builders
//!
//! Assembles the exact `ExecutionRequest` for each operation the
//! zkaccess program exposes. Input literals are built here and passed to
//! the wallet byte-for-byte; the builders never inspect the record input
//! beyond receiving it from the serializer.

use zka_core::{AleoAddress, ProgramId, TransactionId};
use zka_wallet::ExecutionRequest;

use crate::predicate::{ProofKind, ProofParams};

/// The deployed program this stack targets.
pub const PROGRAM_ID: &str = "zkaccess_v2.aleo";

/// Default execution fee in microcredits.
pub const DEFAULT_FEE: u64 = 100_000;

/// Explorer page for a submitted transaction. The identifier is echoed
/// verbatim — never parsed, never normalized.
pub fn explorer_url(transaction_id: &TransactionId) -> String {
    format!(
        "https://testnet.aleoscan.io/transaction?id={}",
        transaction_id.as_str()
    )
}

/// Build the execution request for a proof transition.
///
/// `record_input` is the string produced by the record-to-input
/// serializer. Age and composite proofs carry the minimum-age threshold
/// as a second `u8` input; the remaining proofs take only the record.
pub fn proof_request(
    program: ProgramId,
    kind: ProofKind,
    record_input: String,
    params: &ProofParams,
) -> ExecutionRequest {
    let mut inputs = vec![record_input];
    if matches!(kind, ProofKind::Age | ProofKind::Composite) {
        inputs.push(format!("{}u8", params.effective_minimum_age()));
    }
    ExecutionRequest {
        program,
        function: kind.function_name().to_string(),
        inputs,
        fee: DEFAULT_FEE,
        private_fee: false,
    }
}

/// Build the execution request for credential issuance.
///
/// Inputs follow the credential record's field order: the recipient
/// address, then the claims. The issuer address and record encryption
/// are the program's and wallet's concern.
pub fn issue_request(
    program: ProgramId,
    owner: &AleoAddress,
    age: u8,
    country_code: u16,
    kyc_passed: bool,
    accredited_investor: bool,
) -> ExecutionRequest {
    ExecutionRequest {
        program,
        function: "issue_credential".to_string(),
        inputs: vec![
            owner.as_str().to_string(),
            format!("{age}u8"),
            format!("{country_code}u16"),
            kyc_passed.to_string(),
            accredited_investor.to_string(),
        ],
        fee: DEFAULT_FEE,
        private_fee: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program() -> ProgramId {
        ProgramId::new(PROGRAM_ID).unwrap()
    }

    #[test]
    fn age_proof_carries_threshold_input() {
        let req = proof_request(
            program(),
            ProofKind::Age,
            "record1abc".into(),
            &ProofParams::with_minimum_age(21),
        );
        assert_eq!(req.function, "prove_age");
        assert_eq!(req.inputs, vec!["record1abc".to_string(), "21u8".to_string()]);
        assert_eq!(req.fee, DEFAULT_FEE);
        assert!(!req.private_fee);
    }

    #[test]
    fn age_proof_defaults_threshold() {
        let req = proof_request(
            program(),
            ProofKind::Age,
            "record1abc".into(),
            &ProofParams::default(),
        );
        assert_eq!(req.inputs[1], "18u8");
    }

    #[test]
    fn composite_proof_carries_threshold_input() {
        let req = proof_request(
            program(),
            ProofKind::Composite,
            "record1abc".into(),
            &ProofParams::default(),
        );
        assert_eq!(req.function, "prove_composite");
        assert_eq!(req.inputs.len(), 2);
    }

    #[test]
    fn single_input_proofs_take_only_the_record() {
        for kind in [ProofKind::Kyc, ProofKind::Country, ProofKind::Accredited] {
            let req = proof_request(
                program(),
                kind,
                "record1abc".into(),
                &ProofParams::with_minimum_age(99),
            );
            assert_eq!(req.inputs, vec!["record1abc".to_string()], "{kind} inputs");
        }
    }

    #[test]
    fn issue_request_inputs_follow_record_field_order() {
        let owner = AleoAddress::new(format!("aleo1{}", "q".repeat(58))).unwrap();
        let req = issue_request(program(), &owner, 25, 840, true, false);
        assert_eq!(req.function, "issue_credential");
        assert_eq!(
            req.inputs,
            vec![
                owner.as_str().to_string(),
                "25u8".to_string(),
                "840u16".to_string(),
                "true".to_string(),
                "false".to_string(),
            ]
        );
    }

    #[test]
    fn explorer_url_echoes_the_id_verbatim() {
        let tx = TransactionId::new("at1qq-opaque/ID").unwrap();
        assert_eq!(
            explorer_url(&tx),
            "https://testnet.aleoscan.io/transaction?id=at1qq-opaque/ID"
        );
    }
}
