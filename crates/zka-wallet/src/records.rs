//! # Record Fetch/Merge Pipeline
//!
//! Retrieves a program's records from the wallet and normalizes them for
//! the decode layer. Two independent requests are made — plaintext-visible
//! and spendable-only — because wallet implementations split the useful
//! information across the two sets: the plaintext set has readable fields
//! for display, while the spendable set carries the opaque handles an
//! execution call needs.
//!
//! Each returned record is annotated with the wallet-native payload under
//! the reserved [`RECORD_INPUT_KEY`], preferring a payload matched by
//! record id, then the same-index spendable payload, then whatever the
//! record itself carries. Either request may fail; a failure degrades to
//! an empty set for that request (no retry, no propagation).

use std::collections::HashMap;

use serde_json::Value;

use zka_core::ProgramId;
use zka_record::{is_credential_record, passthrough_payload, RECORD_INPUT_KEY};

use crate::adapter::WalletAdapter;

/// Fetch, merge, annotate, and filter a program's credential records.
///
/// Returns only records that classify as credentials, each annotated
/// with the best-known wallet-native payload. An empty result means the
/// wallet has none (or both requests failed) — callers treat those the
/// same way.
pub fn fetch_credential_records(wallet: &dyn WalletAdapter, program: &ProgramId) -> Vec<Value> {
    let plaintext = request_or_empty(wallet, program, true);
    let spendable = request_or_empty(wallet, program, false);

    if plaintext.is_empty() && spendable.is_empty() {
        return Vec::new();
    }

    // Index spendable payloads by record id for cross-set matching.
    let mut spendable_by_id: HashMap<String, String> = HashMap::new();
    for item in &spendable {
        let Some(payload) = passthrough_payload(item) else {
            continue;
        };
        if let Some(id) = item.get("id").and_then(Value::as_str) {
            if !id.trim().is_empty() {
                spendable_by_id.insert(id.to_string(), payload);
            }
        }
    }

    let base = if plaintext.is_empty() {
        &spendable
    } else {
        &plaintext
    };

    base.iter()
        .enumerate()
        .map(|(index, item)| annotate(item, spendable.get(index), &spendable_by_id))
        .filter(is_credential_record)
        .collect()
}

fn request_or_empty(
    wallet: &dyn WalletAdapter,
    program: &ProgramId,
    include_plaintext: bool,
) -> Vec<Value> {
    match wallet.request_records(program, include_plaintext) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(
                adapter = wallet.adapter_name(),
                include_plaintext,
                error = %e,
                "record request failed; treating as empty"
            );
            Vec::new()
        }
    }
}

/// Attach the wallet-native payload to one base record.
fn annotate(
    item: &Value,
    same_index_spendable: Option<&Value>,
    spendable_by_id: &HashMap<String, String>,
) -> Value {
    let fallback_payload = same_index_spendable.and_then(passthrough_payload);

    let Some(source) = item.as_object() else {
        // Non-object entries are wrapped so downstream code always sees a
        // record object.
        let as_string = passthrough_payload(item);
        let record_field = match item {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let mut wrapped = serde_json::Map::new();
        wrapped.insert("record".to_string(), Value::String(record_field));
        if let Some(payload) = fallback_payload.or(as_string) {
            wrapped.insert(RECORD_INPUT_KEY.to_string(), Value::String(payload));
        }
        return Value::Object(wrapped);
    };

    let from_id = source
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.trim().is_empty())
        .and_then(|id| spendable_by_id.get(id).cloned());
    let from_self = passthrough_payload(item);

    let mut annotated = source.clone();
    if let Some(payload) = from_id.or(fallback_payload).or(from_self) {
        annotated.insert(RECORD_INPUT_KEY.to_string(), Value::String(payload));
    }
    Value::Object(annotated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalletError;
    use crate::mock::MockWalletAdapter;
    use serde_json::json;

    fn program() -> ProgramId {
        ProgramId::new("zkaccess_v2.aleo").unwrap()
    }

    fn plaintext_record(id: &str) -> Value {
        json!({
            "id": id,
            "recordName": "Credential",
            "data": {
                "owner.private": "aleo1abc.private",
                "issuer.private": "aleo1xyz.private",
                "age.private": "25u8.private",
                "country_code.private": "840u16.private",
                "kyc_passed.private": "true.private",
                "accredited_investor.private": "false.private"
            }
        })
    }

    fn spendable_record(id: &str, payload: &str) -> Value {
        json!({ "id": id, "recordName": "Credential", "record": payload })
    }

    #[test]
    fn annotates_by_id_across_sets() {
        let wallet = MockWalletAdapter::connected()
            .with_plaintext_records(vec![plaintext_record("r1")])
            .with_spendable_records(vec![spendable_record("r1", "record1handle")]);

        let records = fetch_credential_records(&wallet, &program());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0][RECORD_INPUT_KEY], "record1handle");
    }

    #[test]
    fn same_index_payload_when_ids_do_not_match() {
        let wallet = MockWalletAdapter::connected()
            .with_plaintext_records(vec![plaintext_record("r1")])
            .with_spendable_records(vec![spendable_record("other", "record1byindex")]);

        let records = fetch_credential_records(&wallet, &program());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0][RECORD_INPUT_KEY], "record1byindex");
    }

    #[test]
    fn id_match_beats_same_index() {
        let wallet = MockWalletAdapter::connected()
            .with_plaintext_records(vec![plaintext_record("r2")])
            .with_spendable_records(vec![
                spendable_record("r9", "record1wrong-index"),
                spendable_record("r2", "record1right-id"),
            ]);

        let records = fetch_credential_records(&wallet, &program());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0][RECORD_INPUT_KEY], "record1right-id");
    }

    #[test]
    fn self_payload_when_no_spendable_set() {
        let mut rec = plaintext_record("r1");
        rec.as_object_mut()
            .unwrap()
            .insert("record".into(), json!("record1selfcarried"));
        let wallet = MockWalletAdapter::connected().with_plaintext_records(vec![rec]);

        let records = fetch_credential_records(&wallet, &program());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0][RECORD_INPUT_KEY], "record1selfcarried");
    }

    #[test]
    fn failing_plaintext_request_degrades_to_spendable() {
        let wallet = MockWalletAdapter::connected()
            .with_spendable_records(vec![spendable_record("r1", "record1handle")])
            .failing_plaintext(WalletError::RequestFailed {
                reason: "permission denied".into(),
            });

        let records = fetch_credential_records(&wallet, &program());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0][RECORD_INPUT_KEY], "record1handle");
    }

    #[test]
    fn both_requests_failing_yield_empty() {
        let wallet = MockWalletAdapter::connected()
            .failing_plaintext(WalletError::NotConnected)
            .failing_spendable(WalletError::NotConnected);
        assert!(fetch_credential_records(&wallet, &program()).is_empty());
    }

    #[test]
    fn non_credential_records_are_filtered() {
        let wallet = MockWalletAdapter::connected().with_plaintext_records(vec![
            plaintext_record("r1"),
            json!({"recordName": "TokenRecord", "id": "t1"}),
            json!({"recordName": "CredentialProof", "id": "p1"}),
        ]);

        let records = fetch_credential_records(&wallet, &program());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["id"], "r1");
    }

    #[test]
    fn string_entries_are_wrapped() {
        // A wallet returning bare ciphertext strings still produces record
        // objects, but they cannot classify as credentials without fields
        // or markers — so they are filtered.
        let wallet = MockWalletAdapter::connected()
            .with_plaintext_records(vec![json!("record1bare-ciphertext")]);
        let records = fetch_credential_records(&wallet, &program());
        assert!(records.is_empty());
    }

    #[test]
    fn empty_wallet_yields_empty() {
        let wallet = MockWalletAdapter::connected();
        assert!(fetch_credential_records(&wallet, &program()).is_empty());
    }
}
