//! # Record-to-Input Serializer
//!
//! Turns a raw wallet record into the single input string an execution
//! call consumes. Wallets differ in what they accept: some take their
//! own opaque record handle back, some need a JSON envelope they resolve
//! internally, and some need the full plaintext struct literal. The
//! cascade here tries the cheap passthrough shapes first and only
//! reconstructs the literal when nothing else commits.
//!
//! The cascade is an explicit ordered list of named strategies, each
//! returning `Option<String>`, short-circuited by the first `Some`.
//! Precedence is part of the contract — it must not depend on which
//! values happen to be truthy.

use serde_json::{Map, Value};

use crate::encode::{encode_literal, ensure_visibility};
use crate::field::FieldKey;
use crate::resolve::resolve_field;

/// Reserved key under which the record-fetch pipeline stashes the
/// wallet-native passthrough payload on each record it returns.
pub const RECORD_INPUT_KEY: &str = "__recordInput";

/// Direct single-field passthrough candidates, in precedence order.
const PASSTHROUGH_CANDIDATES: [&str; 4] = ["record", "ciphertext", "plaintext", "value"];

/// Members copied into the wallet-resolvable JSON envelope, in order.
/// `id`, `program_id`, and `data` are required; the rest are optional.
const ENVELOPE_MEMBERS: [&str; 6] = ["id", "owner", "program_id", "spent", "recordName", "data"];

/// Resolve a raw wallet record into an execution-call input string.
///
/// Returns `None` when the record cannot be rendered in any supported
/// shape. That is an expected, recoverable outcome: the caller surfaces
/// a message and aborts before anything reaches the wallet. No partial
/// literal is ever returned — a malformed input would fail on-chain far
/// later, with nothing to attribute the rejection to.
pub fn to_record_input(record: &Value) -> Option<String> {
    const STRATEGIES: [(&str, fn(&Value) -> Option<String>); 5] = [
        ("string-passthrough", string_passthrough),
        ("reserved-passthrough", reserved_passthrough),
        ("wallet-resolvable-envelope", wallet_resolvable_envelope),
        ("single-field-candidate", single_field_candidate),
        ("literal-reconstruction", literal_reconstruction),
    ];

    for (name, strategy) in STRATEGIES {
        if let Some(input) = strategy(record) {
            tracing::debug!(strategy = name, "record input resolved");
            return Some(input);
        }
    }
    tracing::debug!("record input unresolvable in any supported shape");
    None
}

/// The wallet-native payload a record carries, when one exists: the
/// record itself as a pre-resolved string, or the first non-empty
/// single-field candidate. Used by the record-fetch pipeline to index
/// spendable payloads and annotate records with [`RECORD_INPUT_KEY`].
pub fn passthrough_payload(record: &Value) -> Option<String> {
    string_passthrough(record).or_else(|| single_field_candidate(record))
}

/// The wallet already pre-resolved the record to a string.
fn string_passthrough(record: &Value) -> Option<String> {
    match record {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// The record-fetch pipeline stashed a wallet-native payload under the
/// reserved key; return it verbatim so wallets that accept their own
/// record handle skip reconstruction entirely.
fn reserved_passthrough(record: &Value) -> Option<String> {
    let payload = record.as_object()?.get(RECORD_INPUT_KEY)?.as_str()?;
    if payload.trim().is_empty() {
        return None;
    }
    Some(payload.to_string())
}

/// Some wallets resolve records internally from a JSON envelope carrying
/// `id`, `program_id`, and the `data` object. Optional members ride
/// along when present, in fixed member order.
fn wallet_resolvable_envelope(record: &Value) -> Option<String> {
    let obj = record.as_object()?;
    let has_shape = obj.contains_key("id")
        && obj.contains_key("program_id")
        && obj.get("data").is_some_and(Value::is_object);
    if !has_shape {
        return None;
    }

    let mut envelope = Map::new();
    for member in ENVELOPE_MEMBERS {
        if let Some(v) = obj.get(member) {
            envelope.insert(member.to_string(), v.clone());
        }
    }
    serde_json::to_string(&Value::Object(envelope)).ok()
}

/// A non-empty string under one of the direct candidate keys, or their
/// `data`-nested equivalents, is taken verbatim.
fn single_field_candidate(record: &Value) -> Option<String> {
    let obj = record.as_object()?;

    let pick = |source: &Map<String, Value>| -> Option<String> {
        for key in PASSTHROUGH_CANDIDATES {
            if let Some(s) = source.get(key).and_then(Value::as_str) {
                if !s.trim().is_empty() {
                    return Some(s.to_string());
                }
            }
        }
        None
    };

    pick(obj).or_else(|| obj.get("data").and_then(Value::as_object).and_then(pick))
}

/// Last resort: rebuild the plaintext struct literal field by field.
fn literal_reconstruction(record: &Value) -> Option<String> {
    build_credential_literal(record)
}

/// Reconstruct the credential struct literal from a raw record.
///
/// Resolves and encodes all six mandatory fields plus the optional
/// nonce. Any mandatory field encoding empty fails the whole operation.
/// The output grammar is fixed:
///
/// ```text
/// { owner: <addr>.private, issuer: <addr>.private, age: <n>u8,
///   country_code: <n>u16, kyc_passed: <bool>, accredited_investor: <bool>
///   [, _nonce: <group>] }
/// ```
///
/// rendered on one line, single space after `:` and after each comma.
pub fn build_credential_literal(record: &Value) -> Option<String> {
    let mut members = Vec::with_capacity(7);

    for key in FieldKey::MANDATORY {
        let resolved = resolve_field(record, key);
        let mut literal = encode_literal(&resolved, key.suffix());
        if key.wants_visibility() {
            literal = ensure_visibility(&literal);
        }
        if literal.is_empty() {
            tracing::debug!(field = key.name(), "mandatory field unresolvable");
            return None;
        }
        members.push(format!("{}: {literal}", key.name()));
    }

    let nonce = encode_literal(&resolve_field(record, FieldKey::Nonce), None);
    if !nonce.is_empty() {
        members.push(format!("{}: {nonce}", FieldKey::Nonce.name()));
    }

    Some(format!("{{ {} }}", members.join(", ")))
}
