//! # Record Classifier
//!
//! Decides whether an opaque wallet record represents a credential, as
//! opposed to a spent/change record, a proof-output record, or another
//! program's record entirely.
//!
//! Classification prefers explicit type markers when the wallet provides
//! them and falls back to structural detection when it does not. A marker
//! mentioning both "credential" and "proof" classifies as NOT a
//! credential: proof-derived and consumed records must never be
//! misclassified as fresh credentials, whatever their field layout says.

use serde_json::Value;

use crate::field::FieldKey;

/// Marker keys a wallet may label records with, checked on the record
/// itself and nested under `data`.
const MARKER_KEYS: [&str; 2] = ["recordName", "type"];

/// Whether a raw wallet record represents a credential record.
///
/// 1. Collect every string marker among `recordName` / `type` on the
///    record and on `record.data`, join and lowercase them. A non-empty
///    marker classifies by substring: contains `"credential"` and does
///    not contain `"proof"`.
/// 2. With no marker anywhere, fall back to structure: the field source
///    (`record.data` if present, else the record) must contain all six
///    mandatory keys. Presence only — values are not type-checked here.
pub fn is_credential_record(record: &Value) -> bool {
    let Some(obj) = record.as_object() else {
        return false;
    };

    let mut marker = String::new();
    for key in MARKER_KEYS {
        if let Some(s) = obj.get(key).and_then(Value::as_str) {
            marker.push_str(s);
            marker.push(' ');
        }
    }
    if let Some(data) = obj.get("data").and_then(Value::as_object) {
        for key in MARKER_KEYS {
            if let Some(s) = data.get(key).and_then(Value::as_str) {
                marker.push_str(s);
                marker.push(' ');
            }
        }
    }

    let marker = marker.trim().to_lowercase();
    if !marker.is_empty() {
        return marker.contains("credential") && !marker.contains("proof");
    }

    let source = obj.get("data").and_then(Value::as_object).unwrap_or(obj);
    FieldKey::MANDATORY
        .iter()
        .all(|key| source.contains_key(key.name()))
}
