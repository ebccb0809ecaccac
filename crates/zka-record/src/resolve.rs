//! # Field Resolver
//!
//! Extracts one logical field from a raw wallet record, tolerating the
//! naming schemes in the wild: plain names (`owner`), dotted visibility
//! suffixes (`owner.private`, `owner.public`), underscore suffixes
//! (`owner_private`, `owner_public`), and a payload nested one level
//! under a `data` container. Scalars that arrive double-wrapped (an
//! object carrying `value` / `plaintext` / `text`) are unwrapped to the
//! innermost scalar.
//!
//! The resolver is a pure function over an abstract key-value view with
//! two concrete adapters — the flat record and the `data` container —
//! and an explicit, ordered variant list. First hit wins: once a variant
//! is found, no later variant is consulted, even when the found value is
//! empty or unusable. That keeps precedence deterministic across wallet
//! shapes instead of depending on which values happen to be non-empty.

use serde_json::{Map, Value};

use crate::field::{FieldKey, Visibility};

/// A resolved field value, one decode call's lifetime.
///
/// Produced here, consumed only by the literal encoder.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedValue {
    /// A string scalar (addresses, pre-suffixed literals, digit strings).
    Text(String),
    /// A numeric scalar.
    Number(f64),
    /// A boolean scalar.
    Flag(bool),
    /// No variant of the field was found, or the found value did not
    /// unwrap to a scalar.
    Absent,
}

impl ResolvedValue {
    /// Whether the field resolved to an actual scalar.
    pub fn is_present(&self) -> bool {
        !matches!(self, ResolvedValue::Absent)
    }
}

/// Abstract key-value view over one level of a raw record.
trait KeyValueView {
    fn lookup(&self, name: &str) -> Option<&Value>;
}

/// Adapter over the record's own top-level fields.
struct FlatView<'a>(&'a Map<String, Value>);

impl KeyValueView for FlatView<'_> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

/// Adapter over the record's `data` container, when it is an object.
struct DataView<'a>(&'a Map<String, Value>);

impl KeyValueView for DataView<'_> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.0.get("data")?.as_object()?.get(name)
    }
}

/// The five name variants tried for a logical key, in precedence order.
fn name_variants(key: FieldKey) -> [String; 5] {
    let base = key.name();
    [
        base.to_string(),
        format!("{base}{}", Visibility::Private.as_suffix()),
        format!("{base}{}", Visibility::Public.as_suffix()),
        format!("{base}_private"),
        format!("{base}_public"),
    ]
}

/// Wrapper sub-keys checked, in priority order, when a found value is
/// itself an object.
const WRAPPER_KEYS: [&str; 3] = ["value", "plaintext", "text"];

/// Unwrap a found value to its innermost scalar.
///
/// Objects are treated as wrappers when they carry a `value`,
/// `plaintext`, or `text` sub-key (that priority order, recursively).
/// Anything that never reaches a scalar resolves Absent.
fn unwrap_scalar(value: &Value) -> ResolvedValue {
    match value {
        Value::String(s) => ResolvedValue::Text(s.clone()),
        Value::Bool(b) => ResolvedValue::Flag(*b),
        Value::Number(n) => match n.as_f64() {
            Some(f) => ResolvedValue::Number(f),
            None => ResolvedValue::Absent,
        },
        Value::Object(obj) => {
            for key in WRAPPER_KEYS {
                if let Some(inner) = obj.get(key) {
                    return unwrap_scalar(inner);
                }
            }
            ResolvedValue::Absent
        }
        Value::Null | Value::Array(_) => ResolvedValue::Absent,
    }
}

/// Resolve one logical field from a raw wallet record.
///
/// Search order: every name variant directly on the record, then every
/// variant on `record.data`. The first variant found decides the
/// outcome — an unusable found value resolves Absent rather than
/// falling through to a later variant.
pub fn resolve_field(record: &Value, key: FieldKey) -> ResolvedValue {
    let Some(obj) = record.as_object() else {
        return ResolvedValue::Absent;
    };

    let variants = name_variants(key);
    let flat = FlatView(obj);
    let nested = DataView(obj);
    let views: [&dyn KeyValueView; 2] = [&flat, &nested];

    for view in views {
        for variant in &variants {
            if let Some(found) = view.lookup(variant) {
                return unwrap_scalar(found);
            }
        }
    }

    ResolvedValue::Absent
}
