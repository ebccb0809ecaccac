//! # Literal Encoder
//!
//! Renders a resolved field value in the program's input grammar. The
//! output of this module is consumed byte-for-byte by an on-chain
//! execution call: a wrong suffix or a stray character is rejected by
//! the program with no client-side recovery, so the rules here are
//! deliberately rigid.
//!
//! An empty output string is the failure signal — it propagates to the
//! serializer, which refuses to emit a partial literal.

use crate::field::{LiteralSuffix, Visibility};
use crate::resolve::ResolvedValue;

/// Encode a resolved value as a program-input literal.
///
/// - Text is trimmed; empty text encodes empty. A requested numeric
///   suffix is appended only when the text is purely decimal digits —
///   anything else is assumed to already be a fully-formed literal
///   (an address, or a pre-suffixed number like `25u8.private`).
/// - Flags render exactly `true` / `false`, never suffixed.
/// - Numbers truncate toward zero, stringify, and take the suffix.
///   Non-finite numbers are unencodable.
/// - Absent encodes empty.
pub fn encode_literal(value: &ResolvedValue, suffix: Option<LiteralSuffix>) -> String {
    match value {
        ResolvedValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return String::new();
            }
            match suffix {
                Some(sfx) if trimmed.bytes().all(|b| b.is_ascii_digit()) => {
                    format!("{trimmed}{sfx}")
                }
                _ => trimmed.to_string(),
            }
        }
        ResolvedValue::Flag(true) => "true".to_string(),
        ResolvedValue::Flag(false) => "false".to_string(),
        ResolvedValue::Number(n) => {
            if !n.is_finite() {
                return String::new();
            }
            let whole = n.trunc() as i64;
            match suffix {
                Some(sfx) => format!("{whole}{sfx}"),
                None => whole.to_string(),
            }
        }
        ResolvedValue::Absent => String::new(),
    }
}

/// Finalize the visibility of an identity-field literal.
///
/// Leaves a literal that already ends in `.private` or `.public`
/// unchanged; otherwise appends `.private`, the default visibility for
/// identity fields in this program. Empty input stays empty so the
/// mandatory-field failure signal survives finalization. Idempotent.
pub fn ensure_visibility(literal: &str) -> String {
    if literal.is_empty()
        || literal.ends_with(Visibility::Private.as_suffix())
        || literal.ends_with(Visibility::Public.as_suffix())
    {
        return literal.to_string();
    }
    format!("{literal}{}", Visibility::Private.as_suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_string_takes_numeric_suffix() {
        let v = ResolvedValue::Text("25".into());
        assert_eq!(encode_literal(&v, Some(LiteralSuffix::U8)), "25u8");
        let v = ResolvedValue::Text("840".into());
        assert_eq!(encode_literal(&v, Some(LiteralSuffix::U16)), "840u16");
    }

    #[test]
    fn presuffixed_string_passes_through() {
        let v = ResolvedValue::Text("25u8".into());
        assert_eq!(encode_literal(&v, Some(LiteralSuffix::U8)), "25u8");
        let v = ResolvedValue::Text("25u8.private".into());
        assert_eq!(encode_literal(&v, Some(LiteralSuffix::U8)), "25u8.private");
    }

    #[test]
    fn address_string_passes_through() {
        let v = ResolvedValue::Text("aleo1abc".into());
        assert_eq!(encode_literal(&v, None), "aleo1abc");
    }

    #[test]
    fn text_is_trimmed() {
        let v = ResolvedValue::Text("  aleo1abc  ".into());
        assert_eq!(encode_literal(&v, None), "aleo1abc");
        let v = ResolvedValue::Text(" 25 ".into());
        assert_eq!(encode_literal(&v, Some(LiteralSuffix::U8)), "25u8");
    }

    #[test]
    fn empty_and_whitespace_text_encode_empty() {
        assert_eq!(encode_literal(&ResolvedValue::Text(String::new()), None), "");
        assert_eq!(
            encode_literal(&ResolvedValue::Text("   ".into()), Some(LiteralSuffix::U8)),
            ""
        );
    }

    #[test]
    fn flags_render_bare_booleans() {
        assert_eq!(encode_literal(&ResolvedValue::Flag(true), None), "true");
        assert_eq!(encode_literal(&ResolvedValue::Flag(false), None), "false");
        // Never suffixed, whatever the caller asks for.
        assert_eq!(
            encode_literal(&ResolvedValue::Flag(true), Some(LiteralSuffix::U8)),
            "true"
        );
    }

    #[test]
    fn numbers_truncate_toward_zero() {
        assert_eq!(
            encode_literal(&ResolvedValue::Number(25.9), Some(LiteralSuffix::U8)),
            "25u8"
        );
        assert_eq!(
            encode_literal(&ResolvedValue::Number(-3.7), None),
            "-3"
        );
        assert_eq!(
            encode_literal(&ResolvedValue::Number(840.0), Some(LiteralSuffix::U16)),
            "840u16"
        );
    }

    #[test]
    fn non_finite_numbers_encode_empty() {
        assert_eq!(encode_literal(&ResolvedValue::Number(f64::NAN), None), "");
        assert_eq!(
            encode_literal(&ResolvedValue::Number(f64::INFINITY), Some(LiteralSuffix::U8)),
            ""
        );
    }

    #[test]
    fn absent_encodes_empty() {
        assert_eq!(encode_literal(&ResolvedValue::Absent, None), "");
        assert_eq!(encode_literal(&ResolvedValue::Absent, Some(LiteralSuffix::U16)), "");
    }

    #[test]
    fn ensure_visibility_appends_private_by_default() {
        assert_eq!(ensure_visibility("aleo1abc"), "aleo1abc.private");
    }

    #[test]
    fn ensure_visibility_respects_existing_suffix() {
        assert_eq!(ensure_visibility("aleo1abc.private"), "aleo1abc.private");
        assert_eq!(ensure_visibility("aleo1abc.public"), "aleo1abc.public");
    }

    #[test]
    fn ensure_visibility_is_idempotent() {
        let once = ensure_visibility("aleo1abc");
        let twice = ensure_visibility(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn ensure_visibility_keeps_empty_empty() {
        assert_eq!(ensure_visibility(""), "");
    }
}
