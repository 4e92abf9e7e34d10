//! Serde helpers for fields the persisted format treats permissively.
//!
//! Older records (and hand-edited files) carry prices as strings, omit
//! quantities, or hold empty date strings. Loading must degrade to safe
//! defaults instead of failing the whole document.

use std::str::FromStr;

use rust_decimal::Decimal;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

pub(crate) const DATE_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]");

/// Decimal on the wire as a plain JSON number.
///
/// Accepts a number, a numeric string, or null; anything unparsable becomes
/// zero. Serialization normalizes trailing zeros so `240.00` round-trips as
/// `240`.
pub mod decimal {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::*;

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let normalized = value.normalize();
        match serde_json::Number::from_str(&normalized.to_string()) {
            Ok(number) => number.serialize(serializer),
            Err(_) => serializer.serialize_str(&normalized.to_string()),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(coerce(&value))
    }

    fn coerce(value: &serde_json::Value) -> Decimal {
        match value {
            serde_json::Value::Number(number) => {
                let raw = number.to_string();
                Decimal::from_str(&raw)
                    .or_else(|_| Decimal::from_scientific(&raw))
                    .unwrap_or_else(|_| {
                        tracing::warn!(%raw, "unparsable numeric value coerced to 0");
                        Decimal::ZERO
                    })
            }
            serde_json::Value::String(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Decimal::ZERO;
                }
                Decimal::from_str(trimmed).unwrap_or_else(|_| {
                    tracing::warn!(raw = %trimmed, "unparsable numeric string coerced to 0");
                    Decimal::ZERO
                })
            }
            _ => Decimal::ZERO,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn numbers_strings_and_null_all_coerce() {
            assert_eq!(coerce(&serde_json::json!(240)), Decimal::from(240));
            assert_eq!(coerce(&serde_json::json!("92.5")), Decimal::new(925, 1));
            assert_eq!(coerce(&serde_json::json!("  15 ")), Decimal::from(15));
            assert_eq!(coerce(&serde_json::Value::Null), Decimal::ZERO);
            assert_eq!(coerce(&serde_json::json!("n/a")), Decimal::ZERO);
            assert_eq!(coerce(&serde_json::json!("")), Decimal::ZERO);
        }

        #[test]
        fn serialization_drops_trailing_zeros() {
            let mut buf = Vec::new();
            let mut ser = serde_json::Serializer::new(&mut buf);
            serialize(&Decimal::new(24000, 2), &mut ser).unwrap();
            assert_eq!(String::from_utf8(buf).unwrap(), "240");
        }
    }
}

/// Calendar date on the wire as `"YYYY-MM-DD"`, with `""` meaning not set.
///
/// Invalid strings load as not set rather than failing the document.
pub mod date {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::*;

    pub fn serialize<S>(value: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => {
                let formatted = date
                    .format(&DATE_FORMAT)
                    .map_err(serde::ser::Error::custom)?;
                serializer.serialize_str(&formatted)
            }
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse))
    }

    fn parse(raw: &str) -> Option<Date> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match Date::parse(trimmed, &DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                tracing::warn!(raw = %trimmed, "invalid date string treated as not set");
                None
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use time::macros::date;

        #[test]
        fn iso_strings_parse_and_empty_means_unset() {
            assert_eq!(parse("2026-10-01"), Some(date!(2026 - 10 - 01)));
            assert_eq!(parse(""), None);
            assert_eq!(parse("   "), None);
            assert_eq!(parse("next tuesday"), None);
        }
    }
}
