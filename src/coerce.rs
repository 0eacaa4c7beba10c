//! Lenient number handling for values coming from page markup or from
//! storage written by other code. Nothing here fails on bad input: strings
//! are read like attribute values, unusable values become `None`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads the leading base-10 integer of `raw` the way browsers parse
/// attribute values: leading whitespace and one sign are accepted, parsing
/// stops at the first non-digit. Returns `None` when no digit is found.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));
    Some(if negative { -magnitude } else { magnitude })
}

/// Integer view of an arbitrary JSON value. Floats are truncated, strings
/// go through [`parse_int_prefix`], everything else is `None`.
pub fn int_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => parse_int_prefix(s),
        _ => None,
    }
}

pub(crate) fn opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(int_from_value(&value))
}

/// Unit price: unusable or negative values count as 0.
pub(crate) fn price<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(ref n) if n.is_u64() => n.as_u64().unwrap_or(0),
        ref other => int_from_value(other).unwrap_or(0).max(0) as u64,
    })
}

/// Stored quantity: unusable values count as 1, negatives as 0 (raised to
/// 1 when the cart is read).
pub(crate) fn qty<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(int_from_value(&value)
        .map(|q| q.clamp(0, i64::from(u32::MAX)) as u32)
        .unwrap_or(1))
}
