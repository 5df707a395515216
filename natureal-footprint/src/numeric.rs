#![forbid(unsafe_code)]

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Reads a numeric form field. Empty, non-numeric and non-finite text all
/// count as 0.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Rounds half away from zero to two decimals. A non-finite total, which
/// only extreme inputs can produce, counts as 0 like non-finite input does.
pub fn round_to_cents(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        // already far beyond cent precision
        return value;
    }
    let rounded = scaled.round() / 100.0;
    // -0.00 would print with a sign
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// `deserialize_with` helper: accepts numbers, numeric strings, or anything
/// else (which becomes 0).
pub fn lenient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(match LenientNumber::deserialize(deserializer)? {
        LenientNumber::Number(v) if v.is_finite() => v,
        LenientNumber::Number(_) => 0.0,
        LenientNumber::Text(raw) => coerce_number(&raw),
        LenientNumber::Other(_) => 0.0,
    })
}
