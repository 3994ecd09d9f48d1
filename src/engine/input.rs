use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Leading numeric prefix of a form field
    /// Matches: optional sign, digits with optional fraction (or a bare fraction), optional exponent
    /// Examples: "320", "-1.5", ".75", "1e3", "12px" (prefix "12")
    static ref NUMERIC_PREFIX: Regex =
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").unwrap();
}

/// Coerce raw field text into a number
/// Reads the leading numeric prefix and ignores the rest; empty,
/// non-numeric or non-finite input becomes 0
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let parsed = NUMERIC_PREFIX
        .find(trimmed)
        .and_then(|m| m.as_str().parse::<f64>().ok());

    match parsed {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => 0.0,
    }
}
