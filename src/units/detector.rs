use crate::units::types::MetricUnit;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Number (optional sign, decimal point, exponent) + whitespace + unit word
    /// Examples: "100 m", "2.5 km", "-10 centimeters", "1e3 cm"
    static ref MEASUREMENT_PATTERN: Regex = Regex::new(
        r"^([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s+([a-zA-Z]+)$"
    ).unwrap();
}

/// Check if a string looks like "<number> <unit word>"
pub fn looks_like_measurement(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    MEASUREMENT_PATTERN.is_match(trimmed)
}

/// Split a measurement string into its numeric text and metric unit
/// Returns None when the string has no unit suffix or the unit is not metric
pub fn parse_measurement(s: &str) -> Option<(String, MetricUnit)> {
    let captures = MEASUREMENT_PATTERN.captures(s.trim())?;
    let number = captures.get(1)?.as_str();
    let unit = captures.get(2)?.as_str().parse::<MetricUnit>().ok()?;
    Some((number.to_string(), unit))
}
