// Metric to imperial length conversion, going through inches

use crate::units::{format_magnitude, ConversionError, ImperialUnit, MetricUnit};
use serde::{Deserialize, Serialize};


/// A successful conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// Measurement text as entered
    pub input: String,
    pub from: MetricUnit,
    pub to: ImperialUnit,
    /// Unrounded converted value
    pub magnitude: f64,
    /// "<number> <unit name>", e.g. "3.281 feet"
    pub formatted: String,
}

/// Inches in one `unit`
fn inches_per_unit(unit: MetricUnit) -> f64 {
    match unit {
        MetricUnit::Centimeters => 1.0 / 2.54,
        MetricUnit::Meters => 39.37,
        MetricUnit::Kilometers => 39370.0,
    }
}

/// `unit`s in one inch
fn units_per_inch(unit: ImperialUnit) -> f64 {
    match unit {
        ImperialUnit::Inches => 1.0,
        ImperialUnit::Feet => 1.0 / 12.0,
        ImperialUnit::Miles => 1.0 / 63360.0,
    }
}

/// Convert an already parsed value
pub fn convert_value(value: f64, from: MetricUnit, to: ImperialUnit) -> f64 {
    value * inches_per_unit(from) * units_per_inch(to)
}

/// Parse measurement text into a finite number
pub fn parse_value(raw_value: &str) -> Result<f64, ConversionError> {
    match raw_value.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ConversionError::InvalidMeasurement(raw_value.to_string())),
    }
}

/// Convert measurement text, keeping the intermediate values
pub fn try_convert(
    raw_value: &str,
    from: MetricUnit,
    to: ImperialUnit,
) -> Result<Conversion, ConversionError> {
    let value = parse_value(raw_value)?;

    let magnitude = convert_value(value, from, to);
    if !magnitude.is_finite() {
        return Err(ConversionError::InvalidMeasurement(raw_value.to_string()));
    }

    let formatted = format!("{} {}", format_magnitude(magnitude), to);

    Ok(Conversion {
        input: raw_value.to_string(),
        from,
        to,
        magnitude,
        formatted,
    })
}

/// Convert measurement text into a result line such as "3.281 feet"
/// Returns None when the text is not a number
pub fn convert(raw_value: &str, from: MetricUnit, to: ImperialUnit) -> Option<String> {
    try_convert(raw_value, from, to)
        .ok()
        .map(|conversion| conversion.formatted)
}

/// Convert one measurement into every imperial unit, in picker order
pub fn convert_to_all(
    raw_value: &str,
    from: MetricUnit,
) -> Result<Vec<Conversion>, ConversionError> {
    ImperialUnit::ALL
        .iter()
        .map(|&to| try_convert(raw_value, from, to))
        .collect()
}
