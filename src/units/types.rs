use crate::units::error::ConversionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which family of units a length unit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    Metric,
    Imperial,
}

impl MeasurementSystem {
    pub fn name(&self) -> &'static str {
        match self {
            MeasurementSystem::Metric => "metric",
            MeasurementSystem::Imperial => "imperial",
        }
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Common surface of the two unit enums, used when listing units
pub trait LengthUnit: Copy + fmt::Display + 'static {
    /// Lowercase plural name ("meters", "feet")
    fn name(&self) -> &'static str;
    /// Short symbol ("m", "ft")
    fn abbreviation(&self) -> &'static str;
    fn system(&self) -> MeasurementSystem;
}

/// Source unit of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricUnit {
    Centimeters,
    Meters,
    Kilometers,
}

impl MetricUnit {
    /// Picker order
    pub const ALL: [MetricUnit; 3] = [
        MetricUnit::Centimeters,
        MetricUnit::Meters,
        MetricUnit::Kilometers,
    ];
}

impl LengthUnit for MetricUnit {
    fn name(&self) -> &'static str {
        match self {
            MetricUnit::Centimeters => "centimeters",
            MetricUnit::Meters => "meters",
            MetricUnit::Kilometers => "kilometers",
        }
    }

    fn abbreviation(&self) -> &'static str {
        match self {
            MetricUnit::Centimeters => "cm",
            MetricUnit::Meters => "m",
            MetricUnit::Kilometers => "km",
        }
    }

    fn system(&self) -> MeasurementSystem {
        MeasurementSystem::Metric
    }
}

impl fmt::Display for MetricUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MetricUnit {
    type Err = ConversionError;

    /// Accepts plural, singular or abbreviated spellings, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "centimeters" | "centimeter" | "cm" => Ok(MetricUnit::Centimeters),
            "meters" | "meter" | "m" => Ok(MetricUnit::Meters),
            "kilometers" | "kilometer" | "km" => Ok(MetricUnit::Kilometers),
            _ => Err(ConversionError::UnknownUnit(s.to_string())),
        }
    }
}

/// Target unit of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImperialUnit {
    Inches,
    Feet,
    Miles,
}

impl ImperialUnit {
    /// Picker order
    pub const ALL: [ImperialUnit; 3] = [
        ImperialUnit::Inches,
        ImperialUnit::Feet,
        ImperialUnit::Miles,
    ];
}

impl LengthUnit for ImperialUnit {
    fn name(&self) -> &'static str {
        match self {
            ImperialUnit::Inches => "inches",
            ImperialUnit::Feet => "feet",
            ImperialUnit::Miles => "miles",
        }
    }

    fn abbreviation(&self) -> &'static str {
        match self {
            ImperialUnit::Inches => "in",
            ImperialUnit::Feet => "ft",
            ImperialUnit::Miles => "mi",
        }
    }

    fn system(&self) -> MeasurementSystem {
        MeasurementSystem::Imperial
    }
}

impl fmt::Display for ImperialUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ImperialUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inches" | "inch" | "in" => Ok(ImperialUnit::Inches),
            "feet" | "foot" | "ft" => Ok(ImperialUnit::Feet),
            "miles" | "mile" | "mi" => Ok(ImperialUnit::Miles),
            _ => Err(ConversionError::UnknownUnit(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_lowercase_plural() {
        let names: Vec<&str> = MetricUnit::ALL.iter().map(|u| u.name()).collect();
        assert_eq!(names, vec!["centimeters", "meters", "kilometers"]);

        let names: Vec<String> = ImperialUnit::ALL.iter().map(|u| u.to_string()).collect();
        assert_eq!(names, vec!["inches", "feet", "miles"]);
    }

    #[test]
    fn test_parse_unit_spellings() {
        assert_eq!("meters".parse::<MetricUnit>().unwrap(), MetricUnit::Meters);
        assert_eq!("KM".parse::<MetricUnit>().unwrap(), MetricUnit::Kilometers);
        assert_eq!(
            "centimeter".parse::<MetricUnit>().unwrap(),
            MetricUnit::Centimeters
        );
        assert_eq!("ft".parse::<ImperialUnit>().unwrap(), ImperialUnit::Feet);
        assert_eq!("Foot".parse::<ImperialUnit>().unwrap(), ImperialUnit::Feet);
        assert_eq!("mi".parse::<ImperialUnit>().unwrap(), ImperialUnit::Miles);

        // Imperial names are not metric units and vice versa
        assert!("feet".parse::<MetricUnit>().is_err());
        assert!("meters".parse::<ImperialUnit>().is_err());
        assert!("".parse::<ImperialUnit>().is_err());
    }

    #[test]
    fn test_unknown_unit_error_keeps_input() {
        match "yards".parse::<ImperialUnit>() {
            Err(ConversionError::UnknownUnit(name)) => assert_eq!(name, "yards"),
            other => panic!("Expected UnknownUnit, got {:?}", other),
        }
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&MetricUnit::Kilometers).unwrap();
        assert_eq!(json, "\"kilometers\"");

        let unit: ImperialUnit = serde_json::from_str("\"miles\"").unwrap();
        assert_eq!(unit, ImperialUnit::Miles);
        assert_eq!(unit.system(), MeasurementSystem::Imperial);
    }
}
