use crate::units::{ImperialUnit, MetricUnit};
use serde::{Deserialize, Serialize};

/// Message shown in place of a result when the measurement is not a number
pub const DEFAULT_FAILURE_TEXT: &str = "Error with initial measurement";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Text substituted for an invalid measurement
    #[serde(default = "default_failure_text")]
    pub failure_text: String,

    // Units selected when the form opens
    #[serde(default)]
    pub defaults: UnitDefaults,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct UnitDefaults {
    #[serde(default = "default_from")]
    pub from: MetricUnit,

    #[serde(default = "default_to")]
    pub to: ImperialUnit,
}

impl Default for UnitDefaults {
    fn default() -> Self {
        Self {
            from: default_from(),
            to: default_to(),
        }
    }
}

fn default_failure_text() -> String {
    DEFAULT_FAILURE_TEXT.to_string()
}

fn default_from() -> MetricUnit {
    MetricUnit::Meters
}

fn default_to() -> ImperialUnit {
    ImperialUnit::Feet
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        log::debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = toml::from_str(content)?;
        log::debug!(
            "Config defaults: {} -> {}",
            config.defaults.from,
            config.defaults.to
        );
        Ok(config)
    }

    pub fn empty() -> Self {
        Self {
            failure_text: default_failure_text(),
            defaults: UnitDefaults::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}
