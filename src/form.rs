use crate::config::{Config, DEFAULT_FAILURE_TEXT};
use crate::converter::convert;
use crate::units::{ImperialUnit, MetricUnit};

/// State behind a live conversion form: the text field and the two unit pickers
///
/// The result is derived on demand, so callers re-read `result_text` after
/// every edit instead of being notified.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionForm {
    pub measurement: String,
    pub from: MetricUnit,
    pub to: ImperialUnit,
    pub failure_text: String,
}

impl ConversionForm {
    pub fn new() -> Self {
        Self {
            measurement: String::new(),
            from: MetricUnit::Meters,
            to: ImperialUnit::Feet,
            failure_text: DEFAULT_FAILURE_TEXT.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            measurement: String::new(),
            from: config.defaults.from,
            to: config.defaults.to,
            failure_text: config.failure_text.clone(),
        }
    }

    pub fn set_measurement(&mut self, measurement: impl Into<String>) {
        self.measurement = measurement.into();
        log::trace!("Measurement set to {:?}", self.measurement);
    }

    pub fn set_from(&mut self, from: MetricUnit) {
        log::trace!("Source unit {} -> {}", self.from, from);
        self.from = from;
    }

    pub fn set_to(&mut self, to: ImperialUnit) {
        log::trace!("Target unit {} -> {}", self.to, to);
        self.to = to;
    }

    /// Hint shown in the empty text field
    pub fn placeholder(&self) -> String {
        format!("Measurement in {}", self.from)
    }

    pub fn result(&self) -> Option<String> {
        convert(&self.measurement, self.from, self.to)
    }

    /// The result line, or the failure text when the measurement is invalid
    pub fn result_text(&self) -> String {
        self.result().unwrap_or_else(|| self.failure_text.clone())
    }
}

impl Default for ConversionForm {
    fn default() -> Self {
        Self::new()
    }
}
