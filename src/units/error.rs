use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Invalid measurement: '{0}'")]
    InvalidMeasurement(String),

    #[error("Unknown unit: '{0}'")]
    UnknownUnit(String),
}
