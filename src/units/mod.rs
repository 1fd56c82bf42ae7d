// Length units, their names and the decimal formatting used for results

pub mod detector;
pub mod error;
pub mod formatter;
pub mod types;

pub use detector::{looks_like_measurement, parse_measurement};
pub use error::ConversionError;
pub use formatter::format_magnitude;
pub use types::{ImperialUnit, LengthUnit, MeasurementSystem, MetricUnit};
