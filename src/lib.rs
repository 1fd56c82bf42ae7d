pub mod config;
pub mod converter;
pub mod form;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use converter::{convert, try_convert, Conversion};
pub use units::{ConversionError, ImperialUnit, MeasurementSystem, MetricUnit};
