// WebAssembly bindings for a browser conversion form
use crate::config::Config;
use crate::converter;
use crate::form::ConversionForm;
use crate::units::{ImperialUnit, LengthUnit, MetricUnit};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ConverterWasm {
    config: Config,
}

impl Default for ConverterWasm {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_units(from: &str, to: &str) -> Result<(MetricUnit, ImperialUnit), JsValue> {
    let from = from
        .parse::<MetricUnit>()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let to = to
        .parse::<ImperialUnit>()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok((from, to))
}

#[wasm_bindgen]
impl ConverterWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            config: Config::empty(),
        }
    }

    /// Create a converter from TOML config contents
    #[wasm_bindgen]
    pub fn with_config(config_content: &str) -> Result<ConverterWasm, JsValue> {
        let config = Config::load_from_str(config_content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?;
        Ok(Self { config })
    }

    /// Convert measurement text; undefined when the text is not a number
    #[wasm_bindgen]
    pub fn convert(&self, value: &str, from: &str, to: &str) -> Result<Option<String>, JsValue> {
        let (from, to) = parse_units(from, to)?;
        Ok(converter::convert(value, from, to))
    }

    /// Convert measurement text, falling back to the failure text
    #[wasm_bindgen]
    pub fn result_text(&self, value: &str, from: &str, to: &str) -> Result<String, JsValue> {
        let (from, to) = parse_units(from, to)?;
        let mut form = ConversionForm::from_config(&self.config);
        form.set_measurement(value);
        form.set_from(from);
        form.set_to(to);
        Ok(form.result_text())
    }

    /// Convert and return the full conversion as a JSON string
    #[wasm_bindgen]
    pub fn convert_json(&self, value: &str, from: &str, to: &str) -> Result<String, JsValue> {
        let (from, to) = parse_units(from, to)?;
        let conversion = converter::try_convert(value, from, to)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_json::to_string(&conversion)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize conversion: {}", e)))
    }

    /// All units as JSON: {"metric": [...], "imperial": [...]}
    #[wasm_bindgen]
    pub fn units(&self) -> Result<String, JsValue> {
        let describe = |name: &str, abbreviation: &str| {
            serde_json::json!({ "name": name, "abbreviation": abbreviation })
        };
        let metric: Vec<_> = MetricUnit::ALL
            .iter()
            .map(|u| describe(u.name(), u.abbreviation()))
            .collect();
        let imperial: Vec<_> = ImperialUnit::ALL
            .iter()
            .map(|u| describe(u.name(), u.abbreviation()))
            .collect();

        serde_json::to_string(&serde_json::json!({ "metric": metric, "imperial": imperial }))
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize units: {}", e)))
    }

    /// Text field hint for the selected source unit
    #[wasm_bindgen]
    pub fn placeholder(&self, from: &str) -> Result<String, JsValue> {
        let from = from
            .parse::<MetricUnit>()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let mut form = ConversionForm::from_config(&self.config);
        form.set_from(from);
        Ok(form.placeholder())
    }

    #[wasm_bindgen(getter)]
    pub fn failure_text(&self) -> String {
        self.config.failure_text.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn default_from(&self) -> String {
        self.config.defaults.from.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn default_to(&self) -> String {
        self.config.defaults.to.to_string()
    }
}
