// WebAssembly bindings for the physic API
use crate::config::Config;
use crate::reading::{self, NormalizedReading, QuantityKind, Reading};
use wasm_bindgen::prelude::*;

fn js_error(message: String) -> JsValue {
    js_sys::Error::new(&message).into()
}

fn kind_from_name(kind: &str) -> Result<QuantityKind, JsValue> {
    QuantityKind::from_name(kind).ok_or_else(|| js_error(format!("Unknown quantity kind: {}", kind)))
}

#[wasm_bindgen]
pub struct PhysicWasm {}

impl Default for PhysicWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl PhysicWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {}
    }

    /// Parse `input` as a quantity of `kind` (snake case, e.g. "distance")
    /// Returns JSON string of the normalized reading
    #[wasm_bindgen]
    pub fn parse(&self, kind: &str, input: &str) -> Result<String, JsValue> {
        let kind = kind_from_name(kind)?;
        let reading = Reading::parse(kind, input)
            .map_err(|e| js_error(format!("Failed to parse {} '{}': {}", kind, input, e)))?;

        let normalized = NormalizedReading::new(kind.as_str(), reading, input);
        serde_json::to_string(&normalized)
            .map_err(|e| js_error(format!("Failed to serialize reading: {}", e)))
    }

    /// Format a raw base-unit count; `raw` is a JS number, so exact only up to 2^53
    #[wasm_bindgen]
    pub fn format(&self, kind: &str, raw: f64) -> Result<String, JsValue> {
        let kind = kind_from_name(kind)?;
        if raw.fract() != 0.0 || raw.abs() > 9_007_199_254_740_992.0 {
            return Err(js_error(format!("Raw count must be a safe integer, got {}", raw)));
        }
        let reading = Reading::from_raw(kind, raw as i64)
            .map_err(|e| js_error(format!("Failed to format {} {}: {}", kind, raw, e)))?;
        Ok(reading.to_string())
    }

    /// Normalize a readings TOML document
    /// Returns JSON string with the readings and the per-reading issues
    #[wasm_bindgen]
    pub fn check(&self, toml_content: &str) -> Result<String, JsValue> {
        let config = Config::load_from_str(toml_content)
            .map_err(|e| js_error(format!("Failed to load readings: {}", e)))?;
        let set = reading::process_readings(&config);

        serde_json::to_string(&set).map_err(|e| js_error(format!("Failed to serialize readings: {}", e)))
    }

    /// List quantity kinds
    /// Returns JSON string array of snake case names
    #[wasm_bindgen]
    pub fn kinds(&self) -> Result<String, JsValue> {
        serde_json::to_string(QuantityKind::ALL)
            .map_err(|e| js_error(format!("Failed to serialize kinds: {}", e)))
    }
}
