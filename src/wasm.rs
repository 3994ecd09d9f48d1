// WebAssembly bindings for driving the calculator from a host page
use crate::config::Config;
use crate::engine::{self, CssProperty, InterpolationRequest, Unit};
use crate::session::{Field, MemoryClipboard, Session};
use std::time::Duration;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct FluidClampWasm {
    session: Session,
    // The host page performs the real clipboard write with the returned text
    clipboard: MemoryClipboard,
}

impl Default for FluidClampWasm {
    fn default() -> Self {
        Self {
            session: Session::default(),
            clipboard: MemoryClipboard::default(),
        }
    }
}

fn now() -> Duration {
    Duration::from_secs_f64(js_sys::Date::now() / 1000.0)
}

fn field_from_name(name: &str) -> Result<Field, JsValue> {
    match name {
        "minWidth" => Ok(Field::MinWidth),
        "maxWidth" => Ok(Field::MaxWidth),
        "minVal" => Ok(Field::MinValue),
        "maxVal" => Ok(Field::MaxValue),
        other => Err(JsValue::from_str(&format!("Unknown field '{}'", other))),
    }
}

#[wasm_bindgen]
impl FluidClampWasm {
    /// Create a session, optionally from TOML config text
    #[wasm_bindgen(constructor)]
    pub fn new(config_content: Option<String>) -> Result<FluidClampWasm, JsValue> {
        let config = match config_content {
            Some(content) => Config::load_from_str(&content)
                .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?,
            None => Config::empty(),
        };

        Ok(Self {
            session: Session::new(&config),
            clipboard: MemoryClipboard::default(),
        })
    }

    /// Field edited: "minWidth", "maxWidth", "minVal" or "maxVal"
    #[wasm_bindgen]
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), JsValue> {
        let field = field_from_name(name)?;
        self.session.set_field(field, value);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_property(&mut self, property: &str) -> Result<(), JsValue> {
        let property: CssProperty = property
            .parse()
            .map_err(|e: crate::Error| JsValue::from_str(&e.to_string()))?;
        self.session.set_property(property);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_unit(&mut self, unit: &str) -> Result<(), JsValue> {
        let unit: Unit = unit
            .parse()
            .map_err(|e: crate::Error| JsValue::from_str(&e.to_string()))?;
        self.session.set_unit(unit);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn blur_max_width(&mut self) {
        self.session.blur_max_width();
    }

    #[wasm_bindgen]
    pub fn resize_preview(&mut self, width: f64, height: f64) {
        self.session.resize_preview(width, height);
    }

    /// Declaration text or the invalid-range placeholder
    #[wasm_bindgen]
    pub fn output(&self) -> String {
        self.session.output().to_string()
    }

    #[wasm_bindgen]
    pub fn unit_label(&self) -> String {
        self.session.unit_label()
    }

    /// Width (px) the preview frame should have
    #[wasm_bindgen]
    pub fn frame_width(&self) -> String {
        self.session.surface().frame_width().to_string()
    }

    #[wasm_bindgen]
    pub fn preview_info(&self) -> String {
        self.session.surface().info().to_string()
    }

    /// Full HTML document for the preview iframe
    #[wasm_bindgen]
    pub fn preview_document(&self) -> String {
        self.session.surface().render_document()
    }

    /// Start the copy confirmation and return the text to place on the clipboard
    #[wasm_bindgen]
    pub fn copy(&mut self) -> Result<String, JsValue> {
        self.session
            .copy(&mut self.clipboard, now())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(self.clipboard.contents.clone().unwrap_or_default())
    }

    #[wasm_bindgen]
    pub fn copy_label(&self) -> String {
        self.session.copy_label(now()).to_string()
    }
}

/// Stateless helper: compute a declaration and return the result as JSON
#[wasm_bindgen]
pub fn calculate_json(
    min_width: f64,
    max_width: f64,
    min_value: f64,
    max_value: f64,
    unit: &str,
    property: &str,
) -> Result<String, JsValue> {
    let request = InterpolationRequest {
        min_width,
        max_width,
        min_value,
        max_value,
        unit: unit
            .parse()
            .map_err(|e: crate::Error| JsValue::from_str(&e.to_string()))?,
        property: property
            .parse()
            .map_err(|e: crate::Error| JsValue::from_str(&e.to_string()))?,
    };

    let result =
        engine::calculate(&request).map_err(|e| JsValue::from_str(e.placeholder()))?;

    serde_json::to_string(&result)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
}
