//! Browser bindings.
//!
//! Messages, outcomes and layers cross the boundary as JSON strings.

use wasm_bindgen::prelude::*;

use crate::config::AppConfig;
use crate::interaction::PointerEvent;
use crate::marker::MarkerIcon;
use crate::model::{ActiveAction, Coordinate};
use crate::{Annotator, LayerProjector, Message, Outcome, layer_styles};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// The annotation state machine, as seen from JavaScript.
#[wasm_bindgen]
pub struct MapAnnotator {
    inner: Annotator,
    config: AppConfig,
    marker: Option<MarkerIcon>,
}

#[wasm_bindgen]
impl MapAnnotator {
    /// Create an annotator. `config_json` may be empty for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<MapAnnotator, JsValue> {
        let config = if config_json.trim().is_empty() {
            AppConfig::default()
        } else {
            AppConfig::from_json(config_json).map_err(to_js_error)?
        };

        // Ignore the error if logging was already set up by a previous instance
        let _ = console_log::init_with_level(config.preferences.log_level.to_level());
        log::info!("mapnote starting");

        Ok(MapAnnotator {
            inner: Annotator::from_config(&config),
            config,
            marker: None,
        })
    }

    /// Decode the custom marker icon. Throws if the image is unusable.
    #[wasm_bindgen(js_name = loadMarker)]
    pub fn load_marker(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        self.marker = Some(MarkerIcon::from_bytes(bytes).map_err(to_js_error)?);
        Ok(())
    }

    #[wasm_bindgen(js_name = markerWidth)]
    pub fn marker_width(&self) -> u32 {
        self.marker.as_ref().map_or(0, |m| m.width)
    }

    #[wasm_bindgen(js_name = markerHeight)]
    pub fn marker_height(&self) -> u32 {
        self.marker.as_ref().map_or(0, |m| m.height)
    }

    /// RGBA pixels of the marker icon, empty when none is loaded.
    #[wasm_bindgen(js_name = markerPixels)]
    pub fn marker_pixels(&self) -> Vec<u8> {
        self.marker
            .as_ref()
            .map(|m| m.rgba.clone())
            .unwrap_or_default()
    }

    /// Apply a JSON encoded [`Message`] and return the JSON encoded outcome.
    pub fn update(&mut self, message_json: &str) -> Result<String, JsValue> {
        let message: Message = serde_json::from_str(message_json).map_err(to_js_error)?;
        encode(&self.inner.update(message))
    }

    /// Import an uploaded file, picking the format from its extension.
    /// Throws for extensions no parser accepts.
    #[wasm_bindgen(js_name = importFile)]
    pub fn import_file(&mut self, name: &str, contents: &str) -> Result<String, JsValue> {
        let format = self
            .inner
            .parsers()
            .for_file_name(name)
            .map(|p| p.format())
            .ok_or_else(|| JsValue::from_str(&format!("Unsupported file '{}'", name)))?;
        encode(&self.inner.update(Message::ImportFile {
            format,
            contents: contents.to_string(),
        }))
    }

    /// Toolbar button by action name (`"AddPoint"`, `"Erase"`, ...).
    #[wasm_bindgen(js_name = selectTool)]
    pub fn select_tool(&mut self, action: &str) -> Result<String, JsValue> {
        let action = ActiveAction::from_name(action)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown tool '{}'", action)))?;
        encode(&self.inner.update(Message::SelectTool { action }))
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, lat: f64, lng: f64) -> Result<String, JsValue> {
        self.pointer(PointerEvent::Move(Coordinate::new(lat, lng)))
    }

    #[wasm_bindgen(js_name = pointerClick)]
    pub fn pointer_click(&mut self, lat: f64, lng: f64) -> Result<String, JsValue> {
        self.pointer(PointerEvent::Click(Coordinate::new(lat, lng)))
    }

    #[wasm_bindgen(js_name = pointerDoubleClick)]
    pub fn pointer_double_click(&mut self, lat: f64, lng: f64) -> Result<String, JsValue> {
        self.pointer(PointerEvent::DoubleClick(Coordinate::new(lat, lng)))
    }

    /// Name of the active tool.
    #[wasm_bindgen(js_name = activeAction)]
    pub fn active_action(&self) -> String {
        format!("{:?}", self.inner.action())
    }

    /// Toast text for the active tool, if any.
    pub fn hint(&self) -> Option<String> {
        self.inner.hint().map(str::to_string)
    }

    /// Whether the last import submit failed.
    #[wasm_bindgen(js_name = importInvalid)]
    pub fn import_invalid(&self) -> bool {
        self.inner.draft().is_some_and(|d| d.is_invalid())
    }

    /// Whether layers changed since the last call to `layers()`.
    #[wasm_bindgen(js_name = isDirty)]
    pub fn is_dirty(&self) -> bool {
        self.inner.is_dirty()
    }

    /// Current layer sources as JSON. Clears the dirty flag.
    pub fn layers(&mut self) -> Result<String, JsValue> {
        let layers = LayerProjector::project(&self.inner);
        self.inner.clear_dirty();
        serde_json::to_string(&layers).map_err(to_js_error)
    }

    /// Layer style descriptors as JSON.
    #[wasm_bindgen(js_name = layerStyles)]
    pub fn layer_styles(&self) -> Result<String, JsValue> {
        serde_json::to_string(&layer_styles()).map_err(to_js_error)
    }

    /// Style URL of the configured basemap.
    #[wasm_bindgen(js_name = basemapUrl)]
    pub fn basemap_url(&self) -> Option<String> {
        self.config.active_basemap_url().map(str::to_string)
    }

    /// Initial camera as `[latitude, longitude, zoom]`.
    #[wasm_bindgen(js_name = initialView)]
    pub fn initial_view(&self) -> Vec<f64> {
        let view = self.config.map;
        vec![view.latitude, view.longitude, view.zoom]
    }
}

impl MapAnnotator {
    fn pointer(&mut self, event: PointerEvent) -> Result<String, JsValue> {
        encode(&self.inner.update(Message::Pointer { event }))
    }
}

fn encode(outcome: &Outcome) -> Result<String, JsValue> {
    serde_json::to_string(outcome).map_err(to_js_error)
}
