use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::util::clog;

/// Name of the optional page-injected override, a JSON string assigned to
/// `window.droplineViewConfig` by the server-rendered host page.
pub const CONFIG_GLOBAL: &str = "droplineViewConfig";

/// Embedded chart and pan/zoom controller settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    /// `id` of the `<object>` element embedding the SVG chart.
    pub object_id: String,
    /// URL the `<object>` loads the chart document from.
    pub chart_url: String,
    pub zoom_enabled: bool,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub zoom_scale_sensitivity: f64,
    pub fit: bool,
    pub contain: bool,
    pub center: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            object_id: "svgObject".to_string(),
            chart_url: "chart.svg".to_string(),
            zoom_enabled: true,
            min_zoom: 0.1,
            max_zoom: 100.0,
            zoom_scale_sensitivity: 0.2,
            fit: true,
            contain: true,
            center: true,
        }
    }
}

/// Sign-in button and session cookie settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    /// Cookie carrying the identity token to the server.
    pub cookie_name: String,
    /// Cookie lifetime; the token itself expires server-side on the same
    /// schedule.
    pub max_age_secs: u32,
    /// `id` of the element the sign-in button renders into.
    pub mount_id: String,
    /// `id` of the sign-out button.
    pub signout_id: String,
    pub scope: String,
    pub button_width: u32,
    pub button_height: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "idtoken".to_string(),
            max_age_secs: 900,
            mount_id: "gedcom-web-view-google-signin".to_string(),
            signout_id: "signout".to_string(),
            scope: "profile email".to_string(),
            button_width: 120,
            button_height: 26,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerConfig {
    pub chart: ChartConfig,
    pub session: SessionConfig,
}

impl ViewerConfig {
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Reads the page-injected override, falling back to the defaults when
    /// the global is missing or does not parse.
    pub fn load() -> Self {
        let raw = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(CONFIG_GLOBAL))
            .ok()
            .and_then(|value| value.as_string());
        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|| {
                clog("ignoring malformed viewer config override, using defaults");
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
