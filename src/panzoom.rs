// Bindings to the svg-pan-zoom library loaded by the host page.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::ChartConfig;
use crate::state::ChartCommand;

#[wasm_bindgen]
extern "C" {
    /// Controller instance returned by the library for one SVG document.
    pub type SvgPanZoom;

    #[wasm_bindgen(js_name = svgPanZoom)]
    fn svg_pan_zoom(root: &Element, options: &JsValue) -> SvgPanZoom;

    #[wasm_bindgen(method, js_name = zoomIn)]
    pub fn zoom_in(this: &SvgPanZoom);

    #[wasm_bindgen(method, js_name = getZoom)]
    pub fn get_zoom(this: &SvgPanZoom) -> f64;

    /// Sets the absolute zoom factor, clamped by the controller to its
    /// configured min/max.
    #[wasm_bindgen(method)]
    pub fn zoom(this: &SvgPanZoom, factor: f64);

    #[wasm_bindgen(method, js_name = panBy)]
    pub fn pan_by(this: &SvgPanZoom, point: &JsValue);

    #[wasm_bindgen(method)]
    pub fn destroy(this: &SvgPanZoom);
}

/// Attaches the controller to the chart's root SVG element with the
/// configured options and our custom gesture events handler.
pub fn init(root: &Element, cfg: &ChartConfig, events_handler: &Object) -> SvgPanZoom {
    let options = Object::new();
    set(&options, "zoomEnabled", &JsValue::from_bool(cfg.zoom_enabled));
    set(&options, "minZoom", &JsValue::from_f64(cfg.min_zoom));
    set(&options, "maxZoom", &JsValue::from_f64(cfg.max_zoom));
    set(
        &options,
        "zoomScaleSensitivity",
        &JsValue::from_f64(cfg.zoom_scale_sensitivity),
    );
    set(&options, "fit", &JsValue::from_bool(cfg.fit));
    set(&options, "contain", &JsValue::from_bool(cfg.contain));
    set(&options, "center", &JsValue::from_bool(cfg.center));
    set(&options, "customEventsHandler", events_handler);
    svg_pan_zoom(root, &options)
}

/// Applies one adapter command to the controller.
pub fn exec(chart: &SvgPanZoom, command: ChartCommand) {
    match command {
        ChartCommand::ZoomIn => chart.zoom_in(),
        ChartCommand::ZoomTo(factor) => chart.zoom(factor),
        ChartCommand::PanBy { x, y } => chart.pan_by(&point(x, y)),
    }
}

fn set(target: &Object, key: &str, value: &JsValue) {
    let _ = Reflect::set(target, &JsValue::from_str(key), value);
}

/// `{x, y}` object for `panBy`.
fn point(x: f64, y: f64) -> JsValue {
    let p = Object::new();
    set(&p, "x", &JsValue::from_f64(x));
    set(&p, "y", &JsValue::from_f64(y));
    p.into()
}
