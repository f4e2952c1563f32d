// Small browser helpers used across the app.

use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub fn window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

pub fn document() -> web_sys::Document {
    window().document().expect("should have a document on window")
}
