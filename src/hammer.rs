// Bindings to the Hammer gesture recognizer loaded by the host page.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    /// Recognizer manager created over one element.
    pub type HammerManager;

    // Hammer is callable without `new`; it builds a manager with the
    // default recognizer set over the given element.
    #[wasm_bindgen(js_name = Hammer)]
    fn hammer(element: &Element, options: &JsValue) -> HammerManager;

    #[wasm_bindgen(method)]
    pub fn on(this: &HammerManager, events: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method)]
    pub fn get(this: &HammerManager, recognizer: &str) -> Recognizer;

    #[wasm_bindgen(method)]
    pub fn destroy(this: &HammerManager);

    pub type Recognizer;

    #[wasm_bindgen(method)]
    pub fn set(this: &Recognizer, options: &JsValue);

    /// Event payload handed to `on` callbacks.
    pub type HammerInput;

    #[wasm_bindgen(method, getter, js_name = "type")]
    pub fn event_type(this: &HammerInput) -> String;

    #[wasm_bindgen(method, getter, js_name = deltaX)]
    pub fn delta_x(this: &HammerInput) -> f64;

    #[wasm_bindgen(method, getter, js_name = deltaY)]
    pub fn delta_y(this: &HammerInput) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn scale(this: &HammerInput) -> f64;
}

/// Builds a manager that listens for pointer events where the library
/// reports support for them and for touch events otherwise, so mouse input
/// stays with the pan/zoom controller's own handlers.
pub fn manager_for(element: &Element) -> HammerManager {
    let namespace = Reflect::get(&js_sys::global(), &JsValue::from_str("Hammer"))
        .unwrap_or(JsValue::UNDEFINED);
    let pointer_events = Reflect::get(&namespace, &JsValue::from_str("SUPPORT_POINTER_EVENTS"))
        .ok()
        .and_then(|value| value.as_bool())
        .unwrap_or(false);
    let input_class = if pointer_events {
        "PointerEventInput"
    } else {
        "TouchInput"
    };

    let options = Object::new();
    if let Ok(class) = Reflect::get(&namespace, &JsValue::from_str(input_class)) {
        let _ = Reflect::set(&options, &JsValue::from_str("inputClass"), &class);
    }
    let manager = hammer(element, &options);
    enable_pinch(&manager);
    manager
}

// Pinch recognition is off by default in the library.
fn enable_pinch(manager: &HammerManager) {
    let options = Object::new();
    let _ = Reflect::set(&options, &JsValue::from_str("enable"), &JsValue::TRUE);
    manager.get("pinch").set(&options);
}
