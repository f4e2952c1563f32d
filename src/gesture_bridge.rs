// Adapts recognizer gestures to pan/zoom controller commands.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::hammer::{self, HammerInput, HammerManager};
use crate::panzoom::{self, SvgPanZoom};
use crate::state::{gesture, GestureState};
use crate::util::clog;

/// Touch events the controller must leave alone while the recognizer owns
/// them.
const HALT_EVENT_LISTENERS: [&str; 5] = [
    "touchstart",
    "touchend",
    "touchmove",
    "touchleave",
    "touchcancel",
];

/// Recognizer registrations, grouped the way the recognizers emit them.
const GESTURE_GROUPS: [&str; 3] = ["doubletap", "panstart panmove", "pinchstart pinchmove"];

struct BridgeInner {
    state: GestureState,
    manager: Option<HammerManager>,
    gesture_handler: Option<Closure<dyn FnMut(HammerInput)>>,
    touchmove_guard: Option<EventListener>,
}

/// Custom events handler handed to the pan/zoom controller. Owns the
/// recognizer and the gesture session state for one chart.
///
/// The controller calls `init` with `{svgElement, instance}` once it is
/// attached and `destroy` when it is torn down; everything wired up in
/// between is released again on `destroy`.
pub struct GestureBridge {
    inner: Rc<RefCell<BridgeInner>>,
    handler: Object,
    _init: Closure<dyn FnMut(JsValue)>,
    _destroy: Closure<dyn FnMut()>,
}

impl GestureBridge {
    pub fn new() -> Self {
        let inner = Rc::new(RefCell::new(BridgeInner {
            state: GestureState::default(),
            manager: None,
            gesture_handler: None,
            touchmove_guard: None,
        }));

        let init = {
            let inner = inner.clone();
            Closure::wrap(Box::new(move |options: JsValue| {
                let svg_element: Element =
                    Reflect::get(&options, &JsValue::from_str("svgElement"))
                        .expect("custom events handler init options")
                        .unchecked_into();
                let instance: SvgPanZoom =
                    Reflect::get(&options, &JsValue::from_str("instance"))
                        .expect("custom events handler init options")
                        .unchecked_into();
                attach(&inner, &svg_element, instance);
            }) as Box<dyn FnMut(JsValue)>)
        };

        let destroy = {
            let inner = inner.clone();
            Closure::wrap(Box::new(move || detach(&inner)) as Box<dyn FnMut()>)
        };

        let handler = Object::new();
        let halt = Array::new();
        for name in HALT_EVENT_LISTENERS {
            halt.push(&JsValue::from_str(name));
        }
        let _ = Reflect::set(&handler, &JsValue::from_str("haltEventListeners"), &halt);
        let _ = Reflect::set(&handler, &JsValue::from_str("init"), init.as_ref());
        let _ = Reflect::set(&handler, &JsValue::from_str("destroy"), destroy.as_ref());

        Self {
            inner,
            handler,
            _init: init,
            _destroy: destroy,
        }
    }

    /// The `{haltEventListeners, init, destroy}` object for the controller's
    /// `customEventsHandler` option.
    pub fn handler(&self) -> &Object {
        &self.handler
    }

    /// Releases the recognizer and listeners. Safe to call after the
    /// controller's own teardown already ran it.
    pub fn detach(&self) {
        detach(&self.inner);
    }
}

fn attach(inner: &Rc<RefCell<BridgeInner>>, svg_element: &Element, instance: SvgPanZoom) {
    let manager = hammer::manager_for(svg_element);

    let gesture_handler = {
        let inner = inner.clone();
        Closure::wrap(Box::new(move |event: HammerInput| {
            let Some(recognized) = gesture::parse(
                &event.event_type(),
                event.delta_x(),
                event.delta_y(),
                event.scale(),
            ) else {
                return;
            };
            // Read the zoom before taking the borrow so the controller can
            // re-enter freely while a command executes.
            let current_zoom = instance.get_zoom();
            let command = inner.borrow_mut().state.on_gesture(recognized, current_zoom);
            if let Some(command) = command {
                panzoom::exec(&instance, command);
            }
        }) as Box<dyn FnMut(HammerInput)>)
    };

    for group in GESTURE_GROUPS {
        manager.on(group, gesture_handler.as_ref().unchecked_ref());
    }

    // Without this, dragging the chart scrolls the page on touch devices.
    // The listener must be non-passive for preventDefault to stick.
    let options = EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: false,
    };
    let touchmove_guard =
        EventListener::new_with_options(svg_element, "touchmove", options, |event| {
            event.prevent_default();
        });

    let mut slot = inner.borrow_mut();
    slot.state = GestureState::default();
    slot.manager = Some(manager);
    slot.gesture_handler = Some(gesture_handler);
    slot.touchmove_guard = Some(touchmove_guard);
    clog("chart gestures attached");
}

fn detach(inner: &Rc<RefCell<BridgeInner>>) {
    let mut slot = inner.borrow_mut();
    if let Some(manager) = slot.manager.take() {
        manager.destroy();
        clog("chart gestures detached");
    }
    slot.gesture_handler = None;
    slot.touchmove_guard = None;
}
