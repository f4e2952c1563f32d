use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::HtmlObjectElement;
use yew::prelude::*;

use crate::config::ChartConfig;
use crate::gesture_bridge::GestureBridge;
use crate::panzoom::{self, SvgPanZoom};
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct ChartViewProps {
    pub config: ChartConfig,
}

/// Embeds the SVG chart and attaches the pan/zoom controller with gesture
/// support once the embedded document has loaded.
#[function_component(ChartView)]
pub fn chart_view(props: &ChartViewProps) -> Html {
    let object_ref = use_node_ref();
    let controller = use_mut_ref(|| None::<SvgPanZoom>);
    let bridge = use_mut_ref(|| None::<GestureBridge>);
    let load_listener = use_mut_ref(|| None::<EventListener>);

    {
        let object_ref = object_ref.clone();
        let controller = controller.clone();
        let bridge = bridge.clone();
        let load_listener = load_listener.clone();
        let cfg = props.config.clone();
        use_effect_with((), move |_| {
            let object: HtmlObjectElement = object_ref
                .cast::<HtmlObjectElement>()
                .expect("object_ref not attached to an object element");

            let init: Rc<dyn Fn()> = {
                let object = object.clone();
                let controller = controller.clone();
                let bridge = bridge.clone();
                Rc::new(move || {
                    if controller.borrow().is_some() {
                        return;
                    }
                    let Some(root) = object.content_document().and_then(|d| d.document_element())
                    else {
                        clog("chart document not available yet");
                        return;
                    };
                    let adapter = GestureBridge::new();
                    let instance = panzoom::init(&root, &cfg, adapter.handler());
                    *bridge.borrow_mut() = Some(adapter);
                    *controller.borrow_mut() = Some(instance);
                    clog("chart pan/zoom ready");
                })
            };

            // contentDocument is only there once the embedded SVG finished
            // loading; with a cached chart it can already be present at
            // mount, before any load event we could listen for.
            if object
                .content_document()
                .and_then(|d| d.document_element())
                .is_some()
            {
                init();
            } else {
                let on_load = {
                    let init = init.clone();
                    EventListener::new(&object, "load", move |_| init())
                };
                *load_listener.borrow_mut() = Some(on_load);
            }

            move || {
                load_listener.borrow_mut().take();
                if let Some(instance) = controller.borrow_mut().take() {
                    // Controller teardown runs the bridge's destroy callback.
                    instance.destroy();
                }
                if let Some(adapter) = bridge.borrow_mut().take() {
                    // Repeat-safe; already ran if the controller was live.
                    adapter.detach();
                }
            }
        });
    }

    html! {
        <div style="flex:1; min-height:0;">
            <object
                id={props.config.object_id.clone()}
                ref={object_ref}
                type="image/svg+xml"
                data={props.config.chart_url.clone()}
                style="display:block; width:100%; height:100%;"
            />
        </div>
    }
}
