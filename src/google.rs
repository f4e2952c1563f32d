// Google sign-in wiring: button rendering and the session cookie.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::config::SessionConfig;
use crate::state::{session, SessionPhase};
use crate::util::{clog, document, window};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["gapi", "signin2"], js_name = render)]
    fn render_sign_in_button(element_id: &str, options: &JsValue);

    pub type AuthInstance;

    #[wasm_bindgen(js_namespace = ["gapi", "auth2"], js_name = getAuthInstance)]
    fn get_auth_instance() -> AuthInstance;

    #[wasm_bindgen(method, js_name = signOut)]
    fn sign_out_sdk(this: &AuthInstance);

    /// Signed-in user handed to the success callback.
    pub type GoogleUser;

    #[wasm_bindgen(method, js_name = getAuthResponse)]
    fn get_auth_response(this: &GoogleUser) -> AuthResponse;

    pub type AuthResponse;

    #[wasm_bindgen(method, getter)]
    fn id_token(this: &AuthResponse) -> String;
}

/// Renders the sign-in button and keeps its callbacks alive.
pub struct SignInBridge {
    _on_success: Closure<dyn FnMut(GoogleUser)>,
    _on_failure: Closure<dyn FnMut(JsValue)>,
}

impl SignInBridge {
    /// True once the identity SDK has loaded its sign-in module. The `gapi`
    /// global appears before `gapi.signin2` does, so both are checked.
    pub fn sdk_ready() -> bool {
        let gapi = Reflect::get(&js_sys::global(), &JsValue::from_str("gapi"))
            .unwrap_or(JsValue::UNDEFINED);
        if gapi.is_undefined() {
            return false;
        }
        Reflect::get(&gapi, &JsValue::from_str("signin2"))
            .map(|value| !value.is_undefined())
            .unwrap_or(false)
    }

    pub fn render(cfg: &SessionConfig) -> Self {
        let on_success = {
            let cfg = cfg.clone();
            Closure::wrap(
                Box::new(move |user: GoogleUser| on_sign_in(&cfg, &user))
                    as Box<dyn FnMut(GoogleUser)>,
            )
        };
        let on_failure = {
            let cfg = cfg.clone();
            // A failed sign-in ends up in the same place as a sign-out, so
            // no stale cookie can outlive a failure.
            Closure::wrap(Box::new(move |_err: JsValue| sign_out(&cfg)) as Box<dyn FnMut(JsValue)>)
        };

        let options = Object::new();
        set(&options, "scope", &JsValue::from_str(&cfg.scope));
        set(&options, "width", &JsValue::from_f64(cfg.button_width as f64));
        set(
            &options,
            "height",
            &JsValue::from_f64(cfg.button_height as f64),
        );
        set(&options, "onsuccess", on_success.as_ref());
        set(&options, "onfailure", on_failure.as_ref());
        render_sign_in_button(&cfg.mount_id, &options);

        Self {
            _on_success: on_success,
            _on_failure: on_failure,
        }
    }
}

/// Session state as decided by the token cookie.
pub fn current_phase(cfg: &SessionConfig) -> SessionPhase {
    session::phase(&cookie_header(), &cfg.cookie_name)
}

/// SDK sign-out plus immediate cookie expiry. The reload lets the server
/// re-render the page for the signed-out role.
pub fn sign_out(cfg: &SessionConfig) {
    get_auth_instance().sign_out_sdk();
    set_cookie(&session::clear(&cfg.cookie_name));
    clog("session cleared");
    reload();
}

fn on_sign_in(cfg: &SessionConfig, user: &GoogleUser) {
    let token = user.get_auth_response().id_token();
    let cookies = cookie_header();
    if let Some(cookie) = session::establish(&cookies, &cfg.cookie_name, &token, cfg.max_age_secs) {
        set_cookie(&cookie);
        clog("session established");
        reload();
    }
}

fn html_document() -> HtmlDocument {
    document()
        .dyn_into::<HtmlDocument>()
        .expect("document is not an HtmlDocument")
}

fn cookie_header() -> String {
    html_document().cookie().unwrap_or_default()
}

fn set_cookie(cookie: &str) {
    let _ = html_document().set_cookie(cookie);
}

fn reload() {
    let _ = window().location().reload();
}

fn set(target: &Object, key: &str, value: &JsValue) {
    let _ = Reflect::set(target, &JsValue::from_str(key), value);
}
