use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::config::SessionConfig;
use crate::google::{self, SignInBridge};
use crate::state::SessionPhase;
use crate::util::clog;

/// How often to look for the identity SDK global while its script loads.
const SDK_POLL_MS: u32 = 100;

#[derive(Properties, PartialEq, Clone)]
pub struct SignInPanelProps {
    pub config: SessionConfig,
}

/// Mount point for the Google sign-in button plus the sign-out control.
#[function_component(SignInPanel)]
pub fn signin_panel(props: &SignInPanelProps) -> Html {
    let bridge = use_mut_ref(|| None::<SignInBridge>);
    let poll = use_mut_ref(|| None::<Interval>);

    {
        let bridge = bridge.clone();
        let poll = poll.clone();
        let cfg = props.config.clone();
        use_effect_with((), move |_| {
            match google::current_phase(&cfg) {
                SessionPhase::SignedIn => clog("session: signed in"),
                SessionPhase::SignedOut => clog("session: signed out"),
            }

            if SignInBridge::sdk_ready() {
                *bridge.borrow_mut() = Some(SignInBridge::render(&cfg));
            } else {
                // The SDK script loads async and defer; render the button as
                // soon as its global shows up.
                let ticker = {
                    let bridge = bridge.clone();
                    let poll = poll.clone();
                    let cfg = cfg.clone();
                    Interval::new(SDK_POLL_MS, move || {
                        if !SignInBridge::sdk_ready() {
                            return;
                        }
                        *bridge.borrow_mut() = Some(SignInBridge::render(&cfg));
                        poll.borrow_mut().take();
                    })
                };
                *poll.borrow_mut() = Some(ticker);
            }

            move || {
                poll.borrow_mut().take();
                bridge.borrow_mut().take();
            }
        });
    }

    let on_sign_out = {
        let cfg = props.config.clone();
        Callback::from(move |_: MouseEvent| google::sign_out(&cfg))
    };

    html! {
        <div style="display:flex; align-items:center; gap:12px;">
            <div id={props.config.mount_id.clone()}></div>
            <button id={props.config.signout_id.clone()} onclick={on_sign_out} style="padding:4px 10px; font-size:12px;">{ "Sign out" }</button>
        </div>
    }
}
