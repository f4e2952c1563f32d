use yew::prelude::*;

use super::{chart_view::ChartView, signin_panel::SignInPanel};
use crate::config::ViewerConfig;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(ViewerConfig::load);

    html! {
        <div style="display:flex; flex-direction:column; width:100vw; height:100vh;">
            <div style="display:flex; justify-content:space-between; align-items:center; padding:8px 12px; border-bottom:1px solid #30363d;">
                <span style="font-size:16px; font-weight:600;">{ "Dropline chart" }</span>
                <SignInPanel config={config.session.clone()} />
            </div>
            <ChartView config={config.chart.clone()} />
        </div>
    }
}
