mod components;
mod config;
mod gesture_bridge;
mod google;
mod hammer;
mod panzoom;
mod state;
mod util;

use components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
