use wasm_bindgen::JsValue;
use web_sys::console;

mod api;
mod components;
mod model;
mod nav;
mod util;

use components::app::App;

// Startup banner, same lines the tracker has always printed.
fn console_banner() {
    console::log_2(
        &JsValue::from_str("%cRTD Transit Tracker"),
        &JsValue::from_str("font-size: 24px; font-weight: bold; color: #2563eb;"),
    );
    console::log_1(&JsValue::from_str("Built with ❤️ for the Denver community"));
    console::log_1(&JsValue::from_str(
        "GitHub: https://github.com/cargarn1/RTD",
    ));
}

fn main() {
    console_banner();
    yew::Renderer::<App>::new().render();
}
