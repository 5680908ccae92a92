//! Card Board Frontend Entry Point

mod app;
mod clock;
mod components;
mod config;
mod context;
mod form;
mod models;
mod object_url;
mod store;

use app::App;
use config::BoardConfig;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match BoardConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (BoardConfig::default(), Some(e)),
    };
    if let Err(e) = rolling_logger::init(config.log_level(), config.log.capacity) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("[APP] logger already installed: {}", e)));
    }
    if let Some(e) = config_error {
        log::warn!("[APP] using default config: {}", e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
