// Only the browser build mounts the UI; the pure modules also compile on the
// host so their unit tests run with plain `cargo test`.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

#[cfg(target_arch = "wasm32")]
mod app;
#[path = "lib/mod.rs"]
mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
mod features;
#[cfg(target_arch = "wasm32")]
mod routes;
#[cfg(target_arch = "wasm32")]
mod telemetry;

#[cfg(target_arch = "wasm32")]
use crate::app::App;
#[cfg(target_arch = "wasm32")]
use crate::app_lib::config::AppConfig;
#[cfg(target_arch = "wasm32")]
use leptos::prelude::mount_to_body;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    let config = AppConfig::load();
    if let Err(err) = telemetry::init(config.log_level) {
        web_sys::console::error_1(&format!("failed to initialize logging: {err}").into());
    }
    tracing::info!(
        version = %app_lib::build_info::version_label(),
        api = %config.api_base_url,
        "starting EduReach web"
    );

    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
