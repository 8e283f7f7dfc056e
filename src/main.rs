//! Itinerary Dashboard Frontend Entry Point

mod api;
mod app;
mod cascade;
mod components;
mod config;
mod context;
mod crud;
mod models;
mod store;

use app::App;
use config::ApiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init(log::LevelFilter::Debug, rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::error_1(&format!("[MAIN] Logger already installed: {}", e).into());
    }

    let config = ApiConfig::from_build_env();
    log::info!("[MAIN] Using API at {} (timeout {:?})", config.base_url, config.timeout);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
