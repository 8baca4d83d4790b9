//! Checklist Dashboard Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod content;
mod context;
mod detail;
mod evidence;
mod filters;
mod format;
mod logger;
mod models;
mod progress;
mod route;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    logger::init(config.log_level);
    log::info!("[APP] Using task API at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
