//! TastyBites Console Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod drafts;
mod models;
mod remote;
mod route;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, problems) = AppConfig::load();
    if let Err(err) = console_logger::init_logger(config.log_level) {
        web_sys::console::warn_1(&err.to_string().into());
    }
    for problem in &problems {
        tracing::warn!(%problem, "config value ignored");
    }
    tracing::info!(api = %config.api_base_url, level = %config.log_level, "starting TastyBites console");

    mount_to_body(move || view! { <App config=config /> });
}
