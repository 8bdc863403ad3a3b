//! Task Tracker Frontend Entry Point

mod models;
mod config;
mod error;
mod logging;
mod storage;
mod ids;
mod store;
mod view;
mod context;
mod components;
mod app;

#[cfg(test)]
mod testing;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    logging::init(config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
