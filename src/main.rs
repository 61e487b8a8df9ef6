//! Data-Quality Dashboard Frontend Entry Point

mod api;
mod app;
mod bindings;
mod config;
mod dashboard;
mod logger;
mod task_board;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = config::load();
    logger::init(config.level_filter());
    log::info!("api_base={:?}", config.api_base);
    mount_to_body(move || view! { <App config=config /> });
}
