pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use shared::config::config;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config().logging.level());
    console_error_panic_hook::set_once();

    log::info!("api base: {}", config().api.base_url);
    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
