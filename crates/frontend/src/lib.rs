pub mod app;
pub mod shared;
pub mod usecases;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, rejected) = match shared::config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (shared::config::Config::default(), Some(e)),
    };

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.logging.level());
    console_error_panic_hook::set_once();

    if let Some(e) = rejected {
        log::error!("Page config is invalid, using defaults: {}", e);
    }

    log::info!(
        "Wishlist console starting (api root '{}', base '{}')",
        config.api.root,
        config.api.base_url
    );

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
