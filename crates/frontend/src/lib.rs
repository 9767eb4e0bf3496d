pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use leptos::task::spawn_local;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // The list screens are built from the configuration, so mount once it is known.
    spawn_local(async {
        let config = shared::data::config::fetch_config().await;
        leptos::mount::mount_to_body(move || {
            let config = config.clone();
            leptos::view! { <app::App config=config /> }
        });
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
