//! WebAssembly entry point.

use app::App;
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(debug_assertions)]
const LOG_LEVEL: log::Level = log::Level::Debug;
#[cfg(not(debug_assertions))]
const LOG_LEVEL: log::Level = log::Level::Info;

#[wasm_bindgen(start)]
pub fn main() {
    // `tracing` events from the library crates reach this logger through
    // their `log` feature.
    if console_log::init_with_level(LOG_LEVEL).is_err() {
        leptos::logging::warn!("logger already initialized");
    }
    console_error_panic_hook::set_once();

    log::info!("mounting folio");
    leptos::mount::mount_to_body(App);
}
