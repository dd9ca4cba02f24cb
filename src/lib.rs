#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod content;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod logging;
pub mod observer;
pub mod sections;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    logging::init_browser_logger();
    leptos::mount::hydrate_body(App);
}
