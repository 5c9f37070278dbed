//! ==============================================================================
//! lib.rs - rede social page scripts
//! ==============================================================================
//!
//! purpose:
//!     wasm module loaded by every server-rendered page of the web app.
//!     binds the forms and buttons it finds on the page to the action
//!     dispatcher from rede-shared.
//!
//! architecture:
//!     - compiled to wasm, runs in browser
//!     - calls the /web/* handlers via fetch (gloo-net)
//!     - notices rendered as a leptos modal, confirmations via window.confirm
//!     - settings read from <meta name="rede:*"> tags
//!
//! ==============================================================================

use std::rc::Rc;

use leptos::task::Executor;
use rede_shared::{ClientConfig, Dispatcher};
use wasm_bindgen::prelude::*;

mod api;
pub mod components;
pub mod dom;
pub mod handlers;
mod ui;

use api::FetchTransport;
use ui::BrowserUi;

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Trace) {
        web_sys::console::warn_1(&format!("logger already set: {err}").into());
    }

    let config = ClientConfig::from_lookup(dom::meta_lookup);
    log::set_max_level(config.log_level);

    // handlers spawn their flows on the leptos executor; nothing is
    // mounted up front, so it has to be installed here
    init_executor();

    let transport = FetchTransport::new(&config.api_base);
    let dispatcher = Rc::new(Dispatcher::new(transport, BrowserUi, config));

    match handlers::bind_all(&dispatcher) {
        Ok(()) => log::debug!("page handlers bound"),
        Err(err) => log::error!("binding page handlers failed: {err:?}"),
    }
}

/// Installs the wasm-bindgen executor behind `leptos::task::spawn_local`.
/// Safe to call more than once.
pub fn init_executor() {
    if let Err(err) = Executor::init_wasm_bindgen() {
        log::debug!("executor already set: {err}");
    }
}
