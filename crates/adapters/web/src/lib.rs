//! # barbershop-adapter-web
//!
//! Browser adapter for the booking site, compiled to WebAssembly.
//!
//! ## Responsibilities
//! - Implement the app ports against the DOM and `fetch`:
//!   `ServicesFetcher` (gloo-net), `ServicesView` (the services `<select>`),
//!   `PageData` (`data-*` attributes and the CSRF input)
//! - Wire every widget present on the page once the DOM is ready:
//!   order form dropdown, appointment date minimum, review stars, and the
//!   "thanks" page countdown redirect
//! - Route `tracing` output to the browser console
//!
//! Widgets whose elements are missing from the current page are skipped.

use barbershop_app::config::FormConfig;
use wasm_bindgen::prelude::*;

pub mod api;
mod appointment;
mod countdown;
pub mod dom;
mod logging;
mod order_form;
pub mod page_data;
mod rating;

use dom::DomError;
use page_data::DomPageData;

/// Entry point run when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    if let Err(err) = dom::on_ready(init_page) {
        web_sys::console::error_1(&JsValue::from_str(&format!(
            "barbershop widgets not started: {err}"
        )));
    }
}

fn init_page() {
    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            web_sys::console::error_1(&JsValue::from_str(&err.to_string()));
            return;
        }
    };
    let config = FormConfig::from_page(&DomPageData::new(&document));
    logging::init(&config.log_filter);

    report("order_form", order_form::init(&document, &config));
    report("appointment", appointment::init(&document));
    report("rating", rating::init(&document));
    report("countdown", countdown::init(&document));
}

fn report(widget: &str, result: Result<(), DomError>) {
    if let Err(err) = result {
        tracing::error!(widget, error = %err, "widget initialisation failed");
    }
}
