//! Small helpers over `web-sys`.

use barbershop_app::lookup;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

/// Errors raised while talking to the DOM.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    /// A DOM call threw; the payload is the debug form of the thrown value.
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

/// The global `window`.
///
/// # Errors
///
/// Returns [`DomError::NoWindow`] outside a browsing context.
pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// The current `document`.
///
/// # Errors
///
/// Returns [`DomError::NoWindow`] or [`DomError::NoDocument`].
pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Find the first element matching one of `candidates`, cast to `T`.
pub fn find<T: JsCast>(document: &Document, candidates: &[&str]) -> Option<T> {
    lookup::first_match(candidates, |selector| {
        document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<T>().ok())
    })
}

/// All elements matching `selector`, in document order.
///
/// # Errors
///
/// Returns [`DomError::Js`] when the selector is invalid.
pub fn find_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Run `init` once the document has been parsed.
///
/// # Errors
///
/// Returns an error when there is no document or the listener cannot be added.
pub fn on_ready(init: impl FnOnce() + 'static) -> Result<(), DomError> {
    let document = document()?;
    if document.ready_state() == "loading" {
        let callback = Closure::once_into_js(init);
        document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
    } else {
        init();
    }
    Ok(())
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
///
/// # Errors
///
/// Returns [`DomError::Js`] if the listener cannot be registered.
pub fn listen(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), DomError> {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // page-lifetime listener
    closure.forget();
    Ok(())
}
