//! "Thanks" page: count down, then redirect to the landing page.

use barbershop_app::lookup;
use barbershop_domain::countdown::{Countdown, TICK_INTERVAL, Tick};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement};

use crate::dom::{self, DomError};

/// Start the countdown if the page has a `#countdown` element.
pub fn init(document: &Document) -> Result<(), DomError> {
    let Some(display) = dom::find::<HtmlElement>(document, lookup::COUNTDOWN) else {
        return Ok(());
    };
    let landing_url = display
        .get_attribute("data-landing-url")
        .unwrap_or_else(|| "/".to_string());
    let window = dom::window()?;
    let tick_ms = u32::try_from(TICK_INTERVAL.as_millis()).unwrap_or(u32::MAX);

    spawn_local(async move {
        let mut countdown = Countdown::default();
        loop {
            TimeoutFuture::new(tick_ms).await;
            match countdown.tick() {
                Tick::Remaining(seconds) => display.set_text_content(Some(&seconds.to_string())),
                Tick::Redirect => {
                    display.set_text_content(Some("0"));
                    if let Err(err) = window.location().set_href(&landing_url) {
                        tracing::error!(error = ?err, url = %landing_url, "redirect failed");
                    }
                    break;
                }
            }
        }
    });
    Ok(())
}
