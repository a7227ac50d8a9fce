//! Order form: forbid picking an appointment in the past.

use barbershop_app::lookup;
use barbershop_domain::appointment::earliest_appointment;
use barbershop_domain::time;
use web_sys::{Document, HtmlInputElement};

use crate::dom::{self, DomError};

/// Set `min` of the appointment input to the current local minute.
pub fn init(document: &Document) -> Result<(), DomError> {
    let Some(input) = dom::find::<HtmlInputElement>(document, lookup::APPOINTMENT_INPUT) else {
        return Ok(());
    };
    let min = earliest_appointment(time::local_now());
    input.set_min(&min);
    tracing::debug!(%min, "appointment minimum set");
    Ok(())
}
