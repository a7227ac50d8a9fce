//! View port — the services `<select>` the controller writes into.

use barbershop_domain::dropdown::RenderedSelect;

/// Displays the options of the services selector.
pub trait ServicesView {
    /// Replace every option of the control and set its enabled flag.
    fn show(&self, select: &RenderedSelect);
}
