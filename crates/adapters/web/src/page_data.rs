//! [`PageData`] backed by the order form's data container.

use barbershop_app::lookup;
use barbershop_app::ports::PageData;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::dom;

/// Reads `data-*` attributes of `#order-form-data` and the CSRF input.
pub struct DomPageData {
    container: Option<HtmlElement>,
    csrf_input: Option<HtmlInputElement>,
}

impl DomPageData {
    #[must_use]
    pub fn new(document: &Document) -> Self {
        Self {
            container: dom::find(document, lookup::ORDER_FORM_DATA),
            csrf_input: dom::find(document, lookup::CSRF_INPUT),
        }
    }
}

impl PageData for DomPageData {
    fn data_attribute(&self, key: &str) -> Option<String> {
        self.container.as_ref()?.dataset().get(key)
    }

    fn csrf_input(&self) -> Option<String> {
        self.csrf_input.as_ref().map(HtmlInputElement::value)
    }
}
