//! Page data port — configuration embedded in the rendered HTML.

/// Read-only access to the values the server templated into the page.
pub trait PageData {
    /// A `data-*` attribute of the form data container, by its camel-cased
    /// dataset key (e.g. `servicesUrl` for `data-services-url`).
    fn data_attribute(&self, key: &str) -> Option<String>;

    /// Value of the hidden CSRF input rendered inside the form, if any.
    fn csrf_input(&self) -> Option<String>;
}
