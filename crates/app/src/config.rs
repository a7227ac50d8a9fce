//! Order form configuration — values the server embeds in the page.
//!
//! Every field has a default so the page may omit any of them. The CSRF
//! token prefers the hidden form input over the data attribute.

use barbershop_domain::dropdown::Placeholders;
use serde::Deserialize;

use crate::ports::PageData;

/// Endpoint used when the page does not provide `data-services-url`.
pub const DEFAULT_SERVICES_URL: &str = "/barbershop/masters_services/";

/// Log filter used when the page does not provide `data-log-filter`.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration of the order form widgets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// URL of the services-by-master endpoint.
    pub services_url: String,
    /// Token sent in the `X-CSRFToken` header.
    pub csrf_token: String,
    /// Placeholder option texts.
    pub placeholders: Placeholders,
    /// Filter directive (`RUST_LOG` syntax) for console logging.
    pub log_filter: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            services_url: DEFAULT_SERVICES_URL.to_string(),
            csrf_token: String::new(),
            placeholders: Placeholders::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl FormConfig {
    /// Build the configuration from the page, falling back to defaults for
    /// anything missing or blank.
    pub fn from_page(page: &impl PageData) -> Self {
        let mut config = Self::default();
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        if let Some(url) = non_blank(page.data_attribute("servicesUrl")) {
            config.services_url = url;
        }
        if let Some(token) =
            non_blank(page.csrf_input()).or_else(|| non_blank(page.data_attribute("csrfToken")))
        {
            config.csrf_token = token;
        }
        if let Some(text) = non_blank(page.data_attribute("placeholderDisabled")) {
            config.placeholders.disabled = text;
        }
        if let Some(text) = non_blank(page.data_attribute("placeholderLoading")) {
            config.placeholders.loading = text;
        }
        if let Some(text) = non_blank(page.data_attribute("placeholderEmpty")) {
            config.placeholders.empty = text;
        }
        if let Some(filter) = non_blank(page.data_attribute("logFilter")) {
            config.log_filter = filter;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakePage {
        data: HashMap<&'static str, &'static str>,
        csrf_input: Option<&'static str>,
    }

    impl PageData for FakePage {
        fn data_attribute(&self, key: &str) -> Option<String> {
            self.data.get(key).map(ToString::to_string)
        }

        fn csrf_input(&self) -> Option<String> {
            self.csrf_input.map(ToString::to_string)
        }
    }

    #[test]
    fn should_fall_back_to_defaults_when_page_is_empty() {
        let config = FormConfig::from_page(&FakePage::default());
        assert_eq!(config.services_url, "/barbershop/masters_services/");
        assert_eq!(config.csrf_token, "");
        assert_eq!(config.placeholders, Placeholders::default());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn should_read_services_url_from_data_attribute() {
        let page = FakePage {
            data: HashMap::from([("servicesUrl", "/api/services/")]),
            ..FakePage::default()
        };
        assert_eq!(FormConfig::from_page(&page).services_url, "/api/services/");
    }

    #[test]
    fn should_prefer_csrf_input_over_data_attribute() {
        let page = FakePage {
            data: HashMap::from([("csrfToken", "from-data")]),
            csrf_input: Some("from-input"),
        };
        assert_eq!(FormConfig::from_page(&page).csrf_token, "from-input");
    }

    #[test]
    fn should_use_data_attribute_token_when_input_blank() {
        let page = FakePage {
            data: HashMap::from([("csrfToken", "from-data")]),
            csrf_input: Some(""),
        };
        assert_eq!(FormConfig::from_page(&page).csrf_token, "from-data");
    }

    #[test]
    fn should_ignore_blank_services_url() {
        let page = FakePage {
            data: HashMap::from([("servicesUrl", "  ")]),
            ..FakePage::default()
        };
        assert_eq!(
            FormConfig::from_page(&page).services_url,
            DEFAULT_SERVICES_URL
        );
    }

    #[test]
    fn should_override_placeholders_individually() {
        let page = FakePage {
            data: HashMap::from([("placeholderEmpty", "У этого мастера нет услуг")]),
            ..FakePage::default()
        };
        let config = FormConfig::from_page(&page);
        assert_eq!(config.placeholders.empty, "У этого мастера нет услуг");
        assert_eq!(config.placeholders.loading, Placeholders::default().loading);
    }

    #[test]
    fn should_deserialize_partial_toml_with_defaults() {
        let toml = r#"
            csrf_token = "abc"

            [placeholders]
            loading = "Загружаем услуги..."
        "#;
        let config: FormConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.csrf_token, "abc");
        assert_eq!(config.services_url, DEFAULT_SERVICES_URL);
        assert_eq!(config.placeholders.loading, "Загружаем услуги...");
        assert_eq!(config.placeholders.empty, Placeholders::default().empty);
    }
}
