//! Dropdown states of the services selector and their rendered options.
//!
//! The state is always derived from the current master selection and the
//! cache; it is never persisted. Rendering is a pure function from a state
//! to the ordered list of `<option>`s plus the enabled flag of the control.

use serde::{Deserialize, Serialize};

use crate::service::Service;

/// What the services selector currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownState {
    /// No master selected.
    Disabled,
    /// Services for the selected master are being fetched.
    Loading,
    /// The master has no services, or they could not be fetched.
    Error,
    /// Services are available.
    Success(Vec<Service>),
}

impl DropdownState {
    /// Resolve a fetched or cached service list into `Success` or `Error`.
    #[must_use]
    pub fn from_services(services: Vec<Service>) -> Self {
        if services.is_empty() {
            Self::Error
        } else {
            Self::Success(services)
        }
    }

    /// Short name used in logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Loading => "loading",
            Self::Error => "error",
            Self::Success(_) => "success",
        }
    }

    /// Whether the user can pick from the control in this state.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Success(services) if !services.is_empty())
    }

    /// Render into the options of the services `<select>`.
    #[must_use]
    pub fn render(&self, placeholders: &Placeholders) -> RenderedSelect {
        let options = match self {
            Self::Disabled => vec![SelectOption::placeholder(&placeholders.disabled)],
            Self::Loading => vec![SelectOption::placeholder(&placeholders.loading)],
            Self::Success(services) if !services.is_empty() => {
                services.iter().map(SelectOption::from_service).collect()
            }
            Self::Error | Self::Success(_) => {
                vec![SelectOption::placeholder(&placeholders.empty)]
            }
        };
        RenderedSelect {
            options,
            enabled: self.is_interactive(),
        }
    }
}

/// A single `<option>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
    pub selected: bool,
}

impl SelectOption {
    /// A disabled, pre-selected option with an empty value.
    #[must_use]
    pub fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
            disabled: true,
            selected: true,
        }
    }

    /// A selectable option for a service.
    #[must_use]
    pub fn from_service(service: &Service) -> Self {
        Self {
            value: service.id.to_string(),
            label: service.label(),
            disabled: false,
            selected: false,
        }
    }
}

/// The full content of the services control after a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSelect {
    pub options: Vec<SelectOption>,
    pub enabled: bool,
}

/// Texts of the placeholder options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholders {
    /// Shown while no master is selected.
    pub disabled: String,
    /// Shown while services are being fetched.
    pub loading: String,
    /// Shown when the master has no services.
    pub empty: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            disabled: "Select a master first".to_string(),
            loading: "Loading services\u{2026}".to_string(),
            empty: "This master has no services".to_string(),
        }
    }
}
