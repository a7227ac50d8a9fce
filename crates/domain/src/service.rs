//! Service — something a master offers (haircut, shave, …).

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;
use crate::id::ServiceId;

/// Price of a service, kept in the textual form the server sent it in.
///
/// The backend serialises decimals either as JSON numbers (`500`) or as
/// strings (`"500.00"`); both are accepted and displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Price(String);

impl Price {
    /// Wrap a textual amount.
    #[must_use]
    pub fn new(amount: impl Into<String>) -> Self {
        Self(amount.into())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawPrice {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawPrice::deserialize(deserializer)? {
            RawPrice::Text(text) => Self(text.trim().to_string()),
            RawPrice::Number(number) => Self(number.to_string()),
        })
    }
}

/// A service offered by a master, as returned by the services endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    #[serde(default)]
    pub price: Option<Price>,
}

impl Service {
    /// Create a service without a price.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is blank.
    pub fn new(id: ServiceId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let service = Self {
            id,
            name: name.into(),
            price: None,
        };
        service.validate()?;
        Ok(service)
    }

    /// Attach a price.
    #[must_use]
    pub fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(())
    }

    /// Human readable option label: the name, followed by the price when known.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.price {
            Some(price) => format!("{} ({price})", self.name),
            None => self.name.clone(),
        }
    }
}
