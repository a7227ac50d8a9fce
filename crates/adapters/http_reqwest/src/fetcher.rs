//! [`ServicesFetcher`] implementation over reqwest.

use std::future::Future;

use barbershop_app::config::FormConfig;
use barbershop_app::ports::{CSRF_HEADER, FetchError, ServicesFetcher, ServicesRequest};
use barbershop_domain::id::MasterId;
use barbershop_domain::service::Service;
use url::Url;

use crate::config::HttpFetcherConfig;
use crate::error::HttpAdapterError;

/// Fetches services with a JSON `POST` to the configured endpoint.
#[derive(Debug, Clone)]
pub struct ReqwestServicesFetcher {
    http: reqwest::Client,
    url: Url,
    csrf_token: String,
}

impl ReqwestServicesFetcher {
    /// Build a fetcher for the endpoint and token of `form`, resolving a
    /// relative services URL against `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpAdapterError::InvalidUrl`] if the URLs cannot be parsed,
    /// or [`HttpAdapterError::Client`] if the HTTP client cannot be built.
    pub fn new(config: &HttpFetcherConfig, form: &FormConfig) -> Result<Self, HttpAdapterError> {
        let url = Url::parse(&config.base_url)?.join(&form.services_url)?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            url,
            csrf_token: form.csrf_token.clone(),
        })
    }

    /// The resolved endpoint.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl ServicesFetcher for ReqwestServicesFetcher {
    fn fetch_services(
        &self,
        master: &MasterId,
    ) -> impl Future<Output = Result<Vec<Service>, FetchError>> {
        let request = self
            .http
            .post(self.url.clone())
            .header(CSRF_HEADER, &self.csrf_token)
            .json(&ServicesRequest { master_id: master });

        async move {
            let response = request
                .send()
                .await
                .map_err(|err| FetchError::Transport(Box::new(err)))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let services: Vec<Service> = response
                .json()
                .await
                .map_err(|err| FetchError::Decode(Box::new(err)))?;
            tracing::debug!(count = services.len(), "fetched services");
            Ok(services)
        }
    }
}
