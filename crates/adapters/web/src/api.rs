//! Services lookup over `fetch`, wrapping `gloo-net`.

use std::future::Future;

use barbershop_app::config::FormConfig;
use barbershop_app::ports::{CSRF_HEADER, FetchError, ServicesFetcher, ServicesRequest};
use barbershop_domain::id::MasterId;
use barbershop_domain::service::Service;
use gloo_net::http::Request;

/// [`ServicesFetcher`] posting to the endpoint configured in the page.
#[derive(Debug, Clone)]
pub struct GlooServicesFetcher {
    url: String,
    csrf_token: String,
}

impl GlooServicesFetcher {
    #[must_use]
    pub fn new(config: &FormConfig) -> Self {
        Self {
            url: config.services_url.clone(),
            csrf_token: config.csrf_token.clone(),
        }
    }
}

impl ServicesFetcher for GlooServicesFetcher {
    fn fetch_services(
        &self,
        master: &MasterId,
    ) -> impl Future<Output = Result<Vec<Service>, FetchError>> {
        let request = Request::post(&self.url)
            .header(CSRF_HEADER, &self.csrf_token)
            .json(&ServicesRequest { master_id: master });

        async move {
            let response = request
                .map_err(|err| FetchError::Transport(Box::new(err)))?
                .send()
                .await
                .map_err(|err| FetchError::Transport(Box::new(err)))?;

            if !response.ok() {
                return Err(FetchError::Status(response.status()));
            }

            let services: Vec<Service> = response
                .json()
                .await
                .map_err(|err| FetchError::Decode(Box::new(err)))?;
            Ok(services)
        }
    }
}
