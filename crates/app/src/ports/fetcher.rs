//! Services fetcher port — network lookup of the services offered by a master.

use std::future::Future;

use barbershop_domain::id::MasterId;
use barbershop_domain::service::Service;
use serde::Serialize;

/// Header Django reads the anti-forgery token from.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// JSON body of a services lookup.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServicesRequest<'a> {
    pub master_id: &'a MasterId,
}

/// Boxed source error, kept `Send + Sync` so it can cross task boundaries.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Why a services lookup failed.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    #[error("services request failed")]
    Transport(#[source] BoxError),

    /// The server answered with a non-2xx status.
    #[error("services endpoint returned HTTP {0}")]
    Status(u16),

    /// The body was not a JSON array of services.
    #[error("failed to decode services response")]
    Decode(#[source] BoxError),
}

/// Fetches the ordered list of services for a master.
pub trait ServicesFetcher {
    /// Issue one request for `master`.
    fn fetch_services(
        &self,
        master: &MasterId,
    ) -> impl Future<Output = Result<Vec<Service>, FetchError>>;
}

impl<T: ServicesFetcher> ServicesFetcher for std::sync::Arc<T> {
    fn fetch_services(
        &self,
        master: &MasterId,
    ) -> impl Future<Output = Result<Vec<Service>, FetchError>> {
        (**self).fetch_services(master)
    }
}
