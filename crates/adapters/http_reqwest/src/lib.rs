//! # barbershop-adapter-http-reqwest
//!
//! Native HTTP adapter built on [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the `ServicesFetcher` port: `POST` the selected master id as
//!   JSON to the services endpoint with the `X-CSRFToken` header
//! - Map transport, status, and decoding failures into `FetchError`
//! - Apply a request timeout
//!
//! ## Dependency rule
//! Depends on `barbershop-app` (for the port trait and form configuration)
//! and `barbershop-domain` (for the decoded types). Never leaks reqwest types
//! into the domain.

pub mod config;
pub mod error;
pub mod fetcher;

pub use config::HttpFetcherConfig;
pub use error::HttpAdapterError;
pub use fetcher::ReqwestServicesFetcher;
