//! # barbershop-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ServicesFetcher` — look up the services of a master over the network
//!   - `ServicesView` — show the rendered options of the services selector
//!   - `PageData` — read the configuration embedded in the page
//!   - `Clock` — current time for cache expiry
//! - Define **driving/inbound** use-cases:
//!   - `DependentDropdownController` — keep the services selector in sync
//!     with the selected master, backed by a TTL cache
//! - Provide in-process infrastructure that doesn't need IO: the
//!   `ServicesCache`, selector candidate lookup, and the init guard
//!
//! ## Dependency rule
//! Depends on `barbershop-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod dropdown_controller;
pub mod lifecycle;
pub mod lookup;
pub mod ports;
pub mod services_cache;
