//! # barbershop-domain
//!
//! Pure domain model for the barbershop booking widgets.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Services** offered by a master (barber) and their **Price**
//! - Define the **dropdown states** of the services selector and how each
//!   state renders into a list of options
//! - Define the **star rating** value and its toggle rule
//! - Define the **countdown** used by the post-submission redirect
//! - Compute the earliest selectable **appointment** moment
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod appointment;
pub mod countdown;
pub mod dropdown;
pub mod rating;
pub mod service;
