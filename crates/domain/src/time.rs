//! Time helpers.
//!
//! Cache bookkeeping uses UTC instants; appointment inputs work in the
//! visitor's local wall-clock time.

use chrono::{DateTime, Local, NaiveDateTime, Utc};

/// UTC instant, used for `fetched_at` of cached service lists.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Return the current local wall-clock time, without offset.
#[must_use]
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
