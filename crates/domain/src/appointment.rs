//! Appointment date helpers.

use chrono::NaiveDateTime;

/// Format accepted by `<input type="datetime-local">`, minute precision.
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Value for the `min` attribute of the appointment input: the given local
/// moment truncated to the minute.
#[must_use]
pub fn earliest_appointment(now: NaiveDateTime) -> String {
    now.format(DATETIME_LOCAL_FORMAT).to_string()
}
