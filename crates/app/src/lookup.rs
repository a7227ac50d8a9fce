//! Element lookup through an ordered list of candidate selectors.

/// Candidates for the master `<select>`.
pub const MASTER_SELECT: &[&str] = &["#master", "select[name=\"master\"]"];

/// Candidates for the services `<select>`.
pub const SERVICES_SELECT: &[&str] = &["#services", "select[name=\"services\"]"];

/// Container carrying the `data-*` configuration of the order form.
pub const ORDER_FORM_DATA: &[&str] = &["#order-form-data"];

/// Hidden CSRF input rendered by the server.
pub const CSRF_INPUT: &[&str] = &["[name=csrfmiddlewaretoken]"];

/// Appointment datetime input of the order form.
pub const APPOINTMENT_INPUT: &[&str] = &[
    "#id_appointment_date",
    "input[name=\"appointment_date\"]",
    "input[type=\"datetime-local\"]",
];

/// Hidden input holding the review rating.
pub const RATING_INPUT: &[&str] = &["#rating-value"];

/// Clickable stars of the review form, in display order.
pub const STAR_ITEMS: &str = ".star-rating-item";

/// Countdown display on the "thanks" page.
pub const COUNTDOWN: &[&str] = &["#countdown"];

/// Try each candidate in order, returning the first that resolves.
pub fn first_match<T>(
    candidates: &[&str],
    mut resolve: impl FnMut(&str) -> Option<T>,
) -> Option<T> {
    candidates.iter().find_map(|selector| resolve(selector))
}
