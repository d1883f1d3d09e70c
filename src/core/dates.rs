//! Date handling for form fields.
//!
//! Forms post dates either as typed (`15/06/2024`) or from an HTML date input
//! (`2024-06-15`). Storage keeps a calendar date; display is always `dd/mm/yyyy`.

use chrono::{Local, NaiveDate};

/// Display format used in forms, fetched records and rendered deeds.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

const ACCEPTED_FORMATS: [&str; 3] = [DISPLAY_FORMAT, "%d-%m-%Y", "%Y-%m-%d"];

/// Parses a date as entered in a form field.
///
/// Returns `None` for empty or unparseable input rather than an error, since
/// the validator reports these as field messages.
#[must_use]
pub fn parse_form_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    ACCEPTED_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Formats a stored date for display.
#[must_use]
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Whether `date` lies strictly after `today`.
#[must_use]
pub fn is_future(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

/// Today's local calendar date.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
