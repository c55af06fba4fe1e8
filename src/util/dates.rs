//! Date helpers for form validation and list display.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use chrono::NaiveDate;

/// Strip any time suffix from an ISO timestamp, keeping the date part.
///
/// Backend records sometimes carry `2024-01-02T00:00:00Z`; date inputs and
/// list cells want `2024-01-02`.
pub fn date_part(raw: &str) -> &str {
    raw.split('T').next().unwrap_or(raw)
}

/// Whether `value` (ISO `YYYY-MM-DD`) lies after `today`.
///
/// Unparseable input never counts as future; the date input enforces the
/// format before this check matters.
pub fn is_future_date(value: &str, today: NaiveDate) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok_and(|date| date > today)
}

/// Today's civil date in the browser's local timezone.
#[cfg(feature = "csr")]
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    let year = i32::try_from(now.get_full_year()).unwrap_or_default();
    NaiveDate::from_ymd_opt(year, now.get_month() + 1, now.get_date()).unwrap_or_default()
}

/// Host builds have no browser clock; pin to the epoch date.
#[cfg(not(feature = "csr"))]
pub fn today() -> NaiveDate {
    NaiveDate::default()
}

/// ISO `YYYY-MM-DD` rendering, used for the date input's `max` bound.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
