use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn date_part_strips_time_suffix() {
    assert_eq!(date_part("2024-01-02T00:00:00Z"), "2024-01-02");
    assert_eq!(date_part("2024-01-02T15:30:00.000+02:00"), "2024-01-02");
}

#[test]
fn date_part_leaves_plain_dates_alone() {
    assert_eq!(date_part("2024-01-02"), "2024-01-02");
    assert_eq!(date_part(""), "");
}

#[test]
fn is_future_date_compares_against_given_today() {
    let today = date(2025, 6, 15);
    assert!(is_future_date("2025-06-16", today));
    assert!(is_future_date("2026-01-01", today));
    assert!(!is_future_date("2025-06-15", today));
    assert!(!is_future_date("1990-03-20", today));
}

#[test]
fn is_future_date_rejects_unparseable_input() {
    let today = date(2025, 6, 15);
    assert!(!is_future_date("", today));
    assert!(!is_future_date("not-a-date", today));
    assert!(!is_future_date("2025-13-99", today));
}

#[test]
fn iso_date_renders_zero_padded() {
    assert_eq!(iso_date(date(2025, 6, 5)), "2025-06-05");
    assert_eq!(iso_date(date(1999, 12, 31)), "1999-12-31");
}
