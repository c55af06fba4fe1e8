use super::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

// =============================================================
// Full name
// =============================================================

#[test]
fn full_name_requires_non_blank_value() {
    assert_eq!(validate_full_name(""), Some("Full name is required"));
    assert_eq!(validate_full_name("   "), Some("Full name is required"));
}

#[test]
fn full_name_requires_two_characters_after_trim() {
    assert_eq!(validate_full_name(" A "), Some("Full name must be at least 2 characters"));
    assert_eq!(validate_full_name("Al"), None);
    assert_eq!(validate_full_name("Ada Lovelace"), None);
}

// =============================================================
// Mobile number
// =============================================================

#[test]
fn mobile_is_optional() {
    assert_eq!(validate_mobile(""), None);
}

#[test]
fn mobile_accepts_common_formats() {
    assert_eq!(validate_mobile("+1234567890"), None);
    assert_eq!(validate_mobile("0123456789"), None);
    assert_eq!(validate_mobile("+1 234-567-8901"), None);
    assert_eq!(validate_mobile("(020) 7946 0958"), None);
    assert_eq!(validate_mobile("+44-20-7946-0958"), None);
}

#[test]
fn mobile_rejects_short_or_lettered_values() {
    assert_eq!(validate_mobile("12345"), Some("Please enter a valid mobile number"));
    assert_eq!(validate_mobile("phone12345"), Some("Please enter a valid mobile number"));
    assert_eq!(validate_mobile("++1234567890"), Some("Please enter a valid mobile number"));
}

#[test]
fn mobile_plus_is_only_allowed_as_prefix() {
    assert_eq!(validate_mobile("1234+567890"), Some("Please enter a valid mobile number"));
}

// =============================================================
// Date of birth
// =============================================================

#[test]
fn birth_date_is_optional() {
    assert_eq!(validate_birth_date("", today()), None);
}

#[test]
fn birth_date_rejects_future_dates() {
    assert_eq!(
        validate_birth_date("2025-06-16", today()),
        Some("Date of birth cannot be in the future")
    );
    assert_eq!(validate_birth_date("2025-06-15", today()), None);
    assert_eq!(validate_birth_date("1990-01-31", today()), None);
}

// =============================================================
// Payload construction
// =============================================================

#[test]
fn payload_trims_name_and_mobile() {
    let payload = build_patient_payload("  Ada Lovelace  ", "1815-12-10", "Female", " +1234567890 ");
    assert_eq!(payload.full_name, "Ada Lovelace");
    assert_eq!(payload.mobile, Some("+1234567890".to_owned()));
}

#[test]
fn payload_drops_blank_optionals() {
    let payload = build_patient_payload("Ada Lovelace", "", "", "   ");
    assert_eq!(payload.date_of_birth, None);
    assert_eq!(payload.gender, None);
    assert_eq!(payload.mobile, None);
}

#[test]
fn payload_keeps_set_optionals_verbatim() {
    let payload = build_patient_payload("Ada Lovelace", "1815-12-10", "Prefer not to say", "0123456789");
    assert_eq!(payload.date_of_birth, Some("1815-12-10".to_owned()));
    assert_eq!(payload.gender, Some("Prefer not to say".to_owned()));
}
