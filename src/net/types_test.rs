use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User {
        id: "u-1".to_owned(),
        email: "admin@general.com".to_owned(),
        role: Role::Admin,
        hospital_id: "h-1".to_owned(),
        created_at: "2025-01-01T00:00:00Z".to_owned(),
    }
}

// =============================================================
// Role serde
// =============================================================

#[test]
fn role_serializes_to_uppercase_wire_spelling() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
    assert_eq!(serde_json::to_string(&Role::Staff).unwrap(), "\"STAFF\"");
}

#[test]
fn role_parse_accepts_wire_spellings_only() {
    assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
    assert_eq!(Role::parse("STAFF"), Some(Role::Staff));
    assert_eq!(Role::parse("admin"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn role_as_str_round_trips_through_parse() {
    assert_eq!(Role::parse(Role::Admin.as_str()), Some(Role::Admin));
    assert_eq!(Role::parse(Role::Staff.as_str()), Some(Role::Staff));
}

// =============================================================
// User / Patient wire shape
// =============================================================

#[test]
fn user_deserializes_camel_case_fields() {
    let json = r#"{"id":"u-1","email":"a@b.com","role":"STAFF","hospitalId":"h-9","createdAt":"2025-02-03T10:00:00Z"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.hospital_id, "h-9");
    assert_eq!(user.role, Role::Staff);
    assert_eq!(user.created_at, "2025-02-03T10:00:00Z");
}

#[test]
fn user_tolerates_missing_created_at() {
    let json = r#"{"id":"u-1","email":"a@b.com","role":"ADMIN","hospitalId":"h-9"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert!(user.is_admin());
    assert_eq!(user.created_at, "");
}

#[test]
fn is_admin_is_false_for_staff() {
    let user = User { role: Role::Staff, ..make_user() };
    assert!(!user.is_admin());
}

#[test]
fn patient_deserializes_with_null_optionals() {
    let json = r#"{"id":"p-1","fullName":"Ada Lovelace","dateOfBirth":null,"gender":null,"mobile":null,"createdAt":"2025-02-03T10:00:00Z"}"#;
    let patient: Patient = serde_json::from_str(json).unwrap();
    assert_eq!(patient.full_name, "Ada Lovelace");
    assert_eq!(patient.date_of_birth, None);
    assert_eq!(patient.mobile, None);
}

// =============================================================
// Payload serialization
// =============================================================

#[test]
fn patient_payload_omits_unset_optionals() {
    let payload = PatientPayload {
        full_name: "Ada Lovelace".to_owned(),
        date_of_birth: None,
        gender: None,
        mobile: None,
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json, serde_json::json!({"fullName": "Ada Lovelace"}));
}

#[test]
fn patient_payload_serializes_set_optionals_in_camel_case() {
    let payload = PatientPayload {
        full_name: "Ada Lovelace".to_owned(),
        date_of_birth: Some("1815-12-10".to_owned()),
        gender: Some("Female".to_owned()),
        mobile: Some("+44 20 7946 0958".to_owned()),
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["dateOfBirth"], "1815-12-10");
    assert_eq!(json["gender"], "Female");
    assert_eq!(json["mobile"], "+44 20 7946 0958");
}

#[test]
fn user_payload_omits_password_when_updating() {
    let payload = UserPayload {
        email: "staff@general.com".to_owned(),
        role: Role::Staff,
        password: None,
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json, serde_json::json!({"email": "staff@general.com", "role": "STAFF"}));
}

#[test]
fn user_payload_includes_password_when_creating() {
    let payload = UserPayload {
        email: "staff@general.com".to_owned(),
        role: Role::Staff,
        password: Some("s3cret".to_owned()),
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["password"], "s3cret");
}

// =============================================================
// Auth envelope
// =============================================================

#[test]
fn auth_envelope_tolerates_missing_user() {
    let envelope: AuthEnvelope = serde_json::from_str(r#"{"success":false}"#).unwrap();
    assert!(!envelope.success);
    assert_eq!(envelope.user, None);
}

#[test]
fn auth_envelope_carries_user_on_success() {
    let json = r#"{"success":true,"user":{"id":"u-1","email":"a@b.com","role":"ADMIN","hospitalId":"h-1"}}"#;
    let envelope: AuthEnvelope = serde_json::from_str(json).unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.user.map(|u| u.role), Some(Role::Admin));
}
