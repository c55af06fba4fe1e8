use super::*;

// =============================================================
// URL construction
// =============================================================

#[test]
fn api_url_joins_path_to_base() {
    assert_eq!(
        api_url("/api/patients"),
        format!("{DEFAULT_BASE_URL}/api/patients")
    );
}

#[test]
fn patient_url_embeds_id() {
    assert_eq!(
        patient_url("p-42"),
        format!("{DEFAULT_BASE_URL}/api/patients/p-42")
    );
}

#[test]
fn user_url_embeds_id() {
    assert_eq!(user_url("u-7"), format!("{DEFAULT_BASE_URL}/api/users/u-7"));
}

// =============================================================
// Status classification
// =============================================================

#[test]
fn classify_status_maps_401_to_unauthorized() {
    assert_eq!(
        classify_status(401, Some("Invalid credentials".to_owned())),
        ApiError::Unauthorized {
            message: Some("Invalid credentials".to_owned())
        }
    );
}

#[test]
fn classify_status_keeps_other_statuses_generic() {
    assert_eq!(
        classify_status(500, None),
        ApiError::Status { status: 500, message: None }
    );
    assert_eq!(
        classify_status(403, Some("Forbidden".to_owned())),
        ApiError::Status {
            status: 403,
            message: Some("Forbidden".to_owned())
        }
    );
}

// =============================================================
// ApiError accessors
// =============================================================

#[test]
fn is_unauthorized_only_for_401_class() {
    assert!(ApiError::Unauthorized { message: None }.is_unauthorized());
    assert!(!ApiError::Status { status: 403, message: None }.is_unauthorized());
    assert!(!ApiError::Timeout.is_unauthorized());
    assert!(!ApiError::Network("boom".to_owned()).is_unauthorized());
}

#[test]
fn server_message_surfaces_only_http_messages() {
    let err = ApiError::Status {
        status: 409,
        message: Some("Email already exists".to_owned()),
    };
    assert_eq!(err.server_message(), Some("Email already exists"));

    let err = ApiError::Unauthorized {
        message: Some("Invalid credentials".to_owned()),
    };
    assert_eq!(err.server_message(), Some("Invalid credentials"));

    assert_eq!(ApiError::Timeout.server_message(), None);
    assert_eq!(ApiError::Network("boom".to_owned()).server_message(), None);
    assert_eq!(ApiError::Decode("bad json".to_owned()).server_message(), None);
}

#[test]
fn api_error_display_is_stable() {
    assert_eq!(ApiError::Timeout.to_string(), "request timed out");
    assert_eq!(
        ApiError::Status { status: 500, message: None }.to_string(),
        "request failed with status 500"
    );
    assert_eq!(
        ApiError::Unauthorized { message: None }.to_string(),
        "not authenticated"
    );
}
