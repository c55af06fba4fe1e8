use super::*;

fn make_patient() -> Patient {
    Patient {
        id: "p-1".to_owned(),
        full_name: "Jane Roe".to_owned(),
        date_of_birth: Some("1984-03-12T00:00:00.000Z".to_owned()),
        gender: Some("Female".to_owned()),
        mobile: Some("+1 (555) 010-2030".to_owned()),
        created_at: "2025-05-01T09:30:00.000Z".to_owned(),
    }
}

// ============================================================
// Table cell rendering
// ============================================================

#[test]
fn birth_date_cell_keeps_only_the_date_part() {
    assert_eq!(birth_date_cell(&make_patient()), "1984-03-12");
}

#[test]
fn birth_date_cell_is_blank_when_unset() {
    let patient = Patient {
        date_of_birth: None,
        ..make_patient()
    };
    assert_eq!(birth_date_cell(&patient), "");
}

#[test]
fn birth_date_cell_passes_plain_dates_through() {
    let patient = Patient {
        date_of_birth: Some("1984-03-12".to_owned()),
        ..make_patient()
    };
    assert_eq!(birth_date_cell(&patient), "1984-03-12");
}

#[test]
fn created_cell_keeps_only_the_date_part() {
    assert_eq!(created_cell(&make_patient()), "2025-05-01");
}

#[test]
fn created_cell_is_blank_when_backend_omitted_it() {
    let patient = Patient {
        created_at: String::new(),
        ..make_patient()
    };
    assert_eq!(created_cell(&patient), "");
}

#[test]
fn text_cell_shows_value_or_dash() {
    assert_eq!(text_cell(Some("Female")), "Female");
    assert_eq!(text_cell(None), "-");
}
