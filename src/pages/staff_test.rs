use super::*;

use crate::net::types::Role;

fn make_user() -> User {
    User {
        id: "u-1".to_owned(),
        email: "nurse@general.com".to_owned(),
        role: Role::Staff,
        hospital_id: "general".to_owned(),
        created_at: "2025-04-18T14:00:00.000Z".to_owned(),
    }
}

// ============================================================
// Table cells and dialog copy
// ============================================================

#[test]
fn created_cell_keeps_only_the_date_part() {
    assert_eq!(created_cell(&make_user()), "2025-04-18");
}

#[test]
fn created_cell_is_blank_when_backend_omitted_it() {
    let user = User {
        created_at: String::new(),
        ..make_user()
    };
    assert_eq!(created_cell(&user), "");
}

#[test]
fn delete_message_names_the_account() {
    assert_eq!(
        delete_message("nurse@general.com"),
        "This will permanently remove access for nurse@general.com."
    );
}
