use super::*;
use crate::net::types::{Role, User};

// =============================================================
// Helpers
// =============================================================

fn make_user(role: Role) -> User {
    User {
        id: "u-1".to_owned(),
        email: "someone@general.com".to_owned(),
        role,
        hospital_id: "h-1".to_owned(),
        created_at: String::new(),
    }
}

fn unknown() -> SessionState {
    SessionState::default()
}

fn anonymous() -> SessionState {
    SessionState { user: None, loading: false }
}

fn signed_in(role: Role) -> SessionState {
    SessionState {
        user: Some(make_user(role)),
        loading: false,
    }
}

const ALL_TARGETS: [RouteTarget; 4] = [
    RouteTarget::Login,
    RouteTarget::Patients,
    RouteTarget::Staff,
    RouteTarget::Fallback,
];

// =============================================================
// Unknown phase
// =============================================================

#[test]
fn unsettled_session_waits_on_every_target() {
    for target in ALL_TARGETS {
        assert_eq!(decide(target, &unknown()), GuardDecision::Wait, "{target:?}");
    }
}

// =============================================================
// Anonymous phase
// =============================================================

#[test]
fn anonymous_visitor_stays_on_login() {
    assert_eq!(decide(RouteTarget::Login, &anonymous()), GuardDecision::Stay);
}

#[test]
fn anonymous_visitor_bounces_from_protected_targets() {
    for target in [RouteTarget::Patients, RouteTarget::Staff, RouteTarget::Fallback] {
        assert_eq!(decide(target, &anonymous()), GuardDecision::ToLogin, "{target:?}");
    }
}

// =============================================================
// Authenticated phase
// =============================================================

#[test]
fn signed_in_user_leaves_login_for_patients() {
    assert_eq!(
        decide(RouteTarget::Login, &signed_in(Role::Staff)),
        GuardDecision::ToPatients
    );
}

#[test]
fn signed_in_user_stays_on_patients() {
    assert_eq!(
        decide(RouteTarget::Patients, &signed_in(Role::Staff)),
        GuardDecision::Stay
    );
    assert_eq!(
        decide(RouteTarget::Patients, &signed_in(Role::Admin)),
        GuardDecision::Stay
    );
}

#[test]
fn admin_stays_on_staff_screen() {
    assert_eq!(
        decide(RouteTarget::Staff, &signed_in(Role::Admin)),
        GuardDecision::Stay
    );
}

#[test]
fn non_admin_bounces_from_staff_to_login() {
    assert_eq!(
        decide(RouteTarget::Staff, &signed_in(Role::Staff)),
        GuardDecision::ToLogin
    );
}

#[test]
fn fallback_forwards_signed_in_users_to_patients() {
    assert_eq!(
        decide(RouteTarget::Fallback, &signed_in(Role::Admin)),
        GuardDecision::ToPatients
    );
}
