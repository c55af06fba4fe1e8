//! Route guarding for session-gated screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page applies the same decision table against the session
//! snapshot, so redirect behavior cannot drift between screens. While the
//! startup probe is unsettled the decision is `Wait` and pages render their
//! loading fallback instead of bouncing.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionPhase, SessionState};

/// The guarded destinations the router exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    /// `/login`, only for anonymous visitors.
    Login,
    /// `/patients`, any signed-in user.
    Patients,
    /// `/staff`, admins only.
    Staff,
    /// `/` and unknown paths; never renders, always forwards.
    Fallback,
}

/// What a page should do for the current session snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Wait,
    Stay,
    ToLogin,
    ToPatients,
}

/// Decision table for a target route against the session phase.
///
/// Non-admins asking for the staff screen bounce to the login page, the
/// same as anonymous visitors; there is no separate forbidden screen.
pub fn decide(target: RouteTarget, state: &SessionState) -> GuardDecision {
    match state.phase() {
        SessionPhase::Unknown => GuardDecision::Wait,
        SessionPhase::Authenticated => match target {
            RouteTarget::Login | RouteTarget::Fallback => GuardDecision::ToPatients,
            RouteTarget::Patients => GuardDecision::Stay,
            RouteTarget::Staff => {
                if state.is_admin() {
                    GuardDecision::Stay
                } else {
                    GuardDecision::ToLogin
                }
            }
        },
        SessionPhase::Anonymous => match target {
            RouteTarget::Login => GuardDecision::Stay,
            RouteTarget::Patients | RouteTarget::Staff | RouteTarget::Fallback => GuardDecision::ToLogin,
        },
    }
}

fn replace_options() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

/// Re-apply the decision table whenever the session changes, navigating
/// with history replacement when the decision is a redirect.
pub fn install_route_guard<F>(target: RouteTarget, session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || match decide(target, &session.get()) {
        GuardDecision::ToLogin => navigate("/login", replace_options()),
        GuardDecision::ToPatients => navigate("/patients", replace_options()),
        GuardDecision::Wait | GuardDecision::Stay => {}
    });
}
