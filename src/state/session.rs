//! Cookie-session state for the signed-in portal user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single `RwSignal<SessionState>` is provided from the app root and read
//! by route guards, the tab header, and every page. All writes go through
//! the functions in this module so the session has exactly one writer.
//!
//! The state moves through three phases: `Unknown` while the startup probe
//! is in flight, then `Authenticated` or `Anonymous`. Login and logout flip
//! between the settled phases; a 401 from any endpoint expires the session
//! via `expire`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::{self, ApiError};
use crate::net::types::{AuthEnvelope, User};

/// Session snapshot: who is signed in, and whether we know yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for SessionState {
    /// Starts in the probing phase; guards hold routing until it settles.
    fn default() -> Self {
        SessionState { user: None, loading: true }
    }
}

/// The three phases of the session lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Startup probe still in flight.
    Unknown,
    /// Probe or login produced a user.
    Authenticated,
    /// Probe settled without a user, or the user signed out.
    Anonymous,
}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::Unknown
        } else if self.user.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }
}

fn envelope_user(envelope: AuthEnvelope) -> Option<User> {
    if envelope.success { envelope.user } else { None }
}

fn login_outcome(envelope: AuthEnvelope) -> Result<User, ApiError> {
    match envelope {
        AuthEnvelope { success: true, user: Some(user) } => Ok(user),
        _ => Err(ApiError::Decode("login response missing user".to_owned())),
    }
}

fn apply_session_check(state: &mut SessionState, user: Option<User>) {
    if let Some(user) = user {
        state.user = Some(user);
    }
    state.loading = false;
}

fn apply_login(state: &mut SessionState, user: User) {
    state.user = Some(user);
}

fn apply_signout(state: &mut SessionState) {
    state.user = None;
}

/// Startup probe: ask the backend who the cookie belongs to.
///
/// Always settles `loading`, whatever the probe returned. A rejected or
/// unreachable backend reads as signed out; only unexpected failures are
/// logged.
pub async fn check_session(session: RwSignal<SessionState>) {
    let user = match api::fetch_session().await {
        Ok(envelope) => envelope_user(envelope),
        Err(err) => {
            if !err.is_unauthorized() {
                leptos::logging::warn!("session probe failed: {err}");
            }
            None
        }
    };
    session.update(|state| apply_session_check(state, user));
}

/// Sign in and store the returned user on success.
///
/// # Errors
///
/// Propagates the `ApiError` from the login call; a 2xx envelope without a
/// user is reported as a decode failure. The session is left untouched on
/// any error.
pub async fn login(session: RwSignal<SessionState>, email: &str, password: &str) -> Result<(), ApiError> {
    let envelope = api::login(email, password).await?;
    let user = login_outcome(envelope)?;
    session.update(|state| apply_login(state, user));
    Ok(())
}

/// Sign out: best-effort server invalidation, then drop the local user.
///
/// The local user is cleared even when the logout call fails, matching the
/// cookie being the real source of truth.
pub async fn logout(session: RwSignal<SessionState>) {
    if let Err(err) = api::logout().await {
        leptos::logging::warn!("logout request failed: {err}");
    }
    session.update(apply_signout);
}

/// Drop the in-memory user after the backend rejected the session cookie.
/// Route guards then bounce to the login page.
pub fn expire(session: RwSignal<SessionState>) {
    session.update(apply_signout);
}
