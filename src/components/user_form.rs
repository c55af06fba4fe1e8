//! Staff account create/edit dialog.
//!
//! DESIGN
//! ======
//! Same submit-time validation scheme as the patient form. The email is
//! immutable once the account exists (the input is disabled on edit), and
//! the password is collected only when creating; updates never send one.

#[cfg(test)]
#[path = "user_form_test.rs"]
mod user_form_test;

use leptos::prelude::*;
use regex::Regex;

use crate::net::types::{Role, User, UserPayload};
use crate::state::session::SessionState;

/// Local part of word characters, dots, and dashes; at least one domain
/// label; a final label of two or more word characters.
static EMAIL_RE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^[\w.-]+@([\w-]+\.)+[\w-]{2,}$").expect("static regex should not panic")
});

/// The raw value is matched, not the trimmed one; stray spaces fail the
/// pattern. The payload trims afterwards.
fn validate_email(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some("Email is required")
    } else if !EMAIL_RE.is_match(value) {
        Some("Invalid email address")
    } else {
        None
    }
}

fn validate_role(value: &str) -> Option<&'static str> {
    if value.is_empty() { Some("Role is required") } else { None }
}

fn validate_password(value: &str, editing: bool) -> Option<&'static str> {
    if !editing && value.chars().count() < 4 {
        Some("Password (min 4 chars) is required for new users")
    } else {
        None
    }
}

#[cfg(any(test, feature = "csr"))]
fn build_user_payload(email: &str, role: Role, password: Option<String>) -> UserPayload {
    UserPayload {
        email: email.trim().to_owned(),
        role,
        password,
    }
}

/// Modal form for creating or editing a portal account.
///
/// Pass `user` to edit; leave it out to create. `on_saved` fires after the
/// backend accepted the write so the list can refetch.
#[component]
pub fn UserForm(
    #[prop(optional_no_strip)] user: Option<User>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let editing = user.is_some();
    let user_id = user.as_ref().map(|u| u.id.clone());

    let email = RwSignal::new(user.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let role = RwSignal::new(user.as_ref().map(|u| u.role.as_str().to_owned()).unwrap_or_default());
    let password = RwSignal::new(String::new());

    let email_error = RwSignal::new(None::<&'static str>);
    let role_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);
    let save_failed = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        let email_err = validate_email(&email.get());
        let role_err = validate_role(&role.get());
        let password_err = validate_password(&password.get(), editing);
        email_error.set(email_err);
        role_error.set(role_err);
        password_error.set(password_err);
        if email_err.is_some() || role_err.is_some() || password_err.is_some() {
            return;
        }
        let Some(role_value) = Role::parse(&role.get()) else {
            role_error.set(Some("Role is required"));
            return;
        };

        busy.set(true);
        save_failed.set(false);

        #[cfg(feature = "csr")]
        {
            let payload =
                build_user_payload(&email.get(), role_value, (!editing).then(|| password.get()));
            let id = user_id.clone();
            leptos::task::spawn_local(async move {
                let result = match id.as_deref() {
                    Some(id) => crate::net::api::update_user(id, &payload).await,
                    None => crate::net::api::create_user(&payload).await,
                };
                busy.set(false);
                match result {
                    Ok(()) => on_saved.run(()),
                    Err(err) if err.is_unauthorized() => crate::state::session::expire(session),
                    Err(err) => {
                        leptos::logging::warn!("user save failed: {err}");
                        save_failed.set(true);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = role_value;
            let _ = &user_id;
            let _ = session;
            busy.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--form" on:click=move |ev| ev.stop_propagation()>
                <h2>{if editing { "Edit User" } else { "Add New User" }}</h2>

                <Show when=move || save_failed.get()>
                    <p class="dialog__alert">"Failed to save user. Please try again."</p>
                </Show>

                <form on:submit=on_submit>
                    <label class="dialog__label">
                        "Email *"
                        <input
                            class="dialog__input"
                            class:dialog__input--invalid=move || email_error.get().is_some()
                            type="email"
                            placeholder="Enter user email"
                            disabled=editing
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                email.set(event_target_value(&ev));
                                email_error.set(None);
                            }
                        />
                    </label>
                    <Show when=move || email_error.get().is_some()>
                        <p class="dialog__field-error">{move || email_error.get().unwrap_or_default()}</p>
                    </Show>

                    <label class="dialog__label">
                        "Role *"
                        <select
                            class="dialog__input"
                            class:dialog__input--invalid=move || role_error.get().is_some()
                            prop:value=move || role.get()
                            on:change=move |ev| {
                                role.set(event_target_value(&ev));
                                role_error.set(None);
                            }
                        >
                            <option value="">"Select role"</option>
                            <option value="ADMIN">"Admin"</option>
                            <option value="STAFF">"Staff"</option>
                        </select>
                    </label>
                    <Show when=move || role_error.get().is_some()>
                        <p class="dialog__field-error">{move || role_error.get().unwrap_or_default()}</p>
                    </Show>

                    <Show when=move || !editing>
                        <label class="dialog__label">
                            "Password *"
                            <input
                                class="dialog__input"
                                class:dialog__input--invalid=move || password_error.get().is_some()
                                type="password"
                                placeholder="Set a password"
                                prop:value=move || password.get()
                                on:input=move |ev| {
                                    password.set(event_target_value(&ev));
                                    password_error.set(None);
                                }
                            />
                        </label>
                        <Show when=move || password_error.get().is_some()>
                            <p class="dialog__field-error">{move || password_error.get().unwrap_or_default()}</p>
                        </Show>
                    </Show>

                    <div class="dialog__actions">
                        <button
                            class="btn"
                            type="button"
                            disabled=move || busy.get()
                            on:click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || {
                                if busy.get() {
                                    "Saving..."
                                } else if editing {
                                    "Update User"
                                } else {
                                    "Add User"
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
