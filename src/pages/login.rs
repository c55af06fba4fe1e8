//! Sign-in page, the only route an anonymous visitor can stay on.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "csr"))]
use crate::net::api::ApiError;
use crate::state::session::SessionState;
use crate::util::guard::{self, GuardDecision, RouteTarget};

/// Banner copy for a failed sign-in: the server's own message when it sent
/// one, otherwise a generic line.
#[cfg(any(test, feature = "csr"))]
fn login_banner_message(err: &ApiError) -> String {
    err.server_message().map_or_else(|| "Login failed".to_owned(), ToOwned::to_owned)
}

/// Login page: credential form plus the demo account panel.
/// Already-authenticated visitors are bounced to `/patients` by the guard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_route_guard(RouteTarget::Login, session, navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let show_password = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "csr")]
        {
            let email_value = email.get();
            let password_value = password.get();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::state::session::login(session, &email_value, &password_value).await {
                    Ok(()) => navigate("/patients", leptos_router::NavigateOptions::default()),
                    Err(err) => error.set(login_banner_message(&err)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &navigate;
            busy.set(false);
        }
    };

    view! {
        <Show
            when=move || guard::decide(RouteTarget::Login, &session.get()) == GuardDecision::Stay
            fallback=move || {
                view! {
                    <p class="app-loading">
                        {move || if session.get().loading { "Loading..." } else { "Redirecting..." }}
                    </p>
                }
            }
        >
            {
                let on_submit = on_submit.clone();
                view! {
                    <div class="login-page">
                        <div class="login-card">
                            <header class="login-card__header">
                                <h1 class="login-card__title">"Healthcare Portal"</h1>
                                <p class="login-card__subtitle">"Secure access to patient management"</p>
                            </header>

                            <form class="login-form" on:submit=on_submit>
                                <Show when=move || !error.get().is_empty()>
                                    <p class="login-form__error" role="alert">{move || error.get()}</p>
                                </Show>

                                <label class="login-form__label">
                                    "Email Address"
                                    <input
                                        class="login-form__input"
                                        type="email"
                                        autocomplete="email"
                                        required=true
                                        placeholder="Enter your email address"
                                        prop:value=move || email.get()
                                        on:input=move |ev| email.set(event_target_value(&ev))
                                    />
                                </label>

                                <label class="login-form__label">
                                    "Password"
                                    <div class="login-form__password">
                                        <input
                                            class="login-form__input"
                                            type=move || if show_password.get() { "text" } else { "password" }
                                            autocomplete="current-password"
                                            required=true
                                            placeholder="Enter your password"
                                            prop:value=move || password.get()
                                            on:input=move |ev| password.set(event_target_value(&ev))
                                        />
                                        <button
                                            class="login-form__toggle"
                                            type="button"
                                            tabindex="-1"
                                            on:click=move |_| show_password.update(|shown| *shown = !*shown)
                                        >
                                            {move || if show_password.get() { "Hide" } else { "Show" }}
                                        </button>
                                    </div>
                                </label>

                                <button
                                    class="btn btn--primary login-form__submit"
                                    type="submit"
                                    disabled=move || busy.get()
                                >
                                    {move || if busy.get() { "Signing you in..." } else { "Sign In" }}
                                </button>
                            </form>

                            <div class="login-demo">
                                <p class="login-demo__title">"Demo Credentials"</p>
                                <p class="login-demo__row">
                                    "Email: " <span class="login-demo__value">"admin@general.com"</span>
                                </p>
                                <p class="login-demo__row">
                                    "Password: " <span class="login-demo__value">"password"</span>
                                </p>
                            </div>
                        </div>

                        <p class="login-page__footer">"© 2025 Healthcare Portal. Secure & Compliant."</p>
                    </div>
                }
            }
        </Show>
    }
}
