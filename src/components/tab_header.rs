//! Navigation header shared by the list screens.
//!
//! Shows the Patients tab for everyone, the Staff List tab for admins only,
//! plus the signed-in identity and a logout button.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::SessionState;

#[component]
pub fn TabHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    let navigate_patients = navigate.clone();
    let navigate_staff = navigate.clone();

    let self_identity = move || {
        session
            .get()
            .user
            .map(|user| (user.email, user.role.as_str()))
            .unwrap_or_else(|| (String::new(), ""))
    };

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                crate::state::session::logout(session).await;
            });
        }
    };

    view! {
        <header class="tabs">
            <nav class="tabs__nav" aria-label="Tabs">
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || pathname.get() == "/patients"
                    aria-current=move || (pathname.get() == "/patients").then_some("page")
                    on:click=move |_| navigate_patients("/patients", NavigateOptions::default())
                >
                    "Patients"
                </button>
                <Show when=move || session.get().is_admin()>
                    {
                        let navigate = navigate_staff.clone();
                        view! {
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || pathname.get() == "/staff"
                                aria-current=move || (pathname.get() == "/staff").then_some("page")
                                on:click=move |_| navigate("/staff", NavigateOptions::default())
                            >
                                "Staff List"
                            </button>
                        }
                    }
                </Show>
            </nav>

            <span class="tabs__spacer"></span>

            <span class="tabs__self">
                {move || self_identity().0}
                " ("
                <span class="tabs__self-role">{move || self_identity().1}</span>
                ")"
            </span>

            <button class="btn tabs__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
