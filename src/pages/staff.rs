//! Staff list page, the admin-only account management screen.
//!
//! Same list-and-dialogs shape as the patient page. The route guard sends
//! non-admins to `/login`; there is no forbidden screen.

#[cfg(test)]
#[path = "staff_test.rs"]
mod staff_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::tab_header::TabHeader;
use crate::components::user_form::UserForm;
use crate::net::types::User;
use crate::state::session::SessionState;
use crate::util::dates;
use crate::util::guard::{self, GuardDecision, RouteTarget};

fn created_cell(user: &User) -> String {
    dates::date_part(&user.created_at).to_owned()
}

fn delete_message(email: &str) -> String {
    format!("This will permanently remove access for {email}.")
}

/// Staff list page: table of portal accounts with add, edit, and delete.
#[component]
pub fn StaffPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_route_guard(RouteTarget::Staff, session, navigate);

    let users = LocalResource::new(|| crate::net::api::fetch_users());

    Effect::new(move || {
        if let Some(Err(err)) = users.get() {
            if err.is_unauthorized() {
                crate::state::session::expire(session);
            }
        }
    });

    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<User>);
    let delete_target = RwSignal::new(None::<User>);
    let action_error = RwSignal::new(None::<&'static str>);

    let on_add = move |_| {
        editing.set(None);
        show_form.set(true);
    };

    let on_form_cancel = Callback::new(move |_| show_form.set(false));
    let on_saved = Callback::new(move |_| {
        show_form.set(false);
        editing.set(None);
        users.refetch();
    });

    let on_delete_cancel = Callback::new(move |_| delete_target.set(None));
    let on_confirm_delete = Callback::new(move |_| {
        let Some(user) = delete_target.get_untracked() else {
            return;
        };
        action_error.set(None);
        delete_target.set(None);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_user(&user.id).await {
                Ok(()) => users.refetch(),
                Err(err) if err.is_unauthorized() => crate::state::session::expire(session),
                Err(err) => {
                    leptos::logging::warn!("user delete failed: {err}");
                    action_error.set(Some("Failed to delete user. Please try again."));
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = user;
        }
    });

    view! {
        <Show
            when=move || guard::decide(RouteTarget::Staff, &session.get()) == GuardDecision::Stay
            fallback=move || {
                view! {
                    <div class="list-page">
                        <p class="list-page__loading">
                            {move || if session.get().loading { "Loading..." } else { "Redirecting to login..." }}
                        </p>
                    </div>
                }
            }
        >
            <div class="list-page">
                <TabHeader/>
                <main class="list-page__body">
                    <header class="list-page__header">
                        <h1 class="list-page__title">"Staff List"</h1>
                        <button class="btn btn--primary" on:click=on_add>
                            "+ Add User"
                        </button>
                    </header>

                    <Show when=move || action_error.get().is_some()>
                        <p class="list-page__error">{move || action_error.get().unwrap_or_default()}</p>
                    </Show>

                    <Suspense fallback=move || view! { <p class="list-page__loading">"Loading users..."</p> }>
                        {move || {
                            users
                                .get()
                                .map(|fetched| match fetched {
                                    Ok(list) => {
                                        if list.is_empty() {
                                            view! { <p class="list-page__empty">"No users found."</p> }
                                                .into_any()
                                        } else {
                                            view! {
                                                <table class="data-table">
                                                    <thead>
                                                        <tr>
                                                            <th>"Email"</th>
                                                            <th>"Role"</th>
                                                            <th>"Hospital"</th>
                                                            <th>"Created"</th>
                                                            <th></th>
                                                        </tr>
                                                    </thead>
                                                    <tbody>
                                                        {list
                                                            .into_iter()
                                                            .map(|user| {
                                                                let edit_user = user.clone();
                                                                let delete_user = user.clone();
                                                                view! {
                                                                    <tr>
                                                                        <td class="data-table__name">{user.email.clone()}</td>
                                                                        <td>{user.role.as_str()}</td>
                                                                        <td>{user.hospital_id.clone()}</td>
                                                                        <td>{created_cell(&user)}</td>
                                                                        <td class="data-table__actions">
                                                                            <button
                                                                                class="btn btn--small"
                                                                                on:click=move |_| {
                                                                                    editing.set(Some(edit_user.clone()));
                                                                                    show_form.set(true);
                                                                                }
                                                                            >
                                                                                "Edit"
                                                                            </button>
                                                                            <button
                                                                                class="btn btn--small btn--danger"
                                                                                on:click=move |_| {
                                                                                    delete_target.set(Some(delete_user.clone()));
                                                                                }
                                                                            >
                                                                                "Delete"
                                                                            </button>
                                                                        </td>
                                                                    </tr>
                                                                }
                                                            })
                                                            .collect::<Vec<_>>()}
                                                    </tbody>
                                                </table>
                                            }
                                                .into_any()
                                        }
                                    }
                                    Err(_) => {
                                        view! {
                                            <div class="list-page__failure">
                                                <p>"Failed to load users."</p>
                                                <button class="btn" on:click=move |_| users.refetch()>
                                                    "Retry"
                                                </button>
                                            </div>
                                        }
                                            .into_any()
                                    }
                                })
                        }}
                    </Suspense>
                </main>

                <Show when=move || show_form.get()>
                    <UserForm user=editing.get() on_saved=on_saved on_cancel=on_form_cancel/>
                </Show>

                <Show when=move || delete_target.get().is_some()>
                    <ConfirmDialog
                        title="Delete User"
                        message=delete_target.get().map(|user| delete_message(&user.email)).unwrap_or_default()
                        confirm_label="Delete"
                        on_confirm=on_confirm_delete
                        on_cancel=on_delete_cancel
                    />
                </Show>
            </div>
        </Show>
    }
}
