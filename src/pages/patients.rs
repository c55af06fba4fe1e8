//! Patient list page with create, edit, and delete flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The list is fetched on mount
//! and refetched after every accepted write; nothing is patched locally,
//! the backend copy is the one that counts.

#[cfg(test)]
#[path = "patients_test.rs"]
mod patients_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::patient_form::PatientForm;
use crate::components::tab_header::TabHeader;
use crate::net::types::Patient;
use crate::state::session::SessionState;
use crate::util::dates;
use crate::util::guard::{self, GuardDecision, RouteTarget};

fn birth_date_cell(patient: &Patient) -> String {
    patient
        .date_of_birth
        .as_deref()
        .map_or_else(String::new, |raw| dates::date_part(raw).to_owned())
}

fn created_cell(patient: &Patient) -> String {
    dates::date_part(&patient.created_at).to_owned()
}

/// Optional columns show a dash rather than an empty cell.
fn text_cell(value: Option<&str>) -> String {
    value.unwrap_or("-").to_owned()
}

/// Patient list page: table of records with add, edit, and delete.
/// Redirects to `/login` if the visitor is not signed in.
#[component]
pub fn PatientsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_route_guard(RouteTarget::Patients, session, navigate);

    // Patient list resource, fetched on mount.
    let patients = LocalResource::new(|| crate::net::api::fetch_patients());

    // A rejected cookie on the list fetch expires the session; the guard
    // then takes the page to login.
    Effect::new(move || {
        if let Some(Err(err)) = patients.get() {
            if err.is_unauthorized() {
                crate::state::session::expire(session);
            }
        }
    });

    // Form and delete dialog state.
    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<Patient>);
    let delete_target = RwSignal::new(None::<Patient>);
    let action_error = RwSignal::new(None::<&'static str>);

    let on_add = move |_| {
        editing.set(None);
        show_form.set(true);
    };

    let on_form_cancel = Callback::new(move |_| show_form.set(false));
    let on_saved = Callback::new(move |_| {
        show_form.set(false);
        editing.set(None);
        patients.refetch();
    });

    let on_delete_cancel = Callback::new(move |_| delete_target.set(None));
    let on_confirm_delete = Callback::new(move |_| {
        let Some(patient) = delete_target.get_untracked() else {
            return;
        };
        action_error.set(None);
        delete_target.set(None);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_patient(&patient.id).await {
                Ok(()) => patients.refetch(),
                Err(err) if err.is_unauthorized() => crate::state::session::expire(session),
                Err(err) => {
                    leptos::logging::warn!("patient delete failed: {err}");
                    action_error.set(Some("Failed to delete patient. Please try again."));
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = patient;
        }
    });

    view! {
        <Show
            when=move || guard::decide(RouteTarget::Patients, &session.get()) == GuardDecision::Stay
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
                        <h1 class="list-page__title">"Patients"</h1>
                        <button class="btn btn--primary" on:click=on_add>
                            "+ Add Patient"
                        </button>
                    </header>

                    <Show when=move || action_error.get().is_some()>
                        <p class="list-page__error">{move || action_error.get().unwrap_or_default()}</p>
                    </Show>

                    <Suspense fallback=move || view! { <p class="list-page__loading">"Loading patients..."</p> }>
                        {move || {
                            patients
                                .get()
                                .map(|fetched| match fetched {
                                    Ok(list) => {
                                        if list.is_empty() {
                                            view! { <p class="list-page__empty">"No patients found."</p> }
                                                .into_any()
                                        } else {
                                            view! {
                                                <table class="data-table">
                                                    <thead>
                                                        <tr>
                                                            <th>"Full Name"</th>
                                                            <th>"Date of Birth"</th>
                                                            <th>"Gender"</th>
                                                            <th>"Mobile"</th>
                                                            <th>"Created"</th>
                                                            <th></th>
                                                        </tr>
                                                    </thead>
                                                    <tbody>
                                                        {list
                                                            .into_iter()
                                                            .map(|patient| {
                                                                let edit_patient = patient.clone();
                                                                let delete_patient = patient.clone();
                                                                view! {
                                                                    <tr>
                                                                        <td class="data-table__name">{patient.full_name.clone()}</td>
                                                                        <td>{birth_date_cell(&patient)}</td>
                                                                        <td>{text_cell(patient.gender.as_deref())}</td>
                                                                        <td>{text_cell(patient.mobile.as_deref())}</td>
                                                                        <td>{created_cell(&patient)}</td>
                                                                        <td class="data-table__actions">
                                                                            <button
                                                                                class="btn btn--small"
                                                                                on:click=move |_| {
                                                                                    editing.set(Some(edit_patient.clone()));
                                                                                    show_form.set(true);
                                                                                }
                                                                            >
                                                                                "Edit"
                                                                            </button>
                                                                            <button
                                                                                class="btn btn--small btn--danger"
                                                                                on:click=move |_| {
                                                                                    delete_target.set(Some(delete_patient.clone()));
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
                                                <p>"Failed to load patients."</p>
                                                <button class="btn" on:click=move |_| patients.refetch()>
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
                    <PatientForm patient=editing.get() on_saved=on_saved on_cancel=on_form_cancel/>
                </Show>

                <Show when=move || delete_target.get().is_some()>
                    <ConfirmDialog
                        title="Delete Patient"
                        message="This will permanently remove the patient record."
                        confirm_label="Delete"
                        on_confirm=on_confirm_delete
                        on_cancel=on_delete_cancel
                    />
                </Show>
            </div>
        </Show>
    }
}
