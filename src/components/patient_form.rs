//! Patient create/edit dialog.
//!
//! DESIGN
//! ======
//! Validation runs on submit; each field's error clears the moment the user
//! edits that field again. Optional fields left blank are omitted from the
//! payload entirely rather than sent as empty strings.

#[cfg(test)]
#[path = "patient_form_test.rs"]
mod patient_form_test;

use chrono::NaiveDate;
use leptos::prelude::*;
use regex::Regex;

use crate::net::types::{Patient, PatientPayload};
use crate::state::session::SessionState;
use crate::util::dates;

/// Optional leading `+`, then at least ten characters drawn from digits,
/// whitespace, parentheses, and dashes.
static MOBILE_RE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^\+?[0-9\s()-]{10,}$").expect("static regex should not panic")
});

fn validate_full_name(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some("Full name is required")
    } else if trimmed.chars().count() < 2 {
        Some("Full name must be at least 2 characters")
    } else {
        None
    }
}

/// Blank is fine; the field is optional. Validation sees the raw value,
/// while the payload later trims it.
fn validate_mobile(value: &str) -> Option<&'static str> {
    if !value.is_empty() && !MOBILE_RE.is_match(value) {
        Some("Please enter a valid mobile number")
    } else {
        None
    }
}

fn validate_birth_date(value: &str, today: NaiveDate) -> Option<&'static str> {
    if !value.is_empty() && dates::is_future_date(value, today) {
        Some("Date of birth cannot be in the future")
    } else {
        None
    }
}

#[cfg(any(test, feature = "csr"))]
fn build_patient_payload(full_name: &str, date_of_birth: &str, gender: &str, mobile: &str) -> PatientPayload {
    let mobile = mobile.trim();
    PatientPayload {
        full_name: full_name.trim().to_owned(),
        date_of_birth: (!date_of_birth.is_empty()).then(|| date_of_birth.to_owned()),
        gender: (!gender.is_empty()).then(|| gender.to_owned()),
        mobile: (!mobile.is_empty()).then(|| mobile.to_owned()),
    }
}

/// Modal form for creating or editing a patient record.
///
/// Pass `patient` to edit; leave it out to create. `on_saved` fires after
/// the backend accepted the write so the list can refetch.
#[component]
pub fn PatientForm(
    #[prop(optional_no_strip)] patient: Option<Patient>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let editing = patient.is_some();
    let patient_id = patient.as_ref().map(|p| p.id.clone());

    let full_name = RwSignal::new(patient.as_ref().map(|p| p.full_name.clone()).unwrap_or_default());
    let date_of_birth = RwSignal::new(
        patient
            .as_ref()
            .and_then(|p| p.date_of_birth.as_deref())
            .map(|raw| dates::date_part(raw).to_owned())
            .unwrap_or_default(),
    );
    let gender = RwSignal::new(patient.as_ref().and_then(|p| p.gender.clone()).unwrap_or_default());
    let mobile = RwSignal::new(patient.as_ref().and_then(|p| p.mobile.clone()).unwrap_or_default());

    let full_name_error = RwSignal::new(None::<&'static str>);
    let birth_error = RwSignal::new(None::<&'static str>);
    let mobile_error = RwSignal::new(None::<&'static str>);
    let save_failed = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let max_birth_date = dates::iso_date(dates::today());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        let name_err = validate_full_name(&full_name.get());
        let birth_err = validate_birth_date(&date_of_birth.get(), dates::today());
        let mobile_err = validate_mobile(&mobile.get());
        full_name_error.set(name_err);
        birth_error.set(birth_err);
        mobile_error.set(mobile_err);
        if name_err.is_some() || birth_err.is_some() || mobile_err.is_some() {
            return;
        }

        busy.set(true);
        save_failed.set(false);

        #[cfg(feature = "csr")]
        {
            let payload =
                build_patient_payload(&full_name.get(), &date_of_birth.get(), &gender.get(), &mobile.get());
            let id = patient_id.clone();
            leptos::task::spawn_local(async move {
                let result = match id.as_deref() {
                    Some(id) => crate::net::api::update_patient(id, &payload).await,
                    None => crate::net::api::create_patient(&payload).await,
                };
                busy.set(false);
                match result {
                    Ok(()) => on_saved.run(()),
                    Err(err) if err.is_unauthorized() => crate::state::session::expire(session),
                    Err(err) => {
                        leptos::logging::warn!("patient save failed: {err}");
                        save_failed.set(true);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &patient_id;
            let _ = session;
            busy.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--form" on:click=move |ev| ev.stop_propagation()>
                <h2>{if editing { "Edit Patient" } else { "Add New Patient" }}</h2>

                <Show when=move || save_failed.get()>
                    <p class="dialog__alert">"Failed to save patient. Please try again."</p>
                </Show>

                <form on:submit=on_submit>
                    <label class="dialog__label">
                        "Full Name *"
                        <input
                            class="dialog__input"
                            class:dialog__input--invalid=move || full_name_error.get().is_some()
                            type="text"
                            placeholder="Enter patient's full name"
                            prop:value=move || full_name.get()
                            on:input=move |ev| {
                                full_name.set(event_target_value(&ev));
                                full_name_error.set(None);
                            }
                        />
                    </label>
                    <Show when=move || full_name_error.get().is_some()>
                        <p class="dialog__field-error">{move || full_name_error.get().unwrap_or_default()}</p>
                    </Show>

                    <label class="dialog__label">
                        "Date of Birth"
                        <input
                            class="dialog__input"
                            class:dialog__input--invalid=move || birth_error.get().is_some()
                            type="date"
                            max=max_birth_date
                            prop:value=move || date_of_birth.get()
                            on:input=move |ev| {
                                date_of_birth.set(event_target_value(&ev));
                                birth_error.set(None);
                            }
                        />
                    </label>
                    <Show when=move || birth_error.get().is_some()>
                        <p class="dialog__field-error">{move || birth_error.get().unwrap_or_default()}</p>
                    </Show>

                    <label class="dialog__label">
                        "Gender"
                        <select
                            class="dialog__input"
                            prop:value=move || gender.get()
                            on:change=move |ev| gender.set(event_target_value(&ev))
                        >
                            <option value="">"Select gender"</option>
                            <option value="Male">"Male"</option>
                            <option value="Female">"Female"</option>
                            <option value="Other">"Other"</option>
                            <option value="Prefer not to say">"Prefer not to say"</option>
                        </select>
                    </label>

                    <label class="dialog__label">
                        "Mobile Number"
                        <input
                            class="dialog__input"
                            class:dialog__input--invalid=move || mobile_error.get().is_some()
                            type="tel"
                            placeholder="e.g., +1234567890"
                            prop:value=move || mobile.get()
                            on:input=move |ev| {
                                mobile.set(event_target_value(&ev));
                                mobile_error.set(None);
                            }
                        />
                    </label>
                    <Show when=move || mobile_error.get().is_some()>
                        <p class="dialog__field-error">{move || mobile_error.get().unwrap_or_default()}</p>
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
                                    "Update Patient"
                                } else {
                                    "Add Patient"
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
