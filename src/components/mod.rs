//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render screen chrome and form dialogs while reading shared
//! session state from Leptos context providers.

pub mod confirm_dialog;
pub mod patient_form;
pub mod tab_header;
pub mod user_form;
